// src/views/sort_container.rs
//
// Owns the tiles and the status. The sort itself is delegated to the
// animator; the container only wraps tiles as sortable items, starts the
// run and reacts when it finishes.

use nannou::prelude::*;
use rand::Rng;

use super::status::{StatusBoard, VisualStatus};
use crate::config::TileConfig;
use crate::models::{SortValue, SortableItem, TileStore, TileStyle, ValueKind};
use crate::sorting::{BubbleSortAnimator, SortError, SortEvent, SortStart};

// gap between tiles is half a tile
const TILE_SPACING: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct TileLayout {
    pub origin: Point2, // page space, top-left
    pub size: Vec2,
    pub style: TileStyle,
}

impl TileLayout {
    pub fn slot_position(&self, index: usize) -> Point2 {
        pt2(
            self.origin.x + index as f32 * TILE_SPACING * self.size.x,
            self.origin.y,
        )
    }
}

impl From<&TileConfig> for TileLayout {
    fn from(config: &TileConfig) -> Self {
        Self {
            origin: pt2(config.origin[0], config.origin[1]),
            size: vec2(config.width, config.height),
            style: TileStyle {
                background: config.background_color(),
                text: config.text_color(),
            },
        }
    }
}

pub struct SortContainer {
    tiles: TileStore,
    layout: TileLayout,
    animator: BubbleSortAnimator,
    status_board: StatusBoard,
    status: VisualStatus,
    old_values: Vec<SortValue>,
    random: rand::rngs::ThreadRng,
}

impl SortContainer {
    pub fn new(layout: TileLayout, animator: BubbleSortAnimator, status_board: StatusBoard) -> Self {
        Self {
            tiles: TileStore::new(),
            layout,
            animator,
            status_board,
            status: VisualStatus::Empty,
            old_values: Vec::new(),
            random: rand::thread_rng(),
        }
    }

    /// Appends `count` tiles holding random values in 0..100.
    pub fn mount_elements(&mut self, count: usize) -> Result<(), SortError> {
        let values: Vec<i64> = (0..count).map(|_| self.random.gen_range(0..100)).collect();
        self.mount_values(&values)
    }

    pub fn mount_values(&mut self, values: &[i64]) -> Result<(), SortError> {
        if self.animator.is_running() {
            return Err(SortError::Busy);
        }

        for value in values {
            let position = self.layout.slot_position(self.tiles.len());
            self.tiles
                .insert(value.to_string(), position, self.layout.size, self.layout.style);
        }

        if !values.is_empty() {
            log::debug!("Mounted {} tiles", values.len());
            self.set_status(VisualStatus::Filled);
        }
        Ok(())
    }

    pub fn clear_container(&mut self) -> Result<(), SortError> {
        if self.animator.is_running() {
            return Err(SortError::Busy);
        }
        self.tiles.clear();
        self.set_status(VisualStatus::Empty);
        Ok(())
    }

    /// Starts the animated sort over the tiles in their on-screen order.
    pub fn show_sorting(&mut self) -> Result<(), SortError> {
        if self.animator.is_running() {
            return Err(SortError::Busy);
        }

        let items: Vec<SortableItem> = self
            .tiles
            .ids_by_position()
            .into_iter()
            .map(|id| SortableItem::new(id, ValueKind::Number))
            .collect();
        // unreadable tiles keep their raw text so the snapshot lines up
        self.old_values = items
            .iter()
            .map(|item| {
                item.value(&self.tiles).unwrap_or_else(|e| {
                    log::warn!("Snapshot of tile {:?}: {}", item.tile, e);
                    let raw = self.tiles.get(item.tile).map(|t| t.text.clone());
                    SortValue::Text(raw.unwrap_or_default())
                })
            })
            .collect();
        self.set_status(VisualStatus::Sorting);

        match self.animator.sort(items, &self.tiles)? {
            SortStart::Started => {}
            SortStart::Empty => self.set_status(VisualStatus::Finished),
        }
        Ok(())
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(event) = self.animator.update(dt, &mut self.tiles) {
            self.apply_event(event);
        }
    }

    // Blocks until the running sort is done, stepping by `dt`.
    pub fn complete_sorting(&mut self, dt: f32) {
        if let Some(event) = self.animator.run_to_completion(&mut self.tiles, dt) {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: SortEvent) {
        match event {
            SortEvent::Finished { items, stats } => {
                log::info!(
                    "Sorted {} tiles ({} swaps)",
                    items.len(),
                    stats.swaps
                );
                self.set_status(VisualStatus::Finished);
            }
        }
    }

    fn set_status(&mut self, status: VisualStatus) {
        self.status = status;
        self.status_board
            .show(status, self.tiles.len(), &self.old_values);
    }

    pub fn status(&self) -> VisualStatus {
        self.status
    }

    pub fn status_lines(&self) -> &[String] {
        self.status_board.lines()
    }

    pub fn old_values(&self) -> &[SortValue] {
        &self.old_values
    }

    pub fn tiles(&self) -> &TileStore {
        &self.tiles
    }

    pub fn animator(&self) -> &BubbleSortAnimator {
        &self.animator
    }

    pub fn is_sorting(&self) -> bool {
        self.animator.is_running()
    }
}
