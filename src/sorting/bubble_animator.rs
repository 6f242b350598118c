// src/sorting/bubble_animator.rs
//
// Plays bubble sort on the tiles one comparison at a time.
//
// A run is a state machine advanced once per frame. Each step launches a
// group of tweens and the run only moves on once the whole group has
// settled, so two comparisons never overlap while the tweens inside one
// step (both halves of a swap, both tiles of a select) run together.

use thiserror::Error;

use super::highlight::Highlighter;
use crate::animation::{AnimationGroup, ArcSurface, Timeline, TweenTiming};
use crate::config::{PaletteConfig, TimingConfig};
use crate::models::{SortableItem, TileId, TileStore};

const HEADLESS_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[error("a sort run is already in progress")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStart {
    Started,
    Empty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub released: usize, // pairs deselected after their comparison
    pub settled: usize, // tiles given the finished color
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortEvent {
    Finished {
        items: Vec<SortableItem>,
        stats: RunStats,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NextPair,
    Compare,
    Swapped,
    Release,
    Advance,
    FinishFirst,
    Done,
}

#[derive(Debug)]
struct SortRun {
    items: Vec<SortableItem>,
    pass: usize,
    index: usize,
    phase: Phase,
    pending: AnimationGroup,
    surface: Option<ArcSurface>,
    stats: RunStats,
}

impl SortRun {
    fn new(items: Vec<SortableItem>) -> Self {
        Self {
            items,
            pass: 0,
            index: 0,
            phase: Phase::NextPair,
            pending: AnimationGroup::new(),
            surface: None,
            stats: RunStats::default(),
        }
    }

    // last index compared in the current pass, plus one
    fn window_end(&self) -> usize {
        self.items.len() - self.pass - 1
    }

    fn pair(&self) -> [TileId; 2] {
        [self.items[self.index].tile, self.items[self.index + 1].tile]
    }
}

#[derive(Debug, Default)]
enum AnimatorState {
    #[default]
    Idle,
    Running(SortRun),
}

pub struct BubbleSortAnimator {
    state: AnimatorState,
    timeline: Timeline,
    highlighter: Highlighter,
    swap_timing: TweenTiming,
}

impl BubbleSortAnimator {
    pub fn new(timing: &TimingConfig, palette: &PaletteConfig) -> Self {
        Self {
            state: AnimatorState::Idle,
            timeline: Timeline::new(),
            highlighter: Highlighter::new(timing, palette),
            swap_timing: TweenTiming {
                duration: timing.swap_duration,
                end_delay: 0.0,
                easing: timing.easing,
            },
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimatorState::Running(_))
    }

    /// Starts a run over `items`. The run owns the sequence until it hands
    /// it back, sorted, in `SortEvent::Finished`.
    pub fn sort(&mut self, items: Vec<SortableItem>, tiles: &TileStore) -> Result<SortStart, SortError> {
        if self.is_running() {
            log::warn!("Ignoring sort request: a run is already in progress");
            return Err(SortError::Busy);
        }
        if items.is_empty() {
            return Ok(SortStart::Empty);
        }

        self.highlighter.reset_defaults();
        if let Some(first) = tiles.get(items[0].tile) {
            self.highlighter.capture_defaults(first.style);
        }

        log::info!("Sorting {} tiles", items.len());
        self.state = AnimatorState::Running(SortRun::new(items));
        self.advance(tiles);
        Ok(SortStart::Started)
    }

    /// Ticks the tweens and moves the run on. Returns the finished event on
    /// the frame the run completes.
    pub fn update(&mut self, dt: f32, tiles: &mut TileStore) -> Option<SortEvent> {
        self.timeline.tick(dt, tiles);
        self.advance(tiles)
    }

    // Drives the current run to the end without a window.
    pub fn run_to_completion(&mut self, tiles: &mut TileStore, dt: f32) -> Option<SortEvent> {
        let dt = if dt > 0.0 { dt } else { HEADLESS_DT };
        while self.is_running() {
            if let Some(event) = self.update(dt, tiles) {
                return Some(event);
            }
        }
        None
    }

    // the working sequence of the active run
    pub fn sequence(&self) -> Option<&[SortableItem]> {
        match &self.state {
            AnimatorState::Running(run) => Some(&run.items),
            AnimatorState::Idle => None,
        }
    }

    pub fn stats(&self) -> Option<RunStats> {
        match &self.state {
            AnimatorState::Running(run) => Some(run.stats),
            AnimatorState::Idle => None,
        }
    }

    pub fn active_surface(&self) -> Option<&ArcSurface> {
        match &self.state {
            AnimatorState::Running(run) => run.surface.as_ref(),
            AnimatorState::Idle => None,
        }
    }

    fn advance(&mut self, tiles: &TileStore) -> Option<SortEvent> {
        let AnimatorState::Running(run) = &mut self.state else {
            return None;
        };

        while run.pending.is_settled(&self.timeline) {
            match run.phase {
                Phase::NextPair => {
                    if run.pass >= run.items.len() {
                        run.pending = self.highlighter.finish(&mut self.timeline, tiles, &[run.items[0].tile]);
                        run.stats.settled += 1;
                        run.phase = Phase::FinishFirst;
                    } else if run.index < run.window_end() {
                        run.pending = self.highlighter.select(&mut self.timeline, tiles, &run.pair());
                        run.phase = Phase::Compare;
                    } else {
                        run.pass += 1;
                        run.index = 0;
                    }
                }
                Phase::Compare => {
                    run.stats.comparisons += 1;
                    let (left, right) = (run.items[run.index], run.items[run.index + 1]);
                    let out_of_order = left.is_greater(&right, tiles).unwrap_or_else(|e| {
                        log::warn!("Cannot compare tiles {:?} and {:?}: {}", left.tile, right.tile, e);
                        false
                    });

                    if out_of_order {
                        log::debug!("pass {} index {}: swap", run.pass, run.index);
                        let (group, surface) = Self::start_swap(&mut self.timeline, tiles, left.tile, right.tile, self.swap_timing);
                        run.pending = group;
                        run.surface = surface;
                        run.phase = Phase::Swapped;
                    } else {
                        log::debug!("pass {} index {}: in order", run.pass, run.index);
                        run.phase = Phase::Release;
                    }
                }
                Phase::Swapped => {
                    run.items.swap(run.index, run.index + 1);
                    run.stats.swaps += 1;
                    run.surface = None;
                    run.phase = Phase::Release;
                }
                Phase::Release => {
                    let [lower, upper] = run.pair();
                    if run.index + 1 == run.window_end() {
                        // the upper tile is in its final place
                        let mut group = self.highlighter.deselect(&mut self.timeline, tiles, &[lower]);
                        group.join(self.highlighter.finish(&mut self.timeline, tiles, &[upper]));
                        run.pending = group;
                        run.stats.settled += 1;
                    } else {
                        run.pending = self.highlighter.deselect(&mut self.timeline, tiles, &[lower, upper]);
                    }
                    run.stats.released += 1;
                    run.phase = Phase::Advance;
                }
                Phase::Advance => {
                    run.index += 1;
                    run.phase = Phase::NextPair;
                }
                Phase::FinishFirst => {
                    run.phase = Phase::Done;
                }
                Phase::Done => break,
            }
        }

        if run.phase != Phase::Done {
            return None;
        }

        let AnimatorState::Running(run) = std::mem::take(&mut self.state) else {
            return None;
        };
        log::info!(
            "Sort finished: {} comparisons, {} swaps",
            run.stats.comparisons,
            run.stats.swaps
        );
        Some(SortEvent::Finished {
            items: run.items,
            stats: run.stats,
        })
    }

    // Sends both tiles along mirrored arcs at the same time.
    fn start_swap(
        timeline: &mut Timeline,
        tiles: &TileStore,
        left: TileId,
        right: TileId,
        timing: TweenTiming,
    ) -> (AnimationGroup, Option<ArcSurface>) {
        let (Some(a), Some(b)) = (tiles.get(left), tiles.get(right)) else {
            log::warn!("Swap skipped: tile {:?} or {:?} is gone", left, right);
            return (AnimationGroup::new(), None);
        };

        let surface = ArcSurface::swap_arcs(a.position, b.position);
        log::debug!("swap rails: {} | {}", surface.up.to_svg_d(), surface.down.to_svg_d());

        let mut group = AnimationGroup::new();
        group.add(timeline.motion(left, surface.up_rail(), timing));
        group.add(timeline.motion(right, surface.down_rail(), timing));
        (group, Some(surface))
    }
}
