// src/animation/timeline.rs
//
// Frame-driven tween timeline.
// Each tween targets one tile, writes its eased value into the TileStore
// on every tick and leaves the timeline once its end delay has elapsed.

use nannou::prelude::*;

use super::arc_path::MotionRail;
use super::easing::{lerp_color, EasingType};
use crate::models::{TileId, TileStore, TileStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

#[derive(Debug, Clone, Copy)]
pub struct TweenTiming {
    pub duration: f32,
    pub end_delay: f32, // hold time after the value reaches its target
    pub easing: EasingType,
}

#[derive(Debug, Clone)]
enum TweenKind {
    Color { from: TileStyle, to: TileStyle },
    Motion { rail: MotionRail },
}

#[derive(Debug, Clone)]
struct Tween {
    id: AnimationId,
    target: TileId,
    kind: TweenKind,
    timing: TweenTiming,
    elapsed: f32,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.timing.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.timing.duration).clamp(0.0, 1.0)
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.timing.duration.max(0.0) + self.timing.end_delay.max(0.0)
    }

    fn apply(&self, tiles: &mut TileStore) {
        let Some(tile) = tiles.get_mut(self.target) else {
            return;
        };
        let t = self.timing.easing.apply(self.progress());

        match &self.kind {
            TweenKind::Color { from, to } => {
                tile.style = TileStyle {
                    background: lerp_color(from.background, to.background, t),
                    text: lerp_color(from.text, to.text, t),
                };
            }
            TweenKind::Motion { rail } => {
                tile.position = rail.point_at_progress(t);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    next_id: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a color tween from the tile's current style to `to`.
    pub fn color(
        &mut self,
        tiles: &TileStore,
        target: TileId,
        to: TileStyle,
        timing: TweenTiming,
    ) -> AnimationId {
        let from = match tiles.get(target) {
            Some(tile) => tile.style,
            None => {
                log::warn!("Color tween targets missing tile {:?}", target);
                to
            }
        };
        self.push(target, TweenKind::Color { from, to }, timing)
    }

    /// Starts moving a tile along a rail, by arc length.
    pub fn motion(&mut self, target: TileId, rail: MotionRail, timing: TweenTiming) -> AnimationId {
        self.push(target, TweenKind::Motion { rail }, timing)
    }

    fn push(&mut self, target: TileId, kind: TweenKind, timing: TweenTiming) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        self.tweens.push(Tween {
            id,
            target,
            kind,
            timing,
            elapsed: 0.0,
        });
        id
    }

    pub fn tick(&mut self, dt: f32, tiles: &mut TileStore) {
        for tween in self.tweens.iter_mut() {
            tween.elapsed += dt;
            tween.apply(tiles);
        }
        self.tweens.retain(|tween| !tween.is_complete());
    }

    pub fn is_finished(&self, id: AnimationId) -> bool {
        !self.tweens.iter().any(|tween| tween.id == id)
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }
}

/// Tweens started together; settled once every member has finished.
#[derive(Debug, Default, Clone)]
pub struct AnimationGroup {
    ids: Vec<AnimationId>,
}

impl AnimationGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: AnimationId) {
        self.ids.push(id);
    }

    pub fn join(&mut self, other: AnimationGroup) {
        self.ids.extend(other.ids);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_settled(&self, timeline: &Timeline) -> bool {
        self.ids.iter().all(|id| timeline.is_finished(*id))
    }
}

impl FromIterator<AnimationId> for AnimationGroup {
    fn from_iter<I: IntoIterator<Item = AnimationId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
