// src/sorting/highlight.rs
//
// Color transitions for the sort: select, deselect and finish.
// Every call fans out one tween per target and hands back the group so
// the caller can wait for all of them.

use crate::animation::{AnimationGroup, Timeline, TweenTiming};
use crate::config::{to_rgba, PaletteConfig, TimingConfig};
use crate::models::{TileId, TileStore, TileStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightPalette {
    pub select: TileStyle,
    pub finish: TileStyle,
    pub fallback: TileStyle, // used by deselect when nothing was captured
}

impl From<&PaletteConfig> for HighlightPalette {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            select: TileStyle {
                background: to_rgba(config.select_background),
                text: to_rgba(config.select_text),
            },
            finish: TileStyle {
                background: to_rgba(config.finish_background),
                text: to_rgba(config.finish_text),
            },
            fallback: TileStyle::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    palette: HighlightPalette,
    color_timing: TweenTiming,
    finish_timing: TweenTiming,
    defaults: Option<TileStyle>,
}

impl Highlighter {
    pub fn new(timing: &TimingConfig, palette: &PaletteConfig) -> Self {
        let color_timing = TweenTiming {
            duration: timing.color_duration,
            end_delay: timing.color_end_delay,
            easing: timing.easing,
        };
        Self {
            palette: HighlightPalette::from(palette),
            color_timing,
            finish_timing: TweenTiming {
                end_delay: timing.finish_end_delay,
                ..color_timing
            },
            defaults: None,
        }
    }

    // the colors deselect restores for the rest of the run
    pub fn capture_defaults(&mut self, style: TileStyle) {
        self.defaults = Some(style);
    }

    pub fn reset_defaults(&mut self) {
        self.defaults = None;
    }

    pub fn defaults(&self) -> TileStyle {
        self.defaults.unwrap_or(self.palette.fallback)
    }

    pub fn palette(&self) -> &HighlightPalette {
        &self.palette
    }

    pub fn select(&self, timeline: &mut Timeline, tiles: &TileStore, targets: &[TileId]) -> AnimationGroup {
        Self::color_all(timeline, tiles, targets, self.palette.select, self.color_timing)
    }

    pub fn deselect(&self, timeline: &mut Timeline, tiles: &TileStore, targets: &[TileId]) -> AnimationGroup {
        Self::color_all(timeline, tiles, targets, self.defaults(), self.color_timing)
    }

    pub fn finish(&self, timeline: &mut Timeline, tiles: &TileStore, targets: &[TileId]) -> AnimationGroup {
        Self::color_all(timeline, tiles, targets, self.palette.finish, self.finish_timing)
    }

    fn color_all(
        timeline: &mut Timeline,
        tiles: &TileStore,
        targets: &[TileId],
        style: TileStyle,
        timing: TweenTiming,
    ) -> AnimationGroup {
        targets
            .iter()
            .map(|target| timeline.color(tiles, *target, style, timing))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    fn setup() -> (Highlighter, TileStore, Vec<TileId>) {
        let highlighter = Highlighter::new(&TimingConfig::default(), &PaletteConfig::default());
        let mut tiles = TileStore::new();
        let ids = (0..2)
            .map(|i| {
                tiles.insert(
                    i.to_string(),
                    pt2(i as f32 * 90.0, 0.0),
                    vec2(60.0, 60.0),
                    TileStyle::default(),
                )
            })
            .collect();
        (highlighter, tiles, ids)
    }

    fn run_out(timeline: &mut Timeline, tiles: &mut TileStore) {
        while !timeline.is_idle() {
            timeline.tick(0.1, tiles);
        }
    }

    #[test]
    fn test_select_then_deselect_restores_captured_style() {
        let (mut highlighter, mut tiles, ids) = setup();
        let themed = TileStyle {
            background: rgba(0.2, 0.3, 0.4, 1.0),
            text: rgba(0.9, 0.9, 0.9, 1.0),
        };
        for id in &ids {
            tiles.get_mut(*id).unwrap().style = themed;
        }
        highlighter.capture_defaults(themed);

        let mut timeline = Timeline::new();
        let group = highlighter.select(&mut timeline, &tiles, &ids);
        assert_eq!(group.len(), 2);
        run_out(&mut timeline, &mut tiles);
        assert!(group.is_settled(&timeline));
        assert_eq!(tiles.get(ids[0]).unwrap().style, highlighter.palette().select);

        highlighter.deselect(&mut timeline, &tiles, &ids);
        run_out(&mut timeline, &mut tiles);
        assert_eq!(tiles.get(ids[1]).unwrap().style, themed);
    }

    #[test]
    fn test_deselect_falls_back_to_white_on_black() {
        let (highlighter, _, _) = setup();
        assert_eq!(highlighter.defaults(), TileStyle::default());
    }

    #[test]
    fn test_finish_holds_longer_than_select() {
        let (highlighter, mut tiles, ids) = setup();
        let mut timeline = Timeline::new();
        let select = highlighter.select(&mut timeline, &tiles, &ids[..1]);
        let finish = highlighter.finish(&mut timeline, &tiles, &ids[1..]);

        // 0.6s tween + 0.4s hold for select, + 1.0s hold for finish
        timeline.tick(1.2, &mut tiles);
        assert!(select.is_settled(&timeline));
        assert!(!finish.is_settled(&timeline));
        assert_eq!(tiles.get(ids[1]).unwrap().style, highlighter.palette().finish);

        timeline.tick(0.5, &mut tiles);
        assert!(finish.is_settled(&timeline));
    }

    #[test]
    fn test_empty_target_list_is_settled() {
        let (highlighter, tiles, _) = setup();
        let mut timeline = Timeline::new();
        let group = highlighter.select(&mut timeline, &tiles, &[]);
        assert!(group.is_empty());
        assert!(group.is_settled(&timeline));
    }
}
