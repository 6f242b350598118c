// src/render/tile_renderer.rs
//
// Draws tiles, the status board and the optional rail overlay.
// Model coordinates are page space (top-left origin, y down); nannou puts
// the origin at the window center with y up.

use nannou::prelude::*;

use crate::animation::{ArcSurface, MotionRail};
use crate::models::TileStore;

const STATUS_LINE_HEIGHT: f32 = 28.0;
const RAIL_WEIGHT: f32 = 2.0;

#[derive(Debug, Clone, Copy)]
pub struct PageSpace {
    pub width: f32,
    pub height: f32,
}

impl PageSpace {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.w(), rect.h())
    }

    // page point to nannou world point
    pub fn to_world(&self, page: Point2) -> Point2 {
        pt2(page.x - self.width / 2.0, self.height / 2.0 - page.y)
    }
}

#[derive(Debug, Clone)]
pub struct TileRenderer {
    font_size: u32,
    status_color: Rgba,
    rail_color: Rgba,
}

impl TileRenderer {
    pub fn new(font_size: u32) -> Self {
        Self {
            font_size,
            status_color: rgba(0.9, 0.9, 0.9, 1.0),
            // rails are normally invisible; the debug overlay tints them
            rail_color: rgba(1.0, 0.3, 0.3, 0.8),
        }
    }

    pub fn draw_tiles(&self, draw: &Draw, page: &PageSpace, tiles: &TileStore) {
        for tile in tiles.iter() {
            let center = page.to_world(tile.position + tile.size / 2.0);
            draw.rect()
                .xy(center)
                .wh(tile.size)
                .color(tile.style.background);
            draw.text(&tile.text)
                .xy(center)
                .wh(tile.size)
                .font_size(self.font_size)
                .center_justify()
                .color(tile.style.text);
        }
    }

    pub fn draw_status(&self, draw: &Draw, page: &PageSpace, lines: &[String]) {
        let width = page.width * 0.8;
        for (i, line) in lines.iter().enumerate() {
            let page_pos = pt2(page.width / 2.0, 40.0 + i as f32 * STATUS_LINE_HEIGHT);
            draw.text(line)
                .xy(page.to_world(page_pos))
                .w_h(width, STATUS_LINE_HEIGHT)
                .font_size(18)
                .color(self.status_color);
        }
    }

    // tiles travel by their top-left corner, so shift rails to the centers
    pub fn draw_rails(&self, draw: &Draw, page: &PageSpace, surface: &ArcSurface, tile_size: Vec2) {
        for rail in [surface.up_rail(), surface.down_rail()] {
            self.draw_rail(draw, page, &rail, tile_size / 2.0);
        }
    }

    fn draw_rail(&self, draw: &Draw, page: &PageSpace, rail: &MotionRail, offset: Vec2) {
        let points: Vec<Point2> = rail
            .points()
            .iter()
            .map(|p| page.to_world(*p + offset))
            .collect();
        draw.polyline()
            .weight(RAIL_WEIGHT)
            .points(points)
            .color(self.rail_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_corners_map_to_window_corners() {
        let page = PageSpace::new(1000.0, 600.0);
        assert_eq!(page.to_world(pt2(0.0, 0.0)), pt2(-500.0, 300.0));
        assert_eq!(page.to_world(pt2(1000.0, 600.0)), pt2(500.0, -300.0));
        assert_eq!(page.to_world(pt2(500.0, 300.0)), pt2(0.0, 0.0));
    }

    #[test]
    fn test_page_up_is_world_up() {
        let page = PageSpace::new(800.0, 800.0);
        // the "up" rail bows to smaller page y, which is higher on screen
        let low = page.to_world(pt2(0.0, 100.0));
        let high = page.to_world(pt2(0.0, 50.0));
        assert!(high.y > low.y);
    }
}
