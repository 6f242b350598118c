// src/animation/arc_path.rs
//
// Quadratic arc rails used by the swap motion.
// All coordinates are page space: origin top-left, y grows downward.

use nannou::prelude::*;

pub const ARC_RESOLUTION: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticPath {
    pub start: Point2,
    pub pivot: Point2,
    pub end: Point2,
}

impl QuadraticPath {
    pub fn new(start: Point2, pivot: Point2, end: Point2) -> Self {
        Self { start, pivot, end }
    }

    pub fn point_at(&self, t: f32) -> Point2 {
        let u = 1.0 - t;
        self.start * (u * u) + self.pivot * (2.0 * u * t) + self.end * (t * t)
    }

    // SVG path data, handy for logging
    pub fn to_svg_d(&self) -> String {
        format!(
            "M{} {} Q {} {}, {} {}",
            self.start.x, self.start.y, self.pivot.x, self.pivot.y, self.end.x, self.end.y
        )
    }

    pub fn sample(&self, resolution: usize) -> Vec<Point2> {
        let resolution = resolution.max(1);
        (0..=resolution)
            .map(|i| self.point_at(i as f32 / resolution as f32))
            .collect()
    }
}

/// Temporary host for the two rails of one swap.
///
/// `up` carries the left tile over the top, `down` carries the right tile
/// back underneath, so the pair turns clockwise without colliding. The
/// surface lives as long as the swap step that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSurface {
    pub up: QuadraticPath,
    pub down: QuadraticPath,
}

impl ArcSurface {
    pub fn swap_arcs(first: Point2, second: Point2) -> Self {
        let x_middle = (first.x + second.x) / 2.0;
        let bow = (first.x - second.x).abs();

        let up = QuadraticPath::new(first, pt2(x_middle, first.y - bow), second);
        let down = QuadraticPath::new(second, pt2(x_middle, first.y + bow), first);

        Self { up, down }
    }

    pub fn up_rail(&self) -> MotionRail {
        MotionRail::from_path(&self.up, ARC_RESOLUTION)
    }

    pub fn down_rail(&self) -> MotionRail {
        MotionRail::from_path(&self.down, ARC_RESOLUTION)
    }
}

/// A path flattened to a polyline so positions can be taken by arc length.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionRail {
    points: Vec<Point2>,
    cumulative: Vec<f32>,
}

impl MotionRail {
    pub fn from_path(path: &QuadraticPath, resolution: usize) -> Self {
        let points = path.sample(resolution);
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for window in points.windows(2) {
            if let [p1, p2] = window {
                total += p1.distance(*p2);
                cumulative.push(total);
            }
        }
        Self { points, cumulative }
    }

    pub fn length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn end(&self) -> Point2 {
        self.points.last().copied().unwrap_or(Point2::ZERO)
    }

    // progress in 0..=1 along the rail's length
    pub fn point_at_progress(&self, progress: f32) -> Point2 {
        let total = self.length();
        if total <= f32::EPSILON {
            return self.end();
        }

        let target = progress.clamp(0.0, 1.0) * total;
        let idx = self.cumulative.partition_point(|&d| d < target);
        if idx == 0 {
            return self.points[0];
        }
        if idx >= self.points.len() {
            return self.end();
        }

        let seg_start = self.cumulative[idx - 1];
        let seg_len = self.cumulative[idx] - seg_start;
        let local = if seg_len > 0.0 {
            (target - seg_start) / seg_len
        } else {
            0.0
        };
        self.points[idx - 1].lerp(self.points[idx], local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivots_mirror_around_start_row() {
        let surface = ArcSurface::swap_arcs(pt2(0.0, 0.0), pt2(10.0, 0.0));
        assert_eq!(surface.up.pivot, pt2(5.0, -10.0));
        assert_eq!(surface.down.pivot, pt2(5.0, 10.0));

        // each rail runs in the opposite direction
        assert_eq!(surface.up.start, pt2(0.0, 0.0));
        assert_eq!(surface.up.end, pt2(10.0, 0.0));
        assert_eq!(surface.down.start, pt2(10.0, 0.0));
        assert_eq!(surface.down.end, pt2(0.0, 0.0));
    }

    #[test]
    fn test_bow_uses_absolute_distance() {
        let surface = ArcSurface::swap_arcs(pt2(90.0, 20.0), pt2(0.0, 20.0));
        assert_eq!(surface.up.pivot, pt2(45.0, -70.0));
        assert_eq!(surface.down.pivot, pt2(45.0, 110.0));
    }

    #[test]
    fn test_svg_path_data() {
        let path = QuadraticPath::new(pt2(0.0, 0.0), pt2(5.0, -10.0), pt2(10.0, 0.0));
        assert_eq!(path.to_svg_d(), "M0 0 Q 5 -10, 10 0");
    }

    #[test]
    fn test_rail_endpoints_and_apex() {
        let surface = ArcSurface::swap_arcs(pt2(0.0, 0.0), pt2(10.0, 0.0));
        let up = surface.up_rail();
        let down = surface.down_rail();

        assert_eq!(up.point_at_progress(0.0), pt2(0.0, 0.0));
        assert!(up.point_at_progress(1.0).distance(pt2(10.0, 0.0)) < 1e-4);

        // halfway along a symmetric arc is its apex at x = 5, y = -5
        let mid = up.point_at_progress(0.5);
        assert!((mid.x - 5.0).abs() < 0.05);
        assert!((mid.y + 5.0).abs() < 0.05);

        let mid = down.point_at_progress(0.5);
        assert!((mid.y - 5.0).abs() < 0.05);
    }

    #[test]
    fn test_zero_length_rail() {
        let path = QuadraticPath::new(pt2(3.0, 4.0), pt2(3.0, 4.0), pt2(3.0, 4.0));
        let rail = MotionRail::from_path(&path, 16);
        assert_eq!(rail.length(), 0.0);
        assert_eq!(rail.point_at_progress(0.3), pt2(3.0, 4.0));
    }
}
