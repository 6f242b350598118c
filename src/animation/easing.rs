// src/animation/easing.rs
//
// Easing curves shared by the color and motion tweens.

use nannou::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    #[default]
    EaseInOut,
    EaseIn,
    EaseOut,
}

impl EasingType {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
        }
    }
}

// quadratic curves
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

// component-wise blend, alpha included
pub fn lerp_color(start: Rgba, end: Rgba, t: f32) -> Rgba {
    let u = 1.0 - t;
    rgba(
        start.red * u + end.red * t,
        start.green * u + end.green * t,
        start.blue * u + end.blue * t,
        start.alpha * u + end.alpha * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            EasingType::Linear,
            EasingType::EaseInOut,
            EasingType::EaseIn,
            EasingType::EaseOut,
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-6);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let e = EasingType::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(EasingType::EaseIn.apply(-1.0), 0.0);
        assert_eq!(EasingType::EaseOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_lerp_color_midpoint() {
        let c = lerp_color(rgba(0.0, 0.0, 0.0, 1.0), rgba(1.0, 0.5, 0.0, 0.0), 0.5);
        assert!((c.red - 0.5).abs() < 1e-6);
        assert!((c.green - 0.25).abs() < 1e-6);
        assert!((c.alpha - 0.5).abs() < 1e-6);
    }
}
