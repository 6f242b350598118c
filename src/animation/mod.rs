pub mod arc_path;
pub mod easing;
pub mod timeline;

pub use arc_path::{ArcSurface, MotionRail, QuadraticPath, ARC_RESOLUTION};
pub use easing::{lerp_color, EasingType};
pub use timeline::{AnimationGroup, AnimationId, Timeline, TweenTiming};
