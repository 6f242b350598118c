pub mod bubble_animator;
pub mod highlight;

pub use bubble_animator::{BubbleSortAnimator, RunStats, SortError, SortEvent, SortStart};
pub use highlight::{HighlightPalette, Highlighter};
