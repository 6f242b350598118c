// src/views/mod.rs

pub mod sort_container;
pub mod status;

pub use sort_container::{SortContainer, TileLayout};
pub use status::{StatusBoard, VisualStatus};
