// src/render/mod.rs
// Nannou drawing for the sort view

pub mod tile_renderer;

pub use tile_renderer::{PageSpace, TileRenderer};
