pub mod comparable;
pub mod tile;

pub use comparable::{SortValue, SortableItem, ValueError, ValueKind};
pub use tile::{Tile, TileId, TileStore, TileStyle};
