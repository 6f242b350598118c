// src/models/tile.rs
//
// Tiles are the visual elements that display one value each.
// The TileStore owns them; everything else refers to a tile by TileId.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    pub background: Rgba,
    pub text: Rgba,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            background: rgba(1.0, 1.0, 1.0, 1.0),
            text: rgba(0.0, 0.0, 0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub text: String,
    pub position: Point2, // top-left corner, page space
    pub size: Vec2,
    pub style: TileStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileStore {
    tiles: Vec<Tile>,
    next_id: usize,
}

impl TileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, text: String, position: Point2, size: Vec2, style: TileStyle) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.tiles.push(Tile {
            id,
            text,
            position,
            size,
            style,
        });
        id
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.id == id)
    }

    // insertion order, which is not the on-screen order once swaps happen
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn ids(&self) -> Vec<TileId> {
        self.tiles.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // left to right as they appear on screen
    pub fn ids_by_position(&self) -> Vec<TileId> {
        let mut tiles: Vec<&Tile> = self.tiles.iter().collect();
        tiles.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        tiles.into_iter().map(|t| t.id).collect()
    }

    pub fn texts_by_position(&self) -> Vec<String> {
        self.ids_by_position()
            .into_iter()
            .filter_map(|id| self.get(id).map(|t| t.text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TileStore {
        let mut store = TileStore::new();
        for (i, text) in texts.iter().enumerate() {
            store.insert(
                text.to_string(),
                pt2(i as f32 * 90.0, 0.0),
                vec2(60.0, 60.0),
                TileStyle::default(),
            );
        }
        store
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let mut store = store_with(&["1", "2"]);
        store.clear();
        assert!(store.is_empty());

        let id = store.insert("3".into(), pt2(0.0, 0.0), vec2(60.0, 60.0), TileStyle::default());
        assert_eq!(id, TileId(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_texts_follow_screen_position() {
        let mut store = store_with(&["7", "2", "9"]);
        let ids = store.ids();

        // move the first tile past the last one
        store.get_mut(ids[0]).unwrap().position.x = 500.0;
        assert_eq!(store.texts_by_position(), vec!["2", "9", "7"]);
    }

    #[test]
    fn test_lookup_missing_tile() {
        let store = store_with(&["1"]);
        assert!(store.get(TileId(42)).is_none());
    }
}
