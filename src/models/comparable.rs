// src/models/comparable.rs
//
// Reads a tile's displayed text as a typed, comparable value.
// The value is always taken from the live tile, never cached.

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use super::tile::{TileId, TileStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
    Boolean,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
    Boolean(bool),
}

#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("tile {0} no longer exists")]
    MissingTile(usize),
    #[error("'{text}' is not a valid {kind:?}")]
    Unparseable { text: String, kind: ValueKind },
}

impl ValueKind {
    pub fn coerce(&self, text: &str) -> Result<SortValue, ValueError> {
        let unparseable = || ValueError::Unparseable {
            text: text.to_string(),
            kind: *self,
        };

        match self {
            ValueKind::Text => Ok(SortValue::Text(text.to_string())),
            ValueKind::Number => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| !n.is_nan())
                .map(SortValue::Number)
                .ok_or_else(unparseable),
            ValueKind::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(SortValue::Boolean(true)),
                "false" => Ok(SortValue::Boolean(false)),
                _ => Err(unparseable()),
            },
        }
    }
}

impl PartialOrd for SortValue {
    // values of different kinds are unordered
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.partial_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => Some(a.cmp(b)),
            (SortValue::Boolean(a), SortValue::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortValue::Number(n) => write!(f, "{}", n),
            SortValue::Text(s) => write!(f, "{}", s),
            SortValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// A tile handle paired with the kind its text is read as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortableItem {
    pub tile: TileId,
    pub kind: ValueKind,
}

impl SortableItem {
    pub fn new(tile: TileId, kind: ValueKind) -> Self {
        Self { tile, kind }
    }

    pub fn value(&self, tiles: &TileStore) -> Result<SortValue, ValueError> {
        let tile = tiles
            .get(self.tile)
            .ok_or(ValueError::MissingTile(self.tile.0))?;
        self.kind.coerce(&tile.text)
    }

    // true when self must move right of other
    pub fn is_greater(&self, other: &SortableItem, tiles: &TileStore) -> Result<bool, ValueError> {
        let a = self.value(tiles)?;
        let b = other.value(tiles)?;
        Ok(a.partial_cmp(&b) == Some(Ordering::Greater))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TileStyle;
    use nannou::prelude::*;

    fn tile_with(store: &mut TileStore, text: &str) -> TileId {
        store.insert(text.into(), pt2(0.0, 0.0), vec2(60.0, 60.0), TileStyle::default())
    }

    #[test]
    fn test_numeric_compare_is_not_lexicographic() {
        let mut store = TileStore::new();
        let nine = SortableItem::new(tile_with(&mut store, "9"), ValueKind::Number);
        let ten = SortableItem::new(tile_with(&mut store, "10"), ValueKind::Number);

        assert!(ten.is_greater(&nine, &store).unwrap());
        assert!(!nine.is_greater(&ten, &store).unwrap());

        // as text the order flips
        let nine = SortableItem::new(nine.tile, ValueKind::Text);
        let ten = SortableItem::new(ten.tile, ValueKind::Text);
        assert!(nine.is_greater(&ten, &store).unwrap());
    }

    #[test]
    fn test_value_tracks_live_text() {
        let mut store = TileStore::new();
        let id = tile_with(&mut store, "4");
        let item = SortableItem::new(id, ValueKind::Number);
        assert_eq!(item.value(&store).unwrap(), SortValue::Number(4.0));

        store.get_mut(id).unwrap().text = " 17 ".into();
        assert_eq!(item.value(&store).unwrap(), SortValue::Number(17.0));
    }

    #[test]
    fn test_boolean_kind() {
        assert_eq!(ValueKind::Boolean.coerce("TRUE").unwrap(), SortValue::Boolean(true));
        assert_eq!(ValueKind::Boolean.coerce("false").unwrap(), SortValue::Boolean(false));
        assert!(ValueKind::Boolean.coerce("yes").is_err());
        assert!(SortValue::Boolean(true) > SortValue::Boolean(false));
    }

    #[test]
    fn test_unparseable_number() {
        let err = ValueKind::Number.coerce("abc").unwrap_err();
        assert_eq!(
            err,
            ValueError::Unparseable {
                text: "abc".into(),
                kind: ValueKind::Number
            }
        );
        assert!(ValueKind::Number.coerce("NaN").is_err());
    }

    #[test]
    fn test_missing_tile() {
        let store = TileStore::new();
        let item = SortableItem::new(TileId(3), ValueKind::Number);
        assert_eq!(item.value(&store), Err(ValueError::MissingTile(3)));
    }

    #[test]
    fn test_mixed_kinds_are_unordered() {
        assert_eq!(
            SortValue::Number(1.0).partial_cmp(&SortValue::Text("1".into())),
            None
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SortValue::Number(5.0).to_string(), "5");
        assert_eq!(SortValue::Number(2.5).to_string(), "2.5");
    }
}
