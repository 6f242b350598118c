// src/views/status.rs
//
// The four-state status of the visualization and the text shown for it.

use crate::models::SortValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualStatus {
    #[default]
    Empty,
    Filled,
    Sorting,
    Finished,
}

#[derive(Debug, Default, Clone)]
pub struct StatusBoard {
    lines: Vec<String>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, status: VisualStatus, tile_count: usize, old_values: &[SortValue]) {
        self.lines = match status {
            VisualStatus::Empty => Vec::new(),
            VisualStatus::Filled => vec![
                format!("{} random numbers are set", tile_count),
                "Press F to pick new numbers".to_string(),
                "Press Space to start sorting".to_string(),
            ],
            VisualStatus::Sorting => vec!["Sorting...".to_string()],
            VisualStatus::Finished => vec![
                "Sorting finished".to_string(),
                format!("Original array: [{}]", join_values(old_values)),
                "Press F to fill new numbers and try again".to_string(),
            ],
        };
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

pub fn join_values(values: &[SortValue]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_lines() {
        let mut board = StatusBoard::new();
        board.show(VisualStatus::Filled, 3, &[]);
        board.show(VisualStatus::Empty, 0, &[]);
        assert!(board.lines().is_empty());
    }

    #[test]
    fn test_finished_lists_original_values() {
        let mut board = StatusBoard::new();
        let old: Vec<SortValue> = [5.0, 3.0, 4.0].into_iter().map(SortValue::Number).collect();
        board.show(VisualStatus::Finished, 3, &old);
        assert_eq!(board.lines()[1], "Original array: [5,3,4]");
    }

    #[test]
    fn test_filled_reports_count() {
        let mut board = StatusBoard::new();
        board.show(VisualStatus::Filled, 7, &[]);
        assert_eq!(board.lines()[0], "7 random numbers are set");
    }
}
