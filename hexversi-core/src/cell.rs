//! Cell contents and player colors

use serde::{Deserialize, Serialize};

/// Contents of a single board position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Color of the tile on this cell, if any
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used by the text view
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

/// Player color (Black moves first)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn test_cell_color_round_trip() {
        for color in [Color::Black, Color::White] {
            assert_eq!(color.to_cell().color(), Some(color));
        }
        assert_eq!(Cell::Empty.color(), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::Empty.symbol(), '_');
        assert_eq!(Cell::Black.symbol(), 'X');
        assert_eq!(Cell::White.symbol(), 'O');
    }
}
