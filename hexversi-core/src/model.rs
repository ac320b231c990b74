//! Read-only projection consumed by views, strategies and listeners

use rustc_hash::FxHashMap;

use crate::board::Hex;
use crate::cell::{Cell, Color};
use crate::error::Result;
use crate::game::GameState;
use crate::status::Status;

/// Query surface of a game. Nothing here can change the board.
pub trait ReadOnlyModel {
    fn is_game_over(&self) -> bool;

    /// Number of tiles of `color`
    fn score(&self, color: Color) -> usize;

    /// Cell at (q, r), `UnknownCoordinate` if it is not on the board
    fn cell(&self, q: i32, r: i32) -> Result<Cell>;

    /// Side length N used at construction
    fn board_size(&self) -> usize;

    /// Independent copy of every cell
    fn snapshot(&self) -> FxHashMap<Hex, Cell>;

    fn has_no_moves(&self, color: Color) -> bool;

    /// Every legal move for the color to move
    fn legal_moves(&self) -> Vec<Hex>;

    fn current_color(&self) -> Color;

    fn passes(&self) -> u32;

    fn status(&self) -> Status;
}

impl ReadOnlyModel for GameState {
    fn is_game_over(&self) -> bool {
        GameState::is_game_over(self)
    }

    fn score(&self, color: Color) -> usize {
        GameState::score(self, color)
    }

    fn cell(&self, q: i32, r: i32) -> Result<Cell> {
        GameState::cell(self, q, r)
    }

    fn board_size(&self) -> usize {
        self.size()
    }

    fn snapshot(&self) -> FxHashMap<Hex, Cell> {
        self.board().snapshot()
    }

    fn has_no_moves(&self, color: Color) -> bool {
        GameState::has_no_moves(self, color)
    }

    fn legal_moves(&self) -> Vec<Hex> {
        GameState::legal_moves(self)
    }

    fn current_color(&self) -> Color {
        GameState::current_color(self)
    }

    fn passes(&self) -> u32 {
        GameState::passes(self)
    }

    fn status(&self) -> Status {
        GameState::status(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReversiError;

    fn describe(model: &dyn ReadOnlyModel) -> (usize, usize, usize, Color) {
        (
            model.board_size(),
            model.score(Color::Black),
            model.score(Color::White),
            model.current_color(),
        )
    }

    #[test]
    fn test_projection_matches_state() {
        let game = GameState::new(4).unwrap();
        assert_eq!(describe(&game), (4, 3, 3, Color::Black));
        assert_eq!(ReadOnlyModel::snapshot(&game).len(), 37);
        assert_eq!(ReadOnlyModel::legal_moves(&game).len(), 6);
        assert_eq!(ReadOnlyModel::status(&game), Status::NotStarted);
    }

    #[test]
    fn test_cell_lookup() {
        let game = GameState::new(3).unwrap();
        let model: &dyn ReadOnlyModel = &game;
        assert_eq!(model.cell(0, 0), Ok(Cell::Empty));
        assert_eq!(model.cell(1, 0), Ok(Cell::Black));
        assert_eq!(model.cell(0, 1), Ok(Cell::White));
        assert_eq!(model.cell(4, 3), Err(ReversiError::UnknownCoordinate { q: 4, r: 3 }));
    }
}
