//! Capture engine: six-direction flow detection
//!
//! A flow is a contiguous run of opposite-color tiles walking outward from a
//! candidate cell, closed by a tile of the mover's color. The same walker
//! answers both "is this move legal" and "which tiles flip".

use crate::board::{Board, Hex, DIRECTIONS};
use crate::cell::{Cell, Color};

/// Walk from `origin` along one direction and return the tiles captured in
/// that direction, or `None` if the direction is not a valid flow (or not
/// one of the six direction indices).
///
/// The walk stops at the first cell that is not the opponent's color. A flow
/// is valid only when that cell holds `color` and at least one opponent tile
/// was passed on the way. Empty cells and the board edge both terminate the
/// walk without a capture.
pub fn flow(board: &Board, origin: Hex, direction: usize, color: Color) -> Option<Vec<Hex>> {
    let (dq, dr) = *DIRECTIONS.get(direction)?;
    let opponent = color.opponent().to_cell();
    let own = color.to_cell();

    let mut captured = Vec::new();
    let mut current = origin;

    loop {
        current = Hex::new(current.q + dq, current.r + dr);
        match board.get(current) {
            Ok(cell) if cell == opponent => captured.push(current),
            Ok(cell) if cell == own => {
                return if captured.is_empty() { None } else { Some(captured) };
            }
            // Empty cell or off the edge
            _ => return None,
        }
    }
}

/// Check whether `color` may place a tile at `hex`
pub fn is_valid_move(board: &Board, hex: Hex, color: Color) -> bool {
    if board.get(hex) != Ok(Cell::Empty) {
        return false;
    }
    (0..DIRECTIONS.len()).any(|dir| flow(board, hex, dir, color).is_some())
}

/// All tiles that flip to `color` when it plays at `hex`.
///
/// The placed cell itself is not included. Returns an empty list for an
/// illegal move.
pub fn compute_flips(board: &Board, hex: Hex, color: Color) -> Vec<Hex> {
    if board.get(hex) != Ok(Cell::Empty) {
        return Vec::new();
    }
    (0..DIRECTIONS.len())
        .filter_map(|dir| flow(board, hex, dir, color))
        .flatten()
        .collect()
}

/// Every legal move for `color`, in board order
pub fn legal_moves(board: &Board, color: Color) -> Vec<Hex> {
    board
        .coords()
        .filter(|&hex| is_valid_move(board, hex, color))
        .collect()
}

pub fn has_no_moves(board: &Board, color: Color) -> bool {
    !board.coords().any(|hex| is_valid_move(board, hex, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Board with every listed cell overwritten; all others as in the start
    fn board_with(size: usize, cells: &[(i32, i32, Cell)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(q, r, cell) in cells {
            board.set(Hex::new(q, r), cell);
        }
        board
    }

    fn sorted(mut hexes: Vec<Hex>) -> Vec<Hex> {
        hexes.sort();
        hexes
    }

    #[test]
    fn test_initial_legal_moves() {
        let board = Board::new(3).unwrap();
        let expected = sorted(vec![
            Hex::new(-2, 1),
            Hex::new(-1, -1),
            Hex::new(-1, 2),
            Hex::new(1, -2),
            Hex::new(1, 1),
            Hex::new(2, -1),
        ]);
        assert_eq!(sorted(legal_moves(&board, Color::Black)), expected);
        assert_eq!(sorted(legal_moves(&board, Color::White)), expected);
    }

    #[test]
    fn test_single_flow() {
        let board = Board::new(3).unwrap();
        // (2,-1) looks back along r = -1 through white (1,-1) to black (0,-1)
        assert_eq!(flow(&board, Hex::new(2, -1), 3, Color::Black), Some(vec![Hex::new(1, -1)]));
        assert_eq!(compute_flips(&board, Hex::new(2, -1), Color::Black), vec![Hex::new(1, -1)]);
        assert_eq!(flow(&board, Hex::new(2, -1), 6, Color::Black), None);
    }

    #[test]
    fn test_adjacent_own_tile_is_not_a_flow() {
        let board = Board::new(3).unwrap();
        // (2,-1) touches black (1,0) directly along s
        assert_eq!(flow(&board, Hex::new(2, -1), 5, Color::Black), None);
    }

    #[test]
    fn test_gap_breaks_flow() {
        // Black at 3 with white at 1, empty at 2: no flow from 0 toward +q
        let board = board_with(5, &[
            (1, -2, Cell::White),
            (2, -2, Cell::Empty),
            (3, -2, Cell::Black),
        ]);
        assert_eq!(flow(&board, Hex::new(0, -2), 2, Color::Black), None);
    }

    #[test]
    fn test_run_to_edge_is_not_a_flow() {
        let board = board_with(3, &[(1, -2, Cell::White), (2, -2, Cell::White)]);
        assert_eq!(flow(&board, Hex::new(0, -2), 2, Color::Black), None);
        assert!(!is_valid_move(&board, Hex::new(0, -2), Color::Black));
    }

    #[test]
    fn test_long_run_flips_all() {
        let board = board_with(5, &[
            (-3, 0, Cell::White),
            (-2, 0, Cell::White),
            (-1, 0, Cell::White),
            (0, 0, Cell::White),
            (1, 0, Cell::Black),
        ]);
        let flips = flow(&board, Hex::new(-4, 0), 2, Color::Black).unwrap();
        assert_eq!(flips, vec![
            Hex::new(-3, 0),
            Hex::new(-2, 0),
            Hex::new(-1, 0),
            Hex::new(0, 0),
        ]);
    }

    #[test]
    fn test_flow_stops_at_first_own_tile() {
        // W B W B along q: from the origin only the first white flips
        let board = board_with(5, &[
            (-3, 2, Cell::White),
            (-2, 2, Cell::Black),
            (-1, 2, Cell::White),
            (0, 2, Cell::Black),
        ]);
        assert_eq!(flow(&board, Hex::new(-4, 2), 2, Color::Black), Some(vec![Hex::new(-3, 2)]));
    }

    #[test]
    fn test_occupied_cell_is_never_valid() {
        let board = Board::new(3).unwrap();
        assert!(!is_valid_move(&board, Hex::new(0, 1), Color::Black));
        assert!(compute_flips(&board, Hex::new(0, 1), Color::Black).is_empty());
    }

    #[test]
    fn test_off_board_is_never_valid() {
        let board = Board::new(3).unwrap();
        assert!(!is_valid_move(&board, Hex::new(3, -1), Color::Black));
    }

    #[test]
    fn test_multiple_directions_union() {
        // Center move that captures along two axes
        let board = board_with(4, &[
            (1, -1, Cell::White),
            (2, -2, Cell::Black),
            (0, 1, Cell::White),
            (0, 2, Cell::Black),
        ]);
        let flips = sorted(compute_flips(&board, Hex::new(0, 0), Color::Black));
        assert!(flips.contains(&Hex::new(1, -1)));
        assert!(flips.contains(&Hex::new(0, 1)));
        // (-1,0) is white with (-2,0) empty, so it stays
        assert!(!flips.contains(&Hex::new(-1, 0)));
    }

    #[test]
    fn test_no_moves() {
        let mut board = Board::new(3).unwrap();
        for hex in [Hex::new(1, -1), Hex::new(-1, 0), Hex::new(0, 1)] {
            board.set(hex, Cell::Black);
        }
        assert!(has_no_moves(&board, Color::White));
        assert!(has_no_moves(&board, Color::Black));
    }

    #[test]
    fn test_flips_are_opponent_tiles() {
        let board = Board::new(6).unwrap();
        for color in [Color::Black, Color::White] {
            for hex in legal_moves(&board, color) {
                let flips = compute_flips(&board, hex, color);
                assert!(!flips.is_empty());
                for flipped in flips {
                    assert_eq!(board.get(flipped), Ok(color.opponent().to_cell()));
                }
            }
        }
    }
}
