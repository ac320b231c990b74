//! Game state and the turn/pass state machine

use serde::{Deserialize, Serialize};

use crate::board::{Board, Hex};
use crate::capture::{compute_flips, has_no_moves, is_valid_move, legal_moves};
use crate::cell::{Cell, Color};
use crate::error::{Result, ReversiError};
use crate::status::{derive_status, is_terminal, Status};

// ============================================================================
// CORE TYPES
// ============================================================================

/// What a successful `move_to` actually did
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// Tile placed at `at`; `flipped` lists the recolored tiles
    Placed { at: Hex, flipped: Vec<Hex> },
    /// The mover had no legal move anywhere, so the turn was passed instead
    ForcedPass,
}

/// Final or current outcome decided by score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Unfinished,
    BlackWins,
    WhiteWins,
    Draw,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state (clone to simulate)
///
/// Owns the board store exclusively. All mutation goes through `move_to`,
/// `pass` and `start_game`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,

    /// Color to move
    current: Color,

    /// Passes in a row since the last placed tile
    passes: u32,

    /// Set by the first completed `start_game`, `move_to` or `pass`
    started: bool,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a new game on a board of the given side length
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(size)?,
            current: Color::Black,
            passes: 0,
            started: false,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of tiles of the given color
    pub fn score(&self, color: Color) -> usize {
        self.board.count(color.to_cell())
    }

    /// Cell at (q, r)
    pub fn cell(&self, q: i32, r: i32) -> Result<Cell> {
        self.board.get(Hex::new(q, r))
    }

    pub fn is_valid_move(&self, hex: Hex, color: Color) -> bool {
        is_valid_move(&self.board, hex, color)
    }

    /// Legal moves for the color to move
    pub fn legal_moves(&self) -> Vec<Hex> {
        legal_moves(&self.board, self.current)
    }

    pub fn has_no_moves(&self, color: Color) -> bool {
        has_no_moves(&self.board, color)
    }

    pub fn status(&self) -> Status {
        derive_status(self)
    }

    pub fn is_game_over(&self) -> bool {
        is_terminal(self)
    }

    /// Result by tile count; `Unfinished` while the game is still running
    pub fn result(&self) -> GameResult {
        if !self.is_game_over() {
            return GameResult::Unfinished;
        }
        let black = self.score(Color::Black);
        let white = self.score(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameResult::BlackWins,
            std::cmp::Ordering::Less => GameResult::WhiteWins,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Place a tile for the color to move.
    ///
    /// If that color has no legal move anywhere, the coordinates are ignored
    /// and the turn is passed, reported as `Turn::ForcedPass`.
    pub fn move_to(&mut self, q: i32, r: i32) -> Result<Turn> {
        let hex = Hex::new(q, r);
        if !self.board.contains(hex) {
            return Err(ReversiError::OutOfRange { q, r });
        }

        if self.has_no_moves(self.current) {
            tracing::debug!("{} has no legal move, forcing a pass", self.current);
            self.pass();
            return Ok(Turn::ForcedPass);
        }

        if !self.is_valid_move(hex, self.current) {
            return Err(ReversiError::IllegalMove { q, r });
        }

        let target = self.current.to_cell();
        let flipped = compute_flips(&self.board, hex, self.current);
        self.board.set(hex, target);
        for &tile in &flipped {
            self.board.set(tile, target);
        }

        tracing::debug!("{} plays {} flipping {}", self.current, hex, flipped.len());

        self.passes = 0;
        self.current = self.current.opponent();
        self.started = true;

        Ok(Turn::Placed { at: hex, flipped })
    }

    /// Give up the turn. Always permitted.
    pub fn pass(&mut self) {
        tracing::debug!("{} passes", self.current);
        self.current = self.current.opponent();
        self.passes += 1;
        self.started = true;
    }

    /// Mark the game as started with Black to move. The board is untouched.
    pub fn start_game(&mut self) {
        self.current = Color::Black;
        self.started = true;
    }
}

// ============================================================================
// TESTS
// ============================================================================
