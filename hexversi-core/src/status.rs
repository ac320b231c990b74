//! Status derivation

use serde::{Deserialize, Serialize};

use crate::cell::Color;
use crate::game::GameState;

/// Lifecycle of a game, always derived from the live state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    NotStarted,
    InProgress,
    End,
}

/// Termination test.
///
/// The game is over when the mover is stuck right after a single pass, when
/// neither color can move, or after two passes in a row.
pub fn is_terminal(state: &GameState) -> bool {
    let passes = state.passes();
    (passes == 1 && state.has_no_moves(state.current_color()))
        || (state.has_no_moves(Color::Black) && state.has_no_moves(Color::White))
        || passes >= 2
}

pub fn derive_status(state: &GameState) -> Status {
    if is_terminal(state) {
        Status::End
    } else if state.is_started() {
        Status::InProgress
    } else {
        Status::NotStarted
    }
}
