//! Change notification and the observed game handle

use rustc_hash::FxHashMap;

use crate::board::Hex;
use crate::cell::{Cell, Color};
use crate::error::Result;
use crate::game::{GameState, Turn};
use crate::model::ReadOnlyModel;
use crate::status::Status;

/// Observer notified after every completed `move_to`, `pass` or `start_game`
pub trait Listener {
    fn update(&mut self, model: &dyn ReadOnlyModel);
}

impl<F: FnMut(&dyn ReadOnlyModel)> Listener for F {
    fn update(&mut self, model: &dyn ReadOnlyModel) {
        self(model)
    }
}

/// A game plus the listeners registered on it.
///
/// Listeners run synchronously, in registration order, exactly once per
/// successful mutating call. Rejected calls notify nobody.
pub struct Reversi {
    state: GameState,
    listeners: Vec<Box<dyn Listener>>,
}

impl Reversi {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self::from_state(GameState::new(size)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    /// Register a listener
    pub fn subscribe(&mut self, listener: impl Listener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Read-only access to the live state. Clone it to simulate moves.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn move_to(&mut self, q: i32, r: i32) -> Result<Turn> {
        let turn = self.state.move_to(q, r)?;
        self.notify();
        Ok(turn)
    }

    pub fn pass(&mut self) {
        self.state.pass();
        self.notify();
    }

    pub fn start_game(&mut self) {
        self.state.start_game();
        tracing::info!("game started on a size {} board", self.state.size());
        self.notify();
    }

    fn notify(&mut self) {
        let state = &self.state;
        for listener in &mut self.listeners {
            listener.update(state);
        }
    }
}

impl std::fmt::Debug for Reversi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reversi")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ReadOnlyModel for Reversi {
    fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    fn score(&self, color: Color) -> usize {
        self.state.score(color)
    }

    fn cell(&self, q: i32, r: i32) -> Result<Cell> {
        self.state.cell(q, r)
    }

    fn board_size(&self) -> usize {
        self.state.size()
    }

    fn snapshot(&self) -> FxHashMap<Hex, Cell> {
        self.state.board().snapshot()
    }

    fn has_no_moves(&self, color: Color) -> bool {
        self.state.has_no_moves(color)
    }

    fn legal_moves(&self) -> Vec<Hex> {
        self.state.legal_moves()
    }

    fn current_color(&self) -> Color {
        self.state.current_color()
    }

    fn passes(&self) -> u32 {
        self.state.passes()
    }

    fn status(&self) -> Status {
        self.state.status()
    }
}
