//! HEXVERSI Core - Reversi on a hexagonal board
//!
//! This crate provides the core game logic for HEXVERSI:
//! - Board geometry (hex grid with axial coordinates) and the board store
//! - Six-direction capture engine
//! - Turn/pass state machine and status derivation
//! - Change notification and a read-only model projection
//! - One-ply greedy strategies, players and a game runner
//! - Text rendering and JSON game configuration

pub mod board;
pub mod capture;
pub mod cell;
pub mod config;
pub mod error;
pub mod game;
pub mod model;
pub mod notify;
pub mod player;
pub mod runner;
pub mod status;
pub mod strategy;
pub mod text_view;

// Re-exports for convenient access
pub use board::{cell_count, Board, Hex, DIRECTIONS, MIN_BOARD_SIZE};
pub use capture::{compute_flips, flow, has_no_moves, is_valid_move, legal_moves};
pub use cell::{Cell, Color};
pub use config::GameConfig;
pub use error::{Result, ReversiError};
pub use game::{GameResult, GameState, Turn};
pub use model::ReadOnlyModel;
pub use notify::{Listener, Reversi};
pub use player::{AiPlayer, Player, PlayerKind};
pub use runner::{Action, GameRecord, GameRunner, DEFAULT_MAX_TURNS};
pub use status::{derive_status, Status};
pub use strategy::{AvoidCorners, CaptureMost, PreferCorners, RandomMove, Strategy, StrategyKind};
pub use text_view::TextView;
