//! Game participants

use serde::{Deserialize, Serialize};

use crate::board::Hex;
use crate::cell::Color;
use crate::game::GameState;
use crate::strategy::{Strategy, StrategyKind};

/// A participant bound to one color
pub trait Player {
    fn color(&self) -> Color;

    fn is_ai(&self) -> bool;

    /// Next move, or `None` to pass
    fn choose_move(&mut self, game: &GameState) -> Option<Hex>;
}

/// Who controls a color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    Human,
    Ai(StrategyKind),
}

impl PlayerKind {
    /// Build the player if it is strategy-driven. Humans are supplied by the
    /// front end.
    pub fn build_ai(self, color: Color, seed: u64) -> Option<AiPlayer> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Ai(kind) => Some(AiPlayer::new(color, kind.build(seed))),
        }
    }
}

impl Default for PlayerKind {
    fn default() -> Self {
        PlayerKind::Ai(StrategyKind::CaptureMost)
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Ai(kind) => write!(f, "{}", kind),
        }
    }
}

impl std::str::FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if s == "human" {
            Ok(PlayerKind::Human)
        } else {
            s.parse().map(PlayerKind::Ai)
        }
    }
}

/// Player that delegates every decision to a strategy
pub struct AiPlayer {
    color: Color,
    strategy: Box<dyn Strategy>,
}

impl AiPlayer {
    pub fn new(color: Color, strategy: Box<dyn Strategy>) -> Self {
        Self { color, strategy }
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

impl Player for AiPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn is_ai(&self) -> bool {
        true
    }

    fn choose_move(&mut self, game: &GameState) -> Option<Hex> {
        self.strategy.choose_move(game)
    }
}
