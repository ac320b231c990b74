//! GameConfig - board size and participants for one game

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::board::MIN_BOARD_SIZE;
use crate::player::PlayerKind;
use crate::runner::DEFAULT_MAX_TURNS;
use crate::strategy::StrategyKind;

/// Game setup, loadable from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the hexagon
    pub board_size: usize,
    pub black: PlayerKind,
    pub white: PlayerKind,
    /// Seed for random strategies (None = fixed default)
    pub seed: Option<u64>,
    pub max_turns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            black: PlayerKind::Human,
            white: PlayerKind::Ai(StrategyKind::CaptureMost),
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl GameConfig {
    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.board_size < MIN_BOARD_SIZE {
            bail!(
                "board_size must be at least {}, got {}",
                MIN_BOARD_SIZE,
                self.board_size
            );
        }
        if self.max_turns == 0 {
            bail!("max_turns must be positive");
        }
        Ok(())
    }

    /// Seed actually used for random strategies
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(42)
    }
}
