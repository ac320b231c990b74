//! One-ply greedy move selection
//!
//! Every strategy reads the live game through a shared reference and scores
//! candidates by playing them on a private clone.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::Hex;
use crate::game::GameState;

/// Picks a move for the color to move, or `None` for no preference
pub trait Strategy {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game: &GameState) -> Option<Hex>;
}

/// Mover's tile count after playing `hex` on a copy of the game
fn score_after(game: &GameState, hex: Hex) -> Option<usize> {
    let mover = game.current_color();
    let mut copy = game.clone();
    copy.move_to(hex.q, hex.r).ok()?;
    Some(copy.score(mover))
}

/// Highest-scoring candidate; ties go to the earliest one
fn best_by_score(game: &GameState, candidates: &[Hex]) -> Option<Hex> {
    let mut best: Option<(Hex, usize)> = None;
    for &hex in candidates {
        let Some(score) = score_after(game, hex) else {
            continue;
        };
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((hex, score));
        }
    }
    best.map(|(hex, _)| hex)
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Maximize the mover's tile count after the move
#[derive(Clone, Debug, Default)]
pub struct CaptureMost;

impl Strategy for CaptureMost {
    fn name(&self) -> &str {
        "capture-most"
    }

    fn choose_move(&mut self, game: &GameState) -> Option<Hex> {
        best_by_score(game, &game.legal_moves())
    }
}

/// Capture-most, skipping cells next to a corner unless nothing else is legal
#[derive(Clone, Debug, Default)]
pub struct AvoidCorners;

impl Strategy for AvoidCorners {
    fn name(&self) -> &str {
        "avoid-corners"
    }

    fn choose_move(&mut self, game: &GameState) -> Option<Hex> {
        let moves = game.legal_moves();
        let safe: Vec<Hex> = moves
            .iter()
            .copied()
            .filter(|&hex| !game.board().is_adjacent_to_corner(hex))
            .collect();

        if safe.is_empty() {
            best_by_score(game, &moves)
        } else {
            best_by_score(game, &safe)
        }
    }
}

/// Take a corner whenever one is legal, otherwise capture-most
#[derive(Clone, Debug, Default)]
pub struct PreferCorners;

impl Strategy for PreferCorners {
    fn name(&self) -> &str {
        "prefer-corners"
    }

    fn choose_move(&mut self, game: &GameState) -> Option<Hex> {
        let moves = game.legal_moves();
        let corners: Vec<Hex> = moves
            .iter()
            .copied()
            .filter(|&hex| game.board().is_corner(hex))
            .collect();

        best_by_score(game, &corners).or_else(|| best_by_score(game, &moves))
    }
}

/// Uniformly random legal move from a seeded generator
#[derive(Clone, Debug)]
pub struct RandomMove {
    rng: ChaCha8Rng,
}

impl RandomMove {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomMove {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game: &GameState) -> Option<Hex> {
        game.legal_moves().choose(&mut self.rng).copied()
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// Serializable strategy selector used by configs and the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    CaptureMost,
    AvoidCorners,
    PreferCorners,
    Random,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::CaptureMost,
        StrategyKind::AvoidCorners,
        StrategyKind::PreferCorners,
        StrategyKind::Random,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::CaptureMost => "capture-most",
            StrategyKind::AvoidCorners => "avoid-corners",
            StrategyKind::PreferCorners => "prefer-corners",
            StrategyKind::Random => "random",
        }
    }

    /// Instantiate the strategy. Only `Random` uses the seed.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::CaptureMost => Box::new(CaptureMost),
            StrategyKind::AvoidCorners => Box::new(AvoidCorners),
            StrategyKind::PreferCorners => Box::new(PreferCorners),
            StrategyKind::Random => Box::new(RandomMove::with_seed(seed)),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown strategy: {}", s))
    }
}

// ============================================================================
// TESTS
// ============================================================================
