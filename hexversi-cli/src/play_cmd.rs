//! Play command - one game in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_config(), build_players(), report_outcome()
//! - Level 3: build_player()
//! - Level 4: board printing

use std::cell::RefCell;
use std::io::{self, StdinLock};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::Args;

use hexversi_core::{
    Color, GameConfig, GameRecord, GameRunner, Player, PlayerKind, ReadOnlyModel, Reversi,
    TextView,
};

use crate::console::ConsolePlayer;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Game config JSON file (flags below override it)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Black player: human, capture-most, avoid-corners, prefer-corners, random
    #[arg(long, value_name = "KIND")]
    pub black: Option<PlayerKind>,

    /// White player: human, capture-most, avoid-corners, prefer-corners, random
    #[arg(long, value_name = "KIND")]
    pub white: Option<PlayerKind>,

    /// Maximum turns before the game is abandoned
    #[arg(long)]
    pub max_turns: Option<usize>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Resolve the game config (file, then flags)
/// 2. Set up the game with a board printer attached
/// 3. Play it out and report the result
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = resolve_config(&args, seed)?;

    tracing::info!(
        "Starting game: {} (black) vs {} (white) on size {}",
        config.black,
        config.white,
        config.board_size
    );

    let mut game = Reversi::new(config.board_size)?;
    game.subscribe(print_board);

    let (mut black, mut white) = build_players(&config);
    let record = GameRunner::new(config.max_turns).play(&mut game, black.as_mut(), white.as_mut())?;

    report_outcome(&record);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Defaults, then the config file, then command-line overrides
fn resolve_config(args: &PlayArgs, seed: Option<u64>) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(black) = args.black {
        config.black = black;
    }
    if let Some(white) = args.white {
        config.white = white;
    }
    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    config.validate()?;
    Ok(config)
}

/// Both players; humans share one stdin reader
fn build_players(config: &GameConfig) -> (Box<dyn Player>, Box<dyn Player>) {
    let stdin = Rc::new(RefCell::new(io::stdin().lock()));
    let seed = config.effective_seed();

    let black = build_player(config.black, Color::Black, seed, &stdin);
    // Distinct stream for white so two random strategies do not mirror each other
    let white = build_player(config.white, Color::White, seed.wrapping_add(1), &stdin);

    (black, white)
}

fn report_outcome(record: &GameRecord) {
    println!("\n=== Game Over ===");
    println!("Black: {}", record.black_score);
    println!("White: {}", record.white_score);
    match record.winner() {
        Some(color) => println!("{} wins after {} turns", color, record.turns),
        None if record.black_score == record.white_score => {
            println!("Draw after {} turns", record.turns)
        }
        None => println!("Stopped after {} turns ({:?})", record.turns, record.result),
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn build_player(
    kind: PlayerKind,
    color: Color,
    seed: u64,
    stdin: &Rc<RefCell<StdinLock<'static>>>,
) -> Box<dyn Player> {
    match kind.build_ai(color, seed) {
        Some(ai) => {
            tracing::debug!("{} plays {}", color, ai.strategy_name());
            Box::new(ai)
        }
        None => Box::new(ConsolePlayer::new(color, Rc::clone(stdin), io::stdout())),
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Listener that redraws the board after every change
fn print_board(model: &dyn ReadOnlyModel) {
    println!();
    println!("{}", TextView::new(model));
    println!(
        "Black: {}  White: {}  ({} to move)",
        model.score(Color::Black),
        model.score(Color::White),
        model.current_color()
    );
}
