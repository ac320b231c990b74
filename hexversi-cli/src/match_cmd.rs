//! Match command - play games between two strategies
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::{bail, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hexversi_core::{AiPlayer, Color, GameResult, GameRunner, Reversi, StrategyKind};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// First strategy (plays black in odd-numbered games)
    #[arg(long, default_value = "capture-most")]
    pub first: StrategyKind,

    /// Second strategy (plays white in odd-numbered games)
    #[arg(long, default_value = "random")]
    pub second: StrategyKind,

    /// Number of games to play (will alternate colors)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Board side length
    #[arg(long, default_value = "6")]
    pub size: usize,

    /// Maximum turns per game
    #[arg(long, default_value = "1000")]
    pub max_turns: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Which side won a game, independent of color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    First,
    Second,
    Draw,
    Unfinished,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct MatchGame {
    game_number: usize,
    black: StrategyKind,
    white: StrategyKind,
    result: GameResult,
    outcome: Outcome,
    black_score: usize,
    white_score: usize,
    turns: usize,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    first: StrategyKind,
    second: StrategyKind,
    games: Vec<MatchGame>,
    first_wins: usize,
    second_wins: usize,
    draws: usize,
    unfinished: usize,
    avg_turns: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Play the match (multiple games, colors alternating)
/// 2. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    if args.games == 0 {
        bail!("--games must be positive");
    }

    tracing::info!(
        "Starting match: {} vs {} ({} games, size={})",
        args.first,
        args.second,
        args.games,
        args.size
    );

    let results = play_match(&args, seed)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(args: &MatchArgs, seed: Option<u64>) -> Result<MatchResults> {
    let mut rng = create_rng(seed);
    let runner = GameRunner::new(args.max_turns);
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        // Alternate colors for fairness
        let swap_colors = game_num % 2 == 1;
        let (black, white) = if swap_colors {
            (args.second, args.first)
        } else {
            (args.first, args.second)
        };

        let record = play_single_game(
            &runner,
            args.size,
            (black, white),
            swap_colors,
            game_num + 1,
            &mut rng,
        )?;

        tracing::info!(
            "Game {}: {:?} ({} - {}, {} turns)",
            record.game_number,
            record.result,
            record.black_score,
            record.white_score,
            record.turns
        );

        games.push(record);
    }

    Ok(compute_match_statistics(args.first, args.second, games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game; each strategy gets its own seed drawn from the match RNG
fn play_single_game(
    runner: &GameRunner,
    size: usize,
    (black_kind, white_kind): (StrategyKind, StrategyKind),
    swapped: bool,
    game_number: usize,
    rng: &mut ChaCha8Rng,
) -> Result<MatchGame> {
    let mut game = Reversi::new(size)?;
    let mut black = AiPlayer::new(Color::Black, black_kind.build(rng.gen()));
    let mut white = AiPlayer::new(Color::White, white_kind.build(rng.gen()));

    let record = runner.play(&mut game, &mut black, &mut white)?;

    Ok(MatchGame {
        game_number,
        black: black_kind,
        white: white_kind,
        result: record.result,
        outcome: outcome_for(record.result, swapped),
        black_score: record.black_score,
        white_score: record.white_score,
        turns: record.turns,
    })
}

/// Map a color result onto the first/second strategy
fn outcome_for(result: GameResult, swapped: bool) -> Outcome {
    match (result, swapped) {
        (GameResult::BlackWins, false) | (GameResult::WhiteWins, true) => Outcome::First,
        (GameResult::WhiteWins, false) | (GameResult::BlackWins, true) => Outcome::Second,
        (GameResult::Draw, _) => Outcome::Draw,
        (GameResult::Unfinished, _) => Outcome::Unfinished,
    }
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(
    first: StrategyKind,
    second: StrategyKind,
    games: Vec<MatchGame>,
) -> MatchResults {
    let count = |outcome: Outcome| games.iter().filter(|g| g.outcome == outcome).count();
    let first_wins = count(Outcome::First);
    let second_wins = count(Outcome::Second);
    let draws = count(Outcome::Draw);
    let unfinished = count(Outcome::Unfinished);

    let total_turns: usize = games.iter().map(|g| g.turns).sum();
    let avg_turns = if games.is_empty() {
        0.0
    } else {
        total_turns as f32 / games.len() as f32
    };

    MatchResults {
        first,
        second,
        games,
        first_wins,
        second_wins,
        draws,
        unfinished,
        avg_turns,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn rate(wins: usize, total: usize) -> f32 {
    if total > 0 {
        wins as f32 / total as f32
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        black: String,
        white: String,
        result: String,
        black_score: usize,
        white_score: usize,
        turns: usize,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        first: String,
        second: String,
        total_games: usize,
        first_wins: usize,
        second_wins: usize,
        draws: usize,
        unfinished: usize,
        avg_turns: f32,
        first_win_rate: f32,
        games: Vec<JsonGame>,
    }

    let total = results.games.len();
    let output = JsonOutput {
        first: results.first.to_string(),
        second: results.second.to_string(),
        total_games: total,
        first_wins: results.first_wins,
        second_wins: results.second_wins,
        draws: results.draws,
        unfinished: results.unfinished,
        avg_turns: results.avg_turns,
        first_win_rate: rate(results.first_wins, total),
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                black: g.black.to_string(),
                white: g.white.to_string(),
                result: format!("{:?}", g.result),
                black_score: g.black_score,
                white_score: g.white_score,
                turns: g.turns,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!(
        "{:<15} {} ({:.1}%)",
        format!("{}:", results.first),
        results.first_wins,
        rate(results.first_wins, total) * 100.0
    );
    println!(
        "{:<15} {} ({:.1}%)",
        format!("{}:", results.second),
        results.second_wins,
        rate(results.second_wins, total) * 100.0
    );
    println!(
        "{:<15} {} ({:.1}%)",
        "Draws:",
        results.draws,
        rate(results.draws, total) * 100.0
    );
    if results.unfinished > 0 {
        println!("{:<15} {}", "Unfinished:", results.unfinished);
    }
    println!("Avg turns:      {:.1}", results.avg_turns);

    println!("\n=== Game Details ===");
    for g in &results.games {
        println!(
            "Game {:>3}: {} (X) vs {} (O) -> {:?} {}-{} in {} turns",
            g.game_number, g.black, g.white, g.result, g.black_score, g.white_score, g.turns
        );
    }
}
