//! Game runner - drives a full game between two players

use serde::{Deserialize, Serialize};

use crate::board::Hex;
use crate::cell::Color;
use crate::error::Result;
use crate::game::{GameResult, Turn};
use crate::model::ReadOnlyModel;
use crate::notify::Reversi;
use crate::player::Player;

/// Default cap on turns per game
pub const DEFAULT_MAX_TURNS: usize = 1000;

/// One completed turn
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Place { color: Color, at: Hex, flipped: usize },
    Pass { color: Color },
    ForcedPass { color: Color },
}

/// Outcome of a single game
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecord {
    pub result: GameResult,
    pub black_score: usize,
    pub white_score: usize,
    pub turns: usize,
    pub history: Vec<Action>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Color> {
        match self.result {
            GameResult::BlackWins => Some(Color::Black),
            GameResult::WhiteWins => Some(Color::White),
            GameResult::Draw | GameResult::Unfinished => None,
        }
    }
}

/// Turn orchestrator. Asks the player whose color is to move, then applies
/// the answer: a hex becomes `move_to`, `None` becomes `pass`.
#[derive(Clone, Debug)]
pub struct GameRunner {
    max_turns: usize,
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}

impl GameRunner {
    pub fn new(max_turns: usize) -> Self {
        Self { max_turns }
    }

    /// Play until the game ends or the turn cap is hit.
    ///
    /// An illegal move proposed by a player is returned as an error; the game
    /// is left exactly as it was before that proposal.
    pub fn play(
        &self,
        game: &mut Reversi,
        black: &mut dyn Player,
        white: &mut dyn Player,
    ) -> Result<GameRecord> {
        if !game.state().is_started() {
            game.start_game();
        }

        let mut history = Vec::new();

        while !game.is_game_over() && history.len() < self.max_turns {
            let color = game.current_color();
            let player: &mut dyn Player = match color {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };

            let action = match player.choose_move(game.state()) {
                Some(hex) => match game.move_to(hex.q, hex.r)? {
                    Turn::Placed { at, flipped } => Action::Place {
                        color,
                        at,
                        flipped: flipped.len(),
                    },
                    Turn::ForcedPass => Action::ForcedPass { color },
                },
                None => {
                    game.pass();
                    Action::Pass { color }
                }
            };

            history.push(action);
        }

        let record = GameRecord {
            result: game.state().result(),
            black_score: game.score(Color::Black),
            white_score: game.score(Color::White),
            turns: history.len(),
            history,
        };

        tracing::info!(
            "Game finished: {:?} ({} - {}, {} turns)",
            record.result,
            record.black_score,
            record.white_score,
            record.turns
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReversiError;
    use crate::game::GameState;
    use crate::player::AiPlayer;
    use crate::strategy::{CaptureMost, RandomMove};

    /// Replays a fixed script, then passes
    struct Scripted {
        color: Color,
        moves: Vec<Hex>,
    }

    impl Player for Scripted {
        fn color(&self) -> Color {
            self.color
        }

        fn is_ai(&self) -> bool {
            false
        }

        fn choose_move(&mut self, _game: &GameState) -> Option<Hex> {
            if self.moves.is_empty() {
                None
            } else {
                Some(self.moves.remove(0))
            }
        }
    }

    fn scripted(color: Color, moves: &[(i32, i32)]) -> Scripted {
        Scripted {
            color,
            moves: moves.iter().map(|&(q, r)| Hex::new(q, r)).collect(),
        }
    }

    #[test]
    fn test_scripted_game() {
        let mut game = Reversi::new(3).unwrap();
        let mut black = scripted(Color::Black, &[(2, -1), (-1, -1), (-1, 2)]);
        let mut white = scripted(Color::White, &[(1, -2), (1, 1), (-2, 1)]);

        let record = GameRunner::default().play(&mut game, &mut black, &mut white).unwrap();
        assert_eq!(record.result, GameResult::WhiteWins);
        assert_eq!((record.black_score, record.white_score), (4, 8));
        assert_eq!(record.turns, 6);
        assert_eq!(
            record.history[0],
            Action::Place { color: Color::Black, at: Hex::new(2, -1), flipped: 1 }
        );
        assert_eq!(record.winner(), Some(Color::White));
    }

    #[test]
    fn test_passing_players_end_the_game() {
        let mut game = Reversi::new(4).unwrap();
        let mut black = scripted(Color::Black, &[]);
        let mut white = scripted(Color::White, &[]);

        let record = GameRunner::default().play(&mut game, &mut black, &mut white).unwrap();
        assert_eq!(record.turns, 2);
        assert_eq!(record.result, GameResult::Draw);
        assert_eq!(record.history[1], Action::Pass { color: Color::White });
    }

    #[test]
    fn test_illegal_proposal_is_reported() {
        let mut game = Reversi::new(3).unwrap();
        let mut black = scripted(Color::Black, &[(2, 0)]);
        let mut white = scripted(Color::White, &[]);

        let err = GameRunner::default().play(&mut game, &mut black, &mut white).unwrap_err();
        assert_eq!(err, ReversiError::IllegalMove { q: 2, r: 0 });
        assert_eq!(game.score(Color::Black), 3);
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn test_ai_game_terminates() {
        let mut game = Reversi::new(5).unwrap();
        let mut black = AiPlayer::new(Color::Black, Box::new(CaptureMost));
        let mut white = AiPlayer::new(Color::White, Box::new(RandomMove::with_seed(3)));

        let record = GameRunner::default().play(&mut game, &mut black, &mut white).unwrap();
        assert!(game.is_game_over());
        assert_ne!(record.result, GameResult::Unfinished);
        assert!(record.black_score + record.white_score <= 61);
    }

    #[test]
    fn test_turn_cap() {
        let mut game = Reversi::new(6).unwrap();
        let mut black = AiPlayer::new(Color::Black, Box::new(CaptureMost));
        let mut white = AiPlayer::new(Color::White, Box::new(CaptureMost));

        let record = GameRunner::new(4).play(&mut game, &mut black, &mut white).unwrap();
        assert_eq!(record.turns, 4);
        assert_eq!(record.result, GameResult::Unfinished);
        assert_eq!(record.winner(), None);
    }
}
