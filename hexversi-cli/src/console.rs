//! Console player - reads a human's moves from a text stream

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use hexversi_core::{Color, GameState, Hex, Player};

/// What one input line asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Place(Hex),
    Pass,
}

/// Parse `q r`, `q,r` or `pass`
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("pass") || line.eq_ignore_ascii_case("p") {
        return Some(Command::Pass);
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let q = parts.next()?.parse().ok()?;
    let r = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Place(Hex::new(q, r)))
}

/// Human player on a line-based stream. End of input counts as passing.
///
/// The input is shared so two humans at one terminal read from a single
/// stream.
pub struct ConsolePlayer<R, W> {
    color: Color,
    input: Rc<RefCell<R>>,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(color: Color, input: Rc<RefCell<R>>, output: W) -> Self {
        Self {
            color,
            input,
            output,
        }
    }

    /// Whether the engine would accept `hex` from this player right now.
    /// A stuck player may name any on-board cell; the engine turns it into a
    /// forced pass.
    fn acceptable(&self, game: &GameState, hex: Hex) -> bool {
        if !game.board().contains(hex) {
            return false;
        }
        game.has_no_moves(self.color) || game.is_valid_move(hex, self.color)
    }

    fn prompt(&mut self, game: &GameState) {
        let hint = if game.has_no_moves(self.color) {
            " (no legal moves, any cell passes)"
        } else {
            ""
        };
        // Prompt failures are not fatal; input still drives the game
        let _ = write!(self.output, "{} to move{} [q r | pass]: ", self.color, hint);
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn is_ai(&self) -> bool {
        false
    }

    fn choose_move(&mut self, game: &GameState) -> Option<Hex> {
        loop {
            self.prompt(game);

            let mut line = String::new();
            match self.input.borrow_mut().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            match parse_command(&line) {
                Some(Command::Pass) => return None,
                Some(Command::Place(hex)) if self.acceptable(game, hex) => return Some(hex),
                Some(Command::Place(hex)) => {
                    tracing::warn!("Rejected move {} for {}", hex, self.color);
                    let _ = writeln!(self.output, "INCORRECT MOVE: {} IS NOT VALID", hex);
                }
                None => {
                    let _ = writeln!(self.output, "Could not read a move from {:?}", line.trim());
                }
            }
        }
    }
}
