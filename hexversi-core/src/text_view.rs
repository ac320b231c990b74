//! Plain-text board rendering

use std::fmt;

use crate::cell::Cell;
use crate::model::ReadOnlyModel;

/// Renders any read-only model as rows of `_`, `X` (black) and `O` (white).
///
/// Rows run from r = -(N-1) to N-1 and are indented by |r| so the hexagon
/// lines up. Trailing whitespace of the whole picture is stripped.
pub struct TextView<'a> {
    model: &'a dyn ReadOnlyModel,
}

impl<'a> TextView<'a> {
    pub fn new(model: &'a dyn ReadOnlyModel) -> Self {
        Self { model }
    }

    /// Append the board to any text sink
    pub fn render(&self, out: &mut impl fmt::Write) -> fmt::Result {
        write!(out, "{}", self)
    }

    fn rows(&self) -> String {
        let n = self.model.board_size() as i32;
        let mut text = String::new();

        for r in (-n + 1)..n {
            if r > -n + 1 {
                text.push('\n');
            }
            text.push_str(&" ".repeat(r.unsigned_abs() as usize));
            for q in (-n + 1)..n {
                if let Ok(cell) = self.model.cell(q, r) {
                    text.push(Cell::symbol(cell));
                    text.push(' ');
                }
            }
        }

        text
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rows().trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    fn occurrences(text: &str, symbol: char) -> usize {
        text.chars().filter(|&c| c == symbol).count()
    }

    #[test]
    fn test_initial_board() {
        let game = GameState::new(3).unwrap();
        let text = TextView::new(&game).to_string();
        assert_eq!(
            text,
            "  _ _ _ \n _ X O _ \n_ O _ X _ \n _ X O _ \n  _ _ _"
        );
        assert_eq!(text.len(), 47);
        assert_eq!(occurrences(&text, 'X'), 3);
        assert_eq!(occurrences(&text, 'O'), 3);
        assert_eq!(occurrences(&text, '_'), 13);
    }

    #[test]
    fn test_render_after_moves() {
        let mut game = GameState::new(3).unwrap();
        for (q, r) in [(2, -1), (1, -2), (-1, -1), (1, 1), (-1, 2), (-2, 1)] {
            game.move_to(q, r).unwrap();
        }

        let mut out = String::new();
        TextView::new(&game).render(&mut out).unwrap();
        assert_eq!(
            out,
            "  _ O _ \n X O O X \n_ O _ X _ \n O O O O \n  _ X _"
        );
        assert_eq!(occurrences(&out, 'X'), 4);
        assert_eq!(occurrences(&out, 'O'), 8);
    }

    #[test]
    fn test_row_shape() {
        let game = GameState::new(5).unwrap();
        let text = TextView::new(&game).to_string();
        let widths: Vec<usize> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).count())
            .collect();
        assert_eq!(widths, vec![5, 6, 7, 8, 9, 8, 7, 6, 5]);
    }
}
