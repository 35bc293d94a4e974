use std::fmt::{self, Display, Formatter};

use sweep_core::{CellView, Game, GameState};

/// Text rendering of a game, one character per cell.
pub struct BoardDisplay<'a>(pub &'a Game);

fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Open(0) => '.',
        CellView::Open(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => '*',
        CellView::Exploded => 'X',
    }
}

impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let game = self.0;

        write!(f, "    ")?;
        for col in 0..game.cols() {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..game.rows() {
            write!(f, "{:>3} ", row)?;
            for col in 0..game.cols() {
                let view = game.cell_view((row, col)).map_err(|_| fmt::Error)?;
                write!(f, "{:>3}", glyph(view))?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "moves: {}  mines left: {}",
            game.move_count(),
            game.mines_left()
        )?;
        match game.state() {
            GameState::InProgress => Ok(()),
            GameState::Won => write!(f, "  -- cleared!"),
            GameState::Lost => write!(f, "  -- boom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use sweep_core::{Board, FlagPolicy};

    use super::*;

    #[test]
    fn renders_views_and_counters() {
        let board = Board::from_mine_coords((2, 3), &[(0, 0)]).unwrap();
        let mut game = Game::with_board(board, FlagPolicy::Cosmetic);
        game.toggle_flag((0, 0)).unwrap();
        game.reveal((1, 2)).unwrap();

        let text = BoardDisplay(&game).to_string();

        assert_eq!(
            text,
            "      0  1  2\n  0   F  1  .\n  1   #  1  .\nmoves: 1  mines left: 0"
        );
    }

    #[test]
    fn renders_lost_board() {
        let board = Board::from_mine_coords((1, 2), &[(0, 1)]).unwrap();
        let mut game = Game::with_board(board, FlagPolicy::Cosmetic);
        game.reveal((0, 1)).unwrap();

        let text = BoardDisplay(&game).to_string();

        assert!(text.contains("  1  X\n"));
        assert!(text.ends_with("-- boom"));
    }
}
