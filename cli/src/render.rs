use std::fmt::Write;

use minesweep_core::{Board, CellView, GameState};

fn cell_char(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::Exploded => 'X',
        CellView::IncorrectFlag => '!',
    }
}

/// Draws the board as text, with column numbers modulo 10 on top and row
/// numbers on the left.
pub(crate) fn render(board: &Board) -> String {
    let snapshot = board.snapshot();
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..board.width() {
        let _ = write!(out, "{}", col % 10);
    }
    out.push('\n');

    for (row, cells) in snapshot.rows().into_iter().enumerate() {
        let _ = write!(out, "{row:>3} ");
        out.extend(cells.iter().map(|&view| cell_char(view)));
        out.push('\n');
    }

    let state = match board.state() {
        GameState::NotStarted => "Ready",
        GameState::Playing => "Playing",
        GameState::Won => "Won",
        GameState::Lost => "Lost",
    };
    let _ = write!(out, "Mines left: {}  {state}", board.flags_left());
    out
}
