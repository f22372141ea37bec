//! Win detection for tic-tac-toe
//!
//! A side wins by holding all three cells of any row, column or diagonal.
//! The game is terminal once either side has won or no empty cell remains.

use crate::board::{Board, Mark};

/// The eight winning index triples: rows, columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    /// Winning side, or `None` for a draw
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Draw => None,
        }
    }

    /// End-of-game banner text
    pub fn banner(self) -> &'static str {
        match self {
            Outcome::XWins => "X (Minimax) Wins!",
            Outcome::OWins => "O (Alpha-Beta) Wins!",
            Outcome::Draw => "It's a Draw!",
        }
    }
}

/// Check if `side` holds a full win-line
#[inline]
pub fn has_win(board: &Board, side: Mark) -> bool {
    winning_line(board, side).is_some()
}

/// Find the first win-line fully held by `side`
pub fn winning_line(board: &Board, side: Mark) -> Option<[usize; 3]> {
    if side == Mark::Empty {
        return None;
    }
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| board.get(i) == side))
}

/// Check if the game is over (either side won or the board is full)
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    has_win(board, Mark::X) || has_win(board, Mark::O) || board.is_full()
}

/// Classify a terminal board. Returns `None` while play can continue.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if has_win(board, Mark::X) {
        Some(Outcome::XWins)
    } else if has_win(board, Mark::O) {
        Some(Outcome::OWins)
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}
