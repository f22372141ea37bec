//! Search module for the tic-tac-toe agents
//!
//! Contains:
//! - Plain minimax over the full game tree
//! - Minimax with alpha-beta pruning
//! - Score bounds and the scratch-placement guard both searches share
//!
//! O is always the maximizer and X the minimizer. Terminal scores are
//! depth-adjusted so quicker wins and slower losses are preferred.

pub mod alphabeta;
pub mod minimax;

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Mark};
use crate::rules::has_win;

pub use alphabeta::{minimax_alpha_beta, minimax_alpha_beta_counted};
pub use minimax::{minimax, minimax_counted};

/// Magnitude of a win found at depth 0
pub const WIN_SCORE: i32 = 10;

/// Starting value for a maximizing node. Never a reachable score.
pub const SCORE_FLOOR: i32 = -1000;

/// Starting value for a minimizing node. Never a reachable score.
pub const SCORE_CEIL: i32 = 1000;

/// Counters collected while walking the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every node entered, terminal or not
    pub nodes: u64,
    /// Terminal positions scored
    pub leaves: u64,
    /// Sibling loops abandoned by a beta <= alpha cutoff
    pub cutoffs: u64,
}

/// Score a finished position, or `None` if play continues.
#[inline]
pub fn terminal_score(board: &Board, depth: i32) -> Option<i32> {
    if has_win(board, Mark::O) {
        Some(WIN_SCORE - depth)
    } else if has_win(board, Mark::X) {
        Some(depth - WIN_SCORE)
    } else if board.is_full() {
        Some(0)
    } else {
        None
    }
}

/// Mark of the side to move at a node
#[inline]
pub(crate) fn mover(maximizing: bool) -> Mark {
    if maximizing {
        Mark::O
    } else {
        Mark::X
    }
}

/// A mark placed on the board for the duration of one evaluation.
///
/// The cell is cleared again when the guard drops, so every exit path
/// (including unwinding) leaves the board as it was found.
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Placement<'a> {
    #[inline]
    pub fn new(board: &'a mut Board, index: usize, mark: Mark) -> Self {
        debug_assert!(board.is_empty(index));
        board.place(index, mark);
        Self { board, index }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    #[inline]
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}
