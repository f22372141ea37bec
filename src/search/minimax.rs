//! Plain minimax over the full remaining game tree
//!
//! No pruning and no memoization: every reachable position below the
//! root is visited. The board is used as scratch space and restored
//! before each call returns.

use crate::board::Board;

use super::{mover, terminal_score, Placement, SearchStats, SCORE_CEIL, SCORE_FLOOR};

/// Best achievable score for the side denoted by `maximizing`
/// (O when true, X when false) under optimal play by both sides.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    minimax_counted(board, depth, maximizing, &mut stats)
}

/// Same as [`minimax`], recording visited nodes into `stats`.
pub fn minimax_counted(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if let Some(score) = terminal_score(board, depth) {
        stats.leaves += 1;
        return score;
    }

    let mark = mover(maximizing);
    let mut best = if maximizing { SCORE_FLOOR } else { SCORE_CEIL };

    for cell in board.empty_cells() {
        let score = {
            let mut placed = Placement::new(board, cell, mark);
            minimax_counted(&mut placed, depth + 1, !maximizing, stats)
        };

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
