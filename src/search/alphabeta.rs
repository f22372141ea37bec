//! Minimax with alpha-beta pruning
//!
//! Same terminal scoring and move order as [`super::minimax`], with an
//! `alpha`/`beta` window threaded through the recursion. Once
//! `beta <= alpha` at a node, its remaining siblings cannot change the
//! result and are skipped. Root scores match plain minimax exactly.
//!
//! # Example
//!
//! ```
//! use tictactoe::search::{minimax, minimax_alpha_beta, SCORE_CEIL, SCORE_FLOOR};
//! use tictactoe::Board;
//!
//! let mut board: Board = "X...O....".parse().unwrap();
//! let pruned = minimax_alpha_beta(&mut board, 0, false, SCORE_FLOOR, SCORE_CEIL);
//! assert_eq!(pruned, minimax(&mut board, 0, false));
//! ```

use crate::board::Board;

use super::{mover, terminal_score, Placement, SearchStats, SCORE_CEIL, SCORE_FLOOR};

/// Best achievable score for the side denoted by `maximizing`, searched
/// within the window (`alpha`, `beta`).
pub fn minimax_alpha_beta(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    alpha: i32,
    beta: i32,
) -> i32 {
    let mut stats = SearchStats::default();
    minimax_alpha_beta_counted(board, depth, maximizing, alpha, beta, &mut stats)
}

/// Same as [`minimax_alpha_beta`], recording visited nodes and cutoffs
/// into `stats`.
pub fn minimax_alpha_beta_counted(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
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
            minimax_alpha_beta_counted(&mut placed, depth + 1, !maximizing, alpha, beta, stats)
        };

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax_counted;

    fn full_window(board: &mut Board, maximizing: bool, stats: &mut SearchStats) -> i32 {
        minimax_alpha_beta_counted(board, 0, maximizing, SCORE_FLOOR, SCORE_CEIL, stats)
    }

    #[test]
    fn test_terminal_board_returns_immediately() {
        let mut board: Board = "OOOXX.X..".parse().unwrap();
        let mut stats = SearchStats::default();
        assert_eq!(full_window(&mut board, false, &mut stats), 10);
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_matches_minimax_mid_game() {
        for text in ["X...O....", "XO..X....", "X.O.O.X..", "....X...."] {
            for maximizing in [true, false] {
                let mut board: Board = text.parse().unwrap();
                let mut plain = SearchStats::default();
                let mut pruned = SearchStats::default();
                let expected = minimax_counted(&mut board, 0, maximizing, &mut plain);
                let actual = full_window(&mut board, maximizing, &mut pruned);
                assert_eq!(actual, expected, "board {} maximizing {}", text, maximizing);
                assert!(pruned.leaves <= plain.leaves);
            }
        }
    }

    #[test]
    fn test_prunes_mid_game_position() {
        let mut board: Board = "X...O....".parse().unwrap();
        let mut plain = SearchStats::default();
        let mut pruned = SearchStats::default();
        minimax_counted(&mut board, 0, false, &mut plain);
        full_window(&mut board, false, &mut pruned);

        assert!(pruned.cutoffs > 0);
        assert!(pruned.leaves < plain.leaves);
        assert!(pruned.nodes < plain.nodes);
    }

    #[test]
    fn test_board_restored_after_cutoff() {
        let mut board: Board = "XO..X....".parse().unwrap();
        let before = board;
        let mut stats = SearchStats::default();
        full_window(&mut board, true, &mut stats);
        assert!(stats.cutoffs > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_closed_window_cuts_after_first_child() {
        // With alpha already at the ceiling any child triggers a cutoff
        let mut board: Board = "X...O....".parse().unwrap();
        let mut stats = SearchStats::default();
        minimax_alpha_beta_counted(&mut board, 0, false, SCORE_CEIL, SCORE_CEIL, &mut stats);
        assert!(stats.cutoffs >= 1);
    }
}
