//! Property-based tests for the two search algorithms.
//!
//! Positions are generated by random legal play from the empty board, so
//! only reachable states are checked.

use proptest::prelude::*;
use tictactoe::search::{
    minimax, minimax_alpha_beta, minimax_alpha_beta_counted, minimax_counted, SearchStats,
    SCORE_CEIL, SCORE_FLOOR,
};
use tictactoe::{best_move_alpha_beta, best_move_minimax, is_terminal, Board, Mark};

/// Play the given choices from the empty board (X first), stopping early
/// at a terminal position. Returns the board and the side to move.
fn play_choices(choices: &[usize]) -> (Board, Mark) {
    let mut board = Board::new();
    let mut side = Mark::X;
    for &choice in choices {
        if is_terminal(&board) {
            break;
        }
        let empty = board.empty_cells();
        board.place(empty[choice % empty.len()], side);
        side = side.opponent();
    }
    (board, side)
}

/// Reachable position after at least two moves
fn arb_position() -> impl Strategy<Value = (Board, Mark)> {
    prop::collection::vec(0usize..9, 2..9).prop_map(|choices| play_choices(&choices))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn alpha_beta_score_matches_minimax((board, _side) in arb_position(), maximizing in any::<bool>()) {
        let mut scratch = board;
        let plain = minimax(&mut scratch, 0, maximizing);
        let pruned = minimax_alpha_beta(&mut scratch, 0, maximizing, SCORE_FLOOR, SCORE_CEIL);
        prop_assert_eq!(plain, pruned);
        prop_assert_eq!(scratch, board);
    }

    #[test]
    fn alpha_beta_never_scores_more_leaves((board, _side) in arb_position(), maximizing in any::<bool>()) {
        let mut scratch = board;
        let mut plain = SearchStats::default();
        let mut pruned = SearchStats::default();
        minimax_counted(&mut scratch, 0, maximizing, &mut plain);
        minimax_alpha_beta_counted(&mut scratch, 0, maximizing, SCORE_FLOOR, SCORE_CEIL, &mut pruned);
        prop_assert!(pruned.leaves <= plain.leaves);
        prop_assert!(pruned.nodes <= plain.nodes);
    }

    #[test]
    fn scores_stay_within_win_bounds((board, _side) in arb_position(), maximizing in any::<bool>()) {
        let mut scratch = board;
        let score = minimax(&mut scratch, 0, maximizing);
        prop_assert!((-10..=10).contains(&score));
    }

    #[test]
    fn selectors_pick_empty_cells((board, side) in arb_position()) {
        let mut scratch = board;
        let chosen = match side {
            Mark::X => best_move_minimax(&mut scratch),
            _ => best_move_alpha_beta(&mut scratch),
        };
        prop_assert_eq!(scratch, board);

        if board.is_full() {
            prop_assert_eq!(chosen, None);
        } else {
            let cell = chosen.expect("non-full board has a move");
            prop_assert!(board.is_empty(cell));
        }
    }
}
