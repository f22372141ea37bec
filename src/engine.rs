//! Move selection for the two scripted agents
//!
//! X is played by plain minimax and acts as the minimizer at the root.
//! O is played by alpha-beta minimax and acts as the maximizer. Both
//! selectors try every empty cell in ascending order and keep the first
//! cell reaching the best score, so ties go to the lowest index.
//!
//! # Example
//!
//! ```
//! use tictactoe::{best_move_minimax, Board};
//!
//! // X to move: completing the middle row wins outright
//! let mut board: Board = "OO.XX....".parse().unwrap();
//! assert_eq!(best_move_minimax(&mut board), Some(5));
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Mark};
use crate::search::{
    minimax_alpha_beta_counted, minimax_counted, Placement, SearchStats, SCORE_CEIL, SCORE_FLOOR,
};

/// The search algorithm behind a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    /// Plain minimax, plays X
    Minimax,
    /// Minimax with alpha-beta pruning, plays O
    AlphaBeta,
}

impl Agent {
    /// Agent assigned to a side. `Mark::Empty` has no agent.
    pub fn for_side(side: Mark) -> Option<Agent> {
        match side {
            Mark::X => Some(Agent::Minimax),
            Mark::O => Some(Agent::AlphaBeta),
            Mark::Empty => None,
        }
    }

    /// Display label used in logs and the end-of-game banner
    pub fn label(self) -> &'static str {
        match self {
            Agent::Minimax => "Minimax",
            Agent::AlphaBeta => "Alpha-Beta",
        }
    }

    /// Pick a move for this agent's side, with search statistics.
    ///
    /// The board is used as scratch space and is unchanged on return.
    pub fn choose(self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let mut stats = SearchStats::default();

        let (best_move, score) = match self {
            Agent::Minimax => select_minimax(board, &mut stats),
            Agent::AlphaBeta => select_alpha_beta(board, &mut stats),
        };

        let result = MoveResult {
            agent: self,
            best_move,
            score,
            stats,
            time_ms: start.elapsed().as_millis() as u64,
        };

        debug!(
            agent = self.label(),
            cell = ?result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            leaves = result.stats.leaves,
            cutoffs = result.stats.cutoffs,
            time_ms = result.time_ms,
            "Agent selected move"
        );

        result
    }
}

/// Result of a move selection with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Agent that produced the move
    pub agent: Agent,
    /// Chosen cell, `None` on a full board
    pub best_move: Option<usize>,
    /// Root score of the chosen cell (O-positive)
    pub score: i32,
    /// Nodes, leaves and cutoffs across all root children
    pub stats: SearchStats,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Best cell for X using plain minimax, or `None` if the board is full.
pub fn best_move_minimax(board: &mut Board) -> Option<usize> {
    select_minimax(board, &mut SearchStats::default()).0
}

/// Best cell for O using alpha-beta minimax, or `None` if the board is full.
pub fn best_move_alpha_beta(board: &mut Board) -> Option<usize> {
    select_alpha_beta(board, &mut SearchStats::default()).0
}

/// X minimizes: keep the strictly smallest score, first cell on ties.
fn select_minimax(board: &mut Board, stats: &mut SearchStats) -> (Option<usize>, i32) {
    let mut best_score = SCORE_CEIL;
    let mut best_move = None;

    for cell in board.empty_cells() {
        let score = {
            let mut placed = Placement::new(board, cell, Mark::X);
            minimax_counted(&mut placed, 0, true, stats)
        };

        if score < best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    (best_move, best_score)
}

/// O maximizes: keep the strictly largest score, first cell on ties.
/// Every root child is searched with the full window.
fn select_alpha_beta(board: &mut Board, stats: &mut SearchStats) -> (Option<usize>, i32) {
    let mut best_score = SCORE_FLOOR;
    let mut best_move = None;

    for cell in board.empty_cells() {
        let score = {
            let mut placed = Placement::new(board, cell, Mark::O);
            minimax_alpha_beta_counted(&mut placed, 0, false, SCORE_FLOOR, SCORE_CEIL, stats)
        };

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    (best_move, best_score)
}
