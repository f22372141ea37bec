//! Turn-by-turn driver for a scripted game
//!
//! Each call to [`GameState::step`] performs one decision-and-commit for
//! the side to move, then hands control back to the caller (one step per
//! rendered frame in the GUI). The state moves X-to-move -> O-to-move ->
//! X-to-move until the board is terminal; once terminal, steps are no-ops.

use tracing::{info, warn};

use crate::board::{Board, Mark};
use crate::engine::{Agent, MoveResult};
use crate::error::{Error, Result};
use crate::rules::{outcome, winning_line, Outcome};

/// What a single driver step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A move was committed and play continues
    Moved {
        side: Mark,
        cell: usize,
        result: MoveResult,
    },
    /// A move (if any) was committed and the game just ended.
    /// Reported exactly once per game.
    Finished {
        last_move: Option<(Mark, usize)>,
        outcome: Outcome,
    },
    /// Nothing happened: the game had already ended, or no move could be made
    Idle,
}

/// Board, side to move and history for one game
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_turn: Mark,
    pub move_history: Vec<(Mark, usize)>,
    pub last_result: Option<MoveResult>,
    game_over: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board with X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            move_history: Vec::new(),
            last_result: None,
            game_over: None,
        }
    }

    /// Resume from an arbitrary position. The side to move must be X or O.
    pub fn from_board(board: Board, current_turn: Mark) -> Result<Self> {
        if current_turn == Mark::Empty {
            return Err(Error::InvalidTurn);
        }
        Ok(Self {
            board,
            current_turn,
            ..Self::new()
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Outcome once the game has ended
    #[inline]
    pub fn game_over(&self) -> Option<Outcome> {
        self.game_over
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Cells of the winning line, for highlighting
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.game_over
            .and_then(Outcome::winner)
            .and_then(|side| winning_line(&self.board, side))
    }

    /// Commit a mark for the side to move and flip the turn
    pub fn commit(&mut self, cell: usize) -> Result<()> {
        if self.is_over() || outcome(&self.board).is_some() {
            return Err(Error::GameOver);
        }
        let side = self.current_turn;
        self.board.try_place(cell, side)?;
        self.move_history.push((side, cell));
        self.current_turn = side.opponent();
        Ok(())
    }

    /// Run one decision-and-commit for the side to move.
    pub fn step(&mut self) -> Step {
        if self.is_over() {
            return Step::Idle;
        }

        // Position may already be terminal (e.g. resumed from a finished board)
        if let Some(result) = outcome(&self.board) {
            return self.finish(None, result);
        }

        let side = self.current_turn;
        let Some(agent) = Agent::for_side(side) else {
            warn!("No side to move");
            return Step::Idle;
        };

        let result = agent.choose(&mut self.board);
        self.last_result = Some(result);

        let Some(cell) = result.best_move else {
            // Only reachable on a full board, which the check above handles
            return Step::Idle;
        };

        if let Err(e) = self.commit(cell) {
            warn!(error = %e, cell, "Rejected engine move");
            return Step::Idle;
        }

        info!(
            side = %side.symbol(),
            agent = agent.label(),
            cell,
            score = result.score,
            nodes = result.stats.nodes,
            "Committed move"
        );

        match outcome(&self.board) {
            Some(result) => self.finish(Some((side, cell)), result),
            None => Step::Moved { side, cell, result },
        }
    }

    /// Step until the game ends and return the outcome.
    /// Returns `None` if a step makes no progress before the game ends.
    pub fn play_to_end(&mut self) -> Option<Outcome> {
        loop {
            match self.step() {
                Step::Finished { outcome, .. } => return Some(outcome),
                Step::Moved { .. } => {}
                Step::Idle => return self.game_over,
            }
        }
    }

    fn finish(&mut self, last_move: Option<(Mark, usize)>, result: Outcome) -> Step {
        self.game_over = Some(result);
        info!(outcome = ?result, moves = self.move_history.len(), "Game over");
        Step::Finished {
            last_move,
            outcome: result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_is_x_minimax() {
        let mut state = GameState::new();
        match state.step() {
            Step::Moved { side, cell, result } => {
                assert_eq!(side, Mark::X);
                assert_eq!(cell, 0);
                assert_eq!(result.agent, Agent::Minimax);
            }
            other => panic!("unexpected step {:?}", other),
        }
        assert_eq!(state.current_turn, Mark::O);
        assert_eq!(state.board.get(0), Mark::X);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new();
        state.step();
        state.step();
        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.move_history[0].0, Mark::X);
        assert_eq!(state.move_history[1].0, Mark::O);
        assert_eq!(state.current_turn, Mark::X);
        assert_eq!(state.last_result.map(|r| r.agent), Some(Agent::AlphaBeta));
    }

    #[test]
    fn test_outcome_reported_once() {
        let mut state = GameState::new();
        let mut finished = 0;
        for _ in 0..20 {
            if let Step::Finished { .. } = state.step() {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(state.step(), Step::Idle);
    }

    #[test]
    fn test_full_game_is_draw() {
        let mut state = GameState::new();
        assert_eq!(state.play_to_end(), Some(Outcome::Draw));
        assert!(state.board.is_full());
        assert_eq!(state.move_history.len(), 9);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_winning_step_reports_last_move() {
        // O to move and wins at 2
        let board: Board = "OO.XX.X..".parse().unwrap();
        let mut state = GameState::from_board(board, Mark::O).unwrap();
        assert_eq!(
            state.step(),
            Step::Finished {
                last_move: Some((Mark::O, 2)),
                outcome: Outcome::OWins,
            }
        );
        assert_eq!(state.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn test_terminal_start_finishes_without_move() {
        let board: Board = "XXXOO....".parse().unwrap();
        let mut state = GameState::from_board(board, Mark::O).unwrap();
        assert_eq!(
            state.step(),
            Step::Finished {
                last_move: None,
                outcome: Outcome::XWins,
            }
        );
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_commit_rejects_occupied_and_finished() {
        let mut state = GameState::new();
        state.commit(4).unwrap();
        assert_eq!(state.commit(4), Err(Error::CellOccupied(4)));
        assert_eq!(state.current_turn, Mark::O);

        let board: Board = "XXXOO....".parse().unwrap();
        let mut done = GameState::from_board(board, Mark::O).unwrap();
        assert_eq!(done.commit(5), Err(Error::GameOver));
    }

    #[test]
    fn test_empty_turn_rejected() {
        assert_eq!(
            GameState::from_board(Board::new(), Mark::Empty).err(),
            Some(Error::InvalidTurn)
        );

        let mut state = GameState::new();
        state.current_turn = Mark::Empty;
        assert_eq!(state.commit(4), Err(Error::EmptyMark));
        assert!(state.move_history.is_empty());
        assert!(state.board.is_empty(4));
    }

    #[test]
    fn test_play_to_end_stops_without_progress() {
        let mut state = GameState::new();
        state.current_turn = Mark::Empty;
        assert_eq!(state.play_to_end(), None);
        assert!(!state.is_over());
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_play_to_end_after_game_over() {
        let mut state = GameState::new();
        assert_eq!(state.play_to_end(), Some(Outcome::Draw));
        assert_eq!(state.play_to_end(), Some(Outcome::Draw));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new();
        state.play_to_end();
        state.reset();
        assert!(!state.is_over());
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_turn, Mark::X);
    }
}
