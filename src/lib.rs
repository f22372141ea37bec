//! Tic-tac-toe played by two scripted search agents
//!
//! X is driven by plain minimax and O by minimax with alpha-beta pruning.
//! Both search the full remaining game tree, so every game between them
//! is a draw.
//!
//! # Architecture
//!
//! - [`board`]: 3x3 cell array and index helpers
//! - [`rules`]: Win-lines, win and terminal detection
//! - [`search`]: Plain and alpha-beta minimax
//! - [`engine`]: Root move selection for each agent
//! - [`game`]: Turn state machine driven one step per frame
//! - [`config`]: Command-line settings for the driver
//! - [`ui`]: egui/eframe renderer
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, Outcome};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.play_to_end(), Some(Outcome::Draw));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{best_move_alpha_beta, best_move_minimax, Agent, MoveResult};
pub use error::{Error, Result};
pub use game::{GameState, Step};
pub use rules::{has_win, is_terminal, Outcome};
