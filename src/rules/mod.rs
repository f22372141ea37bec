//! Game rules for tic-tac-toe
//!
//! Win detection over the eight fixed lines and terminal/outcome
//! classification.

pub mod win;

// Re-exports for convenient access
pub use win::{has_win, is_terminal, outcome, winning_line, Outcome, WIN_LINES};
