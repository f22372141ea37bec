//! Command-line configuration for the tic-tac-toe driver.
//!
//! Only the driver reads these settings; board rules and search take none.

use std::time::Duration;

use clap::Parser;

/// Window title, also used by the headless banner
pub const TITLE: &str = "Tic-Tac-Toe: Minimax vs Alpha-Beta";

/// Tic-Tac-Toe: plain minimax (X) against alpha-beta minimax (O)
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe")]
#[command(about = "Watch minimax play alpha-beta at tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Delay between moves in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub move_interval_ms: u64,

    /// Play the game in the terminal instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Pacing between committed moves
    pub fn move_interval(&self) -> Duration {
        Duration::from_millis(self.move_interval_ms)
    }
}
