//! Tic-tac-toe GUI: minimax (X) against alpha-beta (O)

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::config::{Cli, TITLE};
use tictactoe::ui::TicTacToeApp;
use tictactoe::{GameState, Step};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    if cli.headless {
        run_headless();
        return Ok(());
    }

    info!(interval_ms = cli.move_interval_ms, "Opening window");

    let move_interval = cli.move_interval();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 660.0])
            .with_min_inner_size([300.0, 360.0])
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "tictactoe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, move_interval)))),
    )?;

    Ok(())
}

/// Play one game in the terminal, printing the board after every move
fn run_headless() {
    println!("{}\n", TITLE);

    let mut game = GameState::new();
    loop {
        match game.step() {
            Step::Moved { side, cell, .. } => {
                println!("{} -> {}\n{}\n", side.symbol(), cell, game.board);
            }
            Step::Finished { last_move, outcome } => {
                if let Some((side, cell)) = last_move {
                    println!("{} -> {}\n{}\n", side.symbol(), cell, game.board);
                }
                println!("{}", outcome.banner());
                break;
            }
            Step::Idle => break,
        }
    }
}
