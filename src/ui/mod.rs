//! GUI module for watching the two agents play
//!
//! This module provides a native Rust GUI using egui/eframe. It only
//! reads game state; all decisions happen in [`crate::game`].

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
