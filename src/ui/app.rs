//! Main application for the tic-tac-toe GUI

use std::time::{Duration, Instant};

use egui::{CentralPanel, Context, Frame, RichText, TopBottomPanel};
use tracing::info;

use super::board_view::BoardView;
use super::theme::*;
use crate::game::{GameState, Step};
use crate::Mark;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    move_interval: Duration,
    last_step: Option<Instant>,
    paused: bool,
}

impl TicTacToeApp {
    /// Create a new app pacing one move per `move_interval`
    pub fn new(_cc: &eframe::CreationContext<'_>, move_interval: Duration) -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            move_interval,
            last_step: None,
            paused: false,
        }
    }

    /// Run one driver step if the move interval has elapsed.
    /// Returns the time left until the next step is due.
    fn advance(&mut self) -> Option<Duration> {
        if self.paused || self.state.is_over() {
            return None;
        }

        let now = Instant::now();
        if let Some(last) = self.last_step {
            let elapsed = now.duration_since(last);
            if elapsed < self.move_interval {
                return Some(self.move_interval - elapsed);
            }
        }

        if let Step::Finished { outcome, .. } = self.state.step() {
            info!(banner = outcome.banner(), "Showing result");
        }
        self.last_step = Some(now);

        (!self.state.is_over()).then_some(self.move_interval)
    }

    /// Render the status bar
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = match self.state.game_over() {
                    Some(outcome) => outcome.banner().to_string(),
                    None if self.paused => "Paused".to_string(),
                    None => match self.state.current_turn {
                        Mark::X => "X (Minimax) to move".to_string(),
                        _ => "O (Alpha-Beta) to move".to_string(),
                    },
                };
                ui.label(RichText::new(status).strong().color(TEXT_PRIMARY));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("Move #{}", self.state.move_history.len()))
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    /// Render the last search statistics
    fn render_search_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("search_bar").show(ctx, |ui| {
            let text = match &self.state.last_result {
                Some(result) => format!(
                    "{}: cell {} | score {} | {} nodes | {} cutoffs | {}ms",
                    result.agent.label(),
                    result
                        .best_move
                        .map_or_else(|| "-".to_string(), |c| c.to_string()),
                    result.score,
                    result.stats.nodes,
                    result.stats.cutoffs,
                    result.time_ms,
                ),
                None => "Waiting for first move... (N: new game, Space: pause)".to_string(),
            };
            ui.label(RichText::new(text).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                let winning_line = self.state.winning_line();
                let outcome = self.state.game_over();
                self.board_view
                    .show(ui, &self.state.board, winning_line, outcome);
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
                self.last_step = None;
                info!("New game");
            }

            // Space - Pause / resume
            if i.key_pressed(egui::Key::Space) {
                self.paused = !self.paused;
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let next_step = self.advance();

        self.render_status_bar(ctx);
        self.render_search_bar(ctx);
        self.render_board(ctx);

        // Wake up for the next move even without input events
        if let Some(delay) = next_step {
            ctx.request_repaint_after(delay);
        }
    }
}
