//! Board rendering for the tic-tac-toe GUI

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{col_of, row_of, Board, Mark, BOARD_SIZE};
use crate::rules::Outcome;

use super::theme::*;

/// Board view handles rendering of the grid, marks and banner
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: NATIVE_BOARD_SIZE / BOARD_SIZE as f32,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board, the winning line and the end-of-game banner
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<[usize; 3]>,
        outcome: Option<Outcome>,
    ) {
        let available = ui.available_size();
        let board_size = available.x.min(available.y);
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::hover());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(0), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(outcome) = outcome {
            self.draw_banner(&painter, outcome);
        }
    }

    /// Scale factor relative to the native 600px board
    #[inline]
    fn scale(&self) -> f32 {
        self.cell_size * BOARD_SIZE as f32 / NATIVE_BOARD_SIZE
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.board_rect.min;
        let extent = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, extent)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(extent, offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (index, &mark) in board.cells().iter().enumerate() {
            match mark {
                Mark::X => self.draw_x(painter, index),
                Mark::O => self.draw_o(painter, index),
                Mark::Empty => {}
            }
        }
    }

    /// Two diagonal strokes inset from the cell edges
    fn draw_x(&self, painter: &Painter, index: usize) {
        let cell = self.cell_rect(index);
        let inset = MARK_INSET * self.scale();
        let stroke = Stroke::new(MARK_LINE_WIDTH * self.scale(), X_MARK);

        painter.line_segment(
            [
                cell.min + Vec2::splat(inset),
                cell.max - Vec2::splat(inset),
            ],
            stroke,
        );
        painter.line_segment(
            [
                Pos2::new(cell.max.x - inset, cell.min.y + inset),
                Pos2::new(cell.min.x + inset, cell.max.y - inset),
            ],
            stroke,
        );
    }

    /// Filled disc inset from the cell edges
    fn draw_o(&self, painter: &Painter, index: usize) {
        let cell = self.cell_rect(index);
        let radius = self.cell_size / 2.0 - MARK_INSET * self.scale();
        painter.circle_filled(cell.center(), radius, O_MARK);
    }

    fn draw_winning_line(&self, painter: &Painter, line: [usize; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH * self.scale(), WIN_HIGHLIGHT);
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[2]).center();
        painter.line_segment([start, end], stroke);
    }

    fn draw_banner(&self, painter: &Painter, outcome: Outcome) {
        let color = match outcome {
            Outcome::XWins => X_MARK,
            Outcome::OWins => O_MARK,
            Outcome::Draw => DRAW_TEXT,
        };

        let center = self.board_rect.center();
        let band = Rect::from_center_size(
            center,
            Vec2::new(self.board_rect.width(), BANNER_FONT_SIZE * 2.0 * self.scale()),
        );
        painter.rect_filled(band, CornerRadius::same(0), BANNER_BG);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            outcome.banner(),
            FontId::proportional(BANNER_FONT_SIZE * self.scale()),
            color,
        );
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, index: usize) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                col_of(index) as f32 * self.cell_size,
                row_of(index) as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}
