//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors (raylib palette)
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 245); // Raywhite
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(0, 121, 241); // Blue
pub const O_MARK: Color32 = Color32::from_rgb(230, 41, 55); // Red
pub const DRAW_TEXT: Color32 = Color32::from_rgb(80, 80, 80); // Darkgray

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 50);
pub const BANNER_BG: Color32 = Color32::from_rgba_premultiplied(245, 245, 245, 220);

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);

// Sizes (at the native 600px board)
pub const NATIVE_BOARD_SIZE: f32 = 600.0;
pub const MARK_INSET: f32 = 30.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const MARK_LINE_WIDTH: f32 = 4.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;
pub const BANNER_FONT_SIZE: f32 = 40.0;
