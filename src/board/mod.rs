//! Board representation for tic-tac-toe

pub mod board;


// Re-exports
pub use board::Board;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Single-character form used by `Display` and `FromStr`
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }

    #[inline]
    pub fn from_symbol(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            '.' | '_' | ' ' => Some(Mark::Empty),
            _ => None,
        }
    }
}

/// Row of a cell index (row-major)
#[inline]
pub fn row_of(index: usize) -> usize {
    index / BOARD_SIZE
}

/// Column of a cell index (row-major)
#[inline]
pub fn col_of(index: usize) -> usize {
    index % BOARD_SIZE
}
