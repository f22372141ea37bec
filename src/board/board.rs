//! Board structure backed by a fixed cell array

use std::fmt;
use std::str::FromStr;

use super::{Mark, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{Error, Result};

/// Game board, cells indexed 0-8 in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Mark; TOTAL_CELLS] {
        &self.cells
    }

    /// Get mark at index
    #[inline]
    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Mark::Empty
    }

    /// Set a cell without any checks.
    /// Search uses this as scratch space; use `try_place` for committed moves.
    #[inline]
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Reset a cell to empty
    #[inline]
    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    /// Place an X or O mark on an empty, in-range cell
    pub fn try_place(&mut self, index: usize, mark: Mark) -> Result<()> {
        if mark == Mark::Empty {
            return Err(Error::EmptyMark);
        }
        if index >= TOTAL_CELLS {
            return Err(Error::CellOutOfRange(index));
        }
        if !self.is_empty(index) {
            return Err(Error::CellOccupied(index));
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// Indices of empty cells in ascending order.
    /// Move selection relies on this order for tie-breaking.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..TOTAL_CELLS).filter(|&i| self.is_empty(i)).collect()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Number of non-empty cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    /// Count of marks for one side
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for mark in chunk {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell characters. Newlines between rows are always ignored.
    /// Spaces and tabs count as empty cells unless the input has more than
    /// nine symbols, in which case they are treated as row separators
    /// (`"XOX XOO OXX"`).
    fn from_str(s: &str) -> Result<Self> {
        let mut symbols: Vec<char> = s.chars().filter(|&c| c != '\n' && c != '\r').collect();
        if symbols.len() > TOTAL_CELLS {
            symbols.retain(|&c| c != ' ' && c != '\t');
        }
        if symbols.len() != TOTAL_CELLS {
            return Err(Error::ParseBoard(format!(
                "expected {} cells, found {}",
                TOTAL_CELLS,
                symbols.len()
            )));
        }

        let mut cells = [Mark::Empty; TOTAL_CELLS];
        for (cell, c) in cells.iter_mut().zip(symbols) {
            *cell = Mark::from_symbol(c)
                .ok_or_else(|| Error::ParseBoard(format!("unexpected character {:?}", c)))?;
        }
        Ok(Self { cells })
    }
}
