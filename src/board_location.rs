//! Square addressing for the 8x8 board.
//!
//! A `BoardLocation` wraps a raw index `0..64` in row-major order. Row 0 is
//! Black's home rank (rank 8) and row 7 is White's home rank (rank 1), so the
//! index of `a8` is 0 and the index of `h1` is 63. The raw value 64 is the
//! `INVALID` sentinel.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_location, location_to_algebraic};

/// Number of squares on the board.
pub const BOARD_SQUARES: u8 = 64;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation(u8);

impl BoardLocation {
    /// Sentinel for "no square".
    pub const INVALID: BoardLocation = BoardLocation(BOARD_SQUARES);

    /// Builds a location from a raw index. Anything past the board collapses to `INVALID`.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        if raw < BOARD_SQUARES {
            BoardLocation(raw)
        } else {
            Self::INVALID
        }
    }

    /// Builds a location from zero-based column and row, if both are on the board.
    #[inline]
    pub const fn new(column: i8, row: i8) -> Option<Self> {
        if column < 0 || column > 7 || row < 0 || row > 7 {
            None
        } else {
            Some(BoardLocation((row * 8 + column) as u8))
        }
    }

    /// Same as [`BoardLocation::new`] but reports the bad pair as an error.
    pub fn from_column_row(column: i8, row: i8) -> Result<Self, ChessErrors> {
        Self::new(column, row).ok_or(ChessErrors::InvalidFileOrRank((column, row)))
    }

    /// Parses a square name such as `"e4"`.
    pub fn from_algebraic(square: &str) -> Result<Self, ChessErrors> {
        algebraic_to_location(square)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn column(self) -> i8 {
        (self.0 % 8) as i8
    }

    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 / 8) as i8
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 < BOARD_SQUARES
    }

    /// Moves the location by a column and row offset, staying on the board.
    #[inline]
    pub const fn offset(self, d_column: i8, d_row: i8) -> Option<Self> {
        if !self.is_valid() {
            return None;
        }
        Self::new(self.column() + d_column, self.row() + d_row)
    }

    /// Every square from `a8` to `h1`.
    pub fn all() -> impl Iterator<Item = BoardLocation> {
        (0..BOARD_SQUARES).map(BoardLocation)
    }
}

impl Default for BoardLocation {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&location_to_algebraic(*self))
    }
}

impl fmt::Debug for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardLocation({})", location_to_algebraic(*self))
    }
}

impl FromStr for BoardLocation {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}
