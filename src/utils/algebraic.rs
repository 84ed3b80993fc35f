//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and
//! [`BoardLocation`] values. Files `a..h` map to columns `0..8`; rank `8` is
//! row 0 and rank `1` is row 7.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;

/// Column for a file letter `a..h`.
#[inline]
pub fn file_to_column(file: char) -> Option<i8> {
    match file {
        'a'..='h' => Some((file as u8 - b'a') as i8),
        _ => None,
    }
}

/// Row for a rank digit `1..8`.
#[inline]
pub fn rank_to_row(rank: char) -> Option<i8> {
    match rank {
        '1'..='8' => Some(7 - (rank as u8 - b'1') as i8),
        _ => None,
    }
}

/// Convert algebraic notation (for example: "e4") to a board location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    };

    let column = file_to_column(file)
        .ok_or_else(|| ChessErrors::InvalidAlgebraicSquare(square.to_owned()))?;
    let row =
        rank_to_row(rank).ok_or_else(|| ChessErrors::InvalidAlgebraicSquare(square.to_owned()))?;

    BoardLocation::from_column_row(column, row)
}

/// Convert a board location to algebraic notation. `INVALID` renders as `"--"`.
pub fn location_to_algebraic(location: BoardLocation) -> String {
    if !location.is_valid() {
        return "--".to_owned();
    }

    let file_char = char::from(b'a' + location.column() as u8);
    let rank_char = char::from(b'8' - location.row() as u8);
    format!("{file_char}{rank_char}")
}
