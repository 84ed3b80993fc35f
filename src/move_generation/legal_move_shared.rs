//! Line-of-sight helpers shared by the sliding pieces, pawns and castling.

use crate::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;

/// Unit step from `from` towards `to` when both lie on one rank, file or
/// diagonal. `None` for any other pair, including `from == to`.
#[inline]
pub fn line_step(from: BoardLocation, to: BoardLocation) -> Option<(i8, i8)> {
    let d_column = to.column() - from.column();
    let d_row = to.row() - from.row();
    if d_column == 0 && d_row == 0 {
        return None;
    }
    if d_column != 0 && d_row != 0 && d_column.abs() != d_row.abs() {
        return None;
    }
    Some((d_column.signum(), d_row.signum()))
}

/// True when some square strictly between `from` and `to` is occupied.
///
/// Only meaningful for straight or diagonal pairs; any other pair (a knight
/// jump) is never obstructed.
pub fn is_obstructed(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    let Some((d_column, d_row)) = line_step(from, to) else {
        return false;
    };
    let mut cursor = from.offset(d_column, d_row);
    while let Some(square) = cursor {
        if square == to {
            return false;
        }
        if !board.get(square).is_empty() {
            return true;
        }
        cursor = square.offset(d_column, d_row);
    }
    false
}
