//! Rook movement geometry.

use crate::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_shared::is_obstructed;

/// Same row or same column with nothing in between.
#[inline]
pub fn rook_move_is_possible(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    let same_row = from.row() == to.row();
    let same_column = from.column() == to.column();
    same_row != same_column && !is_obstructed(board, from, to)
}
