//! Queen movement geometry.

use crate::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_moves_bishop::bishop_move_is_possible;
use crate::move_generation::legal_moves_rook::rook_move_is_possible;

#[inline]
pub fn queen_move_is_possible(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    rook_move_is_possible(board, from, to) || bishop_move_is_possible(board, from, to)
}
