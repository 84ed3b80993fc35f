//! Check, checkmate and stalemate detection.

use crate::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::can_move;
use crate::move_generation::legal_move_generator::legal_moves;

/// True when the side to move could capture the opponent's king.
///
/// A side without a king (only possible in hand-built layouts) can never be
/// captured.
pub fn can_take_king(board: &BoardState) -> bool {
    let king = board.king_square(board.side_to_move().opposite());
    if !king.is_valid() {
        return false;
    }
    BoardLocation::all().any(|from| can_move(board, from, king))
}

/// True when the side to move is in check.
#[inline]
pub fn is_check(board: &BoardState) -> bool {
    can_take_king(&board.with_side_flipped())
}

/// True when the side to move is in check and every legal move still
/// leaves the king capturable.
pub fn is_checkmate(board: &BoardState) -> bool {
    if !is_check(board) {
        return false;
    }
    legal_moves(board).all(|chess_move| can_take_king(&apply_move_unchecked(board, chess_move)))
}

/// True when the side to move is not in check but has no legal move.
pub fn is_stalemate(board: &BoardState) -> bool {
    !is_check(board) && legal_moves(board).next().is_none()
}
