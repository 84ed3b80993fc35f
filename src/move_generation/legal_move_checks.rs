//! The single legality predicate every other part of the engine goes through.

use crate::board_location::BoardLocation;
use crate::chess_move::ChessMove;
use crate::game_state::board_state::BoardState;
use crate::move_generation::check_status::can_take_king;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_moves_bishop::bishop_move_is_possible;
use crate::move_generation::legal_moves_king::king_move_is_possible;
use crate::move_generation::legal_moves_knight::knight_move_is_possible;
use crate::move_generation::legal_moves_pawn::pawn_move_is_possible;
use crate::move_generation::legal_moves_queen::queen_move_is_possible;
use crate::move_generation::legal_moves_rook::rook_move_is_possible;
use crate::piece_types::PieceClass;

/// Whether the side to move may move the piece on `from` to `to`.
///
/// Checks run cheapest first: both squares on the board, a piece of the side
/// to move on `from`, no own piece on `to`, the piece's movement rule, and
/// finally that the move does not leave the mover's king capturable. That
/// last step is skipped when `to` holds the enemy king, which keeps the
/// mutual recursion with [`can_take_king`] finite.
pub fn can_move(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    if !from.is_valid() || !to.is_valid() {
        return false;
    }

    let moving = board.get(from);
    if !moving.belongs_to(board.side_to_move()) {
        return false;
    }
    let target = board.get(to);
    if target.belongs_to(moving.team) {
        return false;
    }

    let follows_movement_rule = match moving.class {
        PieceClass::Pawn => pawn_move_is_possible(board, from, to),
        PieceClass::Bishop => bishop_move_is_possible(board, from, to),
        PieceClass::Knight => knight_move_is_possible(from, to),
        PieceClass::Rook => rook_move_is_possible(board, from, to),
        PieceClass::Queen => queen_move_is_possible(board, from, to),
        PieceClass::King => king_move_is_possible(board, from, to),
        PieceClass::Empty => false,
    };
    if !follows_movement_rule {
        return false;
    }

    if target.class == PieceClass::King {
        return true;
    }
    !leaves_king_capturable(board, from, to)
}

/// Plays the move on a scratch copy and asks whether the opponent could then
/// take the mover's king.
#[inline]
pub fn leaves_king_capturable(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    let after = apply_move_unchecked(board, ChessMove::new(from, to));
    can_take_king(&after)
}
