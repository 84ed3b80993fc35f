//! King movement geometry, including castling.

use crate::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::castle_rights::CastleSide;
use crate::game_state::chess_rules::{home_row, KING_HOME_COLUMN};
use crate::move_generation::check_status::is_check;
use crate::move_generation::legal_move_checks::can_move;
use crate::move_generation::legal_move_shared::is_obstructed;
use crate::piece_types::{Piece, PieceClass};

/// One square in any direction, or a castling move from the home square.
pub fn king_move_is_possible(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    let home = home_row(board.side_to_move());
    let is_castling_shape = from.row() == home
        && to.row() == home
        && from.column() == KING_HOME_COLUMN
        && matches!(to.column(), 2 | 6);
    if is_castling_shape {
        return can_castle(board, from, to);
    }

    let d_column = (to.column() - from.column()).abs();
    let d_row = (to.row() - from.row()).abs();
    d_column <= 1 && d_row <= 1
}

/// Castling from `from` (the king's home square) to `to` (column 2 or 6).
///
/// Requires that the mover is not in check, that neither the king nor the
/// rook on that side has moved, that the rook is still on its corner, that
/// every square between king and rook is empty, and that the king could
/// legally step onto the square it passes over. The landing square is then
/// checked by the usual self-check simulation in [`can_move`].
pub fn can_castle(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    let team = board.side_to_move();
    if is_check(board) {
        return false;
    }

    let side = CastleSide::from_king_destination(to.column());
    let rights = board.castle_rights_lost();
    if rights.king_moved(team) || rights.rook_moved(team, side) {
        return false;
    }

    let Some(rook_square) = BoardLocation::new(side.rook_column(), from.row()) else {
        return false;
    };
    if board.get(rook_square) != Piece::new(PieceClass::Rook, team) {
        return false;
    }
    if is_obstructed(board, from, rook_square) {
        return false;
    }

    let Some(transit) = BoardLocation::new((from.column() + to.column()) / 2, from.row()) else {
        return false;
    };
    can_move(board, from, transit)
}
