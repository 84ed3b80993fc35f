//! Pawn movement geometry.
//!
//! Pawns step forward onto empty squares, may advance two squares from their
//! starting row when both squares are free, and capture one column to either
//! side. The diagonal also works onto an empty square when it is the en
//! passant target left by the opponent's last double step.

use crate::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{en_passant_row, pawn_direction, pawn_start_row};
use crate::move_generation::legal_move_shared::is_obstructed;
use crate::piece_types::{PieceClass, PieceTeam};

pub fn pawn_move_is_possible(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    let team = board.get(from).team;
    let d_row = to.row() - from.row();
    let d_column = to.column() - from.column();

    if d_row.signum() != pawn_direction(team) {
        return false;
    }
    let rows = d_row.abs();
    if rows > 2 || (rows == 2 && from.row() != pawn_start_row(team)) {
        return false;
    }

    let target = board.get(to);
    if d_column != 0 {
        if d_column.abs() != 1 || rows != 1 {
            return false;
        }
        if target.is_empty() && !is_en_passant_target(board, team, to) {
            return false;
        }
    } else if !target.is_empty() {
        return false;
    }

    !is_obstructed(board, from, to)
}

/// True when `to` is the square a pawn of `team` lands on to capture en passant.
#[inline]
pub fn is_en_passant_target(board: &BoardState, team: PieceTeam, to: BoardLocation) -> bool {
    board.en_passant_column() == Some(to.column()) && to.row() == en_passant_row(team)
}

/// True when moving `from` to `to` is a pawn capturing en passant.
pub fn is_en_passant_capture(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    let piece = board.get(from);
    piece.class == PieceClass::Pawn
        && from.column() != to.column()
        && board.get(to).is_empty()
        && is_en_passant_target(board, piece.team, to)
}
