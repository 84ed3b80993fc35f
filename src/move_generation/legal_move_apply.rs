//! Move execution.
//!
//! `apply_move` validates (unless forced) and then performs every side
//! effect of a move in order: the castling rook, the en passant victim, the
//! moving piece itself, promotion, the en passant column, castling rights,
//! the king cache and finally the turn. Each visible square change can be
//! reported to a caller-supplied closure so a display can follow along.

use crate::board_location::BoardLocation;
use crate::chess_move::ChessMove;
use crate::game_state::board_state::BoardState;
use crate::game_state::castle_rights::CastleSide;
use crate::game_state::chess_rules::{home_row, promotion_row};
use crate::move_generation::legal_move_checks::can_move;
use crate::piece_types::{Piece, PieceClass, PieceTeam};

/// A visible change to one or two squares, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SquareChange {
    /// The piece on this square was removed by a capture.
    Captured(BoardLocation),
    /// A piece moved between two squares.
    Moved { from: BoardLocation, to: BoardLocation },
    /// The pawn on this square turned into `piece`.
    Promoted { square: BoardLocation, piece: Piece },
}

pub type SquareChangeCallback<'a> = Option<&'a mut dyn FnMut(SquareChange)>;

/// Moves `from` to `to`, promoting to a queen if a pawn reaches the last rank.
pub fn move_piece(board: &mut BoardState, from: BoardLocation, to: BoardLocation, force: bool) -> bool {
    apply_move(board, ChessMove::new(from, to), force, None)
}

/// Applies `chess_move` to `board`.
///
/// Without `force` the move must pass [`can_move`]; a rejected move returns
/// `false` and leaves the board untouched. With `force` validation is
/// skipped, which is what the legality simulation and search use. A
/// promotion to anything but queen, rook, bishop or knight is always
/// rejected.
pub fn apply_move(
    board: &mut BoardState,
    chess_move: ChessMove,
    force: bool,
    mut on_change: SquareChangeCallback<'_>,
) -> bool {
    let ChessMove { from, to, promotion } = chess_move;
    if !chess_move.is_valid() {
        return false;
    }
    if promotion.is_some_and(|class| !class.is_promotion_target()) {
        return false;
    }
    if !force && !can_move(board, from, to) {
        return false;
    }

    let moving = board.get(from);
    if moving.is_empty() {
        return false;
    }
    let team = moving.team;
    let captured = board.get(to);

    if moving.class == PieceClass::King && (to.column() - from.column()).abs() == 2 {
        let side = CastleSide::from_king_destination(to.column());
        if let (Some(rook_from), Some(rook_to)) = (
            BoardLocation::new(side.rook_column(), from.row()),
            BoardLocation::new(side.rook_destination_column(), from.row()),
        ) {
            relocate(board, rook_from, rook_to, &mut on_change);
        }
    }

    if moving.class == PieceClass::Pawn && from.column() != to.column() && captured.is_empty() {
        if let Some(victim) = BoardLocation::new(to.column(), from.row()) {
            if !board.get(victim).is_empty() {
                board.set(victim, Piece::EMPTY);
                notify(&mut on_change, SquareChange::Captured(victim));
            }
        }
    }

    relocate(board, from, to, &mut on_change);

    if moving.class == PieceClass::Pawn && to.row() == promotion_row(team) {
        let promoted = Piece::new(promotion.unwrap_or(PieceClass::Queen), team);
        board.set(to, promoted);
        notify(
            &mut on_change,
            SquareChange::Promoted {
                square: to,
                piece: promoted,
            },
        );
    }

    board.en_passant_column =
        if moving.class == PieceClass::Pawn && (to.row() - from.row()).abs() == 2 {
            Some(from.column())
        } else {
            None
        };

    update_castling_rights(board, moving, from, captured, to);

    if moving.class == PieceClass::King {
        board.king_square[team.index()] = to;
    }
    if captured.class == PieceClass::King {
        board.king_square[captured.team.index()] = BoardLocation::INVALID;
    }

    board.side_to_move = board.side_to_move.opposite();
    true
}

/// Forced application on a copy; the original board is left as it was.
#[inline]
pub fn apply_move_unchecked(board: &BoardState, chess_move: ChessMove) -> BoardState {
    let mut next = *board;
    apply_move(&mut next, chess_move, true, None);
    next
}

fn notify(on_change: &mut SquareChangeCallback<'_>, change: SquareChange) {
    if let Some(callback) = on_change.as_mut() {
        callback(change);
    }
}

/// Moves whatever is on `from` to `to`, reporting a capture first if `to` was occupied.
fn relocate(
    board: &mut BoardState,
    from: BoardLocation,
    to: BoardLocation,
    on_change: &mut SquareChangeCallback<'_>,
) {
    let piece = board.get(from);
    if !board.get(to).is_empty() {
        notify(on_change, SquareChange::Captured(to));
    }
    board.set(to, piece);
    board.set(from, Piece::EMPTY);
    notify(on_change, SquareChange::Moved { from, to });
}

fn update_castling_rights(
    board: &mut BoardState,
    moving: Piece,
    from: BoardLocation,
    captured: Piece,
    to: BoardLocation,
) {
    if moving.class == PieceClass::King {
        board.castle_rights_lost.mark_king_moved(moving.team);
    }
    if moving.class == PieceClass::Rook {
        mark_rook_if_home(board, moving.team, from);
    }
    if captured.class == PieceClass::Rook {
        mark_rook_if_home(board, captured.team, to);
    }
}

fn mark_rook_if_home(board: &mut BoardState, team: PieceTeam, square: BoardLocation) {
    if square.row() != home_row(team) {
        return;
    }
    if let Some(side) = CastleSide::from_rook_column(square.column()) {
        board.castle_rights_lost.mark_rook_moved(team, side);
    }
}
