//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments.

use crate::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::piece_types::{Piece, PieceClass, PieceTeam};

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_game_state(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for column in 0..8i8 {
            let piece = BoardLocation::new(column, row)
                .map(|location| board.get(location))
                .unwrap_or(Piece::EMPTY);
            out.push(piece_to_unicode(piece));

            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!("{} to move", board.side_to_move()));

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.team, piece.class) {
        (_, PieceClass::Empty) => '·',
        (PieceTeam::White, PieceClass::Pawn) => '♙',
        (PieceTeam::White, PieceClass::Knight) => '♘',
        (PieceTeam::White, PieceClass::Bishop) => '♗',
        (PieceTeam::White, PieceClass::Rook) => '♖',
        (PieceTeam::White, PieceClass::Queen) => '♕',
        (PieceTeam::White, PieceClass::King) => '♔',
        (PieceTeam::Black, PieceClass::Pawn) => '♟',
        (PieceTeam::Black, PieceClass::Knight) => '♞',
        (PieceTeam::Black, PieceClass::Bishop) => '♝',
        (PieceTeam::Black, PieceClass::Rook) => '♜',
        (PieceTeam::Black, PieceClass::Queen) => '♛',
        (PieceTeam::Black, PieceClass::King) => '♚',
    }
}
