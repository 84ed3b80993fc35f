//! Canonical chess-rule constants.
//!
//! Static rule literals: the starting layout and the per-side row numbers
//! that pawn and castling logic are written against. Rows count from Black's
//! home rank (row 0) down to White's (row 7).

use crate::piece_types::PieceTeam;

/// Standard starting position as an 8x8 layout, rank 8 first.
pub const STARTING_LAYOUT: &str = "rnbqkbnr\n\
                                   pppppppp\n\
                                   ........\n\
                                   ........\n\
                                   ........\n\
                                   ........\n\
                                   PPPPPPPP\n\
                                   RNBQKBNR";

/// Column the king starts on.
pub const KING_HOME_COLUMN: i8 = 4;

/// Row holding the side's king and rooks at the start.
#[inline]
pub const fn home_row(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::White => 7,
        PieceTeam::Black => 0,
    }
}

/// Row the side's pawns start on; only from here may they advance two squares.
#[inline]
pub const fn pawn_start_row(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::White => 6,
        PieceTeam::Black => 1,
    }
}

/// Row change of a forward pawn step.
#[inline]
pub const fn pawn_direction(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::White => -1,
        PieceTeam::Black => 1,
    }
}

/// Row a pawn of `team` lands on when it captures en passant.
#[inline]
pub const fn en_passant_row(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::White => 2,
        PieceTeam::Black => 5,
    }
}

/// Row on which a pawn of `team` promotes.
#[inline]
pub const fn promotion_row(team: PieceTeam) -> i8 {
    home_row(team.opposite())
}
