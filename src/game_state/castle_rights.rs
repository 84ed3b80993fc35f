//! Castling bookkeeping.
//!
//! Rights are tracked negatively: a bit is set once the king or a particular
//! rook has left its starting square (or the rook was captured there). Six
//! bits cover both sides.

use crate::piece_types::PieceTeam;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    /// Side implied by the king's destination column: below 4 is queenside.
    #[inline]
    pub const fn from_king_destination(column: i8) -> Self {
        if column < 4 {
            CastleSide::Queenside
        } else {
            CastleSide::Kingside
        }
    }

    /// Side whose rook starts on `column`, if any.
    #[inline]
    pub const fn from_rook_column(column: i8) -> Option<Self> {
        match column {
            0 => Some(CastleSide::Queenside),
            7 => Some(CastleSide::Kingside),
            _ => None,
        }
    }

    #[inline]
    pub const fn rook_column(self) -> i8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 7,
        }
    }

    #[inline]
    pub const fn king_destination_column(self) -> i8 {
        match self {
            CastleSide::Queenside => 2,
            CastleSide::Kingside => 6,
        }
    }

    /// The rook lands next to the king, on the side facing the centre.
    #[inline]
    pub const fn rook_destination_column(self) -> i8 {
        match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => 5,
        }
    }
}

const KING_MOVED: u8 = 0b001;
const QUEENSIDE_ROOK_MOVED: u8 = 0b010;
const KINGSIDE_ROOK_MOVED: u8 = 0b100;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastleRightsLost(u8);

impl CastleRightsLost {
    #[inline]
    const fn shift(team: PieceTeam) -> u8 {
        (team.index() * 3) as u8
    }

    #[inline]
    const fn rook_bit(side: CastleSide) -> u8 {
        match side {
            CastleSide::Queenside => QUEENSIDE_ROOK_MOVED,
            CastleSide::Kingside => KINGSIDE_ROOK_MOVED,
        }
    }

    #[inline]
    pub const fn king_moved(self, team: PieceTeam) -> bool {
        self.0 & (KING_MOVED << Self::shift(team)) != 0
    }

    #[inline]
    pub const fn rook_moved(self, team: PieceTeam, side: CastleSide) -> bool {
        self.0 & (Self::rook_bit(side) << Self::shift(team)) != 0
    }

    /// True while `team` could still castle towards `side` some day.
    #[inline]
    pub const fn can_still_castle(self, team: PieceTeam, side: CastleSide) -> bool {
        !self.king_moved(team) && !self.rook_moved(team, side)
    }

    #[inline]
    pub(crate) fn mark_king_moved(&mut self, team: PieceTeam) {
        self.0 |= KING_MOVED << Self::shift(team);
    }

    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, team: PieceTeam, side: CastleSide) {
        self.0 |= Self::rook_bit(side) << Self::shift(team);
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}
