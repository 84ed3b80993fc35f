//! Piece kinds, sides and their nibble encoding.
//!
//! A square holds one [`Piece`]. On the packed board a piece takes four
//! bits: the low three bits are the [`PieceClass`] and bit 3 is set for
//! Black. An empty square is always encoded as zero, so `Empty` carries the
//! `White` team by convention.

use std::fmt;
use std::ops::Not;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceClass {
    Empty = 0,
    Pawn = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceClass {
    /// Inverse of `class as u8`. Values outside `0..=6` are not pieces.
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(PieceClass::Empty),
            1 => Some(PieceClass::Pawn),
            2 => Some(PieceClass::Bishop),
            3 => Some(PieceClass::Knight),
            4 => Some(PieceClass::Rook),
            5 => Some(PieceClass::Queen),
            6 => Some(PieceClass::King),
            _ => None,
        }
    }

    /// Upper-case letter used by notation and layouts. `Empty` is `'.'`.
    pub const fn letter(self) -> char {
        match self {
            PieceClass::Empty => '.',
            PieceClass::Pawn => 'P',
            PieceClass::Bishop => 'B',
            PieceClass::Knight => 'N',
            PieceClass::Rook => 'R',
            PieceClass::Queen => 'Q',
            PieceClass::King => 'K',
        }
    }

    /// Parses an upper-case piece letter.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(PieceClass::Pawn),
            'B' => Some(PieceClass::Bishop),
            'N' => Some(PieceClass::Knight),
            'R' => Some(PieceClass::Rook),
            'Q' => Some(PieceClass::Queen),
            'K' => Some(PieceClass::King),
            _ => None,
        }
    }

    /// Classes a pawn may turn into on the last rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceClass::Queen | PieceClass::Rook | PieceClass::Bishop | PieceClass::Knight
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceTeam {
    White,
    Black,
}

impl PieceTeam {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceTeam::White => 0,
            PieceTeam::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::White => PieceTeam::Black,
            PieceTeam::Black => PieceTeam::White,
        }
    }
}

impl Not for PieceTeam {
    type Output = PieceTeam;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for PieceTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceTeam::White => f.write_str("White"),
            PieceTeam::Black => f.write_str("Black"),
        }
    }
}

const BLACK_BIT: u8 = 0b1000;
const CLASS_MASK: u8 = 0b0111;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub class: PieceClass,
    pub team: PieceTeam,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        class: PieceClass::Empty,
        team: PieceTeam::White,
    };

    /// Builds a piece. An `Empty` class always yields [`Piece::EMPTY`].
    #[inline]
    pub const fn new(class: PieceClass, team: PieceTeam) -> Self {
        match class {
            PieceClass::Empty => Self::EMPTY,
            _ => Piece { class, team },
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.class, PieceClass::Empty)
    }

    /// True when the square holds a piece of `team`.
    #[inline]
    pub fn belongs_to(self, team: PieceTeam) -> bool {
        !self.is_empty() && self.team == team
    }

    #[inline]
    pub const fn to_nibble(self) -> u8 {
        let team_bit = match self.team {
            PieceTeam::White => 0,
            PieceTeam::Black => BLACK_BIT,
        };
        self.class as u8 | team_bit
    }

    /// Decodes a nibble. Returns `None` for bit patterns no piece produces,
    /// including a black-flagged empty square.
    #[inline]
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        if nibble > 0x0f {
            return None;
        }
        let Some(class) = PieceClass::from_bits(nibble & CLASS_MASK) else {
            return None;
        };
        let team = if nibble & BLACK_BIT != 0 {
            PieceTeam::Black
        } else {
            PieceTeam::White
        };
        if matches!(class, PieceClass::Empty) && nibble != 0 {
            return None;
        }
        Some(Piece { class, team })
    }

    /// Layout character: upper case for White, lower case for Black, `'.'` when empty.
    pub const fn to_char(self) -> char {
        let letter = self.class.letter();
        match self.team {
            PieceTeam::Black => letter.to_ascii_lowercase(),
            PieceTeam::White => letter,
        }
    }

    /// Parses a layout character. Both `'.'` and `' '` mean empty.
    pub const fn from_char(symbol: char) -> Option<Self> {
        if symbol == '.' || symbol == ' ' {
            return Some(Self::EMPTY);
        }
        let team = if symbol.is_ascii_lowercase() {
            PieceTeam::Black
        } else {
            PieceTeam::White
        };
        match PieceClass::from_letter(symbol.to_ascii_uppercase()) {
            Some(class) => Some(Piece::new(class, team)),
            None => None,
        }
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLASSES: [PieceClass; 6] = [
        PieceClass::Pawn,
        PieceClass::Bishop,
        PieceClass::Knight,
        PieceClass::Rook,
        PieceClass::Queen,
        PieceClass::King,
    ];

    #[test]
    fn empty_is_always_white() {
        assert_eq!(Piece::new(PieceClass::Empty, PieceTeam::Black), Piece::EMPTY);
        assert_eq!(Piece::EMPTY.to_nibble(), 0);
        assert_eq!(Piece::from_nibble(0b1000), None);
    }

    #[test]
    fn nibbles_decode_to_the_same_piece() {
        for team in [PieceTeam::White, PieceTeam::Black] {
            for class in ALL_CLASSES {
                let piece = Piece::new(class, team);
                assert!(piece.to_nibble() < 16);
                assert_eq!(Piece::from_nibble(piece.to_nibble()), Some(piece));
            }
        }
        assert_eq!(Piece::from_nibble(7), None);
        assert_eq!(Piece::from_nibble(15), None);
    }

    #[test]
    fn layout_characters() {
        assert_eq!(
            Piece::from_char('q'),
            Some(Piece::new(PieceClass::Queen, PieceTeam::Black))
        );
        assert_eq!(
            Piece::from_char('N'),
            Some(Piece::new(PieceClass::Knight, PieceTeam::White))
        );
        assert_eq!(Piece::from_char(' '), Some(Piece::EMPTY));
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::new(PieceClass::Rook, PieceTeam::Black).to_char(), 'r');
        assert_eq!(Piece::EMPTY.to_char(), '.');
    }

    #[test]
    fn teams_flip() {
        assert_eq!(!PieceTeam::White, PieceTeam::Black);
        assert_eq!(PieceTeam::Black.opposite(), PieceTeam::White);
        assert!(Piece::new(PieceClass::Pawn, PieceTeam::Black).belongs_to(PieceTeam::Black));
        assert!(!Piece::EMPTY.belongs_to(PieceTeam::White));
    }

    #[test]
    fn only_minor_and_major_pieces_are_promotion_targets() {
        assert!(PieceClass::Queen.is_promotion_target());
        assert!(PieceClass::Knight.is_promotion_target());
        assert!(!PieceClass::King.is_promotion_target());
        assert!(!PieceClass::Pawn.is_promotion_target());
        assert!(!PieceClass::Empty.is_promotion_target());
    }
}
