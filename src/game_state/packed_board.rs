//! 64 squares in 32 bytes.
//!
//! Each byte stores two squares: the even-indexed square in the low nibble
//! and the odd-indexed square in the high nibble. The whole board is `Copy`,
//! which is what lets search and legality checks work on scratch copies.

use std::fmt;

use crate::board_location::BoardLocation;
use crate::piece_types::Piece;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct PackedBoard {
    nibbles: [u8; 32],
}

impl PackedBoard {
    pub const fn empty() -> Self {
        PackedBoard { nibbles: [0; 32] }
    }

    /// Reads a square.
    ///
    /// Panics if `location` is `INVALID` or the stored nibble is not a piece;
    /// both mean the board has been corrupted.
    #[inline]
    pub fn get(&self, location: BoardLocation) -> Piece {
        assert!(location.is_valid(), "packed board read at invalid square");
        let index = location.index();
        let nibble = (self.nibbles[index / 2] >> ((index % 2) * 4)) & 0x0f;
        match Piece::from_nibble(nibble) {
            Some(piece) => piece,
            None => panic!("packed board holds garbage nibble {nibble:#x} at {location}"),
        }
    }

    /// Writes a square, leaving its neighbour in the same byte untouched.
    #[inline]
    pub(crate) fn set(&mut self, location: BoardLocation, piece: Piece) {
        assert!(location.is_valid(), "packed board write at invalid square");
        let index = location.index();
        let shift = (index % 2) * 4;
        let byte = &mut self.nibbles[index / 2];
        *byte = (*byte & !(0x0f << shift)) | (piece.to_nibble() << shift);
        assert_eq!(
            self.get(location),
            piece,
            "packed board read-back mismatch at {location}"
        );
    }

    /// Every square with its content, `a8` first.
    pub fn squares(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        BoardLocation::all().map(move |location| (location, self.get(location)))
    }

    /// Raw storage, mainly for hashing and diagnostics.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.nibbles
    }
}

impl fmt::Debug for PackedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for column in 0..8 {
                let location = BoardLocation::new(column, row).unwrap_or(BoardLocation::INVALID);
                write!(f, "{}", self.get(location).to_char())?;
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_types::{PieceClass, PieceTeam};

    #[test]
    fn every_square_holds_every_piece() {
        let classes = [
            PieceClass::Pawn,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
            PieceClass::Queen,
            PieceClass::King,
        ];
        let mut board = PackedBoard::empty();
        for location in BoardLocation::all() {
            for team in [PieceTeam::White, PieceTeam::Black] {
                for class in classes {
                    let piece = Piece::new(class, team);
                    board.set(location, piece);
                    assert_eq!(board.get(location), piece);
                }
            }
            board.set(location, Piece::EMPTY);
            assert!(board.get(location).is_empty());
        }
    }

    #[test]
    fn neighbours_in_a_byte_are_independent() {
        let a8 = BoardLocation::from_raw(0);
        let b8 = BoardLocation::from_raw(1);
        let rook = Piece::new(PieceClass::Rook, PieceTeam::Black);
        let knight = Piece::new(PieceClass::Knight, PieceTeam::White);

        let mut board = PackedBoard::empty();
        board.set(a8, rook);
        board.set(b8, knight);
        assert_eq!(board.get(a8), rook);
        assert_eq!(board.get(b8), knight);

        board.set(a8, Piece::EMPTY);
        assert_eq!(board.get(b8), knight);
        assert_eq!(board.as_bytes()[0], knight.to_nibble() << 4);
    }

    #[test]
    #[should_panic]
    fn reading_invalid_square_panics() {
        PackedBoard::empty().get(BoardLocation::INVALID);
    }
}
