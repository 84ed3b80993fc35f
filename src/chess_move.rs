//! A move as an origin/destination pair.

use std::fmt;
use std::str::FromStr;

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::piece_types::PieceClass;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
    /// Promotion choice for a pawn reaching the last rank. `None` means queen.
    pub promotion: Option<PieceClass>,
}

impl ChessMove {
    /// The "no move" value: both squares `INVALID`.
    pub const NONE: ChessMove = ChessMove {
        from: BoardLocation::INVALID,
        to: BoardLocation::INVALID,
        promotion: None,
    };

    #[inline]
    pub const fn new(from: BoardLocation, to: BoardLocation) -> Self {
        ChessMove {
            from,
            to,
            promotion: None,
        }
    }

    pub const fn with_promotion(self, class: PieceClass) -> Self {
        ChessMove {
            promotion: Some(class),
            ..self
        }
    }

    /// A move is valid when both squares are on the board.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }

    /// Converts this move to long algebraic notation (e.g., "e2e4", "e7e8q").
    pub fn to_long_algebraic(self) -> String {
        if !self.is_valid() {
            return "0000".to_owned();
        }
        let mut text = format!("{}{}", self.from, self.to);
        if let Some(class) = self.promotion {
            text.push(class.letter().to_ascii_lowercase());
        }
        text
    }

    /// Parses long algebraic notation such as "e2e4" or "e7e8q".
    pub fn from_long_algebraic(text: &str) -> Result<Self, ChessErrors> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(ChessErrors::MalformedNotation(text.to_owned()));
        }

        let from = BoardLocation::from_algebraic(&text[0..2])?;
        let to = BoardLocation::from_algebraic(&text[2..4])?;
        let mut chess_move = ChessMove::new(from, to);

        if let Some(symbol) = text[4..].chars().next() {
            let class = PieceClass::from_letter(symbol.to_ascii_uppercase())
                .filter(|class| class.is_promotion_target())
                .ok_or(ChessErrors::UnexpectedNotationChar(symbol))?;
            chess_move = chess_move.with_promotion(class);
        }
        Ok(chess_move)
    }
}

impl Default for ChessMove {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}

impl FromStr for ChessMove {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_long_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_invalid() {
        assert!(!ChessMove::NONE.is_valid());
        assert_eq!(ChessMove::default(), ChessMove::NONE);
        assert_eq!(ChessMove::NONE.to_string(), "0000");
    }

    #[test]
    fn half_valid_moves_are_invalid() {
        let e2 = BoardLocation::from_algebraic("e2").expect("e2 should parse");
        assert!(!ChessMove::new(e2, BoardLocation::INVALID).is_valid());
        assert!(!ChessMove::new(BoardLocation::INVALID, e2).is_valid());
    }

    #[test]
    fn long_algebraic_text() {
        let chess_move: ChessMove = "e7e8n".parse().expect("e7e8n should parse");
        assert_eq!(chess_move.from.to_string(), "e7");
        assert_eq!(chess_move.to.to_string(), "e8");
        assert_eq!(chess_move.promotion, Some(PieceClass::Knight));
        assert_eq!(chess_move.to_string(), "e7e8n");

        assert!(ChessMove::from_long_algebraic("e2e4").is_ok());
        assert!(ChessMove::from_long_algebraic("e2").is_err());
        assert_eq!(
            ChessMove::from_long_algebraic("e7e8k"),
            Err(ChessErrors::UnexpectedNotationChar('k'))
        );
    }
}
