//! Static position evaluation.
//!
//! Scores are always from White's point of view: positive favours White,
//! negative favours Black. Search is written against the [`BoardScorer`]
//! trait so alternate heuristics can be swapped in without touching it.

use crate::game_state::board_state::BoardState;
use crate::move_generation::check_status::is_checkmate;
use crate::piece_types::{PieceClass, PieceTeam};

pub type Score = i32;

/// Magnitude reported for a checkmated position.
pub const MATE_SCORE: Score = 10_000_000;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective.
    fn score(&self, board: &BoardState) -> Score;
}

/// Material count with a mate override.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(class: PieceClass) -> Score {
        match class {
            PieceClass::Empty => 0,
            PieceClass::Pawn => 1_000,
            PieceClass::Bishop => 3_000,
            PieceClass::Knight => 3_000,
            PieceClass::Rook => 5_000,
            PieceClass::Queen => 9_000,
            PieceClass::King => 100_000,
        }
    }

    /// White material minus Black material.
    pub fn material_balance(board: &BoardState) -> Score {
        board
            .pieces()
            .map(|(_, piece)| match piece.team {
                PieceTeam::White => Self::piece_value(piece.class),
                PieceTeam::Black => -Self::piece_value(piece.class),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &BoardState) -> Score {
        if is_checkmate(board) {
            return match board.side_to_move() {
                PieceTeam::Black => MATE_SCORE,
                PieceTeam::White => -MATE_SCORE,
            };
        }
        Self::material_balance(board)
    }
}

/// Shorthand for `MaterialScorer.score(board)`.
#[inline]
pub fn evaluate(board: &BoardState) -> Score {
    MaterialScorer.score(board)
}
