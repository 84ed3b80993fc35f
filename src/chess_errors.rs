//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type of the crate. Parsing and decoding
//! failures carry the offending text so callers can log or display it.
//!
//! Usage guidelines:
//! - Input problems (bad squares, bad layouts, bad notation) are recoverable
//!   and meant to be shown to whoever typed them.
//! - A from/to pair that the rules reject is *not* an error: the move
//!   executor answers `false`. Only the notation decoder turns a rejected
//!   move into `IllegalMove`, because there the caller asked for a specific
//!   move by name.
//! - Corruption of the packed board is a bug in this crate and panics rather
//!   than surfacing here.

use thiserror::Error;

/// Unified error type for the chess engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square name such as `"e4"` failed to parse.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicSquare(String),

    /// Column/row indices outside `0..8`.
    ///
    /// Payload: (column, row) zero-based.
    #[error("invalid column/row pair: {0:?}")]
    InvalidFileOrRank((i8, i8)),

    /// An 8x8 text layout was the wrong size or contained an unknown character.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// A character in a notation token is neither a file, a rank nor a piece letter.
    #[error("unexpected character {0:?} in move notation")]
    UnexpectedNotationChar(char),

    /// A notation token is structurally wrong (no destination square, bad promotion suffix).
    #[error("malformed move notation: {0:?}")]
    MalformedNotation(String),

    /// No piece of the named kind can reach the destination.
    #[error("no piece can make the move {0:?}")]
    MissingSourceSquare(String),

    /// More than one piece of the named kind can reach the destination.
    #[error("move {0:?} is ambiguous and needs more disambiguation")]
    AmbiguousSourceSquare(String),

    /// The token claims a capture but the destination is empty.
    #[error("move {0:?} claims a capture but there is nothing to take")]
    NothingToCapture(String),

    /// A decoded move was rejected by the move executor.
    #[error("move {0:?} is illegal in this position")]
    IllegalMove(String),

    /// An engine option name was unknown or its value did not parse.
    #[error("invalid engine option {name:?} = {value:?}")]
    InvalidEngineOption { name: String, value: String },

    /// `start_searching` was called before `setup`.
    #[error("engine has no position to search")]
    EngineNotConfigured,

    /// A result was requested from an engine that never started searching.
    #[error("engine search was never started")]
    EngineNotStarted,

    /// The background search thread died before reporting a move.
    #[error("engine search thread terminated without a result")]
    EngineThreadFailed,
}

impl ChessErrors {
    /// True for failures caused by a notation token that could not be
    /// turned into a move (malformed text, unresolved source, bogus capture).
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            ChessErrors::UnexpectedNotationChar(_)
                | ChessErrors::MalformedNotation(_)
                | ChessErrors::MissingSourceSquare(_)
                | ChessErrors::AmbiguousSourceSquare(_)
                | ChessErrors::NothingToCapture(_)
        )
    }
}
