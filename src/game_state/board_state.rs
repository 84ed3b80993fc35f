//! Complete position model.
//!
//! `BoardState` bundles the packed squares with everything legality needs:
//! side to move, the en passant column, lost castling rights and a cache of
//! both king squares. It is `Copy` so legality checks and search can try a
//! move on a scratch copy without touching the original.

use std::fmt;

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::castle_rights::CastleRightsLost;
use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::packed_board::PackedBoard;
use crate::piece_types::{Piece, PieceClass, PieceTeam};

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    board: PackedBoard,
    pub(crate) side_to_move: PieceTeam,
    /// Column of the pawn that just advanced two squares, if the last move was one.
    pub(crate) en_passant_column: Option<i8>,
    pub(crate) castle_rights_lost: CastleRightsLost,
    /// Indexed by [`PieceTeam::index`]. `INVALID` when the side has no king.
    pub(crate) king_square: [BoardLocation; 2],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl BoardState {
    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Self {
            board: PackedBoard::empty(),
            side_to_move: PieceTeam::White,
            en_passant_column: None,
            castle_rights_lost: CastleRightsLost::default(),
            king_square: [BoardLocation::INVALID; 2],
        }
    }

    /// The standard starting position, White to move.
    pub fn new_game() -> Self {
        Self::from_layout(STARTING_LAYOUT, PieceTeam::White)
            .expect("starting layout should always parse")
    }

    /// Builds a position from 8 rows of 8 characters, rank 8 first.
    ///
    /// Upper case letters are White, lower case Black, and `'.'` or `' '` an
    /// empty square. Line breaks between rows are optional. No castling
    /// rights are marked lost and no en passant is possible.
    pub fn from_layout(layout: &str, side_to_move: PieceTeam) -> Result<Self, ChessErrors> {
        let mut state = Self::empty();
        state.side_to_move = side_to_move;

        let mut squares = BoardLocation::all();
        for symbol in layout.chars().filter(|symbol| !matches!(symbol, '\n' | '\r')) {
            let piece = Piece::from_char(symbol).ok_or_else(|| {
                ChessErrors::InvalidLayout(format!("unknown square character {symbol:?}"))
            })?;
            let location = squares.next().ok_or_else(|| {
                ChessErrors::InvalidLayout("more than 64 squares".to_owned())
            })?;
            state.board.set(location, piece);
        }
        if squares.next().is_some() {
            return Err(ChessErrors::InvalidLayout("fewer than 64 squares".to_owned()));
        }

        state.initialize_king_positions();
        Ok(state)
    }

    /// Inverse of [`BoardState::from_layout`], using `'.'` for empty squares.
    pub fn to_layout(&self) -> String {
        let mut layout = String::with_capacity(71);
        for (location, piece) in self.pieces() {
            if location.column() == 0 && location.row() > 0 {
                layout.push('\n');
            }
            layout.push(piece.to_char());
        }
        layout
    }

    #[inline]
    pub fn get(&self, location: BoardLocation) -> Piece {
        self.board.get(location)
    }

    /// Writes a square. The king cache is not touched; callers that place
    /// kings by hand must refresh it with `initialize_king_positions`.
    #[inline]
    pub(crate) fn set(&mut self, location: BoardLocation, piece: Piece) {
        self.board.set(location, piece);
    }

    /// Every square with its content, `a8` first.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.board.squares()
    }

    #[inline]
    pub fn side_to_move(&self) -> PieceTeam {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_column(&self) -> Option<i8> {
        self.en_passant_column
    }

    #[inline]
    pub fn castle_rights_lost(&self) -> CastleRightsLost {
        self.castle_rights_lost
    }

    #[inline]
    pub fn king_square(&self, team: PieceTeam) -> BoardLocation {
        self.king_square[team.index()]
    }

    /// Same position with the other side to move.
    #[inline]
    pub(crate) fn with_side_flipped(&self) -> Self {
        let mut flipped = *self;
        flipped.side_to_move = self.side_to_move.opposite();
        flipped
    }

    /// Rescans the board for both kings. The last king found for a side wins.
    pub(crate) fn initialize_king_positions(&mut self) {
        self.king_square = [BoardLocation::INVALID; 2];
        for location in BoardLocation::all() {
            let piece = self.board.get(location);
            if piece.class == PieceClass::King {
                self.king_square[piece.team.index()] = location;
            }
        }
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.to_layout())?;
        write!(
            f,
            "side to move: {}, en passant: {:?}, castle rights lost: {:06b}",
            self.side_to_move,
            self.en_passant_column,
            self.castle_rights_lost.bits()
        )
    }
}
