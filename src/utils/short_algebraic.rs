//! Short algebraic notation decoding against a live position.
//!
//! A token such as `"Nbd7"`, `"exd5"`, `"O-O"` or `"e8=Q+"` names a move by
//! its destination plus whatever is needed to tell candidate pieces apart.
//! Decoding resolves the origin square by asking the legality engine which
//! piece of the named kind can actually get there.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::game_state::board_state::BoardState;
use crate::game_state::castle_rights::CastleSide;
use crate::game_state::chess_rules::{home_row, promotion_row, KING_HOME_COLUMN};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::can_move;
use crate::move_generation::legal_moves_pawn::is_en_passant_capture;
use crate::piece_types::PieceClass;
use crate::utils::algebraic::{algebraic_to_location, file_to_column, rank_to_row};

/// What a token says about the move before the board is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NotationParts {
    class: PieceClass,
    destination: BoardLocation,
    column: Option<i8>,
    row: Option<i8>,
    is_capture: bool,
    promotion: Option<PieceClass>,
}

/// Drops trailing check and mate marks: one `'#'`, then up to two `'+'`.
fn trim_annotation_suffix(token: &str) -> &str {
    let mut rest = token.strip_suffix('#').unwrap_or(token);
    for _ in 0..2 {
        rest = rest.strip_suffix('+').unwrap_or(rest);
    }
    rest
}

fn castle_side(token: &str) -> Option<CastleSide> {
    match token {
        "O-O-O" | "0-0-0" => Some(CastleSide::Queenside),
        "O-O" | "0-0" => Some(CastleSide::Kingside),
        _ => None,
    }
}

fn parse_parts(board: &BoardState, original: &str, token: &str) -> Result<NotationParts, ChessErrors> {
    if let Some(side) = castle_side(token) {
        let home = home_row(board.side_to_move());
        let destination = BoardLocation::from_column_row(side.king_destination_column(), home)?;
        return Ok(NotationParts {
            class: PieceClass::King,
            destination,
            column: Some(KING_HOME_COLUMN),
            row: Some(home),
            is_capture: false,
            promotion: None,
        });
    }

    if let Some(symbol) = token.chars().find(|symbol| !symbol.is_ascii()) {
        return Err(ChessErrors::UnexpectedNotationChar(symbol));
    }
    let malformed = || ChessErrors::MalformedNotation(original.to_owned());

    let mut end = token.len();
    let bytes = token.as_bytes();

    let mut promotion = None;
    if end >= 2 && bytes[end - 2] == b'=' {
        let symbol = char::from(bytes[end - 1]);
        let class = PieceClass::from_letter(symbol)
            .filter(|class| class.is_promotion_target())
            .ok_or(ChessErrors::UnexpectedNotationChar(symbol))?;
        promotion = Some(class);
        end -= 2;
    }

    if end < 2 {
        return Err(malformed());
    }
    let destination = algebraic_to_location(&token[end - 2..end]).map_err(|_| malformed())?;
    end -= 2;

    let is_capture = end > 0 && bytes[end - 1] == b'x';
    if is_capture {
        end -= 1;
    }

    let mut parts = NotationParts {
        class: PieceClass::Pawn,
        destination,
        column: None,
        row: None,
        is_capture,
        promotion,
    };
    for symbol in token[..end].chars().rev() {
        if let Some(column) = file_to_column(symbol) {
            parts.column = Some(column);
        } else if let Some(row) = rank_to_row(symbol) {
            parts.row = Some(row);
        } else if let Some(class) = PieceClass::from_letter(symbol) {
            parts.class = class;
        } else {
            return Err(ChessErrors::UnexpectedNotationChar(symbol));
        }
    }
    Ok(parts)
}

fn resolve_source(board: &BoardState, original: &str, parts: &NotationParts) -> Result<BoardLocation, ChessErrors> {
    let mut source = None;
    for (candidate, piece) in board.pieces() {
        if parts.column.is_some_and(|column| column != candidate.column())
            || parts.row.is_some_and(|row| row != candidate.row())
            || piece.class != parts.class
            || !can_move(board, candidate, parts.destination)
        {
            continue;
        }
        if source.is_some() {
            return Err(ChessErrors::AmbiguousSourceSquare(original.to_owned()));
        }
        source = Some(candidate);
    }
    source.ok_or_else(|| ChessErrors::MissingSourceSquare(original.to_owned()))
}

/// Resolves `token` to a move for the side to move without playing it.
pub fn decode_short_algebraic(board: &BoardState, token: &str) -> Result<ChessMove, ChessErrors> {
    let trimmed = trim_annotation_suffix(token.trim());
    let parts = parse_parts(board, token, trimmed)?;
    let from = resolve_source(board, token, &parts)?;

    if parts.is_capture
        && board.get(parts.destination).is_empty()
        && !is_en_passant_capture(board, from, parts.destination)
    {
        return Err(ChessErrors::NothingToCapture(token.to_owned()));
    }

    if let Some(class) = parts.promotion {
        let reaches_last_row = parts.class == PieceClass::Pawn
            && parts.destination.row() == promotion_row(board.side_to_move());
        if !reaches_last_row {
            return Err(ChessErrors::MalformedNotation(token.to_owned()));
        }
        return Ok(ChessMove::new(from, parts.destination).with_promotion(class));
    }
    Ok(ChessMove::new(from, parts.destination))
}

/// Decodes `token` and plays it on `board`.
pub fn apply_short_algebraic(board: &mut BoardState, token: &str) -> Result<ChessMove, ChessErrors> {
    let chess_move = decode_short_algebraic(board, token)?;
    if !apply_move(board, chess_move, false, None) {
        return Err(ChessErrors::IllegalMove(token.to_owned()));
    }
    tracing::trace!(token, %chess_move, "applied notation");
    Ok(chess_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_types::{Piece, PieceTeam};

    /// Fischer vs. Spassky, 1992, first 43 moves.
    const GAME: &str = "e4 e5 Nf3 Nc6 Bb5 a6 Ba4 Nf6 O-O Be7 Re1 b5 Bb3 d6 c3 O-O h3 Nb8 d4 Nbd7 \
                        c4 c6 cxb5 axb5 Nc3 Bb7 Bg5 b4 Nb1 h6 Bh4 c5 dxe5 Nxe4 Bxe7 Qxe7 exd6 Qf6 \
                        Nbd2 Nxd6 Nc4 Nxc4 Bxc4 Nb6 Ne5 Rae8 Bxf7+ Rxf7 Nxf7 Rxe1+ Qxe1 Kxf7 Qe3 \
                        Qg5 Qxg5 hxg5 b3 Ke6 a3 Kd6 axb4 cxb4 Ra5 Nd5 f3 Bc8 Kf2 Bf5 Ra7 g6 Ra6+ \
                        Kc5 Ke1 Nf4 g3 Nxh3 Kd2 Kb5 Rd6 Kc5 Ra6 Nf2 g4 Bd3 Re6";

    fn square(name: &str) -> BoardLocation {
        BoardLocation::from_algebraic(name).expect("test square should parse")
    }

    fn board_after(tokens: &str) -> BoardState {
        let mut board = BoardState::new_game();
        for token in tokens.split_whitespace() {
            apply_short_algebraic(&mut board, token)
                .unwrap_or_else(|error| panic!("{token} should apply: {error}"));
        }
        board
    }

    #[test]
    fn replays_a_full_game() {
        let board = board_after(GAME);
        assert_eq!(GAME.split_whitespace().count(), 85);
        assert_eq!(board.side_to_move(), PieceTeam::Black);
        assert_eq!(board.get(square("e6")), Piece::new(PieceClass::Rook, PieceTeam::White));
        assert_eq!(board.get(square("d3")), Piece::new(PieceClass::Bishop, PieceTeam::Black));
        assert_eq!(board.get(square("f2")), Piece::new(PieceClass::Knight, PieceTeam::Black));
        assert_eq!(board.king_square(PieceTeam::White), square("d2"));
        assert_eq!(board.king_square(PieceTeam::Black), square("c5"));
    }

    #[test]
    fn castling_tokens() {
        let mut board = board_after("e4 e5 Nf3 Nc6 Bc4 Nf6");
        let chess_move = apply_short_algebraic(&mut board, "0-0").expect("castling should apply");
        assert_eq!(chess_move, ChessMove::new(square("e1"), square("g1")));
        assert_eq!(board.get(square("f1")), Piece::new(PieceClass::Rook, PieceTeam::White));
    }

    #[test]
    fn castling_when_not_allowed_has_no_source() {
        let board = BoardState::new_game();
        assert_eq!(
            decode_short_algebraic(&board, "O-O"),
            Err(ChessErrors::MissingSourceSquare("O-O".into()))
        );
    }

    #[test]
    fn disambiguation_by_file_or_rank() {
        let board = board_after("Nf3 e6 d3 e5");
        assert_eq!(
            decode_short_algebraic(&board, "Nd2"),
            Err(ChessErrors::AmbiguousSourceSquare("Nd2".into()))
        );
        assert_eq!(
            decode_short_algebraic(&board, "Nbd2"),
            Ok(ChessMove::new(square("b1"), square("d2")))
        );
        assert_eq!(
            decode_short_algebraic(&board, "Nfd2"),
            Ok(ChessMove::new(square("f3"), square("d2")))
        );
        assert_eq!(
            decode_short_algebraic(&board, "N1d2"),
            Ok(ChessMove::new(square("b1"), square("d2")))
        );
    }

    #[test]
    fn capture_must_take_something() {
        let board = board_after("e4 d5");
        assert_eq!(
            decode_short_algebraic(&board, "exd5"),
            Ok(ChessMove::new(square("e4"), square("d5")))
        );
        assert_eq!(
            decode_short_algebraic(&board, "Nxf3"),
            Err(ChessErrors::NothingToCapture("Nxf3".into()))
        );
    }

    #[test]
    fn en_passant_counts_as_a_capture() {
        let mut board = board_after("e4 a6 e5 d5");
        apply_short_algebraic(&mut board, "exd6").expect("en passant should apply");
        assert!(board.get(square("d5")).is_empty());
    }

    #[test]
    fn check_marks_are_ignored() {
        let board = board_after("e4 f5");
        assert_eq!(
            decode_short_algebraic(&board, "Qh5++"),
            Ok(ChessMove::new(square("d1"), square("h5")))
        );
        assert!(decode_short_algebraic(&board, "Qh5#").is_ok());
    }

    #[test]
    fn malformed_tokens() {
        let board = BoardState::new_game();
        assert_eq!(
            decode_short_algebraic(&board, "Z"),
            Err(ChessErrors::MalformedNotation("Z".into()))
        );
        assert_eq!(
            decode_short_algebraic(&board, "e9"),
            Err(ChessErrors::MalformedNotation("e9".into()))
        );
        assert_eq!(
            decode_short_algebraic(&board, "Ze4"),
            Err(ChessErrors::UnexpectedNotationChar('Z'))
        );
        assert_eq!(
            decode_short_algebraic(&board, "Qé4"),
            Err(ChessErrors::UnexpectedNotationChar('é'))
        );
        assert_eq!(
            decode_short_algebraic(&board, "e5"),
            Err(ChessErrors::MissingSourceSquare("e5".into()))
        );
    }

    #[test]
    fn promotion_suffix() {
        let layout = "....k...\n".to_owned() + ".P......\n" + &"........\n".repeat(5) + "....K...";
        let board = BoardState::from_layout(&layout, PieceTeam::White).expect("layout should parse");

        let mut underpromoted = board;
        let chess_move =
            apply_short_algebraic(&mut underpromoted, "b8=N").expect("promotion should apply");
        assert_eq!(chess_move.promotion, Some(PieceClass::Knight));
        assert_eq!(
            underpromoted.get(square("b8")),
            Piece::new(PieceClass::Knight, PieceTeam::White)
        );

        assert_eq!(
            decode_short_algebraic(&board, "b8=K"),
            Err(ChessErrors::UnexpectedNotationChar('K'))
        );
        assert_eq!(
            decode_short_algebraic(&board, "Kd1=Q"),
            Err(ChessErrors::MalformedNotation("Kd1=Q".into()))
        );
    }

    #[test]
    fn failed_decode_leaves_board_untouched() {
        let mut board = BoardState::new_game();
        let before = board;
        assert!(apply_short_algebraic(&mut board, "Nd4").is_err());
        assert_eq!(board, before);
    }
}
