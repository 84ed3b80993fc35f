//! Legal move enumeration.
//!
//! There is no separate pseudo-legal stage: every (own piece, square) pair
//! is put through [`can_move`], so whatever comes out is legal by the same
//! definition the executor enforces.

use crate::board_location::BoardLocation;
use crate::chess_move::ChessMove;
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_checks::can_move;

/// Lazily yields every legal move for the side to move, origin squares in
/// board order and destinations in board order within each origin.
pub fn legal_moves(board: &BoardState) -> impl Iterator<Item = ChessMove> + '_ {
    let side = board.side_to_move();
    board
        .pieces()
        .filter(move |(_, piece)| piece.belongs_to(side))
        .flat_map(move |(from, _)| {
            BoardLocation::all()
                .filter(move |&to| can_move(board, from, to))
                .map(move |to| ChessMove::new(from, to))
        })
}

/// All legal moves for the side to move.
pub fn valid_moves(board: &BoardState) -> Vec<ChessMove> {
    legal_moves(board).collect()
}

/// Squares the piece on `from` may legally move to. Empty when `from` is
/// invalid, empty or belongs to the side not on move.
pub fn legal_destinations(board: &BoardState, from: BoardLocation) -> Vec<BoardLocation> {
    if !from.is_valid() {
        return Vec::new();
    }
    BoardLocation::all()
        .filter(|&to| can_move(board, from, to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_types::PieceTeam;

    fn square(name: &str) -> BoardLocation {
        BoardLocation::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn twenty_opening_moves() {
        let board = BoardState::new_game();
        let moves = valid_moves(&board);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|chess_move| chess_move.is_valid()));
        assert!(moves.contains(&ChessMove::new(square("g1"), square("f3"))));
    }

    #[test]
    fn knight_destinations_from_the_start() {
        let board = BoardState::new_game();
        let destinations = legal_destinations(&board, square("b1"));
        assert_eq!(destinations, vec![square("a3"), square("c3")]);
        assert!(legal_destinations(&board, square("b8")).is_empty());
        assert!(legal_destinations(&board, square("e4")).is_empty());
        assert!(legal_destinations(&board, BoardLocation::INVALID).is_empty());
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        let layout = "k......R\n".to_owned() + "......R.\n" + &"........\n".repeat(5) + ".......K";
        let board = BoardState::from_layout(&layout, PieceTeam::Black).expect("layout should parse");
        assert!(valid_moves(&board).is_empty());
    }
}
