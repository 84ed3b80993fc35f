//! Bishop movement geometry.

use crate::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_shared::is_obstructed;

/// Diagonal with nothing in between.
#[inline]
pub fn bishop_move_is_possible(board: &BoardState, from: BoardLocation, to: BoardLocation) -> bool {
    let d_column = (to.column() - from.column()).abs();
    let d_row = (to.row() - from.row()).abs();
    d_column == d_row && d_column != 0 && !is_obstructed(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_types::PieceTeam;

    #[test]
    fn bishop_on_open_board() {
        let layout = "........\n".repeat(4) + "...B....\n" + &"........\n".repeat(2) + "........";
        let board = BoardState::from_layout(&layout, PieceTeam::White).expect("layout should parse");
        let d4 = BoardLocation::from_algebraic("d4").expect("d4 should parse");
        let count = BoardLocation::all()
            .filter(|&to| bishop_move_is_possible(&board, d4, to))
            .count();
        assert_eq!(count, 13);
    }
}
