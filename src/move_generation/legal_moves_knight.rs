//! Knight movement geometry.

use crate::board_location::BoardLocation;

/// A knight moves one square along one axis and two along the other.
#[inline]
pub fn knight_move_is_possible(from: BoardLocation, to: BoardLocation) -> bool {
    let d_column = (to.column() - from.column()).abs();
    let d_row = (to.row() - from.row()).abs();
    matches!((d_column, d_row), (1, 2) | (2, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_jumps() {
        let g1 = BoardLocation::from_algebraic("g1").expect("g1 should parse");
        let reachable = BoardLocation::all()
            .filter(|&to| knight_move_is_possible(g1, to))
            .map(|to| to.to_string())
            .collect::<Vec<_>>();
        assert_eq!(reachable, vec!["f3", "h3", "e2"]);
    }
}
