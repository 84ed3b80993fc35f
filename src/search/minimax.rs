//! Fixed-depth minimax over the full legal move tree.
//!
//! White maximises and Black minimises the White-perspective score. There is
//! no pruning. Every root move is scored; among the moves that share the
//! best score one is picked at random, so the caller controls repeatability
//! through the RNG it passes in.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::chess_move::ChessMove;
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_generator::valid_moves;
use crate::piece_types::PieceTeam;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, Score};
use crate::search::search_statistics::SearchStatistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `ChessMove::NONE` when the side to move has no legal move.
    pub best_move: ChessMove,
    pub score: Score,
}

/// Searches `depth` extra plies below each root move with the material scorer.
///
/// Depth 0 scores each root move by evaluating the position right after it.
pub fn search_best_move<R: Rng + ?Sized>(
    board: &BoardState,
    depth: u8,
    rng: &mut R,
    stats: &mut SearchStatistics,
) -> SearchResult {
    search_best_move_with(&MaterialScorer, board, depth, rng, stats)
}

pub fn search_best_move_with<S: BoardScorer + ?Sized, R: Rng + ?Sized>(
    scorer: &S,
    board: &BoardState,
    depth: u8,
    rng: &mut R,
    stats: &mut SearchStatistics,
) -> SearchResult {
    let moves = valid_moves(board);
    if moves.is_empty() {
        stats.evaluations += 1;
        return SearchResult {
            best_move: ChessMove::NONE,
            score: scorer.score(board),
        };
    }

    let mut scored = Vec::with_capacity(moves.len());
    for chess_move in moves {
        let next = apply_move_unchecked(board, chess_move);
        stats.nodes += 1;

        let score = if depth == 0 {
            stats.evaluations += 1;
            scorer.score(&next)
        } else {
            // With no legal reply the score is the static score of `next`.
            search_best_move_with(scorer, &next, depth - 1, rng, stats).score
        };
        scored.push((chess_move, score));
    }

    let best_score = match board.side_to_move() {
        PieceTeam::White => scored.iter().map(|(_, score)| *score).max(),
        PieceTeam::Black => scored.iter().map(|(_, score)| *score).min(),
    }
    .unwrap_or_default();

    let tied: Vec<ChessMove> = scored
        .iter()
        .filter(|(_, score)| *score == best_score)
        .map(|(chess_move, _)| *chess_move)
        .collect();
    let best_move = tied.choose(rng).copied().unwrap_or(ChessMove::NONE);

    SearchResult {
        best_move,
        score: best_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_location::BoardLocation;
    use crate::search::board_scoring::MATE_SCORE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(rows: [&str; 8], side: PieceTeam) -> BoardState {
        BoardState::from_layout(&rows.join("\n"), side).expect("test layout should parse")
    }

    fn square(name: &str) -> BoardLocation {
        BoardLocation::from_algebraic(name).expect("test square should parse")
    }

    fn search(state: &BoardState, depth: u8) -> SearchResult {
        let mut rng = StdRng::seed_from_u64(17);
        let mut stats = SearchStatistics::default();
        search_best_move(state, depth, &mut rng, &mut stats)
    }

    const EMPTY: &str = "        ";

    #[test]
    fn black_finds_mate_in_one() {
        let state = board(
            ["k     r ", EMPTY, EMPTY, EMPTY, EMPTY, "     np ", EMPTY, "       K"],
            PieceTeam::Black,
        );
        let result = search(&state, 0);
        assert!(result.score < -1_000_000);
        assert_eq!(result.best_move, ChessMove::new(square("g3"), square("g2")));
    }

    #[test]
    fn white_finds_obvious_mate() {
        let state = board(
            ["k       ", "      R ", "       R", EMPTY, EMPTY, EMPTY, EMPTY, "       K"],
            PieceTeam::White,
        );
        let result = search(&state, 0);
        assert!(result.score > 100_000);
        assert_eq!(result.score, MATE_SCORE);
        assert_eq!(result.best_move, ChessMove::new(square("h6"), square("h8")));
    }

    #[test]
    fn black_avoids_mate_with_a_blocking_knight() {
        let state = board(
            ["k   n   ", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, " R      ", " R     K"],
            PieceTeam::Black,
        );
        let result = search(&state, 1);
        assert_eq!(result.best_move, ChessMove::new(square("e8"), square("c7")));
        assert!(result.score < 1_000_000);
    }

    #[test]
    fn no_legal_move_returns_none() {
        let mated = board(
            ["k      R", "      R ", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "       K"],
            PieceTeam::Black,
        );
        let result = search(&mated, 2);
        assert_eq!(result.best_move, ChessMove::NONE);
        assert_eq!(result.score, MATE_SCORE);
    }

    #[test]
    fn same_seed_same_move() {
        let state = BoardState::new_game();
        let first = search(&state, 0);
        let second = search(&state, 0);
        assert_eq!(first, second);
        assert!(valid_moves(&state).contains(&first.best_move));
        assert_eq!(first.score, 0);
    }

    #[test]
    fn statistics_count_every_child() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut stats = SearchStatistics::default();
        search_best_move(&BoardState::new_game(), 1, &mut rng, &mut stats);
        assert_eq!(stats.nodes, 20 + 400);
        assert_eq!(stats.evaluations, 400);
    }
}
