//! Perft: exhaustive legal move-tree counts used to validate the rules.

use std::thread;

use crate::chess_move::ChessMove;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::promotion_row;
use crate::move_generation::check_status::{is_check, is_checkmate};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_generator::{legal_moves, valid_moves};
use crate::move_generation::legal_moves_pawn::is_en_passant_capture;
use crate::piece_types::PieceClass;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf positions `depth` plies below `board`.
pub fn perft(board: &BoardState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    legal_moves(board)
        .map(|chess_move| perft(&apply_move_unchecked(board, chess_move), depth - 1))
        .sum()
}

/// Leaf counts per root move, in generation order.
pub fn perft_divide(board: &BoardState, depth: u8) -> Vec<(ChessMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves(board)
        .map(|chess_move| {
            let nodes = perft(&apply_move_unchecked(board, chess_move), depth - 1);
            (chess_move, nodes)
        })
        .collect()
}

/// Leaf counts broken down by the kind of move that reached each leaf.
pub fn perft_counts(board: &BoardState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    count_recurse(board, depth, &mut total);
    total
}

/// [`perft_counts`] with one scoped worker thread per root move.
pub fn perft_counts_multi_threaded(board: &BoardState, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft_counts(board, depth);
    }

    let root_moves = valid_moves(board);
    let mut total = PerftCounts::default();
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|&chess_move| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    count_recurse(&apply_move_unchecked(board, chess_move), depth - 1, &mut local);
                    local
                })
            })
            .collect();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });
    total
}

fn count_recurse(board: &BoardState, depth: u8, counts: &mut PerftCounts) {
    for chess_move in legal_moves(board) {
        let next = apply_move_unchecked(board, chess_move);
        if depth > 1 {
            count_recurse(&next, depth - 1, counts);
            continue;
        }

        counts.nodes += 1;
        let moving = board.get(chess_move.from);
        let en_passant = is_en_passant_capture(board, chess_move.from, chess_move.to);
        if !board.get(chess_move.to).is_empty() || en_passant {
            counts.captures += 1;
        }
        if en_passant {
            counts.en_passant += 1;
        }
        if moving.class == PieceClass::King
            && (chess_move.to.column() - chess_move.from.column()).abs() == 2
        {
            counts.castles += 1;
        }
        if moving.class == PieceClass::Pawn && chess_move.to.row() == promotion_row(moving.team) {
            counts.promotions += 1;
        }
        if is_check(&next) {
            counts.checks += 1;
            if is_checkmate(&next) {
                counts.checkmates += 1;
            }
        }
    }
}
