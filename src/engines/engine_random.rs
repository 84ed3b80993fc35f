//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use chrono::Utc;
use rand::seq::IndexedRandom;

use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::engines::chess_engine_thread_trait::{ChessEngineThreadTrait, SearchReport};
use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_worker::EngineWorker;
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_generator::valid_moves;
use crate::search::board_scoring::evaluate;
use crate::search::search_statistics::SearchStatistics;

#[derive(Debug, Default)]
pub struct EngineRandom {
    config: EngineConfig,
    position: Option<BoardState>,
    worker: EngineWorker,
}

impl EngineRandom {
    /// Only the seed of `config` is used.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            position: None,
            worker: EngineWorker::default(),
        }
    }
}

impl ChessEngineThreadTrait for EngineRandom {
    fn setup(&mut self, board: &BoardState) {
        self.position = Some(*board);
        self.worker.reset();
    }

    fn start_searching(&mut self) -> Result<(), ChessErrors> {
        let board = self.position.ok_or(ChessErrors::EngineNotConfigured)?;
        let mut rng = self.config.make_rng();

        self.worker.spawn("random-move", move || {
            let started_at = Utc::now();
            let legal_moves = valid_moves(&board);
            tracing::debug!(legal_moves = legal_moves.len(), "random engine choosing");

            let best_move = legal_moves.choose(&mut rng).copied().unwrap_or(ChessMove::NONE);
            let score = if best_move.is_valid() {
                evaluate(&apply_move_unchecked(&board, best_move))
            } else {
                evaluate(&board)
            };
            SearchReport {
                best_move,
                score,
                depth: 0,
                statistics: SearchStatistics {
                    nodes: legal_moves.len() as u64,
                    evaluations: 1,
                },
                started_at,
                finished_at: Utc::now(),
            }
        })
    }

    fn is_done_searching(&mut self) -> bool {
        self.worker.poll()
    }

    fn wait_until_done(&mut self) -> Result<(), ChessErrors> {
        self.worker.wait().map(|_| ())
    }

    fn get_best_move(&self) -> Option<ChessMove> {
        self.worker
            .report()
            .map(|report| report.best_move)
            .filter(|best_move| best_move.is_valid())
    }

    fn last_report(&self) -> Option<&SearchReport> {
        self.worker.report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let board = BoardState::new_game();
        let mut engine = EngineRandom::new(EngineConfig::default().with_seed(11));
        engine.setup(&board);
        engine.start_searching().expect("search should start");
        engine.wait_until_done().expect("search should finish");

        let picked = engine.get_best_move().expect("opening has moves");
        assert!(valid_moves(&board).contains(&picked));
        assert_eq!(engine.last_report().map(|report| report.statistics.nodes), Some(20));
    }

    #[test]
    fn setup_clears_the_previous_result() {
        let mut engine = EngineRandom::new(EngineConfig::default().with_seed(11));
        engine.setup(&BoardState::new_game());
        engine.start_searching().expect("search should start");
        engine.wait_until_done().expect("search should finish");
        assert!(engine.get_best_move().is_some());

        engine.setup(&BoardState::new_game());
        assert!(engine.get_best_move().is_none());
        assert!(!engine.is_done_searching());
    }
}
