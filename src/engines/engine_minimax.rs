//! Fixed-depth minimax engine running on a background thread.

use chrono::Utc;

use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::engines::chess_engine_thread_trait::{ChessEngineThreadTrait, SearchReport};
use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_worker::EngineWorker;
use crate::game_state::board_state::BoardState;
use crate::search::minimax::search_best_move;
use crate::search::search_statistics::SearchStatistics;

#[derive(Debug, Default)]
pub struct EngineMinimax {
    config: EngineConfig,
    position: Option<BoardState>,
    worker: EngineWorker,
}

impl EngineMinimax {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            position: None,
            worker: EngineWorker::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl ChessEngineThreadTrait for EngineMinimax {
    fn setup(&mut self, board: &BoardState) {
        self.position = Some(*board);
        self.worker.reset();
    }

    fn start_searching(&mut self) -> Result<(), ChessErrors> {
        let board = self.position.ok_or(ChessErrors::EngineNotConfigured)?;
        let depth = self.config.depth;
        let mut rng = self.config.make_rng();
        tracing::debug!(depth, side = %board.side_to_move(), "minimax search starting");

        self.worker.spawn("minimax-search", move || {
            let started_at = Utc::now();
            let mut statistics = SearchStatistics::default();
            let result = search_best_move(&board, depth, &mut rng, &mut statistics);
            let report = SearchReport {
                best_move: result.best_move,
                score: result.score,
                depth,
                statistics,
                started_at,
                finished_at: Utc::now(),
            };
            tracing::info!(
                best_move = %report.best_move,
                score = report.score,
                depth,
                nodes = statistics.nodes,
                elapsed_ms = report.elapsed_ms(),
                "minimax search finished"
            );
            report
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
