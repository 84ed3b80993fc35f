//! Background engine interface.
//!
//! An engine is prepared with a position, started, and then polled or
//! waited on from the caller's thread. The search itself runs on a worker
//! thread that owns its own copy of the position; the caller's board is
//! never shared with it.
//!
//! Typical usage:
//! - Construct a concrete implementor (e.g., `EngineMinimax::new(config)`).
//! - Call `setup` with the position to search.
//! - Call `start_searching`; it returns as soon as the worker is running.
//! - Poll `is_done_searching`, or block in `wait_until_done`.
//! - Retrieve the result with `get_best_move`.

use chrono::{DateTime, Utc};

use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::game_state::board_state::BoardState;
use crate::search::board_scoring::Score;
use crate::search::search_statistics::SearchStatistics;

/// Everything a finished search hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// `ChessMove::NONE` when the position had no legal move.
    pub best_move: ChessMove,
    pub score: Score,
    pub depth: u8,
    pub statistics: SearchStatistics,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SearchReport {
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

pub trait ChessEngineThreadTrait: Send {
    /// Stores a copy of `board` and discards any previous search result.
    fn setup(&mut self, board: &BoardState);

    /// Spawns the worker. Fails with `EngineNotConfigured` before `setup`.
    fn start_searching(&mut self) -> Result<(), ChessErrors>;

    /// Non-blocking completion check. `false` if the search was never started.
    fn is_done_searching(&mut self) -> bool;

    /// Blocks until the worker has reported.
    fn wait_until_done(&mut self) -> Result<(), ChessErrors>;

    /// The chosen move once the search has completed with a legal move.
    fn get_best_move(&self) -> Option<ChessMove>;

    /// The full report of the last completed search.
    fn last_report(&self) -> Option<&SearchReport>;
}
