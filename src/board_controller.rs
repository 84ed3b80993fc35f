//! Facade for a front end driving one game.
//!
//! `BoardController` owns the live board and at most one background engine.
//! A display asks it for legal destinations, plays moves (optionally
//! following square changes through a callback), checks for mate, and kicks
//! off an AI move that it later polls for.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::chess_move::ChessMove;
use crate::engines::chess_engine_thread_trait::{ChessEngineThreadTrait, SearchReport};
use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_minimax::EngineMinimax;
use crate::game_state::board_state::BoardState;
use crate::move_generation::check_status::{is_check, is_checkmate, is_stalemate};
use crate::move_generation::legal_move_apply::{apply_move, SquareChange};
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::utils::short_algebraic::apply_short_algebraic;

pub struct BoardController {
    board: BoardState,
    config: EngineConfig,
    engine: Option<Box<dyn ChessEngineThreadTrait>>,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardController {
    /// Standard starting position with the default engine configuration.
    pub fn new() -> Self {
        Self::with_board(BoardState::new_game(), EngineConfig::default())
    }

    pub fn with_board(board: BoardState, config: EngineConfig) -> Self {
        Self {
            board,
            config,
            engine: None,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Forwards to [`EngineConfig::set_option`]; affects the next AI move.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        self.config.set_option(name, value)
    }

    pub fn legal_destinations(&self, square: BoardLocation) -> Vec<BoardLocation> {
        legal_destinations(&self.board, square)
    }

    /// Plays `from`-`to` if legal. Returns `false` and changes nothing otherwise.
    pub fn apply_move(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
        on_square_changed: Option<&mut dyn FnMut(SquareChange)>,
    ) -> bool {
        let applied = apply_move(&mut self.board, ChessMove::new(from, to), false, on_square_changed);
        if applied {
            tracing::trace!(%from, %to, "move applied");
        } else {
            tracing::debug!(%from, %to, "move rejected");
        }
        applied
    }

    /// Plays a short algebraic token such as `"Nf3"` or `"O-O"`.
    pub fn apply_notation(&mut self, token: &str) -> Result<ChessMove, ChessErrors> {
        apply_short_algebraic(&mut self.board, token).inspect_err(|error| {
            tracing::warn!(token, %error, "could not apply notation");
        })
    }

    pub fn is_check(&self) -> bool {
        is_check(&self.board)
    }

    pub fn is_checkmate(&self) -> bool {
        is_checkmate(&self.board)
    }

    pub fn is_stalemate(&self) -> bool {
        is_stalemate(&self.board)
    }

    /// Starts a minimax search of the current board at `depth` in the background.
    pub fn start_ai_move(&mut self, depth: u8) -> Result<(), ChessErrors> {
        let config = self.config.with_depth(depth);
        self.start_engine(Box::new(EngineMinimax::new(config)))
    }

    /// Starts any engine on a snapshot of the current board, replacing the previous one.
    pub fn start_engine(&mut self, mut engine: Box<dyn ChessEngineThreadTrait>) -> Result<(), ChessErrors> {
        engine.setup(&self.board);
        engine.start_searching()?;
        self.engine = Some(engine);
        Ok(())
    }

    /// Non-blocking. `false` when no search has been started.
    pub fn is_ai_move_ready(&mut self) -> bool {
        self.engine
            .as_mut()
            .is_some_and(|engine| engine.is_done_searching())
    }

    pub fn wait_for_ai_move(&mut self) -> Result<(), ChessErrors> {
        let engine = self.engine.as_mut().ok_or(ChessErrors::EngineNotStarted)?;
        engine.wait_until_done()
    }

    /// The engine's pick once the search has finished, `None` before that or
    /// when the searched side had no legal move.
    pub fn get_ai_move(&self) -> Option<ChessMove> {
        self.engine.as_ref().and_then(|engine| engine.get_best_move())
    }

    pub fn last_search_report(&self) -> Option<&SearchReport> {
        self.engine.as_ref().and_then(|engine| engine.last_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::EngineRandom;
    use crate::move_generation::legal_move_generator::valid_moves;
    use crate::piece_types::{PieceClass, PieceTeam};

    fn square(name: &str) -> BoardLocation {
        BoardLocation::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn collaborator_round_trip() {
        let mut controller = BoardController::new();
        assert_eq!(
            controller.legal_destinations(square("e2")),
            vec![square("e4"), square("e3")]
        );

        let mut changes = Vec::new();
        let mut record = |change: SquareChange| changes.push(change);
        assert!(controller.apply_move(square("e2"), square("e4"), Some(&mut record)));
        assert_eq!(changes.len(), 1);

        assert!(!controller.apply_move(square("e2"), square("e4"), None));
        assert_eq!(controller.board().side_to_move(), PieceTeam::Black);
    }

    #[test]
    fn fools_mate_is_detected() {
        let mut controller = BoardController::new();
        for token in ["f3", "e5", "g4"] {
            controller.apply_notation(token).expect("opening move should apply");
        }
        assert!(!controller.is_checkmate());
        controller.apply_notation("Qh4#").expect("mate should apply");
        assert!(controller.is_check());
        assert!(controller.is_checkmate());
        assert!(!controller.is_stalemate());
    }

    #[test]
    fn bad_notation_is_reported() {
        let mut controller = BoardController::new();
        assert!(controller
            .apply_notation("Qxe7")
            .is_err_and(|error| error.is_decode_failure()));
        assert_eq!(*controller.board(), BoardState::new_game());
    }

    #[test]
    fn ai_move_before_start() {
        let mut controller = BoardController::new();
        assert!(!controller.is_ai_move_ready());
        assert!(controller.get_ai_move().is_none());
        assert_eq!(controller.wait_for_ai_move(), Err(ChessErrors::EngineNotStarted));
    }

    #[test]
    fn ai_move_can_be_played() {
        let mut controller =
            BoardController::with_board(BoardState::new_game(), EngineConfig::default().with_seed(8));
        controller.start_ai_move(1).expect("search should start");
        controller.wait_for_ai_move().expect("search should finish");
        assert!(controller.is_ai_move_ready());

        let ai_move = controller.get_ai_move().expect("opening has moves");
        assert!(valid_moves(controller.board()).contains(&ai_move));
        assert_eq!(controller.last_search_report().map(|report| report.depth), Some(1));
        assert!(controller.apply_move(ai_move.from, ai_move.to, None));
    }

    #[test]
    fn random_engine_plugs_in() {
        let mut controller = BoardController::new();
        controller
            .start_engine(Box::new(EngineRandom::new(EngineConfig::default().with_seed(2))))
            .expect("random engine should start");
        controller.wait_for_ai_move().expect("random engine should finish");
        let picked = controller.get_ai_move().expect("opening has moves");
        assert_eq!(
            controller.board().get(picked.from).team,
            PieceTeam::White
        );
        assert_ne!(controller.board().get(picked.from).class, PieceClass::Empty);
    }

    #[test]
    fn options_flow_into_the_engine() {
        let mut controller = BoardController::new();
        controller.set_option("Seed", "77").expect("seed should parse");
        assert_eq!(controller.config().seed, Some(77));
        assert!(controller.set_option("Depth", "x").is_err());
    }
}
