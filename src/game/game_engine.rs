//! Game orchestration.
//!
//! `GameEngine` owns the board, the side to move, the selection state and
//! the clocks. The UI feeds it square clicks and one-second ticks, reads back
//! a board snapshot, a status line and clock labels, and answers promotion
//! prompts. Events are expected strictly one at a time.
//!
//! ```text
//! AwaitingSelection --own piece--> PieceSelected --valid target--> AwaitingSelection
//!         ^                             |  |
//!         +------friendly piece---------+  +--invalid target--> PieceSelected
//!
//! any --king missing / flag fall--> GameOver (terminal, input ignored)
//! ```

use tracing::{debug, info, warn};

use crate::engines::engine_trait::ComputerStrategy;
use crate::errors::ChessResult;
use crate::game::clock::ChessClock;
use crate::game::config::{GameConfig, SelectionPolicy};
use crate::game::promotion::{resolve_promotion, AlwaysQueen, PromotionPrompt};
use crate::game_state::board::{Board, Grid};
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::all_valid_moves;
use crate::move_validation::legal_move_checks::{is_checkmate, is_valid_move};

/// A piece picked up and waiting for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub piece: Piece,
    pub square: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The side to move has no king on the board.
    KingMissing,
    /// The side to move ran out of clock time.
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Color,
    pub reason: GameOverReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingSelection,
    PieceSelected(Selection),
    GameOver(GameOutcome),
}

/// Record of a move that has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mover: Color,
    pub chess_move: ChessMove,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
}

/// What a square click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Nothing happened: empty or enemy square with nothing selected, or the game is over.
    Ignored,
    Selected(Square),
    Deselected,
    Reselected(Square),
    /// Selection kept; the status line reports the rejection.
    InvalidMove,
    /// The move was played; `reply` is the computer's answer, if it moved.
    Moved {
        played: AppliedMove,
        reply: Option<AppliedMove>,
    },
    /// The move was played and ended the game.
    GameOver(GameOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromotionSource {
    Prompt,
    AutoQueen,
}

pub struct GameEngine {
    config: GameConfig,
    board: Board,
    side_to_move: Color,
    phase: GamePhase,
    clock: ChessClock,
    status: String,
    strategy: Option<Box<dyn ComputerStrategy>>,
    promotion_prompt: Box<dyn PromotionPrompt>,
    history: Vec<AppliedMove>,
}

impl GameEngine {
    /// Standard start position; the computer strategy follows the configured difficulty.
    pub fn new(config: GameConfig) -> Self {
        let strategy = config
            .computer_color()
            .map(|_| config.difficulty().strategy());
        Self::build(config, Board::new_game(), Color::White, strategy)
    }

    /// Standard start position with an explicit computer strategy.
    pub fn with_computer_strategy(config: GameConfig, strategy: Box<dyn ComputerStrategy>) -> Self {
        Self::build(config, Board::new_game(), Color::White, Some(strategy))
    }

    /// Start from an arbitrary position with `side_to_move` on move.
    pub fn from_position(config: GameConfig, board: Board, side_to_move: Color) -> Self {
        let strategy = config
            .computer_color()
            .map(|_| config.difficulty().strategy());
        Self::build(config, board, side_to_move, strategy)
    }

    fn build(
        config: GameConfig,
        board: Board,
        side_to_move: Color,
        strategy: Option<Box<dyn ComputerStrategy>>,
    ) -> Self {
        let mut clock = ChessClock::new(config.clock_duration);
        clock.start(side_to_move);
        let status = format!(
            "Game started! {}'s turn ({})",
            config.player_name(side_to_move),
            side_to_move
        );

        let mut engine = Self {
            config,
            board,
            side_to_move,
            phase: GamePhase::AwaitingSelection,
            clock,
            status,
            strategy,
            promotion_prompt: Box::new(AlwaysQueen),
            history: Vec::new(),
        };
        info!(
            white = %engine.config.white_name,
            black = %engine.config.black_name,
            difficulty = %engine.config.difficulty(),
            "game started"
        );

        if is_checkmate(&engine.board, side_to_move) {
            engine.finish(GameOutcome {
                winner: side_to_move.opposite(),
                reason: GameOverReason::KingMissing,
            });
        } else {
            engine.play_computer_turn_if_due();
        }
        engine
    }

    pub fn set_promotion_prompt(&mut self, prompt: Box<dyn PromotionPrompt>) {
        self.promotion_prompt = prompt;
    }

    // --- Read side for the UI ---

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> Grid {
        self.board.snapshot()
    }

    pub fn status_message(&self) -> &str {
        &self.status
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn selection(&self) -> Option<Selection> {
        match self.phase {
            GamePhase::PieceSelected(selection) => Some(selection),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.outcome()
            .map(|outcome| self.config.player_name(outcome.winner))
    }

    pub fn is_game_active(&self) -> bool {
        !matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn clock(&self) -> &ChessClock {
        &self.clock
    }

    /// Remaining time for `color` as `MM:SS`.
    pub fn clock_display(&self, color: Color) -> String {
        self.clock.display(color)
    }

    /// `"{name}: MM:SS"` as shown above the board.
    pub fn clock_label(&self, color: Color) -> String {
        format!("{}: {}", self.config.player_name(color), self.clock.display(color))
    }

    pub fn last_move(&self) -> Option<&AppliedMove> {
        self.history.last()
    }

    pub fn move_history(&self) -> &[AppliedMove] {
        &self.history
    }

    // --- Events ---

    /// Click on a square by name, e.g. `"e2"`.
    pub fn click(&mut self, name: &str) -> ChessResult<InteractionOutcome> {
        let square = Square::from_algebraic(name)?;
        Ok(self.on_square_interaction(square))
    }

    pub fn on_square_interaction(&mut self, square: Square) -> InteractionOutcome {
        match self.phase {
            GamePhase::GameOver(_) => InteractionOutcome::Ignored,
            GamePhase::AwaitingSelection => self.try_select(square),
            GamePhase::PieceSelected(selection) => self.try_drop(selection, square),
        }
    }

    /// One elapsed second. Returns the outcome if a flag fell.
    pub fn on_clock_tick(&mut self) -> Option<GameOutcome> {
        if !self.is_game_active() {
            return None;
        }
        let flagged = self.clock.tick()?;
        let outcome = GameOutcome {
            winner: flagged.opposite(),
            reason: GameOverReason::Timeout,
        };
        self.finish(outcome);
        Some(outcome)
    }

    // --- Transitions ---

    fn try_select(&mut self, square: Square) -> InteractionOutcome {
        match self.board.get(square) {
            Some(piece) if piece.color == self.side_to_move => {
                self.select(piece, square);
                InteractionOutcome::Selected(square)
            }
            _ => InteractionOutcome::Ignored,
        }
    }

    fn select(&mut self, piece: Piece, square: Square) {
        self.phase = GamePhase::PieceSelected(Selection { piece, square });
        self.status = format!("Selected piece at {square}");
        debug!(%square, ?piece, "piece selected");
    }

    fn deselect(&mut self) {
        self.phase = GamePhase::AwaitingSelection;
        self.status = "Piece deselected".to_owned();
        debug!("selection cleared");
    }

    fn try_drop(&mut self, selection: Selection, square: Square) -> InteractionOutcome {
        if let Some(target) = self.board.get(square) {
            if target.color == selection.piece.color {
                return match self.config.selection_policy {
                    SelectionPolicy::Reselect if square != selection.square => {
                        self.select(target, square);
                        InteractionOutcome::Reselected(square)
                    }
                    _ => {
                        self.deselect();
                        InteractionOutcome::Deselected
                    }
                };
            }
        }

        if !is_valid_move(&self.board, selection.square, square) {
            self.status = "Invalid move! Try again.".to_owned();
            debug!(from = %selection.square, to = %square, "invalid move rejected");
            return InteractionOutcome::InvalidMove;
        }

        self.phase = GamePhase::AwaitingSelection;
        let played = self.apply_move(
            ChessMove::new(selection.square, square),
            selection.piece,
            PromotionSource::Prompt,
        );
        if let Some(outcome) = self.outcome() {
            return InteractionOutcome::GameOver(outcome);
        }

        let reply = self.play_computer_turn_if_due();
        InteractionOutcome::Moved { played, reply }
    }

    /// Relocate `piece`, promote, hand the clock and the move to the opponent,
    /// then test for game over.
    fn apply_move(&mut self, mv: ChessMove, piece: Piece, promotion: PromotionSource) -> AppliedMove {
        let mover = self.side_to_move;
        self.clock.start(mover.opposite());

        let captured = self.board.get(mv.to);
        self.board.set(mv.to, Some(piece));
        self.board.set(mv.from, None);

        let mut promoted_to = None;
        if piece.kind == PieceKind::Pawn && mv.to.row() == promotion_row(piece.color) {
            let kind = match promotion {
                PromotionSource::Prompt => {
                    resolve_promotion(self.promotion_prompt.choose_promotion(piece.color))
                }
                PromotionSource::AutoQueen => PieceKind::Queen,
            };
            self.board.set(mv.to, Some(Piece::new(piece.color, kind)));
            promoted_to = Some(kind);
        }

        self.side_to_move = mover.opposite();
        self.status = format!(
            "{}'s turn ({})",
            self.config.player_name(self.side_to_move),
            self.side_to_move
        );

        let applied = AppliedMove {
            mover,
            chess_move: mv,
            piece,
            captured,
            promoted_to,
        };
        self.history.push(applied);
        info!(
            %mover,
            mv = %mv,
            captured = ?captured.map(|p| p.kind),
            promoted = ?promoted_to,
            "move applied"
        );

        if is_checkmate(&self.board, self.side_to_move) {
            self.finish(GameOutcome {
                winner: mover,
                reason: GameOverReason::KingMissing,
            });
        }
        applied
    }

    fn play_computer_turn_if_due(&mut self) -> Option<AppliedMove> {
        if !self.is_game_active() {
            return None;
        }
        let computer = self.config.computer_color()?;
        if computer != self.side_to_move {
            return None;
        }

        let moves: Vec<ChessMove> = all_valid_moves(&self.board, computer).collect();
        let strategy = self.strategy.as_mut()?;
        let Some(mv) = strategy.choose_move(&moves) else {
            warn!(%computer, "computer has no moves; turn does not advance");
            return None;
        };
        debug!(strategy = strategy.name(), candidates = moves.len(), mv = %mv, "computer move chosen");

        let piece = self.board.get(mv.from)?;
        Some(self.apply_move(mv, piece, PromotionSource::AutoQueen))
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.phase = GamePhase::GameOver(outcome);
        self.clock.stop_all();
        let winner = self.config.player_name(outcome.winner);
        self.status = format!("Game Over! {winner} wins!");
        info!(winner = %outcome.winner, reason = ?outcome.reason, "game over");
    }
}
