//! Pawn promotion choice.
//!
//! Promotion is a blocking request to the UI. The engine calls the prompt
//! synchronously and resolves any missing or unusable answer to a queen.

use std::cell::Cell;
use std::rc::Rc;

use crate::game_state::chess_types::{Color, PieceKind};

pub trait PromotionPrompt {
    /// Ask which piece a pawn of `color` becomes. `None` means the prompt was dismissed.
    fn choose_promotion(&mut self, color: Color) -> Option<PieceKind>;
}

/// Default prompt used when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysQueen;

impl PromotionPrompt for AlwaysQueen {
    fn choose_promotion(&mut self, _color: Color) -> Option<PieceKind> {
        Some(PieceKind::Queen)
    }
}

/// Prompt answered ahead of time by the caller, e.g. a trailing `n` on a typed move.
///
/// The preset is consumed by the next promotion.
#[derive(Debug, Clone, Default)]
pub struct PresetPromotion {
    choice: Rc<Cell<Option<PieceKind>>>,
}

impl PresetPromotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle sharing the same preset slot.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    pub fn preset(&self, kind: Option<PieceKind>) {
        self.choice.set(kind);
    }
}

impl PromotionPrompt for PresetPromotion {
    fn choose_promotion(&mut self, _color: Color) -> Option<PieceKind> {
        self.choice.take()
    }
}

/// Map a prompt answer onto a legal promotion target, defaulting to a queen.
pub fn resolve_promotion(choice: Option<PieceKind>) -> PieceKind {
    match choice {
        Some(kind) if kind.is_promotion_target() => kind,
        _ => PieceKind::Queen,
    }
}
