//! Error types for engine operations.

use thiserror::Error;

/// Error returned when a rank symbol is outside the thirteen recognized
/// symbols.
///
/// Deck and hand internals only ever construct ranks from the [`Rank`]
/// enum, so this can surface only when parsing external text. Treat it as
/// a programming error rather than something to retry.
///
/// [`Rank`]: crate::Rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card rank")]
pub struct InvalidRank;

/// Error returned when player input matches none of the recognized
/// choices.
///
/// Drivers recover locally by re-prompting; the engine state is never
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized input")]
pub struct InvalidInput;

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur during the dealer turn or outcome resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}
