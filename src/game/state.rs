//! Round state types.

/// Round state.
///
/// `Dealing` and `NaturalCheck` are passed through inside
/// [`deal`](crate::Game::deal); the states a driver observes between calls
/// are `PlayerTurn`, `DealerTurn`, and `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealing initial cards (also the entry state before the first deal).
    Dealing,
    /// Checking both initial hands for a natural blackjack.
    NaturalCheck,
    /// Waiting for a player decision.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome can be read.
    Resolved,
}
