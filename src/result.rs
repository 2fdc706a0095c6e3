//! Round outcome types.

/// Outcome of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins: the dealer busted, the player holds the only natural,
    /// or the player's score is higher.
    PlayerWin,
    /// Player loses: the player busted or the dealer's score is higher.
    DealerWin,
    /// Push: equal final scores, nobody wins.
    Push,
}

/// Result of a resolved round.
///
/// Carries the raw facts a display layer needs to phrase the result; the
/// engine formats nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the player holds a natural blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer holds a natural blackjack.
    pub dealer_blackjack: bool,
}
