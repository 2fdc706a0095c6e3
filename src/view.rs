//! Read-only table snapshots for display layers.
//!
//! [`Game::view`] copies the observable round state into owned values so a
//! renderer never touches engine internals. The dealer's hole card stays
//! redacted until the dealer's turn begins.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Game, RoundState};
use crate::result::RoundResult;

/// Snapshot of one party's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in play order.
    pub cards: Vec<Card>,
    /// Current score.
    pub score: u8,
    /// Whether the hand is over 21.
    pub busted: bool,
    /// Whether the hand is a natural blackjack.
    pub blackjack: bool,
    /// Whether the hand is soft.
    pub soft: bool,
}

/// Snapshot of the dealer's hand as the player is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerView {
    /// The currently visible cards.
    pub visible_cards: Vec<Card>,
    /// Number of redacted cards.
    pub hidden_cards: usize,
    /// Score over the visible cards only.
    pub visible_score: u8,
    /// Whether the hole card is still redacted.
    pub hole_hidden: bool,
}

/// Snapshot of the whole table after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current round state.
    pub state: RoundState,
    /// Cards remaining in the deck.
    pub cards_remaining: usize,
    /// The player's hand.
    pub player: HandView,
    /// The dealer's hand, hole card redacted before the dealer's turn.
    pub dealer: DealerView,
    /// The outcome, once the round has resolved.
    pub outcome: Option<RoundResult>,
}

impl Game {
    /// Builds an immutable snapshot of the table.
    #[must_use]
    pub fn view(&self) -> TableView {
        let player = self.player_hand();
        let dealer = self.dealer_hand();

        let hole_hidden = matches!(
            self.state(),
            RoundState::Dealing | RoundState::NaturalCheck | RoundState::PlayerTurn
        ) && dealer.len() > 1;

        let dealer_view = if hole_hidden {
            let up_card = dealer.cards().first().copied();
            DealerView {
                visible_cards: up_card.into_iter().collect(),
                hidden_cards: dealer.len() - 1,
                visible_score: up_card.map_or(0, Card::value),
                hole_hidden: true,
            }
        } else {
            DealerView {
                visible_cards: dealer.cards().to_vec(),
                hidden_cards: 0,
                visible_score: dealer.score(),
                hole_hidden: false,
            }
        };

        TableView {
            state: self.state(),
            cards_remaining: self.cards_remaining(),
            player: HandView {
                cards: player.cards().to_vec(),
                score: player.score(),
                busted: player.is_busted(),
                blackjack: player.is_blackjack(),
                soft: player.is_soft(),
            },
            dealer: dealer_view,
            outcome: self.outcome().ok(),
        }
    }
}
