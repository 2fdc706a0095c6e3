use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, RoundState};

/// The dealer stands on this score and everything above it, soft hands
/// included.
const DEALER_STANDS_AT: u8 = 17;

impl Game {
    /// Dealer plays out their hand: draws until reaching 17 or higher,
    /// then the round resolves.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.score() < DEALER_STANDS_AT {
            let card = self.deck.draw();
            self.dealer.add_card(card);
            drawn.push(card);
        }

        tracing::debug!(
            score = self.dealer.score(),
            drew = drawn.len(),
            "dealer stands"
        );
        self.resolve();

        Ok(drawn)
    }

    /// Computes the outcome of a resolved round.
    ///
    /// Precedence: a player bust loses outright; a dealer bust wins; a
    /// player natural beats any dealer non-natural; otherwise the higher
    /// score wins and equal scores push. Two naturals fall through to the
    /// comparison and push at 21 apiece.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not resolved.
    pub fn outcome(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        let player_bust = self.player.is_busted();
        let dealer_bust = self.dealer.is_busted();
        let player_blackjack = self.player.is_blackjack();
        let dealer_blackjack = self.dealer.is_blackjack();

        let outcome = if player_bust {
            RoundOutcome::DealerWin
        } else if dealer_bust {
            RoundOutcome::PlayerWin
        } else if player_blackjack && !dealer_blackjack {
            RoundOutcome::PlayerWin
        } else if player_score > dealer_score {
            RoundOutcome::PlayerWin
        } else if player_score < dealer_score {
            RoundOutcome::DealerWin
        } else {
            RoundOutcome::Push
        };

        Ok(RoundResult {
            outcome,
            player_score,
            dealer_score,
            player_bust,
            dealer_bust,
            player_blackjack,
            dealer_blackjack,
        })
    }
}
