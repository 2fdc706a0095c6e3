use crate::card::Card;
use crate::error::ActionError;

use super::{Game, RoundState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the round immediately; reaching exactly 21 passes
    /// play to the dealer; anything else stays in the player turn.
    ///
    /// Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw();
        self.player.add_card(card);

        if self.player.is_busted() {
            tracing::debug!(score = self.player.score(), "player busts");
            self.resolve();
        } else if self.player.score() == 21 {
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Player action: Reset (abandon the round and redeal).
    ///
    /// Restarts the whole round with a brand-new shuffled deck and empty
    /// hands. This is an explicit transition back to the dealing state,
    /// not a continuation of the abandoned round.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn reset(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        tracing::debug!("round reset by player");
        self.fresh_deck();
        self.run_deal();
        Ok(())
    }
}
