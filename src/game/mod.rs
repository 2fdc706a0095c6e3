//! Game engine and round state management.

use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A blackjack round engine for one player against the house.
///
/// The engine owns the deck and both hands and is driven through
/// `&mut self` calls: [`deal`](Self::deal), [`hit`](Self::hit),
/// [`stand`](Self::stand), [`reset`](Self::reset),
/// [`dealer_play`](Self::dealer_play), and [`outcome`](Self::outcome).
///
/// # Example
///
/// ```
/// use twentyone::{Game, RoundState};
///
/// let mut game = Game::new(42);
/// game.deal()?;
/// if game.state() == RoundState::PlayerTurn {
///     game.stand()?;
///     game.dealer_play()?;
/// }
/// let result = game.outcome()?;
/// let _ = result.outcome;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Game {
    /// The deck for the current round.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Whether the current round has ended.
    round_over: bool,
    /// Source of per-round deck seeds.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed, ready to deal the first
    /// round from a freshly shuffled deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new(rng.next_u64());
        deck.shuffle();

        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
            round_over: false,
            rng,
        }
    }

    /// Creates an engine that deals its first round from `deck`.
    ///
    /// Later rounds go back to freshly shuffled decks. Pairs with
    /// [`Deck::stacked`] for scripted rounds.
    #[must_use]
    pub fn with_deck(deck: Deck, seed: u64) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
            round_over: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Deals a new round.
    ///
    /// Valid before the first round and after a round has resolved. Both
    /// hands receive two cards, player first, then naturals are checked:
    /// if either side holds one the round resolves immediately, otherwise
    /// play passes to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn deal(&mut self) -> Result<(), DealError> {
        match self.state {
            RoundState::Dealing | RoundState::Resolved => {}
            _ => return Err(DealError::InvalidState),
        }

        if self.state == RoundState::Resolved {
            self.fresh_deck();
        }
        self.run_deal();
        Ok(())
    }

    /// Replaces the deck with a freshly shuffled one.
    fn fresh_deck(&mut self) {
        self.deck = Deck::new(self.rng.next_u64());
        self.deck.shuffle();
    }

    /// The dealing routine: clear hands, two cards each, natural check.
    ///
    /// Also the target of the reset transition, which is why restarting is
    /// a plain call rather than recursive re-entry.
    fn run_deal(&mut self) {
        self.state = RoundState::Dealing;
        self.round_over = false;
        self.player.clear();
        self.dealer.clear();

        let cards = self.deck.draw_multiple(2);
        self.player.add_cards(cards);
        let cards = self.deck.draw_multiple(2);
        self.dealer.add_cards(cards);

        self.state = RoundState::NaturalCheck;
        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            tracing::debug!("natural blackjack on the deal");
            self.resolve();
        } else {
            self.state = RoundState::PlayerTurn;
        }
    }

    /// Marks the round resolved.
    fn resolve(&mut self) {
        self.state = RoundState::Resolved;
        self.round_over = true;
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the current round has ended.
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        self.round_over
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    ///
    /// This is the full hand, hole card included; [`view`](Self::view)
    /// applies the pre-reveal redaction for display layers.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }
}
