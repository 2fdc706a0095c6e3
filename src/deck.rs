//! Deck construction, shuffling, and draw mechanics.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards with an owned random source.
///
/// A fresh deck holds the 52 unique suit/rank combinations. Drawing from
/// an exhausted deck transparently rebuilds and reshuffles a full deck
/// before satisfying the draw, so draws never fail.
///
/// # Example
///
/// ```
/// use twentyone::{Deck, DECK_SIZE};
///
/// let mut deck = Deck::new(42);
/// deck.shuffle();
/// let cards = deck.draw_multiple(5);
/// assert_eq!(cards.len(), 5);
/// assert_eq!(deck.cards_remaining(), DECK_SIZE - 5);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the front of the queue is drawn first.
    cards: VecDeque<Card>,
    /// Random number generator backing shuffles.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck in canonical order (suits outer, ranks inner),
    /// unshuffled.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: VecDeque::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.refill();
        deck
    }

    /// Creates a deck with a caller-chosen draw order.
    ///
    /// The first card of `cards` is drawn first. Useful for scripted
    /// rounds; exhaustion recovery still applies once the stacked cards
    /// run out.
    #[must_use]
    pub fn stacked(cards: impl IntoIterator<Item = Card>, seed: u64) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Refills the deck with all 52 unique suit/rank combinations.
    fn refill(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push_back(Card::new(suit, rank));
            }
        }
    }

    /// Reorders the remaining cards uniformly at random, in place.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Rebuilds a full deck and shuffles it.
    pub fn reshuffle(&mut self) {
        self.refill();
        self.shuffle();
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// An exhausted deck is rebuilt and reshuffled first, so this never
    /// fails.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop_front() {
                return card;
            }
            tracing::debug!("deck exhausted, reshuffling a fresh deck");
            self.reshuffle();
        }
    }

    /// Draws `count` cards in sequence.
    ///
    /// Each draw follows the rules of [`draw`](Self::draw), so exhaustion
    /// recovery can trigger mid-sequence and the returned list always has
    /// length `count`.
    pub fn draw_multiple(&mut self, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.draw()).collect()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }
}
