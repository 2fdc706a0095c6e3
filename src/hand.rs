//! Hand representation and scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Sum of raw card values, every ace counted as 11.
fn raw_score(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.value()))
}

fn evaluate(cards: &[Card]) -> u8 {
    let mut score = raw_score(cards);
    let mut aces = cards.iter().filter(|card| card.is_ace()).count();

    while score > 21 && aces > 0 {
        score -= 10;
        aces -= 1;
    }

    score
}

/// A hand of cards belonging to one party.
///
/// Created empty at round start, grown by appending, and cleared at round
/// end. Every derived property is recomputed from the card sequence on
/// each call; the hand caches nothing.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Appends cards to the hand, preserving their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Empties the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the score of the hand.
    ///
    /// Aces count as 11, then drop to 1 one at a time while the total is
    /// over 21.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Nine));
    /// assert_eq!(hand.score(), 21);
    /// ```
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is a natural blackjack: a two-card 21.
    ///
    /// A 21 reached with three or more cards is not a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns whether the hand is soft: it contains an ace and the raw
    /// total with every ace counted as 11 does not exceed 21.
    ///
    /// This is a structural property of the card sequence, independent of
    /// whether [`score`](Self::score) actually reduced an ace.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.cards.iter().any(|card| card.is_ace()) && raw_score(&self.cards) <= 21
    }
}
