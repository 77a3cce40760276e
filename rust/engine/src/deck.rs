use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card stack. Cards are dealt from the end of the sequence.
///
/// The deck owns no random source; callers pass their generator to
/// [`Deck::reset`] and [`Deck::shuffle`] so shuffles are reproducible.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates an unshuffled deck in suit-major order.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// A deck that deals `cards` in the order given.
    pub fn stacked(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    /// Rebuilds all 52 cards and shuffles them.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = full_deck();
        self.shuffle(rng);
    }

    /// Fisher-Yates permutation of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top (last) card.
    ///
    /// An empty deck means a hand drew more cards than the table can ever
    /// need, which is a bug in the caller.
    pub fn deal(&mut self) -> Result<Card, GameError> {
        let card = self.cards.pop();
        debug_assert!(card.is_some(), "deal from an exhausted deck");
        card.ok_or(GameError::DeckExhausted)
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.deal().map(|_| ())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
