//! The 52-card deck.
//!
//! A `Deck` owns the cards not yet dealt. Drawing removes a card, so two
//! hands dealt from the same deck can never share one.

use log::trace;

use crate::core::card::{Card, Rank, Suit};
use crate::core::config::DECK_SIZE;
use crate::core::error::DeckError;
use crate::core::rng::RandomSource;

/// Remaining cards of a single deck.
///
/// ## Usage
///
/// ```
/// use pair_duel::core::GameRng;
/// use pair_duel::dealing::Deck;
///
/// let mut deck = Deck::new();
/// let mut rng = GameRng::new(7);
///
/// let card = deck.draw_random(&mut rng).unwrap();
/// assert_eq!(deck.len(), 51);
/// assert!(!deck.contains(card));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    /// Cards still available, in construction order minus draws.
    remaining: Vec<Card>,
}

impl Deck {
    /// Create a full deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            remaining: Vec::with_capacity(DECK_SIZE),
        };
        deck.reset();
        deck
    }

    /// Rebuild the full 52-card set, suit-major (all spades 2..A first).
    pub fn reset(&mut self) {
        self.remaining.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.remaining.push(Card::new(suit, rank));
            }
        }
    }

    /// Remove and return one remaining card chosen by `rng`.
    ///
    /// The remaining cards keep their relative order.
    pub fn draw_random<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        let remaining = self.remaining.len();
        if remaining == 0 {
            return Err(DeckError::Empty);
        }

        let index = rng.next_index(remaining);
        if index >= remaining {
            return Err(DeckError::IndexOutOfRange { index, remaining });
        }

        let card = self.remaining.remove(index);
        trace!("drew {} at index {} of {}", card, index, remaining);
        Ok(card)
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// True when every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    /// Is `card` still in the deck?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.remaining.contains(&card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
