//! Dealing hands from a deck.
//!
//! Dealing is repeated `Deck::draw_random`. Disjointness of the two hands
//! in a round follows from both being drawn out of the same deck.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::config::HAND_SIZE;
use crate::core::error::DeckError;
use crate::core::rng::RandomSource;

use super::deck::Deck;

/// Cards held by one seat, in draw order.
///
/// Inline storage holds a standard hand without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; HAND_SIZE]>,
}

impl Hand {
    /// Build a hand from cards in the given order.
    ///
    /// No validation happens here; pair analysis rejects malformed hands.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Does this hand hold `card`?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

/// Deal a standard five-card hand.
pub fn deal_hand<R: RandomSource + ?Sized>(deck: &mut Deck, rng: &mut R) -> Result<Hand, DeckError> {
    deal_hand_of(deck, rng, HAND_SIZE)
}

/// Deal `size` cards, preserving draw order.
///
/// Stops at the first failed draw. Cards drawn before the failure are
/// consumed from the deck and discarded with the partial hand.
pub fn deal_hand_of<R: RandomSource + ?Sized>(
    deck: &mut Deck,
    rng: &mut R,
    size: usize,
) -> Result<Hand, DeckError> {
    let mut cards = SmallVec::with_capacity(size);
    for _ in 0..size {
        cards.push(deck.draw_random(rng)?);
    }
    Ok(Hand { cards })
}
