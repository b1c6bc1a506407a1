//! Error types for dealing, hand analysis, and rounds.

use thiserror::Error;

use super::card::Card;

/// Failure while drawing from a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Drew from a deck with no cards left.
    #[error("cannot draw from an empty deck")]
    Empty,

    /// The random source produced an index past the remaining cards.
    #[error("draw index {index} out of range for {remaining} remaining cards")]
    IndexOutOfRange { index: usize, remaining: usize },
}

/// A hand that cannot be analyzed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("malformed hand: expected {expected} cards, found {found}")]
    WrongSize { expected: usize, found: usize },

    #[error("malformed hand: {0} appears more than once")]
    DuplicateCard(Card),
}

/// Any failure that aborts a round.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Hand(#[from] HandError),
}
