//! Core types: cards, seats, random sources, configuration, errors.
//!
//! Everything above this module (deck, pair analysis, rounds) builds on
//! these value types and never reaches for process-wide state.

pub mod card;
pub mod seat;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{Card, Rank, Suit};
pub use seat::{Seat, SeatMap};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
pub use config::{DealPolicy, RoundConfig, DECK_SIZE, HANDS_PER_ROUND, HAND_SIZE, RANK_COUNT, SUIT_COUNT};
pub use error::{DeckError, HandError, RoundError};
