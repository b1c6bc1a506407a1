//! # pair-duel
//!
//! Deals two disjoint five-card hands from one 52-card deck and decides
//! which hand holds the stronger pairing.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: Each `RoundController` owns its deck and random
//!    source. Nothing is process-wide.
//!
//! 2. **Explicit Failure**: Every failure is a typed `RoundError`. A failed
//!    round produces no result at all, and the presenter is reset.
//!
//! 3. **Injectable Randomness**: Dealing draws indices from a
//!    `RandomSource`, so rounds can be seeded or fully scripted.
//!
//! ## Modules
//!
//! - `core`: Cards, seats, random sources, configuration, errors
//! - `dealing`: Deck and dealer
//! - `pairs`: Pair analysis and the comparison policy
//! - `round`: Round controller, results, presenters, simulation
//!
//! ## Example
//!
//! ```
//! use pair_duel::{LatestRound, RoundController};
//!
//! let mut controller = RoundController::new(2024);
//! let mut screen = LatestRound::new();
//!
//! controller.play_and_present(&mut screen).unwrap();
//! assert!(screen.current().is_some());
//! ```

pub mod core;
pub mod dealing;
pub mod pairs;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    Card, Rank, Suit,
    Seat, SeatMap,
    GameRng, GameRngState, RandomSource, ScriptedSource,
    DealPolicy, RoundConfig, HAND_SIZE, HANDS_PER_ROUND, DECK_SIZE,
    DeckError, HandError, RoundError,
};

pub use crate::dealing::{deal_hand, deal_hand_of, Deck, Hand};

pub use crate::pairs::{
    find_pairs, PairSet, CardTag,
    strongest_pair_rank, decide_winner, decide_round_winner, classify_card,
};

pub use crate::round::{
    RoundController, RoundPhase,
    RoundResult, HandReport,
    Presenter, LogPresenter, LatestRound, card_image_url, DEFAULT_CARD_IMAGE_URL,
    simulate, SimulationSummary,
};
