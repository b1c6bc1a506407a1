//! Deck and dealing.
//!
//! - `Deck`: the remaining cards, with `reset` and `draw_random`
//! - `Hand`: cards dealt to one seat
//! - `deal_hand`: draws a standard hand from a deck

pub mod deck;
pub mod dealer;

pub use deck::Deck;
pub use dealer::{deal_hand, deal_hand_of, Hand};
