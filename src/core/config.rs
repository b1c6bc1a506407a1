//! Table constants and round configuration.
//!
//! The table shape is fixed: four suits, thirteen ranks, two hands of
//! five cards. `RoundConfig` only chooses how a round deals.

use serde::{Deserialize, Serialize};

/// Number of suits in the deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

/// Cards in a full deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Cards per hand.
pub const HAND_SIZE: usize = 5;

/// Hands dealt each round.
pub const HANDS_PER_ROUND: usize = 2;

/// How a round deals its hands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealPolicy {
    /// Deal once and keep whatever comes out.
    #[default]
    Fair,
    /// When neither hand holds a pair, rebuild the deck and deal again,
    /// at most `max_redeals` extra times. The last deal is always kept.
    Redeal { max_redeals: u32 },
}

impl DealPolicy {
    /// Extra deals allowed after the first.
    #[must_use]
    pub const fn max_redeals(self) -> u32 {
        match self {
            DealPolicy::Fair => 0,
            DealPolicy::Redeal { max_redeals } => max_redeals,
        }
    }

    /// Total deals allowed, first one included. Saturates at `u32::MAX`.
    #[must_use]
    pub const fn max_deals(self) -> u32 {
        self.max_redeals().saturating_add(1)
    }
}

/// Round configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Dealing policy.
    pub policy: DealPolicy,
}

impl RoundConfig {
    /// Create the default configuration (fair dealing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dealing policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DealPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Redeal pairless rounds up to `max_redeals` times.
    #[must_use]
    pub fn with_redeals(self, max_redeals: u32) -> Self {
        self.with_policy(DealPolicy::Redeal { max_redeals })
    }
}
