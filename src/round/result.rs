//! Round results handed to the Presentation Layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, Rank};
use crate::core::config::HAND_SIZE;
use crate::core::seat::{Seat, SeatMap};
use crate::dealing::Hand;
use crate::pairs::{classify_card, CardTag, PairSet};

/// Everything the Presentation Layer needs about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandReport {
    /// Cards in draw order.
    pub hand: Hand,
    /// Display tag per card, parallel to `hand`.
    pub tags: SmallVec<[CardTag; HAND_SIZE]>,
    /// Repeated ranks in this hand.
    pub pairs: PairSet,
    /// Is this seat marked as the round winner?
    pub winning: bool,
}

impl HandReport {
    /// Tag every card of `hand` against the round's winning rank.
    pub fn new(hand: Hand, pairs: PairSet, winning_rank: Option<Rank>, winning: bool) -> Self {
        let tags = hand
            .cards()
            .iter()
            .map(|&card| classify_card(card, winning_rank, &pairs))
            .collect();
        Self {
            hand,
            tags,
            pairs,
            winning,
        }
    }

    /// Cards paired with their tags.
    pub fn tagged_cards(&self) -> impl Iterator<Item = (Card, CardTag)> + '_ {
        self.hand.cards().iter().copied().zip(self.tags.iter().copied())
    }
}

/// Outcome of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Per-seat reports.
    pub hands: SeatMap<HandReport>,
    /// Rank of the overall strongest pair, if any.
    pub winning_rank: Option<Rank>,
    /// Winning seat, if the round was not a tie.
    pub winner: Option<Seat>,
    /// Deals made to produce this result (more than 1 only when redealing).
    pub deals: u32,
}

impl RoundResult {
    /// Report for one seat.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &HandReport {
        &self.hands[seat]
    }

    /// Does at least one hand hold a pair?
    #[must_use]
    pub fn has_pair(&self) -> bool {
        self.hands.iter().any(|(_, report)| !report.pairs.is_empty())
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}
