//! Round orchestration.
//!
//! A `RoundController` owns one deck and one random source. Each call to
//! `play_round` rebuilds the deck, deals both seats, analyzes and compares
//! their pairs, and returns the finished `RoundResult`.
//!
//! ## Phases
//!
//! The controller is `Idle` between rounds and `Resolving` while one runs.
//! It always returns to `Idle`, whether the round completes or aborts.
//!
//! ## Failure
//!
//! Any error aborts the whole round. `play_and_present` then tells the
//! presenter to reset instead of showing a partial result.

use log::{debug, warn};

use crate::core::config::RoundConfig;
use crate::core::error::RoundError;
use crate::core::rng::{GameRng, RandomSource};
use crate::core::seat::{Seat, SeatMap};
use crate::dealing::{deal_hand, Deck, Hand};
use crate::pairs::{decide_round_winner, decide_winner, find_pairs, PairSet};

use super::presenter::Presenter;
use super::result::{HandReport, RoundResult};

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for a trigger.
    Idle,
    /// A round is in progress.
    Resolving,
}

/// Plays rounds against an owned deck.
///
/// ## Usage
///
/// ```
/// use pair_duel::round::{RoundController, RoundPhase};
///
/// let mut controller = RoundController::new(42);
/// let result = controller.play_round().unwrap();
///
/// assert_eq!(controller.phase(), RoundPhase::Idle);
/// assert_eq!(controller.deck().len(), 42);
/// assert_eq!(result.deals, 1);
/// ```
#[derive(Clone, Debug)]
pub struct RoundController<R: RandomSource = GameRng> {
    deck: Deck,
    rng: R,
    config: RoundConfig,
    phase: RoundPhase,
    rounds_played: u64,
}

impl RoundController<GameRng> {
    /// Create a controller with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_source(GameRng::new(seed))
    }

    /// Create a controller with an entropy-seeded RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_source(GameRng::from_entropy())
    }
}

impl<R: RandomSource> RoundController<R> {
    /// Create a controller drawing indices from `rng`.
    pub fn with_source(rng: R) -> Self {
        Self {
            deck: Deck::new(),
            rng,
            config: RoundConfig::default(),
            phase: RoundPhase::Idle,
            rounds_played: 0,
        }
    }

    /// Replace the round configuration.
    #[must_use]
    pub fn with_config(mut self, config: RoundConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The deck as left by the last deal.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Rounds completed successfully.
    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Play one round.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.phase = RoundPhase::Resolving;
        let outcome = self.resolve();
        self.phase = RoundPhase::Idle;

        match &outcome {
            Ok(_) => self.rounds_played += 1,
            Err(err) => warn!("round aborted: {}", err),
        }
        outcome
    }

    /// Play one round and hand it to `presenter`.
    ///
    /// On failure the presenter is reset and the error returned.
    pub fn play_and_present<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<RoundResult, RoundError> {
        match self.play_round() {
            Ok(result) => {
                presenter.present(&result);
                Ok(result)
            }
            Err(err) => {
                presenter.reset();
                Err(err)
            }
        }
    }

    fn resolve(&mut self) -> Result<RoundResult, RoundError> {
        let max_deals = self.config.policy.max_deals();
        let mut deals = 1u32;

        loop {
            let (hands, pairs) = self.deal()?;

            let has_pair = pairs.iter().any(|(_, p)| !p.is_empty());
            if has_pair || deals >= max_deals {
                return Ok(Self::score(hands, pairs, deals));
            }
            debug!("deal {} has no pairs, redealing", deals);
            // deals < max_deals, so this cannot overflow
            deals += 1;
        }
    }

    /// Rebuild the deck and deal both seats in order.
    fn deal(&mut self) -> Result<(SeatMap<Hand>, SeatMap<PairSet>), RoundError> {
        self.deck.reset();

        let first = deal_hand(&mut self.deck, &mut self.rng)?;
        let second = deal_hand(&mut self.deck, &mut self.rng)?;
        let hands = SeatMap::from_pair(first, second);

        let pairs = SeatMap::from_pair(
            find_pairs(hands[Seat::First].cards())?,
            find_pairs(hands[Seat::Second].cards())?,
        );

        for (seat, hand) in hands.iter() {
            debug!("{}: {} pairs {}", seat, hand, pairs[seat]);
        }
        Ok((hands, pairs))
    }

    fn score(hands: SeatMap<Hand>, pairs: SeatMap<PairSet>, deals: u32) -> RoundResult {
        let winning_rank = decide_winner(&pairs[Seat::First], &pairs[Seat::Second]);
        let winner = decide_round_winner(&pairs[Seat::First], &pairs[Seat::Second], winning_rank);

        let reports = SeatMap::new(|seat| {
            HandReport::new(
                hands[seat].clone(),
                pairs[seat].clone(),
                winning_rank,
                winner == Some(seat),
            )
        });

        RoundResult {
            hands: reports,
            winning_rank,
            winner,
            deals,
        }
    }
}
