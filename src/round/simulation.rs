//! Batch simulation of rounds.

use serde::{Deserialize, Serialize};

use crate::core::error::RoundError;
use crate::core::rng::RandomSource;
use crate::core::seat::SeatMap;

use super::controller::RoundController;

/// Aggregate counts over simulated rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Rounds played.
    pub rounds: u64,
    /// Rounds where at least one hand held a pair.
    pub rounds_with_pair: u64,
    /// Rounds won per seat.
    pub wins: SeatMap<u64>,
    /// Rounds with no winner.
    pub ties: u64,
}

impl SimulationSummary {
    /// Fraction of rounds with at least one pair.
    #[must_use]
    pub fn pair_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.rounds_with_pair as f64 / self.rounds as f64
        }
    }

    /// Fraction of rounds with no winner.
    #[must_use]
    pub fn tie_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.ties as f64 / self.rounds as f64
        }
    }
}

/// Play `rounds` rounds on `controller` and tally the outcomes.
///
/// Stops at the first failed round.
pub fn simulate<R: RandomSource>(
    controller: &mut RoundController<R>,
    rounds: u64,
) -> Result<SimulationSummary, RoundError> {
    let mut summary = SimulationSummary::default();

    for _ in 0..rounds {
        let result = controller.play_round()?;
        summary.rounds += 1;
        if result.has_pair() {
            summary.rounds_with_pair += 1;
        }
        match result.winner {
            Some(seat) => summary.wins[seat] += 1,
            None => summary.ties += 1,
        }
    }

    Ok(summary)
}
