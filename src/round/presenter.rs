//! The boundary to the Presentation Layer.
//!
//! A `Presenter` receives finished rounds and the reset signal the
//! controller sends when a round aborts. It never sees a partial round.

use log::info;

use crate::core::card::Card;

use super::result::RoundResult;

/// Card artwork location, with `{suit}` and `{card}` placeholders.
pub const DEFAULT_CARD_IMAGE_URL: &str = "http://h3h.net/images/cards/{suit}_{card}.svg";

/// Receives round results for display.
pub trait Presenter {
    /// Show a completed round.
    fn present(&mut self, result: &RoundResult);

    /// Discard all displayed round state and start from scratch.
    fn reset(&mut self);
}

/// Writes each round to the `log` facade at info level.
#[derive(Clone, Debug, Default)]
pub struct LogPresenter {
    shown: u64,
}

impl LogPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds presented since the last reset.
    #[must_use]
    pub fn shown(&self) -> u64 {
        self.shown
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, result: &RoundResult) {
        self.shown += 1;
        for (seat, report) in result.hands.iter() {
            let marker = if report.winning { " (winning)" } else { "" };
            info!("{}{}: {} pairs {}", seat, marker, report.hand, report.pairs);
        }
        match result.winning_rank {
            Some(rank) => info!("winning rank {}", rank),
            None => info!("no winning pair"),
        }
    }

    fn reset(&mut self) {
        self.shown = 0;
        info!("presentation reset");
    }
}

/// Keeps only the most recent round, as a screen would.
#[derive(Clone, Debug, Default)]
pub struct LatestRound {
    current: Option<RoundResult>,
    resets: u32,
}

impl LatestRound {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The round on display, if any.
    #[must_use]
    pub fn current(&self) -> Option<&RoundResult> {
        self.current.as_ref()
    }

    /// How many times the display was reset.
    #[must_use]
    pub fn resets(&self) -> u32 {
        self.resets
    }
}

impl Presenter for LatestRound {
    fn present(&mut self, result: &RoundResult) {
        self.current = Some(result.clone());
    }

    fn reset(&mut self) {
        self.current = None;
        self.resets += 1;
    }
}

/// Resolve a card's artwork location from a URL template.
///
/// ```
/// use pair_duel::core::{Card, Rank, Suit};
/// use pair_duel::round::{card_image_url, DEFAULT_CARD_IMAGE_URL};
///
/// let url = card_image_url(DEFAULT_CARD_IMAGE_URL, Card::new(Suit::Heart, Rank::Queen));
/// assert_eq!(url, "http://h3h.net/images/cards/heart_Q.svg");
/// ```
#[must_use]
pub fn card_image_url(template: &str, card: Card) -> String {
    template
        .replace("{suit}", card.suit.symbol())
        .replace("{card}", card.rank.symbol())
}
