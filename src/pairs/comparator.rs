//! Comparing two hands by their pairs.
//!
//! Two signals decide a comparison: the strongest pair rank and the pair
//! count (`PairSet::len`). The first hand is tested first, and either
//! signal alone wins it the comparison. The second hand is only tested
//! when the first fails both. So a first-hand three of a kind (two
//! entries) beats a higher single pair, but the same trips in the second
//! hand lose to it:
//!
//! ```
//! use pair_duel::core::Rank;
//! use pair_duel::pairs::{decide_winner, PairSet};
//!
//! let kings = PairSet::from_ranks([Rank::King]);
//! let trip_twos = PairSet::from_ranks([Rank::Two, Rank::Two]);
//! assert_eq!(decide_winner(&trip_twos, &kings), Some(Rank::Two));
//! assert_eq!(decide_winner(&kings, &trip_twos), Some(Rank::King));
//! ```
//!
//! A hand without pairs has no strongest rank, which compares below every
//! rank.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank};
use crate::core::seat::Seat;

use super::analyzer::PairSet;

/// Display classification of a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTag {
    /// Part of the pair carrying the winning rank.
    #[serde(rename = "pair0")]
    Pair0,
    /// Part of some other pair in its hand.
    #[serde(rename = "pair1")]
    Pair1,
    /// Not paired.
    #[serde(rename = "card")]
    Plain,
}

/// Highest rank in the pair set, or `None` when it is empty.
#[must_use]
pub fn strongest_pair_rank(pairs: &PairSet) -> Option<Rank> {
    pairs.iter().max()
}

/// Rank of the overall strongest pair across both hands.
///
/// Hand A's strongest rank is returned when A has the higher strongest rank
/// **or** more pair entries. Otherwise B's is returned under the mirrored
/// test. An exact tie on both (including two empty sets) has no winner.
#[must_use]
pub fn decide_winner(a: &PairSet, b: &PairSet) -> Option<Rank> {
    let strongest_a = strongest_pair_rank(a);
    let strongest_b = strongest_pair_rank(b);

    if strongest_a > strongest_b || a.len() > b.len() {
        strongest_a
    } else if strongest_b > strongest_a || b.len() > a.len() {
        strongest_b
    } else {
        None
    }
}

/// Seat marked as the round winner.
///
/// The first seat wins when it holds `winning_rank` or has more entries,
/// checked before the second seat. A missing winning rank matches nothing.
#[must_use]
pub fn decide_round_winner(a: &PairSet, b: &PairSet, winning_rank: Option<Rank>) -> Option<Seat> {
    let holds = |pairs: &PairSet| winning_rank.is_some_and(|rank| pairs.contains(rank));

    if holds(a) || a.len() > b.len() {
        Some(Seat::First)
    } else if holds(b) || b.len() > a.len() {
        Some(Seat::Second)
    } else {
        None
    }
}

/// Tag for `card` within a hand whose pair set is `pairs`.
#[must_use]
pub fn classify_card(card: Card, winning_rank: Option<Rank>, pairs: &PairSet) -> CardTag {
    if winning_rank == Some(card.rank) && pairs.contains(card.rank) {
        CardTag::Pair0
    } else if pairs.contains(card.rank) {
        CardTag::Pair1
    } else {
        CardTag::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn set(ranks: &[Rank]) -> PairSet {
        PairSet::from_ranks(ranks.iter().copied())
    }

    #[test]
    fn test_strongest_pair_rank() {
        assert_eq!(strongest_pair_rank(&set(&[])), None);
        assert_eq!(strongest_pair_rank(&set(&[Rank::Four, Rank::Jack])), Some(Rank::Jack));
        assert_eq!(strongest_pair_rank(&set(&[Rank::Ace, Rank::Three])), Some(Rank::Ace));
    }

    #[test]
    fn test_higher_pair_wins() {
        let aces = set(&[Rank::Ace]);
        let kings = set(&[Rank::King]);

        let winning = decide_winner(&aces, &kings);
        assert_eq!(winning, Some(Rank::Ace));
        assert_eq!(decide_round_winner(&aces, &kings, winning), Some(Seat::First));

        let winning = decide_winner(&kings, &aces);
        assert_eq!(winning, Some(Rank::Ace));
        assert_eq!(decide_round_winner(&kings, &aces, winning), Some(Seat::Second));
    }

    #[test]
    fn test_count_beats_rank_for_first_hand() {
        let trip_twos = set(&[Rank::Two, Rank::Two]);
        let kings = set(&[Rank::King]);

        let winning = decide_winner(&trip_twos, &kings);
        assert_eq!(winning, Some(Rank::Two));
        assert_eq!(decide_round_winner(&trip_twos, &kings, winning), Some(Seat::First));
    }

    #[test]
    fn test_rank_checked_before_second_hand_count() {
        // Same hands, swapped: the first hand's higher rank fires before
        // the second hand's count is looked at.
        let kings = set(&[Rank::King]);
        let trip_twos = set(&[Rank::Two, Rank::Two]);

        let winning = decide_winner(&kings, &trip_twos);
        assert_eq!(winning, Some(Rank::King));
        assert_eq!(decide_round_winner(&kings, &trip_twos, winning), Some(Seat::First));
    }

    #[test]
    fn test_count_wins_for_first_hand_with_lower_rank() {
        // First hand: two pair, fives and threes. Second: pair of aces.
        let two_pair = set(&[Rank::Five, Rank::Three]);
        let aces = set(&[Rank::Ace]);

        // Condition 1 fires on count, so the first hand's strongest rank wins
        let winning = decide_winner(&two_pair, &aces);
        assert_eq!(winning, Some(Rank::Five));
        assert_eq!(decide_round_winner(&two_pair, &aces, winning), Some(Seat::First));
    }

    #[test]
    fn test_both_empty_is_a_tie() {
        let empty = set(&[]);
        let winning = decide_winner(&empty, &empty);
        assert_eq!(winning, None);
        assert_eq!(decide_round_winner(&empty, &empty, winning), None);
    }

    #[test]
    fn test_one_pair_beats_nothing() {
        let twos = set(&[Rank::Two]);
        let empty = set(&[]);

        assert_eq!(decide_winner(&twos, &empty), Some(Rank::Two));
        assert_eq!(decide_winner(&empty, &twos), Some(Rank::Two));
        assert_eq!(decide_round_winner(&empty, &twos, Some(Rank::Two)), Some(Seat::Second));
    }

    #[test]
    fn test_same_pair_rank_same_count_ties() {
        let kings = set(&[Rank::King]);
        let winning = decide_winner(&kings, &kings.clone());
        assert_eq!(winning, None);
        assert_eq!(decide_round_winner(&kings, &kings, winning), None);
    }

    #[test]
    fn test_shared_winning_rank_favours_first_seat() {
        // Both hold kings; the second hand also holds fives, so it wins
        // the rank comparison on count. The first seat still holds the
        // winning rank and is checked first.
        let kings = set(&[Rank::King]);
        let kings_and_fives = set(&[Rank::King, Rank::Five]);

        let winning = decide_winner(&kings, &kings_and_fives);
        assert_eq!(winning, Some(Rank::King));
        assert_eq!(
            decide_round_winner(&kings, &kings_and_fives, winning),
            Some(Seat::First)
        );
    }

    #[test]
    fn test_classify_card() {
        let pairs = set(&[Rank::Nine, Rank::Four]);
        let winning = Some(Rank::Nine);

        assert_eq!(classify_card(Card::new(Suit::Spade, Rank::Nine), winning, &pairs), CardTag::Pair0);
        assert_eq!(classify_card(Card::new(Suit::Heart, Rank::Four), winning, &pairs), CardTag::Pair1);
        assert_eq!(classify_card(Card::new(Suit::Club, Rank::Ace), winning, &pairs), CardTag::Plain);
    }

    #[test]
    fn test_classify_winning_rank_not_held() {
        // Winning rank came from the other hand
        let pairs = set(&[Rank::Three]);
        let winning = Some(Rank::Ace);

        assert_eq!(classify_card(Card::new(Suit::Spade, Rank::Ace), winning, &pairs), CardTag::Plain);
        assert_eq!(classify_card(Card::new(Suit::Spade, Rank::Three), winning, &pairs), CardTag::Pair1);
        assert_eq!(classify_card(Card::new(Suit::Spade, Rank::Three), None, &pairs), CardTag::Pair1);
    }

    #[test]
    fn test_card_tag_serde() {
        assert_eq!(serde_json::to_string(&CardTag::Pair0).unwrap(), r#""pair0""#);
        assert_eq!(serde_json::to_string(&CardTag::Plain).unwrap(), r#""card""#);
    }
}
