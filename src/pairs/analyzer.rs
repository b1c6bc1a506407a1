//! Pair detection.
//!
//! A hand's `PairSet` lists one rank per card whose rank already appeared
//! earlier in the hand. Repeats are counted per occurrence, not per rank:
//!
//! | Hand shape      | Entries |
//! |-----------------|---------|
//! | no repeats      | 0       |
//! | one pair        | 1       |
//! | two pair        | 2       |
//! | three of a kind | 2       |
//! | full house      | 3       |
//! | four of a kind  | 3       |
//!
//! The comparator's count tie-break depends on these totals.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, Rank};
use crate::core::config::HAND_SIZE;
use crate::core::error::HandError;

/// Ranks repeated within one hand, one entry per repeat occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairSet {
    /// At most `HAND_SIZE - 1` entries.
    ranks: SmallVec<[Rank; 4]>,
}

impl PairSet {
    /// Build a pair set from raw entries.
    ///
    /// Used to describe pair sets directly, without dealing a hand.
    pub fn from_ranks(ranks: impl IntoIterator<Item = Rank>) -> Self {
        Self {
            ranks: ranks.into_iter().collect(),
        }
    }

    /// Number of entries (the pair count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Is `rank` one of the entries?
    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        self.ranks.contains(&rank)
    }

    /// Entries in hand order.
    pub fn iter(&self) -> impl Iterator<Item = Rank> + '_ {
        self.ranks.iter().copied()
    }

    /// Entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks
    }

    /// Distinct ranks, highest first.
    #[must_use]
    pub fn distinct_ranks(&self) -> Vec<Rank> {
        let mut distinct: Vec<Rank> = self.ranks.to_vec();
        distinct.sort_unstable_by(|a, b| b.cmp(a));
        distinct.dedup();
        distinct
    }
}

impl std::fmt::Display for PairSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, rank) in self.ranks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", rank)?;
        }
        write!(f, "]")
    }
}

/// Compute the pair set of a hand.
///
/// Rejects hands that are not exactly `HAND_SIZE` distinct cards.
pub fn find_pairs(cards: &[Card]) -> Result<PairSet, HandError> {
    validate_hand(cards)?;

    let mut seen: SmallVec<[Rank; HAND_SIZE]> = SmallVec::new();
    let mut pairs = PairSet::default();
    for card in cards {
        if seen.contains(&card.rank) {
            pairs.ranks.push(card.rank);
        } else {
            seen.push(card.rank);
        }
    }
    Ok(pairs)
}

fn validate_hand(cards: &[Card]) -> Result<(), HandError> {
    if cards.len() != HAND_SIZE {
        return Err(HandError::WrongSize {
            expected: HAND_SIZE,
            found: cards.len(),
        });
    }

    let mut unique = FxHashSet::default();
    for card in cards {
        if !unique.insert(*card) {
            return Err(HandError::DuplicateCard(*card));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn hand(ranks: [Rank; 5]) -> Vec<Card> {
        // Cycle suits so equal ranks stay distinct cards
        ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| Card::new(Suit::ALL[i % 4], rank))
            .collect()
    }

    #[test]
    fn test_no_pairs() {
        let pairs = find_pairs(&hand([Rank::Two, Rank::Five, Rank::Nine, Rank::Jack, Rank::Ace])).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_one_pair() {
        let pairs = find_pairs(&hand([Rank::King, Rank::Five, Rank::King, Rank::Jack, Rank::Ace])).unwrap();
        assert_eq!(pairs.as_slice(), &[Rank::King]);
    }

    #[test]
    fn test_two_pair_in_hand_order() {
        let pairs = find_pairs(&hand([Rank::Nine, Rank::Four, Rank::Four, Rank::Nine, Rank::Ace])).unwrap();
        assert_eq!(pairs.as_slice(), &[Rank::Four, Rank::Nine]);
    }

    #[test]
    fn test_three_of_a_kind_counts_twice() {
        let pairs = find_pairs(&hand([Rank::Two, Rank::Two, Rank::Seven, Rank::Two, Rank::Ace])).unwrap();
        assert_eq!(pairs.as_slice(), &[Rank::Two, Rank::Two]);
    }

    #[test]
    fn test_four_of_a_kind_counts_three_times() {
        let pairs = find_pairs(&hand([Rank::Queen, Rank::Queen, Rank::Queen, Rank::Queen, Rank::Three])).unwrap();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|r| r == Rank::Queen));
    }

    #[test]
    fn test_full_house() {
        let pairs = find_pairs(&hand([Rank::Six, Rank::Ten, Rank::Six, Rank::Six, Rank::Ten])).unwrap();
        assert_eq!(pairs.as_slice(), &[Rank::Six, Rank::Six, Rank::Ten]);
        assert_eq!(pairs.distinct_ranks(), vec![Rank::Ten, Rank::Six]);
    }

    #[test]
    fn test_wrong_size_rejected() {
        let mut cards = hand([Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
        cards.pop();
        assert_eq!(
            find_pairs(&cards),
            Err(HandError::WrongSize { expected: 5, found: 4 })
        );
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let ace = Card::new(Suit::Spade, Rank::Ace);
        let cards = vec![
            ace,
            Card::new(Suit::Heart, Rank::Two),
            ace,
            Card::new(Suit::Club, Rank::Three),
            Card::new(Suit::Club, Rank::Four),
        ];
        assert_eq!(find_pairs(&cards), Err(HandError::DuplicateCard(ace)));
    }

    #[test]
    fn test_pair_set_display_and_serde() {
        let pairs = PairSet::from_ranks([Rank::Ten, Rank::King]);
        assert_eq!(format!("{}", pairs), "[10, K]");
        assert_eq!(serde_json::to_string(&pairs).unwrap(), r#"["10","K"]"#);
    }
}
