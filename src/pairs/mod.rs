//! Pair analysis and hand comparison.
//!
//! ## Key Types
//!
//! - `PairSet`: ranks repeated within a hand
//! - `CardTag`: per-card display classification
//!
//! ## Operations
//!
//! - `find_pairs`: hand → pair set
//! - `strongest_pair_rank`, `decide_winner`, `decide_round_winner`:
//!   the comparison policy
//! - `classify_card`: display tag for one card

pub mod analyzer;
pub mod comparator;

pub use analyzer::{find_pairs, PairSet};
pub use comparator::{classify_card, decide_round_winner, decide_winner, strongest_pair_rank, CardTag};
