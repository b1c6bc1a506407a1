//! Seat identification and per-seat storage.
//!
//! ## Seat
//!
//! One of the two hand positions at the table. `First` is dealt first.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two hand positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats in dealing order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// 0-based position.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "Hand 1"),
            Seat::Second => write!(f, "Hand 2"),
        }
    }
}

/// Per-seat data with O(1) access.
///
/// ```
/// use pair_duel::core::{Seat, SeatMap};
///
/// let mut wins = SeatMap::new(|_| 0u32);
/// wins[Seat::Second] += 1;
/// assert_eq!(wins[Seat::First], 0);
/// assert_eq!(wins[Seat::Second], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    /// Create a map from the first and second seat values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Iterate over `(seat, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Transform every entry.
    pub fn map<U>(&self, mut f: impl FnMut(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, &self.data[seat.index()]))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_index_and_other() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(format!("{}", Seat::Second), "Hand 2");
    }

    #[test]
    fn test_seat_map_iter_order() {
        let map = SeatMap::from_pair("a", "b");
        let entries: Vec<_> = map.iter().map(|(seat, v)| (seat, *v)).collect();
        assert_eq!(entries, vec![(Seat::First, "a"), (Seat::Second, "b")]);
    }

    #[test]
    fn test_seat_map_map() {
        let map = SeatMap::from_pair(2, 3);
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled[Seat::First], 4);
        assert_eq!(doubled[Seat::Second], 6);
    }
}
