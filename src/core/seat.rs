//! Seats and per-seat storage.
//!
//! Seats are numbered from zero in dealing order: the round-robin deal
//! visits them by ascending index and wraps after the last one. The set
//! of seats is fixed at build time; nobody joins or leaves a running
//! table.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A seat at the table, identified by its 0-based dealing-order index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The raw 0-based index, for slot arithmetic.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat of a table with `seat_count` seats, in dealing order.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One value per seat, indexed by `SeatId`.
///
/// The table keeps its hands in one of these. A plain `Vec` under a
/// seat-typed index is all that takes, given the fixed seat set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    entries: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Build one entry per seat from a factory.
    ///
    /// Panics unless `1..=255` seats are requested: `SeatId` is a `u8`,
    /// and a table without seats has nothing to deal to.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(
            (1..=255).contains(&seat_count),
            "seat count must be in 1..=255, got {seat_count}"
        );
        Self {
            entries: SeatId::all(seat_count).map(factory).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in dealing order, paired with their seats.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        SeatId::all(self.entries.len()).zip(self.entries.iter())
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &T {
        &self.entries[seat.index()]
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.entries[seat.index()]
    }
}
