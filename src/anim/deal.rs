//! The timed deal sequencer.
//!
//! A `DealSequence` is the periodic timed-event scheduler specialized to
//! dealing: it accumulates tick time and emits one single-card transfer
//! every `interval` time-units, round-robining through the seats in fixed
//! order. It owns no cards - the table reacts to each emitted transfer by
//! drawing and animating.
//!
//! Completion is signalled on the scheduler tick *after* the final
//! transfer, and the sequence cancels itself at that point. The table may
//! also cancel it early (empty deck under the end-early policy); a
//! cancelled sequence never emits again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::seat::SeatId;

/// One scheduler event emitted by `DealSequence::tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealTick {
    /// Transfer one card to this seat now.
    Transfer(SeatId),
    /// The schedule has run its course; the sequence is now cancelled.
    Complete,
}

/// Periodic single-card transfer scheduler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DealSequence {
    seats: Vec<SeatId>,
    /// Total transfers scheduled (cards_per_seat x seats).
    total: usize,
    /// Transfers emitted so far.
    transfers: usize,
    interval: f32,
    accumulator: f32,
    cancelled: bool,
}

impl DealSequence {
    /// Schedule `cards_per_seat` transfers to each seat, one every
    /// `interval` time-units.
    #[must_use]
    pub fn new(seats: Vec<SeatId>, cards_per_seat: usize, interval: f32) -> Self {
        assert!(!seats.is_empty(), "Deal requires at least one seat");
        assert!(interval > 0.0, "Deal interval must be positive");

        let total = cards_per_seat * seats.len();
        Self {
            seats,
            total,
            transfers: 0,
            interval,
            accumulator: 0.0,
            cancelled: false,
        }
    }

    /// Transfers emitted so far.
    #[must_use]
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// Total transfers scheduled.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Has the sequence been cancelled (by schedule end or externally)?
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop the sequence. No further events are emitted after this -
    /// guaranteed, like a removed timer.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// The seat receiving the next transfer, by round-robin rotation.
    #[must_use]
    pub fn next_seat(&self) -> SeatId {
        self.seats[self.transfers % self.seats.len()]
    }

    /// Advance the scheduler clock by `dt` time-units.
    ///
    /// Emits every transfer that has come due, in order; a large `dt`
    /// may emit several. The `Complete` event fires exactly once, one
    /// interval after the final transfer.
    pub fn tick(&mut self, dt: f32) -> SmallVec<[DealTick; 4]> {
        let mut events = SmallVec::new();
        if self.cancelled {
            return events;
        }

        self.accumulator += dt;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;

            if self.transfers == self.total {
                self.cancelled = true;
                events.push(DealTick::Complete);
                log::debug!("deal complete after {} transfers", self.transfers);
                break;
            }

            let seat = self.next_seat();
            self.transfers += 1;
            log::trace!("deal transfer {}/{} to {}", self.transfers, self.total, seat);
            events.push(DealTick::Transfer(seat));
        }

        events
    }
}
