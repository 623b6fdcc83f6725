//! A single position interpolation over time.

use serde::{Deserialize, Serialize};

use crate::layout::Position;

use super::easing::Easing;

/// One in-flight interpolation from one position to another.
///
/// Advanced by the timeline's `tick`; zero-duration tweens complete on
/// their first advance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tween {
    pub from: Position,
    pub to: Position,
    /// Total duration in time-units.
    pub duration: f32,
    /// Time-units elapsed so far.
    pub elapsed: f32,
    pub easing: Easing,
}

impl Tween {
    /// Create a tween at its start.
    #[must_use]
    pub fn new(from: Position, to: Position, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` time-units. Returns the unconsumed portion of
    /// `dt` once the tween has finished, so a following step can start
    /// within the same frame.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let remaining = self.duration - self.elapsed;
        if dt >= remaining {
            self.elapsed = self.duration;
            dt - remaining
        } else {
            self.elapsed += dt;
            0.0
        }
    }

    /// Has the tween reached its target?
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The interpolated position at the current elapsed time.
    #[must_use]
    pub fn sample(&self) -> Position {
        if self.duration <= 0.0 || self.is_done() {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        Position::lerp(&self.from, &self.to, t)
    }
}
