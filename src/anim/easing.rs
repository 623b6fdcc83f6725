//! Named easing curves.
//!
//! A closed enum rather than stringly-typed curve names; the
//! presentation layer can map these onto its own tweening library's
//! curves if it drives animations itself.

use serde::{Deserialize, Serialize};

/// An easing curve mapping normalized time to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,
    /// Accelerating from rest.
    QuadIn,
    /// Decelerating to rest.
    QuadOut,
    /// Smooth acceleration and deceleration.
    SineInOut,
}

impl Easing {
    /// Apply the curve to `t` in [0, 1].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::SineInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
        }
    }
}
