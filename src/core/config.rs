//! Table configuration types.
//!
//! A table is configured at startup by providing:
//! - `DeckConfig`: Deck composition and initial stack layout
//! - `HandConfig`: Per-seat hand layout parameters
//! - `DealConfig`: Timing and policy of a deal sequence
//! - `DiscardConfig`: Where removed cards animate to
//!
//! The engine never hardcodes seat layouts or deal timing - tables define
//! them. All configs follow the builder pattern and are plain serializable
//! data, loaded once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::anim::{Easing, DEAL_INTERVAL, MOVE_DURATION};
use crate::layout::{Position, Vec2};

/// Which edge of the table a seat occupies.
///
/// The orientation fixes the hand's fan axis and the direction a selected
/// card is lifted: top/bottom seats fan horizontally and lift vertically,
/// left/right seats fan vertically and lift horizontally, always away from
/// the table edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Bottom edge: horizontal fan, selection lifts upward (-y).
    #[default]
    Bottom,
    /// Top edge: horizontal fan, selection lifts downward (+y).
    Top,
    /// Left edge: vertical fan, selection lifts rightward (+x).
    Left,
    /// Right edge: vertical fan, selection lifts leftward (-x).
    Right,
}

impl Orientation {
    /// Is the hand fanned along the vertical axis?
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }

    /// Displacement applied to a selected card's slot, for a lift of
    /// `amount` display units toward the table center.
    #[must_use]
    pub const fn lift(self, amount: f32) -> Vec2 {
        match self {
            Orientation::Bottom => Vec2 { x: 0.0, y: -amount },
            Orientation::Top => Vec2 { x: 0.0, y: amount },
            Orientation::Left => Vec2 { x: amount, y: 0.0 },
            Orientation::Right => Vec2 { x: -amount, y: 0.0 },
        }
    }

    /// Resting rotation (degrees) for cards held at this edge.
    #[must_use]
    pub const fn card_rotation(self) -> f32 {
        match self {
            Orientation::Bottom | Orientation::Top => 0.0,
            Orientation::Left => 90.0,
            Orientation::Right => -90.0,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::Bottom => "bottom",
            Orientation::Top => "top",
            Orientation::Left => "left",
            Orientation::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// Deck composition and initial stack layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Include the two jokers in addition to the 52 suited cards.
    pub include_jokers: bool,

    /// Are undealt cards built face-up? Almost always false.
    pub face_up: bool,

    /// Per-index offset of the undealt stack fan (cosmetic only).
    pub spacing: Vec2,

    /// Per-index rotation (degrees) of the undealt stack fan.
    pub rotation_step: f32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            include_jokers: false,
            face_up: false,
            spacing: Vec2::ZERO,
            rotation_step: 0.0,
        }
    }
}

impl DeckConfig {
    /// Create a default configuration: 52 cards, face-down, flat stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the two jokers (54-card composition).
    #[must_use]
    pub fn with_jokers(mut self) -> Self {
        self.include_jokers = true;
        self
    }

    /// Build cards face-up.
    #[must_use]
    pub fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Set the per-index stack fan offset.
    #[must_use]
    pub fn with_spacing(mut self, x: f32, y: f32) -> Self {
        self.spacing = Vec2 { x, y };
        self
    }

    /// Set the per-index stack fan rotation (degrees).
    #[must_use]
    pub fn with_rotation_step(mut self, degrees: f32) -> Self {
        self.rotation_step = degrees;
        self
    }

    /// Total number of cards this composition produces.
    #[must_use]
    pub const fn composition_size(&self) -> usize {
        if self.include_jokers {
            54
        } else {
            52
        }
    }
}

/// Per-seat hand layout parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandConfig {
    /// Distance between adjacent card slots along the fan axis.
    pub spacing: f32,

    /// Display scale of cards held in this hand.
    pub scale: f32,

    /// Are cards in this hand held face-up? Arriving cards that differ
    /// are flipped on arrival.
    pub face_up: bool,

    /// Which table edge the seat occupies.
    pub orientation: Orientation,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            scale: 1.0,
            face_up: false,
            orientation: Orientation::Bottom,
        }
    }
}

impl HandConfig {
    /// Create a default configuration: spacing 40, scale 1, face-down,
    /// bottom edge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slot spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the card display scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Hold cards face-up (the local player's own hand, typically).
    #[must_use]
    pub fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Set the seat's table edge.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

/// What a deal sequence does when the deck empties before the scheduled
/// transfer count is reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustPolicy {
    /// Keep ticking; empty draws are no-ops and the sequence completes on
    /// schedule.
    #[default]
    FinishSchedule,
    /// Cancel the sequence and signal completion as soon as a draw comes
    /// up empty.
    EndEarly,
}

/// Timing and policy of a deal sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DealConfig {
    /// Cards dealt to each seat over the whole sequence.
    pub cards_per_seat: usize,

    /// Time-units between single-card transfers.
    pub interval: f32,

    /// Duration of each card's flight to its seat anchor.
    pub move_duration: f32,

    /// Easing applied to each card's flight.
    pub easing: Easing,

    /// Behavior when the deck runs out mid-sequence.
    pub exhaust_policy: ExhaustPolicy,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            cards_per_seat: 5,
            interval: DEAL_INTERVAL,
            move_duration: MOVE_DURATION,
            easing: Easing::Linear,
            exhaust_policy: ExhaustPolicy::default(),
        }
    }
}

impl DealConfig {
    /// Create a deal of `cards_per_seat` cards per seat with default
    /// timing.
    #[must_use]
    pub fn new(cards_per_seat: usize) -> Self {
        Self {
            cards_per_seat,
            ..Self::default()
        }
    }

    /// Set the inter-card interval (time-units).
    #[must_use]
    pub fn with_interval(mut self, interval: f32) -> Self {
        self.interval = interval;
        self
    }

    /// Set the per-card flight duration (time-units).
    #[must_use]
    pub fn with_move_duration(mut self, duration: f32) -> Self {
        self.move_duration = duration;
        self
    }

    /// Set the per-card flight easing.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the empty-deck behavior.
    #[must_use]
    pub fn with_exhaust_policy(mut self, policy: ExhaustPolicy) -> Self {
        self.exhaust_policy = policy;
        self
    }
}

/// Where removed cards animate to, and how.
///
/// Must be set on a seat before any card removal; removing without one is
/// a programmer error (`TableError::DiscardNotConfigured`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiscardConfig {
    /// Target position, rotation, and scale of a thrown card.
    pub target: Position,

    /// Should thrown cards land face-up?
    pub face_up: bool,

    /// Per-selection-index offset along x, so multiple thrown cards
    /// don't land on exactly the same spot.
    pub spacing: f32,

    /// Flight duration (time-units).
    pub duration: f32,

    /// Flight easing.
    pub easing: Easing,
}

impl DiscardConfig {
    /// Create a discard target at the given point, face-up, with default
    /// timing.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            target: Position::at(x, y),
            face_up: true,
            spacing: 0.0,
            duration: MOVE_DURATION,
            easing: Easing::Linear,
        }
    }

    /// Land thrown cards face-down instead.
    #[must_use]
    pub fn face_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    /// Set the per-index landing offset.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the flight duration (time-units).
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the flight easing.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
