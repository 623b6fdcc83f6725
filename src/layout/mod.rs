//! Hand and stack geometry.
//!
//! Pure functions computing per-card target positions. No state lives
//! here: callers pass the hand size, slot index, spacing, and seat
//! orientation, and get back a `Position` for the animation pipeline.
//!
//! ## Fan rule
//!
//! A hand of `n` cards with spacing `s` is centered on the seat anchor:
//! the card at index `i` sits at `anchor - (n*s)/2 + s/2 + i*s` along the
//! fan axis and exactly on the anchor along the perpendicular axis.
//! Top/bottom seats fan along x, left/right seats along y.

use serde::{Deserialize, Serialize};

use crate::core::config::Orientation;

/// A 2D point or displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// A card's full spatial state: position, rotation (degrees), and scale.
///
/// This is semantic data, not render state. A presentation adapter maps
/// it onto whatever sprite transform its renderer uses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    pub scale: f32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Position {
    /// Create a position at a point, unrotated, at scale 1.
    #[must_use]
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Set the rotation (degrees).
    #[must_use]
    pub const fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set the scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// The (x, y) point.
    #[must_use]
    pub const fn point(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Linear interpolation between two positions, `t` in [0, 1].
    #[must_use]
    pub fn lerp(from: &Position, to: &Position, t: f32) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
            rotation: from.rotation + (to.rotation - from.rotation) * t,
            scale: from.scale + (to.scale - from.scale) * t,
        }
    }

    /// Translate by a displacement.
    #[must_use]
    pub fn offset(mut self, by: Vec2) -> Position {
        self.x += by.x;
        self.y += by.y;
        self
    }
}

/// Target position for the card at `index` in a hand of `hand_len` cards.
///
/// See the module docs for the fan rule. The resting rotation and scale
/// come from the seat orientation and the hand's configured scale.
#[must_use]
pub fn hand_slot(
    anchor: Vec2,
    orientation: Orientation,
    hand_len: usize,
    index: usize,
    spacing: f32,
    scale: f32,
) -> Position {
    debug_assert!(index < hand_len, "slot index out of range");

    let fan_extent = hand_len as f32 * spacing;
    let offset = -fan_extent / 2.0 + spacing / 2.0 + index as f32 * spacing;

    let (x, y) = if orientation.is_vertical() {
        (anchor.x, anchor.y + offset)
    } else {
        (anchor.x + offset, anchor.y)
    };

    Position {
        x,
        y,
        rotation: orientation.card_rotation(),
        scale,
    }
}

/// A hand slot displaced perpendicular to the fan axis for selection.
///
/// `lift` is the displacement magnitude, conventionally half the card's
/// display height. The direction always points toward the table center.
#[must_use]
pub fn raised_slot(slot: Position, orientation: Orientation, lift: f32) -> Position {
    slot.offset(orientation.lift(lift))
}

/// Position for the card at `index` of the undealt stack fan.
///
/// Cosmetic only: the per-index offset and rotation make the stack read
/// as a pile without affecting dealing order.
#[must_use]
pub fn stack_slot(
    anchor: Vec2,
    index: usize,
    spacing: Vec2,
    rotation_step: f32,
    scale: f32,
) -> Position {
    Position {
        x: anchor.x + spacing.x * index as f32,
        y: anchor.y + spacing.y * index as f32,
        rotation: rotation_step * index as f32,
        scale,
    }
}
