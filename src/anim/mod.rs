//! Frame-driven animation: easing curves, tweens, the timeline executor,
//! and the timed deal sequencer.
//!
//! All timing is in abstract time-units advanced by `tick(dt)`; nothing
//! here owns a clock or a thread. Completions are returned as data, each
//! delivered exactly once.

pub mod deal;
pub mod easing;
pub mod timeline;
pub mod tween;

pub use deal::{DealSequence, DealTick};
pub use easing::Easing;
pub use timeline::{flip_script, AnimId, Step, StepMarker, TickOutput, Timeline};
pub use tween::Tween;

/// Default duration of a card move (time-units).
pub const MOVE_DURATION: f32 = 500.0;

/// Default duration of a hand re-arrangement or selection lift.
pub const ARRANGE_DURATION: f32 = 200.0;

/// Default total duration of a flip transition (all four phases).
pub const FLIP_SPEED: f32 = 500.0;

/// Default extra scale added during a flip's grow phases.
pub const FLIP_ZOOM: f32 = 0.1;

/// Default interval between single-card deal transfers.
pub const DEAL_INTERVAL: f32 = 200.0;
