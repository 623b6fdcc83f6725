//! The frame-driven animation executor.
//!
//! `Timeline<C>` holds every in-flight animation script and advances them
//! all on `tick(dt)`. Instead of nested completion callbacks, each script
//! carries a completion payload `C` that `tick` hands back - exactly once -
//! when the script's final step lands. Dependent steps ("move, then flip,
//! then re-arrange") are sequenced by the owner reacting to completions,
//! never by closures captured inside the executor.
//!
//! Scripts are lists of steps. A step may carry a `StepMarker` fired when
//! that step finishes, which is how the flip transition swaps the face
//! texture at its midpoint without completing the whole flip.
//!
//! Started animations run to completion; there is no external
//! cancellation of an individual script.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::entity::CardId;
use crate::layout::Position;

use super::easing::Easing;
use super::tween::Tween;
use super::{FLIP_SPEED, FLIP_ZOOM};

/// Handle for a scheduled animation script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimId(pub u64);

/// Mid-script signal fired when the carrying step finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepMarker {
    /// The flip transition's midpoint: the displayed face texture swaps
    /// now, though the card's semantic face toggles only on completion.
    SwapFace,
}

/// One step of an animation script.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Step {
    /// Target position at the end of this step.
    pub to: Position,
    /// Step duration in time-units.
    pub duration: f32,
    pub easing: Easing,
    /// Fired when this step finishes.
    pub marker: Option<StepMarker>,
}

impl Step {
    /// Create an unmarked step.
    #[must_use]
    pub fn new(to: Position, duration: f32, easing: Easing) -> Self {
        Self {
            to,
            duration,
            easing,
            marker: None,
        }
    }

    /// Attach a marker fired when this step finishes.
    #[must_use]
    pub fn with_marker(mut self, marker: StepMarker) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// An in-flight script: the current tween plus the remaining steps.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct Active<C> {
    id: AnimId,
    card: CardId,
    tween: Tween,
    marker: Option<StepMarker>,
    rest: Vec<Step>,
    next_step: usize,
    payload: Option<C>,
}

/// Everything that happened during one `tick`.
#[derive(Debug)]
pub struct TickOutput<C> {
    /// Sampled position per animating card, to be applied to state.
    pub updates: Vec<(CardId, Position)>,
    /// Markers fired by steps that finished this tick.
    pub markers: SmallVec<[(CardId, StepMarker); 4]>,
    /// Payloads of scripts that fully completed this tick, in scheduling
    /// order. Each payload is delivered exactly once.
    pub completed: SmallVec<[(CardId, C); 4]>,
}

impl<C> Default for TickOutput<C> {
    fn default() -> Self {
        Self {
            updates: Vec::new(),
            markers: SmallVec::new(),
            completed: SmallVec::new(),
        }
    }
}

/// Single-threaded frame-driven animation executor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Timeline<C> {
    next_id: u64,
    active: Vec<Active<C>>,
}

impl<C> Default for Timeline<C> {
    fn default() -> Self {
        Self {
            next_id: 0,
            active: Vec::new(),
        }
    }
}

impl<C> Timeline<C> {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scripts currently in flight.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Is nothing animating?
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Is the given card animated by any in-flight script?
    #[must_use]
    pub fn is_animating(&self, card: CardId) -> bool {
        self.active.iter().any(|a| a.card == card)
    }

    /// Schedule a multi-step script starting from `from`.
    ///
    /// `steps` must be non-empty. The payload is returned from `tick`
    /// when the final step lands.
    pub fn schedule(
        &mut self,
        card: CardId,
        from: Position,
        steps: Vec<Step>,
        payload: C,
    ) -> AnimId {
        debug_assert!(!steps.is_empty(), "empty animation script");

        let id = AnimId(self.next_id);
        self.next_id += 1;

        let first = &steps[0];
        let tween = Tween::new(from, first.to, first.duration, first.easing);
        let marker = first.marker;

        log::trace!("schedule {:?} for {} ({} steps)", id, card, steps.len());

        self.active.push(Active {
            id,
            card,
            tween,
            marker,
            rest: steps,
            next_step: 1,
            payload: Some(payload),
        });

        id
    }

    /// Drop scripts for `card` whose payload matches the predicate,
    /// without delivering their completions.
    ///
    /// This is how a newer cosmetic move supersedes an older one for the
    /// same card (last scheduled wins); semantic flights are never
    /// superseded.
    pub fn supersede(&mut self, card: CardId, mut predicate: impl FnMut(&C) -> bool) {
        self.active.retain(|a| {
            let matches = a.card == card && a.payload.as_ref().map_or(false, &mut predicate);
            !matches
        });
    }

    /// Schedule a single-step move.
    pub fn schedule_move(
        &mut self,
        card: CardId,
        from: Position,
        to: Position,
        duration: f32,
        easing: Easing,
        payload: C,
    ) -> AnimId {
        self.schedule(card, from, vec![Step::new(to, duration, easing)], payload)
    }

    /// Advance every in-flight script by `dt` time-units.
    ///
    /// Steps that finish mid-tick cascade into their successors within
    /// the same call, consuming only the leftover time.
    pub fn tick(&mut self, dt: f32) -> TickOutput<C> {
        let mut out = TickOutput::default();

        for anim in &mut self.active {
            let mut budget = dt;

            loop {
                budget = anim.tween.advance(budget);
                if !anim.tween.is_done() {
                    break;
                }

                if let Some(marker) = anim.marker.take() {
                    out.markers.push((anim.card, marker));
                }

                if anim.next_step < anim.rest.len() {
                    let step = &anim.rest[anim.next_step];
                    let from = anim.tween.to;
                    anim.tween = Tween::new(from, step.to, step.duration, step.easing);
                    anim.marker = step.marker;
                    anim.next_step += 1;
                    // Zero leftover still enters the new step so the next
                    // tick resumes from its start.
                    if budget <= 0.0 && anim.tween.duration > 0.0 {
                        break;
                    }
                } else {
                    break;
                }
            }

            out.updates.push((anim.card, anim.tween.sample()));
        }

        // Collect completions in scheduling order.
        let mut i = 0;
        while i < self.active.len() {
            let done =
                self.active[i].tween.is_done() && self.active[i].next_step >= self.active[i].rest.len();
            if done {
                let mut anim = self.active.remove(i);
                if let Some(payload) = anim.payload.take() {
                    log::trace!("complete {:?} for {}", anim.id, anim.card);
                    out.completed.push((anim.card, payload));
                }
            } else {
                i += 1;
            }
        }

        out
    }
}

/// Build the 4-phase flip script for a card resting at `at`.
///
/// Symmetric around the midpoint: grow by `zoom`, collapse to nothing
/// (face swap fires here), grow back, settle to the original scale. Each
/// phase lasts `speed / 4`. Pass [`FLIP_SPEED`] and [`FLIP_ZOOM`] for the
/// defaults.
#[must_use]
pub fn flip_script(at: Position, zoom: f32, speed: f32) -> Vec<Step> {
    let phase = speed / 4.0;
    let grown = at.with_scale(at.scale + zoom);
    let collapsed = at.with_scale(0.0);

    vec![
        Step::new(grown, phase, Easing::Linear),
        Step::new(collapsed, phase, Easing::Linear).with_marker(StepMarker::SwapFace),
        Step::new(grown, phase, Easing::Linear),
        Step::new(at, phase, Easing::Linear),
    ]
}

/// The flip script with default zoom and speed.
#[must_use]
pub fn default_flip_script(at: Position) -> Vec<Step> {
    flip_script(at, FLIP_ZOOM, FLIP_SPEED)
}
