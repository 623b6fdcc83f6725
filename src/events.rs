//! Presentation events.
//!
//! The core never touches a renderer. Instead, every state change that a
//! screen must reflect is queued as a `TableEvent`; a presentation
//! adapter drains the queue each frame and translates events into its
//! renderer's own directives (set texture, set hit-region, reorder
//! sprites). The adapter feeds input back through `Table::pointer_down`.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::core::seat::SeatId;

/// A directive or notification for the presentation adapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    /// Show this texture for the card (front face name or the shared
    /// back). Fired on setup, at flip midpoints, and on immediate face
    /// corrections.
    FaceShown { card: CardId, texture: String },

    /// The card's stacking order changed.
    DepthChanged { card: CardId, depth: u32 },

    /// Pointer input for this card was bound or unbound.
    InteractiveChanged { card: CardId, enabled: bool },

    /// A flip transition ran to completion; the card's semantic face has
    /// toggled.
    FlipFinished { card: CardId },

    /// A card finished its flight out of a hand and left play.
    CardDiscarded { seat: SeatId, card: CardId },

    /// The deal sequence has been cancelled after its final transfer (or
    /// cut short by deck exhaustion under the end-early policy).
    DealComplete,
}
