//! Per-seat hand membership and selection.
//!
//! A `Hand` tracks which cards a seat holds (ordered - index determines
//! the layout slot) and which of those are currently selected. The
//! invariants here are load-bearing for the whole table:
//!
//! - `selected` is always a subset of the hand
//! - a card appears at most once in the hand
//! - removal of an absent card is an idempotent no-op
//!
//! Animation and arrival/departure sequencing live in the table; this
//! module only mutates membership and computes slots.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{DiscardConfig, HandConfig};
use crate::core::entity::CardId;
use crate::core::seat::SeatId;
use crate::layout::{hand_slot, raised_slot, Position, Vec2};

/// One seat's hand: ordered membership, selection subset, and layout
/// parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hand {
    /// The seat this hand belongs to.
    pub seat: SeatId,

    /// Display name of the seated player.
    pub name: String,

    /// Anchor point the fan is centered on.
    pub anchor: Vec2,

    /// Layout parameters.
    pub config: HandConfig,

    /// Does this seat accept selection input (the local player)?
    pub interactive: bool,

    /// Ordered membership; index = layout slot.
    cards: Vector<CardId>,

    /// Cards currently lifted for selection. Always a subset of `cards`.
    selected: SmallVec<[CardId; 8]>,

    /// Discard animation target. Must be set before any removal.
    pub discard: Option<DiscardConfig>,
}

impl Hand {
    /// Create an empty hand for a seat.
    #[must_use]
    pub fn new(
        seat: SeatId,
        name: impl Into<String>,
        anchor: Vec2,
        config: HandConfig,
        interactive: bool,
    ) -> Self {
        Self {
            seat,
            name: name.into(),
            anchor,
            config,
            interactive,
            cards: Vector::new(),
            selected: SmallVec::new(),
            discard: None,
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the hand empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is this card in the hand?
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// The card's slot index, if held.
    #[must_use]
    pub fn index_of(&self, card: CardId) -> Option<usize> {
        self.cards.index_of(&card)
    }

    /// Iterate held cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// The selected subset, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[CardId] {
        &self.selected
    }

    /// Is this card selected?
    #[must_use]
    pub fn is_selected(&self, card: CardId) -> bool {
        self.selected.contains(&card)
    }

    /// Append a card to the end of the hand.
    ///
    /// A card already present keeps its slot (no duplicates).
    pub fn insert(&mut self, card: CardId) {
        if !self.contains(card) {
            self.cards.push_back(card);
        }
    }

    /// Remove a card from the hand and the selection.
    ///
    /// Removing an absent card is a no-op; returns whether the hand
    /// changed.
    pub fn remove(&mut self, card: CardId) -> bool {
        self.selected.retain(|&mut c| c != card);
        if let Some(index) = self.cards.index_of(&card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Toggle a card's membership in the selection.
    ///
    /// Returns `Some(true)` if the card is now selected, `Some(false)`
    /// if it was deselected, `None` if the card isn't in the hand.
    pub fn toggle_selected(&mut self, card: CardId) -> Option<bool> {
        if !self.contains(card) {
            return None;
        }
        if let Some(pos) = self.selected.iter().position(|&c| c == card) {
            self.selected.remove(pos);
            Some(false)
        } else {
            self.selected.push(card);
            Some(true)
        }
    }

    /// Drop the whole selection (membership only; callers animate).
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// The resting slot for the card at `index`, per the fan rule.
    #[must_use]
    pub fn slot(&self, index: usize) -> Position {
        hand_slot(
            self.anchor,
            self.config.orientation,
            self.cards.len(),
            index,
            self.config.spacing,
            self.config.scale,
        )
    }

    /// The slot for the card arriving next (as if the hand were one
    /// card larger).
    #[must_use]
    pub fn arrival_slot(&self) -> Position {
        hand_slot(
            self.anchor,
            self.config.orientation,
            self.cards.len() + 1,
            self.cards.len(),
            self.config.spacing,
            self.config.scale,
        )
    }

    /// A slot displaced by the selection lift.
    #[must_use]
    pub fn raised(&self, slot: Position, lift: f32) -> Position {
        raised_slot(slot, self.config.orientation, lift)
    }

    /// Every held card with its resting slot, selected cards raised by
    /// `lift`.
    #[must_use]
    pub fn arrangement(&self, lift: f32) -> Vec<(CardId, Position)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, &card)| {
                let mut slot = self.slot(index);
                if self.is_selected(card) {
                    slot = self.raised(slot, lift);
                }
                (card, slot)
            })
            .collect()
    }
}
