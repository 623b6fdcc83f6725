//! Deck composition, shuffle, and draw.
//!
//! The deck owns only the *order* of undealt cards, as an `im::Vector`
//! of ids drawn from the end; the card structs themselves live in the
//! table's card storage. This split keeps ownership single-homed: an id
//! present in the deck's sequence is, by construction, absent from every
//! hand.
//!
//! Composition is built exactly once per table: 13 ranks for each of the
//! four suits, plus two jokers when configured.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::config::DeckConfig;
use crate::core::entity::CardId;
use crate::core::rng::TableRng;
use crate::layout::{stack_slot, Position, Vec2};

/// The ordered undealt sequence. The end of the sequence is the top:
/// dealing and drawing consume from there.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<CardId>,
    config: DeckConfig,
}

impl Deck {
    /// Build the full composition.
    ///
    /// Returns the deck (holding ids in build order) plus the card
    /// structs for the table to own. Deterministic: the same config
    /// always yields the same sequence, aside from the subsequent
    /// shuffle. Cards are face-down unless the config says otherwise.
    #[must_use]
    pub fn build(config: DeckConfig) -> (Self, Vec<Card>) {
        let mut cards = Vec::with_capacity(config.composition_size());
        let mut next_id = 0u32;

        for suit in Suit::STANDARD {
            for rank in 1..=13u8 {
                cards.push(Card::new(
                    CardId::new(next_id),
                    suit,
                    Rank::new(rank),
                    config.face_up,
                ));
                next_id += 1;
            }
        }

        if config.include_jokers {
            for _ in 0..2 {
                cards.push(Card::new(
                    CardId::new(next_id),
                    Suit::Joker,
                    Rank::JOKER,
                    config.face_up,
                ));
                next_id += 1;
            }
        }

        let order: Vector<CardId> = cards.iter().map(|c| c.id).collect();
        log::debug!("built deck of {} cards", order.len());

        (
            Self {
                cards: order,
                config,
            },
            cards,
        )
    }

    /// Randomize the order (uniform permutation). Called once after
    /// build, before any dealing.
    pub fn shuffle(&mut self, rng: &mut TableRng) {
        let mut order: Vec<CardId> = self.cards.iter().copied().collect();
        rng.shuffle(&mut order);
        self.cards = order.into_iter().collect();
    }

    /// Remove and return the top card. `None` on an empty deck - a
    /// normal boundary condition, not a fault.
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop_back()
    }

    /// The current top card without removing it.
    #[must_use]
    pub fn top_card(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Is `card` the current top of the sequence? Used to gate "draw
    /// exactly the top card" interactions. False on an empty deck.
    #[must_use]
    pub fn is_top_card(&self, card: CardId) -> bool {
        self.top_card() == Some(card)
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck out of cards?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Does the undealt sequence contain this card?
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Iterate the undealt sequence, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// Initial on-screen stack positions for every undealt card.
    ///
    /// Cosmetic only: a small per-index offset and rotation from the
    /// config, centered on `anchor`. Does not affect dealing order.
    #[must_use]
    pub fn fan_positions(&self, anchor: Vec2) -> Vec<(CardId, Position)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                (
                    id,
                    stack_slot(
                        anchor,
                        index,
                        self.config.spacing,
                        self.config.rotation_step,
                        1.0,
                    ),
                )
            })
            .collect()
    }

    /// The composition config this deck was built from.
    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }
}
