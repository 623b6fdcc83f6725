//! The table: every card, the deck, all hands, and the transition
//! pipeline, advanced by a single cooperative clock.
//!
//! ## Concurrency model
//!
//! Everything runs on one control thread. "Concurrency" is multiple
//! independently-progressing animations inside the timeline; their
//! completions are processed, in order, inside `tick`. Hand and deck
//! membership mutate *only* in completion processing, so a card is never
//! observably in two places: until its arrival animation lands it still
//! belongs to nothing but the flight, and the moment it lands it belongs
//! to exactly one hand.
//!
//! ## Ownership invariant
//!
//! Each card id lives in exactly one of: the deck's undealt sequence,
//! one hand, the discarded list, or an in-flight transfer. The table is
//! the only mutator of all of them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::anim::{
    flip_script, DealSequence, DealTick, Easing, Timeline, ARRANGE_DURATION, FLIP_SPEED,
    FLIP_ZOOM, MOVE_DURATION,
};
use crate::cards::Card;
use crate::core::config::{DealConfig, DeckConfig, DiscardConfig, ExhaustPolicy, HandConfig};
use crate::core::entity::CardId;
use crate::core::error::TableError;
use crate::core::rng::TableRng;
use crate::core::seat::{SeatId, SeatMap};
use crate::deck::Deck;
use crate::events::TableEvent;
use crate::hand::Hand;
use crate::layout::{Position, Vec2};

/// What happens when an animation script lands. The timeline hands these
/// back from `tick`; the table applies the state transition they name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Completion {
    /// A dealt or added card reached its hand slot: mutate membership.
    ArriveInHand(SeatId),
    /// A flip's final phase settled: toggle the face.
    FinishFlip,
    /// A removed card reached the discard target: leave play.
    LeaveToDiscard(SeatId),
    /// A cosmetic move (arrangement, selection lift) finished.
    Settle,
}

/// Routing result of a pointer-down notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerResponse {
    /// The card is the current top of the deck.
    DeckTop,
    /// The card's selection was toggled in an interactive hand.
    Selection { seat: SeatId, selected: bool },
    /// Nothing to do for this card.
    Ignored,
}

/// Builder for a `Table`: composition, seats, and animation settings.
///
/// ```
/// use card_table::core::{DeckConfig, HandConfig, Orientation};
/// use card_table::table::TableBuilder;
///
/// let table = TableBuilder::new()
///     .deck(DeckConfig::new())
///     .deck_anchor(400.0, 300.0)
///     .local_seat("south", 400.0, 560.0, HandConfig::new().face_up())
///     .seat("north", 400.0, 40.0, HandConfig::new().with_orientation(Orientation::Top))
///     .build(42);
///
/// assert_eq!(table.deck().len(), 52);
/// ```
pub struct TableBuilder {
    deck: DeckConfig,
    deck_anchor: Vec2,
    seats: Vec<(String, Vec2, HandConfig, bool)>,
    flip_speed: f32,
    flip_zoom: f32,
    card_height: f32,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            deck: DeckConfig::default(),
            deck_anchor: Vec2::ZERO,
            seats: Vec::new(),
            flip_speed: FLIP_SPEED,
            flip_zoom: FLIP_ZOOM,
            card_height: 96.0,
        }
    }
}

impl TableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck composition.
    #[must_use]
    pub fn deck(mut self, config: DeckConfig) -> Self {
        self.deck = config;
        self
    }

    /// Set where the undealt stack sits.
    #[must_use]
    pub fn deck_anchor(mut self, x: f32, y: f32) -> Self {
        self.deck_anchor = Vec2::new(x, y);
        self
    }

    /// Add a non-interactive seat.
    #[must_use]
    pub fn seat(mut self, name: impl Into<String>, x: f32, y: f32, config: HandConfig) -> Self {
        self.seats.push((name.into(), Vec2::new(x, y), config, false));
        self
    }

    /// Add the locally-interactive seat (selection input enabled).
    #[must_use]
    pub fn local_seat(
        mut self,
        name: impl Into<String>,
        x: f32,
        y: f32,
        config: HandConfig,
    ) -> Self {
        self.seats.push((name.into(), Vec2::new(x, y), config, true));
        self
    }

    /// Override the flip transition's total duration.
    #[must_use]
    pub fn flip_speed(mut self, speed: f32) -> Self {
        self.flip_speed = speed;
        self
    }

    /// Override the flip transition's grow amount.
    #[must_use]
    pub fn flip_zoom(mut self, zoom: f32) -> Self {
        self.flip_zoom = zoom;
        self
    }

    /// Set the card display height (drives the selection lift distance).
    #[must_use]
    pub fn card_height(mut self, height: f32) -> Self {
        self.card_height = height;
        self
    }

    /// Build the table: compose the deck exactly once, shuffle with the
    /// seed, and lay the stack out at its anchor.
    #[must_use]
    pub fn build(self, seed: u64) -> Table {
        assert!(!self.seats.is_empty(), "Table requires at least 1 seat");

        let (mut deck, built) = Deck::build(self.deck);
        let mut rng = TableRng::new(seed);
        deck.shuffle(&mut rng);

        let mut cards: FxHashMap<CardId, Card> = FxHashMap::default();
        for card in built {
            cards.insert(card.id, card);
        }

        let hands = SeatMap::new(self.seats.len(), |seat| {
            let (name, anchor, config, interactive) = self.seats[seat.index()].clone();
            Hand::new(seat, name, anchor, config, interactive)
        });

        let mut table = Table {
            cards,
            deck,
            hands,
            timeline: Timeline::new(),
            deal: None,
            discarded: Vec::new(),
            events: Vec::new(),
            flip_speed: self.flip_speed,
            flip_zoom: self.flip_zoom,
            card_height: self.card_height,
        };

        // Place the stack and announce initial textures.
        for (id, position) in table.deck.fan_positions(self.deck_anchor) {
            if let Some(card) = table.cards.get_mut(&id) {
                card.position = position;
                table.events.push(TableEvent::FaceShown {
                    card: id,
                    texture: card.visible_texture(),
                });
            }
        }

        table
    }
}

/// The complete table state and transition pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    cards: FxHashMap<CardId, Card>,
    deck: Deck,
    hands: SeatMap<Hand>,
    timeline: Timeline<Completion>,
    deal: Option<(DealSequence, DealConfig)>,
    /// Cards that have left play. Never returned to the deck.
    discarded: Vec<CardId>,
    events: Vec<TableEvent>,
    flip_speed: f32,
    flip_zoom: f32,
    card_height: f32,
}

impl Table {
    // === Queries ===

    /// Look up a card's state.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// The undealt deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, seat: SeatId) -> &Hand {
        &self.hands[seat]
    }

    /// Number of seats at the table.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.hands.seat_count()
    }

    /// Iterate all seats.
    pub fn seats(&self) -> impl Iterator<Item = SeatId> {
        SeatId::all(self.seat_count())
    }

    /// Cards that have left play, in discard order.
    #[must_use]
    pub fn discarded(&self) -> &[CardId] {
        &self.discarded
    }

    /// Total cards composed at build time.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Is a deal sequence currently running?
    #[must_use]
    pub fn is_dealing(&self) -> bool {
        self.deal.is_some()
    }

    /// Is anything animating?
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.timeline.is_idle() && self.deal.is_none()
    }

    /// Take every queued presentation event.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    // === Card operations ===

    /// Start a flip transition on a card.
    ///
    /// A flip request while one is already in flight is a silent no-op:
    /// at most one flip animation per card. The card's face toggles only
    /// when the transition completes.
    pub fn flip_card(&mut self, id: CardId) {
        let Some(card) = self.cards.get_mut(&id) else {
            return;
        };
        if !card.begin_flip() {
            log::debug!("{id} already flipping, ignoring");
            return;
        }

        let at = card.position;
        let script = flip_script(at, self.flip_zoom, self.flip_speed);
        self.timeline.schedule(id, at, script, Completion::FinishFlip);
    }

    /// Animate a card to a target position.
    ///
    /// Callers serialize moves per card; the table itself never issues
    /// two concurrent moves for the same card.
    pub fn move_card(&mut self, id: CardId, to: Position, duration: f32, easing: Easing) {
        let Some(card) = self.cards.get(&id) else {
            return;
        };
        self.timeline
            .schedule_move(id, card.position, to, duration, easing, Completion::Settle);
    }

    /// Immediate, non-animated face correction.
    pub fn set_face_up(&mut self, id: CardId, face_up: bool) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.set_face_up(face_up);
            self.events.push(TableEvent::FaceShown {
                card: id,
                texture: card.visible_texture(),
            });
        }
    }

    // === Dealing ===

    /// Start the timed deal sequence: one card per interval, strict
    /// round-robin through all seats.
    ///
    /// A deal started while one is already running is refused.
    pub fn deal(&mut self, config: DealConfig) {
        if self.deal.is_some() {
            log::warn!("deal already in progress, ignoring");
            return;
        }

        let seats: Vec<SeatId> = self.seats().collect();
        log::debug!(
            "dealing {} cards to {} seats every {} units",
            config.cards_per_seat,
            seats.len(),
            config.interval
        );
        let sequence = DealSequence::new(seats, config.cards_per_seat, config.interval);
        self.deal = Some((sequence, config));
    }

    /// Add a card to a seat's hand: detach input, fly it to its slot,
    /// and mutate membership on arrival.
    pub fn add_card(&mut self, seat: SeatId, card: CardId) {
        self.add_card_with(seat, card, MOVE_DURATION, Easing::Linear);
    }

    /// Add several cards; each starts its own flight immediately. Any
    /// staggering is the caller's concern.
    pub fn add_cards(&mut self, seat: SeatId, cards: &[CardId]) {
        for &card in cards {
            self.add_card(seat, card);
        }
    }

    /// Draw the top card and fly it to a seat's hand. Returns the drawn
    /// id, or `None` on an empty deck.
    pub fn draw_to_hand(&mut self, seat: SeatId) -> Option<CardId> {
        let id = self.deck.draw()?;
        self.add_card(seat, id);
        Some(id)
    }

    fn add_card_with(&mut self, seat: SeatId, id: CardId, duration: f32, easing: Easing) {
        debug_assert!(
            !self.deck.contains(id),
            "card must be drawn before it is added to a hand"
        );

        let Some(card) = self.cards.get_mut(&id) else {
            return;
        };

        // Detach any previous input binding; the card becomes selectable
        // again only after it lands in an interactive hand.
        if card.interactive {
            card.interactive = false;
            self.events.push(TableEvent::InteractiveChanged {
                card: id,
                enabled: false,
            });
        }

        let hand = &self.hands[seat];
        let mut to = hand.arrival_slot();
        to.scale = hand.config.scale;

        let from = card.position;
        self.timeline
            .schedule_move(id, from, to, duration, easing, Completion::ArriveInHand(seat));
    }

    // === Selection ===

    /// Toggle a card's selection in an interactive hand and animate the
    /// lift (or the return to its slot). Returns the routing result.
    pub fn toggle_selection(&mut self, seat: SeatId, id: CardId) -> PointerResponse {
        if !self.hands[seat].interactive {
            return PointerResponse::Ignored;
        }

        let Some(now_selected) = self.hands[seat].toggle_selected(id) else {
            return PointerResponse::Ignored;
        };

        let hand = &self.hands[seat];
        let index = hand.index_of(id).expect("toggled card is in hand");
        let slot = hand.slot(index);
        let lift = self.card_height * hand.config.scale / 2.0;
        let target = if now_selected {
            hand.raised(slot, lift)
        } else {
            slot
        };

        self.timeline
            .supersede(id, |c| matches!(c, Completion::Settle));
        if let Some(card) = self.cards.get_mut(&id) {
            card.set_selected(now_selected);
            let from = card.position;
            self.timeline.schedule_move(
                id,
                from,
                target,
                ARRANGE_DURATION,
                Easing::Linear,
                Completion::Settle,
            );
        }

        PointerResponse::Selection {
            seat,
            selected: now_selected,
        }
    }

    /// Route a pointer-down notification from the input surface.
    pub fn pointer_down(&mut self, id: CardId) -> PointerResponse {
        if self.deck.is_top_card(id) {
            return PointerResponse::DeckTop;
        }

        let target = self.seats().find(|&seat| {
            self.hands[seat].interactive
                && self.hands[seat].contains(id)
                && self.cards.get(&id).is_some_and(|c| c.interactive)
        });

        match target {
            Some(seat) => self.toggle_selection(seat, id),
            None => PointerResponse::Ignored,
        }
    }

    // === Removal ===

    /// Configure where this seat's removed cards animate to. Required
    /// before any removal.
    pub fn set_discard(&mut self, seat: SeatId, config: DiscardConfig) {
        self.hands[seat].discard = Some(config);
    }

    /// Animate a card out of a hand; on landing it leaves play.
    ///
    /// Removing a card not in the hand is an idempotent no-op. Removing
    /// before `set_discard` is a programmer error and is refused.
    pub fn remove_card(&mut self, seat: SeatId, id: CardId) -> Result<(), TableError> {
        let Some(discard) = self.hands[seat].discard.clone() else {
            return Err(TableError::DiscardNotConfigured(seat));
        };

        if !self.hands[seat].contains(id) {
            return Ok(());
        }

        // Thrown cards spread by their selection index so they don't
        // all land on the same spot.
        let spread_index = self.hands[seat]
            .selected()
            .iter()
            .position(|&c| c == id)
            .unwrap_or(0);

        let Some(card) = self.cards.get_mut(&id) else {
            return Ok(());
        };

        if card.interactive {
            card.interactive = false;
            self.events.push(TableEvent::InteractiveChanged {
                card: id,
                enabled: false,
            });
        }

        let mut to = discard.target;
        to.x += discard.spacing * spread_index as f32;

        let from = card.position;
        self.timeline.schedule_move(
            id,
            from,
            to,
            discard.duration,
            discard.easing,
            Completion::LeaveToDiscard(seat),
        );
        Ok(())
    }

    /// Remove a batch of cards from a seat's hand, in the given order.
    pub fn remove_cards(&mut self, seat: SeatId, cards: &[CardId]) -> Result<(), TableError> {
        for &card in cards {
            self.remove_card(seat, card)?;
        }
        Ok(())
    }

    /// Remove every selected card from a seat's hand.
    pub fn remove_selected(&mut self, seat: SeatId) -> Result<(), TableError> {
        let selected: Vec<CardId> = self.hands[seat].selected().to_vec();
        self.remove_cards(seat, &selected)
    }

    // === Clock ===

    /// Advance the table by `dt` time-units: progress every animation,
    /// apply completions, then run the deal scheduler.
    pub fn tick(&mut self, dt: f32) {
        let output = self.timeline.tick(dt);

        for (id, position) in output.updates {
            if let Some(card) = self.cards.get_mut(&id) {
                card.position = position;
            }
        }

        // Flip midpoints: the displayed texture swaps to the incoming
        // face while the semantic face stays put until completion.
        for (id, _marker) in output.markers {
            if let Some(card) = self.cards.get(&id) {
                self.events.push(TableEvent::FaceShown {
                    card: id,
                    texture: card.flip_target_texture(),
                });
            }
        }

        for (id, completion) in output.completed {
            match completion {
                Completion::ArriveInHand(seat) => self.finish_arrival(seat, id),
                Completion::FinishFlip => self.finish_flip(id),
                Completion::LeaveToDiscard(seat) => self.finish_discard(seat, id),
                Completion::Settle => {}
            }
        }

        self.tick_deal(dt);
    }

    /// Tick repeatedly until nothing is animating and no deal is
    /// running. Bounded; intended for drivers and tests that don't need
    /// frame-accurate stepping.
    pub fn run_until_idle(&mut self, dt: f32) {
        assert!(dt > 0.0, "run_until_idle requires a positive step");
        let mut guard = 0u32;
        while !self.is_idle() {
            self.tick(dt);
            guard += 1;
            assert!(guard < 1_000_000, "table failed to settle");
        }
    }

    fn tick_deal(&mut self, dt: f32) {
        let Some((mut sequence, config)) = self.deal.take() else {
            return;
        };

        for event in sequence.tick(dt) {
            match event {
                DealTick::Transfer(seat) => match self.deck.draw() {
                    Some(card) => {
                        self.add_card_with(seat, card, config.move_duration, config.easing);
                    }
                    None => match config.exhaust_policy {
                        ExhaustPolicy::FinishSchedule => {
                            log::debug!("deck empty, skipping transfer to {seat}");
                        }
                        ExhaustPolicy::EndEarly => {
                            // A large dt can queue several empty draws;
                            // signal completion for the first only.
                            if !sequence.is_cancelled() {
                                log::debug!("deck empty, ending deal early");
                                sequence.cancel();
                                self.events.push(TableEvent::DealComplete);
                            }
                        }
                    },
                },
                DealTick::Complete => {
                    self.events.push(TableEvent::DealComplete);
                }
            }
        }

        if !sequence.is_cancelled() {
            self.deal = Some((sequence, config));
        }
    }

    // === Completion transitions ===

    fn finish_arrival(&mut self, seat: SeatId, id: CardId) {
        self.hands[seat].insert(id);

        let depth = self.hands[seat].len() as u32;
        let face_up = self.hands[seat].config.face_up;
        let interactive = self.hands[seat].interactive;

        if let Some(card) = self.cards.get_mut(&id) {
            card.depth = depth;
            self.events.push(TableEvent::DepthChanged { card: id, depth });

            if interactive {
                card.interactive = true;
                self.events.push(TableEvent::InteractiveChanged {
                    card: id,
                    enabled: true,
                });
            }

            if face_up != card.is_face_up() {
                self.flip_card(id);
            }
        }

        // Arrival resets any pending selection.
        let stale: Vec<CardId> = self.hands[seat].selected().to_vec();
        for card in stale {
            if let Some(card) = self.cards.get_mut(&card) {
                card.set_selected(false);
            }
        }
        self.hands[seat].clear_selection();

        self.arrange_hand(seat);
    }

    fn finish_flip(&mut self, id: CardId) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.finish_flip();
            self.events.push(TableEvent::FlipFinished { card: id });
        }

        // The hand may have changed shape while this card was pinned by
        // its flip; settle it into the current arrangement.
        let owner = self
            .hands
            .iter()
            .find_map(|(seat, hand)| hand.contains(id).then_some(seat));
        if let Some(seat) = owner {
            self.arrange_hand(seat);
        }
    }

    fn finish_discard(&mut self, seat: SeatId, id: CardId) {
        let face_up = self.hands[seat]
            .discard
            .as_ref()
            .map_or(true, |d| d.face_up);

        // A second removal of the same card may have landed first; only
        // the flight that actually removes it records the discard.
        if !self.hands[seat].remove(id) {
            return;
        }
        self.discarded.push(id);

        // An arrangement triggered earlier in this same completion batch
        // may have scheduled a settle back toward the hand; drop it.
        self.timeline
            .supersede(id, |c| matches!(c, Completion::Settle));

        if let Some(card) = self.cards.get_mut(&id) {
            card.set_selected(false);
            if card.is_face_up() != face_up && !card.is_flipping() {
                self.flip_card(id);
            }
        }

        self.events.push(TableEvent::CardDiscarded { seat, card: id });
        self.arrange_hand(seat);
    }

    /// Recompute every held card's slot and animate the whole hand there
    /// concurrently. Selected cards keep their raised offset. Invoked
    /// after every membership change.
    pub fn arrange_hand(&mut self, seat: SeatId) {
        let lift = self.card_height * self.hands[seat].config.scale / 2.0;
        let arrangement = self.hands[seat].arrangement(lift);

        for (id, slot) in arrangement {
            // A newer settle supersedes an older one; semantic flights
            // (arrivals, flips, discards) are left alone and trigger
            // their own arrangement when they land.
            self.timeline
                .supersede(id, |c| matches!(c, Completion::Settle));
            if self.timeline.is_animating(id) {
                continue;
            }
            if let Some(card) = self.cards.get(&id) {
                self.timeline.schedule_move(
                    id,
                    card.position,
                    slot,
                    ARRANGE_DURATION,
                    Easing::Linear,
                    Completion::Settle,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Orientation;

    fn two_seat_table() -> Table {
        TableBuilder::new()
            .deck(DeckConfig::new())
            .deck_anchor(400.0, 300.0)
            .local_seat("south", 207.0, 500.0, HandConfig::new().face_up().with_spacing(40.0))
            .seat(
                "north",
                207.0,
                40.0,
                HandConfig::new().with_orientation(Orientation::Top),
            )
            .build(42)
    }

    #[test]
    fn test_build_composition() {
        let mut table = two_seat_table();
        assert_eq!(table.card_count(), 52);
        assert_eq!(table.deck().len(), 52);
        assert_eq!(table.seat_count(), 2);
        assert!(table.hand(SeatId::new(0)).interactive);
        assert!(!table.hand(SeatId::new(1)).interactive);

        // Initial textures announced for the whole stack.
        let events = table.drain_events();
        let faces = events
            .iter()
            .filter(|e| matches!(e, TableEvent::FaceShown { .. }))
            .count();
        assert_eq!(faces, 52);
    }

    #[test]
    fn test_flip_is_guarded_and_toggles_on_completion() {
        let mut table = two_seat_table();
        let id = table.deck().top_card().unwrap();

        table.flip_card(id);
        assert!(table.card(id).unwrap().is_flipping());
        assert!(!table.card(id).unwrap().is_face_up());

        // A second flip mid-transition changes nothing.
        table.flip_card(id);
        assert_eq!(table.timeline.active_count(), 1);

        table.run_until_idle(50.0);
        let card = table.card(id).unwrap();
        assert!(!card.is_flipping());
        assert!(card.is_face_up());

        let events = table.drain_events();
        let finishes = events
            .iter()
            .filter(|e| matches!(e, TableEvent::FlipFinished { .. }))
            .count();
        assert_eq!(finishes, 1);
    }

    #[test]
    fn test_add_card_membership_only_after_arrival() {
        let mut table = two_seat_table();
        let seat = SeatId::new(1);
        let id = table.deck.draw().unwrap();

        table.add_card(seat, id);
        assert_eq!(table.hand(seat).len(), 0);
        assert!(!table.deck().contains(id));

        table.tick(100.0);
        assert_eq!(table.hand(seat).len(), 0);

        table.run_until_idle(100.0);
        assert_eq!(table.hand(seat).len(), 1);
        assert!(table.hand(seat).contains(id));
        assert_eq!(table.card(id).unwrap().depth, 1);
    }

    #[test]
    fn test_arrival_flips_to_hand_face() {
        let mut table = two_seat_table();
        let south = SeatId::new(0); // face-up hand
        let id = table.deck.draw().unwrap();

        table.add_card(south, id);
        table.run_until_idle(50.0);

        assert!(table.card(id).unwrap().is_face_up());
        assert!(!table.card(id).unwrap().is_flipping());
    }

    #[test]
    fn test_arrival_binds_input_only_for_local_seat() {
        let mut table = two_seat_table();
        let south = SeatId::new(0);
        let north = SeatId::new(1);

        let a = table.deck.draw().unwrap();
        let b = table.deck.draw().unwrap();
        table.add_card(south, a);
        table.add_card(north, b);
        table.run_until_idle(50.0);

        assert!(table.card(a).unwrap().interactive);
        assert!(!table.card(b).unwrap().interactive);
    }

    #[test]
    fn test_pointer_down_routes() {
        let mut table = two_seat_table();
        let south = SeatId::new(0);

        let top = table.deck().top_card().unwrap();
        assert_eq!(table.pointer_down(top), PointerResponse::DeckTop);

        let id = table.deck.draw().unwrap();
        table.add_card(south, id);
        table.run_until_idle(50.0);

        let response = table.pointer_down(id);
        assert_eq!(
            response,
            PointerResponse::Selection {
                seat: south,
                selected: true
            }
        );

        // A card in a non-interactive hand is ignored.
        let other = table.deck.draw().unwrap();
        table.add_card(SeatId::new(1), other);
        table.run_until_idle(50.0);
        assert_eq!(table.pointer_down(other), PointerResponse::Ignored);
    }

    #[test]
    fn test_remove_without_discard_config_fails_fast() {
        let mut table = two_seat_table();
        let seat = SeatId::new(0);
        let id = table.deck.draw().unwrap();
        table.add_card(seat, id);
        table.run_until_idle(50.0);

        assert_eq!(
            table.remove_card(seat, id),
            Err(TableError::DiscardNotConfigured(seat))
        );
        // Nothing moved.
        assert!(table.hand(seat).contains(id));
    }

    #[test]
    fn test_remove_unknown_card_is_noop() {
        let mut table = two_seat_table();
        let seat = SeatId::new(0);
        table.set_discard(seat, DiscardConfig::new(400.0, 300.0));

        let id = table.deck().top_card().unwrap();
        assert_eq!(table.remove_card(seat, id), Ok(()));
        assert!(table.discarded().is_empty());
    }

    #[test]
    fn test_table_snapshot_serde() {
        let mut table = two_seat_table();
        table.deal(DealConfig::new(2));
        table.tick(200.0);

        let json = serde_json::to_string(&table).unwrap();
        let restored: Table = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.card_count(), table.card_count());
        assert_eq!(restored.deck().len(), table.deck().len());
        assert_eq!(restored.is_dealing(), table.is_dealing());
    }
}
