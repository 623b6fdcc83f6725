//! # card-table
//!
//! A rendering-agnostic multiplayer card table engine: a shared deck is
//! dealt to seated players, each hand is arranged, selected from, and
//! discarded, and individual cards flip between face-down and face-up.
//!
//! ## Design Principles
//!
//! 1. **Semantic state only**: Cards, the deck, and hands hold suit,
//!    rank, orientation, ownership, and position-as-data. A presentation
//!    adapter drains [`events::TableEvent`]s and drives an actual
//!    renderer; the core never touches pixels.
//!
//! 2. **Transitions as data, not callbacks**: every animation is a
//!    script on the [`anim::Timeline`] carrying a completion payload.
//!    Dependent steps ("move, then flip, then re-arrange") are sequenced
//!    by reacting to completions inside `Table::tick`, preserving the
//!    single-thread, at-most-once-completion contract.
//!
//! 3. **Exclusive ownership**: a card is in exactly one place - the
//!    deck's undealt sequence, one hand, or out of play - and membership
//!    mutates only when the corresponding animation completes.
//!
//! ## Modules
//!
//! - `core`: Card/seat identity, RNG, configuration, errors
//! - `cards`: Suits, ranks, and the per-card state machine
//! - `layout`: Pure fan/stack geometry
//! - `anim`: Easing, tweens, the timeline executor, the deal sequencer
//! - `deck`: Composition, shuffle, draw
//! - `hand`: Per-seat membership and selection
//! - `table`: The orchestrating state machine and its clock
//! - `events`: Presentation adapter boundary

pub mod anim;
pub mod cards;
pub mod core;
pub mod deck;
pub mod events;
pub mod hand;
pub mod layout;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    CardId, DealConfig, DeckConfig, DiscardConfig, ExhaustPolicy, HandConfig, Orientation,
    SeatId, SeatMap, TableError, TableRng, TableRngState,
};

pub use crate::anim::{
    AnimId, DealSequence, DealTick, Easing, Step, StepMarker, Timeline, Tween,
};

pub use crate::cards::{Card, Rank, Suit, BACK_TEXTURE};

pub use crate::deck::Deck;

pub use crate::events::TableEvent;

pub use crate::hand::Hand;

pub use crate::layout::{hand_slot, raised_slot, stack_slot, Position, Vec2};

pub use crate::table::{Completion, PointerResponse, Table, TableBuilder};
