//! Card state: suits, ranks, and the per-card state machine.

pub mod card;

pub use card::{Card, Rank, Suit, BACK_TEXTURE};
