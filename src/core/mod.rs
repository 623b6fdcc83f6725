//! Core engine types: card identity, seats, RNG, configuration, errors.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{
    DealConfig, DeckConfig, DiscardConfig, ExhaustPolicy, HandConfig, Orientation,
};
pub use entity::CardId;
pub use error::TableError;
pub use rng::{TableRng, TableRngState};
pub use seat::{SeatId, SeatMap};
