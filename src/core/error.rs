//! Error types.
//!
//! The error surface is deliberately small: most boundary conditions in
//! this domain are benign (empty draws, redundant flips, removing a card
//! that isn't there) and are handled as `Option`s or no-ops where they
//! occur. `TableError` covers the cases that are genuine programmer
//! errors and must fail fast.

use thiserror::Error;

use super::seat::SeatId;

/// A recoverable table operation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// A card removal was requested before the seat's discard animation
    /// target was configured. The card would animate to an undefined
    /// location, so the operation is refused instead.
    #[error("{0} has no discard configuration; call set_discard first")]
    DiscardNotConfigured(SeatId),
}
