//! Card identification.
//!
//! Every card at a table has a unique `CardId`, allocated once by the deck
//! composition at setup. Ids are opaque handles: the card's suit, rank, and
//! mutable state live in the table's card storage, while the deck and each
//! hand track ownership as ordered sequences of ids.
//!
//! ## Usage
//!
//! ```
//! use card_table::core::CardId;
//!
//! let id = CardId::new(10);
//! assert_eq!(id.raw(), 10);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance at a table.
///
/// Allocated sequentially by deck composition. The same id never refers to
/// two different cards within one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
