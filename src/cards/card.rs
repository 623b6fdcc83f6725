//! The per-card state machine.
//!
//! A `Card` owns its semantic state only: suit, rank, face orientation,
//! the transient flip guard, the selection flag, and its position as
//! data. It never touches a renderer; the table emits events when any of
//! this needs to reach a screen.
//!
//! ## Flip contract
//!
//! `flipping` is true only strictly between flip start and flip
//! completion. `begin_flip` refuses a second flip while one is in flight,
//! and `face_up` toggles only in `finish_flip` - never mid-transition.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::layout::Position;

/// Texture name for the shared card back.
pub const BACK_TEXTURE: &str = "card-back";

/// The four French suits plus the joker pseudo-suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    /// Jokers carry rank 0 and no suit semantics.
    Joker,
}

impl Suit {
    /// The four suits of the standard 52-card composition, in build order.
    pub const STANDARD: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Texture name prefix for this suit.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Joker => "joker",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Card rank: 1 (ace) through 13 (king) for suited cards, 0 for jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const JOKER: Rank = Rank(0);
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    /// Create a rank from a raw value.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card's semantic state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the table.
    pub id: CardId,

    /// Suit (or joker).
    pub suit: Suit,

    /// Rank; 0 for jokers.
    pub rank: Rank,

    /// Current face orientation. Toggles only when a flip completes, or
    /// via the immediate `set_face_up` correction.
    face_up: bool,

    /// True only strictly between flip start and flip completion.
    flipping: bool,

    /// Selection flag. Independent of any animation.
    selected: bool,

    /// Position, rotation (degrees), and scale as data.
    pub position: Position,

    /// Display stacking order; later arrivals sit above earlier cards.
    pub depth: u32,

    /// Is pointer input currently bound to this card?
    pub interactive: bool,
}

impl Card {
    /// Create a card with the given identity and initial face.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank, face_up: bool) -> Self {
        Self {
            id,
            suit,
            rank,
            face_up,
            flipping: false,
            selected: false,
            position: Position::default(),
            depth: 0,
            interactive: false,
        }
    }

    /// Texture name of this card's front face, e.g. `"hearts-07"` or
    /// `"joker-1"`. Jokers are distinguished by id parity.
    #[must_use]
    pub fn face_name(&self) -> String {
        if self.suit == Suit::Joker {
            format!("joker-{}", self.id.raw() % 2 + 1)
        } else {
            format!("{}-{:02}", self.suit.prefix(), self.rank.raw())
        }
    }

    /// Texture name currently showing: the front face or the shared back.
    #[must_use]
    pub fn visible_texture(&self) -> String {
        if self.face_up {
            self.face_name()
        } else {
            BACK_TEXTURE.to_string()
        }
    }

    /// Texture name of the face this card is flipping toward.
    #[must_use]
    pub fn flip_target_texture(&self) -> String {
        if self.face_up {
            BACK_TEXTURE.to_string()
        } else {
            self.face_name()
        }
    }

    /// Is the card currently face-up?
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Is a flip transition in flight?
    #[must_use]
    pub const fn is_flipping(&self) -> bool {
        self.flipping
    }

    /// Immediate, non-animated face switch. Used for instantaneous state
    /// correction, not as a transition.
    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Start a flip transition.
    ///
    /// Returns false (and changes nothing) if a flip is already in
    /// flight: at most one flip animation per card at a time.
    pub fn begin_flip(&mut self) -> bool {
        if self.flipping {
            return false;
        }
        self.flipping = true;
        true
    }

    /// Complete the in-flight flip: toggle the face and release the
    /// guard. Called only from the animation completion path.
    pub fn finish_flip(&mut self) {
        debug_assert!(self.flipping, "finish_flip without begin_flip");
        self.flipping = false;
        self.face_up = !self.face_up;
    }

    /// Is the card marked selected?
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection flag. Callers animate the lift separately.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(CardId::new(10), Suit::Hearts, Rank::new(7), false)
    }

    #[test]
    fn test_new_card_is_quiescent() {
        let card = card();
        assert!(!card.is_face_up());
        assert!(!card.is_flipping());
        assert!(!card.is_selected());
        assert_eq!(card.depth, 0);
    }

    #[test]
    fn test_face_names() {
        let card = card();
        assert_eq!(card.face_name(), "hearts-07");
        assert_eq!(card.visible_texture(), BACK_TEXTURE);
        assert_eq!(card.flip_target_texture(), "hearts-07");
    }

    #[test]
    fn test_joker_face_names() {
        let a = Card::new(CardId::new(52), Suit::Joker, Rank::JOKER, false);
        let b = Card::new(CardId::new(53), Suit::Joker, Rank::JOKER, false);
        assert_eq!(a.face_name(), "joker-1");
        assert_eq!(b.face_name(), "joker-2");
    }

    #[test]
    fn test_flip_guard() {
        let mut card = card();

        assert!(card.begin_flip());
        assert!(card.is_flipping());

        // Second flip while in flight is refused.
        assert!(!card.begin_flip());
        assert!(card.is_flipping());

        // Face unchanged until completion.
        assert!(!card.is_face_up());

        card.finish_flip();
        assert!(!card.is_flipping());
        assert!(card.is_face_up());
    }

    #[test]
    fn test_double_flip_round_trip() {
        let mut card = card();

        card.begin_flip();
        card.finish_flip();
        card.begin_flip();
        card.finish_flip();

        assert!(!card.is_face_up());
        assert!(!card.is_flipping());
    }

    #[test]
    fn test_set_face_up_is_immediate() {
        let mut card = card();
        card.set_face_up(true);
        assert!(card.is_face_up());
        assert!(!card.is_flipping());
        assert_eq!(card.visible_texture(), "hearts-07");
    }

    #[test]
    fn test_selection_flag() {
        let mut card = card();
        card.set_selected(true);
        assert!(card.is_selected());
        card.set_selected(false);
        assert!(!card.is_selected());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut card = card();
        card.begin_flip();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
        assert!(deserialized.is_flipping());
    }
}
