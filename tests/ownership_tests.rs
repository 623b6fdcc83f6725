//! The exclusive-ownership invariant: a card id lives in at most one of
//! the deck, a hand, or the discarded list at every observable moment,
//! and in exactly one of them once the table is idle (in-flight cards
//! belong to nothing until they land).

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use card_table::core::{DealConfig, DeckConfig, DiscardConfig, HandConfig, Orientation, SeatId};
use card_table::table::{Table, TableBuilder};
use card_table::CardId;

fn two_seat_table(seed: u64) -> Table {
    TableBuilder::new()
        .deck(DeckConfig::new())
        .deck_anchor(400.0, 300.0)
        .local_seat("south", 400.0, 560.0, HandConfig::new())
        .seat(
            "north",
            400.0,
            40.0,
            HandConfig::new().with_orientation(Orientation::Top),
        )
        .build(seed)
}

/// Every placed card id, asserting along the way that no id appears in
/// two places. Returns how many ids are placed (the rest are in flight).
fn placed_count(table: &Table) -> usize {
    let mut seen: FxHashSet<CardId> = FxHashSet::default();
    for id in table.deck().iter() {
        assert!(seen.insert(id), "{id} in the deck twice");
    }
    for seat in table.seats() {
        for id in table.hand(seat).iter() {
            assert!(seen.insert(id), "{id} owned twice");
        }
    }
    for &id in table.discarded() {
        assert!(seen.insert(id), "{id} discarded while still owned");
    }
    seen.len()
}

#[test]
fn test_card_in_flight_belongs_to_nothing() {
    let mut table = two_seat_table(1);
    let south = SeatId::new(0);

    let id = table.draw_to_hand(south).unwrap();
    assert!(!table.deck().contains(id));
    assert!(!table.hand(south).contains(id));
    assert_eq!(placed_count(&table), table.card_count() - 1);

    table.run_until_idle(50.0);
    assert!(table.hand(south).contains(id));
    assert_eq!(placed_count(&table), table.card_count());
}

#[test]
fn test_idle_table_partitions_every_card() {
    let mut table = two_seat_table(3);
    let south = SeatId::new(0);
    table.set_discard(south, DiscardConfig::new(400.0, 300.0));

    table.deal(DealConfig::new(5));
    table.run_until_idle(100.0);
    assert_eq!(placed_count(&table), table.card_count());

    let first = table.hand(south).iter().next().unwrap();
    table.pointer_down(first);
    table.remove_selected(south).unwrap();
    table.run_until_idle(50.0);

    assert_eq!(placed_count(&table), table.card_count());
    assert_eq!(table.discarded(), &[first]);
    assert_eq!(table.deck().len(), 42);
    assert_eq!(table.hand(south).len(), 4);
}

#[test]
fn test_discarded_cards_never_return_to_the_deck() {
    let mut table = two_seat_table(5);
    let south = SeatId::new(0);
    table.set_discard(south, DiscardConfig::new(400.0, 300.0));

    let id = table.draw_to_hand(south).unwrap();
    table.run_until_idle(50.0);
    table.pointer_down(id);
    table.remove_selected(south).unwrap();
    table.run_until_idle(50.0);

    assert_eq!(table.discarded(), &[id]);
    assert!(!table.deck().contains(id));

    // A later deal leaves the discarded card where it is.
    table.deal(DealConfig::new(3));
    table.run_until_idle(100.0);
    assert_eq!(table.discarded(), &[id]);
    assert_eq!(placed_count(&table), table.card_count());
}

#[test]
fn test_snapshot_preserves_ownership() {
    let mut table = two_seat_table(7);
    table.deal(DealConfig::new(4));
    // Freeze mid-deal, cards in flight.
    for _ in 0..4 {
        table.tick(100.0);
    }

    let json = serde_json::to_string(&table).unwrap();
    let mut restored: Table = serde_json::from_str(&json).unwrap();

    assert_eq!(placed_count(&restored), placed_count(&table));

    table.run_until_idle(100.0);
    restored.run_until_idle(100.0);

    assert_eq!(restored.deck().len(), table.deck().len());
    for seat in table.seats() {
        let a: Vec<CardId> = table.hand(seat).iter().collect();
        let b: Vec<CardId> = restored.hand(seat).iter().collect();
        assert_eq!(a, b);
    }
    assert_eq!(placed_count(&restored), restored.card_count());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random interleavings of dealing, drawing, selection, removal, and
    /// clock steps never let a card exist in two places, and every card
    /// is accounted for once the table settles.
    #[test]
    fn test_ownership_holds_under_interleaving(
        ops in proptest::collection::vec(any::<u8>(), 1..80),
        seed in 0u64..1000,
    ) {
        let mut table = two_seat_table(seed);
        let south = SeatId::new(0);
        for seat in [SeatId::new(0), SeatId::new(1)] {
            table.set_discard(seat, DiscardConfig::new(400.0, 300.0).with_spacing(20.0));
        }

        for op in ops {
            match op % 5 {
                0 => table.tick(90.0),
                1 => table.deal(
                    DealConfig::new(2)
                        .with_interval(100.0)
                        .with_move_duration(80.0),
                ),
                2 => {
                    let _ = table.draw_to_hand(south);
                }
                3 => {
                    table.pointer_down(CardId::new(u32::from(op)));
                }
                4 => table.remove_selected(south).unwrap(),
                _ => unreachable!(),
            }
            placed_count(&table);
        }

        table.run_until_idle(90.0);
        prop_assert_eq!(placed_count(&table), table.card_count());
    }
}
