//! Timed deal sequence behavior: strict round-robin distribution,
//! completion timing, and the two empty-deck policies.

use card_table::core::{DealConfig, DeckConfig, ExhaustPolicy, HandConfig, Orientation, SeatId};
use card_table::events::TableEvent;
use card_table::table::{Table, TableBuilder};
use card_table::CardId;

fn four_seat_table(seed: u64) -> Table {
    TableBuilder::new()
        .deck(DeckConfig::new())
        .deck_anchor(400.0, 300.0)
        .local_seat("south", 400.0, 560.0, HandConfig::new())
        .seat(
            "west",
            40.0,
            300.0,
            HandConfig::new().with_orientation(Orientation::Left),
        )
        .seat(
            "north",
            400.0,
            40.0,
            HandConfig::new().with_orientation(Orientation::Top),
        )
        .seat(
            "east",
            760.0,
            300.0,
            HandConfig::new().with_orientation(Orientation::Right),
        )
        .build(seed)
}

fn deal_complete_count(events: &[TableEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, TableEvent::DealComplete))
        .count()
}

#[test]
fn test_full_deal_is_round_robin() {
    let mut table = four_seat_table(7);

    // Draw order is the shuffled sequence from the top down.
    let stack: Vec<CardId> = table.deck().iter().collect();
    let draws: Vec<CardId> = stack.into_iter().rev().take(20).collect();

    table.deal(DealConfig::new(5));
    assert!(table.is_dealing());
    table.run_until_idle(100.0);

    assert_eq!(table.deck().len(), 32);
    assert!(!table.is_dealing());

    for (k, seat) in table.seats().enumerate() {
        let held: Vec<CardId> = table.hand(seat).iter().collect();
        let expected: Vec<CardId> = draws.iter().copied().skip(k).step_by(4).collect();
        assert_eq!(held, expected, "seat {seat:?} received out of order");
    }

    let events = table.drain_events();
    assert_eq!(deal_complete_count(&events), 1);
}

#[test]
fn test_completion_fires_one_interval_after_last_transfer() {
    let mut table = TableBuilder::new()
        .deck(DeckConfig::new())
        .local_seat("south", 400.0, 560.0, HandConfig::new())
        .build(3);

    table.deal(
        DealConfig::new(2)
            .with_interval(100.0)
            .with_move_duration(50.0),
    );
    table.drain_events();

    table.tick(100.0);
    assert_eq!(table.deck().len(), 51);
    table.tick(100.0);
    assert_eq!(table.deck().len(), 50);

    // Both transfers issued, but the sequence is still pending.
    assert!(table.is_dealing());
    assert_eq!(deal_complete_count(&table.drain_events()), 0);

    table.tick(100.0);
    assert!(!table.is_dealing());
    assert_eq!(deal_complete_count(&table.drain_events()), 1);
}

#[test]
fn test_deal_refused_while_one_is_running() {
    let mut table = four_seat_table(11);

    table.deal(DealConfig::new(5));
    table.tick(200.0);
    table.deal(DealConfig::new(1)); // ignored; the first deal keeps its config
    table.run_until_idle(100.0);

    for seat in table.seats() {
        assert_eq!(table.hand(seat).len(), 5);
    }
    assert_eq!(table.deck().len(), 32);
    assert_eq!(deal_complete_count(&table.drain_events()), 1);
}

#[test]
fn test_exhausted_deck_finishes_schedule() {
    let mut table = TableBuilder::new()
        .deck(DeckConfig::new())
        .local_seat("south", 400.0, 560.0, HandConfig::new())
        .seat(
            "north",
            400.0,
            40.0,
            HandConfig::new().with_orientation(Orientation::Top),
        )
        .build(5);

    // 60 scheduled transfers against 52 cards.
    table.deal(DealConfig::new(30));
    table.run_until_idle(100.0);

    assert!(table.deck().is_empty());
    assert_eq!(table.hand(SeatId::new(0)).len(), 26);
    assert_eq!(table.hand(SeatId::new(1)).len(), 26);
    assert!(!table.is_dealing());
    assert_eq!(deal_complete_count(&table.drain_events()), 1);
}

#[test]
fn test_exhausted_deck_ends_early() {
    let mut table = TableBuilder::new()
        .deck(DeckConfig::new())
        .local_seat("south", 400.0, 560.0, HandConfig::new())
        .seat(
            "north",
            400.0,
            40.0,
            HandConfig::new().with_orientation(Orientation::Top),
        )
        .build(5);

    table.deal(DealConfig::new(30).with_exhaust_policy(ExhaustPolicy::EndEarly));
    table.run_until_idle(100.0);

    assert!(table.deck().is_empty());
    assert_eq!(table.hand(SeatId::new(0)).len(), 26);
    assert_eq!(table.hand(SeatId::new(1)).len(), 26);
    assert!(!table.is_dealing());
    assert_eq!(deal_complete_count(&table.drain_events()), 1);
}

#[test]
fn test_dealt_cards_arrive_at_seat_slots() {
    let mut table = four_seat_table(13);

    table.deal(DealConfig::new(2));
    table.run_until_idle(100.0);

    // Two-card fan around the south anchor (400, 560), spacing 40.
    let south = SeatId::new(0);
    let xs: Vec<f32> = table
        .hand(south)
        .iter()
        .map(|id| table.card(id).unwrap().position.x)
        .collect();
    assert_eq!(xs, vec![380.0, 420.0]);
    assert!(table
        .hand(south)
        .iter()
        .all(|id| table.card(id).unwrap().position.y == 560.0));
}
