use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use lexicard_core::{
    apply_outcome, due_indices, is_due, pick_due, select_due, Flashcard, IntervalTable,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
}

fn card_at_level(level: usize, now: DateTime<Utc>) -> Flashcard {
    Flashcard::from_parts("casa", "house", level, now, 0, 0).unwrap()
}

#[test]
fn correct_then_incorrect_follows_interval_table() {
    let table = IntervalTable::default();
    let mut card = Flashcard::new("casa", "house", t0()).unwrap();

    let first = apply_outcome(&mut card, true, t0(), &table);
    assert_eq!(first.from_level, 0);
    assert_eq!(first.to_level, 1);
    assert_eq!(card.level(), 1);
    assert_eq!(card.next_review(), t0() + TimeDelta::days(3));

    let t1 = t0() + TimeDelta::days(3) + TimeDelta::hours(2);
    let second = apply_outcome(&mut card, false, t1, &table);
    assert_eq!(second.to_level, 0);
    assert_eq!(card.level(), 0);
    assert_eq!(card.next_review(), t1 + TimeDelta::days(1));
    assert_eq!(card.reviews(), 2);
    assert_eq!(card.correct(), 1);
}

#[test]
fn miss_demotes_exactly_one_level() {
    let table = IntervalTable::default();
    let mut card = card_at_level(4, t0());

    let transition = apply_outcome(&mut card, false, t0(), &table);
    assert_eq!(transition.to_level, 3);
    assert_eq!(card.next_review(), t0() + TimeDelta::days(14));
}

#[test]
fn level_saturates_at_both_ends() {
    let table = IntervalTable::default();

    let mut top = card_at_level(5, t0());
    apply_outcome(&mut top, true, t0(), &table);
    assert_eq!(top.level(), 5);
    assert_eq!(top.next_review(), t0() + TimeDelta::days(90));

    let mut bottom = card_at_level(0, t0());
    apply_outcome(&mut bottom, false, t0(), &table);
    assert_eq!(bottom.level(), 0);
    assert_eq!(bottom.next_review(), t0() + TimeDelta::days(1));
    assert_eq!(bottom.reviews(), 1);
    assert_eq!(bottom.correct(), 0);
}

#[test]
fn level_above_table_is_clamped_before_transition() {
    let table = IntervalTable::new(vec![1, 2]).unwrap();
    let mut card = card_at_level(7, t0());

    let transition = apply_outcome(&mut card, false, t0(), &table);
    assert_eq!(transition.from_level, 1);
    assert_eq!(transition.to_level, 0);
}

#[test]
fn longest_interval_near_calendar_end_saturates() {
    let table = IntervalTable::new(vec![1, lexicard_core::MAX_INTERVAL_DAYS]).unwrap();
    let late = DateTime::<Utc>::MAX_UTC - TimeDelta::days(10);
    let mut card = card_at_level(0, late);

    let transition = apply_outcome(&mut card, true, late, &table);
    assert_eq!(transition.to_level, 1);
    assert_eq!(card.next_review(), DateTime::<Utc>::MAX_UTC);
}

#[test]
fn random_outcome_sequences_keep_invariants() {
    let table = IntervalTable::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut card = Flashcard::new("casa", "house", t0()).unwrap();
    let mut now = t0();

    for _ in 0..500 {
        let correct = rng.random_bool(0.6);
        let before = card.level();
        let transition = apply_outcome(&mut card, correct, now, &table);

        assert!(card.level() <= table.max_level());
        assert!(card.correct() <= card.reviews());
        assert!(before.abs_diff(card.level()) <= 1);
        if correct {
            assert!(card.level() >= before);
        } else {
            assert!(card.level() <= before);
        }
        assert_eq!(
            transition.next_review,
            now + TimeDelta::days(i64::from(table.days_at(card.level())))
        );
        now += TimeDelta::minutes(rng.random_range(1..10_000));
    }
    assert_eq!(card.reviews(), 500);
}

#[test]
fn due_boundary_is_inclusive() {
    let card = card_at_level(0, t0());
    assert!(is_due(&card, t0()));
    assert!(!is_due(&card, t0() - TimeDelta::nanoseconds(1)));
}

#[test]
fn select_due_tracks_the_clock() {
    let cards = vec![
        card_at_level(0, t0()),
        card_at_level(0, t0() + TimeDelta::days(2)),
        card_at_level(0, t0() - TimeDelta::days(1)),
    ];

    let due_now: Vec<&Flashcard> = select_due(&cards, t0()).collect();
    assert_eq!(due_now.len(), 2);
    assert_eq!(due_indices(&cards, t0()), vec![0, 2]);

    let later = t0() + TimeDelta::days(2);
    assert_eq!(select_due(&cards, later).count(), 3);
    assert_eq!(due_indices(&cards, later), vec![0, 1, 2]);
}

#[test]
fn pick_due_returns_due_cards_only() {
    let cards = vec![
        card_at_level(0, t0() + TimeDelta::days(5)),
        card_at_level(0, t0()),
    ];
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let (index, card) = pick_due(&cards, t0(), &mut rng).unwrap();
        assert_eq!(index, 1);
        assert!(is_due(card, t0()));
    }
    assert!(pick_due(&cards, t0() - TimeDelta::days(1), &mut rng).is_none());
}

#[test]
fn pick_due_is_reproducible_with_same_seed() {
    let cards: Vec<Flashcard> = (0..8)
        .map(|i| Flashcard::new(format!("w{i}"), format!("t{i}"), t0()).unwrap())
        .collect();

    let picks = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| pick_due(&cards, t0(), &mut rng).unwrap().0)
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(3), picks(3));
}
