use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{AiMode, Coord, GameError, Outcome, TargetingAi};

#[test]
fn test_hit_floods_neighbours_in_order() {
    let mut ai = TargetingAi::new();
    ai.record(Coord::new(5, 5), Outcome::Hit).unwrap();
    let pending: Vec<_> = ai.pending().collect();
    assert_eq!(
        pending,
        vec![Coord::new(4, 5), Coord::new(6, 5), Coord::new(5, 4), Coord::new(5, 6)]
    );
    assert_eq!(ai.mode(), AiMode::Target);
}

#[test]
fn test_corner_hit_skips_off_board_neighbours() {
    let mut ai = TargetingAi::new();
    ai.record(Coord::new(0, 0), Outcome::Hit).unwrap();
    let pending: Vec<_> = ai.pending().collect();
    assert_eq!(pending, vec![Coord::new(1, 0), Coord::new(0, 1)]);
}

#[test]
fn test_flood_skips_tried_and_queued() {
    let mut ai = TargetingAi::new();
    ai.record(Coord::new(4, 5), Outcome::Miss).unwrap();
    ai.record(Coord::new(5, 5), Outcome::Hit).unwrap();
    ai.record(Coord::new(5, 6), Outcome::Hit).unwrap();
    let pending: Vec<_> = ai.pending().collect();
    // (5,6) stays queued after being tried; next_move skips it later.
    assert_eq!(
        pending,
        vec![
            Coord::new(6, 5),
            Coord::new(5, 4),
            Coord::new(5, 6),
            Coord::new(4, 6),
            Coord::new(6, 6),
            Coord::new(5, 7),
        ]
    );
}

#[test]
fn test_miss_does_not_queue() {
    let mut ai = TargetingAi::new();
    ai.record(Coord::new(3, 3), Outcome::Miss).unwrap();
    assert_eq!(ai.pending().count(), 0);
    assert_eq!(ai.mode(), AiMode::Hunt);
    assert!(ai.has_tried(Coord::new(3, 3)));
}

#[test]
fn test_target_mode_pops_fifo_and_skips_tried() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ai = TargetingAi::new();
    ai.record(Coord::new(5, 5), Outcome::Hit).unwrap();
    // (4,5) becomes tried before the queue reaches it.
    ai.record(Coord::new(4, 5), Outcome::Miss).unwrap();

    let first = ai.next_move(&mut rng).unwrap();
    assert_eq!(first, Coord::new(6, 5));
    ai.record(first, Outcome::Miss).unwrap();

    assert_eq!(ai.next_move(&mut rng).unwrap(), Coord::new(5, 4));
}

#[test]
fn test_drained_queue_falls_back_to_hunt() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut ai = TargetingAi::new();
    ai.record(Coord::new(0, 0), Outcome::Hit).unwrap();
    ai.record(Coord::new(1, 0), Outcome::Miss).unwrap();
    ai.record(Coord::new(0, 1), Outcome::Miss).unwrap();

    let next = ai.next_move(&mut rng).unwrap();
    assert_eq!(ai.mode(), AiMode::Hunt);
    assert!(!ai.has_tried(next));
    assert!(next.is_parity());
}

#[test]
fn test_hunt_prefers_parity_then_everything() {
    let mut ai = TargetingAi::new();
    for coord in Coord::all().filter(Coord::is_parity) {
        assert!(ai.hunt_candidates().iter().all(Coord::is_parity));
        ai.record(coord, Outcome::Miss).unwrap();
    }
    let rest = ai.hunt_candidates();
    assert_eq!(rest.len(), 50);
    assert!(rest.iter().all(|c| !c.is_parity()));
}

#[test]
fn test_exhausted_board_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut ai = TargetingAi::new();
    for coord in Coord::all() {
        ai.record(coord, Outcome::Miss).unwrap();
    }
    assert!(ai.tried().is_full());
    assert_eq!(ai.next_move(&mut rng).unwrap_err(), GameError::AiExhausted);
}
