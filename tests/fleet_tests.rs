use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    manifest_cells, manifest_ships, place_fleet, Board, FleetPlacer, GameError, Orientation, PlacementFailure,
    ShipClass, BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS,
};

fn assert_valid_fleet(board: &Board) {
    let size = BOARD_SIZE as usize;
    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);

    let per_ship: usize = board.ships().iter().map(|s| s.length()).sum();
    assert_eq!(per_ship, TOTAL_SHIP_CELLS, "ships must not share cells");

    for ship in board.ships() {
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(cells.len(), ship.length());
        for (i, cell) in cells.iter().enumerate() {
            assert!(cell.row < size && cell.col < size);
            let origin = ship.origin();
            match ship.orientation() {
                Orientation::Horizontal => assert_eq!((cell.row, cell.col), (origin.row, origin.col + i)),
                Orientation::Vertical => assert_eq!((cell.row, cell.col), (origin.row + i, origin.col)),
            }
        }
    }

    for class in FLEET.iter() {
        let n = board.ships().iter().filter(|s| s.length() == class.length()).count();
        assert_eq!(n, class.count());
    }
}

#[test]
fn test_standard_manifest_totals() {
    assert_eq!(manifest_cells(&FLEET), 25);
    assert_eq!(TOTAL_SHIP_CELLS, 25);
    assert_eq!(NUM_SHIPS, 8);
    assert_eq!(manifest_ships(&FLEET), NUM_SHIPS);
}

#[test]
fn test_place_fleet_fixed_seed() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = place_fleet(&mut rng).unwrap();
    assert_valid_fleet(&board);
    assert_eq!(board.shot_count(), 0);
}

#[test]
fn test_same_seed_same_layout() {
    let a = place_fleet(&mut SmallRng::seed_from_u64(7)).unwrap();
    let b = place_fleet(&mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_ship_longer_than_board() {
    let manifest = [ShipClass::new(11, 1)];
    let err = FleetPlacer::new(&manifest)
        .place(&mut SmallRng::seed_from_u64(1))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::PlacementInfeasible(PlacementFailure::ShipTooLong {
            length: 11,
            board_size: 10
        })
    );
}

#[test]
fn test_too_many_cells() {
    let manifest = [ShipClass::new(9, 12)];
    let err = FleetPlacer::new(&manifest)
        .place(&mut SmallRng::seed_from_u64(1))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::PlacementInfeasible(PlacementFailure::TooManyCells {
            needed: 108,
            available: 100
        })
    );
}

#[test]
fn test_attempt_limit_fails_fast() {
    // Every ship needs at least one draw, so a budget below the ship count cannot succeed.
    let err = FleetPlacer::default()
        .with_attempt_limit(NUM_SHIPS - 1)
        .place(&mut SmallRng::seed_from_u64(3))
        .unwrap_err();
    match err {
        GameError::PlacementInfeasible(PlacementFailure::AttemptsExhausted { attempts, placed }) => {
            assert_eq!(attempts, NUM_SHIPS - 1);
            assert!(placed < NUM_SHIPS);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_zero_length_class_is_infeasible() {
    let manifest = [ShipClass::new(3, 1), ShipClass::new(0, 2)];
    let err = FleetPlacer::new(&manifest)
        .place(&mut SmallRng::seed_from_u64(4))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::PlacementInfeasible(PlacementFailure::ZeroLength { count: 2 })
    );

    // A class with no ships requested is skipped.
    let manifest = [ShipClass::new(0, 0), ShipClass::new(2, 1)];
    let board = FleetPlacer::new(&manifest)
        .place(&mut SmallRng::seed_from_u64(4))
        .unwrap();
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_empty_manifest() {
    let board = FleetPlacer::new(&[]).place(&mut SmallRng::seed_from_u64(9)).unwrap();
    assert!(board.ships().is_empty());
    assert!(board.is_all_sunk());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = place_fleet(&mut rng).unwrap();
        assert_valid_fleet(&board);
    }
}
