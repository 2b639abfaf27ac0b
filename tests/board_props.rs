use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use salvo::{place_fleet, Board, Coord, Outcome, BOARD_SIZE, TOTAL_SHIP_CELLS};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    place_fleet(&mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shot_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE as usize, col in 0..BOARD_SIZE as usize) {
        let mut board = random_board(seed);
        let coord = Coord::new(row, col);
        let first = board.apply_shot(coord).unwrap();
        let expected = if board.ship_map().contains(row, col) { Outcome::Hit } else { Outcome::Miss };
        prop_assert_eq!(first, expected);

        let after_first = board.clone();
        for _ in 0..3 {
            prop_assert_eq!(board.apply_shot(coord).unwrap(), Outcome::AlreadyShot);
        }
        prop_assert_eq!(&board, &after_first);
        prop_assert_eq!(board.shot_count(), 1);
    }

    #[test]
    fn all_sunk_iff_every_ship_cell_hit(seed in any::<u64>(), spare in 0..TOTAL_SHIP_CELLS) {
        let mut board = random_board(seed);
        let cells: Vec<Coord> = board.ship_cells().collect();
        prop_assert_eq!(cells.len(), TOTAL_SHIP_CELLS);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);

        // Hit all but one ship cell, plus some water.
        for (i, cell) in cells.iter().enumerate() {
            if i != spare {
                board.apply_shot(*cell).unwrap();
            }
        }
        for _ in 0..20 {
            let c = Coord::new(rng.random_range(0..10), rng.random_range(0..10));
            if !board.ship_map().contains(c.row, c.col) {
                board.apply_shot(c).unwrap();
            }
        }
        prop_assert!(!board.is_all_sunk());

        board.apply_shot(cells[spare]).unwrap();
        prop_assert!(board.is_all_sunk());
    }
}
