use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;

/// Ship lengths and how many of each every fleet carries.
pub const FLEET: [ShipClass; 4] = [
    ShipClass::new(2, 3),
    ShipClass::new(3, 2),
    ShipClass::new(4, 2),
    ShipClass::new(5, 1),
];

pub const NUM_SHIPS: usize = manifest_ships(&FLEET);

/// Total number of ship segments in a standard fleet.
pub const TOTAL_SHIP_CELLS: usize = manifest_cells(&FLEET);

/// Random draws allowed while placing one whole fleet.
pub const PLACEMENT_ATTEMPT_LIMIT: usize = 10_000;

/// Pause between the player's shot landing and the computer's reply.
pub const COMPUTER_DELAY_MS: u64 = 500;

/// Sum of `length * count` over a manifest.
pub const fn manifest_cells(manifest: &[ShipClass]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < manifest.len() {
        total += manifest[i].length() * manifest[i].count();
        i += 1;
    }
    total
}

/// Number of ships described by a manifest.
pub const fn manifest_ships(manifest: &[ShipClass]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < manifest.len() {
        total += manifest[i].count();
        i += 1;
    }
    total
}
