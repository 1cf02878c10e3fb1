use super::candidates::PhaseSpec;
use super::ship::ShipType;

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const DEFAULT_GAMES: usize = 10_000;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// The three scan phases, coarse to fine. Spacing 2 covers every placement
/// of a length-2 ship.
pub const PHASES: [PhaseSpec; 3] = [
    PhaseSpec::new(0, 0, 8, 0, 6),
    PhaseSpec::new(-1, -1, 4, 0, 6),
    PhaseSpec::new(-1, 0, 2, 0, 6),
];

/// Attempts made by random placement before giving up on one ship.
pub const PLACEMENT_ATTEMPTS: usize = 100;
