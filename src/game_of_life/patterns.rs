//! Built-in starting patterns

use super::World;

/// Names accepted by [`by_name`]
pub const PATTERN_NAMES: [&str; 4] = ["seed", "glider", "blinker", "block"];

/// Default starting world used when no input is given
pub fn seed() -> World {
    World::from_cells([(0, 0), (1, 1), (1, 2), (0, 2), (-1, 2)])
}

pub fn glider() -> World {
    World::from_cells([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

pub fn blinker() -> World {
    World::from_cells([(0, 0), (1, 0), (2, 0)])
}

pub fn block() -> World {
    World::from_cells([(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// Look up a built-in pattern
pub fn by_name(name: &str) -> Option<World> {
    match name.to_ascii_lowercase().as_str() {
        "seed" => Some(seed()),
        "glider" => Some(glider()),
        "blinker" => Some(blinker()),
        "block" => Some(block()),
        _ => None,
    }
}
