//! Sparse Game of Life
//!
//! Tracks only the coordinates of live cells on an unbounded lattice and
//! advances them one generation at a time.
//!
//! Rule: a cell with exactly 3 live neighbors is live next generation; a
//! live cell with 4 or 5 live neighbors also stays live; everything else is
//! dead. The survival window deliberately differs from classic Conway
//! (which keeps cells with 2 or 3 neighbors).

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::PatternError;
pub use game_of_life::{Cell, LifeRules, World};

use anyhow::Result;

/// Starting world: the configured seed file, or the built-in seed
pub fn load_seed(settings: &Settings) -> Result<World> {
    match settings.input.seed_file {
        Some(ref path) => game_of_life::load_world_from_file(path),
        None => Ok(game_of_life::patterns::seed()),
    }
}

/// Resolve the configured starting world and evolve it
pub fn run_simulation(settings: &Settings) -> Result<World> {
    let seed = load_seed(settings)?;
    Ok(LifeRules::evolve_generations(&seed, settings.simulation.generations))
}
