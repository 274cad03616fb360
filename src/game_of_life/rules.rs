//! Life rules applied to a sparse world
//!
//! Birth happens on exactly 3 live neighbors. A live cell survives on 3, 4
//! or 5 live neighbors. Note that this is NOT the classic Conway survival
//! rule (2 or 3): the 4-5 survival window is kept exactly as-is.

use super::{Cell, World};
use tracing::{debug, info};

/// Rules engine for advancing a world
pub struct LifeRules;

/// Per-generation transition counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub candidates: usize,
    pub births: usize,
    pub survivals: usize,
    pub deaths: usize,
}

impl LifeRules {
    /// Advance the world one generation
    pub fn step(current: &World) -> World {
        Self::step_with_stats(current).0
    }

    /// Advance one generation and report what happened
    pub fn step_with_stats(current: &World) -> (World, StepStats) {
        let candidates = current.candidates();
        let mut stats = StepStats {
            candidates: candidates.len(),
            ..StepStats::default()
        };

        let next: World = candidates
            .into_iter()
            .filter(|&cell| Self::next_state(current, cell))
            .collect();

        for cell in next.iter() {
            if current.contains(cell) {
                stats.survivals += 1;
            } else {
                stats.births += 1;
            }
        }
        stats.deaths = current.len() - stats.survivals;

        debug!(
            population = next.len(),
            candidates = stats.candidates,
            births = stats.births,
            survivals = stats.survivals,
            deaths = stats.deaths,
            "stepped generation"
        );

        (next, stats)
    }

    fn next_state(world: &World, cell: Cell) -> bool {
        Self::should_be_alive(world.contains(cell), world.count_neighbors(cell))
    }

    /// Evolve the world for multiple generations
    pub fn evolve_generations(world: &World, generations: usize) -> World {
        info!(generations, population = world.len(), "evolving world");
        let mut current = world.clone();
        for _ in 0..generations {
            current = Self::step(&current);
        }
        current
    }

    /// Every generation from the input through `generations` steps later
    pub fn evolution_path(world: &World, generations: usize) -> Vec<World> {
        info!(generations, population = world.len(), "recording evolution path");
        let mut path = Vec::with_capacity(generations + 1);
        path.push(world.clone());
        for i in 0..generations {
            let next = Self::step(&path[i]);
            path.push(next);
        }
        path
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        match (current_state, neighbor_count) {
            (_, 3) | (true, 4) | (true, 5) => true,
            _ => false,
        }
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_neighbor_counts() -> Vec<u8> {
        vec![3]
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> Vec<u8> {
        vec![3, 4, 5]
    }
}
