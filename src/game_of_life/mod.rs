//! Sparse Game of Life core functionality

pub mod cell;
pub mod io;
pub mod patterns;
pub mod rules;
pub mod world;

pub use cell::Cell;
pub use io::{create_example_patterns, load_world_from_file, save_world_to_file, PatternFormat};
pub use rules::{LifeRules, StepStats};
pub use world::{BoundingBox, World, MAX_RENDER_AREA};
