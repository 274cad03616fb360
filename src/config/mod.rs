//! Configuration management for the sparse Life runner

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, LoggingConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
};
