//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{Cell, LifeRules, StepStats, World};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;

/// Format worlds for display
pub struct WorldFormatter;

impl WorldFormatter {
    /// Sorted set notation, e.g. `{(-1, 2), (0, 1)}`
    pub fn format_cells(world: &World) -> String {
        world.to_string()
    }

    /// Render the bounding box of the world, top row first
    pub fn format_visual(world: &World) -> String {
        let Some(bbox) = world.bounding_box() else {
            return "(empty)\n".to_string();
        };

        let mut output = format!(
            "x: {}..={}, y: {}..={}\n",
            bbox.min_x, bbox.max_x, bbox.min_y, bbox.max_y
        );
        if !bbox.is_renderable() {
            output.push_str(&format!(
                "({}x{} area too large to render; use text or json output)\n",
                bbox.width(),
                bbox.height()
            ));
            return output;
        }

        for y in bbox.min_y..=bbox.max_y {
            for x in bbox.min_x..=bbox.max_x {
                output.push(if world.contains(Cell::new(x, y)) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    pub fn format_json(world: &World) -> Result<String> {
        serde_json::to_string_pretty(world).context("Failed to serialize world")
    }

    /// Format a world according to the configured output format
    pub fn format_world(world: &World, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => Self::format_cells(world),
            OutputFormat::Json => Self::format_json(world)?,
            OutputFormat::Visual => Self::format_visual(world),
        })
    }

    /// Format every generation of an evolution path
    pub fn format_evolution(path: &[World], format: OutputFormat) -> Result<String> {
        if format == OutputFormat::Json {
            return serde_json::to_string_pretty(path).context("Failed to serialize evolution path");
        }

        let mut output = String::new();
        for (i, world) in path.iter().enumerate() {
            output.push_str(&format!("Generation {} (Living: {}):\n", i, world.len()));
            output.push_str(&Self::format_world(world, format)?);
            if !output.ends_with('\n') {
                output.push('\n');
            }
        }
        Ok(output)
    }

    /// Summary of a world and its next generation
    pub fn format_analysis(world: &World) -> String {
        let mut output = String::new();
        output.push_str(&format!("Living cells: {}\n", world.len()));

        match world.bounding_box() {
            Some(bbox) => output.push_str(&format!(
                "Bounding box: x {}..={}, y {}..={} ({}x{})\n",
                bbox.min_x,
                bbox.max_x,
                bbox.min_y,
                bbox.max_y,
                bbox.width(),
                bbox.height()
            )),
            None => output.push_str("Bounding box: none\n"),
        }

        let candidates = world.candidates();
        let histogram = candidates
            .iter()
            .map(|&cell| world.count_neighbors(cell))
            .counts();

        output.push_str(&format!("Candidate cells: {}\n", candidates.len()));
        output.push_str("Neighbor histogram:\n");
        for (count, cells) in histogram.iter().sorted() {
            output.push_str(&format!("  {}: {}\n", count, cells));
        }

        let (next, stats) = LifeRules::step_with_stats(world);
        output.push_str(&Self::format_stats(&stats));
        output.push_str(&format!("Next generation: {}\n", Self::format_cells(&next)));
        output
    }

    pub fn format_stats(stats: &StepStats) -> String {
        format!(
            "Births: {}, Survivals: {}, Deaths: {}\n",
            stats.births, stats.survivals, stats.deaths
        )
    }

    /// Write formatted output to a file, creating parent directories
    pub fn save_output<P: AsRef<Path>>(content: &str, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write output to {}", path.display()))
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").map_or(true, |term| term != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
