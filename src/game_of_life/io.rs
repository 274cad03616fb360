//! File I/O for patterns
//!
//! Three on-disk formats are understood, chosen by file extension:
//! - `.json`: a list of `[x, y]` pairs
//! - `.grid`: plaintext rows of `0`/`1` (or `.`/`O`); column is x, row is y
//! - anything else: one coordinate per line, `x y` or `x,y`, `#` comments

use super::{patterns, Cell, World};
use crate::error::PatternError;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFormat {
    Coordinates,
    Grid,
    Json,
}

impl PatternFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("json") => PatternFormat::Json,
            Some("grid") => PatternFormat::Grid,
            _ => PatternFormat::Coordinates,
        }
    }
}

/// Load a world from a pattern file
pub fn load_world_from_file<P: AsRef<Path>>(path: P) -> Result<World> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;

    let format = PatternFormat::from_path(path);
    let world = parse_world(&content, format)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.display()))?;

    debug!(path = %path.display(), ?format, population = world.len(), "loaded pattern");
    Ok(world)
}

/// Parse a world in the given format
pub fn parse_world(content: &str, format: PatternFormat) -> Result<World, PatternError> {
    match format {
        PatternFormat::Coordinates => parse_coordinates(content),
        PatternFormat::Grid => parse_grid(content),
        PatternFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Parse one coordinate per line. Blank lines and `#` comments are skipped;
/// surrounding parentheses are tolerated, so `(1, 2)` parses too.
pub fn parse_coordinates(content: &str) -> Result<World, PatternError> {
    let mut world = World::new();

    for (line_idx, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let cell = parse_coordinate(line).ok_or_else(|| PatternError::InvalidCoordinate {
            line: line_idx + 1,
            content: raw.to_string(),
        })?;
        world.extend([cell]);
    }

    Ok(world)
}

fn parse_coordinate(line: &str) -> Option<Cell> {
    let (x, y) = line
        .trim_matches(|c| c == '(' || c == ')')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect_tuple()?;

    Some(Cell::new(x.parse().ok()?, y.parse().ok()?))
}

/// Parse a plaintext grid; the top-left character is (0, 0)
pub fn parse_grid(content: &str) -> Result<World, PatternError> {
    let rows: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('!'))
        .collect();

    if rows.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut world = World::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '1' | 'O' => world.extend([Cell::new(col as i64, row as i64)]),
                '0' | '.' => {}
                _ => return Err(PatternError::InvalidGridCharacter { ch, row, col }),
            }
        }
    }

    Ok(world)
}

/// Convert a world to the line-per-coordinate text format
pub fn world_to_coordinates(world: &World) -> String {
    world
        .sorted_cells()
        .iter()
        .map(|cell| format!("{} {}\n", cell.x, cell.y))
        .collect()
}

/// Render a world's bounding box as a plaintext grid.
/// Coordinates are shifted so the bounding box starts at (0, 0).
pub fn world_to_grid(world: &World) -> Result<String, PatternError> {
    let Some(bbox) = world.bounding_box() else {
        return Ok(String::new());
    };

    if !bbox.is_renderable() {
        return Err(PatternError::TooLarge {
            width: bbox.width(),
            height: bbox.height(),
        });
    }

    let mut result = String::new();
    for y in bbox.min_y..=bbox.max_y {
        for x in bbox.min_x..=bbox.max_x {
            result.push(if world.contains(Cell::new(x, y)) { '1' } else { '0' });
        }
        result.push('\n');
    }
    Ok(result)
}

/// Save a world, choosing the format from the file extension
pub fn save_world_to_file<P: AsRef<Path>>(world: &World, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = match PatternFormat::from_path(path) {
        PatternFormat::Json => serde_json::to_string_pretty(world)
            .context("Failed to serialize world")?,
        PatternFormat::Grid => world_to_grid(world)?,
        PatternFormat::Coordinates => world_to_coordinates(world),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.display()))?;

    Ok(())
}

/// Write every built-in pattern to `output_dir` as a coordinate file
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for name in patterns::PATTERN_NAMES {
        let world = patterns::by_name(name)
            .with_context(|| format!("Unknown built-in pattern: {}", name))?;
        save_world_to_file(&world, dir.join(format!("{}.txt", name)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_coordinates() {
        let content = "# seed\n0 0\n1,1\n  (1, 2)\n\n0 2 # trailing comment\n-1 2\n";
        let world = parse_coordinates(content).unwrap();
        assert_eq!(world, patterns::seed());
    }

    #[test]
    fn test_parse_empty_coordinates() {
        let world = parse_coordinates("# nothing here\n\n").unwrap();
        assert!(world.is_empty());
    }

    #[test]
    fn test_invalid_coordinates() {
        let err = parse_coordinates("0 0\n1 x\n").unwrap_err();
        assert!(matches!(err, PatternError::InvalidCoordinate { line: 2, .. }));

        assert!(parse_coordinates("1 2 3\n").is_err());
        assert!(parse_coordinates("7\n").is_err());
    }

    #[test]
    fn test_parse_grid() {
        let world = parse_grid("010\n001\n111\n").unwrap();
        assert_eq!(world, patterns::glider());

        let dotted = parse_grid("!Name: glider\n.O.\n..O\nOOO\n").unwrap();
        assert_eq!(dotted, patterns::glider());
    }

    #[test]
    fn test_invalid_grid() {
        let err = parse_grid("010\n1X1\n").unwrap_err();
        assert!(matches!(err, PatternError::InvalidGridCharacter { ch: 'X', row: 1, col: 1 }));

        assert!(matches!(parse_grid("\n\n"), Err(PatternError::Empty)));
    }

    #[test]
    fn test_world_to_grid() {
        let world = World::from_cells([(-1, 2), (1, 2), (0, 3)]);
        assert_eq!(world_to_grid(&world).unwrap(), "101\n010\n");
        assert_eq!(world_to_grid(&World::new()).unwrap(), "");
    }

    #[test]
    fn test_far_apart_world_refuses_grid() {
        let world = World::from_cells([(0, 0), (0, 1_000_000_000_000)]);
        let err = world_to_grid(&world).unwrap_err();
        assert!(matches!(err, PatternError::TooLarge { width: 1, height: 1_000_000_000_001 }));

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("far.grid");
        assert!(save_world_to_file(&world, &path).is_err());
        assert!(!path.exists());

        // Coordinate lists stay proportional to the population
        let coords = temp_dir.path().join("far.txt");
        save_world_to_file(&world, &coords).unwrap();
        assert_eq!(load_world_from_file(&coords).unwrap(), world);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(PatternFormat::from_path("a/b.json"), PatternFormat::Json);
        assert_eq!(PatternFormat::from_path("glider.grid"), PatternFormat::Grid);
        assert_eq!(PatternFormat::from_path("seed.txt"), PatternFormat::Coordinates);
        assert_eq!(PatternFormat::from_path("seed"), PatternFormat::Coordinates);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let world = World::from_cells([(-3, 4), (0, 0), (5, -1)]);

        for name in ["world.txt", "world.json", "nested/world.grid"] {
            let path = temp_dir.path().join(name);
            save_world_to_file(&world, &path).unwrap();
            let loaded = load_world_from_file(&path).unwrap();

            if name.ends_with(".grid") {
                // Grids are re-anchored at the bounding box corner
                assert_eq!(loaded.len(), world.len());
            } else {
                assert_eq!(loaded, world);
            }
        }
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(load_world_from_file(temp_dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in patterns::PATTERN_NAMES {
            assert!(temp_dir.path().join(format!("{}.txt", name)).exists());
        }

        let glider = load_world_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider, patterns::glider());
    }
}
