//! Error types for pattern parsing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Pattern contains no cells or rows")]
    Empty,

    #[error("Invalid coordinate on line {line}: '{content}' (expected 'x y' or 'x,y')")]
    InvalidCoordinate { line: usize, content: String },

    #[error("Invalid character '{ch}' at row {row}, column {col}. Only '0', '1', '.' and 'O' are allowed")]
    InvalidGridCharacter { ch: char, row: usize, col: usize },

    #[error("Pattern spans {width}x{height} cells, too large to render as a grid")]
    TooLarge { width: u128, height: u128 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
