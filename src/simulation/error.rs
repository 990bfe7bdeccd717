//! Error types for the simulation core.

use thiserror::Error;

/// Errors that can occur when placing a source in the arena.
///
/// Both variants are recoverable: the caller reports the problem and
/// re-prompts, leaving the simulation state untouched.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// A source already occupies the requested position.
    #[error("a source already exists at ({x}, {y})")]
    DuplicateLocation { x: f64, y: f64 },

    /// The requested position lies outside the arena bounds.
    #[error("position ({x}, {y}) is outside the arena")]
    OutOfRange { x: f64, y: f64 },

    /// A grid placement index lies outside the 0..=6 range.
    #[error("cell ({col}, {row}) is outside the placement grid")]
    CellOutOfRange { col: u32, row: u32 },
}
