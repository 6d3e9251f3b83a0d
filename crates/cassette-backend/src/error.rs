//! Errors that can occur during cassette generation.

use cassette_spec::ConfigError;
use thiserror::Error;

/// Errors that can occur during cassette generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CassetteError {
    /// The configuration cannot be used.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// No zone rule matched a cell. This is a defect in the rule tables.
    #[error("no zone rule covers cell ({x}, {y})")]
    Uncovered { x: i32, y: i32 },

    /// A cell was written twice while building the pixel map.
    #[error("cell ({x}, {y}) was colored more than once")]
    DuplicatePixel { x: i32, y: i32 },

    /// A cell outside the grid was written.
    #[error("cell ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfGrid {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// The pixel map was finished with an unfilled cell.
    #[error("cell ({x}, {y}) was never colored")]
    MissingPixel { x: i32, y: i32 },
}
