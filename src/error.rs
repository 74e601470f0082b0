use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate fell outside `[0, side)`.
    #[error("cell ({x}, {y}) is outside of a {side}x{side} grid")]
    OutOfBounds { x: usize, y: usize, side: usize },
    /// Two grids that must share a side length do not.
    #[error("grid side mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// A grid must hold at least one cell.
    #[error("grid is empty, which isnt allowed")]
    EmptyGrid,
    /// Seed probabilities live in `[0, 1]`.
    #[error("seed density {0} is not a probability")]
    InvalidDensity(f64),
    /// A decoded grid does not hold `side * side` cells.
    #[error("snapshot of side {side} carries {cells} cells")]
    MalformedSnapshot { side: usize, cells: usize },
    /// The text form of a grid could not be read.
    #[error("unable to parse grid: {0}")]
    Parse(String),
    /// A snapshot could not be decoded at all.
    #[cfg(feature = "snapshot")]
    #[error("unable to decode snapshot: {0}")]
    Decode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
