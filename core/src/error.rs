use thiserror::Error;

use crate::{Coord, Coord2, Tile};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be between 1 and 255")]
    InvalidSize,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid is not square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("Grid size {actual} does not match configured size {expected}")]
    SizeMismatch { expected: Coord, actual: Coord },
    #[error("Invalid tile value {value} at {coords:?}, expected 0 or a power of two")]
    InvalidTile { coords: Coord2, value: Tile },
}

pub type Result<T> = core::result::Result<T, GameError>;
