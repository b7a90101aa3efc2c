use serde::{Deserialize, Serialize};

/// Value held by a single cell, `0` when empty.
pub type Tile = u32;

/// Points accumulated from merges.
pub type Score = u64;

/// Single coordinate axis, used for grid side length and positions.
pub type Coord = u8;

/// Count type used for tile and cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Tile value that wins the game.
pub const WIN_TILE: Tile = 2048;

/// Largest tile a `Tile` can hold. Two of these never merge.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

/// Side length used when none is configured.
pub const DEFAULT_SIZE: Coord = 4;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `value` may be stored in a cell: empty, or a power of two of at least 2.
pub const fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Whether two neighboring cells would merge when pushed together.
pub const fn can_merge(a: Tile, b: Tile) -> bool {
    a == b && a != 0 && a < MAX_TILE
}

/// Requested slide direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
