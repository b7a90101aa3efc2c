use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Square matrix of tiles. The side length is fixed at construction and every
/// non-zero cell holds a power of two.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Array2<Tile>", try_from = "Array2<Tile>")]
pub struct Grid {
    cells: Array2<Tile>,
}

impl Grid {
    /// Empty `size`x`size` grid.
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        let size = usize::from(size);
        Ok(Self::from_array_unchecked(Array2::zeros((size, size))))
    }

    /// Validates shape and tile values of `cells`.
    pub fn from_array(cells: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(GameError::NotSquare { rows, cols });
        }
        if rows == 0 || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidSize);
        }

        if let Some(((row, col), &value)) = cells
            .indexed_iter()
            .find(|&(_, &value)| !is_valid_tile(value))
        {
            return Err(GameError::InvalidTile {
                coords: (row as Coord, col as Coord),
                value,
            });
        }

        Ok(Self::from_array_unchecked(cells))
    }

    pub fn from_rows<const N: usize>(rows: [[Tile; N]; N]) -> Result<Self> {
        Self::from_array(Array2::from_shape_fn((N, N), |(row, col)| rows[row][col]))
    }

    pub(crate) fn from_array_unchecked(cells: Array2<Tile>) -> Self {
        Self { cells }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn cells(&self) -> ArrayView2<'_, Tile> {
        self.cells.view()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<Tile> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Stores `value` at coordinates already known to be in range.
    pub(crate) fn fill(&mut self, coords: Coord2, value: Tile) {
        self.cells[coords.to_nd_index()] = value;
    }

    /// Stores `value` at `coords`, rejecting out of range coordinates and
    /// values that are not valid tiles.
    pub fn set(&mut self, coords: Coord2, value: Tile) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if !is_valid_tile(value) {
            return Err(GameError::InvalidTile { coords, value });
        }
        self.fill(coords, value);
        Ok(())
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 0)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }

    pub fn tile_count(&self) -> CellCount {
        self.cells.iter().filter(|&&value| value != 0).count() as CellCount
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.cells.iter().any(|&cell| cell == value)
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn total(&self) -> Score {
        self.cells.iter().map(|&value| Score::from(value)).sum()
    }

    /// Whether any two horizontally or vertically adjacent tiles could merge.
    pub fn has_mergeable_neighbors(&self) -> bool {
        let (rows, cols) = self.cells.dim();
        (0..rows).any(|row| {
            (0..cols).any(|col| {
                let value = self.cells[[row, col]];
                (col + 1 < cols && can_merge(value, self.cells[[row, col + 1]]))
                    || (row + 1 < rows && can_merge(value, self.cells[[row + 1, col]]))
            })
        })
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<Tile>> for Grid {
    type Error = GameError;

    fn try_from(cells: Array2<Tile>) -> Result<Self> {
        Self::from_array(cells)
    }
}

impl From<Grid> for Array2<Tile> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4).unwrap();

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.tile_count(), 0);
        assert_eq!(grid.empty_cells().len(), 16);
        assert!(!grid.is_full());
    }

    #[test]
    fn rejects_zero_size() {
        assert_eq!(Grid::new(0), Err(GameError::InvalidSize));
        assert_eq!(
            Grid::from_array(Array2::zeros((0, 0))),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn rejects_non_square() {
        assert_eq!(
            Grid::from_array(Array2::zeros((2, 3))),
            Err(GameError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn rejects_non_power_of_two() {
        assert_eq!(
            Grid::from_rows([[2, 0], [0, 6]]),
            Err(GameError::InvalidTile {
                coords: (1, 1),
                value: 6
            })
        );
        assert_eq!(
            Grid::from_rows([[1, 0], [0, 0]]),
            Err(GameError::InvalidTile {
                coords: (0, 0),
                value: 1
            })
        );
    }

    #[test]
    fn set_validates_coords_and_value() {
        let mut grid = Grid::new(2).unwrap();

        assert_eq!(grid.set((2, 0), 2), Err(GameError::InvalidCoords));
        assert_eq!(
            grid.set((0, 1), 5),
            Err(GameError::InvalidTile {
                coords: (0, 1),
                value: 5
            })
        );
        grid.set((0, 1), 4).unwrap();
        assert_eq!(grid[(0, 1)], 4);
        assert_eq!(grid.get((0, 1)), Some(4));
        assert_eq!(grid.get((5, 5)), None);
    }

    #[test]
    fn mergeable_neighbors_are_found_in_rows_and_columns() {
        assert!(!Grid::from_rows([[2, 4], [4, 2]]).unwrap().has_mergeable_neighbors());
        assert!(Grid::from_rows([[2, 2], [4, 8]]).unwrap().has_mergeable_neighbors());
        assert!(Grid::from_rows([[2, 4], [2, 8]]).unwrap().has_mergeable_neighbors());
        assert!(!Grid::from_rows([[0, 0], [0, 0]]).unwrap().has_mergeable_neighbors());
        assert!(
            !Grid::from_rows([[MAX_TILE, MAX_TILE], [2, 4]])
                .unwrap()
                .has_mergeable_neighbors()
        );
    }

    #[test]
    fn deserialize_goes_through_validation() {
        let grid = Grid::from_rows([[2, 0], [0, 4]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        let bad = json.replace('4', "3");
        assert!(serde_json::from_str::<Grid>(&bad).is_err());
    }
}
