use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// A tile reached [`WIN_TILE`]. Play may continue.
    Won,
    /// No empty cell and no neighbors that could merge.
    Lost,
}

/// Classifies `grid`. Won takes precedence over Lost.
pub fn evaluate(grid: &Grid) -> GameStatus {
    if grid.contains(WIN_TILE) {
        GameStatus::Won
    } else if grid.is_full() && !grid.has_mergeable_neighbors() {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_grid_without_pairs_is_lost() {
        let grid = Grid::from_rows([[2, 4], [4, 2]]).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::Lost);
    }

    #[test]
    fn full_grid_with_pairs_is_in_progress() {
        let grid = Grid::from_rows([[2, 2], [4, 4]]).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::InProgress);
    }

    #[test]
    fn grid_with_empty_cell_is_in_progress() {
        let grid = Grid::from_rows([[2, 4], [8, 0]]).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::InProgress);
    }

    #[test]
    fn win_tile_wins_regardless_of_deadlock() {
        let open = Grid::from_rows([[0, 0, 0], [0, 2048, 0], [0, 0, 0]]).unwrap();
        assert_eq!(evaluate(&open), GameStatus::Won);

        let stuck = Grid::from_rows([[2048, 4], [4, 2]]).unwrap();
        assert_eq!(evaluate(&stuck), GameStatus::Won);
    }

    #[test]
    fn full_grid_of_unmergeable_largest_tiles_is_lost() {
        let grid = Grid::from_rows([[MAX_TILE, MAX_TILE], [2, 4]]).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::Lost);
    }

    #[test]
    fn larger_tiles_do_not_count_as_win() {
        let grid = Grid::from_rows([[4096, 0], [0, 0]]).unwrap();
        assert_eq!(evaluate(&grid), GameStatus::InProgress);
    }
}
