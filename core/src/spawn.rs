use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Chance that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub coords: Coord2,
    pub value: Tile,
}

pub trait TileSpawner {
    /// Places one tile in an empty cell of `grid`. Returns `None`, leaving the
    /// grid untouched, when there is no empty cell.
    fn spawn(&mut self, grid: &mut Grid) -> Option<SpawnedTile>;
}

/// Picks an empty cell uniformly at random and fills it with a 2 (90%) or a 4
/// (10%).
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    rng: SmallRng,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileSpawner for RandomSpawner {
    fn spawn(&mut self, grid: &mut Grid) -> Option<SpawnedTile> {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            log::debug!("Grid is full, nothing spawned");
            return None;
        }

        let coords = empty[self.rng.random_range(0..empty.len())];
        let value = if self.rng.random_bool(SPAWN_TWO_PROBABILITY) {
            2
        } else {
            4
        };
        grid.fill(coords, value);

        log::trace!("spawned {} at {:?}", value, coords);
        Some(SpawnedTile { coords, value })
    }
}

/// Builds an empty `size`x`size` grid and spawns its two starting tiles.
pub fn initialize<S: TileSpawner + ?Sized>(size: Coord, spawner: &mut S) -> Result<Grid> {
    let mut grid = Grid::new(size)?;
    spawner.spawn(&mut grid);
    spawner.spawn(&mut grid);
    Ok(grid)
}
