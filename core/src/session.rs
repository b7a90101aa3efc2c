use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything that happened while resolving one move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub direction: Direction,
    pub changed: bool,
    pub score_gained: Score,
    pub merges: u32,
    pub spawned: Option<SpawnedTile>,
    pub status: GameStatus,
    /// Set only on the move that first reaches [`GameStatus::Won`].
    pub first_win: bool,
}

/// State of one game: the grid, the running score and the spawner feeding new
/// tiles. Moves are accepted in any status, win and loss are only reported.
#[derive(Clone, Debug)]
pub struct GameSession<S = RandomSpawner> {
    config: GameConfig,
    grid: Grid,
    score: Saturating<Score>,
    moves: Saturating<u32>,
    status: GameStatus,
    won: bool,
    spawner: S,
}

impl GameSession<RandomSpawner> {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_spawner(config, RandomSpawner::new(seed))
    }
}

impl<S: TileSpawner> GameSession<S> {
    pub fn with_spawner(config: GameConfig, mut spawner: S) -> Result<Self> {
        let grid = initialize(config.size, &mut spawner)?;
        Ok(Self::assemble(config, grid, spawner))
    }

    /// Resumes from an existing grid without spawning.
    pub fn from_grid(config: GameConfig, grid: Grid, spawner: S) -> Result<Self> {
        if grid.size() != config.size {
            return Err(GameError::SizeMismatch {
                expected: config.size,
                actual: grid.size(),
            });
        }
        Ok(Self::assemble(config, grid, spawner))
    }

    fn assemble(config: GameConfig, grid: Grid, spawner: S) -> Self {
        let status = evaluate(&grid);
        Self {
            config,
            grid,
            score: Saturating(0),
            moves: Saturating(0),
            status,
            won: status == GameStatus::Won,
            spawner,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of moves applied since the game started, changed or not.
    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        let outcome = apply_move_with(&self.grid, direction, &self.config.rules);
        self.grid = outcome.grid;
        self.score += outcome.score_gained;
        self.moves += 1;

        let spawned = if outcome.changed {
            self.spawner.spawn(&mut self.grid)
        } else {
            None
        };

        self.status = evaluate(&self.grid);
        let first_win = self.status == GameStatus::Won && !self.won;
        if first_win {
            self.won = true;
            log::info!("Reached {} after {} moves", WIN_TILE, self.moves);
        } else if self.status == GameStatus::Lost {
            log::debug!("No moves left, score: {}", self.score);
        }

        MoveReport {
            direction,
            changed: outcome.changed,
            score_gained: outcome.score_gained,
            merges: outcome.merges,
            spawned,
            status: self.status,
            first_win,
        }
    }

    /// Starts over with a fresh grid and a zero score.
    pub fn restart(&mut self) -> Result<()> {
        let grid = initialize(self.config.size, &mut self.spawner)?;
        self.status = evaluate(&grid);
        self.won = self.status == GameStatus::Won;
        self.grid = grid;
        self.score = Saturating(0);
        self.moves = Saturating(0);
        Ok(())
    }
}
