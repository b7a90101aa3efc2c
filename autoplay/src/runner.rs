use clap::ValueEnum;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::Serialize;
use std::fmt;
use tilemerge_core::*;

/// How the player picks the next direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Uniformly random direction each move
    Random,
    /// Up, Down, Left, Right, repeated
    Cycle,
}

#[derive(Clone, Debug)]
pub struct Player {
    strategy: Strategy,
    rng: SmallRng,
    turn: usize,
}

impl Player {
    pub fn new(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            // keep the player's choices independent of the spawner's stream
            rng: SmallRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
            turn: 0,
        }
    }

    pub fn choose(&mut self) -> Direction {
        let index = match self.strategy {
            Strategy::Random => self.rng.random_range(0..Direction::ALL.len()),
            Strategy::Cycle => self.turn % Direction::ALL.len(),
        };
        self.turn += 1;
        Direction::ALL[index]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    Lost,
    /// No direction would change the grid, but it is not lost.
    Stalled,
    MoveLimit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lost => "lost",
            Self::Stalled => "stalled",
            Self::MoveLimit => "move limit",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub seed: u64,
    pub score: Score,
    pub moves: u32,
    pub max_tile: Tile,
    pub status: GameStatus,
    pub end: EndReason,
    /// Move count at which the win tile first appeared.
    pub won_at: Option<u32>,
}

pub fn play_game(
    config: GameConfig,
    seed: u64,
    strategy: Strategy,
    max_moves: u32,
) -> Result<GameSummary> {
    let mut game = GameSession::new(config, seed)?;
    let mut player = Player::new(strategy, seed);
    let mut won_at = None;

    let end = loop {
        if game.status() == GameStatus::Lost {
            break EndReason::Lost;
        }
        if game.moves() >= max_moves {
            break EndReason::MoveLimit;
        }
        if !has_available_move(game.grid(), &config.rules) {
            break EndReason::Stalled;
        }

        let report = game.apply_move(player.choose());
        if report.first_win {
            won_at = Some(game.moves());
        }
    };

    log::debug!(
        "seed {} finished after {} moves ({}), score {}",
        seed,
        game.moves(),
        end,
        game.score()
    );

    Ok(GameSummary {
        seed,
        score: game.score(),
        moves: game.moves(),
        max_tile: game.grid().max_tile(),
        status: game.status(),
        end,
        won_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inverse_any_moved() -> GameConfig {
        GameConfig::new(
            4,
            MoveRules {
                orientation: OrientationTable::Inverse,
                change: ChangeRule::AnyTileMoved,
            },
        )
        .unwrap()
    }

    #[test]
    fn cycle_visits_every_direction_in_order() {
        let mut player = Player::new(Strategy::Cycle, 0);

        let picked: Vec<_> = (0..5).map(|_| player.choose()).collect();

        assert_eq!(
            picked,
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
                Direction::Up
            ]
        );
    }

    #[test]
    fn same_seed_replays_same_game() {
        let a = play_game(GameConfig::default(), 17, Strategy::Random, 300).unwrap();
        let b = play_game(GameConfig::default(), 17, Strategy::Random, 300).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn move_limit_stops_the_game() {
        let summary = play_game(inverse_any_moved(), 3, Strategy::Random, 5).unwrap();

        assert_eq!(summary.end, EndReason::MoveLimit);
        assert_eq!(summary.moves, 5);
    }

    #[test]
    fn game_ends_without_hitting_a_generous_limit() {
        let summary = play_game(inverse_any_moved(), 8, Strategy::Random, 100_000).unwrap();

        assert_ne!(summary.end, EndReason::MoveLimit);
        assert!(summary.score > 0);
        assert!(summary.max_tile >= 8);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = GameConfig::new_unchecked(0, MoveRules::default());

        assert_eq!(
            play_game(config, 1, Strategy::Cycle, 10),
            Err(GameError::InvalidSize)
        );
    }
}
