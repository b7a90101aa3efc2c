#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use grid::*;
pub use session::*;
pub use slide::*;
pub use spawn::*;
pub use status::*;
pub use transform::*;
pub use types::*;

mod engine;
mod error;
mod grid;
mod session;
mod slide;
mod spawn;
mod status;
mod transform;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord,
    pub rules: MoveRules,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, rules: MoveRules) -> Self {
        Self { size, rules }
    }

    pub fn new(size: Coord, rules: MoveRules) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self::new_unchecked(size, rules))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, MoveRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_four_by_four_reference_rules() {
        let config = GameConfig::default();

        assert_eq!(config.size, 4);
        assert_eq!(config.total_cells(), 16);
        assert_eq!(config.rules.orientation, OrientationTable::Reference);
        assert_eq!(config.rules.change, ChangeRule::MergeOnly);
    }

    #[test]
    fn config_rejects_zero_size() {
        assert_eq!(
            GameConfig::new(0, MoveRules::default()),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn config_fills_missing_fields_from_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rules": {"change": "any-tile-moved"}}"#).unwrap();

        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.rules.orientation, OrientationTable::Reference);
        assert_eq!(config.rules.change, ChangeRule::AnyTileMoved);
    }
}
