use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What counts as a move that changed the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeRule {
    /// Only a merge marks the move as changed. Tiles that merely slide into
    /// empty cells do not.
    #[default]
    MergeOnly,
    /// A merge or any difference between the grid before and after the move.
    AnyTileMoved,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveRules {
    pub orientation: OrientationTable,
    pub change: ChangeRule,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub changed: bool,
    pub score_gained: Score,
    pub merges: u32,
}

/// Resolves `direction` on `grid` with the default rules.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    apply_move_with(grid, direction, &MoveRules::default())
}

pub fn apply_move_with(grid: &Grid, direction: Direction, rules: &MoveRules) -> MoveOutcome {
    let pair = rules.orientation.pair(direction);
    let mut oriented = apply_ops(pair.normalize, grid.cells());

    let mut score_gained = 0;
    let mut merges = 0;
    for mut row in oriented.rows_mut() {
        let slid = slide_merge_left(row.view());
        row.assign(&slid.tiles);
        score_gained += slid.score;
        merges += slid.merges;
    }

    let restored = Grid::from_array_unchecked(apply_ops(pair.restore, oriented.view()));
    let changed = match rules.change {
        ChangeRule::MergeOnly => merges > 0,
        ChangeRule::AnyTileMoved => merges > 0 || restored != *grid,
    };

    log::trace!(
        "move {:?}: {} merges, +{} points, changed: {}",
        direction,
        merges,
        score_gained,
        changed
    );

    MoveOutcome {
        grid: restored,
        changed,
        score_gained,
        merges,
    }
}

/// Directions whose move would report a change under `rules`.
pub fn available_moves(grid: &Grid, rules: &MoveRules) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| apply_move_with(grid, direction, rules).changed)
        .collect()
}

pub fn has_available_move(grid: &Grid, rules: &MoveRules) -> bool {
    Direction::ALL
        .into_iter()
        .any(|direction| apply_move_with(grid, direction, rules).changed)
}
