use ndarray::{Array1, ArrayView1};
use smallvec::SmallVec;

use crate::{Score, Tile, can_merge};

/// Result of collapsing a single row toward its start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSlide {
    pub tiles: Array1<Tile>,
    pub score: Score,
    pub merges: u32,
}

impl RowSlide {
    pub const fn merged(&self) -> bool {
        self.merges > 0
    }
}

/// Compacts `row` toward index 0 and merges equal neighbors in one pass.
///
/// The scan index always advances by one, so a tile produced by a merge is not
/// compared again: `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, never `[8, 0, 0, 0]`.
pub fn slide_merge_left(row: ArrayView1<'_, Tile>) -> RowSlide {
    let mut packed: SmallVec<[Tile; 8]> =
        row.iter().copied().filter(|&tile| tile != 0).collect();
    let mut score = 0;
    let mut merges = 0;

    let mut i = 0;
    while i + 1 < packed.len() {
        if can_merge(packed[i], packed[i + 1]) {
            packed[i] *= 2;
            score += Score::from(packed[i]);
            merges += 1;
            packed.remove(i + 1);
        }
        i += 1;
    }

    let tiles = packed
        .into_iter()
        .chain(core::iter::repeat(0))
        .take(row.len())
        .collect();

    RowSlide {
        tiles,
        score,
        merges,
    }
}
