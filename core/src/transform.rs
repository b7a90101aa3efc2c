//! Geometric re-orientation of grids.
//!
//! Every move is solved by sliding rows to the left. A direction picks a pair
//! of transforms: `normalize` turns the grid so the requested direction points
//! left, `restore` turns the slid result back.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::Direction;

/// Horizontal mirror: `Y[i][j] = X[i][n-1-j]`.
pub fn reverse_rows<T: Clone>(x: ArrayView2<'_, T>) -> Array2<T> {
    let (rows, cols) = x.dim();
    Array2::from_shape_fn((rows, cols), |(i, j)| x[[i, cols - 1 - j]].clone())
}

/// Quarter turn: `Y[i][j] = X[n-1-j][i]`.
pub fn quarter_rotate<T: Clone>(x: ArrayView2<'_, T>) -> Array2<T> {
    let (rows, cols) = x.dim();
    Array2::from_shape_fn((cols, rows), |(i, j)| x[[rows - 1 - j, i]].clone())
}

/// `Y[i][j] = X[j][i]`.
pub fn transpose<T: Clone>(x: ArrayView2<'_, T>) -> Array2<T> {
    let (rows, cols) = x.dim();
    Array2::from_shape_fn((cols, rows), |(i, j)| x[[j, i]].clone())
}

/// One step of a transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridOp {
    ReverseRows,
    QuarterRotate,
    Transpose,
}

impl GridOp {
    pub fn apply<T: Clone>(self, x: ArrayView2<'_, T>) -> Array2<T> {
        match self {
            Self::ReverseRows => reverse_rows(x),
            Self::QuarterRotate => quarter_rotate(x),
            Self::Transpose => transpose(x),
        }
    }
}

/// Applies `ops` left to right. No ops is the identity.
pub fn apply_ops<T: Clone>(ops: &[GridOp], x: ArrayView2<'_, T>) -> Array2<T> {
    ops.iter().fold(x.to_owned(), |acc, op| op.apply(acc.view()))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransformPair {
    pub normalize: &'static [GridOp],
    pub restore: &'static [GridOp],
}

impl TransformPair {
    const IDENTITY: Self = Self {
        normalize: &[],
        restore: &[],
    };

    const MIRROR: Self = Self {
        normalize: &[GridOp::ReverseRows],
        restore: &[GridOp::ReverseRows],
    };
}

/// Which direction table to use when orienting grids.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationTable {
    /// Up normalizes with a quarter turn and restores with a transpose, Down
    /// normalizes with a quarter turn then a mirror and restores with a quarter
    /// turn. Restore does not undo normalize for Up and Down.
    #[default]
    Reference,
    /// Restore is the exact inverse of normalize for every direction.
    Inverse,
}

impl OrientationTable {
    pub fn pair(self, direction: Direction) -> TransformPair {
        use Direction::*;
        use GridOp::*;

        match (self, direction) {
            (_, Left) => TransformPair::IDENTITY,
            (_, Right) => TransformPair::MIRROR,
            (Self::Reference, Up) => TransformPair {
                normalize: &[QuarterRotate],
                restore: &[Transpose],
            },
            (Self::Reference, Down) => TransformPair {
                normalize: &[QuarterRotate, ReverseRows],
                restore: &[QuarterRotate],
            },
            (Self::Inverse, Up) => TransformPair {
                normalize: &[Transpose],
                restore: &[Transpose],
            },
            (Self::Inverse, Down) => TransformPair {
                normalize: &[Transpose, ReverseRows],
                restore: &[ReverseRows, Transpose],
            },
        }
    }
}
