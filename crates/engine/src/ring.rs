//! Ring table - which faces exchange slices for each viewing orientation
//!
//! Every orientation has one row of neighbors. A column twist cycles
//! `[above, facing, below, opposite]`; a row twist cycles
//! `[facing, left, opposite, right]`. Faces keep their own stored row/column
//! frame and the slice index is the same on all four faces of a ring, so
//! non-square grids stay valid in every orientation.

use crate::types::{Axis, Face, Orientation, FACE_COUNT};

/// The faces surrounding the viewed face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbors {
    pub facing: Face,
    pub above: Face,
    pub below: Face,
    pub left: Face,
    pub right: Face,
    pub opposite: Face,
}

const fn view(
    facing: Face,
    above: Face,
    below: Face,
    left: Face,
    right: Face,
    opposite: Face,
) -> Neighbors {
    Neighbors {
        facing,
        above,
        below,
        left,
        right,
        opposite,
    }
}

/// Indexed by `Face::index()` of the viewed face.
const VIEWS: [Neighbors; FACE_COUNT] = {
    use Face::*;
    [
        view(Top, Back, Front, Left, Right, Bottom),
        view(Front, Top, Bottom, Left, Right, Back),
        view(Right, Top, Bottom, Front, Back, Left),
        view(Back, Top, Bottom, Right, Left, Front),
        view(Left, Top, Bottom, Back, Front, Right),
        view(Bottom, Front, Back, Left, Right, Top),
    ]
};

/// Neighbors of the face an orientation looks at
pub fn neighbors(orientation: Orientation) -> Neighbors {
    VIEWS[orientation.facing().index()]
}

impl Neighbors {
    /// The four faces that exchange a slice along `axis`, in cycle order
    pub fn ring(&self, axis: Axis) -> [Face; 4] {
        match axis {
            Axis::Column => [self.above, self.facing, self.below, self.opposite],
            Axis::Row => [self.facing, self.left, self.opposite, self.right],
        }
    }

    /// The two faces a twist along `axis` never touches
    pub fn untouched(&self, axis: Axis) -> [Face; 2] {
        match axis {
            Axis::Column => [self.left, self.right],
            Axis::Row => [self.above, self.below],
        }
    }
}
