//! Rotation engine - cyclic row/column twists across four faces
//!
//! A twist picks the ring for the current orientation from the [`ring`]
//! table, copies the four slices out, then writes each face the slice of its
//! neighbor in the ring. Reading everything before the first write is what
//! makes the cycle correct; validating the index before reading is what makes
//! a failed twist leave the cube untouched.
//!
//! [`ring`]: crate::ring

use arrayvec::ArrayVec;
use tracing::debug;

use crate::core::{Cube, CubeError};
use crate::listener::{ChangeEvent, ChangeListener, NoopListener};
use crate::ring::neighbors;
use crate::types::{Color, ColumnDirection, Orientation, RowDirection, Twist};

/// Applies twists to a cube and notifies a listener after each one.
///
/// The engine holds no cube state between calls; every twist is a function of
/// the cube, the orientation, the index and the direction.
#[derive(Debug, Clone, Default)]
pub struct RotationEngine<L = NoopListener> {
    listener: L,
}

impl RotationEngine<NoopListener> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: ChangeListener> RotationEngine<L> {
    pub fn with_listener(listener: L) -> Self {
        Self { listener }
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Twist one row of the viewed face through its left/right neighbors.
    pub fn rotate_row(
        &mut self,
        cube: &mut Cube,
        orientation: Orientation,
        row: usize,
        direction: RowDirection,
    ) -> Result<(), CubeError> {
        self.apply(
            cube,
            orientation,
            Twist::Row {
                index: row,
                direction,
            },
        )
    }

    /// Twist one column of the viewed face through its above/below neighbors.
    pub fn rotate_column(
        &mut self,
        cube: &mut Cube,
        orientation: Orientation,
        col: usize,
        direction: ColumnDirection,
    ) -> Result<(), CubeError> {
        self.apply(
            cube,
            orientation,
            Twist::Column {
                index: col,
                direction,
            },
        )
    }

    pub fn apply(
        &mut self,
        cube: &mut Cube,
        orientation: Orientation,
        twist: Twist,
    ) -> Result<(), CubeError> {
        permute(cube, orientation, twist)?;

        debug!(
            facing = orientation.facing().as_str(),
            axis = twist.axis().as_str(),
            index = twist.index(),
            direction = direction_name(twist),
            "twist applied"
        );

        self.listener.cube_changed(&ChangeEvent { orientation, twist });
        Ok(())
    }
}

/// Offset into the ring of the face each member copies from.
fn source_offset(twist: Twist) -> usize {
    match twist {
        Twist::Column {
            direction: ColumnDirection::Up,
            ..
        }
        | Twist::Row {
            direction: RowDirection::Right,
            ..
        } => 1,
        Twist::Column {
            direction: ColumnDirection::Down,
            ..
        }
        | Twist::Row {
            direction: RowDirection::Left,
            ..
        } => 3,
    }
}

fn direction_name(twist: Twist) -> &'static str {
    match twist {
        Twist::Row { direction, .. } => direction.as_str(),
        Twist::Column { direction, .. } => direction.as_str(),
    }
}

/// Permute the ring slices in place without notifying anyone.
pub fn permute(cube: &mut Cube, orientation: Orientation, twist: Twist) -> Result<(), CubeError> {
    let axis = twist.axis();
    let index = twist.index();
    cube.check_index(axis, index)?;

    let ring = neighbors(orientation).ring(axis);
    let slices: ArrayVec<Vec<Color>, 4> = ring
        .iter()
        .map(|&face| cube.get_slice(face, axis, index))
        .collect::<Result<_, _>>()?;

    let offset = source_offset(twist);
    for (i, &face) in ring.iter().enumerate() {
        // Index is checked and all faces share dimensions, so this cannot fail
        // after the first write.
        cube.set_slice(face, axis, index, &slices[(i + offset) % ring.len()])?;
    }
    Ok(())
}
