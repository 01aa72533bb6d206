//! Cube module - the six-face model
//!
//! The cube owns one [`FaceGrid`] per [`Face`], all the same size. Grids are
//! only handed out by shared reference; slices are replaced through
//! [`Cube::set_row`] and [`Cube::set_column`], which validate before writing.

use crate::error::CubeError;
use crate::grid::FaceGrid;
use crate::palette::Palette;
use crate::types::{
    Axis, Color, Face, Orientation, DEFAULT_HEIGHT, DEFAULT_WIDTH, FACE_COUNT, PALETTE_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    width: usize,
    height: usize,
    palette: Palette,
    /// Indexed by `Face::index()`
    faces: [FaceGrid; FACE_COUNT],
}

impl Cube {
    /// Build a cube in its initial state: face k is filled with palette color k.
    pub fn create(width: usize, height: usize, palette: Palette) -> Result<Self, CubeError> {
        if width < 1 || height < 1 {
            return Err(CubeError::InvalidDimension { width, height });
        }

        Ok(Self::initial(width, height, palette))
    }

    /// Solved cube for dimensions already known to be valid.
    fn initial(width: usize, height: usize, palette: Palette) -> Self {
        let faces =
            Face::ALL.map(|face| FaceGrid::filled(width, height, Color(face.index() as u8)));

        Self {
            width,
            height,
            palette,
            faces,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    /// The grid the viewer is looking at
    pub fn current_face_grid(&self, orientation: Orientation) -> &FaceGrid {
        self.face(orientation.facing())
    }

    /// Check a slice index against the grid without touching any cells.
    pub fn check_index(&self, axis: Axis, index: usize) -> Result<(), CubeError> {
        let len = match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        };
        if index >= len {
            return Err(CubeError::IndexOutOfRange { axis, index, len });
        }
        Ok(())
    }

    /// Copy out one slice of a face
    pub fn get_slice(&self, face: Face, axis: Axis, index: usize) -> Result<Vec<Color>, CubeError> {
        self.check_index(axis, index)?;
        let grid = self.face(face);
        let slice = match axis {
            Axis::Row => grid.row(index).map(<[Color]>::to_vec),
            Axis::Column => grid.column(index).map(|c| c.collect()),
        };
        slice.ok_or(CubeError::IndexOutOfRange {
            axis,
            index,
            len: grid.slice_count(axis),
        })
    }

    /// Replace one slice of a face. Nothing is written on error.
    pub fn set_slice(
        &mut self,
        face: Face,
        axis: Axis,
        index: usize,
        values: &[Color],
    ) -> Result<(), CubeError> {
        self.check_index(axis, index)?;
        let grid = &mut self.faces[face.index()];
        let expected = grid.slice_len(axis);
        if values.len() != expected {
            return Err(CubeError::SliceLength {
                axis,
                expected,
                actual: values.len(),
            });
        }
        grid.write_slice(axis, index, values);
        Ok(())
    }

    pub fn get_row(&self, face: Face, row: usize) -> Result<Vec<Color>, CubeError> {
        self.get_slice(face, Axis::Row, row)
    }

    pub fn set_row(&mut self, face: Face, row: usize, values: &[Color]) -> Result<(), CubeError> {
        self.set_slice(face, Axis::Row, row, values)
    }

    pub fn get_column(&self, face: Face, col: usize) -> Result<Vec<Color>, CubeError> {
        self.get_slice(face, Axis::Column, col)
    }

    pub fn set_column(&mut self, face: Face, col: usize, values: &[Color]) -> Result<(), CubeError> {
        self.set_slice(face, Axis::Column, col, values)
    }

    /// Number of cells of each palette color across all faces
    pub fn color_counts(&self) -> [usize; PALETTE_SIZE] {
        let mut counts = [0; PALETTE_SIZE];
        for grid in &self.faces {
            for cell in grid.cells() {
                if let Some(n) = counts.get_mut(cell.index()) {
                    *n += 1;
                }
            }
        }
        counts
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::initial(DEFAULT_WIDTH, DEFAULT_HEIGHT, Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_create() {
        let created = Cube::create(DEFAULT_WIDTH, DEFAULT_HEIGHT, Palette::default()).unwrap();
        assert_eq!(Cube::default(), created);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Cube::create(0, 3, Palette::default()),
            Err(CubeError::InvalidDimension { width: 0, height: 3 })
        );
        assert_eq!(
            Cube::create(3, 0, Palette::default()),
            Err(CubeError::InvalidDimension { width: 3, height: 0 })
        );
    }

    #[test]
    fn slice_length_mismatch_leaves_face_untouched() {
        let mut cube = Cube::default();
        let before = cube.clone();
        let err = cube.set_row(Face::Front, 0, &[Color(0); 2]).unwrap_err();
        assert_eq!(
            err,
            CubeError::SliceLength {
                axis: Axis::Row,
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(cube, before);
    }

    #[test]
    fn color_counts_start_equal() {
        let cube = Cube::create(4, 2, Palette::default()).unwrap();
        assert_eq!(cube.color_counts(), [8; PALETTE_SIZE]);
    }
}
