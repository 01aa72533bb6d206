//! FaceGrid module - one face of the cube
//!
//! A face is a `height` x `width` grid of colors stored as a flat row-major
//! vector (index = row * width + col), the same layout the renderer walks.

use crate::types::{Axis, Color};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl FaceGrid {
    /// Create a uniformly colored grid. Callers validate the dimensions.
    pub(crate) fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![color; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells along a slice of the given axis
    pub fn slice_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.width,
            Axis::Column => self.height,
        }
    }

    /// Number of slices of the given axis
    pub fn slice_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    /// Get the color at (row, col), `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Borrow a row, `None` if out of bounds
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate a column top to bottom, `None` if out of bounds
    pub fn column(&self, col: usize) -> Option<impl Iterator<Item = Color> + '_> {
        if col >= self.width {
            return None;
        }
        Some(self.cells.iter().skip(col).step_by(self.width).copied())
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Overwrite one slice. Index and length are checked by the caller.
    pub(crate) fn write_slice(&mut self, axis: Axis, index: usize, values: &[Color]) {
        match axis {
            Axis::Row => {
                let start = index * self.width;
                self.cells[start..start + self.width].copy_from_slice(values);
            }
            Axis::Column => {
                for (row, &value) in values.iter().enumerate() {
                    self.cells[row * self.width + index] = value;
                }
            }
        }
    }

    /// Whether every cell holds the same color
    pub fn is_uniform(&self) -> bool {
        self.cells.windows(2).all(|w| w[0] == w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> FaceGrid {
        let mut grid = FaceGrid::filled(width, height, Color(0));
        for (i, cell) in grid.cells.iter_mut().enumerate() {
            *cell = Color(i as u8);
        }
        grid
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = FaceGrid::filled(4, 2, Color(0));
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 3), Some(3));
        assert_eq!(grid.index(1, 0), Some(4));
        assert_eq!(grid.index(1, 3), Some(7));
        assert_eq!(grid.index(2, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_row_and_column_views() {
        let grid = numbered(3, 2);
        assert_eq!(grid.row(1), Some(&[Color(3), Color(4), Color(5)][..]));
        assert_eq!(grid.row(2), None);

        let col: Vec<Color> = grid.column(2).unwrap().collect();
        assert_eq!(col, vec![Color(2), Color(5)]);
        assert!(grid.column(3).is_none());
    }

    #[test]
    fn test_write_column_touches_only_that_column() {
        let mut grid = numbered(3, 3);
        grid.write_slice(Axis::Column, 1, &[Color(9), Color(9), Color(9)]);

        let rows: Vec<&[Color]> = grid.rows().collect();
        assert_eq!(
            rows,
            vec![
                &[Color(0), Color(9), Color(2)][..],
                &[Color(3), Color(9), Color(5)][..],
                &[Color(6), Color(9), Color(8)][..],
            ]
        );
    }

    #[test]
    fn test_uniform_detection() {
        assert!(FaceGrid::filled(3, 3, Color(2)).is_uniform());
        assert!(!numbered(2, 2).is_uniform());
    }
}
