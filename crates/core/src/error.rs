//! Error type for cube construction and slice access.

use thiserror::Error;

use crate::types::Axis;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Width or height below 1.
    #[error("invalid dimension {width}x{height}: both must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    /// Palette with fewer than six distinct colors.
    #[error("palette needs 6 distinct colors, got {distinct}")]
    InvalidPalette { distinct: usize },

    /// Row or column index outside the face grid.
    #[error("{} index {index} out of range 0..{len}", axis.as_str())]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },

    /// Replacement slice of the wrong length.
    #[error("{} slice has {actual} cells, expected {expected}", axis.as_str())]
    SliceLength {
        axis: Axis,
        expected: usize,
        actual: usize,
    },
}

impl CubeError {
    pub fn code(&self) -> &'static str {
        match self {
            CubeError::InvalidDimension { .. } => "invalid_dimension",
            CubeError::InvalidPalette { .. } => "invalid_palette",
            CubeError::IndexOutOfRange { .. } => "index_out_of_range",
            CubeError::SliceLength { .. } => "slice_length",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_axis() {
        let err = CubeError::IndexOutOfRange {
            axis: Axis::Column,
            index: 3,
            len: 3,
        };
        assert_eq!(err.to_string(), "column index 3 out of range 0..3");
        assert_eq!(err.code(), "index_out_of_range");
    }
}
