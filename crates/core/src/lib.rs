//! Cube model - pure, deterministic, and testable
//!
//! This crate owns the state of a flat puzzle cube: six named faces, each a
//! `height` x `width` grid of palette colors. It has **zero dependencies** on
//! rendering or input, so any front end (terminal, GUI, headless) can drive it.
//!
//! # Module Structure
//!
//! - [`cube`]: the six-face aggregate with bounds-checked row/column access
//! - [`grid`]: a single face stored as a flat row-major array
//! - [`palette`]: the six color names cells index into
//! - [`error`]: construction and slice-access errors
//! - [`rng`]: deterministic LCG used for scrambles
//!
//! # Invariants
//!
//! - Every face has the same width and height (both at least 1)
//! - Cells are only replaced a whole row or column at a time, through
//!   validated calls; a failed call writes nothing
//! - Rotations built on top of this model only move colors, so
//!   [`Cube::color_counts`] is constant for the life of a cube
//!
//! # Example
//!
//! ```
//! use flat_cube_core::{Cube, Palette};
//! use flat_cube_types::{Color, Face};
//!
//! let mut cube = Cube::create(3, 3, Palette::default()).unwrap();
//! assert_eq!(cube.get_row(Face::Front, 0).unwrap(), vec![Color(1); 3]);
//!
//! cube.set_column(Face::Front, 2, &[Color(5); 3]).unwrap();
//! assert_eq!(cube.get_row(Face::Front, 0).unwrap(), vec![Color(1), Color(1), Color(5)]);
//!
//! assert!(cube.get_row(Face::Front, 3).is_err());
//! ```

pub mod cube;
pub mod error;
pub mod grid;
pub mod palette;
pub mod rng;

pub use flat_cube_types as types;

// Re-export commonly used types for convenience
pub use cube::Cube;
pub use error::CubeError;
pub use grid::FaceGrid;
pub use palette::Palette;
pub use rng::SimpleRng;
