//! Rotation engine - row and column twists over a [`Cube`](flat_cube_core::Cube)
//!
//! The engine is stateless with respect to the cube: each twist is a function
//! of (cube, orientation, index, direction) and either updates all four faces
//! of its ring or, on a bad index, none of them.
//!
//! # Module Structure
//!
//! - [`ring`]: per-orientation neighbor table that drives every twist
//! - [`rotation`]: [`RotationEngine`] and the slice permutation itself
//! - [`listener`]: "model changed" notification ([`ChangeListener`])
//! - [`scramble`]: seeded random twists
//! - [`session`]: cursor/view controller used by the terminal front end
//!
//! # Example
//!
//! ```
//! use flat_cube_core::Cube;
//! use flat_cube_engine::{ChangeTracker, RotationEngine};
//! use flat_cube_types::{Color, ColumnDirection, Face, Orientation};
//!
//! let mut cube = Cube::default();
//! let mut engine = RotationEngine::with_listener(ChangeTracker::new());
//!
//! engine
//!     .rotate_column(&mut cube, Orientation::default(), 1, ColumnDirection::Up)
//!     .unwrap();
//!
//! // The front face's middle column now holds the old bottom column.
//! assert_eq!(cube.get_column(Face::Front, 1).unwrap(), vec![Color(5); 3]);
//! assert_eq!(engine.listener().changes(), 1);
//! ```

pub mod listener;
pub mod ring;
pub mod rotation;
pub mod scramble;
pub mod session;

pub use flat_cube_core as core;
pub use flat_cube_types as types;

pub use listener::{ChangeEvent, ChangeListener, ChangeTracker, NoopListener};
pub use ring::{neighbors, Neighbors};
pub use rotation::{permute, RotationEngine};
pub use scramble::{random_twist, scramble};
pub use session::CubeSession;
