//! Flat cube (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, integration
//! tests and benches can use `flat_cube::{core, engine, input, term, types}`.

pub use flat_cube_core as core;
pub use flat_cube_engine as engine;
pub use flat_cube_input as input;
pub use flat_cube_term as term;
pub use flat_cube_types as types;
