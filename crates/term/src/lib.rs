//! Terminal renderer for the flat cube.
//!
//! A small rendering layer: [`CubeView`] paints a session into a
//! [`FrameBuffer`] (pure, testable) and [`TerminalRenderer`] flushes frames to
//! the terminal through crossterm.
//!
//! The renderer only reads the model: it calls
//! [`Cube::current_face_grid`](flat_cube_core::Cube::current_face_grid) and the
//! session accessors after the session reports a change.

pub mod colors;
pub mod cube_view;
pub mod fb;
pub mod renderer;

pub use flat_cube_core as core;
pub use flat_cube_engine as engine;
pub use flat_cube_types as types;

pub use colors::rgb_for_name;
pub use cube_view::{legend_text, net_text, CubeView, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_changes, encode_full, TerminalRenderer};
