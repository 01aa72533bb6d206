//! Terminal input module (controller-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events, which it maps into [`crate::types::CubeAction`].
//! Every key press is one discrete action; there is no auto-repeat handling.

pub mod map;

pub use flat_cube_types as types;

pub use map::{handle_key_event, should_quit};
