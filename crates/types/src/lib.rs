//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (cube model, rotation engine, terminal rendering).
//!
//! # Cube Layout
//!
//! A cube has six faces, always declared in this order:
//!
//! | Index | Face | Default color |
//! |-------|------|---------------|
//! | 0 | `top` | white |
//! | 1 | `front` | red |
//! | 2 | `right` | blue |
//! | 3 | `back` | orange |
//! | 4 | `left` | green |
//! | 5 | `bottom` | yellow |
//!
//! Each face is a `height` x `width` grid (3x3 by default). Rows are indexed top
//! to bottom, columns left to right, in the face's own stored frame.
//!
//! # Examples
//!
//! ```
//! use flat_cube_types::{ColumnDirection, CubeAction, Face, Orientation, DEFAULT_WIDTH};
//!
//! // Parse a face (case-insensitive)
//! assert_eq!(Face::from_str("Front"), Some(Face::Front));
//! assert_eq!(Face::Back.index(), 3);
//!
//! // Directions reverse
//! assert_eq!(ColumnDirection::Up.reverse(), ColumnDirection::Down);
//!
//! // The default orientation looks at the front face
//! assert_eq!(Orientation::default().facing(), Face::Front);
//!
//! // Parse a controller action
//! assert_eq!(CubeAction::from_str("lookAtTop"), Some(CubeAction::LookAt(Face::Top)));
//!
//! assert_eq!(DEFAULT_WIDTH, 3);
//! ```

/// Number of faces on a cube
pub const FACE_COUNT: usize = 6;

/// Number of colors in a palette (one per face)
pub const PALETTE_SIZE: usize = 6;

/// Default face width in cells
pub const DEFAULT_WIDTH: usize = 3;

/// Default face height in cells
pub const DEFAULT_HEIGHT: usize = 3;

/// Largest face width or height the terminal front end accepts
pub const MAX_DIMENSION: usize = 32;

/// Default palette, assigned to faces in declaration order.
pub const DEFAULT_PALETTE: [&str; PALETTE_SIZE] =
    ["white", "red", "blue", "orange", "green", "yellow"];

/// Number of random twists applied by a scramble.
pub const SCRAMBLE_MOVES: u32 = 25;

/// One of the six faces of the cube
///
/// The set is closed: faces are never added, removed or renamed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Top,
    Front,
    Right,
    Back,
    Left,
    Bottom,
}

impl Face {
    /// All faces in declaration order.
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Top,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Bottom,
    ];

    /// Position in declaration order (0..6)
    pub fn index(self) -> usize {
        match self {
            Face::Top => 0,
            Face::Front => 1,
            Face::Right => 2,
            Face::Back => 3,
            Face::Left => 4,
            Face::Bottom => 5,
        }
    }

    /// Face at a declaration-order index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse face from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_cube_types::Face;
    ///
    /// assert_eq!(Face::from_str("top"), Some(Face::Top));
    /// assert_eq!(Face::from_str("BOTTOM"), Some(Face::Bottom));
    /// assert_eq!(Face::from_str("middle"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top" => Some(Face::Top),
            "front" => Some(Face::Front),
            "right" => Some(Face::Right),
            "back" => Some(Face::Back),
            "left" => Some(Face::Left),
            "bottom" => Some(Face::Bottom),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Left => "left",
            Face::Bottom => "bottom",
        }
    }
}

/// A cell color: an index into the cube's six-entry palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub u8);

impl Color {
    /// Palette slot of this color
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Slice axis on a face grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

/// Rotational sense of a row twist, as seen on the viewed face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowDirection {
    Left,
    Right,
}

impl RowDirection {
    pub fn reverse(self) -> Self {
        match self {
            RowDirection::Left => RowDirection::Right,
            RowDirection::Right => RowDirection::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowDirection::Left => "left",
            RowDirection::Right => "right",
        }
    }
}

/// Rotational sense of a column twist, as seen on the viewed face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnDirection {
    Up,
    Down,
}

impl ColumnDirection {
    pub fn reverse(self) -> Self {
        match self {
            ColumnDirection::Up => ColumnDirection::Down,
            ColumnDirection::Down => ColumnDirection::Up,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnDirection::Up => "up",
            ColumnDirection::Down => "down",
        }
    }
}

/// A single row or column twist request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Twist {
    Row {
        index: usize,
        direction: RowDirection,
    },
    Column {
        index: usize,
        direction: ColumnDirection,
    },
}

impl Twist {
    pub fn axis(&self) -> Axis {
        match self {
            Twist::Row { .. } => Axis::Row,
            Twist::Column { .. } => Axis::Column,
        }
    }

    pub fn index(&self) -> usize {
        match *self {
            Twist::Row { index, .. } | Twist::Column { index, .. } => index,
        }
    }

    /// The twist that undoes this one
    pub fn reverse(self) -> Self {
        match self {
            Twist::Row { index, direction } => Twist::Row {
                index,
                direction: direction.reverse(),
            },
            Twist::Column { index, direction } => Twist::Column {
                index,
                direction: direction.reverse(),
            },
        }
    }
}

/// Which face is currently "front-facing" for rotations and display
///
/// The orientation is a plain value passed into every rotation call; there is
/// no ambient view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation(Face);

impl Orientation {
    pub fn new(facing: Face) -> Self {
        Self(facing)
    }

    pub fn facing(&self) -> Face {
        self.0
    }

    /// Look at a different face
    pub fn look_at(&mut self, face: Face) {
        self.0 = face;
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self(Face::Front)
    }
}

/// Controller actions that modify the session (cursor, view or cube)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeAction {
    /// Move the cursor one row up
    CursorUp,
    /// Move the cursor one row down
    CursorDown,
    /// Move the cursor one column left
    CursorLeft,
    /// Move the cursor one column right
    CursorRight,
    /// Twist the cursor column upward
    RotateUp,
    /// Twist the cursor column downward
    RotateDown,
    /// Twist the cursor row to the left
    RotateLeft,
    /// Twist the cursor row to the right
    RotateRight,
    /// Turn the view to the face above the viewed one
    LookUp,
    /// Turn the view to the face below the viewed one
    LookDown,
    /// Turn the view to the face left of the viewed one
    LookLeft,
    /// Turn the view to the face right of the viewed one
    LookRight,
    /// Look directly at a face
    LookAt(Face),
    /// Apply a run of random twists
    Scramble,
    /// Restore the initial cube and view
    Reset,
}

impl CubeAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_cube_types::{CubeAction, Face};
    ///
    /// assert_eq!(CubeAction::from_str("rotateUp"), Some(CubeAction::RotateUp));
    /// assert_eq!(CubeAction::from_str("lookatback"), Some(CubeAction::LookAt(Face::Back)));
    /// assert_eq!(CubeAction::from_str("spin"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(face) = lower.strip_prefix("lookat") {
            return Face::from_str(face).map(CubeAction::LookAt);
        }
        match lower.as_str() {
            "cursorup" => Some(CubeAction::CursorUp),
            "cursordown" => Some(CubeAction::CursorDown),
            "cursorleft" => Some(CubeAction::CursorLeft),
            "cursorright" => Some(CubeAction::CursorRight),
            "rotateup" => Some(CubeAction::RotateUp),
            "rotatedown" => Some(CubeAction::RotateDown),
            "rotateleft" => Some(CubeAction::RotateLeft),
            "rotateright" => Some(CubeAction::RotateRight),
            "lookup" => Some(CubeAction::LookUp),
            "lookdown" => Some(CubeAction::LookDown),
            "lookleft" => Some(CubeAction::LookLeft),
            "lookright" => Some(CubeAction::LookRight),
            "scramble" => Some(CubeAction::Scramble),
            "reset" => Some(CubeAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            CubeAction::CursorUp => "cursorUp",
            CubeAction::CursorDown => "cursorDown",
            CubeAction::CursorLeft => "cursorLeft",
            CubeAction::CursorRight => "cursorRight",
            CubeAction::RotateUp => "rotateUp",
            CubeAction::RotateDown => "rotateDown",
            CubeAction::RotateLeft => "rotateLeft",
            CubeAction::RotateRight => "rotateRight",
            CubeAction::LookUp => "lookUp",
            CubeAction::LookDown => "lookDown",
            CubeAction::LookLeft => "lookLeft",
            CubeAction::LookRight => "lookRight",
            CubeAction::LookAt(Face::Top) => "lookAtTop",
            CubeAction::LookAt(Face::Front) => "lookAtFront",
            CubeAction::LookAt(Face::Right) => "lookAtRight",
            CubeAction::LookAt(Face::Back) => "lookAtBack",
            CubeAction::LookAt(Face::Left) => "lookAtLeft",
            CubeAction::LookAt(Face::Bottom) => "lookAtBottom",
            CubeAction::Scramble => "scramble",
            CubeAction::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_index_matches_declaration_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), Some(*face));
        }
        assert_eq!(Face::from_index(FACE_COUNT), None);
    }

    #[test]
    fn face_names_parse_back() {
        for face in Face::ALL {
            assert_eq!(Face::from_str(face.as_str()), Some(face));
        }
    }

    #[test]
    fn every_action_name_parses_back() {
        let mut actions = vec![
            CubeAction::CursorUp,
            CubeAction::CursorDown,
            CubeAction::CursorLeft,
            CubeAction::CursorRight,
            CubeAction::RotateUp,
            CubeAction::RotateDown,
            CubeAction::RotateLeft,
            CubeAction::RotateRight,
            CubeAction::LookUp,
            CubeAction::LookDown,
            CubeAction::LookLeft,
            CubeAction::LookRight,
            CubeAction::Scramble,
            CubeAction::Reset,
        ];
        actions.extend(Face::ALL.iter().map(|&f| CubeAction::LookAt(f)));

        for action in actions {
            assert_eq!(CubeAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn twist_reverse_flips_direction_only() {
        let t = Twist::Column {
            index: 2,
            direction: ColumnDirection::Up,
        };
        assert_eq!(t.reverse().index(), 2);
        assert_eq!(t.reverse().axis(), Axis::Column);
        assert_eq!(t.reverse().reverse(), t);
    }

    #[test]
    fn look_at_changes_facing() {
        let mut o = Orientation::default();
        o.look_at(Face::Left);
        assert_eq!(o.facing(), Face::Left);
    }
}
