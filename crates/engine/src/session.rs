//! Session module - the controller between input and the cube
//!
//! A session owns the cube, the viewing orientation and a cursor on the viewed
//! face. Actions move the cursor, turn the view or twist the slice under the
//! cursor. The renderer reads the session after [`CubeSession::take_dirty`]
//! reports a change.

use tracing::{info, warn};

use crate::core::{Cube, SimpleRng};
use crate::listener::ChangeTracker;
use crate::ring::neighbors;
use crate::rotation::RotationEngine;
use crate::scramble::scramble;
use crate::types::{ColumnDirection, CubeAction, Face, Orientation, RowDirection, SCRAMBLE_MOVES};

#[derive(Debug, Clone)]
pub struct CubeSession {
    cube: Cube,
    /// Cube restored by `Reset`.
    initial: Cube,
    orientation: Orientation,
    cursor_row: usize,
    cursor_col: usize,
    engine: RotationEngine<ChangeTracker>,
    seed: u32,
    rng: SimpleRng,
    /// User twists since the last reset or scramble.
    moves: u32,
    /// Cursor or view changed without a twist.
    view_dirty: bool,
}

impl CubeSession {
    pub fn new(cube: Cube, seed: u32) -> Self {
        Self {
            initial: cube.clone(),
            cube,
            orientation: Orientation::default(),
            cursor_row: 0,
            cursor_col: 0,
            engine: RotationEngine::with_listener(ChangeTracker::new()),
            seed,
            rng: SimpleRng::new(seed),
            moves: 0,
            view_dirty: true,
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cursor position on the viewed face as (row, col)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Total twists the engine has applied, scrambles included
    pub fn total_twists(&self) -> u64 {
        self.engine.listener().changes()
    }

    /// Whether anything visible changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        let cube_changed = self.engine.listener_mut().take_dirty();
        let view_changed = std::mem::take(&mut self.view_dirty);
        cube_changed || view_changed
    }

    /// Apply an action. Returns true if the cube, view or cursor changed.
    pub fn apply_action(&mut self, action: CubeAction) -> bool {
        match action {
            CubeAction::CursorUp => self.move_cursor(-1, 0),
            CubeAction::CursorDown => self.move_cursor(1, 0),
            CubeAction::CursorLeft => self.move_cursor(0, -1),
            CubeAction::CursorRight => self.move_cursor(0, 1),
            CubeAction::RotateUp => self.rotate_column(ColumnDirection::Up),
            CubeAction::RotateDown => self.rotate_column(ColumnDirection::Down),
            CubeAction::RotateLeft => self.rotate_row(RowDirection::Left),
            CubeAction::RotateRight => self.rotate_row(RowDirection::Right),
            CubeAction::LookUp => self.look_at(neighbors(self.orientation).above),
            CubeAction::LookDown => self.look_at(neighbors(self.orientation).below),
            CubeAction::LookLeft => self.look_at(neighbors(self.orientation).left),
            CubeAction::LookRight => self.look_at(neighbors(self.orientation).right),
            CubeAction::LookAt(face) => self.look_at(face),
            CubeAction::Scramble => self.scramble(),
            CubeAction::Reset => self.reset(),
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) -> bool {
        let max_row = self.cube.height() - 1;
        let max_col = self.cube.width() - 1;
        let row = self.cursor_row.saturating_add_signed(d_row).min(max_row);
        let col = self.cursor_col.saturating_add_signed(d_col).min(max_col);
        if (row, col) == (self.cursor_row, self.cursor_col) {
            return false;
        }
        self.cursor_row = row;
        self.cursor_col = col;
        self.view_dirty = true;
        true
    }

    fn rotate_column(&mut self, direction: ColumnDirection) -> bool {
        let result = self.engine.rotate_column(
            &mut self.cube,
            self.orientation,
            self.cursor_col,
            direction,
        );
        self.count_twist(result)
    }

    fn rotate_row(&mut self, direction: RowDirection) -> bool {
        let result =
            self.engine
                .rotate_row(&mut self.cube, self.orientation, self.cursor_row, direction);
        self.count_twist(result)
    }

    fn count_twist(&mut self, result: Result<(), crate::core::CubeError>) -> bool {
        match result {
            Ok(()) => {
                self.moves += 1;
                true
            }
            Err(err) => {
                warn!(code = err.code(), "twist rejected: {err}");
                false
            }
        }
    }

    fn look_at(&mut self, face: Face) -> bool {
        if self.orientation.facing() == face {
            return false;
        }
        self.orientation.look_at(face);
        self.view_dirty = true;
        true
    }

    fn scramble(&mut self) -> bool {
        match scramble(
            &mut self.engine,
            &mut self.cube,
            self.orientation,
            &mut self.rng,
            SCRAMBLE_MOVES,
        ) {
            Ok(_) => {
                self.moves = 0;
                true
            }
            Err(err) => {
                warn!(code = err.code(), "scramble aborted: {err}");
                false
            }
        }
    }

    fn reset(&mut self) -> bool {
        self.cube = self.initial.clone();
        self.orientation = Orientation::default();
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.rng = SimpleRng::new(self.seed);
        self.moves = 0;
        self.view_dirty = true;
        info!(seed = self.seed, "session reset");
        true
    }
}

impl Default for CubeSession {
    fn default() -> Self {
        Self::new(Cube::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn cursor_clamps_to_grid() {
        let mut s = CubeSession::default();
        assert!(!s.apply_action(CubeAction::CursorUp));
        assert!(!s.apply_action(CubeAction::CursorLeft));

        for _ in 0..5 {
            s.apply_action(CubeAction::CursorDown);
            s.apply_action(CubeAction::CursorRight);
        }
        assert_eq!(s.cursor(), (2, 2));
    }

    #[test]
    fn rotate_uses_cursor_slice() {
        let mut s = CubeSession::default();
        s.apply_action(CubeAction::CursorRight);
        assert!(s.apply_action(CubeAction::RotateUp));

        let front = s.cube().face(Face::Front);
        assert_eq!(front.get(0, 1), Some(Color(5)));
        assert_eq!(front.get(0, 0), Some(Color(1)));
        assert_eq!(s.moves(), 1);
    }

    #[test]
    fn dirty_flag_covers_view_and_cube() {
        let mut s = CubeSession::default();
        assert!(s.take_dirty());
        assert!(!s.take_dirty());

        s.apply_action(CubeAction::LookRight);
        assert!(s.take_dirty());

        s.apply_action(CubeAction::RotateLeft);
        assert!(s.take_dirty());
        assert!(!s.take_dirty());
    }

    #[test]
    fn look_around_follows_neighbors() {
        let mut s = CubeSession::default();
        s.apply_action(CubeAction::LookUp);
        assert_eq!(s.orientation().facing(), Face::Top);
        s.apply_action(CubeAction::LookDown);
        assert_eq!(s.orientation().facing(), Face::Front);
        s.apply_action(CubeAction::LookLeft);
        assert_eq!(s.orientation().facing(), Face::Left);
        assert!(!s.apply_action(CubeAction::LookAt(Face::Left)));
    }

    #[test]
    fn reset_restores_everything() {
        let mut s = CubeSession::new(Cube::default(), 11);
        s.apply_action(CubeAction::Scramble);
        s.apply_action(CubeAction::CursorDown);
        s.apply_action(CubeAction::RotateLeft);
        s.apply_action(CubeAction::LookAt(Face::Back));

        assert!(s.apply_action(CubeAction::Reset));
        assert_eq!(s.cube(), &Cube::default());
        assert_eq!(s.orientation(), Orientation::default());
        assert_eq!(s.cursor(), (0, 0));
        assert_eq!(s.moves(), 0);
        assert_eq!(s.seed(), 11);
    }

    #[test]
    fn scramble_replays_after_reset() {
        let mut s = CubeSession::new(Cube::default(), 4);
        s.apply_action(CubeAction::Scramble);
        let first = s.cube().clone();

        s.apply_action(CubeAction::Reset);
        s.apply_action(CubeAction::Scramble);
        assert_eq!(s.cube(), &first);
        assert_eq!(s.total_twists(), 2 * SCRAMBLE_MOVES as u64);
    }
}
