//! Change notification from the rotation engine to its observers.
//!
//! The engine calls [`ChangeListener::cube_changed`] once, synchronously, at the
//! end of every successful rotation. Observers re-read the cube afterwards;
//! the event only says what happened.

use crate::types::{Orientation, Twist};

/// One successful rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeEvent {
    pub orientation: Orientation,
    pub twist: Twist,
}

pub trait ChangeListener {
    fn cube_changed(&mut self, event: &ChangeEvent);
}

/// Listener that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopListener;

impl ChangeListener for NoopListener {
    fn cube_changed(&mut self, _event: &ChangeEvent) {}
}

impl<F> ChangeListener for F
where
    F: FnMut(&ChangeEvent),
{
    fn cube_changed(&mut self, event: &ChangeEvent) {
        self(event)
    }
}

/// Counts changes and keeps a take-once dirty flag for repaint decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    changes: u64,
    dirty: bool,
    last: Option<ChangeEvent>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rotations observed
    pub fn changes(&self) -> u64 {
        self.changes
    }

    pub fn last(&self) -> Option<ChangeEvent> {
        self.last
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the dirty flag and clear it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl ChangeListener for ChangeTracker {
    fn cube_changed(&mut self, event: &ChangeEvent) {
        self.changes += 1;
        self.dirty = true;
        self.last = Some(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RowDirection;

    fn event() -> ChangeEvent {
        ChangeEvent {
            orientation: Orientation::default(),
            twist: Twist::Row {
                index: 0,
                direction: RowDirection::Left,
            },
        }
    }

    #[test]
    fn tracker_dirty_flag_is_take_once() {
        let mut tracker = ChangeTracker::new();
        assert!(!tracker.take_dirty());

        tracker.cube_changed(&event());
        tracker.cube_changed(&event());
        assert_eq!(tracker.changes(), 2);
        assert_eq!(tracker.last(), Some(event()));
        assert!(tracker.take_dirty());
        assert!(!tracker.take_dirty());
    }

    #[test]
    fn closures_are_listeners() {
        let mut seen = Vec::new();
        {
            let mut listener = |e: &ChangeEvent| seen.push(*e);
            listener.cube_changed(&event());
        }
        assert_eq!(seen, vec![event()]);
    }
}
