//! Pointer/touch drag state machine for moving the sticker.
//!
//! Two states: idle and dragging. A press starts a session, moves update
//! the sticker position, and release/leave/touch-end return to idle.
//! Positions are never clamped.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// How a move event is turned into a new sticker position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragMode {
    /// Add the delta since the previous pointer sample to the current
    /// position, then move the anchor to the new sample.
    Incremental,
    /// Remember the offset between the grab point and the sticker at
    /// press time; every move places the sticker at `pointer - offset`.
    ///
    /// Independent of how many intermediate samples the browser
    /// delivers or coalesces.
    #[default]
    Anchored,
}

/// An in-progress drag. Exists only between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Last pointer sample seen (the press point until the first move).
    pub anchor: Point,
    /// `grab point - sticker position`, fixed at press time.
    pub grab_offset: Point,
}

/// Drag controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No pointer is held on the sticker.
    #[default]
    Idle,
    /// A drag session is active.
    Dragging(DragSession),
}

/// Tracks a single drag gesture and computes sticker positions from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragController {
    mode: DragMode,
    state: DragState,
}

impl DragController {
    /// Create an idle controller using `mode`.
    #[must_use]
    pub const fn new(mode: DragMode) -> Self {
        Self {
            mode,
            state: DragState::Idle,
        }
    }

    /// The configured drag mode.
    #[must_use]
    pub const fn mode(&self) -> DragMode {
        self.mode
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Pointer or touch pressed at `pointer` while the sticker is at
    /// `position`. A press during an active drag restarts the session.
    pub fn press(&mut self, pointer: Point, position: Point) {
        self.state = DragState::Dragging(DragSession {
            anchor: pointer,
            grab_offset: pointer.offset_from(position),
        });
    }

    /// Where a move to `pointer` would place a sticker currently at
    /// `position`, without advancing the session. `None` when idle.
    #[must_use]
    pub fn target(&self, pointer: Point, position: Point) -> Option<Point> {
        let DragState::Dragging(session) = &self.state else {
            return None;
        };
        Some(match self.mode {
            DragMode::Incremental => position.translate(pointer.offset_from(session.anchor)),
            DragMode::Anchored => pointer.offset_from(session.grab_offset),
        })
    }

    /// Pointer moved to `pointer` while the sticker is at `position`.
    ///
    /// Returns the new sticker position, or `None` when idle (moves
    /// without a press are ignored).
    pub fn drag_to(&mut self, pointer: Point, position: Point) -> Option<Point> {
        let next = self.target(pointer, position)?;
        if let DragState::Dragging(session) = &mut self.state {
            session.anchor = pointer;
        }
        Some(next)
    }

    /// Pointer released, left the drop target, or touch ended.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }
}
