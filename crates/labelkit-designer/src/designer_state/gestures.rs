//! Pointer gesture handling for designer state.

use super::DesignerState;
use crate::geometry::Point;
use crate::hit_test::{hit_test, HitTarget};

impl DesignerState {
    /// Pointer pressed at `pointer_px` (canvas pixels at the current zoom).
    ///
    /// Selects the struck element, or clears the selection on the canvas
    /// background, and starts the matching gesture.
    pub fn pointer_down(&mut self, pointer_px: Point) -> HitTarget {
        if !self.gestures.is_idle() {
            self.pointer_up();
        }

        let target = hit_test(
            self.template(),
            self.selected.as_ref(),
            pointer_px,
            &self.viewport,
        );
        self.selected = target.element_id().cloned();

        let started = self
            .gestures
            .begin(&target, self.history.state(), pointer_px, &self.viewport)
            .is_some();
        if started {
            self.gesture_origin = Some(self.history.state().clone());
        }
        target
    }

    /// Pointer moved. Updates the document in place without adding an
    /// undo step; returns whether anything was applied.
    pub fn pointer_move(&mut self, pointer_px: Point) -> bool {
        let settings = self.options.gesture_settings();
        let Some(frame) =
            self.gestures
                .update(self.history.state(), pointer_px, &self.viewport, &settings)
        else {
            return false;
        };

        let mut next = self.history.state().clone();
        frame.apply_to(&mut next);
        self.guides = frame.guides;
        self.history.replace(next);
        true
    }

    /// Pointer released. Commits the gesture as one undo step when it
    /// changed the document; returns whether a step was added.
    pub fn pointer_up(&mut self) -> bool {
        self.guides.clear();
        let gesture = self.gestures.end();
        let Some(origin) = self.gesture_origin.take() else {
            return false;
        };
        if gesture.is_none() {
            return false;
        }

        let last_frame = self.history.state().clone();
        if last_frame == origin {
            return false;
        }
        // Undo must land on the pre-gesture document, not on a drag frame.
        self.history.replace(origin);
        self.history.commit(last_frame);
        self.is_modified = true;
        true
    }

    /// Abort the running gesture and restore the document from
    /// pointer-down. History length is unchanged.
    pub fn cancel_gesture(&mut self) -> bool {
        self.guides.clear();
        let Some(gesture) = self.gestures.end() else {
            return false;
        };
        if let Some(origin) = self.gesture_origin.take() {
            self.history.replace(origin);
        }
        tracing::debug!(gesture = gesture.name(), "gesture cancelled");
        true
    }

    /// Whether a pointer gesture is running.
    pub fn is_dragging(&self) -> bool {
        !self.gestures.is_idle()
    }
}
