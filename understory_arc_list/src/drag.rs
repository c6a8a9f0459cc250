// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag bookkeeping along the main axis.

/// Tracks one drag gesture.
///
/// Deltas arrive already decoded, so this only records where the drag started
/// and how far it has travelled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Content offset when the drag started.
    pub start_offset: Option<f64>,
    /// Sum of the deltas seen since the start.
    pub travelled: f64,
}

impl DragState {
    /// Starts tracking a drag at content offset `offset`.
    pub fn start(&mut self, offset: f64) {
        self.start_offset = Some(offset);
        self.travelled = 0.0;
    }

    /// Records a delta, returning it if a drag is active.
    pub fn update(&mut self, delta: f64) -> Option<f64> {
        self.start_offset?;
        self.travelled += delta;
        Some(delta)
    }

    /// Ends the drag and returns the distance it travelled.
    pub fn end(&mut self) -> Option<f64> {
        let travelled = self.start_offset.map(|_| self.travelled);
        *self = Self::default();
        travelled
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_offset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_start_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(5.0), None);
        assert_eq!(drag.travelled, 0.0);
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn travel_accumulates_until_end() {
        let mut drag = DragState::default();
        drag.start(-150.0);
        assert!(drag.is_dragging());
        assert_eq!(drag.update(-20.0), Some(-20.0));
        assert_eq!(drag.update(-29.0), Some(-29.0));
        assert_eq!(drag.end(), Some(-49.0));
        assert!(!drag.is_dragging());
    }
}
