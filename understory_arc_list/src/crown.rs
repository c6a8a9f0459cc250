// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Digital crown input.

use crate::pattern::{ArcListPattern, ScrollSource};

/// Pixels scrolled per degree of crown rotation at medium sensitivity.
pub const CROWN_DISPLAY_CONTROL_RATIO: f64 = 2.1;

/// How strongly crown rotation scrolls the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrownSensitivity {
    /// Slower than medium.
    Low,
    /// The platform default.
    #[default]
    Medium,
    /// Faster than medium.
    High,
}

impl CrownSensitivity {
    /// Multiplier applied to the rotation.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Low => 0.8,
            Self::Medium => 1.0,
            Self::High => 1.2,
        }
    }
}

impl ArcListPattern {
    /// Scrolls by a crown rotation of `degrees`; clockwise (positive) moves
    /// toward the end. The first rotation of a gesture behaves like a drag start.
    pub fn on_crown_rotate(&mut self, degrees: f64, sensitivity: CrownSensitivity) -> bool {
        if !self.drag.is_dragging() {
            self.on_drag_start();
        }
        let delta = -degrees * CROWN_DISPLAY_CONTROL_RATIO * sensitivity.factor();
        self.drag.update(delta);
        self.update_current_offset(delta, ScrollSource::Crown)
    }

    /// Ends a crown gesture and settles onto the nearest item.
    pub fn on_crown_end(&mut self) -> bool {
        self.on_drag_end(0.0)
    }
}
