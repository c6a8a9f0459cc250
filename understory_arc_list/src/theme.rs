// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme values consumed by the arc list.

use crate::physics::ARC_LIST_FRICTION;

/// Scroll theme of a round-display list.
///
/// Passing a theme to [`ArcListPattern::new`](crate::ArcListPattern::new)
/// switches the list to arc-list physics; without one the generic defaults
/// are kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcListTheme {
    /// Multiplier applied to gesture release velocities.
    pub velocity_scale: f64,
    /// Fling friction.
    pub friction: f64,
}

impl Default for ArcListTheme {
    fn default() -> Self {
        Self {
            velocity_scale: 1.0,
            friction: ARC_LIST_FRICTION,
        }
    }
}
