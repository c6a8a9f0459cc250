// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Friction, fling landing and over-scroll resistance.
//!
//! Positions here are content offsets (growing toward the end of the list) while
//! velocities are gesture velocities (positive when the finger moves down, which
//! pulls the content toward its start). [`FRICTION_VELOCITY_SCALE`] is negative
//! to bridge the two.

use crate::float::{great_or_equal, near_zero};

/// Friction applied by arc lists.
pub const ARC_LIST_FRICTION: f64 = 0.8;

/// Friction of a plain list, kept when no theme is available.
pub const DEFAULT_FRICTION: f64 = 0.6;

/// Ties the fling velocity to its travel distance for a given friction.
pub const FRICTION_VELOCITY_SCALE: f64 = -4.2;

/// Over-scroll range (as a fraction of half the viewport) and saturated resistance.
pub const OVER_SCROLL_RATE: f64 = 0.6;

/// Steepness of the over-scroll resistance curve.
pub const OVER_SCROLL_CURVE: f64 = 0.84;

/// Capability interface for the scroll physics of a list.
pub trait ScrollPhysics {
    /// Current friction coefficient. Always positive.
    fn friction(&self) -> f64;

    /// Where a fling starting at `position` with `velocity` comes to rest.
    fn fling_final_position(&self, position: f64, velocity: f64) -> f64 {
        position + velocity / (self.friction() * FRICTION_VELOCITY_SCALE)
    }

    /// The velocity that makes a fling from `position` rest at `final_position`.
    fn fling_velocity(&self, position: f64, final_position: f64) -> f64 {
        (final_position - position) * self.friction() * FRICTION_VELOCITY_SCALE
    }

    /// Resistance in `0..=1` applied to drag deltas once `over_scroll` pixels past an end.
    fn over_scroll_friction(&self, over_scroll: f64, content_main_size: f64) -> f64;
}

/// Physics used by arc lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcScrollPhysics {
    friction: f64,
    velocity_scale: f64,
}

impl Default for ArcScrollPhysics {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            velocity_scale: 1.0,
        }
    }
}

impl ArcScrollPhysics {
    /// Physics with arc-list friction and the given gesture velocity scale.
    #[must_use]
    pub fn arc(velocity_scale: f64) -> Self {
        Self {
            friction: ARC_LIST_FRICTION,
            velocity_scale,
        }
    }

    /// Sets the friction; non-positive values select [`ARC_LIST_FRICTION`].
    pub fn set_friction(&mut self, friction: f64) {
        self.friction = if friction <= 0.0 {
            ARC_LIST_FRICTION
        } else {
            friction
        };
    }

    /// Multiplier applied to release velocities.
    #[must_use]
    pub fn velocity_scale(&self) -> f64 {
        self.velocity_scale
    }
}

impl ScrollPhysics for ArcScrollPhysics {
    fn friction(&self) -> f64 {
        self.friction
    }

    fn over_scroll_friction(&self, over_scroll: f64, content_main_size: f64) -> f64 {
        scroll_update_friction(over_scroll, content_main_size)
    }
}

/// Rubber-band resistance for pulling `over_scroll` pixels past an end.
///
/// The distance is normalised by `content_main_size / 2 * 0.6`; below `1` the
/// resistance is `1 - e^(-0.84 * scale)`, from `1` on it is `0.6`.
#[must_use]
pub fn scroll_update_friction(over_scroll: f64, content_main_size: f64) -> f64 {
    let range = content_main_size / 2.0 * OVER_SCROLL_RATE;
    if near_zero(range) {
        return OVER_SCROLL_RATE;
    }
    let scale = libm::fabs(over_scroll) / range;
    if great_or_equal(scale, 1.0) {
        OVER_SCROLL_RATE
    } else {
        1.0 - libm::exp(-OVER_SCROLL_CURVE * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friction_clamps_non_positive_values() {
        let mut physics = ArcScrollPhysics::arc(1.0);
        physics.set_friction(-1.0);
        assert_eq!(physics.friction(), ARC_LIST_FRICTION);
        physics.set_friction(0.0);
        assert_eq!(physics.friction(), 0.8);
        physics.set_friction(1.0);
        assert_eq!(physics.friction(), 1.0);
    }

    #[test]
    fn fling_velocity_inverts_final_position() {
        let physics = ArcScrollPhysics::arc(1.0);
        let landing = physics.fling_final_position(100.0, -1000.0);
        assert!(landing > 100.0);
        let velocity = physics.fling_velocity(100.0, landing);
        assert!((velocity + 1000.0).abs() < 1e-9);
    }

    #[test]
    fn corrected_velocity_formula() {
        let physics = ArcScrollPhysics::arc(1.0);
        assert_eq!(physics.fling_velocity(-150.0, -50.0), 100.0 * 0.8 * -4.2);
    }

    #[test]
    fn over_scroll_friction_curve() {
        assert_eq!(scroll_update_friction(0.0, 400.0), 0.0);
        let half = scroll_update_friction(60.0, 400.0);
        assert!((half - (1.0 - libm::exp(-0.42))).abs() < 1e-12);
        assert_eq!(scroll_update_friction(-60.0, 400.0), half);
        assert_eq!(scroll_update_friction(120.0, 400.0), OVER_SCROLL_RATE);
        assert_eq!(scroll_update_friction(500.0, 400.0), OVER_SCROLL_RATE);
    }

    #[test]
    fn default_physics_uses_plain_friction() {
        let physics = ArcScrollPhysics::default();
        assert_eq!(physics.friction(), DEFAULT_FRICTION);
        assert_eq!(physics.velocity_scale(), 1.0);
    }
}
