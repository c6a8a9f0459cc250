// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background colour transitions.

use core::time::Duration;

use peniko::Color;

/// A background colour transition requested by a state change.
///
/// The host owns the clock; it samples the animation with a progress in
/// `0..=1` and paints the result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorAnimation {
    /// Colour at progress `0`.
    pub from: Color,
    /// Colour at progress `1`.
    pub to: Color,
    /// How long the host should take to run the transition.
    pub duration: Duration,
}

impl ColorAnimation {
    /// Colour at `progress`, clamped to `0..=1`. Components are interpolated
    /// linearly in sRGB with separate alpha; a NaN progress samples the start.
    #[must_use]
    pub fn sample(&self, progress: f64) -> Color {
        if progress >= 1.0 {
            return self.to;
        }
        if progress <= 0.0 || progress.is_nan() {
            return self.from;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Progress only needs colour-channel precision."
        )]
        let t = progress as f32;
        let from = self.from.components;
        let to = self.to.components;
        Color::new(core::array::from_fn(|i| from[i] + (to[i] - from[i]) * t))
    }

    /// Returns `true` if the animation would not change the colour.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_interpolates_and_clamps() {
        let animation = ColorAnimation {
            from: Color::new([0.0, 0.0, 0.0, 0.0]),
            to: Color::new([1.0, 0.5, 0.25, 1.0]),
            duration: Duration::from_millis(100),
        };
        assert_eq!(animation.sample(0.0), animation.from);
        assert_eq!(animation.sample(1.0), animation.to);
        assert_eq!(animation.sample(0.5).components, [0.5, 0.25, 0.125, 0.5]);
        assert_eq!(animation.sample(-3.0), animation.from);
        assert_eq!(animation.sample(7.0), animation.to);
    }

    #[test]
    fn identical_endpoints_are_a_noop() {
        let color = Color::from_rgba8(10, 20, 30, 40);
        let animation = ColorAnimation {
            from: color,
            to: color,
            duration: Duration::ZERO,
        };
        assert!(animation.is_noop());
        assert_eq!(animation.sample(0.3), color);
    }
}
