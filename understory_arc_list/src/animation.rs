// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll animations driven by the host's frame clock.

use crate::float::near_equal;

/// Why an animation is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    /// Settling a fling onto a centred item.
    Snap,
    /// Returning from over-scroll to the nearest bound.
    Spring,
    /// Smooth scroll to an index.
    ScrollTo,
}

/// Content-offset animation from `start` to `end`.
///
/// The host advances it with a progress in `0..=1`. The easing is a cubic
/// ease-out, so most of the travel happens early like a decelerating fling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    kind: AnimationKind,
    start: f64,
    end: f64,
    position: f64,
    progress: f64,
}

impl ScrollAnimation {
    /// Creates an animation at progress `0`.
    #[must_use]
    pub fn new(kind: AnimationKind, start: f64, end: f64) -> Self {
        Self {
            kind,
            start,
            end,
            position: start,
            progress: 0.0,
        }
    }

    /// Why this animation runs.
    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// Content offset the animation started at.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Content offset the animation ends at.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Distance between start and end.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.end - self.start
    }

    /// Last progress handed to [`ScrollAnimation::advance`].
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Returns `true` once the animation has reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0 || near_equal(self.start, self.end)
    }

    /// Moves the end by `delta`, keeping the current position.
    pub fn retarget(&mut self, delta: f64) {
        self.end += delta;
    }

    /// Moves the whole animation by `delta` when the content offsets it was
    /// expressed in get re-based.
    pub fn shift(&mut self, delta: f64) {
        self.start += delta;
        self.end += delta;
        self.position += delta;
    }

    /// Advances to `progress` and returns the content delta since the last call.
    pub fn advance(&mut self, progress: f64) -> f64 {
        self.progress = progress.clamp(0.0, 1.0);
        let inverse = 1.0 - self.progress;
        let eased = 1.0 - inverse * inverse * inverse;
        let target = self.start + (self.end - self.start) * eased;
        let delta = target - self.position;
        self.position = target;
        delta
    }
}
