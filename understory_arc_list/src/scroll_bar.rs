// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll bar feedback.

/// How far the content sits past each end, measured from the first and last
/// item centres. Both values are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverScrollOffset {
    /// Distance the first item centre sits below the viewport centre.
    pub start: f64,
    /// Distance the last item centre sits above the viewport centre.
    pub end: f64,
}

/// What a scroll bar needs to draw itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollBarState {
    /// Scroll position, zero with the first item centred.
    pub offset: f64,
    /// Estimated scrollable distance between the first and last item centred.
    pub range: f64,
    /// Over-scroll magnitude, saturated at half the viewport minus half the
    /// centred item's snap band.
    pub out_boundary: f64,
}
