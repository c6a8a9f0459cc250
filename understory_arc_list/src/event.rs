// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications produced by the pattern.

/// Something the host may want to react to, queued by
/// [`ArcListPattern`](crate::ArcListPattern) and drained with
/// [`take_events`](crate::ArcListPattern::take_events).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcListEvent {
    /// The visible window or the centred item changed.
    ScrollIndex {
        /// First visible item.
        start: usize,
        /// Last visible item.
        end: usize,
        /// Item under the viewport centre.
        center: usize,
    },
    /// The first item reached the viewport centre.
    ReachStart,
    /// The last item reached the viewport centre.
    ReachEnd,
    /// Scrolling began.
    ScrollStart,
    /// Scrolling came to rest.
    ScrollStop,
    /// The content moved by `offset` in a layout pass.
    DidScroll {
        /// Applied delta; positive toward the end.
        offset: f64,
    },
}
