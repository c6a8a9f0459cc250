// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending scroll requests consumed by the next layout pass.

/// Index sentinel meaning "the last item", accepted by the index-based scroll APIs.
pub const LAST_ITEM: i32 = -1;

/// The single scroll request a layout pass acts on.
///
/// Requests are merged by priority: a jump replaces anything, a scroll-to
/// replaces ambient movement, and ambient deltas accumulate. The layout pass
/// drains the intent back to [`ScrollIntent::None`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScrollIntent {
    /// Nothing pending; the pass re-lays out the settled window.
    #[default]
    None,
    /// Viewport moved by `delta` along the main axis; positive scrolls toward the end.
    Ambient(f64),
    /// Continuous scroll toward an index, keeping already-settled items.
    ScrollTo(i32),
    /// Discontinuous relayout centred on an index.
    Jump(i32),
}

impl ScrollIntent {
    fn priority(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Ambient(_) => 1,
            Self::ScrollTo(_) => 2,
            Self::Jump(_) => 3,
        }
    }

    /// Folds `next` into the pending intent, keeping the higher-priority request.
    pub fn merge(&mut self, next: Self) {
        match (*self, next) {
            (Self::Ambient(a), Self::Ambient(b)) => *self = Self::Ambient(a + b),
            (current, next) if next.priority() >= current.priority() => *self = next,
            _ => {}
        }
    }

    /// Takes the intent, leaving [`ScrollIntent::None`] behind.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Returns `true` for jump and scroll-to requests.
    #[must_use]
    pub fn is_index_request(&self) -> bool {
        matches!(self, Self::ScrollTo(_) | Self::Jump(_))
    }

    /// The ambient delta, or zero for every other intent.
    #[must_use]
    pub fn delta(&self) -> f64 {
        match self {
            Self::Ambient(delta) => *delta,
            _ => 0.0,
        }
    }
}

/// Resolves a requested index against `item_count`.
///
/// [`LAST_ITEM`] maps to the last index; anything else outside
/// `0..item_count` is rejected.
#[must_use]
pub fn resolve_index(index: i32, item_count: usize) -> Option<usize> {
    if index == LAST_ITEM {
        return item_count.checked_sub(1);
    }
    let index = usize::try_from(index).ok()?;
    (index < item_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_deltas_accumulate() {
        let mut intent = ScrollIntent::None;
        intent.merge(ScrollIntent::Ambient(10.0));
        intent.merge(ScrollIntent::Ambient(-4.0));
        assert_eq!(intent, ScrollIntent::Ambient(6.0));
    }

    #[test]
    fn jump_beats_scroll_to_beats_ambient() {
        let mut intent = ScrollIntent::Ambient(10.0);
        intent.merge(ScrollIntent::ScrollTo(3));
        assert_eq!(intent, ScrollIntent::ScrollTo(3));
        intent.merge(ScrollIntent::Ambient(5.0));
        assert_eq!(intent, ScrollIntent::ScrollTo(3));
        intent.merge(ScrollIntent::Jump(1));
        intent.merge(ScrollIntent::ScrollTo(4));
        assert_eq!(intent, ScrollIntent::Jump(1));
        intent.merge(ScrollIntent::Jump(2));
        assert_eq!(intent, ScrollIntent::Jump(2));
    }

    #[test]
    fn take_drains() {
        let mut intent = ScrollIntent::Jump(2);
        assert_eq!(intent.take(), ScrollIntent::Jump(2));
        assert_eq!(intent, ScrollIntent::None);
        assert_eq!(intent.delta(), 0.0);
    }

    #[test]
    fn index_resolution() {
        assert_eq!(resolve_index(LAST_ITEM, 6), Some(5));
        assert_eq!(resolve_index(LAST_ITEM, 0), None);
        assert_eq!(resolve_index(-2, 6), None);
        assert_eq!(resolve_index(6, 6), None);
        assert_eq!(resolve_index(0, 6), Some(0));
    }
}
