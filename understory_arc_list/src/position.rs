// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item layout results produced by a layout pass.

use alloc::collections::BTreeMap;

/// Stable identity of a child element, as reported by the host.
///
/// The id travels with the logical item across passes so hosts can match
/// recycled frames back to their content.
pub type ItemId = u64;

/// Layout result for one positioned list item.
///
/// `start_pos`/`end_pos` are main-axis coordinates in the viewport's local space
/// before curvature is applied. `scale` and `offset_y` are the curvature outputs
/// computed at the end of the pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPosition {
    /// Host identity of the child at this index.
    pub id: ItemId,
    /// Leading main-axis edge.
    pub start_pos: f64,
    /// Trailing main-axis edge.
    pub end_pos: f64,
    /// Uniform scale applied around the item's centre.
    pub scale: f64,
    /// Vertical translation closing the gaps left by `scale`.
    pub offset_y: f64,
    /// Measured cross-axis size, used to centre the item horizontally.
    pub cross_size: f64,
}

impl ItemPosition {
    /// Creates an unscaled entry spanning `start_pos..end_pos`.
    #[must_use]
    pub const fn new(id: ItemId, start_pos: f64, end_pos: f64) -> Self {
        Self {
            id,
            start_pos,
            end_pos,
            scale: 1.0,
            offset_y: 0.0,
            cross_size: 0.0,
        }
    }

    /// Main-axis extent of the item.
    #[must_use]
    pub fn main_size(&self) -> f64 {
        self.end_pos - self.start_pos
    }

    /// Main-axis centre of the item, pre-curvature.
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.start_pos + self.end_pos) / 2.0
    }

    /// Top edge as displayed, after scaling about the centre and translating.
    #[must_use]
    pub fn display_start(&self) -> f64 {
        self.center() + self.offset_y - self.main_size() * self.scale / 2.0
    }

    /// Bottom edge as displayed.
    #[must_use]
    pub fn display_end(&self) -> f64 {
        self.center() + self.offset_y + self.main_size() * self.scale / 2.0
    }

    pub(crate) fn translate(&mut self, delta: f64) {
        self.start_pos += delta;
        self.end_pos += delta;
    }
}

/// Positioned items keyed by logical index, in ascending index order.
pub type ItemPositionMap = BTreeMap<usize, ItemPosition>;

/// Convenience queries over an [`ItemPositionMap`].
pub trait ItemPositionMapExt {
    /// Lowest positioned index.
    fn start_index(&self) -> Option<usize>;
    /// Highest positioned index.
    fn end_index(&self) -> Option<usize>;
    /// Leading edge of the first positioned item.
    fn start_position(&self) -> Option<f64>;
    /// Trailing edge of the last positioned item.
    fn end_position(&self) -> Option<f64>;
    /// Shift every entry along the main axis.
    fn translate_all(&mut self, delta: f64);
}

impl ItemPositionMapExt for ItemPositionMap {
    fn start_index(&self) -> Option<usize> {
        self.first_key_value().map(|(index, _)| *index)
    }

    fn end_index(&self) -> Option<usize> {
        self.last_key_value().map(|(index, _)| *index)
    }

    fn start_position(&self) -> Option<f64> {
        self.first_key_value().map(|(_, pos)| pos.start_pos)
    }

    fn end_position(&self) -> Option<f64> {
        self.last_key_value().map(|(_, pos)| pos.end_pos)
    }

    fn translate_all(&mut self, delta: f64) {
        for pos in self.values_mut() {
            pos.translate(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_queries_follow_index_order() {
        let mut map = ItemPositionMap::new();
        map.insert(4, ItemPosition::new(14, 200.0, 300.0));
        map.insert(2, ItemPosition::new(12, 0.0, 100.0));
        map.insert(3, ItemPosition::new(13, 100.0, 200.0));

        assert_eq!(map.start_index(), Some(2));
        assert_eq!(map.end_index(), Some(4));
        assert_eq!(map.start_position(), Some(0.0));
        assert_eq!(map.end_position(), Some(300.0));

        map.translate_all(-50.0);
        assert_eq!(map.start_position(), Some(-50.0));
        assert_eq!(map[&3].center(), 100.0);
    }

    #[test]
    fn display_edges_follow_scale_and_offset() {
        let mut pos = ItemPosition::new(0, 100.0, 200.0);
        pos.scale = 0.5;
        pos.offset_y = 10.0;
        assert_eq!(pos.display_start(), 135.0);
        assert_eq!(pos.display_end(), 185.0);
    }

    #[test]
    fn empty_map_has_no_bounds() {
        let map = ItemPositionMap::new();
        assert!(map.start_index().is_none());
        assert!(map.end_position().is_none());
    }
}
