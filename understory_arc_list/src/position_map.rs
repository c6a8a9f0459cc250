// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-index main-axis bookkeeping with a lazily-maintained prefix-sum cache.

use alloc::vec::Vec;

use bitflags::bitflags;

use crate::children_size::ChildrenMainSize;
use crate::float::near_equal;

bitflags! {
    /// Reasons the position map needs a full recompute.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PosMapDirty: u8 {
        /// The item count (or lane count) changed.
        const ITEM_COUNT = 1 << 0;
        /// The inter-item spacing changed.
        const SPACE = 1 << 1;
        /// The out-of-band size table changed.
        const CHILDREN_SIZE = 1 << 2;
    }
}

/// Cached main-axis placement of one item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionInfo {
    /// Offset of the item's leading edge from the start of the content.
    pub main_pos: f64,
    /// Main-axis size of the item.
    pub main_size: f64,
}

/// Index → size/position cache for an arc list.
///
/// Sizes come from measurement feedback ([`ArcListPositionMap::record_measured`])
/// or from an optional [`ChildrenMainSize`] table. Items with neither use the
/// average measured size. Positions are prefix sums including spacing and are
/// recomputed lazily from the first changed index.
///
/// The host's child list may start with a header that is not a list item;
/// `header_offset` is subtracted from the child count to get the item count.
#[derive(Clone, Debug, Default)]
pub struct ArcListPositionMap {
    header_offset: usize,
    total_item_count: usize,
    lanes: usize,
    space: f64,
    children_size_generation: Option<u64>,
    sizes: Vec<f64>,
    measured: Vec<bool>,
    starts: Vec<f64>,
    measured_sum: f64,
    measured_count: usize,
    dirty_from: Option<usize>,
    dirty: PosMapDirty,
}

impl ArcListPositionMap {
    /// Creates an empty map for a child list with `header_offset` leading non-item children.
    #[must_use]
    pub fn new(header_offset: usize) -> Self {
        Self {
            header_offset,
            lanes: 1,
            dirty: PosMapDirty::ITEM_COUNT,
            ..Self::default()
        }
    }

    /// Number of leading non-item children.
    #[must_use]
    pub fn header_offset(&self) -> usize {
        self.header_offset
    }

    /// Changes the number of leading non-item children.
    pub fn set_header_offset(&mut self, header_offset: usize) {
        if self.header_offset != header_offset {
            self.header_offset = header_offset;
            self.dirty |= PosMapDirty::ITEM_COUNT;
        }
    }

    /// Number of list items (children minus the header offset) as of the last update.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.total_item_count
    }

    /// Pending recompute reasons.
    #[must_use]
    pub fn dirty(&self) -> PosMapDirty {
        self.dirty
    }

    /// Brings the map in sync with the live child list.
    ///
    /// Compares the item count, lane count, spacing and size table against the
    /// memoized values. Any difference marks the map dirty and triggers a full
    /// recompute, after which the dirty flags are cleared. Returns `true` if a
    /// recompute happened.
    pub fn update_pos_map(
        &mut self,
        total_child_count: usize,
        lanes: usize,
        space: f64,
        children_size: Option<&ChildrenMainSize>,
    ) -> bool {
        let item_count = total_child_count.saturating_sub(self.header_offset);
        if item_count != self.total_item_count || lanes != self.lanes {
            self.dirty |= PosMapDirty::ITEM_COUNT;
        }
        if !near_equal(space, self.space) {
            self.dirty |= PosMapDirty::SPACE;
        }
        if children_size.map(ChildrenMainSize::generation) != self.children_size_generation {
            self.dirty |= PosMapDirty::CHILDREN_SIZE;
        }
        if self.dirty.is_empty() {
            return false;
        }

        self.total_item_count = item_count;
        self.lanes = lanes.max(1);
        self.space = space;
        self.children_size_generation = children_size.map(ChildrenMainSize::generation);
        self.recalculate(children_size);
        self.dirty = PosMapDirty::empty();
        true
    }

    fn recalculate(&mut self, children_size: Option<&ChildrenMainSize>) {
        let count = self.total_item_count;
        self.sizes.resize(count, 0.0);
        self.measured.resize(count, false);
        self.starts.resize(count, 0.0);
        if let Some(table) = children_size {
            for (index, (size, measured)) in
                self.sizes.iter_mut().zip(self.measured.iter_mut()).enumerate()
            {
                *size = table.child_size(index);
                *measured = true;
            }
        }
        self.recount_measured();
        self.dirty_from = Some(0);
    }

    fn recount_measured(&mut self) {
        self.measured_sum = 0.0;
        self.measured_count = 0;
        for (size, measured) in self.sizes.iter().zip(&self.measured) {
            if *measured {
                self.measured_sum += size;
                self.measured_count += 1;
            }
        }
    }

    /// Feeds back the measured size of `index`.
    pub fn record_measured(&mut self, index: usize, size: f64) {
        if index >= self.total_item_count {
            return;
        }
        let size = if size.is_sign_negative() { 0.0 } else { size };
        let was_measured = self.measured[index];
        if was_measured && near_equal(self.sizes[index], size) {
            return;
        }
        let previous_estimate = self.estimated_size();
        if was_measured {
            self.measured_sum -= self.sizes[index];
        } else {
            self.measured_count += 1;
        }
        self.measured_sum += size;
        self.sizes[index] = size;
        self.measured[index] = true;

        let from = if near_equal(previous_estimate, self.estimated_size()) {
            index
        } else {
            // Every unmeasured item moved.
            0
        };
        self.dirty_from = Some(self.dirty_from.unwrap_or(from).min(from));
    }

    /// Size assumed for items that have never been measured.
    #[must_use]
    pub fn estimated_size(&self) -> f64 {
        if self.measured_count == 0 {
            0.0
        } else {
            self.measured_sum / self.measured_count as f64
        }
    }

    fn size_at(&self, index: usize) -> f64 {
        if self.measured[index] {
            self.sizes[index]
        } else {
            self.estimated_size()
        }
    }

    fn ensure_prefix_through(&mut self, through: usize) {
        let len = self.total_item_count;
        if len == 0 || through >= len {
            return;
        }
        let dirty_from = match self.dirty_from {
            Some(d) if d <= through => d,
            _ => return,
        };

        let mut pos = if dirty_from == 0 {
            0.0
        } else {
            self.starts[dirty_from - 1] + self.size_at(dirty_from - 1) + self.space
        };
        for i in dirty_from..len {
            self.starts[i] = pos;
            pos += self.size_at(i) + self.space;
        }
        self.dirty_from = None;
    }

    /// Cached placement of `index`, or a zero sentinel if the index is unknown.
    pub fn position_info(&mut self, index: usize) -> PositionInfo {
        if index >= self.total_item_count {
            return PositionInfo::default();
        }
        self.ensure_prefix_through(index);
        PositionInfo {
            main_pos: self.starts[index],
            main_size: self.size_at(index),
        }
    }

    /// Returns `true` if `index` has a measured or table-supplied size.
    #[must_use]
    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    /// Total content extent, spacing included.
    pub fn total_height(&mut self) -> f64 {
        match self.total_item_count.checked_sub(1) {
            Some(last) => {
                let info = self.position_info(last);
                info.main_pos + info.main_size
            }
            None => 0.0,
        }
    }

    /// Forgets every size and marks the map for a full recompute.
    pub fn clear(&mut self) {
        self.sizes.clear();
        self.measured.clear();
        self.starts.clear();
        self.measured_sum = 0.0;
        self.measured_count = 0;
        self.total_item_count = 0;
        self.children_size_generation = None;
        self.dirty_from = None;
        self.dirty = PosMapDirty::ITEM_COUNT;
    }
}
