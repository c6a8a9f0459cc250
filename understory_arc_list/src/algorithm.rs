// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One measure/layout pass of an arc list.
//!
//! A pass starts from the [`LayoutInput`] snapshot handed over by the pattern,
//! walks forward and backward from an anchor item until the viewport is filled,
//! computes the curvature transforms, refines any pending snap prediction and
//! returns everything as a [`LayoutOutput`].
//!
//! Coordinates: during measurement item positions are local to the *previous*
//! viewport and the new viewport is `start_main_pos..end_main_pos`. Layout shifts
//! everything by `-current_offset` so the results are local to the new viewport.
//! `total_offset` is the content offset of the viewport top, so the content
//! position of a local coordinate `p` is always `p + total_offset`.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::children_size::ChildrenMainSize;
use crate::curvature::{generate_item_offset, straddling_index};
use crate::float::{
    great_not_equal, great_or_equal, less_not_equal, less_or_equal, near_zero, non_negative,
};
use crate::header::HeaderState;
use crate::host::{ChildConstraint, ListHost};
use crate::intent::{ScrollIntent, resolve_index};
use crate::position::{ItemPosition, ItemPositionMap, ItemPositionMapExt};
use crate::position_map::ArcListPositionMap;
use crate::snap::{ARC_LIST_ITEM_SNAP_SIZE, SnapPrediction};

/// An item laid out outside the viewport so it is ready when scrolled in.
pub type CachedItem = (usize, ItemPosition);

/// Everything a pass needs, moved out of the pattern for its duration.
#[derive(Clone, Debug)]
pub struct LayoutInput<'a> {
    /// Positions from the previous pass, local to the previous viewport.
    pub positions: ItemPositionMap,
    /// Size cache owned by the pattern.
    pub pos_map: ArcListPositionMap,
    /// Optional out-of-band item sizes.
    pub children_size: Option<&'a ChildrenMainSize>,
    /// The request this pass acts on.
    pub intent: ScrollIntent,
    /// Content offset of the viewport top before this pass.
    pub total_offset: f64,
    /// Viewport main-axis size.
    pub content_main_size: f64,
    /// Viewport main-axis size used by the previous pass.
    pub prev_content_main_size: f64,
    /// Viewport cross-axis size.
    pub cross_size: f64,
    /// Gap between adjacent items.
    pub space: f64,
    /// Items to keep laid out beyond each end of the viewport.
    pub cached_count: usize,
    /// Whether this pass may leave the content past an end.
    pub can_over_scroll: bool,
    /// Whether the list uses a spring edge effect.
    pub is_spring_effect: bool,
    /// Gesture velocity scale used by the snap velocity threshold.
    pub velocity_scale: f64,
    /// Outstanding snap prediction.
    pub snap: SnapPrediction,
    /// Header state from the previous pass.
    pub header: HeaderState,
}

/// Result of a pass, handed back to the pattern.
#[derive(Clone, Debug)]
pub struct LayoutOutput {
    /// Visible items, local to the new viewport, with curvature applied.
    pub positions: ItemPositionMap,
    /// Items laid out beyond the viewport.
    pub cached: SmallVec<[CachedItem; 4]>,
    /// Updated size cache.
    pub pos_map: ArcListPositionMap,
    /// Content offset of the viewport top after this pass.
    pub total_offset: f64,
    /// Scroll delta actually applied (after edge clamping).
    pub current_offset: f64,
    /// Shift applied to `total_offset` when item 0 re-anchored it, on top of
    /// `current_offset`.
    pub anchor_correction: f64,
    /// Viewport main-axis size.
    pub content_main_size: f64,
    /// Padding that lets the first item rest centred.
    pub content_start_offset: f64,
    /// Padding that lets the last item rest centred.
    pub content_end_offset: f64,
    /// Item straddling the viewport centre.
    pub mid_index: Option<usize>,
    /// Number of list items.
    pub item_count: usize,
    /// Whether the pass relaid out from scratch.
    pub is_jump: bool,
    /// Resolved scroll-to target, if one was pending.
    pub target_index: Option<usize>,
    /// Snap prediction after refinement.
    pub snap: SnapPrediction,
    /// Header state to carry into the next pass.
    pub header: HeaderState,
}

/// A single arc-list layout pass.
#[derive(Debug)]
pub struct ArcListLayoutAlgorithm<'a> {
    pub(crate) item_position: ItemPositionMap,
    prev_positions: ItemPositionMap,
    cached: SmallVec<[CachedItem; 4]>,
    pub(crate) pos_map: ArcListPositionMap,
    children_size: Option<&'a ChildrenMainSize>,
    intent: ScrollIntent,
    jump_index: Option<usize>,
    pub(crate) target_index: Option<usize>,
    pub(crate) current_offset: f64,
    pub(crate) total_offset: f64,
    start_main_pos: f64,
    end_main_pos: f64,
    pub(crate) content_main_size: f64,
    prev_content_main_size: f64,
    cross_size: f64,
    pub(crate) space: f64,
    pub(crate) content_start_offset: f64,
    pub(crate) content_end_offset: f64,
    pub(crate) total_item_count: usize,
    cached_count: usize,
    can_over_scroll: bool,
    pub(crate) is_spring_effect: bool,
    pub(crate) velocity_scale: f64,
    forward_feature: bool,
    backward_feature: bool,
    need_estimate_offset: bool,
    pub(crate) snap: SnapPrediction,
    header: HeaderState,
    has_header: bool,
    header_cross_size: f64,
    mid_index: Option<usize>,
    anchor_correction: f64,
}

impl<'a> ArcListLayoutAlgorithm<'a> {
    /// Builds a pass from the pattern's snapshot.
    #[must_use]
    pub fn new(input: LayoutInput<'a>) -> Self {
        let current_offset = input.intent.delta();
        Self {
            item_position: ItemPositionMap::new(),
            prev_positions: input.positions,
            cached: SmallVec::new(),
            pos_map: input.pos_map,
            children_size: input.children_size,
            intent: input.intent,
            jump_index: None,
            target_index: None,
            current_offset,
            total_offset: input.total_offset,
            start_main_pos: current_offset,
            end_main_pos: current_offset + input.content_main_size,
            content_main_size: input.content_main_size,
            prev_content_main_size: input.prev_content_main_size,
            cross_size: input.cross_size,
            space: input.space,
            content_start_offset: 0.0,
            content_end_offset: 0.0,
            total_item_count: 0,
            cached_count: input.cached_count,
            can_over_scroll: input.can_over_scroll,
            is_spring_effect: input.is_spring_effect,
            velocity_scale: input.velocity_scale,
            forward_feature: false,
            backward_feature: false,
            need_estimate_offset: false,
            snap: input.snap,
            header: input.header,
            has_header: false,
            header_cross_size: 0.0,
            mid_index: None,
            anchor_correction: 0.0,
        }
    }

    /// Runs measure and layout against `host` and returns the result.
    pub fn run<H: ListHost + ?Sized>(mut self, host: &mut H) -> LayoutOutput {
        self.measure(host);
        self.layout(host);
        self.into_output()
    }

    /// Snap size used for every item, independent of its height.
    #[must_use]
    pub fn item_snap_size() -> f64 {
        ARC_LIST_ITEM_SNAP_SIZE
    }

    /// Tracking position of the header.
    #[must_use]
    pub fn start_header_pos(&self) -> f64 {
        self.header.start_header_pos
    }

    /// Overrides the tracking position of the header.
    pub fn set_start_header_pos(&mut self, pos: f64) {
        self.header.start_header_pos = pos;
    }

    /// Latched header hysteresis offset.
    #[must_use]
    pub fn header_offset(&self) -> f64 {
        self.header.header_offset
    }

    /// Overrides the latched header offset.
    pub fn set_header_offset(&mut self, offset: f64) {
        self.header.header_offset = offset;
        self.header.stay_near = true;
    }

    /// Positions placed so far in this pass.
    #[must_use]
    pub fn item_position(&self) -> &ItemPositionMap {
        &self.item_position
    }

    fn child_index(&self, index: usize) -> usize {
        index + self.pos_map.header_offset()
    }

    /// Measurement phase: syncs the size cache, measures the header and fills the viewport.
    pub fn measure<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        self.has_header = host.has_header();
        self.pos_map.set_header_offset(usize::from(self.has_header));
        self.pos_map
            .update_pos_map(host.child_count(), 1, self.space, self.children_size);
        self.total_item_count = self.pos_map.item_count();

        if self.has_header {
            self.measure_header(host);
        }
        if self.total_item_count == 0 {
            self.prev_positions.clear();
            self.snap.clear();
            self.intent = ScrollIntent::None;
            self.current_offset = 0.0;
            return;
        }

        self.measure_list(host);
        self.layout_cached_items(host);
        trace!(
            start = ?self.item_position.start_index(),
            end = ?self.item_position.end_index(),
            current_offset = self.current_offset,
            "arc list measured"
        );
    }

    /// Measures the header with an unbounded main axis.
    pub fn measure_header<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        let constraint = ChildConstraint::unbounded_main(self.cross_size);
        match host.measure_child(0, &constraint) {
            Some(measured) => {
                self.header.set_header_main_size(measured.size.height);
                self.header_cross_size = measured.size.width;
            }
            None => debug!("arc list header could not be resolved"),
        }
    }

    /// Chooses the anchor for this pass and lays items out from it.
    pub fn measure_list<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        let count = self.total_item_count;
        match self.intent.take() {
            ScrollIntent::Jump(index) => {
                self.jump_index = resolve_index(index, count);
                if self.jump_index.is_none() {
                    debug!(index, count, "dropping out-of-range jump");
                }
            }
            ScrollIntent::ScrollTo(index) => {
                self.target_index = resolve_index(index, count);
                if self.target_index.is_none() {
                    debug!(index, count, "dropping out-of-range scroll target");
                }
            }
            ScrollIntent::Ambient(_) | ScrollIntent::None => {}
        }

        let previous = core::mem::take(&mut self.prev_positions);
        let mut start_index = 0;
        let mut end_index = 0;
        let mut start_pos = 0.0;
        let mut end_pos = 0.0;
        let mut item_total_size = 0.0;
        let mut mid_index = 0;
        let mut mid_item_mid_pos = self.content_main_size / 2.0;
        let mut mid_item_height = None;
        if let (Some(first), Some(last)) = (previous.first_key_value(), previous.last_key_value())
        {
            start_index = (*first.0).min(count - 1);
            end_index = (*last.0).min(count - 1);
            start_pos = first.1.start_pos;
            end_pos = last.1.end_pos;
            item_total_size = end_pos - start_pos;
            if *first.0 > count - 1 && self.jump_index.is_none() {
                self.jump_index = Some(count - 1);
            }
            self.update_snap_center_content_offset();
            if let Some(mid) = straddling_index(
                &previous,
                self.prev_content_main_size / 2.0,
                self.space,
            ) {
                let pos = previous[&mid];
                mid_item_mid_pos =
                    pos.center() - self.prev_content_main_size / 2.0 + self.content_main_size / 2.0;
                mid_item_height = Some(pos.main_size());
                mid_index = mid.min(count - 1);
            }
        } else {
            self.need_estimate_offset = true;
        }

        if self.jump_index.is_some() || self.target_index.is_some() {
            if self.snap.is_pending() {
                debug!("scroll request cancels the pending snap");
            }
            self.snap.clear();
        }

        if let Some(jump) = self.jump_index {
            self.current_offset = 0.0;
            self.start_main_pos = 0.0;
            self.end_main_pos = self.content_main_size;
            self.need_estimate_offset = true;
            self.handle_jump_center(host, jump);
        } else if let Some(target) = self.target_index {
            if target >= start_index {
                self.forward_feature = true;
                self.layout_forward(host, start_index, start_pos);
                self.backfill_backward(host);
            } else {
                self.backward_feature = true;
                self.layout_backward(host, end_index, end_pos);
                self.backfill_forward(host);
            }
        } else {
            let height = self
                .measure_and_get_size(host, mid_index)
                .or(mid_item_height)
                .unwrap_or(0.0);
            let fits = self.can_over_scroll
                && less_or_equal(
                    item_total_size,
                    self.content_main_size - self.content_start_offset - self.content_end_offset,
                );
            if non_negative(self.current_offset) || fits {
                self.layout_forward(host, mid_index, mid_item_mid_pos - height / 2.0);
                self.backfill_backward(host);
            } else {
                self.layout_backward(host, mid_index, mid_item_mid_pos + height / 2.0);
                self.backfill_forward(host);
            }
        }
    }

    fn backfill_backward<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        if let (Some(first), Some(start)) = (
            self.item_position.start_index(),
            self.item_position.start_position(),
        ) && first > 0
            && great_not_equal(start, self.start_main_pos)
        {
            self.layout_backward(host, first - 1, start - self.space);
        }
    }

    fn backfill_forward<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        if let (Some(last), Some(end)) = (
            self.item_position.end_index(),
            self.item_position.end_position(),
        ) && last + 1 < self.total_item_count
            && less_not_equal(end, self.end_main_pos - self.content_end_offset)
        {
            self.layout_forward(host, last + 1, end + self.space);
        }
    }

    /// Lays out `index` centred in the viewport, then fills both directions.
    fn handle_jump_center<H: ListHost + ?Sized>(&mut self, host: &mut H, index: usize) {
        let main_len = self.measure_and_get_size(host, index).unwrap_or(0.0);
        let start_pos = (self.content_main_size - main_len) / 2.0;
        if less_not_equal(start_pos, self.end_main_pos) {
            self.layout_forward(host, index, start_pos);
        }
        self.backfill_backward(host);
        self.backfill_forward(host);
    }

    fn measure_and_get_size<H: ListHost + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
    ) -> Option<f64> {
        if let Some(table) = self.children_size {
            return Some(table.child_size(index));
        }
        let constraint = ChildConstraint::unbounded_main(self.cross_size);
        host.measure_child(self.child_index(index), &constraint)
            .map(|measured| measured.size.height)
    }

    fn measure_item<H: ListHost + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
    ) -> Option<(u64, f64, f64)> {
        let constraint = ChildConstraint::unbounded_main(self.cross_size);
        let Some(measured) = host.measure_child(self.child_index(index), &constraint) else {
            debug!(index, "skipping unresolvable list item");
            return None;
        };
        let main_len = self
            .children_size
            .map_or(measured.size.height, |table| table.child_size(index));
        self.pos_map.record_measured(index, main_len);
        Some((measured.id, main_len, measured.size.width))
    }

    /// Measures item `index` and places it starting at `start_pos`.
    ///
    /// Returns the number of items placed: `0` past the last item, otherwise `1`.
    /// A child the host cannot resolve still counts as consumed but leaves no
    /// position behind.
    pub fn layout_a_line_forward<H: ListHost + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
        start_pos: f64,
    ) -> usize {
        if index >= self.total_item_count {
            return 0;
        }
        if let Some((id, main_len, cross)) = self.measure_item(host, index) {
            let mut pos = ItemPosition::new(id, start_pos, start_pos + main_len);
            pos.cross_size = cross;
            self.item_position.insert(index, pos);
            self.on_item_position_add_or_update(index);
        }
        1
    }

    /// Measures item `index` and places it ending at `end_pos`.
    ///
    /// Same return contract as [`Self::layout_a_line_forward`].
    pub fn layout_a_line_backward<H: ListHost + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
        end_pos: f64,
    ) -> usize {
        if index >= self.total_item_count {
            return 0;
        }
        if let Some((id, main_len, cross)) = self.measure_item(host, index) {
            let mut pos = ItemPosition::new(id, end_pos - main_len, end_pos);
            pos.cross_size = cross;
            self.item_position.insert(index, pos);
            self.on_item_position_add_or_update(index);
        }
        1
    }

    /// Places items from `start_index` downward until the viewport end is passed.
    pub fn layout_forward<H: ListHost + ?Sized>(
        &mut self,
        host: &mut H,
        start_index: usize,
        start_pos: f64,
    ) {
        let end_main_pos = self.end_main_pos;
        let mut current_end = start_pos;
        let mut index = start_index;
        loop {
            let current_start = current_end;
            if self.layout_a_line_forward(host, index, current_start) == 0 {
                break;
            }
            if let Some(pos) = self.item_position.get(&index) {
                current_end = pos.end_pos;
                if index + 1 < self.total_item_count {
                    current_end += self.space;
                }
            }
            if self.forward_feature && self.target_index.is_some_and(|target| index >= target) {
                self.forward_feature = false;
            }
            index += 1;
            if !(less_or_equal(current_end, end_main_pos) || self.forward_feature) {
                break;
            }
        }

        if self.target_index.is_none() {
            while let Some((&last, pos)) = self.item_position.last_key_value() {
                if great_not_equal(pos.end_pos, end_main_pos)
                    && great_or_equal(pos.start_pos, end_main_pos)
                {
                    self.item_position.remove(&last);
                } else {
                    break;
                }
            }
        }

        self.update_snap_center_content_offset();
        if less_not_equal(current_end, self.end_main_pos - self.content_end_offset)
            && let (Some(first_index), Some(first_top)) = (
                self.item_position.start_index(),
                self.item_position.start_position(),
            )
        {
            self.end_main_pos = current_end + self.content_end_offset;
            self.start_main_pos = self.end_main_pos - self.content_main_size;
            let item_total_size =
                current_end - first_top + self.content_end_offset + self.content_start_offset;
            if less_or_equal(item_total_size, self.content_main_size) && first_index == 0 {
                if !self.can_over_scroll {
                    self.current_offset = first_top - self.content_start_offset;
                    self.start_main_pos = self.current_offset;
                    self.end_main_pos = self.start_main_pos + self.content_main_size;
                }
            } else if !self.can_over_scroll || self.jump_index.is_some() {
                self.current_offset =
                    current_end + self.content_end_offset - self.content_main_size;
            }
        }

        let start_main_pos = self.start_main_pos;
        while let Some((&first, pos)) = self.item_position.first_key_value() {
            if great_not_equal(pos.end_pos, start_main_pos)
                || great_or_equal(pos.start_pos, start_main_pos)
            {
                break;
            }
            self.item_position.remove(&first);
        }
    }

    /// Places items from `end_index` upward until the viewport start is passed.
    pub fn layout_backward<H: ListHost + ?Sized>(
        &mut self,
        host: &mut H,
        end_index: usize,
        end_pos: f64,
    ) {
        let start_main_pos = self.start_main_pos;
        let mut current_start = end_pos;
        let mut index = Some(end_index);
        while let Some(i) = index {
            let current_end = current_start;
            if self.layout_a_line_backward(host, i, current_end) == 0 {
                break;
            }
            if let Some(pos) = self.item_position.get(&i) {
                current_start = pos.start_pos;
                if i > 0 {
                    current_start -= self.space;
                }
            }
            if self.backward_feature && self.target_index.is_some_and(|target| i <= target) {
                self.backward_feature = false;
            }
            index = i.checked_sub(1);
            if !(great_not_equal(current_start, start_main_pos) || self.backward_feature) {
                break;
            }
        }

        self.update_snap_center_content_offset();
        if great_not_equal(current_start, self.start_main_pos + self.content_start_offset)
            && !self.item_position.is_empty()
        {
            if !self.can_over_scroll || self.jump_index.is_some() {
                self.current_offset = current_start - self.content_start_offset;
            }
            self.start_main_pos = current_start - self.content_start_offset;
            self.end_main_pos = self.start_main_pos + self.content_main_size;
        }

        let end_main_pos = self.end_main_pos;
        if self.target_index.is_none() {
            while let Some((&last, pos)) = self.item_position.last_key_value() {
                if less_not_equal(pos.start_pos, end_main_pos)
                    || less_or_equal(pos.end_pos, end_main_pos)
                {
                    break;
                }
                self.item_position.remove(&last);
            }
        }
    }

    /// Updates the centring padding from the first and last item sizes.
    ///
    /// The padding lets the first (last) item rest centred when the list is
    /// scrolled to its start (end). Sizes come from the position map, so the
    /// padding is known once the item has ever been measured.
    pub(crate) fn update_snap_center_content_offset(&mut self) {
        if self.total_item_count == 0 {
            return;
        }
        if self.pos_map.is_measured(0) {
            let first = self.pos_map.position_info(0).main_size;
            self.content_start_offset = ((self.content_main_size - first) / 2.0).max(0.0);
        }
        let last_index = self.total_item_count - 1;
        if self.pos_map.is_measured(last_index) {
            let last = self.pos_map.position_info(last_index).main_size;
            self.content_end_offset = ((self.content_main_size - last) / 2.0).max(0.0);
        }
    }

    fn layout_cached_items<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        if self.cached_count == 0 {
            return;
        }
        if let (Some(last), Some(mut end)) = (
            self.item_position.end_index(),
            self.item_position.end_position(),
        ) {
            for index in (last + 1..self.total_item_count).take(self.cached_count) {
                let Some((id, main_len, cross)) = self.measure_item(host, index) else {
                    continue;
                };
                let start = end + self.space;
                end = start + main_len;
                let mut pos = ItemPosition::new(id, start, end);
                pos.cross_size = cross;
                self.cached.push((index, pos));
            }
        }
        if let (Some(first), Some(mut start)) = (
            self.item_position.start_index(),
            self.item_position.start_position(),
        ) {
            for index in (0..first).rev().take(self.cached_count) {
                let Some((id, main_len, cross)) = self.measure_item(host, index) else {
                    continue;
                };
                let end = start - self.space;
                start = end - main_len;
                let mut pos = ItemPosition::new(id, start, end);
                pos.cross_size = cross;
                self.cached.push((index, pos));
            }
        }
    }

    /// Index of the item straddling the viewport centre.
    ///
    /// With `use_prev_size` the previous viewport size is used, which is what
    /// the anchor of the next pass needs. Returns `None` for an empty list.
    #[must_use]
    pub fn mid_index(&self, use_prev_size: bool) -> Option<usize> {
        let size = if use_prev_size {
            self.prev_content_main_size
        } else {
            self.content_main_size
        };
        if self.total_item_count == 0 {
            return None;
        }
        straddling_index(&self.item_position, size / 2.0, self.space)
            .map(|index| index.min(self.total_item_count - 1))
    }

    /// Layout phase: moves positions into the new viewport, applies curvature,
    /// refines the snap prediction and writes render properties to the host.
    pub fn layout<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        let shift = -self.current_offset;
        self.item_position.translate_all(shift);
        for (_, pos) in &mut self.cached {
            pos.translate(shift);
        }

        if self.need_estimate_offset {
            if let (Some(first), Some(start)) = (
                self.item_position.start_index(),
                self.item_position.start_position(),
            ) {
                self.total_offset = self.pos_map.position_info(first).main_pos - start;
            }
        } else {
            self.total_offset += self.current_offset;
        }
        // Item 0 starts at content 0; drop any estimate error once it is back.
        if let Some(first) = self.item_position.get(&0) {
            let anchored = -first.start_pos;
            if !self.need_estimate_offset {
                self.anchor_correction = anchored - self.total_offset;
                if let Some(end_pos) = self.snap.predict_snap_end_pos.as_mut() {
                    *end_pos += self.anchor_correction;
                }
            }
            self.total_offset = anchored;
        }

        self.update_snap_center_content_offset();
        self.fix_predict_snap_offset();
        self.mid_index =
            generate_item_offset(&mut self.item_position, self.content_main_size, self.space);
        self.fix_item_layout_offset(host);
        if self.has_header {
            self.layout_header(host);
        }
    }

    /// Writes frame offsets and curvature transforms of every laid-out item.
    pub fn fix_item_layout_offset<H: ListHost + ?Sized>(&self, host: &mut H) {
        let mid = self.mid_index.unwrap_or(0);
        for (&index, pos) in &self.item_position {
            let child = self.child_index(index);
            let x = (self.cross_size - pos.cross_size) / 2.0;
            host.set_child_offset(child, Point::new(x, pos.start_pos));
            host.update_translate(child, Vec2::new(0.0, pos.offset_y));
            host.update_transform_scale(child, pos.scale);
            let z_index = i32::try_from(mid.abs_diff(index)).map_or(i32::MIN, |d| -d);
            host.update_z_index(child, z_index);
        }
        for (index, pos) in &self.cached {
            let child = self.child_index(*index);
            let x = (self.cross_size - pos.cross_size) / 2.0;
            host.set_child_offset(child, Point::new(x, pos.start_pos));
        }
    }

    /// Positions the header above the first item and applies its fade.
    pub fn layout_header<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        let first = self.item_position.get(&0).copied();
        if first.is_none() && self.need_estimate_offset {
            self.header.hide();
        } else {
            self.header.track(first.as_ref(), self.current_offset);
        }
        let x = (self.cross_size - self.header_cross_size) / 2.0;
        host.set_child_offset(0, Point::new(x, self.header.display_pos()));
        host.update_opacity(0, self.header.opacity());
    }

    /// Consumes the pass.
    #[must_use]
    pub fn into_output(self) -> LayoutOutput {
        let content_main_size = if near_zero(self.content_main_size) {
            0.0
        } else {
            self.content_main_size
        };
        LayoutOutput {
            positions: self.item_position,
            cached: self.cached,
            pos_map: self.pos_map,
            total_offset: self.total_offset,
            current_offset: self.current_offset,
            anchor_correction: self.anchor_correction,
            content_main_size,
            content_start_offset: self.content_start_offset,
            content_end_offset: self.content_end_offset,
            mid_index: self.mid_index,
            item_count: self.total_item_count,
            is_jump: self.jump_index.is_some(),
            target_index: self.target_index,
            snap: self.snap,
            header: self.header,
        }
    }
}
