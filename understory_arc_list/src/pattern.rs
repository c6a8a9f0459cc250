// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state owner of an arc list.
//!
//! [`ArcListPattern`] turns gestures, flings and API calls into a single
//! [`ScrollIntent`] per frame, runs one [`ArcListLayoutAlgorithm`] pass with it
//! and keeps the result to answer queries, drive snap animations and report
//! events.

use alloc::vec::Vec;

use kurbo::Size;
use tracing::{debug, trace};

use crate::algorithm::{ArcListLayoutAlgorithm, LayoutInput, LayoutOutput};
use crate::animation::{AnimationKind, ScrollAnimation};
use crate::drag::DragState;
use crate::event::ArcListEvent;
use crate::float::{
    great_not_equal, great_or_equal, less_not_equal, less_or_equal, near_equal, near_zero,
    positive,
};
use crate::header::HeaderState;
use crate::host::ListHost;
use crate::intent::{LAST_ITEM, ScrollIntent, resolve_index};
use crate::physics::{ArcScrollPhysics, ScrollPhysics};
use crate::position::{ItemPosition, ItemPositionMap, ItemPositionMapExt};
use crate::position_map::ArcListPositionMap;
use crate::properties::ArcListProperties;
use crate::scroll_bar::{OverScrollOffset, ScrollBarState};
use crate::snap::{ARC_LIST_ITEM_SNAP_SIZE, SnapCorrector, SnapPrediction};
use crate::theme::ArcListTheme;

/// Share of the snap size the content must travel before a short fling rolls
/// to the next item.
pub const MOVE_THRESHOLD_FACTOR: f64 = 0.4;

/// Damping applied to the drag correction for curvature.
pub const DRAG_FIX_OFFSET_RATIO: f64 = 0.85;

/// Where a scroll delta came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollSource {
    /// A finger drag.
    Drag,
    /// A snap or scroll-to animation frame.
    Animation,
    /// A spring-back animation frame.
    Spring,
    /// A programmatic scroll.
    #[default]
    Api,
    /// Digital crown rotation.
    Crown,
}

/// Scroll physics and per-frame driver of an arc list.
#[derive(Clone, Debug)]
pub struct ArcListPattern {
    properties: ArcListProperties,
    physics: ArcScrollPhysics,
    pos_map: ArcListPositionMap,
    item_positions: ItemPositionMap,
    intent: ScrollIntent,
    source: ScrollSource,
    total_offset: f64,
    viewport: Size,
    content_start_offset: f64,
    content_end_offset: f64,
    item_count: usize,
    center_index: Option<usize>,
    snap: SnapPrediction,
    header: HeaderState,
    pub(crate) drag: DragState,
    pub(crate) scroll_start_mid_index: Option<usize>,
    animation: Option<ScrollAnimation>,
    scroll_bar: ScrollBarState,
    events: Vec<ArcListEvent>,
    scrolling: bool,
    initialized: bool,
    reached_start: bool,
    reached_end: bool,
}

impl ArcListPattern {
    /// Creates a pattern with default properties.
    ///
    /// With a theme the list uses arc-list friction and the theme's velocity
    /// scale. Without one the generic list defaults are kept.
    #[must_use]
    pub fn new(theme: Option<&ArcListTheme>) -> Self {
        let physics = match theme {
            Some(theme) => {
                let mut physics = ArcScrollPhysics::arc(theme.velocity_scale);
                physics.set_friction(theme.friction);
                physics
            }
            None => ArcScrollPhysics::default(),
        };
        Self {
            properties: ArcListProperties::default(),
            physics,
            pos_map: ArcListPositionMap::new(0),
            item_positions: ItemPositionMap::new(),
            intent: ScrollIntent::None,
            source: ScrollSource::Api,
            total_offset: 0.0,
            viewport: Size::ZERO,
            content_start_offset: 0.0,
            content_end_offset: 0.0,
            item_count: 0,
            center_index: None,
            snap: SnapPrediction::default(),
            header: HeaderState::default(),
            drag: DragState::default(),
            scroll_start_mid_index: None,
            animation: None,
            scroll_bar: ScrollBarState::default(),
            events: Vec::new(),
            scrolling: false,
            initialized: false,
            reached_start: false,
            reached_end: false,
        }
    }

    /// Replaces the properties, builder style.
    #[must_use]
    pub fn with_properties(mut self, properties: ArcListProperties) -> Self {
        self.set_properties(properties);
        self
    }

    /// Replaces the properties. A friction override is applied immediately.
    pub fn set_properties(&mut self, properties: ArcListProperties) {
        if let Some(friction) = properties.friction {
            self.physics.set_friction(friction);
        }
        self.properties = properties;
    }

    /// Current properties.
    #[must_use]
    pub fn properties(&self) -> &ArcListProperties {
        &self.properties
    }

    /// Sets the fling friction; non-positive values select the arc-list default.
    pub fn set_friction(&mut self, friction: f64) {
        self.physics.set_friction(friction);
    }

    /// Fling friction in use.
    #[must_use]
    pub fn friction(&self) -> f64 {
        self.physics.friction()
    }

    /// Multiplier applied to release velocities.
    #[must_use]
    pub fn velocity_scale(&self) -> f64 {
        self.physics.velocity_scale()
    }

    // --- intents ---

    /// Queues a scroll by `delta` in gesture space: negative moves the content
    /// toward its end.
    ///
    /// Drag deltas are corrected for curvature and, past an end with a spring
    /// edge effect, damped by the over-scroll resistance. Returns `false` for a
    /// non-finite delta.
    pub fn update_current_offset(&mut self, delta: f64, source: ScrollSource) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let mut delta = delta;
        if source == ScrollSource::Drag {
            delta = self.fix_scroll_offset(delta, source);
            if self.properties.is_spring_effect() {
                let over = self.out_boundary_offset_with(self.intent.delta() - delta);
                let over = over.start.max(over.end);
                if positive(over) {
                    delta *= 1.0 - self.get_scroll_update_friction(over);
                }
            }
        }
        self.begin_scroll();
        self.intent.merge(ScrollIntent::Ambient(-delta));
        self.source = source;
        true
    }

    /// Queues a scroll to item `index` ([`LAST_ITEM`] for the last one).
    ///
    /// `smooth` extends the window toward the target and animates there;
    /// otherwise the list jumps with the target centred. Out-of-range indices
    /// are dropped and leave the list untouched.
    pub fn scroll_to_index(&mut self, index: i32, smooth: bool) -> bool {
        let valid = if self.initialized {
            resolve_index(index, self.item_count).is_some()
        } else {
            index >= LAST_ITEM
        };
        if !valid {
            debug!(index, count = self.item_count, "ignoring scroll to invalid index");
            return false;
        }
        self.animation = None;
        self.snap.clear();
        self.scroll_start_mid_index = None;
        self.intent.merge(if smooth {
            ScrollIntent::ScrollTo(index)
        } else {
            ScrollIntent::Jump(index)
        });
        true
    }

    /// Jumps to item `index` with it centred.
    pub fn jump_to_index(&mut self, index: i32) -> bool {
        self.scroll_to_index(index, false)
    }

    // --- gestures ---

    /// Starts a drag, interrupting any animation.
    pub fn on_drag_start(&mut self) {
        self.animation = None;
        self.snap.clear();
        self.drag.start(self.total_offset);
        self.scroll_start_mid_index = self.center_index;
        self.begin_scroll();
    }

    /// Feeds a drag delta. Ignored outside a drag.
    pub fn on_drag_update(&mut self, delta: f64) -> bool {
        if self.drag.update(delta).is_none() {
            return false;
        }
        self.update_current_offset(delta, ScrollSource::Drag)
    }

    /// Ends a drag released at `velocity` and starts settling onto an item.
    pub fn on_drag_end(&mut self, velocity: f64) -> bool {
        if let Some(travelled) = self.drag.end() {
            trace!(travelled, velocity, "drag ended");
        }
        self.fling_to_snap(velocity)
    }

    /// Flings at `velocity` and settles with an item centred.
    ///
    /// Short flings are settled directly by the one-item corrector. Longer ones
    /// hand a snap prediction to the next layout pass, which becomes an
    /// animation once the target is known. Returns `true` if the list will move.
    pub fn fling_to_snap(&mut self, velocity: f64) -> bool {
        let velocity = velocity * self.physics.velocity_scale();
        let main_pos = self.total_offset + self.intent.delta();
        if self.properties.is_spring_effect() && self.is_out_of_boundary() {
            self.scroll_start_mid_index = None;
            return self.start_spring_back();
        }

        let final_pos = self.physics.fling_final_position(main_pos, velocity);
        if let Some((_, corrected)) = self.fix_scroll_param(main_pos, velocity, final_pos) {
            debug!(main_pos, final_pos, corrected, "one-item snap");
            self.snap.clear();
            if near_equal(corrected, main_pos) {
                self.settle();
                return false;
            }
            self.animation = Some(ScrollAnimation::new(
                AnimationKind::Snap,
                main_pos,
                corrected,
            ));
            self.begin_scroll();
            return true;
        }

        debug!(main_pos, final_pos, velocity, "predicting snap");
        self.snap = SnapPrediction::new(main_pos - final_pos, velocity);
        self.begin_scroll();
        true
    }

    // --- fling correction ---

    /// Corrects a fling landing to a one-item snap, if one applies.
    ///
    /// Returns the velocity that reaches the corrected landing together with
    /// the landing itself.
    pub fn fix_scroll_param(
        &mut self,
        main_pos: f64,
        velocity: f64,
        final_pos: f64,
    ) -> Option<(f64, f64)> {
        let corrected = self.get_one_item_snap_pos_by_final_pos(main_pos, final_pos)?;
        let corrected_velocity = self.physics.fling_velocity(main_pos, corrected);
        trace!(velocity, corrected_velocity, "fling velocity corrected");
        Some((corrected_velocity, corrected))
    }

    /// One-item snap for short flings.
    ///
    /// Consumes the item that was centred when the gesture started. If the
    /// landing stays within that item, the list either rolls to the neighbour
    /// (once the landing is at least `snap size * 0.4` from the item centre) or
    /// keeps the landing. Returns `None` when the start item is unknown or the
    /// landing leaves it, so the layout pass predicts the snap instead.
    pub fn get_one_item_snap_pos_by_final_pos(
        &mut self,
        main_pos: f64,
        final_pos: f64,
    ) -> Option<f64> {
        let start_index = self.scroll_start_mid_index.take()?;
        let start = *self.item_positions.get(&start_index)?;
        let half_content = self.viewport.height / 2.0;
        let landing = final_pos + half_content;
        let start_center = self.total_offset + start.center();
        let forward = if near_equal(final_pos, main_pos) {
            great_or_equal(landing, start_center)
        } else {
            final_pos > main_pos
        };

        let contains = |pos: &ItemPosition| {
            let band_start = self.total_offset + pos.start_pos - self.properties.space / 2.0;
            let band_end = self.total_offset + pos.end_pos + self.properties.space / 2.0;
            great_or_equal(landing, band_start) && less_not_equal(landing, band_end)
        };
        let landed = if forward {
            self.item_positions
                .range(start_index..)
                .find(|(_, pos)| contains(pos))
        } else {
            self.item_positions
                .range(..=start_index)
                .rev()
                .find(|(_, pos)| contains(pos))
        };
        if landed.map(|(index, _)| *index) != Some(start_index) {
            return None;
        }

        let moved = landing - start_center;
        let move_threshold = ARC_LIST_ITEM_SNAP_SIZE * MOVE_THRESHOLD_FACTOR;
        if libm::fabs(moved) < move_threshold {
            return Some(final_pos);
        }
        let next = if moved > 0.0 {
            Some(start_index + 1).filter(|&next| next < self.item_count)
        } else {
            start_index.checked_sub(1)
        };
        let Some(next) = next else {
            return Some(final_pos);
        };
        let next_center = match self.item_positions.get(&next) {
            Some(pos) => self.total_offset + pos.center(),
            None if self.pos_map.is_measured(next) => {
                let info = self.pos_map.position_info(next);
                info.main_pos + info.main_size / 2.0
            }
            None => return Some(final_pos),
        };
        Some(next_center - half_content)
    }

    // --- drag correction and over-scroll ---

    /// Rescales a drag delta so the finger tracks the curved content.
    ///
    /// The delta is multiplied by `(original / scaled - 1) * 0.85 + 1`, where
    /// `original` and `scaled` are the visible items' total extent before and
    /// after curvature. Other sources pass through unchanged.
    #[must_use]
    pub fn fix_scroll_offset(&self, offset: f64, source: ScrollSource) -> f64 {
        if source != ScrollSource::Drag {
            return offset;
        }
        let (original, scaled) = self
            .item_positions
            .values()
            .fold((0.0, 0.0), |(original, scaled), pos| {
                (
                    original + pos.main_size(),
                    scaled + pos.main_size() * pos.scale,
                )
            });
        if near_zero(scaled) {
            return offset;
        }
        offset * ((original / scaled - 1.0) * DRAG_FIX_OFFSET_RATIO + 1.0)
    }

    /// Over-scroll resistance for a content `over_scroll` pixels past an end.
    #[must_use]
    pub fn get_scroll_update_friction(&self, over_scroll: f64) -> f64 {
        self.physics
            .over_scroll_friction(over_scroll, self.viewport.height)
    }

    /// Signed over-scroll measured on the first and last item snap bands:
    /// positive past the start, negative past the end.
    #[must_use]
    pub fn get_snap_center_over_scroll_pos(&self) -> f64 {
        let half_content = self.viewport.height / 2.0;
        if let Some(first) = self.item_positions.get(&0) {
            let band = first.main_size().min(ARC_LIST_ITEM_SNAP_SIZE);
            let over = first.start_pos + band / 2.0 - half_content;
            if positive(over) {
                return over;
            }
        }
        if let Some(last) = self
            .item_count
            .checked_sub(1)
            .and_then(|last| self.item_positions.get(&last))
        {
            let band = last.main_size().min(ARC_LIST_ITEM_SNAP_SIZE);
            let over = last.end_pos - band / 2.0 - half_content;
            if over < 0.0 && !near_zero(over) {
                return over;
            }
        }
        0.0
    }

    /// Updates the scroll bar's over-scroll feedback.
    pub fn handle_scroll_bar_out_boundary(&mut self) {
        if self.item_positions.is_empty() || !self.is_out_of_boundary() {
            self.scroll_bar.out_boundary = 0.0;
            return;
        }
        let over = self.get_snap_center_over_scroll_pos();
        // The band of the item that is over-scrolled: item 0 past the start,
        // the last item past the end.
        let edge_index = if over > 0.0 {
            Some(0)
        } else {
            self.item_count.checked_sub(1)
        };
        let band = edge_index
            .and_then(|index| self.item_positions.get(&index))
            .map_or(ARC_LIST_ITEM_SNAP_SIZE, |pos| {
                pos.main_size().min(ARC_LIST_ITEM_SNAP_SIZE)
            });
        let limit = (self.viewport.height / 2.0 - band / 2.0).max(0.0);
        self.scroll_bar.out_boundary = libm::fabs(over).min(limit);
    }

    /// How far the content sits past each end.
    #[must_use]
    pub fn out_boundary_offset(&self) -> OverScrollOffset {
        self.out_boundary_offset_with(0.0)
    }

    fn out_boundary_offset_with(&self, pending: f64) -> OverScrollOffset {
        let mut offset = OverScrollOffset::default();
        let (Some((&first, first_pos)), Some((&last, last_pos))) = (
            self.item_positions.first_key_value(),
            self.item_positions.last_key_value(),
        ) else {
            return offset;
        };
        if first == 0 {
            offset.start = (first_pos.start_pos - pending - self.content_start_offset).max(0.0);
        }
        if last + 1 == self.item_count {
            let content = self.viewport.height;
            let available = content - self.content_end_offset - self.content_start_offset;
            let start_main = first_pos.start_pos;
            let mut end_main = last_pos.end_pos;
            if great_not_equal(available, end_main - start_main) {
                end_main = start_main + available;
            }
            offset.end = (content - self.content_end_offset - (end_main - pending)).max(0.0);
        }
        offset
    }

    /// Returns `true` if the content sits past either end.
    #[must_use]
    pub fn is_out_of_boundary(&self) -> bool {
        let offset = self.out_boundary_offset();
        positive(offset.start) || positive(offset.end)
    }

    fn start_spring_back(&mut self) -> bool {
        let over = self.out_boundary_offset();
        let end = if positive(over.start) {
            self.total_offset + over.start
        } else if positive(over.end) {
            self.total_offset - over.end
        } else {
            self.settle();
            return false;
        };
        self.start_animation(AnimationKind::Spring, end);
        true
    }

    // --- frame driving ---

    /// Runs one layout pass in a viewport of `viewport` and applies the result.
    pub fn layout<H: ListHost + ?Sized>(&mut self, host: &mut H, viewport: Size) {
        let prev_content_main_size = if self.initialized {
            self.viewport.height
        } else {
            viewport.height
        };
        if !self.initialized {
            self.initialized = true;
            let initial_index = self.properties.initial_index;
            if initial_index != 0 && !self.intent.is_index_request() {
                self.intent.merge(ScrollIntent::Jump(initial_index));
            }
        }
        self.viewport = viewport;
        let source = core::mem::take(&mut self.source);
        let can_over_scroll = self.properties.is_spring_effect()
            && matches!(source, ScrollSource::Drag | ScrollSource::Spring);

        let input = LayoutInput {
            positions: core::mem::take(&mut self.item_positions),
            pos_map: core::mem::take(&mut self.pos_map),
            children_size: self.properties.children_main_size.as_ref(),
            intent: self.intent.take(),
            total_offset: self.total_offset,
            content_main_size: viewport.height,
            prev_content_main_size,
            cross_size: viewport.width,
            space: self.properties.space,
            cached_count: self.properties.cached_count,
            can_over_scroll,
            is_spring_effect: self.properties.is_spring_effect(),
            velocity_scale: self.physics.velocity_scale(),
            snap: self.snap,
            header: self.header,
        };
        let output = ArcListLayoutAlgorithm::new(input).run(host);
        self.apply_layout(output);
    }

    fn apply_layout(&mut self, output: LayoutOutput) {
        let previous = (self.start_index(), self.end_index(), self.center_index);
        let previous_end_pos = self
            .snap
            .predict_snap_end_pos
            .map(|end_pos| end_pos + output.anchor_correction);
        if let Some(animation) = self.animation.as_mut() {
            animation.shift(output.anchor_correction);
        }

        self.item_positions = output.positions;
        self.pos_map = output.pos_map;
        self.total_offset = output.total_offset;
        self.content_start_offset = output.content_start_offset;
        self.content_end_offset = output.content_end_offset;
        self.item_count = output.item_count;
        self.center_index = output.mid_index;
        self.header = output.header;

        if !output.is_jump && !near_zero(output.current_offset) {
            self.events.push(ArcListEvent::DidScroll {
                offset: output.current_offset,
            });
        }
        let current = (self.start_index(), self.end_index(), self.center_index);
        if current != previous
            && let (Some(start), Some(end), Some(center)) = current
        {
            self.events
                .push(ArcListEvent::ScrollIndex { start, end, center });
        }
        self.update_reach_events();

        let mut snap = output.snap;
        if let Some(target) = output.target_index {
            if let Some(pos) = self.item_positions.get(&target) {
                let end = self.total_offset + pos.center() - self.viewport.height / 2.0;
                self.start_animation(AnimationKind::ScrollTo, end);
            }
        } else if let Some(offset) = snap.predict_snap_offset {
            if snap.needs_animation() {
                snap.predict_snap_offset = None;
                self.start_animation(AnimationKind::Snap, self.total_offset - offset);
            } else {
                snap.clear();
                self.settle();
            }
        } else if let (Some(animation), Some(previous), Some(refined)) = (
            self.animation.as_mut(),
            previous_end_pos,
            snap.predict_snap_end_pos,
        ) {
            if animation.kind() == AnimationKind::Snap && !near_equal(previous, refined) {
                debug!(previous, refined, "retargeting snap animation");
                animation.retarget(refined - previous);
            }
        }
        self.snap = snap;

        self.handle_scroll_bar_out_boundary();
        self.scroll_bar.offset = self.total_offset + self.content_start_offset;
        self.scroll_bar.range = (self.pos_map.total_height()
            + self.content_start_offset
            + self.content_end_offset
            - self.viewport.height)
            .max(0.0);
    }

    fn start_animation(&mut self, kind: AnimationKind, end: f64) {
        self.animation = Some(ScrollAnimation::new(kind, self.total_offset, end));
        self.begin_scroll();
    }

    /// Running animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    /// Advances the running animation to `progress` in `0..=1` and queues the
    /// resulting delta. Returns `false` if nothing is animating.
    pub fn tick_animation(&mut self, progress: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let delta = animation.advance(progress);
        let source = match animation.kind() {
            AnimationKind::Spring => ScrollSource::Spring,
            AnimationKind::Snap | AnimationKind::ScrollTo => ScrollSource::Animation,
        };
        self.update_current_offset(-delta, source)
    }

    /// Completes the running animation, lays out its last frame and settles.
    ///
    /// A snap whose target was refined during that frame continues toward the
    /// refined target; content left past an end springs back.
    pub fn finish_animation<H: ListHost + ?Sized>(&mut self, host: &mut H) {
        let Some(travel_before) = self.animation.as_ref().map(ScrollAnimation::travel) else {
            return;
        };
        self.tick_animation(1.0);
        let viewport = self.viewport;
        self.layout(host, viewport);
        let Some(done) = self.animation.take() else {
            return;
        };
        if !done.is_finished() {
            self.animation = Some(done);
            return;
        }
        if done.kind() == AnimationKind::Snap && !near_equal(done.travel(), travel_before) {
            self.start_animation(AnimationKind::Snap, done.end());
            return;
        }
        self.snap.clear();
        if self.properties.is_spring_effect() && self.is_out_of_boundary() {
            self.start_spring_back();
            return;
        }
        self.settle();
    }

    fn begin_scroll(&mut self) {
        if !self.scrolling {
            self.scrolling = true;
            self.events.push(ArcListEvent::ScrollStart);
        }
    }

    fn settle(&mut self) {
        if self.scrolling {
            self.scrolling = false;
            self.events.push(ArcListEvent::ScrollStop);
        }
    }

    fn update_reach_events(&mut self) {
        let at_top = self.is_at_top();
        if at_top && !self.reached_start {
            self.events.push(ArcListEvent::ReachStart);
        }
        self.reached_start = at_top;
        let at_bottom = self.is_at_bottom();
        if at_bottom && !self.reached_end {
            self.events.push(ArcListEvent::ReachEnd);
        }
        self.reached_end = at_bottom;
    }

    /// Drains the queued events.
    pub fn take_events(&mut self) -> Vec<ArcListEvent> {
        core::mem::take(&mut self.events)
    }

    // --- queries ---

    /// Content offset of the viewport top.
    #[must_use]
    pub fn total_offset(&self) -> f64 {
        self.total_offset
    }

    /// Visible items, local to the viewport, with curvature applied.
    #[must_use]
    pub fn item_positions(&self) -> &ItemPositionMap {
        &self.item_positions
    }

    /// First visible item.
    #[must_use]
    pub fn start_index(&self) -> Option<usize> {
        self.item_positions.start_index()
    }

    /// Last visible item.
    #[must_use]
    pub fn end_index(&self) -> Option<usize> {
        self.item_positions.end_index()
    }

    /// Item under the viewport centre.
    #[must_use]
    pub fn center_index(&self) -> Option<usize> {
        self.center_index
    }

    /// Number of list items seen by the last pass.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns `true` if the first item is centred or below the centre.
    #[must_use]
    pub fn is_at_top(&self) -> bool {
        self.item_positions
            .get(&0)
            .is_some_and(|first| great_or_equal(first.start_pos, self.content_start_offset))
    }

    /// Returns `true` if the last item is centred or above the centre.
    #[must_use]
    pub fn is_at_bottom(&self) -> bool {
        self.item_count
            .checked_sub(1)
            .and_then(|last| self.item_positions.get(&last))
            .is_some_and(|last| {
                less_or_equal(
                    last.end_pos,
                    self.viewport.height - self.content_end_offset,
                )
            })
    }

    /// Returns `true` between a scroll start and the matching stop.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Scroll bar state after the last pass.
    #[must_use]
    pub fn scroll_bar(&self) -> ScrollBarState {
        self.scroll_bar
    }

    /// Padding that lets the first item rest centred.
    #[must_use]
    pub fn content_start_offset(&self) -> f64 {
        self.content_start_offset
    }

    /// Padding that lets the last item rest centred.
    #[must_use]
    pub fn content_end_offset(&self) -> f64 {
        self.content_end_offset
    }

    /// Header placement after the last pass.
    #[must_use]
    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Outstanding snap prediction.
    #[must_use]
    pub fn snap_prediction(&self) -> SnapPrediction {
        self.snap
    }
}

impl SnapCorrector for ArcListPattern {
    fn correct(&mut self, main_pos: f64, velocity: f64, final_pos: f64) -> Option<(f64, f64)> {
        self.fix_scroll_param(main_pos, velocity, final_pos)
    }
}
