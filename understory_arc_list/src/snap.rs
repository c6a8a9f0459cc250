// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centre-snap prediction.
//!
//! A fling or drag release tells the layout pass how far the content is
//! expected to travel (`predict_snap_offset`). The pass turns that into the
//! content offset that centres an item, possibly over several passes while the
//! target item is still outside the window (`predict_snap_end_pos`).

use crate::algorithm::ArcListLayoutAlgorithm;
use crate::float::{great_not_equal, great_or_equal, less_not_equal, near_equal, near_zero};
use crate::position::ItemPositionMapExt;

/// Main-axis size of the band that snaps to the viewport centre.
///
/// Items shorter than this snap on their centre. Taller items may rest with the
/// viewport centre anywhere inside them that keeps the band within the item.
pub const ARC_LIST_ITEM_SNAP_SIZE: f64 = 125.0;

/// Release velocity above which a snap moves to the neighbouring item even
/// when the landing point stays on the current one. Multiplied by the
/// velocity scale.
pub const SCROLL_SNAP_VELOCITY_TH: f64 = 780.0;

/// Last-moment correction of a fling's resting position.
///
/// The fling engine asks the corrector before it commits to a landing. A
/// corrector that returns `Some((velocity, final_pos))` replaces both; `None`
/// keeps the fling as computed.
pub trait SnapCorrector {
    /// Corrects a fling from `main_pos` at `velocity` that would rest at `final_pos`.
    fn correct(&mut self, main_pos: f64, velocity: f64, final_pos: f64) -> Option<(f64, f64)>;
}

/// Snap state carried between layout passes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnapPrediction {
    /// Remaining distance the content is predicted to travel.
    pub predict_snap_offset: Option<f64>,
    /// Predicted content offset of the viewport top once the snap settles,
    /// set while the snap target is outside the window.
    pub predict_snap_end_pos: Option<f64>,
    /// Gesture velocity at release.
    pub velocity: f64,
}

impl SnapPrediction {
    /// A prediction of `offset` pixels for a release at `velocity`.
    #[must_use]
    pub fn new(offset: f64, velocity: f64) -> Self {
        Self {
            predict_snap_offset: Some(offset),
            predict_snap_end_pos: None,
            velocity,
        }
    }

    /// Returns `true` while a prediction is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.predict_snap_offset.is_some() || self.predict_snap_end_pos.is_some()
    }

    /// Returns `true` if the prediction asks for a snap animation: an offset is
    /// set and the content is not already at rest on target.
    #[must_use]
    pub fn needs_animation(&self) -> bool {
        self.predict_snap_offset
            .is_some_and(|offset| !(near_zero(offset) && near_zero(self.velocity)))
    }

    /// Drops the prediction.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ArcListLayoutAlgorithm<'_> {
    /// Turns the pending `predict_snap_offset` into an offset that centres an item.
    ///
    /// Runs after positions are local to the new viewport.
    pub fn fix_predict_snap_offset(&mut self) {
        let Some(offset) = self.snap.predict_snap_offset else {
            return;
        };
        if self.item_position.is_empty() {
            return;
        }
        let predict_end = self.total_offset - offset;
        if let Some(index) = self.find_predict_snap_end_index_in_item_positions(predict_end) {
            let end = self.calculate_predict_snap_end_position_by_index(index, predict_end);
            self.snap.predict_snap_offset = Some(self.total_offset - end);
            self.snap.predict_snap_end_pos = None;
        } else if self.is_uniform_height_probably() {
            self.fix_predict_snap_offset_align_center();
        } else {
            self.snap.predict_snap_end_pos = Some(predict_end);
        }
    }

    /// Finds the positioned item the viewport centre lands on for `predict_end`.
    ///
    /// If that is the item already under the centre, a fast release moves one
    /// item further in the release direction.
    pub fn find_predict_snap_end_index_in_item_positions(
        &self,
        predict_end: f64,
    ) -> Option<usize> {
        let stop = self.content_main_size / 2.0;
        let half_space = self.space / 2.0;
        let mut end_index = None;
        let mut current_index = None;
        for (&index, pos) in &self.item_position {
            let start = pos.start_pos - half_space;
            let end = pos.end_pos + half_space;
            let landing = predict_end + stop - self.total_offset;
            if end_index.is_none()
                && great_or_equal(landing, start)
                && less_not_equal(landing, end)
            {
                end_index = Some(index);
            }
            if current_index.is_none() && great_or_equal(stop, start) && less_not_equal(stop, end)
            {
                current_index = Some(index);
            }
            if end_index.is_some() && current_index.is_some() {
                break;
            }
        }

        let index = end_index?;
        if Some(index) != current_index {
            return Some(index);
        }
        let threshold = SCROLL_SNAP_VELOCITY_TH * self.velocity_scale;
        let first = self.item_position.start_index().unwrap_or(index);
        let last = self.item_position.end_index().unwrap_or(index);
        if self.snap.velocity < -threshold {
            Some((index + 1).min(last))
        } else if self.snap.velocity > threshold {
            Some(index.saturating_sub(1).max(first))
        } else {
            Some(index)
        }
    }

    /// Content offset of the viewport top that rests the viewport centre in the
    /// snap band of item `index`, as close to `predict_end` as the band allows.
    ///
    /// Unless the edge effect is a spring, the result never passes the offsets
    /// that centre the first or last item.
    pub fn calculate_predict_snap_end_position_by_index(
        &self,
        index: usize,
        predict_end: f64,
    ) -> f64 {
        let Some(pos) = self.item_position.get(&index) else {
            return predict_end;
        };
        let half_content = self.content_main_size / 2.0;
        let band = pos.main_size().min(Self::item_snap_size());
        let low = self.total_offset + pos.start_pos + band / 2.0;
        let high = self.total_offset + pos.end_pos - band / 2.0;
        let landing = (predict_end + half_content).clamp(low, high.max(low));
        let mut end = landing - half_content;

        if !self.is_spring_effect {
            if let Some(first) = self.item_position.get(&0) {
                end = end.max(self.total_offset + first.center() - half_content);
            }
            if let Some(last) = self
                .total_item_count
                .checked_sub(1)
                .and_then(|last| self.item_position.get(&last))
            {
                end = end.min(self.total_offset + last.center() - half_content);
            }
        }
        end
    }

    /// Refines `predict_snap_end_pos` once the item it lands on gets positioned.
    ///
    /// Called for every item placed during measurement.
    pub fn on_item_position_add_or_update(&mut self, index: usize) {
        let Some(end_pos) = self.snap.predict_snap_end_pos else {
            return;
        };
        let Some(pos) = self.item_position.get(&index) else {
            return;
        };
        let landing = end_pos + self.content_main_size / 2.0 - self.total_offset;
        let start = pos.start_pos - self.space / 2.0;
        let end = pos.end_pos + self.space / 2.0;
        if great_or_equal(landing, start) && less_not_equal(landing, end) {
            let refined = self.calculate_predict_snap_end_position_by_index(index, end_pos);
            if !near_equal(refined, end_pos) {
                self.snap.predict_snap_end_pos = Some(refined);
            }
        }
    }

    /// Returns `true` if every positioned item has the same main size.
    #[must_use]
    pub fn is_uniform_height_probably(&self) -> bool {
        let mut sizes = self.item_position.values().map(|pos| pos.main_size());
        let Some(first) = sizes.next() else {
            return true;
        };
        sizes.all(|size| near_equal(size, first))
    }

    /// Snaps to a centred item assuming every item has the size of the first
    /// positioned one.
    pub fn fix_predict_snap_offset_align_center(&mut self) {
        let (Some(offset), Some((_, first))) = (
            self.snap.predict_snap_offset,
            self.item_position.first_key_value(),
        ) else {
            return;
        };
        let half_content = self.content_main_size / 2.0;
        let half_space = self.space / 2.0;
        let item_height = first.main_size() + self.space;
        let center = |index: usize| index as f64 * item_height + item_height / 2.0 - half_space;
        let last = self.total_item_count.saturating_sub(1);
        let min_end = center(0) - half_content;
        let max_end = center(last) - half_content;

        let mut predict_end = self.total_offset - offset;
        if less_not_equal(predict_end, min_end) {
            if self.is_spring_effect {
                return;
            }
            predict_end = min_end;
        } else if great_not_equal(predict_end, max_end) {
            if self.is_spring_effect {
                return;
            }
            predict_end = max_end;
        } else {
            // Each item owns a band of `item_height` around its centre.
            let landing = predict_end + half_content;
            let index = (0..self.total_item_count)
                .find(|&i| libm::fabs(landing - center(i)) <= item_height / 2.0)
                .unwrap_or(last);
            predict_end = (center(index) - half_content).clamp(min_end, max_end.max(min_end));
        }

        self.snap.predict_snap_offset = Some(self.total_offset - predict_end);
        self.snap.predict_snap_end_pos = Some(predict_end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::LayoutInput;
    use crate::header::HeaderState;
    use crate::intent::ScrollIntent;
    use crate::position::{ItemPosition, ItemPositionMap};
    use crate::position_map::ArcListPositionMap;

    fn algorithm(total_offset: f64, positions: ItemPositionMap, count: usize) -> ArcListLayoutAlgorithm<'static> {
        let mut algorithm = ArcListLayoutAlgorithm::new(LayoutInput {
            positions: ItemPositionMap::new(),
            pos_map: ArcListPositionMap::default(),
            children_size: None,
            intent: ScrollIntent::None,
            total_offset,
            content_main_size: 400.0,
            prev_content_main_size: 400.0,
            cross_size: 400.0,
            space: 0.0,
            cached_count: 0,
            can_over_scroll: false,
            is_spring_effect: false,
            velocity_scale: 1.0,
            snap: SnapPrediction::default(),
            header: HeaderState::default(),
        });
        algorithm.item_position = positions;
        algorithm.total_item_count = count;
        algorithm
    }

    fn uniform(range: core::ops::Range<usize>, first_start: f64) -> ItemPositionMap {
        let first = range.start;
        range
            .map(|i| {
                let start = first_start + (i - first) as f64 * 100.0;
                (i, ItemPosition::new(i as u64, start, start + 100.0))
            })
            .collect()
    }

    #[test]
    fn snaps_to_item_under_landing_point() {
        // Item 1 is at content 100..200; a landing of -99 puts the centre at 101.
        let mut algorithm = algorithm(-99.0, uniform(0..3, 99.0), 6);
        algorithm.snap = SnapPrediction::new(0.0, 0.0);
        algorithm.fix_predict_snap_offset();
        assert_eq!(algorithm.snap.predict_snap_offset, Some(-99.0 - -50.0));
        assert_eq!(algorithm.snap.predict_snap_end_pos, None);
    }

    #[test]
    fn fast_release_skips_to_neighbour() {
        let mut algorithm = algorithm(-50.0, uniform(0..4, 50.0), 6);
        algorithm.snap = SnapPrediction::new(0.0, -1000.0);
        let index = algorithm.find_predict_snap_end_index_in_item_positions(-50.0);
        assert_eq!(index, Some(2));
        algorithm.snap.velocity = 1000.0;
        assert_eq!(
            algorithm.find_predict_snap_end_index_in_item_positions(-50.0),
            Some(0)
        );
        algorithm.snap.velocity = 500.0;
        assert_eq!(
            algorithm.find_predict_snap_end_index_in_item_positions(-50.0),
            Some(1)
        );
    }

    #[test]
    fn end_position_stays_between_first_and_last_centres() {
        let algorithm = algorithm(-150.0, uniform(0..3, 150.0), 3);
        assert_eq!(
            algorithm.calculate_predict_snap_end_position_by_index(0, -400.0),
            -150.0
        );
        assert_eq!(
            algorithm.calculate_predict_snap_end_position_by_index(2, 400.0),
            50.0
        );
    }

    #[test]
    fn tall_item_rests_anywhere_inside_its_band() {
        let mut positions = ItemPositionMap::new();
        positions.insert(1, ItemPosition::new(1, 0.0, 500.0));
        let algorithm = algorithm(100.0, positions, 3);
        // Band is 125 tall: the centre may rest 62.5..=437.5 into the item.
        assert_eq!(
            algorithm.calculate_predict_snap_end_position_by_index(1, 100.0),
            100.0
        );
        assert_eq!(
            algorithm.calculate_predict_snap_end_position_by_index(1, -200.0),
            100.0 + 62.5 - 200.0
        );
    }

    #[test]
    fn uniform_estimate_for_targets_outside_the_window() {
        let mut algorithm = algorithm(-150.0, uniform(0..3, 150.0), 20);
        algorithm.snap = SnapPrediction::new(-1030.0, 0.0);
        algorithm.fix_predict_snap_offset();
        // Landing centre 1080 falls in item 10 (1000..1100), centred at 1050.
        assert_eq!(algorithm.snap.predict_snap_end_pos, Some(850.0));
        assert_eq!(algorithm.snap.predict_snap_offset, Some(-1000.0));
    }

    #[test]
    fn uniform_estimate_accounts_for_spacing() {
        let mut positions = ItemPositionMap::new();
        for i in 0..3 {
            let start = 150.0 + i as f64 * 120.0;
            positions.insert(i, ItemPosition::new(i as u64, start, start + 100.0));
        }
        let mut algorithm = algorithm(-150.0, positions, 20);
        algorithm.space = 20.0;
        // Landing centre 1075 sits in item 9's band 1070..1190, centred at 1130.
        algorithm.snap = SnapPrediction::new(-150.0 - (1075.0 - 200.0), 0.0);
        algorithm.fix_predict_snap_offset();
        assert_eq!(algorithm.snap.predict_snap_end_pos, Some(1130.0 - 200.0));
        assert_eq!(algorithm.snap.predict_snap_offset, Some(-150.0 - 930.0));
    }

    #[test]
    fn item_placed_under_landing_refines_end_position() {
        let mut algorithm = algorithm(0.0, ItemPositionMap::new(), 20);
        algorithm.snap.predict_snap_end_pos = Some(830.0);
        algorithm
            .item_position
            .insert(10, ItemPosition::new(10, 1000.0, 1100.0));
        algorithm.on_item_position_add_or_update(10);
        assert_eq!(algorithm.snap.predict_snap_end_pos, Some(850.0));
    }

    #[test]
    fn at_rest_prediction_needs_no_animation() {
        assert!(!SnapPrediction::new(0.0, 0.0).needs_animation());
        assert!(SnapPrediction::new(0.0, 10.0).needs_animation());
        assert!(SnapPrediction::new(5.0, 0.0).needs_animation());
        assert!(!SnapPrediction::default().needs_animation());
    }
}
