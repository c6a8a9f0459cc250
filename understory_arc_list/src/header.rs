// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header that trails the first list item and fades as it leaves the top.

use crate::float::{great_not_equal, near_equal};
use crate::position::ItemPosition;

/// Gap kept between the top of the viewport and a resting header.
pub const HEADER_DIST: f64 = 40.0;

/// Distance over which the header fades out once above its resting place.
pub const TRANSPARENCY_DIST: f64 = 20.0;

/// Header placement carried from one layout pass to the next.
///
/// The header follows the displayed top of item `0`
/// (`start_header_pos = first_item_top - header_size`). The first time that puts
/// the header more than [`HEADER_DIST`] below the top, the excess is latched into
/// `header_offset`, and from then on the header is drawn `header_offset` above its
/// tracking position. This lets it sit near the top while the list rests and
/// scroll away with the content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderState {
    /// Tracking position: first item top minus the header size.
    pub start_header_pos: f64,
    /// Latched hysteresis offset; zero until `stay_near` is set.
    pub header_offset: f64,
    /// Header main-axis size from the last measure.
    pub header_main_size: f64,
    /// Item `0` size when the offset was latched.
    pub first_item_size: f64,
    /// Whether `header_offset` has been latched.
    pub stay_near: bool,
    /// Whether at least one pass has positioned the header.
    pub initialized: bool,
}

impl HeaderState {
    /// Records a new header size, dropping the latched offset if the size changed.
    pub fn set_header_main_size(&mut self, size: f64) {
        if !near_equal(self.header_main_size, size) {
            self.header_main_size = size;
            self.reset_stay_near();
        }
    }

    /// Forgets the latched offset so the next pass re-establishes it.
    pub fn reset_stay_near(&mut self) {
        self.stay_near = false;
        self.header_offset = 0.0;
    }

    /// Parks the header fully transparent above the viewport.
    pub fn hide(&mut self) {
        self.start_header_pos = -(self.header_main_size + HEADER_DIST + TRANSPARENCY_DIST);
        self.reset_stay_near();
        self.initialized = true;
    }

    /// Updates the tracking position after the items of a pass are placed.
    ///
    /// `first_item` is item `0` if it is in the window. Otherwise the header keeps
    /// following the content by `-current_offset`, or starts fully hidden on the
    /// first pass.
    pub fn track(&mut self, first_item: Option<&ItemPosition>, current_offset: f64) {
        match first_item {
            Some(item) => {
                if self.stay_near && !near_equal(self.first_item_size, item.main_size()) {
                    self.reset_stay_near();
                }
                self.first_item_size = item.main_size();
                self.start_header_pos = item.display_start() - self.header_main_size;
            }
            None if !self.initialized => self.hide(),
            None => self.start_header_pos -= current_offset,
        }

        if !self.stay_near && great_not_equal(self.start_header_pos, HEADER_DIST) {
            self.header_offset = self.start_header_pos - HEADER_DIST;
            self.stay_near = true;
        }
        self.initialized = true;
    }

    /// Main-axis position the header is drawn at.
    #[must_use]
    pub fn display_pos(&self) -> f64 {
        self.start_header_pos - self.header_offset
    }

    /// Header opacity: opaque at or below the top, fading over [`TRANSPARENCY_DIST`] above it.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        let pos = self.display_pos();
        if pos >= 0.0 {
            1.0
        } else {
            (1.0 + pos / TRANSPARENCY_DIST).max(0.0)
        }
    }
}
