// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for arc list integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::collections::BTreeMap;

use kurbo::{Point, Size, Vec2};
use understory_arc_list::{
    ArcListPattern, ArcListProperties, ArcListTheme, ChildConstraint, ListHost, MeasuredChild,
};

pub(crate) const ITEM_HEIGHT: f64 = 100.0;
pub(crate) const VIEWPORT: Size = Size::new(400.0, 400.0);

/// Scene graph stand-in: fixed child heights plus a log of render mutations.
#[derive(Debug, Default)]
pub(crate) struct MockHost {
    pub(crate) heights: Vec<f64>,
    pub(crate) header: Option<f64>,
    pub(crate) unresolvable: Vec<usize>,
    pub(crate) offsets: BTreeMap<usize, Point>,
    pub(crate) translates: BTreeMap<usize, Vec2>,
    pub(crate) scales: BTreeMap<usize, f64>,
    pub(crate) opacities: BTreeMap<usize, f64>,
    pub(crate) z_indices: BTreeMap<usize, i32>,
    pub(crate) measured: usize,
}

impl MockHost {
    pub(crate) fn uniform(count: usize) -> Self {
        Self {
            heights: vec![ITEM_HEIGHT; count],
            ..Self::default()
        }
    }

    pub(crate) fn with_header(mut self, size: f64) -> Self {
        self.header = Some(size);
        self
    }

    fn header_offset(&self) -> usize {
        usize::from(self.header.is_some())
    }
}

impl ListHost for MockHost {
    fn child_count(&self) -> usize {
        self.heights.len() + self.header_offset()
    }

    fn has_header(&self) -> bool {
        self.header.is_some()
    }

    fn measure_child(
        &mut self,
        child_index: usize,
        constraint: &ChildConstraint,
    ) -> Option<MeasuredChild> {
        self.measured += 1;
        let width = constraint.max_size.width * 0.75;
        if let Some(header) = self.header
            && child_index == 0
        {
            return Some(MeasuredChild {
                id: u64::MAX,
                size: Size::new(width, header),
            });
        }
        let index = child_index - self.header_offset();
        if self.unresolvable.contains(&index) {
            return None;
        }
        let height = *self.heights.get(index)?;
        Some(MeasuredChild {
            id: index as u64,
            size: Size::new(width, height),
        })
    }

    fn set_child_offset(&mut self, child_index: usize, offset: Point) {
        self.offsets.insert(child_index, offset);
    }

    fn update_translate(&mut self, child_index: usize, translate: Vec2) {
        self.translates.insert(child_index, translate);
    }

    fn update_transform_scale(&mut self, child_index: usize, scale: f64) {
        self.scales.insert(child_index, scale);
    }

    fn update_opacity(&mut self, child_index: usize, opacity: f64) {
        self.opacities.insert(child_index, opacity);
    }

    fn update_z_index(&mut self, child_index: usize, z_index: i32) {
        self.z_indices.insert(child_index, z_index);
    }
}

/// A themed pattern laid out once in the standard viewport.
pub(crate) fn laid_out(host: &mut MockHost, properties: ArcListProperties) -> ArcListPattern {
    let mut pattern =
        ArcListPattern::new(Some(&ArcListTheme::default())).with_properties(properties);
    pattern.layout(host, VIEWPORT);
    pattern
}

/// Runs layout passes and finishes animations until the list is at rest.
pub(crate) fn settle(pattern: &mut ArcListPattern, host: &mut MockHost) {
    pattern.layout(host, VIEWPORT);
    for _ in 0..8 {
        if pattern.animation().is_none() {
            break;
        }
        pattern.finish_animation(host);
    }
    assert!(pattern.animation().is_none(), "list did not settle");
}
