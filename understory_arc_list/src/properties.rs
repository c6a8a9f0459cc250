// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Author-facing list configuration.

use crate::children_size::ChildrenMainSize;

/// What happens when the content is dragged past an end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeEffect {
    /// Rubber-band past the end and spring back on release.
    #[default]
    Spring,
    /// Stop hard at the first and last item centres.
    None,
}

/// Layout properties of an arc list.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcListProperties {
    /// Gap between adjacent items.
    pub space: f64,
    /// Items kept laid out beyond each end of the viewport.
    pub cached_count: usize,
    /// Edge behaviour.
    pub edge_effect: EdgeEffect,
    /// Item centred by the first layout pass. Negative values other than
    /// [`LAST_ITEM`](crate::LAST_ITEM) are ignored.
    pub initial_index: i32,
    /// Explicit item sizes, used instead of measured sizes when present.
    pub children_main_size: Option<ChildrenMainSize>,
    /// Friction override; non-positive values fall back to the arc-list friction.
    pub friction: Option<f64>,
}

impl Default for ArcListProperties {
    fn default() -> Self {
        Self {
            space: 0.0,
            cached_count: 1,
            edge_effect: EdgeEffect::Spring,
            initial_index: 0,
            children_main_size: None,
            friction: None,
        }
    }
}

impl ArcListProperties {
    /// Returns `true` if the edge effect is a spring.
    #[must_use]
    pub fn is_spring_effect(&self) -> bool {
        self.edge_effect == EdgeEffect::Spring
    }
}
