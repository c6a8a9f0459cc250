// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene-graph collaborator an arc list lays out into.

use kurbo::{Point, Size, Vec2};

use crate::position::ItemId;

/// Size limits handed to a child when it is measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildConstraint {
    /// Largest size the child may take. The main axis is unbounded (`f64::INFINITY`).
    pub max_size: Size,
}

impl ChildConstraint {
    /// Constraint for a vertical list: bounded cross axis, unbounded main axis.
    #[must_use]
    pub fn unbounded_main(cross_size: f64) -> Self {
        Self {
            max_size: Size::new(cross_size, f64::INFINITY),
        }
    }
}

/// Result of measuring one child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredChild {
    /// Stable identity of the child.
    pub id: ItemId,
    /// Measured frame size.
    pub size: Size,
}

/// Child enumeration, measurement and render-property mutation.
///
/// Children are addressed by their index in the host's child list. When the
/// list has a header it is child `0` and item `i` is child `i + 1`.
///
/// `measure_child` returning `None` means the child could not be resolved;
/// the layout pass skips it. The render mutations default to no-ops so
/// measurement-only hosts need not implement them.
pub trait ListHost {
    /// Number of children, header included.
    fn child_count(&self) -> usize;

    /// Returns `true` if child `0` is a header rather than a list item.
    fn has_header(&self) -> bool {
        false
    }

    /// Creates (if needed) and measures the child at `child_index`.
    fn measure_child(
        &mut self,
        child_index: usize,
        constraint: &ChildConstraint,
    ) -> Option<MeasuredChild>;

    /// Places the child's frame at `offset` within the list's content box.
    fn set_child_offset(&mut self, child_index: usize, offset: Point) {
        let _ = (child_index, offset);
    }

    /// Sets the child's render translation.
    fn update_translate(&mut self, child_index: usize, translate: Vec2) {
        let _ = (child_index, translate);
    }

    /// Sets the child's uniform render scale about its centre.
    fn update_transform_scale(&mut self, child_index: usize, scale: f64) {
        let _ = (child_index, scale);
    }

    /// Sets the child's render opacity.
    fn update_opacity(&mut self, child_index: usize, opacity: f64) {
        let _ = (child_index, opacity);
    }

    /// Sets the child's paint order.
    fn update_z_index(&mut self, child_index: usize, z_index: i32) {
        let _ = (child_index, z_index);
    }
}
