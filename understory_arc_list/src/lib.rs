// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_arc_list --heading-base-level=0

//! Understory Arc List: virtualized list layout and scroll physics for round displays.
//!
//! An arc list is a vertical list whose items shrink with their distance from the
//! viewport centre, which gives the illusion of content wrapped around a curved
//! surface. Scrolling always settles with an item centred.
//!
//! The crate is split along the lifetime of a frame:
//!
//! - [`ArcListPattern`] owns the scroll state. It turns drags, flings, crown
//!   rotation and API calls into a single [`ScrollIntent`] per frame, runs one
//!   layout pass and keeps the result to answer queries and drive animations.
//! - [`ArcListLayoutAlgorithm`] is one measure/layout pass. It walks forward and
//!   backward from an anchor item until the viewport is filled, computes the
//!   curvature [`near_scale`] and compensating offsets, and refines any pending
//!   centre-snap prediction.
//! - [`ArcListPositionMap`] caches item sizes and prefix positions across passes.
//! - [`ListHost`] is the scene graph: it enumerates, measures and transforms
//!   children. The crate never owns child content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_arc_list::{
//!     ArcListPattern, ArcListTheme, ChildConstraint, ListHost, MeasuredChild, ScrollSource,
//! };
//!
//! struct Rows(usize);
//!
//! impl ListHost for Rows {
//!     fn child_count(&self) -> usize {
//!         self.0
//!     }
//!
//!     fn measure_child(&mut self, index: usize, _: &ChildConstraint) -> Option<MeasuredChild> {
//!         (index < self.0).then(|| MeasuredChild {
//!             id: index as u64,
//!             size: Size::new(300.0, 100.0),
//!         })
//!     }
//! }
//!
//! let mut host = Rows(6);
//! let mut list = ArcListPattern::new(Some(&ArcListTheme::default()));
//! list.layout(&mut host, Size::new(400.0, 400.0));
//!
//! // The first item rests centred.
//! assert_eq!(list.center_index(), Some(0));
//! assert_eq!(list.total_offset(), -150.0);
//!
//! // Drag up by 60px and release: the list settles on the next item.
//! list.on_drag_start();
//! list.update_current_offset(-60.0, ScrollSource::Api);
//! list.layout(&mut host, Size::new(400.0, 400.0));
//! list.on_drag_end(0.0);
//! list.layout(&mut host, Size::new(400.0, 400.0));
//! list.finish_animation(&mut host);
//! assert_eq!(list.center_index(), Some(1));
//! ```
//!
//! Positions are main-axis coordinates. `total_offset` is the content offset of
//! the viewport top, with item `0` starting at content offset `0`.
//!
//! This crate is `no_std` and uses `alloc`. Enable the `crown` feature for
//! digital crown input.

#![no_std]

extern crate alloc;

mod algorithm;
mod animation;
mod children_size;
#[cfg(feature = "crown")]
mod crown;
mod curvature;
mod drag;
mod event;
pub mod float;
mod header;
mod host;
mod intent;
mod pattern;
mod physics;
mod position;
mod position_map;
mod properties;
mod scroll_bar;
mod snap;
mod theme;

pub use algorithm::{ArcListLayoutAlgorithm, CachedItem, LayoutInput, LayoutOutput};
pub use animation::{AnimationKind, ScrollAnimation};
pub use children_size::ChildrenMainSize;
#[cfg(feature = "crown")]
pub use crown::{CROWN_DISPLAY_CONTROL_RATIO, CrownSensitivity};
pub use curvature::{
    generate_item_offset, init_item_offset, mid_offset_scale, near_scale, straddling_index,
};
pub use drag::DragState;
pub use event::ArcListEvent;
pub use header::{HEADER_DIST, HeaderState, TRANSPARENCY_DIST};
pub use host::{ChildConstraint, ListHost, MeasuredChild};
pub use intent::{LAST_ITEM, ScrollIntent, resolve_index};
pub use pattern::{ArcListPattern, DRAG_FIX_OFFSET_RATIO, MOVE_THRESHOLD_FACTOR, ScrollSource};
pub use physics::{
    ARC_LIST_FRICTION, ArcScrollPhysics, DEFAULT_FRICTION, FRICTION_VELOCITY_SCALE,
    OVER_SCROLL_CURVE, OVER_SCROLL_RATE, ScrollPhysics, scroll_update_friction,
};
pub use position::{ItemId, ItemPosition, ItemPositionMap, ItemPositionMapExt};
pub use position_map::{ArcListPositionMap, PosMapDirty, PositionInfo};
pub use properties::{ArcListProperties, EdgeEffect};
pub use scroll_bar::{OverScrollOffset, ScrollBarState};
pub use snap::{ARC_LIST_ITEM_SNAP_SIZE, SCROLL_SNAP_VELOCITY_TH, SnapCorrector, SnapPrediction};
pub use theme::ArcListTheme;
