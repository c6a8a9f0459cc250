// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_arc_list_item --heading-base-level=0

//! Understory Arc List Item: per-item visual state for arc lists.
//!
//! [`ArcListItemPattern`] tracks whether an item is hovered, pressed or
//! disabled and turns state changes into paint instructions:
//!
//! - [`ArcListItemPattern::blend_color`] is the background to blend over the
//!   item. Press takes precedence over hover.
//! - Hover and press changes return a [`ColorAnimation`] for the host to run.
//! - Disabling swaps the item's opacity for the theme's disabled alpha and
//!   restores it when re-enabled.
//! - [`ArcListItemPattern::focus_ring`] describes the focus outline.
//!
//! Every operation takes an optional [`ArcListItemTheme`]; without one they
//! do nothing and return transparent or empty values.
//!
//! ## Example
//!
//! ```rust
//! use understory_arc_list_item::{ArcListItemPattern, ArcListItemTheme};
//!
//! let theme = ArcListItemTheme::default();
//! let mut item = ArcListItemPattern::new();
//!
//! let fade_in = item.handle_hover_event(true, Some(&theme)).unwrap();
//! assert_eq!(fade_in.to, theme.hover_color);
//! assert_eq!(fade_in.duration, theme.hover_duration);
//!
//! let press = item.handle_press_event(true, Some(&theme)).unwrap();
//! assert_eq!(item.blend_color(Some(&theme)), theme.press_color);
//! assert_eq!(press.sample(1.0), theme.press_color);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod pattern;
mod theme;

pub use animation::ColorAnimation;
pub use pattern::{ArcListItemPattern, FocusRing, ItemRenderContext};
pub use theme::ArcListItemTheme;
