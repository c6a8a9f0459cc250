// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default styling of arc list items.

use core::time::Duration;

use peniko::Color;

/// Themed defaults for arc list items.
///
/// Values are resolved once by the host and passed by reference; a missing
/// theme turns every styling operation into a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcListItemTheme {
    /// Background blended over the item while hovered.
    pub hover_color: Color,
    /// Background blended over the item while pressed.
    pub press_color: Color,
    /// Horizontal content padding.
    pub padding_horizontal: f64,
    /// Vertical content padding.
    pub padding_vertical: f64,
    /// Corner radius of the item background and focus ring.
    pub border_radius: f64,
    /// Background transition between idle and hovered.
    pub hover_duration: Duration,
    /// Background transition into and out of the pressed state.
    pub press_duration: Duration,
    /// Opacity of a disabled item.
    pub disabled_alpha: f64,
    /// Focus ring colour.
    pub focus_color: Color,
    /// Focus ring stroke width.
    pub focus_width: f64,
}

impl Default for ArcListItemTheme {
    fn default() -> Self {
        Self {
            hover_color: Color::from_rgba8(255, 255, 255, 0x1a),
            press_color: Color::from_rgba8(255, 255, 255, 0x33),
            padding_horizontal: 12.0,
            padding_vertical: 8.0,
            border_radius: 24.0,
            hover_duration: Duration::from_millis(250),
            press_duration: Duration::from_millis(100),
            disabled_alpha: 0.4,
            focus_color: Color::from_rgba8(0x00, 0x7d, 0xff, 0xff),
            focus_width: 2.0,
        }
    }
}
