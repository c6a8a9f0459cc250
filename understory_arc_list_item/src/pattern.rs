// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover, press and disabled state of one arc list item.

use kurbo::{Insets, Rect, RoundedRect, Size};
use peniko::Color;
use tracing::trace;

use crate::animation::ColorAnimation;
use crate::theme::ArcListItemTheme;

/// Render properties an item pattern reads and writes.
pub trait ItemRenderContext {
    /// Current opacity of the item.
    fn opacity(&self) -> f64;

    /// Sets the opacity of the item.
    fn update_opacity(&mut self, opacity: f64);
}

/// Geometry and paint of an item's focus ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusRing {
    /// Ring centre line, in item-local coordinates.
    pub shape: RoundedRect,
    /// Stroke colour.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
}

/// Visual state of one arc list item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcListItemPattern {
    hovered: bool,
    pressed: bool,
    disabled: bool,
    enable_opacity: Option<f64>,
    author_opacity: Option<f64>,
}

impl ArcListItemPattern {
    /// An idle, enabled item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while hovered.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns `true` while pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns `true` while disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Records the opacity the item author set explicitly.
    pub fn set_author_opacity(&mut self, opacity: Option<f64>) {
        self.author_opacity = opacity;
    }

    /// Background blended over the item: the press colour while pressed,
    /// else the hover colour while hovered, else transparent.
    #[must_use]
    pub fn blend_color(&self, theme: Option<&ArcListItemTheme>) -> Color {
        match theme {
            Some(theme) if self.pressed => theme.press_color,
            Some(theme) if self.hovered => theme.hover_color,
            _ => Color::TRANSPARENT,
        }
    }

    /// Applies a hover change and returns the background transition to run.
    ///
    /// Returns `None` if the state did not change or there is no theme.
    pub fn handle_hover_event(
        &mut self,
        is_hover: bool,
        theme: Option<&ArcListItemTheme>,
    ) -> Option<ColorAnimation> {
        let theme = theme?;
        if self.hovered == is_hover {
            return None;
        }
        let from = self.blend_color(Some(theme));
        self.hovered = is_hover;
        let duration = if self.pressed {
            theme.press_duration
        } else {
            theme.hover_duration
        };
        trace!(is_hover, "arc list item hover changed");
        Some(ColorAnimation {
            from,
            to: self.blend_color(Some(theme)),
            duration,
        })
    }

    /// Applies a press change and returns the background transition to run.
    ///
    /// Press transitions always use the short press duration. Returns `None`
    /// if the state did not change or there is no theme.
    pub fn handle_press_event(
        &mut self,
        is_press: bool,
        theme: Option<&ArcListItemTheme>,
    ) -> Option<ColorAnimation> {
        let theme = theme?;
        if self.pressed == is_press {
            return None;
        }
        let from = self.blend_color(Some(theme));
        self.pressed = is_press;
        trace!(is_press, "arc list item press changed");
        Some(ColorAnimation {
            from,
            to: self.blend_color(Some(theme)),
            duration: theme.press_duration,
        })
    }

    /// Switches the item between enabled and disabled opacity.
    ///
    /// Disabling remembers the current opacity and applies the theme's
    /// disabled alpha. Enabling restores the remembered opacity, or the
    /// author's opacity if nothing was remembered; with neither the opacity is
    /// left alone. Without a theme this is a no-op.
    pub fn init_disable_event<R: ItemRenderContext + ?Sized>(
        &mut self,
        enabled: bool,
        theme: Option<&ArcListItemTheme>,
        render: &mut R,
    ) {
        let Some(theme) = theme else {
            return;
        };
        if !enabled {
            if !self.disabled {
                self.enable_opacity = Some(render.opacity());
            }
            self.disabled = true;
            render.update_opacity(theme.disabled_alpha);
            return;
        }
        self.disabled = false;
        if let Some(opacity) = self.enable_opacity.take().or(self.author_opacity) {
            render.update_opacity(opacity);
        }
    }

    /// Content padding from the theme, or none.
    #[must_use]
    pub fn padding(&self, theme: Option<&ArcListItemTheme>) -> Insets {
        theme.map_or(Insets::ZERO, |theme| {
            Insets::uniform_xy(theme.padding_horizontal, theme.padding_vertical)
        })
    }

    /// Focus ring around an item of `size`, drawn just outside its bounds.
    #[must_use]
    pub fn focus_ring(&self, size: Size, theme: Option<&ArcListItemTheme>) -> Option<FocusRing> {
        let theme = theme?;
        let half = theme.focus_width / 2.0;
        let shape = Rect::from_origin_size((0.0, 0.0), size)
            .inflate(half, half)
            .to_rounded_rect(theme.border_radius + half);
        Some(FocusRing {
            shape,
            color: theme.focus_color,
            width: theme.focus_width,
        })
    }
}
