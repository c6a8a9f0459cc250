// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Out-of-band main-axis sizes for list children.

use alloc::vec::Vec;

/// Per-item main-axis sizes supplied by the application instead of measured.
///
/// Items without an explicit entry use `default_size`. Sizes are clamped to be
/// non-negative; a change bumps [`ChildrenMainSize::generation`] so consumers
/// can tell their caches are stale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChildrenMainSize {
    default_size: f64,
    sizes: Vec<Option<f64>>,
    generation: u64,
}

impl ChildrenMainSize {
    /// Creates a table where every item defaults to `default_size`.
    #[must_use]
    pub fn new(default_size: f64) -> Self {
        Self {
            default_size: sanitize(default_size),
            sizes: Vec::new(),
            generation: 0,
        }
    }

    /// The size used for items without an explicit entry.
    #[must_use]
    pub fn default_size(&self) -> f64 {
        self.default_size
    }

    /// Replaces the default size.
    pub fn set_default_size(&mut self, size: f64) {
        self.default_size = sanitize(size);
        self.generation += 1;
    }

    /// Sets explicit sizes for `start..start + sizes.len()`.
    ///
    /// Ranges whose end does not fit in `usize` are ignored.
    pub fn update(&mut self, start: usize, sizes: &[f64]) {
        let Some(end) = start.checked_add(sizes.len()) else {
            return;
        };
        if self.sizes.len() < end {
            self.sizes.resize(end, None);
        }
        for (slot, size) in self.sizes[start..end].iter_mut().zip(sizes) {
            *slot = Some(sanitize(*size));
        }
        self.generation += 1;
    }

    /// Drops explicit sizes for `start..start + count`, reverting them to the default.
    pub fn reset(&mut self, start: usize, count: usize) {
        let end = start.saturating_add(count).min(self.sizes.len());
        for slot in self.sizes.iter_mut().take(end).skip(start) {
            *slot = None;
        }
        self.generation += 1;
    }

    /// Size of the child at `index`.
    #[must_use]
    pub fn child_size(&self, index: usize) -> f64 {
        self.sizes
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(self.default_size)
    }

    /// Returns `true` if `index` has an explicit size.
    #[must_use]
    pub fn has_explicit_size(&self, index: usize) -> bool {
        matches!(self.sizes.get(index), Some(Some(_)))
    }

    /// Counter bumped on every mutation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn sanitize(size: f64) -> f64 {
    debug_assert!(size.is_finite(), "child sizes must be finite; got {size}");
    if size.is_sign_negative() { 0.0 } else { size }
}
