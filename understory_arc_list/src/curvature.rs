// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curvature transforms: per-item scale by distance from the viewport centre,
//! and the offsets that keep scaled neighbours packed together.

use crate::float::{great_or_equal, near_zero};
use crate::position::ItemPositionMap;

/// Constant term of the fitted scale polynomial.
pub const SCALE_A: f64 = 108.0;
/// Linear coefficient of the fitted scale polynomial.
pub const SCALE_B: f64 = -0.012414818053443355;
/// Quadratic coefficient of the fitted scale polynomial.
pub const SCALE_C: f64 = -0.0015925017083441295;
/// Cubic coefficient of the fitted scale polynomial.
pub const SCALE_D: f64 = 3.0809306290456454e-06;
/// Normalising divisor of the fitted scale polynomial.
pub const SCALE_E: f64 = 100.0;

/// Scale factor for an item whose centre sits `pos` pixels from the viewport centre.
///
/// This is an empirically fitted cubic in `|pos|`, so items equidistant above and
/// below the centre get identical scales. It peaks at `1.08` in the centre, crosses
/// `1.0` around `|pos| ≈ 72` and decreases until roughly `|pos| ≈ 348`; past that the
/// cubic term turns it back up, which is outside any realistic round viewport.
///
/// Powers go through `libm::pow` so results match the C library bit-for-bit.
#[must_use]
pub fn near_scale(pos: f64) -> f64 {
    let distance = libm::fabs(pos);
    (SCALE_A
        + SCALE_B * distance
        + SCALE_C * libm::pow(distance, 2.0)
        + SCALE_D * libm::pow(distance, 3.0))
        / SCALE_E
}

/// Assigns each item its scale and raw size delta `(end - start) * (scale - 1)`.
///
/// `center` is the viewport centre in the same coordinates as the positions.
/// After this call `offset_y` holds the raw delta; [`generate_item_offset`] turns
/// it into the final translation.
pub fn init_item_offset(positions: &mut ItemPositionMap, center: f64) {
    for pos in positions.values_mut() {
        pos.scale = near_scale(pos.center() - center);
        pos.offset_y = pos.main_size() * (pos.scale - 1.0);
    }
}

/// Index of the item straddling `center`: the first whose trailing edge plus half
/// the spacing reaches it, or the last item if none does.
#[must_use]
pub fn straddling_index(positions: &ItemPositionMap, center: f64, space: f64) -> Option<usize> {
    positions
        .iter()
        .find(|(_, pos)| great_or_equal(pos.end_pos + space / 2.0, center))
        .or_else(|| positions.last_key_value())
        .map(|(index, _)| *index)
}

/// Fraction of the mid item lying above `center`, clamped to `0..=1`.
#[must_use]
pub fn mid_offset_scale(start_pos: f64, end_pos: f64, center: f64) -> f64 {
    let size = end_pos - start_pos;
    if near_zero(size) {
        return 0.5;
    }
    ((center - start_pos) / size).clamp(0.0, 1.0)
}

/// Computes curvature scales and compensating offsets for every positioned item.
///
/// Each item is scaled about its own centre, which opens gaps between
/// neighbours. Starting from the item straddling the viewport centre, the
/// shrinkage of everything between an item and the centre is accumulated and
/// applied as a translation toward the centre, so items above ladder down and
/// items below ladder up. The mid item's own shrinkage is split at the point the
/// viewport centre crosses it, which keeps that point fixed on screen and avoids
/// a jump when the centre moves from one item to the next.
///
/// Returns the mid index, or `None` if there are no positions.
pub fn generate_item_offset(
    positions: &mut ItemPositionMap,
    content_main_size: f64,
    space: f64,
) -> Option<usize> {
    let center = content_main_size / 2.0;
    init_item_offset(positions, center);
    let mid = straddling_index(positions, center, space)?;
    let (fraction, mid_delta) = {
        let pos = positions.get(&mid)?;
        (
            mid_offset_scale(pos.start_pos, pos.end_pos, center),
            pos.offset_y,
        )
    };

    let mut accumulated = fraction * mid_delta;
    for (_, pos) in positions.range_mut(..mid).rev() {
        let delta = pos.offset_y;
        pos.offset_y = -(accumulated + delta / 2.0);
        accumulated += delta;
    }

    if let Some(pos) = positions.get_mut(&mid) {
        pos.offset_y = mid_delta * (0.5 - fraction);
    }

    let mut accumulated = (1.0 - fraction) * mid_delta;
    for (_, pos) in positions.range_mut(mid + 1..) {
        let delta = pos.offset_y;
        pos.offset_y = accumulated + delta / 2.0;
        accumulated += delta;
    }
    Some(mid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::ItemPosition;

    fn uniform(count: usize, start: f64, size: f64, space: f64) -> ItemPositionMap {
        (0..count)
            .map(|i| {
                let s = start + i as f64 * (size + space);
                (i, ItemPosition::new(i as u64, s, s + size))
            })
            .collect()
    }

    #[test]
    fn scale_is_even() {
        for p in [0.0, 1.5, 33.3, 72.0, 150.0, 199.99, 512.0] {
            assert_eq!(near_scale(p).to_bits(), near_scale(-p).to_bits());
        }
    }

    #[test]
    fn scale_at_centre_is_polynomial_constant() {
        assert_eq!(near_scale(0.0), 1.08);
    }

    #[test]
    fn scale_is_monotone_over_realistic_range() {
        let mut previous = near_scale(0.0);
        for step in 1..=3000 {
            let current = near_scale(f64::from(step) * 0.1);
            assert!(
                current <= previous,
                "scale increased at {}: {previous} -> {current}",
                f64::from(step) * 0.1
            );
            previous = current;
        }
    }

    #[test]
    fn scale_stays_positive_far_from_centre() {
        assert!(near_scale(348.0) > 0.4);
        assert!(near_scale(348.0) < 0.41);
    }

    #[test]
    fn neighbours_stay_packed_after_offsets() {
        let space = 8.0;
        let mut positions = uniform(5, 20.0, 90.0, space);
        let mid = generate_item_offset(&mut positions, 400.0, space);
        assert_eq!(mid, Some(1));
        let items: alloc::vec::Vec<_> = positions.values().copied().collect();
        for pair in items.windows(2) {
            let gap = pair[1].display_start() - pair[0].display_end();
            assert!((gap - space).abs() < 1e-9, "gap {gap} != {space}");
        }
    }

    #[test]
    fn viewport_centre_point_is_fixed_on_mid_item() {
        let mut positions = uniform(4, 30.0, 100.0, 0.0);
        let mid = generate_item_offset(&mut positions, 400.0, 0.0).unwrap();
        let pos = positions[&mid];
        let fraction = mid_offset_scale(pos.start_pos, pos.end_pos, 200.0);
        let displayed = pos.display_start() + fraction * pos.main_size() * pos.scale;
        assert!((displayed - 200.0).abs() < 1e-9);
    }

    #[test]
    fn symmetric_layout_gives_mirrored_offsets() {
        let mut positions = uniform(3, 50.0, 100.0, 0.0);
        generate_item_offset(&mut positions, 400.0, 0.0);
        assert_eq!(positions[&1].offset_y, 0.0);
        // The centre item grows, pushing its neighbours outward.
        assert!(positions[&0].offset_y < 0.0);
        assert!((positions[&0].offset_y + positions[&2].offset_y).abs() < 1e-9);
        assert_eq!(positions[&0].scale, positions[&2].scale);
    }

    #[test]
    fn empty_positions_have_no_mid() {
        let mut positions = ItemPositionMap::new();
        assert_eq!(generate_item_offset(&mut positions, 400.0, 0.0), None);
    }
}
