// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout passes driven through `ArcListPattern`.

use understory_arc_list::{
    ArcListEvent, ArcListProperties, ItemPosition, LAST_ITEM, near_scale,
};

mod common;

use common::{ITEM_HEIGHT, MockHost, VIEWPORT, laid_out, settle};

fn spans(positions: &understory_arc_list::ItemPositionMap) -> Vec<(usize, f64, f64)> {
    positions
        .iter()
        .map(|(index, pos): (&usize, &ItemPosition)| (*index, pos.start_pos, pos.end_pos))
        .collect()
}

#[test]
fn first_pass_centres_item_zero() {
    let mut host = MockHost::uniform(6);
    let mut pattern = laid_out(&mut host, ArcListProperties::default());

    assert_eq!(pattern.total_offset(), -150.0);
    assert_eq!(pattern.center_index(), Some(0));
    assert_eq!(pattern.content_start_offset(), 150.0);
    assert_eq!(
        spans(pattern.item_positions()),
        vec![(0, 150.0, 250.0), (1, 250.0, 350.0), (2, 350.0, 450.0)]
    );
    assert!(pattern.is_at_top());
    assert!(!pattern.is_out_of_boundary());
    assert!(pattern.take_events().contains(&ArcListEvent::ReachStart));
}

#[test]
fn initial_index_lands_centred() {
    let mut host = MockHost::uniform(6);
    let pattern = laid_out(
        &mut host,
        ArcListProperties {
            initial_index: 5,
            ..ArcListProperties::default()
        },
    );

    assert_eq!(pattern.center_index(), Some(5));
    assert_eq!(
        pattern.total_offset() + VIEWPORT.height / 2.0,
        ITEM_HEIGHT * 5.5
    );
    assert!(pattern.is_at_bottom());
}

#[test]
fn invalid_jump_leaves_list_unchanged() {
    let mut host = MockHost::uniform(6);
    let mut pattern = laid_out(&mut host, ArcListProperties::default());
    let before = spans(pattern.item_positions());

    assert!(!pattern.scroll_to_index(-2, false));
    assert!(!pattern.scroll_to_index(6, false));
    assert!(!pattern.scroll_to_index(100, true));
    pattern.layout(&mut host, VIEWPORT);

    assert_eq!(pattern.total_offset(), -150.0);
    assert_eq!(spans(pattern.item_positions()), before);
}

#[test]
fn steady_state_is_idempotent() {
    let mut host = MockHost::uniform(20);
    let mut pattern = laid_out(&mut host, ArcListProperties::default());
    pattern.update_current_offset(-230.0, understory_arc_list::ScrollSource::Api);
    pattern.layout(&mut host, VIEWPORT);

    let total = pattern.total_offset();
    let positions = pattern.item_positions().clone();
    for _ in 0..3 {
        pattern.layout(&mut host, VIEWPORT);
        assert_eq!(pattern.total_offset(), total);
        assert_eq!(pattern.item_positions(), &positions);
    }
}

#[test]
fn jump_to_last_item() {
    let mut host = MockHost::uniform(6);
    let mut pattern = laid_out(&mut host, ArcListProperties::default());
    assert!(pattern.jump_to_index(LAST_ITEM));
    pattern.layout(&mut host, VIEWPORT);

    assert_eq!(pattern.center_index(), Some(5));
    assert_eq!(pattern.total_offset(), 350.0);
}

#[test]
fn smooth_scroll_animates_to_target() {
    let mut host = MockHost::uniform(6);
    let mut pattern = laid_out(&mut host, ArcListProperties::default());
    assert!(pattern.scroll_to_index(4, true));
    settle(&mut pattern, &mut host);

    assert_eq!(pattern.center_index(), Some(4));
    assert_eq!(pattern.total_offset(), 250.0);
    let events = pattern.take_events();
    assert!(events.contains(&ArcListEvent::ScrollStart));
    assert_eq!(events.last(), Some(&ArcListEvent::ScrollStop));
}

#[test]
fn render_properties_follow_curvature() {
    let mut host = MockHost::uniform(6);
    let _pattern = laid_out(&mut host, ArcListProperties::default());

    assert_eq!(host.scales[&0], near_scale(0.0));
    assert_eq!(host.scales[&1], near_scale(100.0));
    assert_eq!(host.z_indices[&0], 0);
    assert_eq!(host.z_indices[&2], -2);
    // Children are 300 wide in a 400 wide viewport.
    assert_eq!(host.offsets[&0].x, 50.0);
    assert_eq!(host.offsets[&1].y, 250.0);
    assert_eq!(host.translates[&0].y, 0.0);
}

#[test]
fn cached_items_are_placed_beyond_the_viewport() {
    let mut host = MockHost::uniform(6);
    let pattern = laid_out(&mut host, ArcListProperties::default());

    assert_eq!(pattern.end_index(), Some(2));
    assert_eq!(host.offsets[&3].y, 450.0);
    assert!(!host.scales.contains_key(&3));
}

#[test]
fn unresolvable_child_is_skipped() {
    let mut host = MockHost::uniform(6);
    host.unresolvable.push(1);
    let pattern = laid_out(&mut host, ArcListProperties::default());

    let indices: Vec<usize> = pattern.item_positions().keys().copied().collect();
    assert!(!indices.contains(&1));
    assert_eq!(pattern.item_positions()[&2].start_pos, 250.0);
}

#[test]
fn spacing_separates_items() {
    let mut host = MockHost::uniform(6);
    let pattern = laid_out(
        &mut host,
        ArcListProperties {
            space: 10.0,
            ..ArcListProperties::default()
        },
    );

    let positions = pattern.item_positions();
    assert_eq!(positions[&1].start_pos - positions[&0].end_pos, 10.0);
    assert_eq!(positions[&2].start_pos - positions[&1].end_pos, 10.0);
}

#[test]
fn empty_list_lays_out_nothing() {
    let mut host = MockHost::uniform(0);
    let pattern = laid_out(&mut host, ArcListProperties::default());

    assert!(pattern.item_positions().is_empty());
    assert_eq!(pattern.center_index(), None);
    assert_eq!(pattern.total_offset(), 0.0);
}

#[test]
fn shrinking_child_count_pulls_back_to_last_item() {
    let mut host = MockHost::uniform(20);
    let mut pattern = laid_out(
        &mut host,
        ArcListProperties {
            initial_index: 15,
            ..ArcListProperties::default()
        },
    );
    assert_eq!(pattern.center_index(), Some(15));

    host.heights.truncate(6);
    pattern.layout(&mut host, VIEWPORT);
    assert_eq!(pattern.center_index(), Some(5));
    assert!(pattern.is_at_bottom());
}
