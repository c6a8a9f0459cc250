// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_arc_list::{
    ArcListPattern, ArcListTheme, ChildConstraint, ItemPosition, ItemPositionMap, ListHost,
    MeasuredChild, ScrollSource, generate_item_offset, near_scale,
};

const VIEWPORT: Size = Size::new(466.0, 466.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

/// Rows with pseudo-random heights between 60 and 160.
#[derive(Clone)]
struct Rows {
    heights: Vec<f64>,
}

impl Rows {
    fn random(count: usize, seed: u64) -> Self {
        let mut rng = Lcg::new(seed);
        let heights = (0..count)
            .map(|_| 60.0 + f64::from(rng.next_u32() % 101))
            .collect();
        Self { heights }
    }
}

impl ListHost for Rows {
    fn child_count(&self) -> usize {
        self.heights.len()
    }

    fn measure_child(
        &mut self,
        child_index: usize,
        constraint: &ChildConstraint,
    ) -> Option<MeasuredChild> {
        let height = *self.heights.get(child_index)?;
        Some(MeasuredChild {
            id: child_index as u64,
            size: Size::new(constraint.max_size.width * 0.8, height),
        })
    }
}

fn laid_out(rows: &mut Rows) -> ArcListPattern {
    let mut pattern = ArcListPattern::new(Some(&ArcListTheme::default()));
    pattern.layout(rows, VIEWPORT);
    pattern
}

fn bench_curvature(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_arc_list/curvature");

    group.bench_function("near_scale(sweep 0..466)", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for step in 0..466 {
                sum += near_scale(black_box(f64::from(step) - 233.0));
            }
            black_box(sum)
        });
    });

    let positions: ItemPositionMap = (0..8_usize)
        .map(|i| {
            let start = i as f64 * 90.0 - 130.0;
            (i, ItemPosition::new(i as u64, start, start + 90.0))
        })
        .collect();
    group.bench_function("generate_item_offset(8 items)", |b| {
        b.iter_batched(
            || positions.clone(),
            |mut positions| {
                black_box(generate_item_offset(&mut positions, VIEWPORT.height, 0.0));
                black_box(positions);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_arc_list/layout");
    group.sample_size(50);

    for &count in &[100_usize, 10_000] {
        let rows = Rows::random(count, 0xA5C1_0000_0000_0001);

        group.bench_function(format!("first_pass(n={count})"), |b| {
            b.iter_batched(
                || rows.clone(),
                |mut rows| black_box(laid_out(&mut rows)),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("steady_state(n={count})"), |b| {
            let mut rows = rows.clone();
            let mut pattern = laid_out(&mut rows);
            b.iter(|| {
                pattern.layout(&mut rows, VIEWPORT);
                black_box(pattern.total_offset())
            });
        });

        group.bench_function(format!("scroll_step(n={count})"), |b| {
            b.iter_batched(
                || {
                    let mut rows = rows.clone();
                    let pattern = laid_out(&mut rows);
                    (rows, pattern)
                },
                |(mut rows, mut pattern)| {
                    for _ in 0..32 {
                        pattern.update_current_offset(-17.0, ScrollSource::Api);
                        pattern.layout(&mut rows, VIEWPORT);
                    }
                    black_box(pattern.center_index())
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("jump_to_middle(n={count})"), |b| {
            b.iter_batched(
                || {
                    let mut rows = rows.clone();
                    let pattern = laid_out(&mut rows);
                    (rows, pattern)
                },
                |(mut rows, mut pattern)| {
                    let middle = i32::try_from(count / 2).unwrap_or(0);
                    pattern.jump_to_index(middle);
                    pattern.layout(&mut rows, VIEWPORT);
                    black_box(pattern.center_index())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_curvature, bench_layout);
criterion_main!(benches);
