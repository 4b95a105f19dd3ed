// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_dnd::{
    Axis, BoxModel, Draggable, Droppable, NestingPolicy, Resolver, droppable_over,
};

/// A board of `n` side-by-side vertical columns, each 200 wide.
fn gen_columns(n: usize) -> Vec<Droppable<u32>> {
    (0..n)
        .map(|i| {
            let x0 = i as f64 * 200.0;
            Droppable::new(
                i as u32,
                Axis::Vertical,
                BoxModel::from_border_box(Rect::new(x0, 0.0, x0 + 200.0, 1000.0)),
            )
        })
        .collect()
}

/// `depth` droppables, each inset 10 from the previous one.
fn gen_nested(depth: usize) -> Vec<Droppable<u32>> {
    (0..depth)
        .map(|i| {
            let inset = i as f64 * 10.0;
            Droppable::new(
                i as u32,
                Axis::Vertical,
                BoxModel::from_border_box(Rect::new(
                    inset,
                    inset,
                    4000.0 - inset,
                    4000.0 - inset,
                )),
            )
        })
        .collect()
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Dragged boxes scattered over a `width` × `height` page.
fn gen_drag_positions(count: usize, width: f64, height: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * width;
            let y0 = rng.next_f64() * height;
            Rect::new(x0, y0, x0 + 180.0, y0 + 60.0)
        })
        .collect()
}

fn item() -> Draggable<u32, u32> {
    Draggable::new(0, 0, 0, BoxModel::from_border_box(Rect::new(0.0, 0.0, 180.0, 60.0)))
}

fn bench_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("columns");
    let item = item();
    for &n in &[4usize, 16, 64] {
        let columns = gen_columns(n);
        let positions = gen_drag_positions(256, n as f64 * 200.0, 1000.0);
        group.throughput(Throughput::Elements(positions.len() as u64));
        group.bench_function(format!("droppable_over_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &p in &positions {
                    if droppable_over(black_box(p), &item, &columns).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested");
    let item = item();
    let dragging = Rect::new(1900.0, 1900.0, 2080.0, 1960.0);
    for &depth in &[2usize, 8, 32] {
        let nested = gen_nested(depth);
        for policy in [
            NestingPolicy::ContainmentChain,
            NestingPolicy::DeepestContainment,
        ] {
            let resolver = Resolver::with_nesting_policy(policy);
            group.bench_function(format!("{:?}_depth{}", policy, depth), |b| {
                b.iter(|| black_box(resolver.resolve(black_box(dragging), &item, &nested)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_columns, bench_nested);
criterion_main!(benches);
