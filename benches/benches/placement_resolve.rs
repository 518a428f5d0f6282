// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use loft_placement::{Direction, PlacementRequest, resolve};
use loft_stacking::StackingScope;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

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

/// Anchors spread over and slightly beyond the viewport, so some flip, some
/// shift and some are hidden.
fn gen_requests(count: usize, direction: Direction) -> Vec<PlacementRequest> {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * 1400.0 - 60.0;
            let y = rng.next_f64() * 920.0 - 60.0;
            let w = 16.0 + rng.next_f64() * 64.0;
            let anchor = Rect::new(x, y, x + w, y + 32.0);
            let size = Size::new(120.0 + rng.next_f64() * 240.0, 60.0 + rng.next_f64() * 200.0);
            PlacementRequest::new(anchor, size)
                .with_direction(direction)
                .with_caret(Size::new(24.0, 12.0))
                .with_offset(12.0)
                .with_boundary(VIEWPORT)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_resolve");
    for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        let requests = gen_requests(1024, direction);
        group.throughput(Throughput::Elements(requests.len() as u64));
        group.bench_function(format!("random_{direction:?}"), |b| {
            b.iter(|| {
                for request in &requests {
                    let _ = black_box(resolve(black_box(request)));
                }
            });
        });
    }

    let unbounded: Vec<_> = gen_requests(1024, Direction::Down)
        .into_iter()
        .map(|mut r| {
            r.scroll_boundary = None;
            r
        })
        .collect();
    group.throughput(Throughput::Elements(unbounded.len() as u64));
    group.bench_function("unbounded", |b| {
        b.iter(|| {
            for request in &unbounded {
                let _ = black_box(resolve(black_box(request)));
            }
        });
    });
    group.finish();
}

fn bench_stacking_lookup(c: &mut Criterion) {
    let labels: Vec<String> = (0..32).map(|i| format!("layer{i}")).collect();
    let scope = StackingScope::new(labels.iter().map(String::as_str)).unwrap();
    let mut group = c.benchmark_group("stacking_depth");
    group.throughput(Throughput::Elements(labels.len() as u64));
    group.bench_function("depth_32_labels", |b| {
        b.iter(|| {
            for label in &labels {
                let _ = black_box(scope.depth(black_box(label)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_stacking_lookup);
criterion_main!(benches);
