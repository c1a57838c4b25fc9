// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation and layout.
//!
//! Measures the performance of:
//! - Previous/Next transitions over a full cycle
//! - Layout rendering for both orientations

use art_space::domain::gallery::{ArtworkIndex, Orientation, ARTWORK_COUNT};
use art_space::ui::gallery::{layout, Message, State};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark a full cycle of transitions in each direction.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for (name, message) in [("cycle_next", Message::Next), ("cycle_previous", Message::Previous)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut state = State::new();
                for _ in 0..ARTWORK_COUNT {
                    black_box(state.update(black_box(message)));
                }
                black_box(state);
            });
        });
    }

    group.finish();
}

/// Benchmark building the layout tree for every artwork and orientation.
fn bench_render_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("render_all_layouts", |b| {
        b.iter(|| {
            for index in ArtworkIndex::all() {
                for orientation in [Orientation::Portrait, Orientation::Landscape] {
                    black_box(layout::render(black_box(index), orientation));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_render_layout);
criterion_main!(benches);
