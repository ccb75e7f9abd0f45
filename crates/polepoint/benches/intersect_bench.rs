//! Criterion benchmarks for hit-testing predicates and line clipping.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polepoint::clip::clip_line;
use polepoint::intersect::{
    polygon_intersects_box, polygon_intersects_buffered_point, polygon_intersects_polygon,
};
use polepoint::rand::{draw_star_polygon, regular_polygon, ReplayToken, StarCfg};
use polepoint::{BoundingBox, Point, Ring};

fn closed(mut ring: Ring) -> Ring {
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    ring
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    for &n in &[8usize, 64, 512] {
        let a = closed(regular_polygon(n, 10.0, Point::zeros()));
        let b = closed(regular_polygon(n, 10.0, Point::new(15.0, 0.0)));
        group.bench_with_input(BenchmarkId::new("polygon_polygon", n), &n, |bch, _| {
            bch.iter(|| polygon_intersects_polygon(&a, &b))
        });
        group.bench_with_input(BenchmarkId::new("buffered_point", n), &n, |bch, _| {
            bch.iter(|| polygon_intersects_buffered_point(&a, Point::new(10.5, 0.0), 1.0))
        });
        group.bench_with_input(BenchmarkId::new("box", n), &n, |bch, _| {
            bch.iter(|| polygon_intersects_box(&a, BoundingBox::new(9.0, -1.0, 12.0, 1.0)))
        });
    }
    group.finish();
}

fn bench_clip(c: &mut Criterion) {
    let cfg = StarCfg {
        min_vertices: 256,
        max_vertices: 256,
        base_radius: 4096.0,
        center: Point::new(2048.0, 2048.0),
        ..StarCfg::default()
    };
    let lines: Vec<Ring> = (0..16)
        .map(|index| closed(draw_star_polygon(cfg, ReplayToken { seed: 9, index })))
        .collect();
    let tile = BoundingBox::new(0.0, 0.0, 4096.0, 4096.0);
    c.bench_function("clip_line/star256x16", |b| b.iter(|| clip_line(&lines, tile)));
}

criterion_group!(benches, bench_intersect, bench_clip);
criterion_main!(benches);
