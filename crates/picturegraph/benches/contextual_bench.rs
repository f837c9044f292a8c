//! Criterion benchmarks for contextual-picture construction.
//! Compares a rebuild from scratch with cloning the prefix graph, for
//! configurations of 5, 8 and 11 objects around a triangle.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use picturegraph::prelude::*;

/// Triangle ABC with medial triangle, two medians, centroid, nine-point circle
/// and its center.
fn medial_configuration(objects: usize) -> Configuration {
    let mut cfg = Configuration::new();
    let a = cfg.add_loose(ObjectKind::Point);
    let b = cfg.add_loose(ObjectKind::Point);
    let c = cfg.add_loose(ObjectKind::Point);
    let steps: [(Construction, [usize; 3], usize); 8] = [
        (Construction::Midpoint, [a.0, b.0, 0], 2),
        (Construction::Midpoint, [b.0, c.0, 0], 2),
        (Construction::Midpoint, [c.0, a.0, 0], 2),
        (Construction::LineFromPoints, [a.0, 4, 0], 2),
        (Construction::LineFromPoints, [b.0, 5, 0], 2),
        (Construction::IntersectionOfLines, [6, 7, 0], 2),
        (Construction::Circumcircle, [3, 4, 5], 3),
        (Construction::CenterOfCircle, [9, 0, 0], 1),
    ];
    for (construction, args, arity) in steps.into_iter().take(objects.saturating_sub(3)) {
        let args: Vec<ObjectId> = args[..arity].iter().map(|&i| ObjectId(i)).collect();
        cfg.add_constructed(construction, &args)
            .expect("bench configuration is well formed");
    }
    cfg
}

/// Bundle of the full configuration and graph of its prefix.
fn setup(objects: usize) -> (ContextualPicture, PicturesOfConfiguration) {
    let full = medial_configuration(objects);
    let prefix = medial_configuration(objects - 1);
    let mut constructor = GeometryConstructor::new(PicturesCfg {
        seed: 42,
        ..PicturesCfg::default()
    });
    let (prefix_pictures, _) = constructor.construct(&prefix).expect("prefix draws");
    let (pictures, _) = constructor
        .construct_by_cloning(&prefix_pictures, &full)
        .expect("extension draws");
    let base = ContextualPicture::new(prefix_pictures).expect("prefix graph");
    (base, pictures)
}

fn bench_contextual(c: &mut Criterion) {
    let mut group = c.benchmark_group("contextual");
    for &n in &[5usize, 8, 11] {
        let (base, pictures) = setup(n);
        group.bench_with_input(BenchmarkId::new("from_scratch", n), &n, |b, _| {
            b.iter_batched(
                || pictures.clone(),
                |p| {
                    let _graph = ContextualPicture::new(p).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("by_cloning", n), &n, |b, _| {
            b.iter_batched(
                || pictures.clone(),
                |p| {
                    let _graph = base.construct_by_cloning(p).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contextual);
criterion_main!(benches);
