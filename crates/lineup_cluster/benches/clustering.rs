mod common;

use std::hint::black_box;

use common::{make_markers, markers_throughput, BACKENDS};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lineup_cluster::prelude::{cluster_with, ClusterConfig};

fn spread_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster/spread");

    for &n in &[64usize, 256, 1024, 4096] {
        let markers = make_markers(n, 1024.0, 1024.0, 0xC0FFEE);
        group.throughput(markers_throughput(&markers));

        for (name, backend) in BACKENDS {
            let config = ClusterConfig::new(30.0).with_backend(backend);
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, _| {
                b.iter(|| {
                    let items = cluster_with(&markers, &config).expect("valid radius");
                    black_box(items);
                });
            });
        }
    }

    group.finish();
}

fn dense_band_benches(c: &mut Criterion) {
    // All markers inside one y-band narrower than the radius: the sweep's
    // early termination never triggers.
    let mut group = c.benchmark_group("cluster/dense_band");

    for &n in &[64usize, 256, 1024] {
        let markers = make_markers(n, 4096.0, 10.0, 0xFACEFEED);
        group.throughput(markers_throughput(&markers));

        for (name, backend) in BACKENDS {
            let config = ClusterConfig::new(30.0).with_backend(backend);
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, _| {
                b.iter(|| {
                    let items = cluster_with(&markers, &config).expect("valid radius");
                    black_box(items);
                });
            });
        }
    }

    group.finish();
}

fn radius_sweep_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster/radius");
    let markers = make_markers(1024, 1024.0, 1024.0, 0x0BADF00D);
    group.throughput(markers_throughput(&markers));

    for &radius in &[0.0f32, 10.0, 30.0, 120.0] {
        let config = ClusterConfig::new(radius);
        group.bench_with_input(BenchmarkId::from_parameter(radius), &config, |b, config| {
            b.iter(|| {
                let items = cluster_with(&markers, config).expect("valid radius");
                black_box(items);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::clustering_criterion();
    targets = spread_benches,
              dense_band_benches,
              radius_sweep_benches
}
criterion_main!(benches);
