use std::time::Duration;

use criterion::{Criterion, Throughput};
use lineup_cluster::prelude::{GroupingBackend, Marker, UtilityType};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A 4096 marker run finishes in well under a millisecond, so short windows
/// with many samples keep the spread tight.
pub const SAMPLE_SIZE: usize = 60;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub const BACKENDS: [(&str, GroupingBackend); 2] = [
    ("sweep_line", GroupingBackend::SweepLine),
    ("grid_bucket", GroupingBackend::GridBucket),
];

pub fn clustering_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
        .noise_threshold(0.03)
}

pub fn markers_throughput(markers: &[Marker]) -> Throughput {
    Throughput::Elements(markers.len().max(1) as u64)
}

/// `count` markers uniform over `width` x `height`, categories in rotation.
pub fn make_markers(count: usize, width: f32, height: f32, seed: u64) -> Vec<Marker> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let x = rng.random::<f32>() * width;
            let y = rng.random::<f32>() * height;
            Marker::new(format!("M{i}"), [x, y], UtilityType::ALL[i % 4])
        })
        .collect()
}
