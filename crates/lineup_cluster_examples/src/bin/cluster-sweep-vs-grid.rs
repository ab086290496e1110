use std::time::Instant;

use lineup_cluster::prelude::*;
use lineup_cluster_examples::{init_tracing, random_lineups};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let lineups = random_lineups(6000, 2048.0, 42);
    let markers: Vec<Marker<Lineup>> = lineups.iter().map(Lineup::to_marker).collect();

    for radius in [0.0, 15.0, 30.0, 90.0] {
        let mut timings = Vec::new();
        let mut results = Vec::new();
        let mut summaries = Vec::new();
        for backend in [GroupingBackend::SweepLine, GroupingBackend::GridBucket] {
            let runner = ClusterRunner::try_new(ClusterConfig::new(radius).with_backend(backend))?;
            let mut sink = VecSink::only([ClusterEventKind::RunFinished]);
            let started = Instant::now();
            let items = runner.run_with_events(&markers, &mut sink)?;
            timings.push((backend, started.elapsed()));
            results.push(items);
            summaries.extend(sink.into_inner().into_iter().filter_map(|event| match event {
                ClusterEvent::RunFinished { summary } => Some(summary),
                _ => None,
            }));
        }

        anyhow::ensure!(summaries.len() == 2, "missing RunFinished event");
        let summary = summaries[0];
        info!(
            "r={radius}: {} clusters, {} singletons | {:?} {:?} | {:?} {:?}",
            summary.clusters,
            summary.singletons,
            timings[0].0,
            timings[0].1,
            timings[1].0,
            timings[1].1
        );
        anyhow::ensure!(
            summaries[0] == summaries[1] && results[0] == results[1],
            "backends disagree at radius {radius}"
        );
    }

    Ok(())
}
