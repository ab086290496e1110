use lineup_cluster::prelude::*;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Maps used by the demo data.
pub const MAP_NAMES: [&str; 3] = ["mirage", "inferno", "nuke"];

/// Installs a formatting subscriber, honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Random lineups spread over `extent` x `extent` map units, cycling through
/// maps, sides, and utility types.
pub fn random_lineups(count: usize, extent: f32, seed: u64) -> Vec<Lineup> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let landing = [rng.random::<f32>() * extent, rng.random::<f32>() * extent];
            let side = if rng.random::<f32>() < 0.5 {
                Side::T
            } else {
                Side::Ct
            };
            let utility = UtilityType::ALL[i % UtilityType::ALL.len()];
            let map = MAP_NAMES[i % MAP_NAMES.len()];
            Lineup::new(
                format!("{map}-{i:04}"),
                format!("{utility} #{i}"),
                map,
                side,
                utility,
                landing,
            )
        })
        .collect()
}

/// Logs one line per display item.
pub fn describe_items<P>(label: &str, items: &[DisplayItem<P>]) {
    let summary = ClusterSummary::from_items(items);
    info!(
        "{label}: {} items ({} clusters, {} singletons).",
        summary.items(),
        summary.clusters,
        summary.singletons
    );
    for item in items {
        let p = item.position();
        let ids: Vec<&str> = item.markers().iter().map(|m| m.id.as_str()).collect();
        if item.is_cluster() {
            info!(
                "  cluster  {:<8} x{} at ({:.1}, {:.1}): {:?}",
                item.category(),
                item.len(),
                p.x,
                p.y,
                ids
            );
        } else {
            info!(
                "  single   {:<8} at ({:.1}, {:.1}): {}",
                item.category(),
                p.x,
                p.y,
                ids[0]
            );
        }
    }
}
