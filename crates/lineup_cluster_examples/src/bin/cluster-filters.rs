use lineup_cluster::prelude::*;
use lineup_cluster_examples::{describe_items, init_tracing, random_lineups};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let lineups = random_lineups(60, 400.0, 7);
    let runner = ClusterRunner::try_new(ClusterConfig::default())?;
    let mut filters = LineupFilters::new();

    let markers = markers_for_map(&lineups, "mirage", &filters);
    describe_items("mirage, all visible", &runner.run(&markers)?);

    filters.toggle_utility(UtilityType::Flash);
    filters.toggle_side(Side::Ct);
    let markers = markers_for_map(&lineups, "mirage", &filters);
    describe_items("mirage, T side without flashes", &runner.run(&markers)?);

    let mut formed = 0usize;
    let mut sink = FnSink::new(|event| {
        if let ClusterEvent::ClusterFormed { member_ids, .. } = event {
            formed += member_ids.len();
        }
    });
    let markers = markers_for_map(&lineups, "nuke", &LineupFilters::default());
    runner.run_with_events(&markers, &mut sink)?;
    info!("nuke: {formed} of {} lineups are inside a cluster", markers.len());

    Ok(())
}
