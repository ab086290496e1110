use lineup_cluster::prelude::*;
use lineup_cluster_examples::{describe_items, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let neighbors = vec![
        Marker::new("1", [0.0, 0.0], UtilityType::Smoke),
        Marker::new("2", [10.0, 0.0], UtilityType::Smoke),
        Marker::new("3", [100.0, 0.0], UtilityType::Smoke),
    ];
    describe_items("same type, r=30", &cluster(&neighbors, 30.0)?);

    let mixed = vec![
        Marker::new("1", [0.0, 0.0], UtilityType::Smoke),
        Marker::new("2", [10.0, 0.0], UtilityType::Flash),
        Marker::new("3", [100.0, 0.0], UtilityType::Smoke),
    ];
    describe_items("mixed types, r=30", &cluster(&mixed, 30.0)?);

    // The marker at y=40 is within reach of y=20 but not of the anchor at y=0.
    let chain = vec![
        Marker::new("a", [0.0, 0.0], UtilityType::Molotov),
        Marker::new("b", [0.0, 20.0], UtilityType::Molotov),
        Marker::new("c", [0.0, 40.0], UtilityType::Molotov),
    ];
    let items = cluster(&chain, 25.0)?;
    describe_items("collinear chain, r=25", &items);

    if let Some(item) = find_item_for_marker(&items, "b") {
        let expanded: Vec<&str> = item.markers().iter().map(|m| m.id.as_str()).collect();
        tracing::info!("expanding the item holding 'b' shows {:?}", expanded);
    }

    match cluster(&chain, -1.0) {
        Err(err) => tracing::info!("negative radius rejected: {err}"),
        Ok(_) => anyhow::bail!("negative radius was accepted"),
    }

    Ok(())
}
