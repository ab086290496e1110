//! Runs the clustering engine over a marker set.
//!
//! Every call is a full recomputation: markers are put into canonical order
//! (ascending y, then id), grouped by the configured backend and turned into
//! [`DisplayItem`]s. Nothing is kept between calls.
use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::cluster::config::{validate_radius, ClusterConfig, GroupingBackend};
use crate::cluster::events::{ClusterEvent, ClusterEventKind, EventSink};
use crate::cluster::grid::GridBucketGrouping;
use crate::cluster::strategy::{GroupingPoint, GroupingStrategy};
use crate::cluster::sweep::SweepLineGrouping;
use crate::cluster::{canonical_order, centroid, ClusterSummary, DisplayItem};
use crate::error::{Error, Result};
use crate::marker::Marker;

/// Clusters `markers` with the sweep-line backend.
///
/// Fails with [`crate::error::Error::InvalidRadius`] when `radius` is negative
/// or NaN. Markers must carry finite positions and unique ids.
pub fn cluster<P: Clone>(markers: &[Marker<P>], radius: f32) -> Result<Vec<DisplayItem<P>>> {
    cluster_with_strategy(markers, radius, &SweepLineGrouping, &mut ())
}

/// Clusters `markers` using the radius and backend from `config`.
pub fn cluster_with<P: Clone>(
    markers: &[Marker<P>],
    config: &ClusterConfig,
) -> Result<Vec<DisplayItem<P>>> {
    cluster_with_events(markers, config, &mut ())
}

/// Clusters `markers` using `config`, reporting progress to `sink`.
pub fn cluster_with_events<P: Clone>(
    markers: &[Marker<P>],
    config: &ClusterConfig,
    sink: &mut dyn EventSink,
) -> Result<Vec<DisplayItem<P>>> {
    config.validate()?;
    match config.backend {
        GroupingBackend::SweepLine => {
            run_internal(markers, config.radius, Some(config.backend), &SweepLineGrouping, sink)
        }
        GroupingBackend::GridBucket => {
            run_internal(markers, config.radius, Some(config.backend), &GridBucketGrouping, sink)
        }
    }
}

/// Clusters `markers` with a caller-supplied [`GroupingStrategy`].
pub fn cluster_with_strategy<P: Clone>(
    markers: &[Marker<P>],
    radius: f32,
    strategy: &dyn GroupingStrategy,
    sink: &mut dyn EventSink,
) -> Result<Vec<DisplayItem<P>>> {
    validate_radius(radius)?;
    run_internal(markers, radius, None, strategy, sink)
}

fn run_internal<P: Clone>(
    markers: &[Marker<P>],
    radius: f32,
    backend: Option<GroupingBackend>,
    strategy: &dyn GroupingStrategy,
    sink: &mut dyn EventSink,
) -> Result<Vec<DisplayItem<P>>> {
    debug!(
        "Clustering {} markers | radius: {} | backend: {:?}.",
        markers.len(),
        radius,
        backend
    );
    if sink.wants(ClusterEventKind::RunStarted) {
        sink.send(ClusterEvent::RunStarted {
            radius,
            backend,
            marker_count: markers.len(),
        });
    }

    report_duplicate_ids(markers, sink);

    let order = canonical_order(markers);
    let points: Vec<GroupingPoint> = order
        .iter()
        .map(|&i| GroupingPoint::new(markers[i].position, markers[i].category))
        .collect();
    let groups = strategy.group(&points, radius);
    check_groups(&groups, &points)?;

    let mut items = Vec::with_capacity(groups.len());
    for group in groups {
        let mut members: Vec<Marker<P>> = group
            .iter()
            .map(|&slot| markers[order[slot]].clone())
            .collect();

        let index = items.len();
        let item = if members.len() > 1 {
            let category = members[0].category;
            let centroid = centroid(&members);
            if sink.wants(ClusterEventKind::ClusterFormed) {
                sink.send(ClusterEvent::ClusterFormed {
                    index,
                    category,
                    centroid,
                    member_ids: members.iter().map(|m| m.id.clone()).collect(),
                });
            }
            DisplayItem::Cluster {
                centroid,
                category,
                members,
            }
        } else {
            let marker = members.swap_remove(0);
            if sink.wants(ClusterEventKind::SingletonKept) {
                sink.send(ClusterEvent::SingletonKept {
                    index,
                    id: marker.id.clone(),
                    category: marker.category,
                    position: marker.position,
                });
            }
            DisplayItem::Singleton { marker }
        };
        items.push(item);
    }

    let summary = ClusterSummary::from_items(&items);
    info!(
        "Clustered {} markers into {} items | clusters: {} | singletons: {}.",
        summary.markers,
        summary.items(),
        summary.clusters,
        summary.singletons
    );
    if sink.wants(ClusterEventKind::RunFinished) {
        sink.send(ClusterEvent::RunFinished { summary });
    }

    Ok(items)
}

/// Rejects grouping results that would break the partition: empty groups,
/// out-of-range or repeated slots, uncovered slots, and mixed categories.
fn check_groups(groups: &[Vec<usize>], points: &[GroupingPoint]) -> Result<()> {
    let mut claimed = vec![false; points.len()];
    for (group_idx, group) in groups.iter().enumerate() {
        let Some(&anchor) = group.first() else {
            return Err(Error::InvalidGrouping(format!("group {group_idx} is empty")));
        };
        for &slot in group {
            let Some(point) = points.get(slot) else {
                return Err(Error::InvalidGrouping(format!(
                    "group {group_idx} references slot {slot} of {}",
                    points.len()
                )));
            };
            if std::mem::replace(&mut claimed[slot], true) {
                return Err(Error::InvalidGrouping(format!(
                    "slot {slot} appears in more than one place"
                )));
            }
            // The anchor is in range: it was the first slot checked.
            if point.category != points[anchor].category {
                return Err(Error::InvalidGrouping(format!(
                    "group {group_idx} mixes {} and {}",
                    points[anchor].category, point.category
                )));
            }
        }
    }
    if let Some(missing) = claimed.iter().position(|&c| !c) {
        return Err(Error::InvalidGrouping(format!(
            "slot {missing} is not in any group"
        )));
    }
    Ok(())
}

fn report_duplicate_ids<P>(markers: &[Marker<P>], sink: &mut dyn EventSink) {
    let mut seen = HashSet::with_capacity(markers.len());
    for marker in markers {
        if !seen.insert(marker.id.as_str()) {
            warn!(
                "Duplicate marker id '{}'; grouping order falls back to position.",
                marker.id
            );
            if sink.wants(ClusterEventKind::Warning) {
                sink.send(ClusterEvent::Warning {
                    context: format!("marker:{}", marker.id),
                    message: "Duplicate marker id".into(),
                });
            }
        }
    }
}

/// Reusable clustering entry point holding a validated [`ClusterConfig`].
pub struct ClusterRunner {
    /// Configuration applied to every run.
    pub config: ClusterConfig,
}

impl ClusterRunner {
    pub fn try_new(config: ClusterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: ClusterConfig) -> Self {
        debug_assert!(config.radius >= 0.0, "radius must be >= 0");
        Self { config }
    }

    /// Clusters the given markers.
    pub fn run<P: Clone>(&self, markers: &[Marker<P>]) -> Result<Vec<DisplayItem<P>>> {
        cluster_with(markers, &self.config)
    }

    pub fn run_with_events<P: Clone>(
        &self,
        markers: &[Marker<P>],
        sink: &mut dyn EventSink,
    ) -> Result<Vec<DisplayItem<P>>> {
        cluster_with_events(markers, &self.config, sink)
    }
}
