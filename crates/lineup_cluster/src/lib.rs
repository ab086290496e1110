#![forbid(unsafe_code)]
//! lineup_cluster: Proximity clustering of same-type lineup markers on 2D game maps.
//!
//! Modules:
//! - marker: markers and utility categories
//! - lineup: lineup records, side/utility filters, per-map marker selection
//! - cluster: display items, configuration, grouping backends, runner, events
//!
//! For examples, see the `lineup_cluster_examples` crate.
pub mod cluster;
pub mod error;
pub mod lineup;
pub mod marker;

/// Convenient re-exports for common types. Import with `use lineup_cluster::prelude::*;`.
pub mod prelude {
    pub use crate::cluster::config::{validate_radius, ClusterConfig, GroupingBackend};
    pub use crate::cluster::events::{
        ClusterEvent, ClusterEventKind, EventSink, FnSink, MultiSink, VecSink,
    };
    pub use crate::cluster::grid::GridBucketGrouping;
    pub use crate::cluster::runner::{
        cluster, cluster_with, cluster_with_events, cluster_with_strategy, ClusterRunner,
    };
    pub use crate::cluster::strategy::{GroupingPoint, GroupingStrategy};
    pub use crate::cluster::sweep::SweepLineGrouping;
    pub use crate::cluster::{
        find_item_for_marker, ClusterSummary, DisplayItem, DEFAULT_CLUSTER_RADIUS,
    };
    pub use crate::error::{Error, Result};
    pub use crate::lineup::{
        markers_for_map, Lineup, LineupFilters, Side, SideFilter, UtilityFilter,
    };
    pub use crate::marker::{Marker, MarkerId, UtilityType};
}
