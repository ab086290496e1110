//! Proximity clustering of same-category markers into display items.
//!
//! The entry points live in [`runner`]: [`runner::cluster`] for the plain
//! sweep-line pass, [`runner::cluster_with`] for a configured backend and
//! [`runner::ClusterRunner`] for repeated runs with event sinks.
use std::cmp::Ordering;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::marker::{Marker, UtilityType};

pub mod config;
pub mod events;
pub mod grid;
pub mod runner;
pub mod strategy;
pub mod sweep;

/// Grouping distance used when no radius is configured, in map units.
pub const DEFAULT_CLUSTER_RADIUS: f32 = 30.0;

/// One drawable entry produced by a clustering run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum DisplayItem<P = ()> {
    /// A marker with no same-category neighbor claimed by its anchor.
    Singleton { marker: Marker<P> },
    /// Two or more same-category markers drawn as one aggregate point.
    Cluster {
        /// Unweighted mean of the member positions.
        centroid: Vec2,
        /// Category shared by all members.
        category: UtilityType,
        /// Members in canonical order, anchor first.
        members: Vec<Marker<P>>,
    },
}

impl<P> DisplayItem<P> {
    /// Position the renderer should draw this item at.
    pub fn position(&self) -> Vec2 {
        match self {
            DisplayItem::Singleton { marker } => marker.position,
            DisplayItem::Cluster { centroid, .. } => *centroid,
        }
    }

    pub fn category(&self) -> UtilityType {
        match self {
            DisplayItem::Singleton { marker } => marker.category,
            DisplayItem::Cluster { category, .. } => *category,
        }
    }

    /// All markers behind this item. Used to expand a cluster.
    pub fn markers(&self) -> &[Marker<P>] {
        match self {
            DisplayItem::Singleton { marker } => std::slice::from_ref(marker),
            DisplayItem::Cluster { members, .. } => members,
        }
    }

    /// Number of markers behind this item (the badge count for clusters).
    pub fn len(&self) -> usize {
        self.markers().len()
    }

    /// Always false; every item holds at least one marker.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_cluster(&self) -> bool {
        matches!(self, DisplayItem::Cluster { .. })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.markers().iter().any(|m| m.id == id)
    }

    pub fn into_markers(self) -> Vec<Marker<P>> {
        match self {
            DisplayItem::Singleton { marker } => vec![marker],
            DisplayItem::Cluster { members, .. } => members,
        }
    }
}

/// Find the item that holds the marker with `id`.
pub fn find_item_for_marker<'a, P>(
    items: &'a [DisplayItem<P>],
    id: &str,
) -> Option<&'a DisplayItem<P>> {
    items.iter().find(|item| item.contains(id))
}

/// Counts describing a clustering result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClusterSummary {
    /// Markers consumed by the run.
    pub markers: usize,
    /// Cluster items produced.
    pub clusters: usize,
    /// Singleton items produced.
    pub singletons: usize,
    /// Markers that ended up inside a cluster.
    pub clustered_markers: usize,
}

impl ClusterSummary {
    pub fn from_items<P>(items: &[DisplayItem<P>]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            acc.markers += item.len();
            if item.is_cluster() {
                acc.clusters += 1;
                acc.clustered_markers += item.len();
            } else {
                acc.singletons += 1;
            }
            acc
        })
    }

    /// Number of display items.
    pub fn items(&self) -> usize {
        self.clusters + self.singletons
    }
}

/// Indices into `markers` in canonical order: ascending y, then id, then x,
/// then input position.
pub(crate) fn canonical_order<P>(markers: &[Marker<P>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..markers.len()).collect();
    order.sort_by(|&a, &b| compare_markers(&markers[a], &markers[b]).then(a.cmp(&b)));
    order
}

fn compare_markers<P>(a: &Marker<P>, b: &Marker<P>) -> Ordering {
    a.position
        .y
        .total_cmp(&b.position.y)
        .then_with(|| a.id.cmp(&b.id))
        .then_with(|| a.position.x.total_cmp(&b.position.x))
}

pub(crate) fn centroid<P>(members: &[Marker<P>]) -> Vec2 {
    let sum: Vec2 = members.iter().map(|m| m.position).sum();
    sum / members.len().max(1) as f32
}
