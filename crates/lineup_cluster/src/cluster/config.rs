//! Configuration for clustering runs.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cluster::DEFAULT_CLUSTER_RADIUS;
use crate::error::{Error, Result};

/// Neighbor search used to find markers within the radius of an anchor.
///
/// Both backends produce the same partition; they only differ in cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupingBackend {
    /// Linear forward scan over y-sorted markers with early termination.
    #[default]
    SweepLine,
    /// Uniform grid buckets of radius-sized cells.
    GridBucket,
}

/// Configuration for a clustering run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClusterConfig {
    /// Maximum anchor-to-member distance in map units. Inclusive.
    pub radius: f32,
    /// Neighbor search backend.
    pub backend: GroupingBackend,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CLUSTER_RADIUS,
            backend: GroupingBackend::SweepLine,
        }
    }
}

impl ClusterConfig {
    /// Creates a new [`ClusterConfig`] with the given radius and the default backend.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the grouping backend.
    pub fn with_backend(mut self, backend: GroupingBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        validate_radius(self.radius)
    }
}

/// Rejects negative and NaN radii. Positive infinity is accepted and groups
/// every same-category marker with the first anchor.
pub fn validate_radius(radius: f32) -> Result<()> {
    if radius >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRadius { radius })
    }
}
