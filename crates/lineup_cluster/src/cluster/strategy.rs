//! Neighbor grouping seam shared by the clustering backends.
use mint::Vector2;

use crate::marker::UtilityType;

/// The part of a marker a grouping backend sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingPoint {
    pub position: Vector2<f32>,
    pub category: UtilityType,
}

impl GroupingPoint {
    pub fn new(position: impl Into<Vector2<f32>>, category: UtilityType) -> Self {
        Self {
            position: position.into(),
            category,
        }
    }
}

/// Trait for anchor-greedy neighbor grouping.
///
/// `points` arrive in canonical order (ascending y with a total tie-break).
/// Implementations walk the points in that order; each point not yet claimed
/// becomes an anchor and claims every later unclaimed point of its category
/// whose y-gap and Euclidean distance to the anchor are both within `radius`.
///
/// Returns one group per anchor, in anchor order, each holding slot indices
/// into `points` with the anchor first and the rest ascending. Every slot
/// appears in exactly one group. The runner rejects output that breaks this
/// with [`Error::InvalidGrouping`](crate::error::Error::InvalidGrouping).
pub trait GroupingStrategy: Send + Sync {
    fn group(&self, points: &[GroupingPoint], radius: f32) -> Vec<Vec<usize>>;
}

/// Whether `candidate` is inside `radius` of `anchor`.
///
/// The y-gap test comes first and is the sweep's termination condition; both
/// backends share this predicate so their partitions match bit for bit.
#[inline]
pub(crate) fn within_radius(
    anchor: glam::Vec2,
    candidate: glam::Vec2,
    radius: f32,
    radius_squared: f32,
) -> bool {
    candidate.y - anchor.y <= radius && anchor.distance_squared(candidate) <= radius_squared
}
