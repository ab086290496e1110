//! Sweep-line grouping over y-sorted markers.
use glam::Vec2;

use crate::cluster::strategy::{within_radius, GroupingPoint, GroupingStrategy};

/// Forward scan from each anchor, stopping once the y-gap exceeds the radius.
///
/// Worst case is quadratic when many same-category markers share a narrow
/// y-band; typical maps hold at most a few hundred markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepLineGrouping;

impl GroupingStrategy for SweepLineGrouping {
    fn group(&self, points: &[GroupingPoint], radius: f32) -> Vec<Vec<usize>> {
        let radius_squared = radius * radius;
        let mut processed = vec![false; points.len()];
        let mut groups = Vec::new();

        for anchor_idx in 0..points.len() {
            if processed[anchor_idx] {
                continue;
            }
            processed[anchor_idx] = true;

            let anchor = points[anchor_idx];
            let anchor_pos = Vec2::from(anchor.position);
            let mut group = vec![anchor_idx];

            for (idx, candidate) in points.iter().enumerate().skip(anchor_idx + 1) {
                if processed[idx] || candidate.category != anchor.category {
                    continue;
                }

                let candidate_pos = Vec2::from(candidate.position);
                // Sorted by y: every later point is at least this far away.
                if candidate_pos.y - anchor_pos.y > radius {
                    break;
                }

                if within_radius(anchor_pos, candidate_pos, radius, radius_squared) {
                    processed[idx] = true;
                    group.push(idx);
                }
            }

            groups.push(group);
        }

        groups
    }
}
