//! Grid-bucket grouping for larger marker sets.
use std::collections::HashMap;

use glam::Vec2;

use crate::cluster::strategy::{within_radius, GroupingPoint, GroupingStrategy};

/// Cell side used when the radius is zero. Any positive size works then,
/// since only coincident points can match.
const ZERO_RADIUS_CELL_SIZE: f32 = 1.0;

/// Cells searched on each side of the anchor's cell. Two rings absorb
/// rounding in the position-to-cell division.
const SEARCH_RING: i64 = 2;

/// Buckets points into square cells of side `radius` and only inspects the
/// cells around each anchor. Produces the same groups as
/// [`crate::cluster::sweep::SweepLineGrouping`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GridBucketGrouping;

impl GroupingStrategy for GridBucketGrouping {
    fn group(&self, points: &[GroupingPoint], radius: f32) -> Vec<Vec<usize>> {
        let grid = BucketGrid::build(points, radius);
        let radius_squared = radius * radius;
        let mut processed = vec![false; points.len()];
        let mut groups = Vec::new();
        let mut candidates = Vec::new();

        for anchor_idx in 0..points.len() {
            if processed[anchor_idx] {
                continue;
            }
            processed[anchor_idx] = true;

            let anchor = points[anchor_idx];
            let anchor_pos = Vec2::from(anchor.position);

            candidates.clear();
            grid.for_each_near(anchor_pos, |idx| {
                let candidate = points[idx];
                if !processed[idx]
                    && candidate.category == anchor.category
                    && within_radius(
                        anchor_pos,
                        Vec2::from(candidate.position),
                        radius,
                        radius_squared,
                    )
                {
                    candidates.push(idx);
                }
            });
            candidates.sort_unstable();

            let mut group = Vec::with_capacity(candidates.len() + 1);
            group.push(anchor_idx);
            for &idx in &candidates {
                processed[idx] = true;
                group.push(idx);
            }
            groups.push(group);
        }

        groups
    }
}

struct BucketGrid {
    cell_size: f32,
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl BucketGrid {
    fn build(points: &[GroupingPoint], radius: f32) -> Self {
        let cell_size = if radius > 0.0 {
            radius
        } else {
            ZERO_RADIUS_CELL_SIZE
        };
        let mut grid = Self {
            cell_size,
            cells: HashMap::new(),
        };
        for (idx, point) in points.iter().enumerate() {
            let key = grid.cell_of(Vec2::from(point.position));
            grid.cells.entry(key).or_default().push(idx);
        }
        grid
    }

    #[inline]
    fn cell_of(&self, position: Vec2) -> (i64, i64) {
        (
            (position.x / self.cell_size).floor() as i64,
            (position.y / self.cell_size).floor() as i64,
        )
    }

    fn for_each_near(&self, position: Vec2, mut f: impl FnMut(usize)) {
        let (cx, cy) = self.cell_of(position);
        for y in cy.saturating_sub(SEARCH_RING)..=cy.saturating_add(SEARCH_RING) {
            for x in cx.saturating_sub(SEARCH_RING)..=cx.saturating_add(SEARCH_RING) {
                if let Some(bucket) = self.cells.get(&(x, y)) {
                    bucket.iter().copied().for_each(&mut f);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::cluster::sweep::SweepLineGrouping;
    use crate::marker::UtilityType;

    fn random_points(count: usize, extent: f32, seed: u64) -> Vec<GroupingPoint> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut points: Vec<GroupingPoint> = (0..count)
            .map(|i| {
                let x = rng.random::<f32>() * extent - extent * 0.5;
                let y = rng.random::<f32>() * extent - extent * 0.5;
                GroupingPoint::new(Vec2::new(x, y), UtilityType::ALL[i % 4])
            })
            .collect();
        points.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
        points
    }

    #[test]
    fn cell_lookup_floors_negative_coordinates() {
        let grid = BucketGrid::build(&[], 10.0);
        assert_eq!(grid.cell_of(Vec2::new(-0.5, 9.99)), (-1, 0));
        assert_eq!(grid.cell_of(Vec2::new(10.0, -10.0)), (1, -1));
    }

    #[test]
    fn zero_radius_uses_unit_cells() {
        let grid = BucketGrid::build(&[], 0.0);
        assert_eq!(grid.cell_size, ZERO_RADIUS_CELL_SIZE);
    }

    #[test]
    fn matches_sweep_line_on_random_layouts() {
        for (seed, radius) in [(1u64, 30.0f32), (2, 5.0), (3, 0.0), (4, 120.0), (5, 1.5)] {
            let points = random_points(400, 600.0, seed);
            let sweep = SweepLineGrouping.group(&points, radius);
            let grid = GridBucketGrouping.group(&points, radius);
            assert_eq!(sweep, grid, "seed {seed} radius {radius}");
        }
    }

    #[test]
    fn matches_sweep_line_with_coincident_points() {
        let mut points = Vec::new();
        for i in 0..12 {
            let p = Vec2::new((i / 4) as f32 * 3.0, 0.0);
            points.push(GroupingPoint::new(p, UtilityType::Flash));
        }
        for radius in [0.0, 2.9, 3.0, 6.0] {
            assert_eq!(
                SweepLineGrouping.group(&points, radius),
                GridBucketGrouping.group(&points, radius),
                "radius {radius}"
            );
        }
    }

    #[test]
    fn infinite_radius_groups_each_category_once() {
        let points = random_points(40, 1000.0, 9);
        let groups = GridBucketGrouping.group(&points, f32::INFINITY);
        assert_eq!(groups.len(), 4);
        assert_eq!(groups, SweepLineGrouping.group(&points, f32::INFINITY));
    }
}
