#![warn(missing_docs)]
//! Lattice points inside disks of growing radius
use super::{LatticeDistribution, LatticePoint, PointAccumulator};
use crate::error::{LatticeError, LdResult};
use itertools::iproduct;
use log::{debug, warn};
use nalgebra::point;
use rand::{seq::SliceRandom, Rng};

/// Largest accepted `max_r`.
///
/// The sweep collects roughly `π·max_r²` points, so this keeps one run within a few hundred megabytes. It also
/// keeps `x² + y²` far away from the `i64` range.
pub const MAX_R_LIMIT: u32 = 2048;

/// Lattice points inside disks of growing radius.
///
/// For every radius `r` in `1..max_r` all integer points with `x² + y² < r²` are collected. Points found at a
/// smaller radius are not repeated. Within one radius the x and y candidates are tried in two independently
/// shuffled orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiskSweep {
    max_r: u32,
}
impl DiskSweep {
    /// Create a new [`DiskSweep`] distribution generator.
    ///
    /// `max_r` is the exclusive upper bound of the radius sweep. A value of one results in an empty sweep.
    ///
    /// # Errors
    ///
    /// This function will return an error if `max_r` is zero or larger than [`MAX_R_LIMIT`].
    pub fn new(max_r: u32) -> LdResult<Self> {
        if max_r == 0 {
            return Err(LatticeError::InvalidRadius(
                "max_r must be a positive integer".into(),
            ));
        }
        if max_r > MAX_R_LIMIT {
            return Err(LatticeError::InvalidRadius(format!(
                "max_r must be <= {MAX_R_LIMIT}, got {max_r}"
            )));
        }
        Ok(Self { max_r })
    }
    /// Returns the exclusive upper bound of the radius sweep.
    #[must_use]
    pub const fn max_r(&self) -> u32 {
        self.max_r
    }
    /// Sets the exclusive upper bound of the radius sweep.
    ///
    /// # Errors
    ///
    /// This function will return an error if `max_r` is zero or larger than [`MAX_R_LIMIT`].
    pub fn set_max_r(&mut self, max_r: u32) -> LdResult<()> {
        *self = Self::new(max_r)?;
        Ok(())
    }
    /// Run the sweep and return the filled [`PointAccumulator`].
    pub fn sweep<R: Rng + ?Sized>(&self, rng: &mut R) -> PointAccumulator {
        let mut accumulator = PointAccumulator::new();
        if self.max_r <= 1 {
            warn!(
                "radius sweep is empty for max_r = {}. No lattice points generated.",
                self.max_r
            );
            return accumulator;
        }
        for radius in 1..self.max_r {
            let radius = i64::from(radius);
            let mut xs = candidate_range(radius);
            let mut ys = candidate_range(radius);
            xs.shuffle(rng);
            ys.shuffle(rng);
            let before = accumulator.len();
            for (x, y) in iproduct!(xs.iter().copied(), ys.iter().copied()) {
                let p = point![x, y];
                if is_inside_disk(&p, radius) {
                    accumulator.insert(p);
                }
            }
            debug!(
                "radius {radius}: {} new lattice points, {} in total",
                accumulator.len() - before,
                accumulator.len()
            );
        }
        accumulator
    }
}

impl Default for DiskSweep {
    fn default() -> Self {
        Self { max_r: 7 }
    }
}

impl LatticeDistribution for DiskSweep {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<LatticePoint> {
        self.sweep(rng).into_points()
    }
}

/// Candidate coordinates tried for the given radius.
///
/// The range is half-open: `-radius` is included, `+radius` is not.
#[must_use]
pub fn candidate_range(radius: i64) -> Vec<i64> {
    (-radius..radius).collect()
}

/// Strict disk inclusion test `x² + y² < r²`. Points on the circle are outside.
#[must_use]
pub fn is_inside_disk(point: &LatticePoint, radius: i64) -> bool {
    point.x * point.x + point.y * point.y < radius * radius
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_warnings;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn full_disk(radius: i64) -> HashSet<LatticePoint> {
        iproduct!(-radius..=radius, -radius..=radius)
            .map(|(x, y)| point![x, y])
            .filter(|p| is_inside_disk(p, radius))
            .collect()
    }
    #[test]
    fn new_wrong() {
        assert!(DiskSweep::new(0).is_err());
        assert!(DiskSweep::new(1).is_ok());
        assert!(DiskSweep::new(MAX_R_LIMIT).is_ok());
        assert_eq!(
            DiskSweep::new(MAX_R_LIMIT + 1),
            Err(LatticeError::InvalidRadius(
                "max_r must be <= 2048, got 2049".into()
            ))
        );
        assert!(DiskSweep::new(u32::MAX).is_err());
    }
    #[test]
    fn default() {
        assert_eq!(DiskSweep::default().max_r(), 7);
    }
    #[test]
    fn set_max_r() {
        let mut sweep = DiskSweep::default();
        sweep.set_max_r(3).unwrap();
        assert_eq!(sweep.max_r(), 3);
        assert!(sweep.set_max_r(0).is_err());
        assert_eq!(sweep.max_r(), 3);
    }
    #[test]
    fn candidates() {
        assert_eq!(candidate_range(1), vec![-1, 0]);
        assert_eq!(candidate_range(3), vec![-3, -2, -1, 0, 1, 2]);
    }
    #[test]
    fn inside_disk() {
        assert!(is_inside_disk(&point![0, 0], 1));
        assert!(!is_inside_disk(&point![-1, 0], 1));
        assert!(!is_inside_disk(&point![3, 4], 5));
        assert!(is_inside_disk(&point![3, 3], 5));
        assert!(!is_inside_disk(&point![-5, 0], 5));
        let limit = i64::from(MAX_R_LIMIT);
        assert!(is_inside_disk(&point![-limit + 1, 0], limit));
        assert!(!is_inside_disk(&point![-limit, -limit], limit));
    }
    #[test]
    fn generate_empty() {
        testing_logger::setup();
        let sweep = DiskSweep::new(1).unwrap();
        let points = sweep.generate(&mut StdRng::seed_from_u64(0));
        assert!(points.is_empty());
        check_warnings(vec![
            "radius sweep is empty for max_r = 1. No lattice points generated.",
        ]);
    }
    #[test]
    fn generate_single() {
        let sweep = DiskSweep::new(2).unwrap();
        let points = sweep.generate(&mut rand::rng());
        let origin: LatticePoint = point![0, 0];
        assert_eq!(points, vec![origin]);
    }
    #[test]
    fn generate_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(DiskSweep::new(3).unwrap().generate(&mut rng).len(), 9);
        assert_eq!(DiskSweep::new(4).unwrap().generate(&mut rng).len(), 25);
        assert_eq!(DiskSweep::new(5).unwrap().generate(&mut rng).len(), 45);
        assert_eq!(DiskSweep::new(6).unwrap().generate(&mut rng).len(), 69);
        assert_eq!(DiskSweep::default().generate(&mut rng).len(), 109);
    }
    #[test]
    fn generate_unique() {
        let points = DiskSweep::new(12).unwrap().generate(&mut rand::rng());
        let unique: HashSet<LatticePoint> = points.iter().copied().collect();
        assert_eq!(unique.len(), points.len());
    }
    #[test]
    fn generate_inside_some_disk() {
        let max_r = 9;
        let points = DiskSweep::new(max_r).unwrap().generate(&mut rand::rng());
        for p in points {
            assert!((1..i64::from(max_r)).any(|r| is_inside_disk(&p, r)));
        }
    }
    #[test]
    fn generate_equals_full_disk() {
        for max_r in 2..10 {
            let points = DiskSweep::new(max_r).unwrap().generate(&mut rand::rng());
            let set: HashSet<LatticePoint> = points.into_iter().collect();
            assert_eq!(set, full_disk(i64::from(max_r) - 1));
        }
    }
    #[test]
    fn generate_grouped_by_first_radius() {
        let points = DiskSweep::new(6).unwrap().generate(&mut rand::rng());
        let first_radius: Vec<i64> = points
            .iter()
            .map(|p| (1..6).find(|r| is_inside_disk(p, *r)).unwrap())
            .collect();
        assert!(first_radius.windows(2).all(|w| w[0] <= w[1]));
    }
    #[test]
    fn generate_same_set() {
        let sweep = DiskSweep::default();
        let a: HashSet<LatticePoint> = sweep.generate(&mut rand::rng()).into_iter().collect();
        let b: HashSet<LatticePoint> = sweep.generate(&mut rand::rng()).into_iter().collect();
        assert_eq!(a, b);
    }
    #[test]
    fn generate_seeded() {
        let sweep = DiskSweep::default();
        let a = sweep.generate(&mut StdRng::seed_from_u64(42));
        let b = sweep.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
    #[test]
    fn sweep_accumulator() {
        let acc = DiskSweep::new(3).unwrap().sweep(&mut StdRng::seed_from_u64(7));
        assert_eq!(acc.len(), 9);
        assert_eq!(acc.points()[0], LatticePoint::origin());
        assert!(acc.contains(&point![-1, -1]));
        assert!(!acc.contains(&point![-2, 0]));
    }
}
