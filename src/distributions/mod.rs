#![warn(missing_docs)]
//! Module for handling lattice point distributions
//!
//! These distributions produce integer coordinate pairs which are typically pasted as offset tables into shader code.
//!
//! ## Example
//!
//! ```rust
//! use latticedisk::distributions::{DiskSweep, LatticeDistribution};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let sweep = DiskSweep::new(3).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let points = sweep.generate(&mut rng);
//! assert_eq!(points.len(), 9);
//! ```
//! `points` now contains all lattice points strictly inside the circle of radius 2, in shuffled order.
use nalgebra::Point2;
use rand::Rng;
use std::collections::HashSet;

mod disk_sweep;

pub use disk_sweep::{candidate_range, is_inside_disk, DiskSweep, MAX_R_LIMIT};

/// A point with integer coordinates.
pub type LatticePoint = Point2<i64>;

/// Trait for the generation of lattice point distributions
pub trait LatticeDistribution {
    /// Generate the point distribution.
    ///
    /// All randomness is drawn from the given `rng`. Passing a seeded generator makes the result reproducible.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<LatticePoint>;
}

/// Insertion ordered collection of unique [`LatticePoint`]s.
///
/// Points are only ever appended. A point that is already present is silently ignored, so the first insertion
/// determines its position in the emission order.
#[derive(Debug, Default, Clone)]
pub struct PointAccumulator {
    points: Vec<LatticePoint>,
    seen: HashSet<LatticePoint>,
}
impl PointAccumulator {
    /// Create an empty [`PointAccumulator`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Append `point` if it has not been collected before.
    ///
    /// Returns `true` if the point was new.
    pub fn insert(&mut self, point: LatticePoint) -> bool {
        if self.seen.insert(point) {
            self.points.push(point);
            true
        } else {
            false
        }
    }
    /// Returns `true` if `point` has already been collected.
    #[must_use]
    pub fn contains(&self, point: &LatticePoint) -> bool {
        self.seen.contains(point)
    }
    /// Returns the number of collected points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Returns `true` if no point has been collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Returns the collected points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }
    /// Consume the accumulator and return the collected points in insertion order.
    #[must_use]
    pub fn into_points(self) -> Vec<LatticePoint> {
        self.points
    }
}
