//! Contains the data model shared by archive, snapshots and indicators.

#[cfg(test)]
#[path = "../../tests/unit/models/models_test.rs"]
mod models_test;

use crate::utils::{Float, GenericResult, is_float_equal};
use std::cmp::Ordering;
use std::sync::Arc;

/// An objective vector.
pub type Point = Vec<Float>;

/// Specifies optimization direction of a single objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sense {
    /// Lower values are better.
    Minimize,
    /// Higher values are better.
    Maximize,
}

/// Keeps objective senses: one per objective dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectiveConfig {
    senses: Arc<[Sense]>,
}

impl ObjectiveConfig {
    /// Creates a new instance of `ObjectiveConfig`.
    pub fn new(senses: Vec<Sense>) -> GenericResult<Self> {
        if senses.is_empty() {
            return Err("objective config requires at least one objective".into());
        }

        Ok(Self { senses: senses.into() })
    }

    /// Creates a config where all `dimension` objectives are minimized.
    pub fn minimize(dimension: usize) -> Self {
        assert!(dimension > 0);
        Self { senses: vec![Sense::Minimize; dimension].into() }
    }

    /// Returns amount of objectives.
    pub fn dimension(&self) -> usize {
        self.senses.len()
    }

    /// Returns objective senses.
    pub fn senses(&self) -> &[Sense] {
        self.senses.as_ref()
    }

    /// Returns the generic Pareto order of two objective vectors: `Less` means that `a` dominates `b`,
    /// `Greater` means that `b` dominates `a` and `Equal` is returned for mutually non-dominated
    /// or equal vectors.
    pub fn dominance_order(&self, a: &[Float], b: &[Float]) -> Ordering {
        let (less_cnt, greater_cnt) =
            self.senses.iter().zip(a.iter().zip(b.iter())).fold((0, 0), |(less, greater), (sense, (a, b))| {
                match (sense, a.partial_cmp(b)) {
                    (Sense::Minimize, Some(Ordering::Less)) | (Sense::Maximize, Some(Ordering::Greater)) => {
                        (less + 1, greater)
                    }
                    (Sense::Minimize, Some(Ordering::Greater)) | (Sense::Maximize, Some(Ordering::Less)) => {
                        (less, greater + 1)
                    }
                    _ => (less, greater),
                }
            });

        match (less_cnt > 0, greater_cnt > 0) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    /// Checks whether `a` dominates `b` using the first and the last objective only.
    /// An empty objective vector neither dominates nor is dominated.
    ///
    /// NOTE the archive uses this two objective test even when more objectives are configured,
    /// only the batch non-dominated sorting considers all of them.
    pub fn dominates(&self, a: &[Float], b: &[Float]) -> bool {
        match (self.oriented_bounds(a), self.oriented_bounds(b)) {
            (Some((a0, a1)), Some((b0, b1))) => (a0 <= b0 && a1 < b1) || (a0 < b0 && a1 <= b1),
            _ => false,
        }
    }

    /// Checks whether two objective vectors are equal within machine epsilon.
    pub fn is_equal(&self, a: &[Float], b: &[Float]) -> bool {
        a.len() == b.len() && a.iter().zip(b.iter()).all(|(&a, &b)| is_float_equal(a, b))
    }

    /// Maps objective vector to minimization space by negating maximized objectives.
    pub fn orient(&self, point: &[Float]) -> Point {
        point
            .iter()
            .zip(self.senses.iter())
            .map(|(&value, sense)| match sense {
                Sense::Minimize => value,
                Sense::Maximize => -value,
            })
            .collect()
    }

    fn oriented_bounds(&self, point: &[Float]) -> Option<(Float, Float)> {
        let orient = |value: Float, sense: &Sense| match sense {
            Sense::Minimize => value,
            Sense::Maximize => -value,
        };

        let first = point.first().zip(self.senses.first()).map(|(&v, s)| orient(v, s));
        let last = point.last().zip(self.senses.last()).map(|(&v, s)| orient(v, s));

        first.zip(last)
    }
}

/// A solution produced by a solver: objective and decision vectors. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    objectives: Point,
    decision: Vec<Float>,
}

impl Individual {
    /// Creates a new instance of `Individual`.
    pub fn new(objectives: Point, decision: Vec<Float>) -> Self {
        Self { objectives, decision }
    }

    /// Creates an individual without a decision vector, e.g. when read from a Pareto front file.
    pub fn from_objectives(objectives: Point) -> Self {
        Self { objectives, decision: Vec::new() }
    }

    /// Returns objective vector.
    pub fn objectives(&self) -> &[Float] {
        self.objectives.as_slice()
    }

    /// Returns decision vector.
    pub fn decision(&self) -> &[Float] {
        self.decision.as_slice()
    }
}
