#[cfg(test)]
#[path = "../../tests/unit/example/zdt_test.rs"]
mod zdt_test;

use crate::models::{Individual, ObjectiveConfig, Point};
use crate::utils::{Float, GenericError};
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies a bi-objective ZDT benchmark problem. ZDT5 is binary coded and is not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZdtProblem {
    /// Convex front.
    Zdt1,
    /// Non-convex front.
    Zdt2,
    /// Disconnected front.
    Zdt3,
    /// Convex front with many local fronts.
    Zdt4,
    /// Non-convex front with non-uniform density.
    Zdt6,
}

impl ZdtProblem {
    /// Returns a commonly used amount of decision variables.
    pub fn default_dimension(&self) -> usize {
        match self {
            Self::Zdt1 | Self::Zdt2 | Self::Zdt3 => 30,
            Self::Zdt4 | Self::Zdt6 => 10,
        }
    }

    /// Creates a problem instance with given amount of decision variables (at least two).
    pub fn with_dimension(self, dimension: usize) -> Zdt {
        assert!(dimension > 1, "zdt problem requires at least two decision variables");
        Zdt { problem: self, dimension }
    }
}

impl FromStr for ZdtProblem {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "zdt1" => Ok(Self::Zdt1),
            "zdt2" => Ok(Self::Zdt2),
            "zdt3" => Ok(Self::Zdt3),
            "zdt4" => Ok(Self::Zdt4),
            "zdt6" => Ok(Self::Zdt6),
            "zdt5" => Err("zdt5 is binary coded and not supported".into()),
            _ => Err(format!("unknown problem: '{value}'").into()),
        }
    }
}

impl Display for ZdtProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Zdt1 => "zdt1",
            Self::Zdt2 => "zdt2",
            Self::Zdt3 => "zdt3",
            Self::Zdt4 => "zdt4",
            Self::Zdt6 => "zdt6",
        };

        write!(f, "{name}")
    }
}

/// A ZDT problem instance: both objectives are minimized.
#[derive(Clone, Debug, PartialEq)]
pub struct Zdt {
    problem: ZdtProblem,
    dimension: usize,
}

impl Zdt {
    /// Returns problem kind.
    pub fn problem(&self) -> ZdtProblem {
        self.problem
    }

    /// Returns amount of decision variables.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns objective config.
    pub fn config(&self) -> ObjectiveConfig {
        ObjectiveConfig::minimize(2)
    }

    /// Returns lower and upper bounds of the decision variable at given index.
    pub fn bounds(&self, idx: usize) -> (Float, Float) {
        match (self.problem, idx) {
            (ZdtProblem::Zdt4, idx) if idx > 0 => (-5., 5.),
            _ => (0., 1.),
        }
    }

    /// Evaluates objectives of the decision vector.
    pub fn evaluate(&self, x: &[Float]) -> Point {
        debug_assert_eq!(x.len(), self.dimension);

        let rest = &x[1..];
        let rest_size = rest.len() as Float;

        match self.problem {
            ZdtProblem::Zdt1 => {
                let g = 1. + 9. * rest.iter().sum::<Float>() / rest_size;
                vec![x[0], g * (1. - (x[0] / g).sqrt())]
            }
            ZdtProblem::Zdt2 => {
                let g = 1. + 9. * rest.iter().sum::<Float>() / rest_size;
                vec![x[0], g * (1. - (x[0] / g).powi(2))]
            }
            ZdtProblem::Zdt3 => {
                let g = 1. + 9. * rest.iter().sum::<Float>() / rest_size;
                let ratio = x[0] / g;
                vec![x[0], g * (1. - ratio.sqrt() - ratio * (10. * PI * x[0]).sin())]
            }
            ZdtProblem::Zdt4 => {
                let g = 1.
                    + 10. * rest_size
                    + rest.iter().map(|value| value * value - 10. * (4. * PI * value).cos()).sum::<Float>();
                vec![x[0], g * (1. - (x[0] / g).sqrt())]
            }
            ZdtProblem::Zdt6 => {
                let f1 = 1. - (-4. * x[0]).exp() * (6. * PI * x[0]).sin().powi(6);
                let g = 1. + 9. * (rest.iter().sum::<Float>() / rest_size).powf(0.25);
                vec![f1, g * (1. - (f1 / g).powi(2))]
            }
        }
    }

    /// Samples individuals on the true Pareto set: the first variable is spread uniformly over
    /// `[0, 1]` while the others are fixed to zero. Dominated samples (ZDT3, ZDT6) are kept.
    pub fn sample_optimal(&self, size: usize) -> Vec<Individual> {
        let delta = if size > 1 { 1. / (size - 1) as Float } else { 0. };

        (0..size)
            .map(|idx| {
                let mut x = vec![0.; self.dimension];
                x[0] = (idx as Float * delta).min(1.);

                Individual::new(self.evaluate(x.as_slice()), x)
            })
            .collect()
    }
}
