#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use super::*;
use crate::utils::{GenericError, TimeQuota};

/// A default time limit in seconds used when no limit is configured.
const DEFAULT_MAX_TIME: Float = 10.;

/// Provides configurable way to build solver.
pub struct Builder {
    max_generations: Option<usize>,
    max_time: Option<Float>,
    capacity: Option<usize>,
    max_snapshots: usize,
    config: Option<ObjectiveConfig>,
    adapter: Option<Box<dyn OptimizerAdapter>>,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
    telemetry: TelemetryMode,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            max_generations: None,
            max_time: None,
            capacity: None,
            max_snapshots: 0,
            config: None,
            adapter: None,
            quota: None,
            telemetry: TelemetryMode::None,
        }
    }
}

impl Builder {
    /// Sets max generations to be run.
    /// Default is None.
    pub fn with_max_generations(mut self, limit: Option<usize>) -> Self {
        self.max_generations = limit;
        self
    }

    /// Sets max running time limit in seconds, fractions of a second are allowed.
    /// Default is 10 seconds when no generation limit is set.
    pub fn with_max_time(mut self, limit: Option<Float>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets archive capacity.
    /// Default is no limit.
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets maximum amount of snapshots, including the final one.
    /// Default is 0.
    pub fn with_max_snapshots(mut self, max_snapshots: usize) -> Self {
        self.max_snapshots = max_snapshots;
        self
    }

    /// Sets objective config.
    pub fn with_config(mut self, config: ObjectiveConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets optimizer adapter.
    pub fn with_adapter(mut self, adapter: Box<dyn OptimizerAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Sets an external quota polled between generations, e.g. an interruption flag.
    pub fn with_quota(mut self, quota: Option<Arc<dyn Quota + Send + Sync>>) -> Self {
        self.quota = quota;
        self
    }

    /// Sets telemetry mode.
    /// Default is no telemetry.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Builds solver with parameters specified.
    pub fn build(self) -> Result<Solver, GenericError> {
        let config = self.config.ok_or_else(|| GenericError::from("objective config is not specified"))?;
        let adapter = self.adapter.ok_or_else(|| GenericError::from("optimizer adapter is not specified"))?;

        if self.capacity == Some(0) {
            return Err("archive capacity must be greater than zero".into());
        }

        let telemetry = Telemetry::new(self.telemetry.clone());

        let (criterias, max_time): (Vec<Box<dyn Termination + Send + Sync>>, _) =
            match (self.max_generations, self.max_time) {
                (None, None) => {
                    telemetry.log(format!("configured to use default max-time {DEFAULT_MAX_TIME}s").as_str());
                    (vec![Box::new(MaxTime::new(DEFAULT_MAX_TIME))], Some(DEFAULT_MAX_TIME))
                }
                (max_generations, max_time) => {
                    let mut criterias: Vec<Box<dyn Termination + Send + Sync>> = vec![];

                    if let Some(limit) = max_generations {
                        telemetry.log(format!("configured to use max-generations {limit}").as_str());
                        criterias.push(Box::new(MaxGeneration::new(limit)))
                    }

                    if let Some(limit) = max_time {
                        telemetry.log(format!("configured to use max-time {limit}s").as_str());
                        criterias.push(Box::new(MaxTime::new(limit)))
                    }

                    (criterias, max_time)
                }
            };

        let capacity = self.capacity.unwrap_or(usize::MAX);
        if let Some(capacity) = self.capacity {
            telemetry.log(format!("configured to use archive capacity {capacity}").as_str());
        }

        if self.max_snapshots > 0 {
            telemetry.log(format!("configured to capture up to {} snapshots", self.max_snapshots).as_str());
        }

        let quota = match (self.quota, max_time) {
            (Some(quota), _) => Some(quota),
            (None, Some(limit)) => create_time_quota(limit),
            (None, None) => None,
        };

        Ok(Solver {
            adapter,
            config,
            capacity,
            max_snapshots: self.max_snapshots,
            time_limit: max_time,
            iteration_limit: self.max_generations,
            termination: Box::new(CompositeTermination::new(criterias)),
            quota,
            telemetry: self.telemetry,
        })
    }
}

fn create_time_quota(limit: Float) -> Option<Arc<dyn Quota + Send + Sync>> {
    Some(Arc::new(TimeQuota::new(limit)))
}
