#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::snapshots::Snapshot;
use crate::solver::RunStatistics;
use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often generation progress is logged.
        log_every: usize,
    },
}

/// Writes information about run progress into log.
pub(crate) struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start() }
    }

    /// Reports generation progress, `estimate` is a termination estimation in the `[0, 1]` range.
    pub fn on_generation(&self, generation: usize, estimate: Float, archive_size: usize, num_snapshots: usize) {
        let log_every = match &self.mode {
            TelemetryMode::OnlyLogging { log_every, .. } => *log_every,
            TelemetryMode::None => return,
        };

        if log_every > 0 && generation % log_every == 0 {
            self.log(
                format!(
                    "[{}s] generation {generation} ({:.0}%): archive size {archive_size}, snapshots {num_snapshots}",
                    self.time.elapsed_secs(),
                    estimate * 100.
                )
                .as_str(),
            );
        }
    }

    /// Reports a captured snapshot.
    pub fn on_snapshot(&self, snapshot: &Snapshot) {
        self.log(
            format!(
                "[{}s] captured snapshot at generation {}, elapsed {:.3}s, front size {}",
                self.time.elapsed_secs(),
                snapshot.iteration(),
                snapshot.elapsed(),
                snapshot.front().len()
            )
            .as_str(),
        );
    }

    /// Reports final statistic.
    pub fn on_result(&self, statistics: &RunStatistics) {
        let speed = if statistics.solving_time > 0. { statistics.generations as f64 / statistics.solving_time } else { 0. };

        self.log(
            format!(
                "[{}s] total generations: {}, speed: {speed:.2} gen/sec",
                self.time.elapsed_secs(),
                statistics.generations
            )
            .as_str(),
        );
        self.log(format!("\tsolutions: {}, snapshots: {}", statistics.solutions, statistics.snapshots).as_str());
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}
