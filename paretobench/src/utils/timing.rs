use crate::utils::Float;
use std::time::Instant;

/// Measures wall clock time elapsed since its start.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in whole seconds.
    pub fn elapsed_secs(&self) -> u64 {
        self.start.elapsed().as_secs()
    }

    /// Returns elapsed time in seconds.
    pub fn elapsed_secs_as_float(&self) -> Float {
        self.start.elapsed().as_secs_f64()
    }
}
