use crate::utils::{Float, Timer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A logger type which is called with various information regarding the work done by a solver run.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a computational quota polled between generations.
pub trait Quota {
    /// Returns true when quota is reached.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() >= self.limit_in_secs
    }
}

/// A quota which is reached when the underlying flag is raised, e.g. from a signal handler.
#[derive(Clone, Default)]
pub struct FlagQuota {
    flag: Arc<AtomicBool>,
}

impl FlagQuota {
    /// Creates a new instance of `FlagQuota` around given flag.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Raises the flag.
    pub fn raise(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl Quota for FlagQuota {
    fn is_reached(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
