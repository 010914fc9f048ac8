mod config;
mod error;
mod scheduler;
#[cfg(test)]
mod sequence_tests;
mod sm2;
#[cfg(test)]
mod test_helpers;

pub use config::{AlgorithmKind, DynScheduler, SchedulerConfig};
pub use error::{Argument, Result, SchedulerError};
pub use scheduler::{Scheduler, SchedulingAlgorithm, anchor_due};
pub use sm2::{
    CORRECT_QUALITY_THRESHOLD, DEFAULT_EASINESS, INITIAL_INTERVAL, MAX_QUALITY, MIN_EASINESS,
    MIN_QUALITY, SECOND_INTERVAL, Sm2, Sm2Scheduler, Sm2State, sm2,
};

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
