use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, UnsupportedOperationSnafu};
use crate::scheduler::{Scheduler, SchedulingAlgorithm};
use crate::sm2::{Sm2, Sm2State};

/// The algorithms a [`SchedulerConfig`] can select by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Sm2,
}

/// A scheduler whose algorithm was picked at runtime. Outcomes are SM-2 style integer
/// ratings.
pub type DynScheduler = Scheduler<Box<dyn SchedulingAlgorithm<Outcome = i32> + Send>>;

/// Scheduler options as a host application would store them, e.g.
/// `{"algorithm": "sm2", "sm2": {"easiness": 2.1}}`. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub algorithm: Option<AlgorithmKind>,
    pub sm2: Sm2State,
}

impl SchedulerConfig {
    pub fn sm2(state: Sm2State) -> Self {
        Self {
            algorithm: Some(AlgorithmKind::Sm2),
            sm2: state,
        }
    }

    /// Fails with [`crate::SchedulerError::UnsupportedOperation`] when no algorithm is
    /// selected.
    pub fn build(&self) -> Result<DynScheduler> {
        let Some(kind) = self.algorithm else {
            warn!(
                "no scheduling algorithm selected, expected one of: {}",
                AlgorithmKind::iter().join(", ")
            );
            return UnsupportedOperationSnafu {
                operation: "scheduling without an algorithm",
            }
            .fail();
        };
        let algorithm: Box<dyn SchedulingAlgorithm<Outcome = i32> + Send> = match kind {
            AlgorithmKind::Sm2 => Box::new(Sm2::new(self.sm2)),
        };
        Ok(Scheduler::new(algorithm))
    }
}
