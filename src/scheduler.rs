use std::fmt::Debug;

use chrono::{DateTime, Duration, Utc};
use log::debug;
use snafu::OptionExt;

use crate::error::{IntervalOutOfRangeSnafu, Result};

/// A spaced-repetition algorithm that can schedule one item.
///
/// Implementations own the item's numeric state, validate the outcome they are given and
/// advance that state by one review. They receive the due timestamp handed out for the
/// previous review (if any) and return the new due timestamp together with the interval
/// that produced it; [`anchor_due`] derives both the same way for every algorithm.
pub trait SchedulingAlgorithm: Debug {
    /// What the learner reports after a review, e.g. an SM-2 quality.
    type Outcome;

    fn next_due_interval(
        &mut self,
        attempted_at: DateTime<Utc>,
        previous_due: Option<DateTime<Utc>>,
        outcome: Self::Outcome,
    ) -> Result<(DateTime<Utc>, Duration)>;
}

impl<A: SchedulingAlgorithm + ?Sized> SchedulingAlgorithm for Box<A> {
    type Outcome = A::Outcome;

    fn next_due_interval(
        &mut self,
        attempted_at: DateTime<Utc>,
        previous_due: Option<DateTime<Utc>>,
        outcome: Self::Outcome,
    ) -> Result<(DateTime<Utc>, Duration)> {
        (**self).next_due_interval(attempted_at, previous_due, outcome)
    }
}

/// Adds `days` to the previously scheduled due timestamp, or to `attempted_at` for the first
/// review. Anchoring to the previous due date keeps early and late reviews from shifting the
/// cadence.
pub fn anchor_due(
    attempted_at: DateTime<Utc>,
    previous_due: Option<DateTime<Utc>>,
    days: i64,
) -> Result<(DateTime<Utc>, Duration)> {
    let interval = Duration::try_days(days).context(IntervalOutOfRangeSnafu { days })?;
    let due_timestamp = previous_due
        .unwrap_or(attempted_at)
        .checked_add_signed(interval)
        .context(IntervalOutOfRangeSnafu { days })?;
    Ok((due_timestamp, interval))
}

/// Schedules one item with algorithm `A` and remembers the last due timestamp and interval
/// it handed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scheduler<A> {
    algorithm: A,
    due_timestamp: Option<DateTime<Utc>>,
    interval: Option<Duration>,
}

impl<A: SchedulingAlgorithm> Scheduler<A> {
    pub fn new(algorithm: A) -> Self {
        Self::with_due_timestamp(algorithm, None)
    }

    pub fn with_due_timestamp(algorithm: A, due_timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            algorithm,
            due_timestamp,
            interval: None,
        }
    }

    /// Records a review made at `attempted_at` and returns when the item is due next.
    ///
    /// The cached due timestamp and interval are only replaced when the algorithm succeeds.
    pub fn compute_next_due_interval(
        &mut self,
        attempted_at: DateTime<Utc>,
        result: A::Outcome,
    ) -> Result<(DateTime<Utc>, Duration)> {
        let (due_timestamp, interval) =
            self.algorithm
                .next_due_interval(attempted_at, self.due_timestamp, result)?;
        debug!(
            "reviewed at {attempted_at}, next due {due_timestamp} in {} days",
            interval.num_days()
        );
        self.due_timestamp = Some(due_timestamp);
        self.interval = Some(interval);
        Ok((due_timestamp, interval))
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub fn due_timestamp(&self) -> Option<DateTime<Utc>> {
        self.due_timestamp
    }

    /// The interval behind [`Self::due_timestamp`], `None` until the first review.
    pub fn interval_duration(&self) -> Option<Duration> {
        self.interval
    }
}
