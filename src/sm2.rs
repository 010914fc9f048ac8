use chrono::{DateTime, Duration, Utc};
use log::trace;
use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{Argument, InvalidArgumentSnafu, Result};
use crate::scheduler::{Scheduler, SchedulingAlgorithm, anchor_due};

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 5;
/// Qualities at or above this count as a correct response.
pub const CORRECT_QUALITY_THRESHOLD: i32 = 3;
pub const INITIAL_INTERVAL: i64 = 1;
pub const SECOND_INTERVAL: i64 = 6;
pub const MIN_EASINESS: f64 = 1.3;
pub const DEFAULT_EASINESS: f64 = 2.5;

const EASINESS_OFFSET: f64 = 0.1;
const EASINESS_LINEAR_COEFF: f64 = 0.08;
const EASINESS_QUADRATIC_COEFF: f64 = 0.02;

/// SuperMemo-2 (SM-2).
///
/// - `quality`: recall performance, 0 (complete blackout) to 5 (perfect response).
/// - `interval`: days since the previous repetition was scheduled.
/// - `repetitions`: number of consecutive correct answers (quality >= 3).
/// - `easiness`: how easily the item is retained; larger values grow the interval faster.
///
/// Returns the new `(interval, repetitions, easiness)`.
///
/// From the third correct repetition on, the interval is `interval * easiness` rounded
/// half-to-even, so `12.5` becomes `12` and `7.5` becomes `8`. Products beyond `i64::MAX`
/// saturate. The easiness update always uses the incoming `quality` and `easiness`, and the
/// result never drops below [`MIN_EASINESS`].
///
/// Fails with [`crate::SchedulerError::InvalidArgument`] if `quality` is outside `[0, 5]`,
/// if `interval` or `repetitions` is negative, or if `easiness` is negative or not finite.
///
/// Algorithm SM-2, (C) Copyright SuperMemo World, 1991.
pub fn sm2(
    quality: i32,
    interval: i64,
    repetitions: i64,
    easiness: f64,
) -> Result<(i64, i64, f64)> {
    ensure!(
        (MIN_QUALITY..=MAX_QUALITY).contains(&quality),
        InvalidArgumentSnafu {
            argument: Argument::Quality,
            expected: "between 0 and 5",
            value: quality.to_string(),
        }
    );
    ensure!(
        interval >= 0,
        InvalidArgumentSnafu {
            argument: Argument::Interval,
            expected: "non-negative",
            value: interval.to_string(),
        }
    );
    ensure!(
        repetitions >= 0,
        InvalidArgumentSnafu {
            argument: Argument::Repetitions,
            expected: "non-negative",
            value: repetitions.to_string(),
        }
    );
    ensure!(
        easiness.is_finite() && easiness >= 0.0,
        InvalidArgumentSnafu {
            argument: Argument::Easiness,
            expected: "finite and non-negative",
            value: easiness.to_string(),
        }
    );

    let (new_interval, new_repetitions) = if quality < CORRECT_QUALITY_THRESHOLD {
        (INITIAL_INTERVAL, 0)
    } else {
        let new_interval = match repetitions {
            0 => INITIAL_INTERVAL,
            1 => SECOND_INTERVAL,
            // float to int `as` saturates
            _ => (interval as f64 * easiness).round_ties_even() as i64,
        };
        (new_interval, repetitions.saturating_add(1))
    };

    let lapse = f64::from(MAX_QUALITY - quality);
    let new_easiness = easiness
        + (EASINESS_OFFSET - lapse * (EASINESS_LINEAR_COEFF + lapse * EASINESS_QUADRATIC_COEFF));

    Ok((new_interval, new_repetitions, new_easiness.max(MIN_EASINESS)))
}

/// The per-item numbers SM-2 carries from one review to the next.
///
/// Every field falls back to its default when deserialized, so a stored or configured
/// state only needs to name the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sm2State {
    /// Whole days, never a duration.
    pub interval: i64,
    pub repetitions: i64,
    pub easiness: f64,
}

impl Default for Sm2State {
    fn default() -> Self {
        Self {
            interval: 0,
            repetitions: 0,
            easiness: DEFAULT_EASINESS,
        }
    }
}

impl Sm2State {
    pub fn next(&self, quality: i32) -> Result<Self> {
        let (interval, repetitions, easiness) =
            sm2(quality, self.interval, self.repetitions, self.easiness)?;
        Ok(Self {
            interval,
            repetitions,
            easiness,
        })
    }
}

/// SM-2 as a [`SchedulingAlgorithm`]: the outcome of a review is its quality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sm2 {
    state: Sm2State,
}

impl Sm2 {
    pub fn new(state: Sm2State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> Sm2State {
        self.state
    }
}

impl SchedulingAlgorithm for Sm2 {
    type Outcome = i32;

    fn next_due_interval(
        &mut self,
        attempted_at: DateTime<Utc>,
        previous_due: Option<DateTime<Utc>>,
        quality: i32,
    ) -> Result<(DateTime<Utc>, Duration)> {
        let next = self.state.next(quality)?;
        let (due_timestamp, interval) = anchor_due(attempted_at, previous_due, next.interval)?;
        trace!("sm2 quality {quality}: {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok((due_timestamp, interval))
    }
}

pub type Sm2Scheduler = Scheduler<Sm2>;

impl Scheduler<Sm2> {
    pub fn from_state(state: Sm2State) -> Self {
        Self::new(Sm2::new(state))
    }

    /// Rebuilds a scheduler from fields a caller stored after an earlier review, so the next
    /// due timestamp stays anchored to the one already handed out.
    pub fn resume(state: Sm2State, due_timestamp: Option<DateTime<Utc>>) -> Self {
        Self::with_due_timestamp(Sm2::new(state), due_timestamp)
    }

    pub fn state(&self) -> Sm2State {
        self.algorithm().state()
    }

    pub fn interval(&self) -> i64 {
        self.state().interval
    }

    pub fn repetitions(&self) -> i64 {
        self.state().repetitions
    }

    pub fn easiness(&self) -> f64 {
        self.state().easiness
    }
}
