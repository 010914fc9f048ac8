use snafu::Snafu;

/// The argument of [`crate::sm2`] that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Argument {
    Quality,
    Interval,
    Repetitions,
    Easiness,
}

#[derive(Snafu, Debug, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum SchedulerError {
    #[snafu(display("{argument} must be {expected}, got {value}"))]
    InvalidArgument {
        argument: Argument,
        expected: &'static str,
        value: String,
    },
    #[snafu(display("{operation} requires a concrete scheduling algorithm"))]
    UnsupportedOperation { operation: &'static str },
    #[snafu(display("an interval of {days} days does not fit in a due timestamp"))]
    IntervalOutOfRange { days: i64 },
}

pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_argument() {
        let err = SchedulerError::InvalidArgument {
            argument: Argument::Repetitions,
            expected: "non-negative",
            value: "-1".to_string(),
        };
        assert_eq!(err.to_string(), "repetitions must be non-negative, got -1");

        let err = SchedulerError::IntervalOutOfRange { days: i64::MAX };
        assert_eq!(
            err.to_string(),
            format!("an interval of {} days does not fit in a due timestamp", i64::MAX)
        );
    }
}
