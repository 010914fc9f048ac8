use chrono::Duration;
use itertools::Itertools;
use serde::Deserialize;

use crate::sm2::{Sm2Scheduler, Sm2State};
use crate::test_helpers::{TestHelper, timestamp};

const SEQUENCES_CSV: &str = "tests/data/sm2_sequences.csv";

/// One row of the fixture: qualities reported in order, starting from a default state,
/// and the state SM-2 should end up in.
#[derive(Debug, Clone, Deserialize)]
struct Sequence {
    qualities: String,
    repetitions: i64,
    interval: i64,
    easiness: f64,
}

impl Sequence {
    fn qualities(&self) -> Vec<i32> {
        self.qualities
            .split_whitespace()
            .map(|q| q.parse().unwrap())
            .collect_vec()
    }
}

fn sequences() -> Vec<Sequence> {
    csv::Reader::from_path(SEQUENCES_CSV)
        .unwrap()
        .deserialize()
        .collect::<Result<Vec<Sequence>, _>>()
        .unwrap()
}

#[test]
fn fixture_is_not_empty() {
    assert!(sequences().len() >= 10);
}

#[test]
fn recurrence_matches_fixture() {
    for sequence in sequences() {
        let state = sequence
            .qualities()
            .into_iter()
            .try_fold(Sm2State::default(), |state, quality| state.next(quality))
            .unwrap();
        assert_eq!(state.repetitions, sequence.repetitions, "{sequence:?}");
        assert_eq!(state.interval, sequence.interval, "{sequence:?}");
        state.easiness.assert_approx_eq(sequence.easiness);
    }
}

#[test]
fn scheduler_matches_fixture() {
    for sequence in sequences() {
        let mut scheduler = Sm2Scheduler::default();
        let first_attempt = timestamp(2021, 10, 13);
        let mut total_days = 0;
        // review a day late every time; the due dates must not drift
        let mut attempted_at = first_attempt;
        for quality in sequence.qualities() {
            let (due_timestamp, interval) = scheduler
                .compute_next_due_interval(attempted_at, quality)
                .unwrap();
            total_days += interval.num_days();
            assert_eq!(due_timestamp, first_attempt + Duration::days(total_days));
            attempted_at = due_timestamp + Duration::days(1);
        }
        assert_eq!(scheduler.repetitions(), sequence.repetitions, "{sequence:?}");
        assert_eq!(scheduler.interval(), sequence.interval, "{sequence:?}");
        assert_eq!(
            scheduler.interval_duration(),
            Some(Duration::days(sequence.interval))
        );
        scheduler.easiness().assert_approx_eq(sequence.easiness);
    }
}
