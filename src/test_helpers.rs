use chrono::{DateTime, TimeZone, Utc};

pub(crate) trait TestHelper {
    fn assert_approx_eq(self, expected: f64);
}

impl TestHelper for f64 {
    #[track_caller]
    fn assert_approx_eq(self, expected: f64) {
        assert!(
            (self - expected).abs() < 1e-9,
            "{self} is not approximately {expected}"
        );
    }
}

/// Midnight UTC on the given day.
pub(crate) fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}
