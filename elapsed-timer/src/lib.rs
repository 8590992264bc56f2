//! Elapsed-time measurement against the platform's monotonic clock.

pub mod scoped;
pub mod timer;

pub use scoped::ScopedTimer;
pub use timer::{ElapsedTimer, ElapsedValue};

use std::time::Duration;

/// Units an elapsed duration can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// Return the number of whole units contained in `duration`.
    ///
    /// Truncating: the remainder is discarded, never rounded up. 1,999 ms
    /// counts as 1 second, not 2.
    pub fn count_in(self, duration: Duration) -> u128 {
        match self {
            TimeUnit::Nanoseconds => duration.as_nanos(),
            TimeUnit::Microseconds => duration.as_micros(),
            TimeUnit::Milliseconds => duration.as_millis(),
            TimeUnit::Seconds => u128::from(duration.as_secs()),
            TimeUnit::Minutes => u128::from(duration.as_secs() / 60),
            TimeUnit::Hours => u128::from(duration.as_secs() / 3600),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(TimeUnit::Seconds, 1_999, 1; "just under two seconds is one")]
    #[test_case(TimeUnit::Seconds, 1_500, 1; "half a second truncates down")]
    #[test_case(TimeUnit::Seconds, 2_000, 2; "exact seconds count exactly")]
    #[test_case(TimeUnit::Milliseconds, 1_999, 1_999; "millis pass through")]
    #[test_case(TimeUnit::Minutes, 59_999, 0; "just under a minute is zero")]
    #[test_case(TimeUnit::Minutes, 61_000, 1; "a minute and a second is one")]
    #[test_case(TimeUnit::Hours, 3_599_999, 0; "just under an hour is zero")]
    #[test_case(TimeUnit::Hours, 3_600_000, 1; "exact hour counts")]
    fn test_truncating_count(unit: TimeUnit, millis: u64, expected: u128) {
        assert_eq!(unit.count_in(Duration::from_millis(millis)), expected);
    }

    #[test]
    fn test_sub_unit_durations_count_zero() {
        assert_eq!(
            TimeUnit::Milliseconds.count_in(Duration::from_micros(999)),
            0
        );
        assert_eq!(TimeUnit::Microseconds.count_in(Duration::from_nanos(999)), 0);
        assert_eq!(TimeUnit::Hours.count_in(Duration::ZERO), 0);
    }

    #[test]
    fn test_nanosecond_count_is_exact() {
        let one_and_a_half = Duration::new(1, 500_000_000);
        assert_eq!(
            TimeUnit::Nanoseconds.count_in(one_and_a_half),
            1_500_000_000
        );
        assert_eq!(TimeUnit::Seconds.count_in(one_and_a_half), 1);
    }
}
