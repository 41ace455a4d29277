//! Deadline arithmetic for the two timeout sources: the process-lifetime
//! timeout armed at execute, and the caller's per-wait budget.

use std::time::{Duration, Instant};

use nix::sys::time::{TimeVal, TimeValLike};

/// Normalize a timeout given in seconds. Zero, negative, and non-finite
/// values all mean "no timeout".
pub(crate) fn timeout_from_secs(seconds: f64) -> Option<Duration> {
    if seconds.is_finite() && seconds > 0.0 {
        Some(Duration::from_secs_f64(seconds))
    } else {
        None
    }
}

/// Time left until `deadline`, or `None` once it has passed.
pub(crate) fn remaining(deadline: Instant) -> Option<Duration> {
    let now = Instant::now();
    if now >= deadline {
        None
    } else {
        Some(deadline - now)
    }
}

/// Convert a remaining duration into the timeval select expects.
pub(crate) fn to_timeval(left: Duration) -> TimeVal {
    TimeVal::microseconds(left.as_micros().min(i64::MAX as u128) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonpositive_and_nonfinite_timeouts_mean_none() {
        assert_eq!(timeout_from_secs(0.0), None);
        assert_eq!(timeout_from_secs(-3.5), None);
        assert_eq!(timeout_from_secs(f64::NAN), None);
        assert_eq!(timeout_from_secs(f64::INFINITY), None);
    }

    #[test]
    fn positive_timeout_converts_to_duration() {
        assert_eq!(timeout_from_secs(0.25), Some(Duration::from_millis(250)));
        assert_eq!(timeout_from_secs(2.0), Some(Duration::from_secs(2)));
    }

    #[test]
    fn passed_deadline_has_no_remaining_time() {
        let past = Instant::now() - Duration::from_secs(1);
        assert_eq!(remaining(past), None);
    }

    #[test]
    fn future_deadline_reports_remaining_time() {
        let future = Instant::now() + Duration::from_secs(60);
        let left = remaining(future).expect("time left");
        assert!(left > Duration::from_secs(59));
        assert!(left <= Duration::from_secs(60));
    }

    #[test]
    fn timeval_preserves_microseconds() {
        let tv = to_timeval(Duration::new(2, 500_000_000));
        assert_eq!(tv.tv_sec(), 2);
        assert_eq!(tv.tv_usec(), 500_000);
    }
}
