//! Monotonic time samples and millisecond conversion.
//!
//! Durations are stored as [`Duration`] in the result tree and only converted
//! to fractional milliseconds for display and export.

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Takes a monotonic time sample.
#[inline]
pub fn now() -> Instant {
    Instant::now()
}

/// Pins and returns the instant the run's total time is measured from.
///
/// The first call wins; [`crate::Pipeline::new`] calls this so that the
/// reported total covers registration as well as execution.
pub fn process_start() -> Instant {
    *PROCESS_START
}

/// Converts a duration to milliseconds as a floating value.
#[inline]
pub fn to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Runs `f` once and returns the elapsed milliseconds.
pub fn timer<F: FnOnce()>(f: F) -> f64 {
    let start = now();
    f();
    to_ms(start.elapsed())
}

/// Runs `f` `times` times and returns the average elapsed milliseconds.
///
/// Returns `0.0` when `times` is zero.
pub fn avg_timer<F: FnMut()>(times: u32, mut f: F) -> f64 {
    if times == 0 {
        return 0.0;
    }
    let mut total = Duration::ZERO;
    for _ in 0..times {
        let start = now();
        f();
        total += start.elapsed();
    }
    to_ms(total) / f64::from(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_ms_converts_fractional_values() {
        assert_eq!(to_ms(Duration::from_millis(250)), 250.0);
        assert_eq!(to_ms(Duration::from_micros(1500)), 1.5);
    }

    #[test]
    fn avg_timer_runs_closure_requested_number_of_times() {
        let mut calls = 0;
        let avg = avg_timer(100, || calls += 1);
        assert_eq!(calls, 100);
        assert!(avg >= 0.0);
    }

    #[test]
    fn avg_timer_with_zero_runs_is_zero() {
        let mut calls = 0;
        assert_eq!(avg_timer(0, || calls += 1), 0.0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn process_start_is_stable() {
        assert_eq!(process_start(), process_start());
    }
}
