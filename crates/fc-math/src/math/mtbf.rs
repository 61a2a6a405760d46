//! Empirical reliability aggregates: MTBF and failure rate.
//!
//! These are computed directly from the failure count and cumulative
//! operating hours, before any lifetime distribution is fitted.

/// Mean time between failures, in operating hours.
///
/// `MTBF = total_hours / num_failures`. With zero recorded failures the
/// whole observation window is one failure-free interval, so the window
/// itself is returned.
///
/// # Returns
/// * NaN for NaN or negative `total_hours`
pub fn mtbf(num_failures: usize, total_hours: f64) -> f64 {
    if total_hours.is_nan() || total_hours < 0.0 {
        return f64::NAN;
    }
    if num_failures == 0 {
        return total_hours;
    }
    total_hours / num_failures as f64
}

/// Empirical failure rate in failures per operating hour.
///
/// `lambda = 1 / MTBF`. Returns +inf for a zero MTBF (failure on arrival)
/// and 0 for an infinite MTBF.
///
/// # Returns
/// * NaN for NaN or negative `mtbf_hours`
pub fn failure_rate(mtbf_hours: f64) -> f64 {
    if mtbf_hours.is_nan() || mtbf_hours < 0.0 {
        return f64::NAN;
    }
    if mtbf_hours == 0.0 {
        return f64::INFINITY;
    }
    if mtbf_hours == f64::INFINITY {
        return 0.0;
    }
    1.0 / mtbf_hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mtbf_no_failures_is_whole_window() {
        assert_eq!(mtbf(0, 500.0), 500.0);
        assert_eq!(mtbf(0, 0.0), 0.0);
    }

    #[test]
    fn mtbf_divides_window_by_failures() {
        assert_eq!(mtbf(1, 500.0), 500.0);
        assert_eq!(mtbf(2, 500.0), 250.0);
        assert_eq!(mtbf(4, 1000.0), 250.0);
    }

    #[test]
    fn failure_rate_reciprocal() {
        assert_eq!(failure_rate(250.0), 0.004);
        assert_eq!(failure_rate(1000.0), 0.001);
    }

    #[test]
    fn failure_rate_zero_mtbf_diverges() {
        let rate = failure_rate(0.0);
        assert!(rate.is_infinite() && rate.is_sign_positive());
    }

    #[test]
    fn failure_rate_infinite_mtbf_is_zero() {
        assert_eq!(failure_rate(f64::INFINITY), 0.0);
    }

    #[test]
    fn nan_and_negative_propagate() {
        assert!(mtbf(1, f64::NAN).is_nan());
        assert!(mtbf(1, -5.0).is_nan());
        assert!(failure_rate(f64::NAN).is_nan());
        assert!(failure_rate(-250.0).is_nan());
    }
}
