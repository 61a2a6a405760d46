//! Descriptive statistics and IQR outlier detection for sensor channels.
//!
//! NaN samples are skipped, matching how column statistics behave in the
//! dataframe tooling operators already use for ad-hoc analysis. Quantiles
//! interpolate linearly between order statistics.

use serde::Serialize;

/// Five-number summary plus mean and sample standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of non-NaN samples.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator). NaN when count < 2.
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize a sensor channel. Returns `None` when no non-NaN samples
/// remain.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    let mut clean: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if clean.is_empty() {
        return None;
    }
    clean.sort_by(f64::total_cmp);

    let count = clean.len();
    let mean = clean.iter().sum::<f64>() / count as f64;
    let std = if count < 2 {
        f64::NAN
    } else {
        let ss: f64 = clean.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (count - 1) as f64).sqrt()
    };

    Some(Summary {
        count,
        mean,
        std,
        min: clean[0],
        q1: quantile(&clean, 0.25),
        median: quantile(&clean, 0.5),
        q3: quantile(&clean, 0.75),
        max: clean[count - 1],
    })
}

/// Linearly interpolated quantile of a sorted, NaN-free, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Result of an IQR outlier scan over one channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierScan {
    /// Values below this are outliers: Q1 - 1.5 * IQR.
    pub lower_bound: f64,

    /// Values above this are outliers: Q3 + 1.5 * IQR.
    pub upper_bound: f64,

    /// Indices into the input slice, in order. NaN samples are never
    /// flagged.
    pub indices: Vec<usize>,
}

impl OutlierScan {
    pub fn count(&self) -> usize {
        self.indices.len()
    }
}

/// Flag samples outside the Tukey fences `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`.
///
/// The fences come from the non-NaN samples; returns `None` when there are
/// none to compute them from.
pub fn iqr_outliers(values: &[f64]) -> Option<OutlierScan> {
    let mut clean: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if clean.is_empty() {
        return None;
    }
    clean.sort_by(f64::total_cmp);

    let q1 = quantile(&clean, 0.25);
    let q3 = quantile(&clean, 0.75);
    let iqr = q3 - q1;
    let lower_bound = q1 - 1.5 * iqr;
    let upper_bound = q3 + 1.5 * iqr;

    let indices = values
        .iter()
        .enumerate()
        .filter(|(_, &v)| v < lower_bound || v > upper_bound)
        .map(|(i, _)| i)
        .collect();

    Some(OutlierScan {
        lower_bound,
        upper_bound,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn summarize_basic() {
        let s = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(s.count, 8);
        assert!(approx_eq(s.mean, 5.0, 1e-12));
        // Sample std of this classic set is sqrt(32/7).
        assert!(approx_eq(s.std, (32.0f64 / 7.0).sqrt(), 1e-12));
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
        assert!(approx_eq(s.median, 4.5, 1e-12));
    }

    #[test]
    fn summarize_interpolated_quartiles() {
        // [1,2,3,4]: q1 at position 0.75 -> 1.75, q3 at 2.25 -> 3.25.
        let s = summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!(approx_eq(s.q1, 1.75, 1e-12));
        assert!(approx_eq(s.q3, 3.25, 1e-12));
    }

    #[test]
    fn summarize_skips_nan() {
        let s = summarize(&[1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(s.count, 2);
        assert!(approx_eq(s.mean, 2.0, 1e-12));
    }

    #[test]
    fn summarize_empty_and_all_nan() {
        assert!(summarize(&[]).is_none());
        assert!(summarize(&[f64::NAN, f64::NAN]).is_none());
    }

    #[test]
    fn summarize_single_value() {
        let s = summarize(&[7.5]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.min, 7.5);
        assert_eq!(s.q1, 7.5);
        assert_eq!(s.max, 7.5);
        assert!(s.std.is_nan());
    }

    #[test]
    fn outliers_flagged_outside_fences() {
        // Tight cluster plus one far point.
        let values = [10.0, 11.0, 10.5, 9.8, 10.2, 50.0, 10.1];
        let scan = iqr_outliers(&values).unwrap();
        assert_eq!(scan.indices, vec![5]);
        assert_eq!(scan.count(), 1);
        assert!(scan.upper_bound < 50.0);
    }

    #[test]
    fn outliers_none_in_uniform_data() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let scan = iqr_outliers(&values).unwrap();
        assert!(scan.indices.is_empty());
    }

    #[test]
    fn outliers_nan_never_flagged() {
        let values = [10.0, 10.0, f64::NAN, 10.0, 99.0];
        let scan = iqr_outliers(&values).unwrap();
        assert_eq!(scan.indices, vec![4]);
    }

    #[test]
    fn outliers_empty_input() {
        assert!(iqr_outliers(&[]).is_none());
    }
}
