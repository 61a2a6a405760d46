//! Property-based tests for fc-math numerical functions.
//!
//! Uses proptest to verify reliability-math invariants hold across many
//! random inputs.

use fc_math::{
    classify_trend, failure_rate, fit_weibull, iqr_outliers, mtbf, pearson, rolling_mean,
    summarize, weibull_cdf, weibull_hazard, weibull_mean, weibull_survival, TrendDirection,
};
use proptest::prelude::*;

/// Tolerance for floating point comparisons.
const TOL: f64 = 1e-10;

/// Helper to check approximate equality.
fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_infinite() && b.is_infinite() {
        return a.signum() == b.signum();
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    (a - b).abs() <= tol.max(tol * a.abs().max(b.abs()))
}

// ============================================================================
// MTBF / failure rate properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// MTBF scales inversely with the failure count.
    #[test]
    fn mtbf_inverse_in_failures(hours in 1.0..1e6f64, n in 1usize..100) {
        let m = mtbf(n, hours);
        prop_assert!(approx_eq(m * n as f64, hours, TOL),
            "mtbf({}, {}) * {} = {} != {}", n, hours, n, m * n as f64, hours);
    }

    /// failure_rate is the exact reciprocal of a positive MTBF.
    #[test]
    fn failure_rate_reciprocal(m in 1e-6..1e9f64) {
        let rate = failure_rate(m);
        prop_assert!(approx_eq(rate * m, 1.0, TOL),
            "failure_rate({}) * {} = {}", m, m, rate * m);
    }

    /// More failures in the same window never raise the MTBF.
    #[test]
    fn mtbf_monotone_in_failures(hours in 0.0..1e6f64, n in 0usize..50) {
        prop_assert!(mtbf(n + 1, hours) <= mtbf(n, hours) + TOL);
    }
}

// ============================================================================
// Weibull distribution properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// CDF stays within [0, 1] for all valid inputs.
    #[test]
    fn weibull_cdf_bounded(t in -100.0..1e7f64, scale in 1e-3..1e6f64, shape in 1e-2..50.0f64) {
        let f = weibull_cdf(t, scale, shape);
        prop_assert!((0.0..=1.0).contains(&f),
            "cdf({}, {}, {}) = {} outside [0,1]", t, scale, shape, f);
    }

    /// CDF is non-decreasing in t.
    #[test]
    fn weibull_cdf_monotone(t1 in 0.0..1e6f64, dt in 0.0..1e6f64, scale in 1e-2..1e5f64, shape in 0.1..20.0f64) {
        let f1 = weibull_cdf(t1, scale, shape);
        let f2 = weibull_cdf(t1 + dt, scale, shape);
        prop_assert!(f2 + TOL >= f1, "cdf not monotone: F({})={} > F({})={}", t1, f1, t1 + dt, f2);
    }

    /// Survival and CDF are complements.
    #[test]
    fn weibull_survival_complements_cdf(t in 0.0..1e6f64, scale in 1e-2..1e5f64, shape in 0.1..20.0f64) {
        let f = weibull_cdf(t, scale, shape);
        let s = weibull_survival(t, scale, shape);
        prop_assert!(approx_eq(f + s, 1.0, TOL), "F+S = {} for t={}", f + s, t);
    }

    /// The characteristic life always sits at 1 - 1/e.
    #[test]
    fn weibull_cdf_at_scale(scale in 1e-2..1e6f64, shape in 0.1..30.0f64) {
        let f = weibull_cdf(scale, scale, shape);
        let expected = 1.0 - (-1.0f64).exp();
        prop_assert!(approx_eq(f, expected, 1e-9), "F(eta) = {} != {}", f, expected);
    }

    /// Hazard is non-negative wherever defined.
    #[test]
    fn weibull_hazard_non_negative(t in 0.0..1e6f64, scale in 1e-2..1e5f64, shape in 0.1..20.0f64) {
        let h = weibull_hazard(t, scale, shape);
        prop_assert!(h >= 0.0, "hazard({}, {}, {}) = {}", t, scale, shape, h);
    }

    /// For wear-out shapes the hazard never decreases.
    #[test]
    fn weibull_hazard_monotone_wear_out(t1 in 0.0..1e5f64, dt in 0.0..1e5f64, scale in 1.0..1e5f64, shape in 1.0..20.0f64) {
        let h1 = weibull_hazard(t1, scale, shape);
        let h2 = weibull_hazard(t1 + dt, scale, shape);
        prop_assert!(h2 + TOL >= h1 || approx_eq(h1, h2, 1e-9),
            "hazard decreasing for shape {}: h({})={} > h({})={}", shape, t1, h1, t1 + dt, h2);
    }

    /// The mean is positive and scales linearly with eta.
    #[test]
    fn weibull_mean_scales_with_eta(scale in 1e-2..1e5f64, shape in 0.2..30.0f64, k in 1.0..10.0f64) {
        let m1 = weibull_mean(scale, shape);
        let m2 = weibull_mean(scale * k, shape);
        prop_assert!(m1 > 0.0);
        prop_assert!(approx_eq(m2, m1 * k, 1e-8), "mean({}*{}) = {} != {} * {}", scale, k, m2, m1, k);
    }
}

// ============================================================================
// Weibull fit properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The fit never panics and always yields usable positive parameters,
    /// falling back when it must.
    #[test]
    fn fit_always_usable(times in prop::collection::vec(-1e3..1e6f64, 0..40)) {
        let fit = fit_weibull(&times);
        prop_assert!(fit.scale > 0.0 && fit.scale.is_finite());
        prop_assert!(fit.shape > 0.0 && fit.shape.is_finite());
        let p = weibull_cdf(500.0, fit.scale, fit.shape);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    /// Samples that cannot constrain the parameters are marked fallback.
    #[test]
    fn fit_small_samples_marked_fallback(t in 1.0..1e6f64) {
        prop_assert!(fit_weibull(&[]).fallback);
        prop_assert!(fit_weibull(&[t]).fallback);
    }

    /// A genuine fit reports a finite log-likelihood and iteration count.
    #[test]
    fn fit_reports_diagnostics(seed in 1.0..100.0f64) {
        // Spread sample guaranteed to be fittable.
        let times: Vec<f64> = (1..=8).map(|i| seed * i as f64).collect();
        let fit = fit_weibull(&times);
        if !fit.fallback {
            prop_assert!(fit.log_likelihood.unwrap().is_finite());
            prop_assert!(fit.iterations >= 1);
        }
    }
}

// ============================================================================
// Descriptive statistics properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Summary ordering invariant: min <= q1 <= median <= q3 <= max.
    #[test]
    fn summary_quantiles_ordered(values in prop::collection::vec(-1e6..1e6f64, 1..60)) {
        let s = summarize(&values).unwrap();
        prop_assert!(s.min <= s.q1 + TOL);
        prop_assert!(s.q1 <= s.median + TOL);
        prop_assert!(s.median <= s.q3 + TOL);
        prop_assert!(s.q3 <= s.max + TOL);
        prop_assert!(s.mean >= s.min - TOL && s.mean <= s.max + TOL);
    }

    /// Outlier fences always bracket the interquartile range.
    #[test]
    fn outlier_fences_bracket_iqr(values in prop::collection::vec(-1e4..1e4f64, 1..60)) {
        let scan = iqr_outliers(&values).unwrap();
        let s = summarize(&values).unwrap();
        prop_assert!(scan.lower_bound <= s.q1 + TOL);
        prop_assert!(scan.upper_bound + TOL >= s.q3);
        // Flagged indices are valid and their values really sit outside.
        for &i in &scan.indices {
            prop_assert!(i < values.len());
            prop_assert!(values[i] < scan.lower_bound || values[i] > scan.upper_bound);
        }
    }

    /// Rolling mean stays inside the range of its window's inputs.
    #[test]
    fn rolling_mean_bounded(values in prop::collection::vec(-1e4..1e4f64, 0..40), window in 1usize..8) {
        let out = rolling_mean(&values, window);
        if values.len() >= window {
            prop_assert_eq!(out.len(), values.len() - window + 1);
        } else {
            prop_assert!(out.is_empty());
        }
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for m in out {
            prop_assert!(m >= lo - TOL && m <= hi + TOL);
        }
    }
}

// ============================================================================
// Trend and correlation properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Strictly monotone series classify by their direction.
    #[test]
    fn trend_monotone_classified(start in -1e3..1e3f64, steps in prop::collection::vec(0.001..10.0f64, 3..20)) {
        let mut rising = vec![start];
        for s in &steps {
            rising.push(rising[rising.len() - 1] + s);
        }
        prop_assert_eq!(classify_trend(&rising), TrendDirection::Increasing);

        let falling: Vec<f64> = rising.iter().map(|v| -v).collect();
        prop_assert_eq!(classify_trend(&falling), TrendDirection::Decreasing);
    }

    /// Reversing a series flips increasing to decreasing and back.
    #[test]
    fn trend_reversal_flips(values in prop::collection::vec(-1e3..1e3f64, 3..30)) {
        let forward = classify_trend(&values);
        let reversed: Vec<f64> = values.iter().rev().cloned().collect();
        let backward = classify_trend(&reversed);
        let expected = match forward {
            TrendDirection::Increasing => TrendDirection::Decreasing,
            TrendDirection::Decreasing => TrendDirection::Increasing,
            TrendDirection::Stable => TrendDirection::Stable,
        };
        prop_assert_eq!(backward, expected);
    }

    /// Pearson is symmetric and bounded.
    #[test]
    fn pearson_symmetric_bounded(pairs in prop::collection::vec((-1e4..1e4f64, -1e4..1e4f64), 2..40)) {
        let x: Vec<f64> = pairs.iter().map(|(a, _)| *a).collect();
        let y: Vec<f64> = pairs.iter().map(|(_, b)| *b).collect();
        if let Some(r_xy) = pearson(&x, &y) {
            prop_assert!((-1.0..=1.0).contains(&r_xy));
            let r_yx = pearson(&y, &x).unwrap();
            prop_assert!(approx_eq(r_xy, r_yx, 1e-9));
        }
    }

    /// A series correlates perfectly with a positive affine image of itself.
    #[test]
    fn pearson_affine_invariant(values in prop::collection::vec(-1e3..1e3f64, 3..30), a in 0.1..10.0f64, b in -100.0..100.0f64) {
        let image: Vec<f64> = values.iter().map(|v| a * v + b).collect();
        if let Some(r) = pearson(&values, &image) {
            prop_assert!(approx_eq(r, 1.0, 1e-9), "r = {}", r);
        }
    }
}
