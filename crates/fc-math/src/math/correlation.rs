//! Pearson correlation between sensor channels.

/// Pearson correlation coefficient of two equal-length series.
///
/// Pairs where either side is non-finite are dropped before computing.
/// Returns `None` for mismatched lengths, fewer than 2 usable pairs, or a
/// side with zero variance. The result is clamped to [-1, 1] against
/// floating-point drift.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() {
        return None;
    }

    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect();
    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n_f;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n_f;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn perfect_positive_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [10.0, 20.0, 30.0, 40.0];
        assert!(approx_eq(pearson(&x, &y).unwrap(), 1.0, 1e-12));
    }

    #[test]
    fn perfect_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!(approx_eq(pearson(&x, &y).unwrap(), -1.0, 1e-12));
    }

    #[test]
    fn known_intermediate_value() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        // Hand-computed: cov = 8, var_x = 10, var_y = 10.
        assert!(approx_eq(pearson(&x, &y).unwrap(), 0.8, 1e-12));
    }

    #[test]
    fn zero_variance_is_none() {
        let x = [3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0];
        assert!(pearson(&x, &y).is_none());
    }

    #[test]
    fn mismatched_or_short_is_none() {
        assert!(pearson(&[1.0, 2.0], &[1.0]).is_none());
        assert!(pearson(&[1.0], &[1.0]).is_none());
        assert!(pearson(&[], &[]).is_none());
    }

    #[test]
    fn non_finite_pairs_dropped() {
        let x = [1.0, f64::NAN, 3.0, 4.0];
        let y = [10.0, 20.0, 30.0, 40.0];
        // The NaN pair is excluded; remaining points are still collinear.
        assert!(approx_eq(pearson(&x, &y).unwrap(), 1.0, 1e-12));
    }
}
