//! Weibull lifetime distribution for equipment failure modeling.
//!
//! Provides CDF, survival, hazard, and mean functions plus a maximum
//! likelihood fit over recorded failure times. The fit never fails: when
//! the sample cannot constrain the parameters, calibrated fallback values
//! are returned and marked as such.
//!
//! # Parameterization
//!
//! Uses **scale/shape parameterization**: `Weibull(η, β)` where:
//! - `η` = scale (characteristic life, hours; η > 0)
//! - `β` = shape (β > 0; β < 1 infant mortality, β = 1 random, β > 1 wear-out)
//!
//! The CDF is: `F(t) = 1 - exp(-(t/η)^β)`

use super::stable::log_gamma;
use serde::Serialize;

/// Fallback scale in hours, a generic ~thousand-hour characteristic life.
pub const FALLBACK_SCALE: f64 = 1000.0;
/// Fallback shape, a mild wear-out profile.
pub const FALLBACK_SHAPE: f64 = 2.0;

// Newton-Raphson settings for the profile-likelihood solve.
const MLE_MAX_ITER: usize = 100;
const MLE_TOL: f64 = 1e-10;

/// CDF of the Weibull distribution: probability of failure by time t.
///
/// `F(t) = 1 - exp(-(t/η)^β)`
///
/// # Returns
/// * 0 for t <= 0, 1 for t = +inf
/// * NaN for NaN inputs or non-positive parameters
pub fn weibull_cdf(t: f64, scale: f64, shape: f64) -> f64 {
    let surv = weibull_survival(t, scale, shape);
    if surv.is_nan() {
        return f64::NAN;
    }
    1.0 - surv
}

/// Survival function of the Weibull distribution.
///
/// `S(t) = P(T > t) = exp(-(t/η)^β)`
pub fn weibull_survival(t: f64, scale: f64, shape: f64) -> f64 {
    if t.is_nan() || scale.is_nan() || shape.is_nan() {
        return f64::NAN;
    }
    if scale <= 0.0 || shape <= 0.0 {
        return f64::NAN;
    }
    if t <= 0.0 {
        return 1.0;
    }
    if t.is_infinite() {
        return 0.0;
    }
    (-(t / scale).powf(shape)).exp()
}

/// Hazard rate of the Weibull distribution.
///
/// `h(t) = (β/η) * (t/η)^(β-1)`, the instantaneous failure rate given
/// survival to t. Constant for β = 1, increasing for β > 1.
pub fn weibull_hazard(t: f64, scale: f64, shape: f64) -> f64 {
    if t.is_nan() || scale.is_nan() || shape.is_nan() {
        return f64::NAN;
    }
    if scale <= 0.0 || shape <= 0.0 {
        return f64::NAN;
    }
    if t < 0.0 {
        return f64::NAN;
    }

    // Special case: t = 0
    if t == 0.0 {
        if shape < 1.0 {
            return f64::INFINITY;
        } else if shape == 1.0 {
            return 1.0 / scale;
        } else {
            return 0.0;
        }
    }

    (shape / scale) * (t / scale).powf(shape - 1.0)
}

/// Mean of Weibull(η, β).
///
/// `E[T] = η * Γ(1 + 1/β)`, computed through `log_gamma` so small shapes
/// stay finite as long as the product does.
pub fn weibull_mean(scale: f64, shape: f64) -> f64 {
    if scale.is_nan() || shape.is_nan() || scale <= 0.0 || shape <= 0.0 {
        return f64::NAN;
    }
    scale * log_gamma(1.0 + 1.0 / shape).exp()
}

/// Result of fitting a Weibull distribution to failure times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeibullFit {
    /// Scale parameter (characteristic life, hours).
    pub scale: f64,

    /// Shape parameter.
    pub shape: f64,

    /// Log-likelihood at the fitted parameters. Absent for fallback fits.
    pub log_likelihood: Option<f64>,

    /// Newton-Raphson iterations used. Zero for fallback fits.
    pub iterations: usize,

    /// True when the sample could not constrain the parameters and the
    /// fallback values were substituted.
    pub fallback: bool,
}

/// Fit a Weibull distribution to failure times, with the calibrated
/// fallback parameters when the sample is unusable.
///
/// Equivalent to [`fit_weibull_with_fallback`] with
/// ([`FALLBACK_SCALE`], [`FALLBACK_SHAPE`]).
pub fn fit_weibull(failure_hours: &[f64]) -> WeibullFit {
    fit_weibull_with_fallback(failure_hours, FALLBACK_SCALE, FALLBACK_SHAPE)
}

/// Fit a Weibull distribution to failure times by maximum likelihood.
///
/// The shape is found by Newton-Raphson on the profile likelihood
/// equation:
///
/// ```text
/// f(β) = n/β + Σ ln(t_i) - n * Σ(t_i^β ln t_i) / Σ(t_i^β) = 0
/// ```
///
/// and the scale follows analytically: `η = (Σ t_i^β / n)^(1/β)`.
///
/// The fit falls back to `(fallback_scale, fallback_shape)` when:
/// - fewer than 2 failure times are given
/// - any time is non-positive or non-finite
/// - the solver fails to converge
///
/// Fallback results carry `fallback = true` and no log-likelihood; the
/// function itself never fails or panics.
pub fn fit_weibull_with_fallback(
    failure_hours: &[f64],
    fallback_scale: f64,
    fallback_shape: f64,
) -> WeibullFit {
    match weibull_mle(failure_hours) {
        Some(fit) => fit,
        None => WeibullFit {
            scale: fallback_scale,
            shape: fallback_shape,
            log_likelihood: None,
            iterations: 0,
            fallback: true,
        },
    }
}

/// Maximum likelihood estimation proper. `None` signals an unusable sample
/// or a failed solve; the public entry points translate that to fallback.
fn weibull_mle(failure_hours: &[f64]) -> Option<WeibullFit> {
    let n = failure_hours.len();
    if n < 2 {
        return None;
    }
    if !failure_hours.iter().all(|&t| t.is_finite() && t > 0.0) {
        return None;
    }

    let ln_t: Vec<f64> = failure_hours.iter().map(|t| t.ln()).collect();
    let sum_ln_t: f64 = ln_t.iter().sum();
    let n_f = n as f64;

    // Solve f(beta) = 0 with
    //   f(beta)  = n/beta + sum_ln_t - n * S1/S0
    //   f'(beta) = -n/beta^2 - n * (S2*S0 - S1^2) / S0^2
    // where Sk = sum(t_i^beta * ln(t_i)^k).
    let mut beta = 1.2_f64;
    let mut iterations = 0;

    loop {
        iterations += 1;

        let mut s0 = 0.0_f64;
        let mut s1 = 0.0_f64;
        let mut s2 = 0.0_f64;
        for (t, lt) in failure_hours.iter().zip(&ln_t) {
            let t_beta = t.powf(beta);
            s0 += t_beta;
            s1 += t_beta * lt;
            s2 += t_beta * lt * lt;
        }
        if s0 == 0.0 || !s0.is_finite() {
            return None;
        }

        let f_val = n_f / beta + sum_ln_t - n_f * s1 / s0;
        let f_prime = -n_f / (beta * beta) - n_f * (s2 * s0 - s1 * s1) / (s0 * s0);
        if f_prime.abs() < 1e-30 {
            return None;
        }

        let delta = f_val / f_prime;
        beta -= delta;
        if beta <= 0.0 {
            beta = 0.01;
        }
        if !beta.is_finite() {
            return None;
        }

        if delta.abs() < MLE_TOL {
            break;
        }
        if iterations == MLE_MAX_ITER {
            return None;
        }
    }

    let s0: f64 = failure_hours.iter().map(|t| t.powf(beta)).sum();
    let eta = (s0 / n_f).powf(1.0 / beta);
    if !eta.is_finite() || eta <= 0.0 {
        return None;
    }

    let log_likelihood = n_f * beta.ln() - n_f * beta * eta.ln() + (beta - 1.0) * sum_ln_t
        - failure_hours
            .iter()
            .map(|&t| (t / eta).powf(beta))
            .sum::<f64>();
    if !log_likelihood.is_finite() {
        return None;
    }

    Some(WeibullFit {
        scale: eta,
        shape: beta,
        log_likelihood: Some(log_likelihood),
        iterations,
        fallback: false,
    })
}
