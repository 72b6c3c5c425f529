//! Gaussian tail bounds derived from a noise variance.

use std::f64::consts::{FRAC_2_SQRT_PI, PI};

use crate::ALPHA;
use crate::error::NoiseError;

/// Constant of Winitzki's approximation of the inverse error function.
const WINITZKI_A: f64 = 0.147;

/// Halley's method triples the correct digits per step, so the Winitzki
/// guess (about 3 correct digits) converges within a few iterations.
const MAX_HALLEY_ITERATIONS: usize = 6;

/// Probability that a single coefficient exceeds the tail bound,
/// `1 - (1 - alpha)^(1/n)`.
///
/// Computed through `ln_1p`/`exp_m1` so that it keeps full relative precision
/// when `(1 - alpha)^(1/n)` is within a few ulps of one.
pub fn coefficient_failure_complement(n: u32) -> f64 {
    -((-ALPHA).ln_1p() / n as f64).exp_m1()
}

/// Bound exceeded by all `n` coefficients of a zero-mean Gaussian noise with
/// the given variance with probability at most `alpha`:
///
/// ```text
/// sqrt(2 * variance) * erf_inv((1 - alpha)^(1/n))
/// ```
pub fn tail_bound(variance: f64, n: u32) -> Result<f64, NoiseError> {
    if variance.is_infinite() {
        return Err(NoiseError::Overflow("noise variance"));
    }
    if !(variance > 0.0) {
        return Err(NoiseError::NonPositiveVariance(variance));
    }
    if n == 0 {
        return Err(NoiseError::InvalidRingDimension(n));
    }
    let radius = erfc_inv(coefficient_failure_complement(n))?;
    Ok((2.0 * variance).sqrt() * radius)
}

/// Inverse of the error function on `(-1, 1)`.
pub fn erf_inv(x: f64) -> Result<f64, NoiseError> {
    if !(x > -1.0 && x < 1.0) {
        return Err(NoiseError::OutOfDomain {
            function: "erf_inv",
            value: x,
        });
    }
    if x.abs() > 0.5 {
        // 1 - |x| is exact here, and erfc keeps precision in the tail
        return Ok(x.signum() * erfc_inv_upper_half(1.0 - x.abs()));
    }
    let guess = x.signum() * winitzki(((1.0 - x) * (1.0 + x)).ln());
    Ok(halley(guess, |z| libm::erf(z) - x, 1.0))
}

/// Inverse of the complementary error function on `(0, 2)`.
pub fn erfc_inv(y: f64) -> Result<f64, NoiseError> {
    if !(y > 0.0 && y < 2.0) {
        return Err(NoiseError::OutOfDomain {
            function: "erfc_inv",
            value: y,
        });
    }
    if y > 1.0 {
        return Ok(-erfc_inv_upper_half(2.0 - y));
    }
    Ok(erfc_inv_upper_half(y))
}

/// `erfc_inv` for `y` in `(0, 1]`, i.e. non-negative results.
fn erfc_inv_upper_half(y: f64) -> f64 {
    // ln(1 - x^2) with x = 1 - y, without forming x
    let guess = winitzki(y.ln() + (2.0 - y).ln());
    halley(guess, |z| libm::erfc(z) - y, -1.0)
}

/// Winitzki's closed form, given `ln(1 - x^2)`. Returns a non-negative value.
fn winitzki(log_term: f64) -> f64 {
    let term_1 = 2.0 / (PI * WINITZKI_A) + 0.5 * log_term;
    let term_2 = log_term / WINITZKI_A;
    (-term_1 + (term_1 * term_1 - term_2).sqrt()).max(0.0).sqrt()
}

/// Halley iterations for `residual(z) = 0`, where `residual` is `erf` or `erfc`
/// shifted by a constant. Its derivative is `sign * 2/sqrt(pi) * exp(-z^2)`
/// and its second derivative `-2z` times that.
fn halley(mut z: f64, residual: impl Fn(f64) -> f64, sign: f64) -> f64 {
    for _ in 0..MAX_HALLEY_ITERATIONS {
        let derivative = sign * FRAC_2_SQRT_PI * (-z * z).exp();
        let newton = residual(z) / derivative;
        if !newton.is_finite() {
            break;
        }
        let step = newton / (1.0 + z * newton);
        z -= step;
        if step.abs() <= f64::EPSILON * z.abs() {
            break;
        }
    }
    z
}
