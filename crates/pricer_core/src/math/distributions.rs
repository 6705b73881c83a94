//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//! - `norm_inv`: Quantile function Φ⁻¹
//!
//! The CDF and quantile are expressed through the complementary error
//! function and its inverse from `statrs`, which are accurate to near machine
//! precision. The tail is evaluated through `erfc` directly rather than
//! `1 − erf`, so Φ(−8) keeps full relative precision.

use statrs::function::erf::{erfc, erfc_inv};

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Absolute error below 1e-15 on [-8, 8].
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal quantile (inverse CDF).
///
/// Maps a probability `p` to the `z` with Φ(z) = p, so that a uniform draw on
/// (0, 1) becomes a standard normal variate.
///
/// # Mathematical Definition
/// Φ⁻¹(p) = -sqrt(2) * erfc⁻¹(2p)
///
/// # Edge Cases
/// - `p = 0` returns `-inf`, `p = 1` returns `+inf`
/// - `p` outside [0, 1] or NaN returns NaN
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_inv;
///
/// assert!(norm_inv(0.5).abs() < 1e-15);
/// assert!((norm_inv(0.975) - 1.959_963_984_540_054).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_inv(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    -SQRT_2 * erfc_inv(2.0 * p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values to 16 significant digits
        let cases = [
            (-8.0, 6.220_960_574_271_785e-16),
            (-5.0, 2.866_515_718_791_939e-7),
            (-3.0, 1.349_898_031_630_094_5e-3),
            (-2.0, 0.022_750_131_948_179_195),
            (-1.0, 0.158_655_253_931_457_07),
            (0.5, 0.691_462_461_274_013_1),
            (1.0, 0.841_344_746_068_542_9),
            (2.0, 0.977_249_868_051_820_8),
            (3.0, 0.998_650_101_968_369_9),
            (8.0, 0.999_999_999_999_999_4),
        ];
        for (x, expected) in cases {
            assert_abs_diff_eq!(norm_cdf(x), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for i in -80..=80 {
            let x = i as f64 * 0.1;
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for i in -200..=200 {
            let x = i as f64 * 0.1;
            let p = norm_cdf(x);
            assert!((0.0..=1.0).contains(&p), "CDF out of [0, 1] at x = {}", x);
        }
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_abs_diff_eq!(norm_pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_pdf(-1.0), norm_pdf(1.0), epsilon = 1e-16);
    }

    // ==========================================================
    // norm_inv tests
    // ==========================================================

    #[test]
    fn test_norm_inv_reference_values() {
        assert_abs_diff_eq!(norm_inv(0.5), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_inv(0.975), 1.959_963_984_540_054, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_inv(0.025), -1.959_963_984_540_054, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_inv(0.841_344_746_068_542_9), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_inv_roundtrip_with_cdf() {
        for i in 1..1000 {
            let p = i as f64 / 1000.0;
            assert_abs_diff_eq!(norm_cdf(norm_inv(p)), p, epsilon = 1e-13);
        }
    }

    #[test]
    fn test_norm_inv_deep_tails_are_finite() {
        let lo = norm_inv(1e-100);
        let hi = norm_inv(1.0 - f64::EPSILON / 2.0);
        assert!(lo.is_finite() && lo < -20.0);
        assert!(hi.is_finite() && hi > 8.0);
    }

    #[test]
    fn test_norm_inv_edges() {
        assert_eq!(norm_inv(0.0), f64::NEG_INFINITY);
        assert_eq!(norm_inv(1.0), f64::INFINITY);
        assert!(norm_inv(-0.1).is_nan());
        assert!(norm_inv(1.1).is_nan());
        assert!(norm_inv(f64::NAN).is_nan());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_quantile_inverts_cdf(x in -8.0_f64..6.0) {
                let p = norm_cdf(x);
                let back = norm_inv(p);
                // Conditioning degrades as φ(x) shrinks in the tails
                let tolerance = 1e-12 / norm_pdf(x).max(1e-6);
                prop_assert!((back - x).abs() < tolerance.max(1e-9),
                    "x = {}, Φ⁻¹(Φ(x)) = {}", x, back);
            }
        }
    }
}
