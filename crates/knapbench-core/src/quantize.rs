//! Fixed-point conversion at two decimal places.
//!
//! Every solver compares weights and values in integer hundredths so that
//! feasibility and optimality tests agree exactly between algorithms.

/// Number of units per whole weight or value.
pub const SCALE: f64 = 100.0;

/// Converts a real amount to integer hundredths, rounding half up.
///
/// Negative and non-finite inputs quantize to zero.
///
/// # Examples
///
/// ```
/// use knapbench_core::quantize;
///
/// assert_eq!(quantize(2.0), 200);
/// assert_eq!(quantize(0.125), 13);
/// assert_eq!(quantize(-1.0), 0);
/// ```
#[inline]
pub fn quantize(amount: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    (amount * SCALE + 0.5).floor() as u64
}

/// Converts a real budget to integer hundredths, rounding down.
///
/// The result never dequantizes above `amount`, so a budget such as 4.996
/// holds 499 units rather than 500. Sums of item units that fit the result
/// therefore fit the real budget too. Negative and non-finite inputs give
/// zero.
///
/// # Examples
///
/// ```
/// use knapbench_core::quantize_down;
///
/// assert_eq!(quantize_down(4.996), 499);
/// assert_eq!(quantize_down(0.29), 29);
/// assert_eq!(quantize_down(-1.0), 0);
/// ```
#[inline]
pub fn quantize_down(amount: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    // products like 0.29 * 100.0 land just under the whole unit
    let units = (amount * SCALE + 1e-9).floor() as u64;
    if units > 0 && dequantize(units) > amount {
        units - 1
    } else {
        units
    }
}

/// Converts integer hundredths back to a real amount.
#[inline]
pub fn dequantize(units: u64) -> f64 {
    units as f64 / SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_whole_numbers() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 100);
        assert_eq!(quantize(1000.0), 100_000);
    }

    #[test]
    fn test_quantize_half_rounds_up() {
        // exactly representable halves at scale 100
        assert_eq!(quantize(0.125), 13);
        assert_eq!(quantize(2.375), 238);
        assert_eq!(quantize(0.625), 63);
    }

    #[test]
    fn test_quantize_is_reproducible() {
        for _ in 0..3 {
            assert_eq!(quantize(12.345), quantize(12.345));
        }
        assert_eq!(quantize(99.99), 9999);
        assert_eq!(quantize(1.01), 101);
    }

    #[test]
    fn test_quantize_rejects_negative_and_nan() {
        assert_eq!(quantize(-0.5), 0);
        assert_eq!(quantize(f64::NAN), 0);
        assert_eq!(quantize(f64::INFINITY), 0);
    }

    #[test]
    fn test_quantize_down_never_exceeds_budget() {
        assert_eq!(quantize_down(4.996), 499);
        assert_eq!(quantize_down(4.999_999), 499);
        assert_eq!(quantize_down(5.0), 500);
        assert_eq!(quantize_down(0.004), 0);
        for amount in [0.29, 1.01, 12.345, 99.99, 4.996, 1234.5678] {
            assert!(dequantize(quantize_down(amount)) <= amount, "{amount}");
        }
    }

    #[test]
    fn test_quantize_down_keeps_grid_values() {
        for units in [0, 1, 29, 101, 9999, 100_000] {
            assert_eq!(quantize_down(dequantize(units)), units);
        }
    }

    #[test]
    fn test_quantize_down_rejects_negative_and_nan() {
        assert_eq!(quantize_down(-0.5), 0);
        assert_eq!(quantize_down(f64::NAN), 0);
        assert_eq!(quantize_down(f64::INFINITY), 0);
    }

    #[test]
    fn test_dequantize() {
        assert!((dequantize(2250) - 22.5).abs() < 1e-12);
        assert_eq!(dequantize(0), 0.0);
    }
}
