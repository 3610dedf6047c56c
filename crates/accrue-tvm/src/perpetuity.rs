//! Perpetuity valuation.

/// Calculate the present value of a perpetuity.
///
/// A perpetuity is a level payment stream with no end date; its present
/// value is the limit of the annuity factor as the period count grows.
///
/// # Formula
///
/// ```text
/// PV = PMT / r
/// ```
///
/// # Arguments
///
/// * `pmt` - Periodic payment
/// * `r` - Discount rate per period, as a decimal
///
/// # Returns
///
/// Present value of the perpetuity. A zero rate divides by zero and
/// propagates as `inf`/`NaN`.
///
/// # Example
///
/// ```rust
/// use accrue_tvm::perpetuity_present_value;
///
/// let pv = perpetuity_present_value(100.0, 0.05);
/// assert_eq!(pv, 2000.0);
/// ```
pub fn perpetuity_present_value(pmt: f64, r: f64) -> f64 {
    pmt / r
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perpetuity_present_value() {
        assert_relative_eq!(perpetuity_present_value(100.0, 0.05), 2000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_propagates() {
        assert!(perpetuity_present_value(100.0, 0.0).is_infinite());
        assert!(perpetuity_present_value(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_approximates_long_annuity() {
        // A 1,000-period annuity at 8% is within a basis point of the
        // perpetuity value
        let long_annuity = crate::annuity_present_value(80.0, 0.08, 1000.0, false);
        let perpetuity = perpetuity_present_value(80.0, 0.08);
        assert_relative_eq!(long_annuity, perpetuity, epsilon = 1e-4);
    }
}
