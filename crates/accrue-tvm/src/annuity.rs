//! Annuity valuation and payment solving.
//!
//! A level payment stream of `n` payments at per-period rate `r`. Every
//! function takes an `annuity_due` flag: `false` values payments at the end
//! of each period (ordinary annuity), `true` at the beginning (annuity due).
//! The due adjustment is the standard one-period shift — multiply the
//! ordinary present/future value by `(1 + r)`, or divide the solved payment
//! by `(1 + r)`.
//!
//! A zero rate makes the annuity factor `0/0` and the result propagates as
//! `NaN`; the straight-line `pmt * n` limit is deliberately not special-cased.

// ============================================================================
// Present / Future Value
// ============================================================================

/// Calculate the present value of an annuity.
///
/// # Formula
///
/// ```text
/// PV = PMT * (1 - (1 + r)^-n) / r          (ordinary)
/// PV = ordinary * (1 + r)                  (annuity due)
/// ```
///
/// # Arguments
///
/// * `pmt` - Periodic payment
/// * `r` - Interest rate per period, as a decimal
/// * `n` - Number of payments
/// * `annuity_due` - `true` for payments at the beginning of each period
///
/// # Example
///
/// ```rust
/// use accrue_tvm::annuity_present_value;
///
/// // Ten $100 payments at 5%
/// let pv = annuity_present_value(100.0, 0.05, 10.0, false);
/// assert!((pv - 772.1734929184818).abs() < 1e-9);
/// ```
pub fn annuity_present_value(pmt: f64, r: f64, n: f64, annuity_due: bool) -> f64 {
    let ordinary = pmt * ((1.0 - (1.0 + r).powf(-n)) / r);
    if annuity_due {
        ordinary * (1.0 + r)
    } else {
        ordinary
    }
}

/// Calculate the future value of an annuity.
///
/// # Formula
///
/// ```text
/// FV = PMT * ((1 + r)^n - 1) / r           (ordinary)
/// FV = ordinary * (1 + r)                  (annuity due)
/// ```
///
/// # Arguments
///
/// * `pmt` - Periodic payment
/// * `r` - Interest rate per period, as a decimal
/// * `n` - Number of payments
/// * `annuity_due` - `true` for payments at the beginning of each period
///
/// # Example
///
/// ```rust
/// use accrue_tvm::annuity_future_value;
///
/// let fv = annuity_future_value(100.0, 0.05, 10.0, false);
/// assert!((fv - 1257.7892535548843).abs() < 1e-9);
/// ```
pub fn annuity_future_value(pmt: f64, r: f64, n: f64, annuity_due: bool) -> f64 {
    let ordinary = pmt * (((1.0 + r).powf(n) - 1.0) / r);
    if annuity_due {
        ordinary * (1.0 + r)
    } else {
        ordinary
    }
}

// ============================================================================
// Payment Solving
// ============================================================================

/// Solve for the periodic payment that amortizes a present value.
///
/// The inverse of [`annuity_present_value`]: the classic loan-payment
/// formula.
///
/// # Formula
///
/// ```text
/// PMT = PV * r / (1 - (1 + r)^-n)          (ordinary)
/// PMT = ordinary / (1 + r)                 (annuity due)
/// ```
///
/// # Arguments
///
/// * `pv` - Present value being amortized
/// * `r` - Interest rate per period, as a decimal
/// * `n` - Number of payments
/// * `annuity_due` - `true` for payments at the beginning of each period
pub fn annuity_payment(pv: f64, r: f64, n: f64, annuity_due: bool) -> f64 {
    let ordinary = pv * (r / (1.0 - (1.0 + r).powf(-n)));
    if annuity_due {
        ordinary / (1.0 + r)
    } else {
        ordinary
    }
}

/// Solve for the periodic payment that accumulates to a future value.
///
/// The inverse of [`annuity_future_value`]: the sinking-fund formula.
///
/// # Formula
///
/// ```text
/// PMT = FV * r / ((1 + r)^n - 1)           (ordinary)
/// PMT = ordinary / (1 + r)                 (annuity due)
/// ```
///
/// # Arguments
///
/// * `fv` - Future value to accumulate
/// * `r` - Interest rate per period, as a decimal
/// * `n` - Number of payments
/// * `annuity_due` - `true` for payments at the beginning of each period
pub fn annuity_payment_from_future_value(fv: f64, r: f64, n: f64, annuity_due: bool) -> f64 {
    let ordinary = fv * r / ((1.0 + r).powf(n) - 1.0);
    if annuity_due {
        ordinary / (1.0 + r)
    } else {
        ordinary
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ordinary_present_value() {
        // Standard table value: 10 periods at 5% -> factor 7.721735
        let pv = annuity_present_value(100.0, 0.05, 10.0, false);
        assert_relative_eq!(pv, 772.1734929184818, epsilon = 1e-9);
    }

    #[test]
    fn test_due_present_value_is_ordinary_shifted() {
        let ordinary = annuity_present_value(100.0, 0.05, 10.0, false);
        let due = annuity_present_value(100.0, 0.05, 10.0, true);
        assert_relative_eq!(due, ordinary * 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_ordinary_future_value() {
        let fv = annuity_future_value(100.0, 0.05, 10.0, false);
        assert_relative_eq!(fv, 1257.7892535548843, epsilon = 1e-9);
    }

    #[test]
    fn test_due_future_value_is_ordinary_shifted() {
        let ordinary = annuity_future_value(100.0, 0.05, 10.0, false);
        let due = annuity_future_value(100.0, 0.05, 10.0, true);
        assert_relative_eq!(due, ordinary * 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_payment_recovers_annuity() {
        let pv = annuity_present_value(100.0, 0.05, 10.0, false);
        let pmt = annuity_payment(pv, 0.05, 10.0, false);
        assert_relative_eq!(pmt, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_payment_recovers_annuity_due() {
        let pv = annuity_present_value(100.0, 0.05, 10.0, true);
        let pmt = annuity_payment(pv, 0.05, 10.0, true);
        assert_relative_eq!(pmt, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sinking_fund_recovers_annuity() {
        let fv = annuity_future_value(250.0, 0.03, 24.0, false);
        let pmt = annuity_payment_from_future_value(fv, 0.03, 24.0, false);
        assert_relative_eq!(pmt, 250.0, epsilon = 1e-9);
    }

    #[test]
    fn test_due_payment_is_ordinary_shifted() {
        let ordinary = annuity_payment(10000.0, 0.04, 30.0, false);
        let due = annuity_payment(10000.0, 0.04, 30.0, true);
        assert_relative_eq!(due, ordinary / 1.04, epsilon = 1e-12);
    }

    #[test]
    fn test_pv_fv_consistency() {
        // Discounting the FV of the stream back over n periods gives its PV
        let fv = annuity_future_value(100.0, 0.05, 10.0, false);
        let pv = annuity_present_value(100.0, 0.05, 10.0, false);
        assert_relative_eq!(fv / 1.05f64.powi(10), pv, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_propagates_nan() {
        // 0/0 annuity factor; the straight-line limit is not special-cased
        assert!(annuity_present_value(100.0, 0.0, 10.0, false).is_nan());
        assert!(annuity_future_value(100.0, 0.0, 10.0, false).is_nan());
        assert!(annuity_payment(100.0, 0.0, 10.0, false).is_nan());
    }

    #[test]
    fn test_rate_of_minus_one_propagates() {
        // (1 + r) = 0: factors degenerate instead of being rejected
        let pv = annuity_present_value(100.0, -1.0, 10.0, false);
        assert!(pv.is_infinite() || pv.is_nan());
    }
}
