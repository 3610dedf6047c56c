//! Lump-sum compounding and discounting.
//!
//! Converts a single amount between its present and future value under
//! periodic compound interest. The `compounding_frequency` argument follows
//! the usual convention: 1 = annual, 2 = semi-annual, 12 = monthly, with the
//! rate divided by the frequency before compounding.

// ============================================================================
// Present Value
// ============================================================================

/// Calculate the present value of a single compounded amount.
///
/// # Formula
///
/// ```text
/// PV = FV / (1 + r / freq)^n
/// ```
///
/// # Arguments
///
/// * `fv` - Future value of the investment
/// * `r` - Interest rate per period, as a decimal (e.g. 0.05 for 5%)
/// * `n` - Number of compounding periods
/// * `compounding_frequency` - Compounding intervals per period (1 = annual)
/// * `payment_at_beginning` - Accepted for signature compatibility with the
///   annuity functions, but has **no effect**: a lump-sum discount factor
///   does not depend on payment timing
///
/// # Returns
///
/// Present value of the investment. A zero `compounding_frequency` divides
/// the rate by zero and the result propagates as `inf`/`NaN`.
///
/// # Example
///
/// ```rust
/// use accrue_tvm::compounding_present_value;
///
/// // $1,210 due in two years, discounted at 10% annually
/// let pv = compounding_present_value(1210.0, 0.10, 2.0, 1.0, false);
/// assert!((pv - 1000.0).abs() < 1e-9);
/// ```
pub fn compounding_present_value(
    fv: f64,
    r: f64,
    n: f64,
    compounding_frequency: f64,
    payment_at_beginning: bool,
) -> f64 {
    let _ = payment_at_beginning;
    fv / (1.0 + r / compounding_frequency).powf(n)
}

/// Calculate present value with annual compounding and end-of-period timing.
///
/// Shorthand for [`compounding_present_value`] with the default conventions.
pub fn present_value(fv: f64, r: f64, n: f64) -> f64 {
    compounding_present_value(fv, r, n, 1.0, false)
}

// ============================================================================
// Future Value
// ============================================================================

/// Calculate the future value of a single compounded amount.
///
/// # Formula
///
/// ```text
/// FV = PV * (1 + r / freq)^n
/// ```
///
/// # Arguments
///
/// * `pv` - Present value of the investment
/// * `r` - Interest rate per period, as a decimal
/// * `n` - Number of compounding periods
/// * `compounding_frequency` - Compounding intervals per period (1 = annual)
/// * `payment_at_beginning` - Accepted for signature compatibility; has no
///   effect on the result (see [`compounding_present_value`])
///
/// # Example
///
/// ```rust
/// use accrue_tvm::compounding_future_value;
///
/// // $1,000 at a 12% annual rate, compounded monthly for 12 months
/// let fv = compounding_future_value(1000.0, 0.12, 12.0, 12.0, false);
/// assert!((fv - 1126.8250301319698).abs() < 1e-9);
/// ```
pub fn compounding_future_value(
    pv: f64,
    r: f64,
    n: f64,
    compounding_frequency: f64,
    payment_at_beginning: bool,
) -> f64 {
    let _ = payment_at_beginning;
    pv * (1.0 + r / compounding_frequency).powf(n)
}

/// Calculate future value with annual compounding and end-of-period timing.
///
/// Shorthand for [`compounding_future_value`] with the default conventions.
pub fn future_value(pv: f64, r: f64, n: f64) -> f64 {
    compounding_future_value(pv, r, n, 1.0, false)
}

// ============================================================================
// Tests
// ============================================================================
