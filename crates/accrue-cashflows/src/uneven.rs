//! Discounted and compounded sums of uneven cash-flow sequences.

// ============================================================================
// Net Present Value
// ============================================================================

/// Calculate the net present value of an uneven cash-flow sequence.
///
/// # Formula
///
/// ```text
/// NPV = Σ  cash_flows[n] / (1 + rate)^n     (n = 0, 1, 2, ...)
/// ```
///
/// The slice index is the period: index 0 is an immediate flow and is not
/// discounted.
///
/// # Arguments
///
/// * `rate` - Discount rate per period, as a decimal
/// * `cash_flows` - Ordered cash flows, one per period
///
/// # Returns
///
/// Discounted sum of the flows; `0.0` for an empty slice.
///
/// # Example
///
/// ```rust
/// use accrue_cashflows::npv_uneven_cash_flows;
///
/// // An immediate $100 plus $100 after each of the next two periods
/// let npv = npv_uneven_cash_flows(0.1, &[100.0, 100.0, 100.0]);
/// assert!((npv - 273.5537190).abs() < 1e-6);
/// ```
pub fn npv_uneven_cash_flows(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(n, cf)| cf / (1.0 + rate).powi(n as i32))
        .sum()
}

// ============================================================================
// Future Value
// ============================================================================

/// Calculate the future value of an uneven cash-flow sequence.
///
/// The mirror of [`npv_uneven_cash_flows`]: each flow is compounded forward
/// by its own period index rather than discounted back.
///
/// # Formula
///
/// ```text
/// FV = Σ  cash_flows[n] * (1 + rate)^n      (n = 0, 1, 2, ...)
/// ```
///
/// # Arguments
///
/// * `rate` - Interest rate per period, as a decimal
/// * `cash_flows` - Ordered cash flows, one per period
///
/// # Returns
///
/// Compounded sum of the flows; `0.0` for an empty slice.
pub fn future_value_uneven_cash_flows(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(n, cf)| cf * (1.0 + rate).powi(n as i32))
        .sum()
}

// ============================================================================
// Tests
// ============================================================================
