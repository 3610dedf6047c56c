//! Money-market yield conventions.
//!
//! Annualization conventions for short-dated discount instruments. BDY and
//! MMY both use a 360-day year; they differ in the denominator (face value
//! vs. cost). BEY restates a rate on the semi-annual compounding basis used
//! to quote coupon bonds.

// ============================================================================
// Bank Discount Yield
// ============================================================================

/// Calculate the bank discount yield (BDY) of a discount instrument.
///
/// The T-bill quoting convention: the discount from face, annualized over a
/// 360-day year against the **face value**.
///
/// # Formula
///
/// ```text
/// BDY = (face - cost) / face * (360 / days)
/// ```
///
/// # Arguments
///
/// * `cost` - Purchase price
/// * `face_value` - Amount paid at maturity
/// * `days_to_maturity` - Days from purchase to maturity
///
/// # Example
///
/// ```rust
/// use accrue_yields::bank_discount_yield;
///
/// // 90-day bill at 98 against 100 face: 2% discount x 4 = 8%
/// let bdy = bank_discount_yield(98.0, 100.0, 90.0);
/// assert!((bdy - 0.08).abs() < 1e-12);
/// ```
pub fn bank_discount_yield(cost: f64, face_value: f64, days_to_maturity: f64) -> f64 {
    ((face_value - cost) / face_value) * (360.0 / days_to_maturity)
}

// ============================================================================
// Money Market Yield
// ============================================================================

/// Calculate the money market yield (MMY) of an investment.
///
/// Simple-interest annualization of the holding period yield over a 360-day
/// year, denominated in the amount invested. For an instrument with interim
/// income use [`money_market_yield_with_income`].
///
/// # Formula
///
/// ```text
/// MMY = (final - initial) / initial * (360 / days)
/// ```
///
/// # Arguments
///
/// * `initial_investment` - Amount invested
/// * `final_investment` - Value at maturity
/// * `days_to_maturity` - Length of the holding period in days
pub fn money_market_yield(
    initial_investment: f64,
    final_investment: f64,
    days_to_maturity: f64,
) -> f64 {
    money_market_yield_with_income(initial_investment, final_investment, days_to_maturity, 0.0)
}

/// Calculate the money market yield including interim income.
///
/// Same as [`money_market_yield`] with `income` added to the terminal value.
///
/// # Formula
///
/// ```text
/// MMY = (final + income - initial) / initial * (360 / days)
/// ```
pub fn money_market_yield_with_income(
    initial_investment: f64,
    final_investment: f64,
    days_to_maturity: f64,
    income: f64,
) -> f64 {
    (final_investment + income - initial_investment) / initial_investment
        * (360.0 / days_to_maturity)
}

// ============================================================================
// Bond Equivalent Yield
// ============================================================================

/// Convert a rate to its bond equivalent yield (BEY).
///
/// Restates a rate compounded `compounding_frequency` times per year on the
/// semi-annual basis used to quote coupon bonds: the rate is compounded over
/// half a year, then doubled.
///
/// # Formula
///
/// ```text
/// BEY = ((1 + rate)^(freq / 2) - 1) * 2
/// ```
///
/// # Arguments
///
/// * `rate_given` - Rate per compounding interval, as a decimal
/// * `compounding_frequency` - Compounding intervals per year
///
/// # Example
///
/// ```rust
/// use accrue_yields::bond_equivalent_yield;
///
/// // A semi-annual 5% doubles to a 10% BEY
/// let bey = bond_equivalent_yield(0.05, 2.0);
/// assert!((bey - 0.10).abs() < 1e-12);
/// ```
pub fn bond_equivalent_yield(rate_given: f64, compounding_frequency: f64) -> f64 {
    ((1.0 + rate_given).powf(compounding_frequency / 2.0) - 1.0) * 2.0
}

// ============================================================================
// Tests
// ============================================================================
