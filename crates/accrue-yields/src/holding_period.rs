//! Holding-period return measures.
//!
//! Single-interval realized returns and their annualized form. HPR is quoted
//! on a price-plus-dividends basis, HPY on an investment-plus-income basis;
//! the arithmetic is the same, the naming follows the market convention for
//! each instrument type.

// ============================================================================
// Holding Period Return / Yield
// ============================================================================

/// Calculate the holding period return (HPR) of a stock.
///
/// # Formula
///
/// ```text
/// HPR = (final - initial + dividends) / initial
/// ```
///
/// # Arguments
///
/// * `initial_price` - Purchase price
/// * `final_price` - Sale price at the end of the holding period
/// * `dividends` - Total dividends received during the holding period
///
/// # Example
///
/// ```rust
/// use accrue_yields::holding_period_return;
///
/// let hpr = holding_period_return(100.0, 110.0, 5.0);
/// assert!((hpr - 0.15).abs() < 1e-12);
/// ```
pub fn holding_period_return(initial_price: f64, final_price: f64, dividends: f64) -> f64 {
    (final_price - initial_price + dividends) / initial_price
}

/// Calculate the holding period yield (HPY) of an investment.
///
/// # Formula
///
/// ```text
/// HPY = (final + income - initial) / initial
/// ```
///
/// # Arguments
///
/// * `initial_investment` - Amount invested
/// * `final_investment` - Value at the end of the holding period
/// * `income` - Total income earned during the holding period
pub fn holding_period_yield(initial_investment: f64, final_investment: f64, income: f64) -> f64 {
    (final_investment + income - initial_investment) / initial_investment
}

// ============================================================================
// Effective Annual Yield
// ============================================================================

/// Calculate the effective annual yield (EAY) of a holding period.
///
/// Compounds the holding period yield over a 365-day year.
///
/// # Formula
///
/// ```text
/// EAY = (1 + HPY)^(365 / days) - 1
/// ```
///
/// # Arguments
///
/// * `initial_investment` - Amount invested
/// * `final_investment` - Value at the end of the holding period
/// * `income` - Total income earned during the holding period
/// * `days_to_maturity` - Length of the holding period in days
///
/// # Returns
///
/// Annualized yield. When the holding period loses more than the whole
/// investment the base `1 + HPY` goes negative, and a non-integral exponent
/// then yields `NaN`; zero days divides by zero in the exponent.
///
/// # Example
///
/// ```rust
/// use accrue_yields::effective_annual_yield;
///
/// // 5% earned over half a year compounds to 10.25% annually
/// let eay = effective_annual_yield(1000.0, 1050.0, 0.0, 182.5);
/// assert!((eay - 0.1025).abs() < 1e-9);
/// ```
pub fn effective_annual_yield(
    initial_investment: f64,
    final_investment: f64,
    income: f64,
    days_to_maturity: f64,
) -> f64 {
    let hpy = (final_investment + income - initial_investment) / initial_investment;
    (1.0 + hpy).powf(365.0 / days_to_maturity) - 1.0
}

// ============================================================================
// Tests
// ============================================================================
