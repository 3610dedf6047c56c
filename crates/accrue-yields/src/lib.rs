//! # Accrue Yields
//!
//! Holding-period return and money-market yield conversions for the Accrue
//! financial formula library.
//!
//! This crate provides:
//!
//! - **Holding-period measures**: holding period return (HPR), holding
//!   period yield (HPY), effective annual yield (EAY)
//! - **Money-market conventions**: bank discount yield (BDY, 360-day year
//!   against face value), money market yield (MMY, 360-day year against
//!   cost), bond equivalent yield (BEY)
//! - **Multi-period chaining**: time-weighted rate of return (TWRR)
//!
//! Day counts are taken as `f64` so that a zero `days_to_maturity` divides
//! by zero and propagates as `inf`/`NaN` — this crate, like the rest of
//! Accrue, performs no input validation.
//!
//! ## Usage
//!
//! ```rust
//! use accrue_yields::prelude::*;
//!
//! // Bought at 100, sold at 110, $5 of dividends
//! let hpr = holding_period_return(100.0, 110.0, 5.0);
//! assert!((hpr - 0.15).abs() < 1e-12);
//!
//! // 90-day T-bill bought at 98 against 100 face
//! let bdy = bank_discount_yield(98.0, 100.0, 90.0);
//! assert!((bdy - 0.08).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod holding_period;
pub mod money_market;
pub mod time_weighted;

pub use holding_period::{effective_annual_yield, holding_period_return, holding_period_yield};
pub use money_market::{
    bank_discount_yield, bond_equivalent_yield, money_market_yield, money_market_yield_with_income,
};
pub use time_weighted::time_weighted_rate_of_return;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use accrue_yields::prelude::*;
/// ```
pub mod prelude {
    pub use crate::holding_period::{
        effective_annual_yield, holding_period_return, holding_period_yield,
    };
    pub use crate::money_market::{
        bank_discount_yield, bond_equivalent_yield, money_market_yield,
        money_market_yield_with_income,
    };
    pub use crate::time_weighted::time_weighted_rate_of_return;
}
