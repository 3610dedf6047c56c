//! # Accrue Cashflows
//!
//! Uneven cash-flow aggregation for the Accrue financial formula library.
//!
//! This crate provides:
//!
//! - **NPV**: the discounted sum of an ordered cash-flow sequence
//! - **Future value**: the compounded sum of an ordered cash-flow sequence
//!
//! Cash flows are plain `&[f64]` slices. Position is meaning: index 0 is the
//! period-0 (immediate) flow, index `k` the period-`k` flow, and the slice
//! index is the exponent applied when discounting or compounding. An empty
//! slice aggregates to zero.
//!
//! As everywhere in Accrue, nothing is validated; a rate of -1 zeroes the
//! growth factor and whatever IEEE-754 yields flows through to the result.
//!
//! ## Usage
//!
//! ```rust
//! use accrue_cashflows::npv_uneven_cash_flows;
//!
//! let npv = npv_uneven_cash_flows(0.1, &[100.0, 100.0, 100.0]);
//! assert!((npv - 273.55371900826447).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod uneven;

pub use uneven::{future_value_uneven_cash_flows, npv_uneven_cash_flows};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::uneven::{future_value_uneven_cash_flows, npv_uneven_cash_flows};
}
