//! # Accrue TVM
//!
//! Time-value-of-money conversions for the Accrue financial formula library.
//!
//! This crate provides:
//!
//! - **Lump sums**: present and future value of a single compounded amount
//! - **Annuities**: present value, future value, and payment solving for
//!   level payment streams, in both ordinary and annuity-due timing
//! - **Perpetuities**: present value of a level payment stream with no end
//!
//! ## Design Philosophy
//!
//! Every operation is a pure free function from `f64` inputs to an `f64`
//! output. There is no shared state, no calculator object, and no input
//! validation: a zero rate in an annuity formula, a zero compounding
//! frequency, or a negative base under a fractional exponent propagates as
//! `inf` or `NaN` per IEEE-754 rather than being caught or converted into an
//! error. Callers own their conventions — fractional vs. percentage rates,
//! and consistency between the rate period and the period count.
//!
//! ## Usage
//!
//! ```rust
//! use accrue_tvm::prelude::*;
//!
//! // $1,000 invested for 10 years at 5%
//! let fv = future_value(1000.0, 0.05, 10.0);
//! assert!((fv - 1628.894626777442).abs() < 1e-9);
//!
//! // and back again
//! let pv = present_value(fv, 0.05, 10.0);
//! assert!((pv - 1000.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod annuity;
pub mod compounding;
pub mod perpetuity;

pub use annuity::{
    annuity_future_value, annuity_payment, annuity_payment_from_future_value,
    annuity_present_value,
};
pub use compounding::{
    compounding_future_value, compounding_present_value, future_value, present_value,
};
pub use perpetuity::perpetuity_present_value;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use accrue_tvm::prelude::*;
/// ```
pub mod prelude {
    pub use crate::annuity::{
        annuity_future_value, annuity_payment, annuity_payment_from_future_value,
        annuity_present_value,
    };
    pub use crate::compounding::{
        compounding_future_value, compounding_present_value, future_value, present_value,
    };
    pub use crate::perpetuity::perpetuity_present_value;
}
