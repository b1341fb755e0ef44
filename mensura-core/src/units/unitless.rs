//! Dimensionless numbers.
//!
//! [`Number`](crate::Number) is what dividing two measures of the same kind produces. Its standard unit has an empty
//! symbol, so a number displays as a bare amount.
//!
//! ```rust
//! use mensura_core::length::Meters;
//! use mensura_core::unitless::PERCENT;
//!
//! let ratio = Meters::new(1.0) / Meters::new(4.0);
//! assert_eq!(ratio.amount_in(&PERCENT).unwrap(), 25.0);
//! ```

use crate::prefix::Prefix;
use crate::DimensionVector;
use mensura_derive::Kind;

/// Kind marker for plain numbers.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Number", descriptor = NUMBER, dimension = DimensionVector::DIMENSIONLESS, unit = "")]
pub struct Dimensionless;

crate::unit_table! {
    NUMBER_UNITS for NUMBER;
    /// The number one.
    ONE = standard "";
    /// Percent (`1e-2`).
    PERCENT = prefix "%" Prefix::Centi;
    /// Per mille (`1e-3`).
    PER_MILLE = prefix "‰" Prefix::Milli;
    /// Parts per million (`1e-6`).
    PPM = prefix "ppm" Prefix::Micro;
}
