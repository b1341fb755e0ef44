//! Thermodynamic temperature.
//!
//! The kelvin is standard. Celsius and Fahrenheit are *affine* scales: converting them applies an offset as well as a
//! factor, so `0 °C` is `273.15 K`.
//!
//! Arithmetic on [`Kelvins`] always works on absolute temperatures. Adding two Celsius readings therefore adds the
//! absolute values, which is rarely what is wanted; take differences instead.
//!
//! ```rust
//! use mensura_core::thermal::{Kelvins, CELSIUS, FAHRENHEIT};
//!
//! let boiling = Kelvins::from_unit(100.0, &CELSIUS).unwrap();
//! assert!((boiling.amount_in(&FAHRENHEIT).unwrap() - 212.0).abs() < 1e-9);
//! ```

use crate::prefix::Prefix;
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for thermodynamic temperature.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Temperature", descriptor = TEMPERATURE, dimension = DimensionVector::TEMPERATURE, unit = "K")]
pub struct Temperature;
/// A temperature in kelvins.
pub type Kelvins = Measure<Temperature>;

/// Kelvin offset of the Celsius zero.
pub const CELSIUS_ZERO: f64 = 273.15;

crate::unit_table! {
    TEMPERATURE_UNITS for TEMPERATURE;
    /// Kelvin (SI base unit).
    KELVIN = standard "K";
    /// Millikelvin.
    MILLIKELVIN = prefix "mK" Prefix::Milli;
    /// Degree Celsius: `K = °C + 273.15`.
    CELSIUS = affine "°C" 1.0, CELSIUS_ZERO;
    /// Degree Fahrenheit: `K = (°F + 459.67) × 5/9`.
    FAHRENHEIT = affine "°F" 5.0 / 9.0, 459.67 * 5.0 / 9.0;
    /// Degree Rankine: `K = °R × 5/9`.
    RANKINE = scale "°R" 5.0 / 9.0;
}
