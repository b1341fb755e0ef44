//! Absorbed dose and absorbed dose rate.
//!
//! The gray is one joule of energy absorbed per kilogram of matter. The legacy `rad` dose unit is registered under the
//! symbol `rd` because `rad` is the radian.
//!
//! ```rust
//! use mensura_core::mass::Kilograms;
//! use mensura_core::mechanics::Joules;
//! use mensura_core::radiation::Grays;
//!
//! let dose: Grays = Joules::new(100.0) / Kilograms::new(2.0);
//! assert_eq!(dose.amount(), 50.0);
//! ```

use crate::prefix::{NamedFactor, Prefix};
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for absorbed dose.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "AbsorbedDose", descriptor = ABSORBED_DOSE, dimension = DimensionVector::ABSORBED_DOSE, unit = "Gy")]
pub struct AbsorbedDose;
/// An absorbed dose in grays.
pub type Grays = Measure<AbsorbedDose>;

/// Kind marker for absorbed dose rate.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(
    name = "AbsorbedDoseRate",
    descriptor = ABSORBED_DOSE_RATE,
    dimension = DimensionVector::ABSORBED_DOSE_RATE,
    unit = "Gy/s"
)]
pub struct AbsorbedDoseRate;
/// An absorbed dose rate in grays per second.
pub type GraysPerSecond = Measure<AbsorbedDoseRate>;

crate::unit_table! {
    ABSORBED_DOSE_UNITS for ABSORBED_DOSE;
    /// Gray (`1 J/kg`).
    GRAY = standard "Gy";
    /// Milligray.
    MILLIGRAY = prefix "mGy" Prefix::Milli;
    /// Microgray.
    MICROGRAY = prefix "µGy" Prefix::Micro;
    /// Rad (`0.01 Gy`).
    RAD_DOSE = prefix "rd" Prefix::Centi;
}

crate::unit_table! {
    ABSORBED_DOSE_RATE_UNITS for ABSORBED_DOSE_RATE;
    /// Gray per second.
    GRAY_PER_SECOND = standard "Gy/s";
    /// Gray per hour.
    GRAY_PER_HOUR = scale "Gy/h" 1.0 / NamedFactor::SecondsPerHour.factor();
    /// Milligray per hour.
    MILLIGRAY_PER_HOUR = scale "mGy/h" 1e-3 / NamedFactor::SecondsPerHour.factor();
    /// Microgray per hour.
    MICROGRAY_PER_HOUR = scale "µGy/h" 1e-6 / NamedFactor::SecondsPerHour.factor();
}
