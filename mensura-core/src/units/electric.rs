//! Electric current and electric charge.

use crate::prefix::{NamedFactor, Prefix};
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for electric current.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "ElectricCurrent", descriptor = ELECTRIC_CURRENT, dimension = DimensionVector::CURRENT, unit = "A")]
pub struct ElectricCurrent;
/// A current in amperes.
pub type Amperes = Measure<ElectricCurrent>;

/// Kind marker for electric charge.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "ElectricCharge", descriptor = ELECTRIC_CHARGE, dimension = DimensionVector::CHARGE, unit = "C")]
pub struct ElectricCharge;
/// A charge in coulombs.
pub type Coulombs = Measure<ElectricCharge>;

crate::unit_table! {
    ELECTRIC_CURRENT_UNITS for ELECTRIC_CURRENT;
    /// Ampere (SI base unit).
    AMPERE = standard "A";
    /// Kiloampere.
    KILOAMPERE = prefix "kA" Prefix::Kilo;
    /// Milliampere.
    MILLIAMPERE = prefix "mA" Prefix::Milli;
    /// Microampere.
    MICROAMPERE = prefix "µA" Prefix::Micro;
}

crate::unit_table! {
    ELECTRIC_CHARGE_UNITS for ELECTRIC_CHARGE;
    /// Coulomb.
    COULOMB = standard "C";
    /// Millicoulomb.
    MILLICOULOMB = prefix "mC" Prefix::Milli;
    /// Ampere-hour (`3600 C`).
    AMPERE_HOUR = scale "Ah" NamedFactor::SecondsPerHour.factor();
    /// Milliampere-hour (`3.6 C`).
    MILLIAMPERE_HOUR = scale "mAh" 1e-3 * NamedFactor::SecondsPerHour.factor();
    /// Elementary charge.
    ELEMENTARY_CHARGE = scale "e" NamedFactor::ElementaryCharge.factor();
}
