//! Mechanical quantities: velocity, acceleration, force, pressure, energy and power.
//!
//! All standard units are coherent SI units, so the cross-kind operators only multiply or divide standard amounts:
//!
//! ```rust
//! use mensura_core::length::Meters;
//! use mensura_core::mass::Kilograms;
//! use mensura_core::mechanics::{Newtons, MetersPerSecondSquared, Joules};
//!
//! let f: Newtons = Kilograms::new(2.0) * MetersPerSecondSquared::new(9.0);
//! let w: Joules = f * Meters::new(0.5);
//! assert_eq!(w.amount(), 9.0);
//! ```

use crate::prefix::{NamedFactor, Prefix};
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for velocity.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Velocity", descriptor = VELOCITY, dimension = DimensionVector::VELOCITY, unit = "m/s")]
pub struct Velocity;
/// A velocity in metres per second.
pub type MetersPerSecond = Measure<Velocity>;

/// Kind marker for acceleration.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Acceleration", descriptor = ACCELERATION, dimension = DimensionVector::ACCELERATION, unit = "m/s²")]
pub struct Acceleration;
/// An acceleration in metres per second squared.
pub type MetersPerSecondSquared = Measure<Acceleration>;

/// Kind marker for force.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Force", descriptor = FORCE, dimension = DimensionVector::FORCE, unit = "N")]
pub struct Force;
/// A force in newtons.
pub type Newtons = Measure<Force>;

/// Kind marker for pressure.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Pressure", descriptor = PRESSURE, dimension = DimensionVector::PRESSURE, unit = "Pa")]
pub struct Pressure;
/// A pressure in pascals.
pub type Pascals = Measure<Pressure>;

/// Kind marker for energy.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Energy", descriptor = ENERGY, dimension = DimensionVector::ENERGY, unit = "J")]
pub struct Energy;
/// An energy in joules.
pub type Joules = Measure<Energy>;

/// Kind marker for power.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Power", descriptor = POWER, dimension = DimensionVector::POWER, unit = "W")]
pub struct Power;
/// A power in watts.
pub type Watts = Measure<Power>;

crate::unit_table! {
    VELOCITY_UNITS for VELOCITY;
    /// Metre per second.
    METER_PER_SECOND = standard "m/s";
    /// Kilometre per hour.
    KILOMETER_PER_HOUR = scale "km/h" 1_000.0 / NamedFactor::SecondsPerHour.factor();
    /// Foot per second.
    FOOT_PER_SECOND = scale "ft/s" NamedFactor::Foot.factor();
    /// Statute mile per hour.
    MILE_PER_HOUR = scale "mph" NamedFactor::Mile.factor() / NamedFactor::SecondsPerHour.factor();
    /// Knot (nautical mile per hour).
    KNOT = scale "kn" NamedFactor::NauticalMile.factor() / NamedFactor::SecondsPerHour.factor();
}

crate::unit_table! {
    ACCELERATION_UNITS for ACCELERATION;
    /// Metre per second squared.
    METER_PER_SECOND_SQUARED = standard "m/s²";
    /// Standard gravity (`9.80665 m/s²`).
    STANDARD_GRAVITY = scale "gn" NamedFactor::StandardGravity.factor();
    /// Gal (`1 cm/s²`).
    GAL = prefix "Gal" Prefix::Centi;
}

crate::unit_table! {
    FORCE_UNITS for FORCE;
    /// Newton.
    NEWTON = standard "N";
    /// Kilonewton.
    KILONEWTON = prefix "kN" Prefix::Kilo;
    /// Dyne (`1e-5 N`).
    DYNE = scale "dyn" 1e-5;
    /// Pound-force.
    POUND_FORCE = scale "lbf" NamedFactor::Pound.factor() * NamedFactor::StandardGravity.factor();
}

crate::unit_table! {
    PRESSURE_UNITS for PRESSURE;
    /// Pascal.
    PASCAL = standard "Pa";
    /// Kilopascal.
    KILOPASCAL = prefix "kPa" Prefix::Kilo;
    /// Megapascal.
    MEGAPASCAL = prefix "MPa" Prefix::Mega;
    /// Bar (`1e5 Pa`).
    BAR = scale "bar" 1e5;
    /// Standard atmosphere (`101_325 Pa`).
    ATMOSPHERE = scale "atm" NamedFactor::Atmosphere.factor();
    /// Pound-force per square inch.
    PSI = scale "psi" NamedFactor::Pound.factor() * NamedFactor::StandardGravity.factor()
        / (NamedFactor::Inch.factor() * NamedFactor::Inch.factor());
}

crate::unit_table! {
    ENERGY_UNITS for ENERGY;
    /// Joule.
    JOULE = standard "J";
    /// Kilojoule.
    KILOJOULE = prefix "kJ" Prefix::Kilo;
    /// Megajoule.
    MEGAJOULE = prefix "MJ" Prefix::Mega;
    /// Watt-hour (`3600 J`).
    WATT_HOUR = scale "Wh" NamedFactor::SecondsPerHour.factor();
    /// Kilowatt-hour (`3.6 MJ`).
    KILOWATT_HOUR = scale "kWh" 1_000.0 * NamedFactor::SecondsPerHour.factor();
    /// Thermochemical calorie (`4.184 J`).
    CALORIE = scale "cal" NamedFactor::Calorie.factor();
    /// Kilocalorie.
    KILOCALORIE = scale "kcal" 1_000.0 * NamedFactor::Calorie.factor();
    /// Electronvolt.
    ELECTRONVOLT = scale "eV" NamedFactor::ElementaryCharge.factor();
}

crate::unit_table! {
    POWER_UNITS for POWER;
    /// Watt.
    WATT = standard "W";
    /// Milliwatt.
    MILLIWATT = prefix "mW" Prefix::Milli;
    /// Kilowatt.
    KILOWATT = prefix "kW" Prefix::Kilo;
    /// Megawatt.
    MEGAWATT = prefix "MW" Prefix::Mega;
    /// Mechanical horsepower.
    HORSEPOWER = scale "hp" NamedFactor::Horsepower.factor();
}
