//! Time and frequency.
//!
//! The second is standard. Civil units use the conventional mapping `1 d = 86_400 s` (leap seconds ignored) and the
//! year is the Julian year (`365.25 d`).
//!
//! ```rust
//! use mensura_core::time::{Seconds, HOUR, MINUTE};
//!
//! let half_hour = Seconds::from_unit(0.5, &HOUR).unwrap();
//! assert_eq!(half_hour.amount(), 1800.0);
//! assert_eq!(half_hour.amount_in(&MINUTE).unwrap(), 30.0);
//! ```

use crate::prefix::{NamedFactor, Prefix};
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for time.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Time", descriptor = TIME, dimension = DimensionVector::TIME, unit = "s")]
pub struct Time;
/// A duration in seconds.
pub type Seconds = Measure<Time>;

/// Kind marker for frequency.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Frequency", descriptor = FREQUENCY, dimension = DimensionVector::FREQUENCY, unit = "Hz")]
pub struct Frequency;
/// A frequency in hertz.
pub type Hertz = Measure<Frequency>;

crate::unit_table! {
    TIME_UNITS for TIME;
    /// Second (SI base unit).
    SECOND = standard "s";
    /// Millisecond.
    MILLISECOND = prefix "ms" Prefix::Milli;
    /// Microsecond.
    MICROSECOND = prefix "µs" Prefix::Micro;
    /// Nanosecond.
    NANOSECOND = prefix "ns" Prefix::Nano;
    /// Minute (`60 s`).
    MINUTE = scale "min" NamedFactor::SecondsPerMinute.factor();
    /// Hour (`3600 s`).
    HOUR = scale "h" NamedFactor::SecondsPerHour.factor();
    /// Day (`86_400 s`).
    DAY = scale "d" NamedFactor::SecondsPerDay.factor();
    /// Julian year (`365.25 d`).
    YEAR = scale "a" NamedFactor::SecondsPerJulianYear.factor();
}

crate::unit_table! {
    FREQUENCY_UNITS for FREQUENCY;
    /// Hertz.
    HERTZ = standard "Hz";
    /// Kilohertz.
    KILOHERTZ = prefix "kHz" Prefix::Kilo;
    /// Megahertz.
    MEGAHERTZ = prefix "MHz" Prefix::Mega;
    /// Gigahertz.
    GIGAHERTZ = prefix "GHz" Prefix::Giga;
}
