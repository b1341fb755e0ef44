//! Prefix and named-factor tables.
//!
//! Both tables are closed enums: an unknown name is rejected with [`Error::UnknownPrefix`] when a unit is built, never
//! during a conversion.
//!
//! ```rust
//! use mensura_core::prefix::{factor_for, Prefix};
//!
//! assert_eq!(Prefix::Centi.factor(), 1e-2);
//! assert_eq!(factor_for("kilo").unwrap(), 1e3);
//! assert_eq!(factor_for("minute").unwrap(), 60.0);
//! assert!(factor_for("kibi").is_err());
//! ```

use crate::error::{Error, Result};
use core::str::FromStr;

/// SI decimal prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// 10⁻²⁴
    Yocto,
    /// 10⁻²¹
    Zepto,
    /// 10⁻¹⁸
    Atto,
    /// 10⁻¹⁵
    Femto,
    /// 10⁻¹²
    Pico,
    /// 10⁻⁹
    Nano,
    /// 10⁻⁶
    Micro,
    /// 10⁻³
    Milli,
    /// 10⁻²
    Centi,
    /// 10⁻¹
    Deci,
    /// 10¹
    Deca,
    /// 10²
    Hecto,
    /// 10³
    Kilo,
    /// 10⁶
    Mega,
    /// 10⁹
    Giga,
    /// 10¹²
    Tera,
    /// 10¹⁵
    Peta,
    /// 10¹⁸
    Exa,
    /// 10²¹
    Zetta,
    /// 10²⁴
    Yotta,
}

impl Prefix {
    /// Every prefix, smallest first.
    pub const ALL: [Prefix; 20] = [
        Prefix::Yocto,
        Prefix::Zepto,
        Prefix::Atto,
        Prefix::Femto,
        Prefix::Pico,
        Prefix::Nano,
        Prefix::Micro,
        Prefix::Milli,
        Prefix::Centi,
        Prefix::Deci,
        Prefix::Deca,
        Prefix::Hecto,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Tera,
        Prefix::Peta,
        Prefix::Exa,
        Prefix::Zetta,
        Prefix::Yotta,
    ];

    /// Multiplier relative to the unprefixed unit.
    pub const fn factor(self) -> f64 {
        match self {
            Prefix::Yocto => 1e-24,
            Prefix::Zepto => 1e-21,
            Prefix::Atto => 1e-18,
            Prefix::Femto => 1e-15,
            Prefix::Pico => 1e-12,
            Prefix::Nano => 1e-9,
            Prefix::Micro => 1e-6,
            Prefix::Milli => 1e-3,
            Prefix::Centi => 1e-2,
            Prefix::Deci => 1e-1,
            Prefix::Deca => 1e1,
            Prefix::Hecto => 1e2,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
            Prefix::Tera => 1e12,
            Prefix::Peta => 1e15,
            Prefix::Exa => 1e18,
            Prefix::Zetta => 1e21,
            Prefix::Yotta => 1e24,
        }
    }

    /// Symbol prepended to a unit symbol (`k` in `km`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Prefix::Yocto => "y",
            Prefix::Zepto => "z",
            Prefix::Atto => "a",
            Prefix::Femto => "f",
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "µ",
            Prefix::Milli => "m",
            Prefix::Centi => "c",
            Prefix::Deci => "d",
            Prefix::Deca => "da",
            Prefix::Hecto => "h",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
            Prefix::Exa => "E",
            Prefix::Zetta => "Z",
            Prefix::Yotta => "Y",
        }
    }

    /// Lower-case English name.
    pub const fn name(self) -> &'static str {
        match self {
            Prefix::Yocto => "yocto",
            Prefix::Zepto => "zepto",
            Prefix::Atto => "atto",
            Prefix::Femto => "femto",
            Prefix::Pico => "pico",
            Prefix::Nano => "nano",
            Prefix::Micro => "micro",
            Prefix::Milli => "milli",
            Prefix::Centi => "centi",
            Prefix::Deci => "deci",
            Prefix::Deca => "deca",
            Prefix::Hecto => "hecto",
            Prefix::Kilo => "kilo",
            Prefix::Mega => "mega",
            Prefix::Giga => "giga",
            Prefix::Tera => "tera",
            Prefix::Peta => "peta",
            Prefix::Exa => "exa",
            Prefix::Zetta => "zetta",
            Prefix::Yotta => "yotta",
        }
    }
}

/// Parses a prefix from its name (case-insensitive) or its exact symbol. `u` is accepted for micro.
impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "u" {
            return Ok(Prefix::Micro);
        }
        Prefix::ALL
            .iter()
            .copied()
            .find(|p| p.symbol() == s || p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPrefix(s.to_string()))
    }
}

/// Non-decimal factors used by specific built-in units, expressed in the coherent SI unit of their kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedFactor {
    /// 60 s
    SecondsPerMinute,
    /// 3600 s
    SecondsPerHour,
    /// 86 400 s
    SecondsPerDay,
    /// 365.25 d
    SecondsPerJulianYear,
    /// 0.0254 m (international inch)
    Inch,
    /// 0.3048 m
    Foot,
    /// 0.9144 m
    Yard,
    /// 1609.344 m (statute mile)
    Mile,
    /// 1852 m
    NauticalMile,
    /// 0.453 592 37 kg (avoirdupois pound)
    Pound,
    /// 1.602 176 634 × 10⁻¹⁹ C
    ElementaryCharge,
    /// 4.184 J (thermochemical calorie)
    Calorie,
    /// π / 180 rad
    Degree,
    /// 101 325 Pa
    Atmosphere,
    /// 9.806 65 m·s⁻²
    StandardGravity,
    /// 745.699 871 582 270 2 W (mechanical horsepower)
    Horsepower,
}

impl NamedFactor {
    /// Every named factor.
    pub const ALL: [NamedFactor; 16] = [
        NamedFactor::SecondsPerMinute,
        NamedFactor::SecondsPerHour,
        NamedFactor::SecondsPerDay,
        NamedFactor::SecondsPerJulianYear,
        NamedFactor::Inch,
        NamedFactor::Foot,
        NamedFactor::Yard,
        NamedFactor::Mile,
        NamedFactor::NauticalMile,
        NamedFactor::Pound,
        NamedFactor::ElementaryCharge,
        NamedFactor::Calorie,
        NamedFactor::Degree,
        NamedFactor::Atmosphere,
        NamedFactor::StandardGravity,
        NamedFactor::Horsepower,
    ];

    /// Value of the factor.
    pub const fn factor(self) -> f64 {
        match self {
            NamedFactor::SecondsPerMinute => 60.0,
            NamedFactor::SecondsPerHour => 3_600.0,
            NamedFactor::SecondsPerDay => 86_400.0,
            NamedFactor::SecondsPerJulianYear => 31_557_600.0,
            NamedFactor::Inch => 0.0254,
            NamedFactor::Foot => 0.3048,
            NamedFactor::Yard => 0.9144,
            NamedFactor::Mile => 1_609.344,
            NamedFactor::NauticalMile => 1_852.0,
            NamedFactor::Pound => 0.453_592_37,
            NamedFactor::ElementaryCharge => 1.602_176_634e-19,
            NamedFactor::Calorie => 4.184,
            NamedFactor::Degree => 0.017_453_292_519_943_295,
            NamedFactor::Atmosphere => 101_325.0,
            NamedFactor::StandardGravity => 9.806_65,
            NamedFactor::Horsepower => 745.699_871_582_270_2,
        }
    }

    /// Snake-case name, as used by the unit catalog.
    pub const fn name(self) -> &'static str {
        match self {
            NamedFactor::SecondsPerMinute => "minute",
            NamedFactor::SecondsPerHour => "hour",
            NamedFactor::SecondsPerDay => "day",
            NamedFactor::SecondsPerJulianYear => "julian_year",
            NamedFactor::Inch => "inch",
            NamedFactor::Foot => "foot",
            NamedFactor::Yard => "yard",
            NamedFactor::Mile => "mile",
            NamedFactor::NauticalMile => "nautical_mile",
            NamedFactor::Pound => "pound",
            NamedFactor::ElementaryCharge => "elementary_charge",
            NamedFactor::Calorie => "calorie",
            NamedFactor::Degree => "degree",
            NamedFactor::Atmosphere => "atmosphere",
            NamedFactor::StandardGravity => "standard_gravity",
            NamedFactor::Horsepower => "horsepower",
        }
    }
}

impl FromStr for NamedFactor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NamedFactor::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPrefix(s.to_string()))
    }
}

/// Resolves a prefix (name or symbol) or a named factor to its multiplier.
///
/// Prefixes take precedence, so `"m"` is milli, not a factor.
pub fn factor_for(name: &str) -> Result<f64> {
    if let Ok(prefix) = name.parse::<Prefix>() {
        return Ok(prefix.factor());
    }
    name.parse::<NamedFactor>()
        .map(NamedFactor::factor)
        .map_err(|_| Error::UnknownPrefix(name.to_string()))
}
