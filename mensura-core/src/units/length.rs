//! Length, area and volume.
//!
//! The standard units are the metre, the square metre and the cubic metre. Other units are expressed as exact or
//! best-available ratios to them; imperial units follow the international definitions (the inch is exactly
//! `0.0254 m`).
//!
//! ```rust
//! use mensura_core::length::{Meters, KILOMETER, MILE};
//!
//! let d = Meters::from_unit(1.0, &MILE).unwrap();
//! assert!((d.amount_in(&KILOMETER).unwrap() - 1.609344).abs() < 1e-12);
//! ```

use crate::prefix::{NamedFactor, Prefix};
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for length.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Length", descriptor = LENGTH, dimension = DimensionVector::LENGTH, unit = "m")]
pub struct Length;
/// A length in metres.
pub type Meters = Measure<Length>;

/// Kind marker for area.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Area", descriptor = AREA, dimension = DimensionVector::AREA, unit = "m²")]
pub struct Area;
/// An area in square metres.
pub type SquareMeters = Measure<Area>;

/// Kind marker for volume.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Volume", descriptor = VOLUME, dimension = DimensionVector::VOLUME, unit = "m³")]
pub struct Volume;
/// A volume in cubic metres.
pub type CubicMeters = Measure<Volume>;

// ─────────────────────────────────────────────────────────────────────────────
// Length units
// ─────────────────────────────────────────────────────────────────────────────

crate::unit_table! {
    LENGTH_UNITS for LENGTH;
    /// Metre (SI base unit).
    METER = standard "m";
    /// Kilometre.
    KILOMETER = prefix "km" Prefix::Kilo;
    /// Centimetre.
    CENTIMETER = prefix "cm" Prefix::Centi;
    /// Millimetre.
    MILLIMETER = prefix "mm" Prefix::Milli;
    /// Micrometre.
    MICROMETER = prefix "µm" Prefix::Micro;
    /// Nanometre.
    NANOMETER = prefix "nm" Prefix::Nano;
    /// International inch (`0.0254 m`).
    INCH = scale "in" NamedFactor::Inch.factor();
    /// International foot (`0.3048 m`).
    FOOT = scale "ft" NamedFactor::Foot.factor();
    /// International yard (`0.9144 m`).
    YARD = scale "yd" NamedFactor::Yard.factor();
    /// Statute mile (`1609.344 m`).
    MILE = scale "mi" NamedFactor::Mile.factor();
    /// Nautical mile (`1852 m`).
    NAUTICAL_MILE = scale "nmi" NamedFactor::NauticalMile.factor();
}

// ─────────────────────────────────────────────────────────────────────────────
// Area units
// ─────────────────────────────────────────────────────────────────────────────

crate::unit_table! {
    AREA_UNITS for AREA;
    /// Square metre.
    SQUARE_METER = standard "m²";
    /// Square kilometre.
    SQUARE_KILOMETER = scale "km²" 1e6;
    /// Square centimetre.
    SQUARE_CENTIMETER = scale "cm²" 1e-4;
    /// Hectare (`10_000 m²`).
    HECTARE = scale "ha" 1e4;
    /// International acre (`4046.8564224 m²`).
    ACRE = scale "acre" 4_046.856_422_4;
    /// Square foot.
    SQUARE_FOOT = scale "ft²" NamedFactor::Foot.factor() * NamedFactor::Foot.factor();
}

// ─────────────────────────────────────────────────────────────────────────────
// Volume units
// ─────────────────────────────────────────────────────────────────────────────

crate::unit_table! {
    VOLUME_UNITS for VOLUME;
    /// Cubic metre.
    CUBIC_METER = standard "m³";
    /// Litre (`1e-3 m³`).
    LITER = prefix "L" Prefix::Milli;
    /// Millilitre (`1e-6 m³`).
    MILLILITER = prefix "mL" Prefix::Micro;
    /// Cubic centimetre (`1e-6 m³`).
    CUBIC_CENTIMETER = scale "cm³" 1e-6;
    /// US liquid gallon (`3.785411784 L`).
    US_GALLON = scale "gal" 3.785_411_784e-3;
}
