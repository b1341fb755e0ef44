//! Mass and density.
//!
//! The standard mass unit is the **kilogram**, so that products and quotients of standard amounts stay coherent
//! (`1 N = 1 kg·m·s⁻²`). Gram-based units are therefore scaled relative to `kg`.

use crate::prefix::NamedFactor;
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for mass.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Mass", descriptor = MASS, dimension = DimensionVector::MASS, unit = "kg")]
pub struct Mass;
/// A mass in kilograms.
pub type Kilograms = Measure<Mass>;

/// Kind marker for mass density.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Density", descriptor = DENSITY, dimension = DimensionVector::DENSITY, unit = "kg/m³")]
pub struct Density;
/// A density in kilograms per cubic metre.
pub type KilogramsPerCubicMeter = Measure<Density>;

crate::unit_table! {
    MASS_UNITS for MASS;
    /// Kilogram (SI base unit).
    KILOGRAM = standard "kg";
    /// Gram.
    GRAM = scale "g" 1e-3;
    /// Milligram.
    MILLIGRAM = scale "mg" 1e-6;
    /// Microgram.
    MICROGRAM = scale "µg" 1e-9;
    /// Tonne (`1000 kg`).
    TONNE = scale "t" 1e3;
    /// Avoirdupois pound (`0.45359237 kg`).
    POUND = scale "lb" NamedFactor::Pound.factor();
    /// Avoirdupois ounce (`1/16 lb`).
    OUNCE = scale "oz" NamedFactor::Pound.factor() / 16.0;
}

crate::unit_table! {
    DENSITY_UNITS for DENSITY;
    /// Kilogram per cubic metre.
    KILOGRAM_PER_CUBIC_METER = standard "kg/m³";
    /// Gram per cubic centimetre (`1000 kg/m³`).
    GRAM_PER_CUBIC_CENTIMETER = scale "g/cm³" 1e3;
    /// Gram per litre (`1 kg/m³`).
    GRAM_PER_LITER = scale "g/L" 1.0;
}
