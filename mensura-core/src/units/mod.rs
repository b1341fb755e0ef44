//! Predefined quantity kinds and their units, grouped by domain.
//!
//! Every module declares its kind marker types with `#[derive(Kind)]`, the matching descriptor `static`s, a
//! `Measure` alias in the standard unit and a table of `static` [`UnitDef`]s.
//!
//! ## Modules
//!
//! - [`unitless`]: plain numbers, percent, ppm.
//! - [`length`]: length, area and volume (metre is standard).
//! - [`mass`]: mass (kilogram is standard) and density.
//! - [`time`]: time (second) and frequency (hertz).
//! - [`mechanics`]: velocity, acceleration, force, pressure, energy, power.
//! - [`radiation`]: absorbed dose (gray) and absorbed dose rate.
//! - [`electric`]: electric current (ampere) and charge (coulomb).
//! - [`thermal`]: thermodynamic temperature, with affine Celsius and Fahrenheit scales.
//! - [`substance`]: amount of substance (mole).
//! - [`photometry`]: luminous intensity (candela).
//! - [`angular`]: plane angle, solid angle, angular velocity, plus wrapping and trig helpers.

use crate::kind::QuantityKind;
use crate::unit::UnitDef;

pub mod angular;
pub mod electric;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod photometry;
pub mod radiation;
pub mod substance;
pub mod thermal;
pub mod time;
pub mod unitless;

/// Every built-in kind, in registration order.
///
/// The order matters for [`Registry::kind_for`](crate::Registry::kind_for): the first kind listed for a dimension
/// vector is its canonical kind.
pub static KINDS: &[&QuantityKind] = &[
    &unitless::NUMBER,
    &length::LENGTH,
    &length::AREA,
    &length::VOLUME,
    &mass::MASS,
    &mass::DENSITY,
    &time::TIME,
    &time::FREQUENCY,
    &mechanics::VELOCITY,
    &mechanics::ACCELERATION,
    &mechanics::FORCE,
    &mechanics::PRESSURE,
    &mechanics::ENERGY,
    &mechanics::POWER,
    &radiation::ABSORBED_DOSE,
    &radiation::ABSORBED_DOSE_RATE,
    &electric::ELECTRIC_CURRENT,
    &electric::ELECTRIC_CHARGE,
    &thermal::TEMPERATURE,
    &substance::AMOUNT_OF_SUBSTANCE,
    &photometry::LUMINOUS_INTENSITY,
    &angular::ANGLE,
    &angular::SOLID_ANGLE,
    &angular::ANGULAR_VELOCITY,
];

/// Every built-in unit table.
pub fn unit_tables() -> [&'static [&'static UnitDef]; 24] {
    [
        unitless::NUMBER_UNITS,
        length::LENGTH_UNITS,
        length::AREA_UNITS,
        length::VOLUME_UNITS,
        mass::MASS_UNITS,
        mass::DENSITY_UNITS,
        time::TIME_UNITS,
        time::FREQUENCY_UNITS,
        mechanics::VELOCITY_UNITS,
        mechanics::ACCELERATION_UNITS,
        mechanics::FORCE_UNITS,
        mechanics::PRESSURE_UNITS,
        mechanics::ENERGY_UNITS,
        mechanics::POWER_UNITS,
        radiation::ABSORBED_DOSE_UNITS,
        radiation::ABSORBED_DOSE_RATE_UNITS,
        electric::ELECTRIC_CURRENT_UNITS,
        electric::ELECTRIC_CHARGE_UNITS,
        thermal::TEMPERATURE_UNITS,
        substance::AMOUNT_OF_SUBSTANCE_UNITS,
        photometry::LUMINOUS_INTENSITY_UNITS,
        angular::ANGLE_UNITS,
        angular::SOLID_ANGLE_UNITS,
        angular::ANGULAR_VELOCITY_UNITS,
    ]
}

/// Every built-in unit, table by table.
pub fn all_units() -> impl Iterator<Item = &'static UnitDef> {
    unit_tables().into_iter().flatten().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn one_table_per_kind_with_standard_first() {
        let tables = unit_tables();
        assert_eq!(tables.len(), KINDS.len());
        for (kind, table) in KINDS.iter().zip(tables) {
            let first = table[0];
            assert_eq!(first.kind(), *kind, "table for {kind}");
            assert!(first.is_standard());
            assert_eq!(first.symbol(), kind.standard_symbol());
            assert!(table.iter().all(|u| u.kind() == *kind));
            assert_eq!(table.iter().filter(|u| u.is_standard()).count(), 1);
        }
    }

    #[test]
    fn symbols_are_unique() {
        let mut seen = HashSet::new();
        for unit in all_units() {
            assert!(seen.insert(unit.symbol()), "duplicate symbol {}", unit.symbol());
        }
    }

    #[test]
    fn scales_are_finite_and_non_zero() {
        for unit in all_units() {
            assert!(unit.scale().is_finite() && unit.scale() != 0.0, "{unit}");
            assert!(unit.offset().is_finite(), "{unit}");
        }
    }

    #[test]
    fn dimensions_are_distinct() {
        let mut seen = HashSet::new();
        for kind in KINDS {
            assert!(seen.insert(kind.dimension()), "{kind}");
        }
    }
}
