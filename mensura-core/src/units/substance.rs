//! Amount of substance.

use crate::prefix::Prefix;
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for amount of substance.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "AmountOfSubstance", descriptor = AMOUNT_OF_SUBSTANCE, dimension = DimensionVector::AMOUNT, unit = "mol")]
pub struct AmountOfSubstance;
/// An amount of substance in moles.
pub type Moles = Measure<AmountOfSubstance>;

crate::unit_table! {
    AMOUNT_OF_SUBSTANCE_UNITS for AMOUNT_OF_SUBSTANCE;
    /// Mole (SI base unit).
    MOLE = standard "mol";
    /// Kilomole.
    KILOMOLE = prefix "kmol" Prefix::Kilo;
    /// Millimole.
    MILLIMOLE = prefix "mmol" Prefix::Milli;
    /// Micromole.
    MICROMOLE = prefix "µmol" Prefix::Micro;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_moles() {
        let n = Moles::from_unit(250.0, &MILLIMOLE).unwrap();
        assert_eq!(n.amount(), 0.25);
        assert_eq!(n.to_string(), "0.25 mol");
    }
}
