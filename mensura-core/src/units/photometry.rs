//! Luminous intensity.

use crate::prefix::Prefix;
use crate::{DimensionVector, Measure};
use mensura_derive::Kind;

/// Kind marker for luminous intensity.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(
    name = "LuminousIntensity",
    descriptor = LUMINOUS_INTENSITY,
    dimension = DimensionVector::LUMINOUS_INTENSITY,
    unit = "cd"
)]
pub struct LuminousIntensity;
/// A luminous intensity in candelas.
pub type Candelas = Measure<LuminousIntensity>;

crate::unit_table! {
    LUMINOUS_INTENSITY_UNITS for LUMINOUS_INTENSITY;
    /// Candela (SI base unit).
    CANDELA = standard "cd";
    /// Millicandela.
    MILLICANDELA = prefix "mcd" Prefix::Milli;
}
