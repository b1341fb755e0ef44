//! Quantity kinds.
//!
//! A [`QuantityKind`] is the runtime descriptor of one physical quantity: a display name, a [`DimensionVector`] and
//! the symbol of its standard unit. Every built-in kind also has a zero-sized marker type implementing [`Kind`], so
//! that [`Measure<K>`](crate::Measure) can check kinds at compile time.
//!
//! Marker types are declared with `#[derive(Kind)]`:
//!
//! ```text
//! #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
//! #[kind(name = "Length", descriptor = LENGTH, dimension = DimensionVector::LENGTH, unit = "m")]
//! pub struct Length;
//! ```
//!
//! The derive expands in terms of `crate::`, so it is only usable inside `mensura-core` itself; downstream code
//! declares extra kinds at runtime through the [`Registry`](crate::Registry) or the unit catalog.

use crate::dimension::DimensionVector;
use crate::dynamic::DynMeasure;
use crate::error::Result;
use crate::unit::UnitDef;
use core::fmt::{Debug, Display, Formatter};

/// Descriptor of a physical quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuantityKind {
    name: &'static str,
    dimension: DimensionVector,
    standard_symbol: &'static str,
}

impl QuantityKind {
    /// Creates a descriptor.
    pub const fn new(
        name: &'static str,
        dimension: DimensionVector,
        standard_symbol: &'static str,
    ) -> Self {
        Self {
            name,
            dimension,
            standard_symbol,
        }
    }

    /// Display name, e.g. `"Length"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Dimensional signature.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    /// Symbol of the standard unit.
    #[inline]
    pub const fn standard_symbol(&self) -> &'static str {
        self.standard_symbol
    }

    /// The standard unit (`scale == 1`, `offset == 0`).
    pub const fn standard_unit(&'static self) -> UnitDef {
        UnitDef::standard(self, self.standard_symbol)
    }

    /// `true` when `other` has the same dimensional signature.
    #[inline]
    pub fn is_compatible(&self, other: &QuantityKind) -> bool {
        self.dimension == other.dimension
    }

    /// A measure of this kind from an amount already in the standard unit.
    #[inline]
    pub fn measure(&self, amount: f64) -> DynMeasure {
        DynMeasure::new(amount, self.dimension)
    }

    /// A measure of this kind from an amount in `unit`.
    ///
    /// Fails with [`Error::IncompatibleUnit`](crate::Error::IncompatibleUnit) when `unit` measures another kind.
    ///
    /// ```rust
    /// use mensura_core::length::{KILOMETER, LENGTH};
    ///
    /// let d = LENGTH.measure_in(5.0, &KILOMETER).unwrap();
    /// assert_eq!(d.amount(), 5000.0);
    /// ```
    pub fn measure_in(&self, amount: f64, unit: &UnitDef) -> Result<DynMeasure> {
        unit.check_kind(self)?;
        Ok(self.measure(unit.to_standard(amount)))
    }
}

impl Display for QuantityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

/// Compile-time tag for a quantity kind.
///
/// Implemented by zero-sized marker types through `#[derive(Kind)]`. The derive also emits the `static` descriptor
/// returned by [`Kind::descriptor`] and a `Display` impl for `Measure<Self>`.
pub trait Kind: Copy + PartialEq + Debug + 'static {
    /// Descriptor value, usable in `const` contexts.
    const KIND: QuantityKind;

    /// The `static` descriptor units of this kind point at.
    fn descriptor() -> &'static QuantityKind;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::units::length::{Length, KILOMETER, LENGTH, METER};
    use crate::units::mass::MASS;
    use crate::units::time::{SECOND, TIME};
    use crate::units::unitless::NUMBER;

    #[test]
    fn descriptor_accessors() {
        assert_eq!(LENGTH.name(), "Length");
        assert_eq!(LENGTH.dimension(), DimensionVector::LENGTH);
        assert_eq!(LENGTH.standard_symbol(), "m");
        assert_eq!(MASS.standard_symbol(), "kg");
        assert!(NUMBER.dimension().is_dimensionless());
        assert_eq!(LENGTH.to_string(), "Length");
    }

    #[test]
    fn marker_points_at_static_descriptor() {
        assert!(core::ptr::eq(Length::descriptor(), &LENGTH));
        assert_eq!(Length::KIND, LENGTH);
    }

    #[test]
    fn standard_unit_matches_static() {
        let unit = LENGTH.standard_unit();
        assert_eq!(unit, METER);
        assert!(unit.is_standard());
    }

    #[test]
    fn factory_scales_on_construction() {
        let d = LENGTH.measure_in(5.0, &KILOMETER).unwrap();
        assert_eq!(d.amount(), 5000.0);
        assert_eq!(d.dimension(), DimensionVector::LENGTH);

        let raw = TIME.measure(3.0);
        assert_eq!(raw.amount(), 3.0);
    }

    #[test]
    fn factory_rejects_foreign_units() {
        let err = LENGTH.measure_in(1.0, &SECOND).unwrap_err();
        assert!(matches!(err, Error::IncompatibleUnit { .. }));
    }

    #[test]
    fn compatibility_is_dimension_equality() {
        assert!(LENGTH.is_compatible(&LENGTH));
        assert!(!LENGTH.is_compatible(&TIME));
    }
}
