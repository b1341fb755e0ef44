//! Unit definitions.

use crate::dimension::DimensionVector;
use crate::error::{Error, Result};
use crate::kind::QuantityKind;
use crate::prefix::Prefix;
use core::fmt::{Display, Formatter};

/// A named, linearly scaled (optionally affine) representation of a quantity kind.
///
/// * `scale` is the size of one of this unit in the kind's *standard unit*. Example: if metres are standard, then
///   kilometres use `scale == 1000.0` because `1 km = 1000 m`.
/// * `offset` is added after scaling, for non-ratio scales such as degrees Celsius (`offset == 273.15` K).
/// * `kind` is a non-owning back-reference to the quantity kind this unit measures.
///
/// Built-in units are `static` items built with the `const` constructors, so a unit cannot exist without its kind.
///
/// # Invariants
///
/// - `to_standard(x) == x * scale + offset` and `from_standard(y) == (y - offset) / scale`.
/// - The standard unit of a kind has `scale == 1.0` and `offset == 0.0`.
/// - `scale` is finite and non-zero; the `const` constructors trust their caller, the `try_*` ones check.
#[derive(Clone, Copy, Debug)]
pub struct UnitDef {
    symbol: &'static str,
    scale: f64,
    offset: f64,
    kind: &'static QuantityKind,
    standard: bool,
}

impl UnitDef {
    /// The canonical unit of `kind`.
    pub const fn standard(kind: &'static QuantityKind, symbol: &'static str) -> Self {
        Self {
            symbol,
            scale: 1.0,
            offset: 0.0,
            kind,
            standard: true,
        }
    }

    /// A ratio unit: `1 symbol == scale` standard units.
    pub const fn scaled(kind: &'static QuantityKind, symbol: &'static str, scale: f64) -> Self {
        Self {
            symbol,
            scale,
            offset: 0.0,
            kind,
            standard: false,
        }
    }

    /// A ratio unit whose scale is a decimal prefix of the standard unit.
    ///
    /// ```rust
    /// use mensura_core::prefix::Prefix;
    /// use mensura_core::{length::LENGTH, UnitDef};
    ///
    /// static KM: UnitDef = UnitDef::prefixed(&LENGTH, "km", Prefix::Kilo);
    /// assert_eq!(KM.to_standard(5.0), 5000.0);
    /// ```
    pub const fn prefixed(kind: &'static QuantityKind, symbol: &'static str, prefix: Prefix) -> Self {
        Self::scaled(kind, symbol, prefix.factor())
    }

    /// An affine unit: `standard = amount * scale + offset`.
    pub const fn affine(
        kind: &'static QuantityKind,
        symbol: &'static str,
        scale: f64,
        offset: f64,
    ) -> Self {
        Self {
            symbol,
            scale,
            offset,
            kind,
            standard: false,
        }
    }

    /// Checked form of [`UnitDef::scaled`].
    pub fn try_scaled(kind: &'static QuantityKind, symbol: &'static str, scale: f64) -> Result<Self> {
        Self::try_affine(kind, symbol, scale, 0.0)
    }

    /// Checked form of [`UnitDef::affine`]; rejects empty symbols, zero or non-finite scales and non-finite offsets.
    pub fn try_affine(
        kind: &'static QuantityKind,
        symbol: &'static str,
        scale: f64,
        offset: f64,
    ) -> Result<Self> {
        if symbol.is_empty() && !kind.dimension().is_dimensionless() {
            return Err(Error::InvalidArgument(format!(
                "a unit of {} needs a symbol",
                kind.name()
            )));
        }
        if !scale.is_finite() || scale == 0.0 {
            return Err(Error::InvalidArgument(format!(
                "unit '{symbol}' has scale {scale}, expected a finite non-zero number"
            )));
        }
        if !offset.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "unit '{symbol}' has non-finite offset {offset}"
            )));
        }
        Ok(Self::affine(kind, symbol, scale, offset))
    }

    /// Prefixed unit from a prefix or named-factor name, failing fast on unknown names.
    pub fn with_prefix_name(
        kind: &'static QuantityKind,
        symbol: &'static str,
        prefix: &str,
    ) -> Result<Self> {
        Self::try_scaled(kind, symbol, crate::prefix::factor_for(prefix)?)
    }

    /// Printable symbol.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Size of one of this unit in standard units.
    #[inline]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Additive offset applied after scaling.
    #[inline]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Quantity kind measured by this unit.
    #[inline]
    pub const fn kind(&self) -> &'static QuantityKind {
        self.kind
    }

    /// Dimension of the owning kind.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        self.kind.dimension()
    }

    /// `true` for the canonical unit of the kind.
    #[inline]
    pub const fn is_standard(&self) -> bool {
        self.standard
    }

    /// `true` when the unit has a non-zero offset.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// `true` when both units measure the same dimension.
    #[inline]
    pub fn is_compatible(&self, other: &UnitDef) -> bool {
        self.dimension() == other.dimension()
    }

    /// Converts an amount in this unit to the standard unit.
    #[inline]
    pub fn to_standard(&self, amount: f64) -> f64 {
        amount * self.scale + self.offset
    }

    /// Converts an amount in the standard unit to this unit.
    #[inline]
    pub fn from_standard(&self, amount: f64) -> f64 {
        (amount - self.offset) / self.scale
    }

    /// Converts an amount in this unit to `target`.
    ///
    /// ```rust
    /// use mensura_core::length::{FOOT, METER};
    ///
    /// let m = FOOT.convert_to(10.0, &METER).unwrap();
    /// assert!((m - 3.048).abs() < 1e-12);
    /// ```
    pub fn convert_to(&self, amount: f64, target: &UnitDef) -> Result<f64> {
        self.check_kind(target.kind())?;
        if self == target {
            return Ok(amount);
        }
        Ok(target.from_standard(self.to_standard(amount)))
    }

    /// Fails with [`Error::IncompatibleUnit`] unless this unit measures `expected`.
    pub(crate) fn check_kind(&self, expected: &QuantityKind) -> Result<()> {
        if self.dimension() == expected.dimension() {
            Ok(())
        } else {
            Err(Error::IncompatibleUnit {
                unit: self.symbol.to_string(),
                unit_kind: self.kind.name().to_string(),
                expected: expected.name().to_string(),
            })
        }
    }
}

impl PartialEq for UnitDef {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.scale == other.scale
            && self.offset == other.offset
            && self.dimension() == other.dimension()
    }
}

impl Display for UnitDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{FOOT, KILOMETER, LENGTH, METER};
    use crate::units::thermal::{CELSIUS, FAHRENHEIT, KELVIN};
    use crate::units::time::SECOND;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn standard_unit_is_identity() {
        assert!(METER.is_standard());
        assert_eq!(METER.scale(), 1.0);
        assert_eq!(METER.offset(), 0.0);
        assert_eq!(METER.to_standard(42.0), 42.0);
        assert_eq!(METER.from_standard(42.0), 42.0);
    }

    #[test]
    fn prefixed_unit_scales() {
        assert_eq!(KILOMETER.to_standard(5.0), 5000.0);
        assert_eq!(KILOMETER.from_standard(5000.0), 5.0);
        assert!(!KILOMETER.is_standard());
    }

    #[test]
    fn affine_units_apply_offset() {
        assert!(CELSIUS.is_affine());
        assert_abs_diff_eq!(CELSIUS.to_standard(0.0), 273.15, epsilon = 1e-12);
        assert_abs_diff_eq!(CELSIUS.from_standard(373.15), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            FAHRENHEIT.convert_to(212.0, &CELSIUS).unwrap(),
            100.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            KELVIN.convert_to(0.0, &FAHRENHEIT).unwrap(),
            -459.67,
            epsilon = 1e-9
        );
    }

    #[test]
    fn convert_between_incompatible_units_fails() {
        let err = METER.convert_to(1.0, &SECOND).unwrap_err();
        assert_eq!(
            err,
            Error::IncompatibleUnit {
                unit: "m".into(),
                unit_kind: "Length".into(),
                expected: "Time".into(),
            }
        );
    }

    #[test]
    fn checked_constructors_reject_bad_scales() {
        assert!(matches!(
            UnitDef::try_scaled(&LENGTH, "zero", 0.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            UnitDef::try_scaled(&LENGTH, "nan", f64::NAN),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            UnitDef::try_affine(&LENGTH, "off", 1.0, f64::INFINITY),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            UnitDef::try_scaled(&LENGTH, "", 2.0),
            Err(Error::InvalidArgument(_))
        ));
        let furlong = UnitDef::try_scaled(&LENGTH, "fur", 201.168).unwrap();
        assert_relative_eq!(furlong.convert_to(1.0, &METER).unwrap(), 201.168, max_relative = 1e-12);
    }

    #[test]
    fn prefix_names_resolve_or_fail_fast() {
        let mm = UnitDef::with_prefix_name(&LENGTH, "mm", "milli").unwrap();
        assert_eq!(mm.scale(), 1e-3);
        let ft = UnitDef::with_prefix_name(&LENGTH, "ft", "foot").unwrap();
        assert_eq!(ft, FOOT);
        assert_eq!(
            UnitDef::with_prefix_name(&LENGTH, "xm", "xenna"),
            Err(Error::UnknownPrefix("xenna".into()))
        );
    }

    #[test]
    fn display_is_symbol() {
        assert_eq!(KILOMETER.to_string(), "km");
        assert_eq!(CELSIUS.to_string(), "°C");
    }

    proptest! {
        #[test]
        fn prop_ratio_round_trip(x in -1e9..1e9f64) {
            for unit in [&KILOMETER, &FOOT] {
                let back = unit.from_standard(unit.to_standard(x));
                prop_assert!((back - x).abs() <= 1e-12 * x.abs().max(1.0));
            }
        }

        #[test]
        fn prop_affine_round_trip(x in -1e6..1e6f64) {
            let back = CELSIUS.from_standard(CELSIUS.to_standard(x));
            prop_assert!((back - x).abs() <= 1e-9);
        }
    }
}
