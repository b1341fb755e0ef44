//! Runtime-typed measures.
//!
//! [`DynMeasure`] is the counterpart of [`Measure<K>`](crate::Measure) for values whose kind is only known at
//! runtime: a standard-unit amount paired with its [`DimensionVector`]. Mixing kinds is reported as an
//! [`Error::IncompatibleQuantity`] instead of a compile error.
//!
//! Two flavours of multiplication and division are offered:
//!
//! * [`DynMeasure::checked_mul`] and [`DynMeasure::checked_div`] only accept operand pairs listed in the derivation
//!   catalog, exactly like the typed operators.
//! * The `*` and `/` operators derive the result dimension from the vector algebra and look the canonical kind up in
//!   the global [`Registry`]. When no kind is registered for the result, the value is kept as an unnamed compound.
//!   Exponents that leave the `i8` range saturate; the checked forms report them as [`Error::InvalidArgument`].
//!
//! ```rust
//! use mensura_core::{mass::MASS, mechanics::ENERGY};
//!
//! let e = ENERGY.measure(100.0);
//! let m = MASS.measure(2.0);
//! let dose = (e / m).kind().unwrap();
//! assert_eq!(dose.name(), "AbsorbedDose");
//! ```

use crate::derived::Operation;
use crate::dimension::DimensionVector;
use crate::error::{Error, Result};
use crate::kind::{Kind, QuantityKind};
use crate::measure::Measure;
use crate::registry::Registry;
use crate::unit::UnitDef;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::ops::{Div, Mul, Neg};

/// An amount in standard units together with its dimension.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynMeasure {
    amount: f64,
    dimension: DimensionVector,
}

impl DynMeasure {
    /// Creates a measure from a standard-unit amount.
    #[inline]
    pub const fn new(amount: f64, dimension: DimensionVector) -> Self {
        Self { amount, dimension }
    }

    /// Creates a measure from an amount expressed in `unit`.
    #[inline]
    pub fn from_unit(amount: f64, unit: &UnitDef) -> Self {
        Self::new(unit.to_standard(amount), unit.dimension())
    }

    /// Amount in the standard unit.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Dimensional signature.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    /// Canonical kind of this dimension in the global registry, if any.
    pub fn kind(&self) -> Option<&'static QuantityKind> {
        Registry::global().kind_for(&self.dimension)
    }

    /// `true` when no registered kind has this dimension.
    pub fn is_compound(&self) -> bool {
        self.kind().is_none()
    }

    /// Amount expressed in `unit`.
    ///
    /// Fails with [`Error::IncompatibleUnit`] when `unit` has another dimension.
    pub fn amount_in(&self, unit: &UnitDef) -> Result<f64> {
        if unit.dimension() != self.dimension {
            return Err(Error::IncompatibleUnit {
                unit: unit.symbol().to_string(),
                unit_kind: unit.kind().name().to_string(),
                expected: self.describe(),
            });
        }
        Ok(unit.from_standard(self.amount))
    }

    /// Sum of two measures of the same dimension.
    pub fn try_add(self, rhs: Self) -> Result<Self> {
        self.same_dimension(&rhs, "+")?;
        Ok(Self::new(self.amount + rhs.amount, self.dimension))
    }

    /// Difference of two measures of the same dimension.
    pub fn try_sub(self, rhs: Self) -> Result<Self> {
        self.same_dimension(&rhs, "-")?;
        Ok(Self::new(self.amount - rhs.amount, self.dimension))
    }

    /// Ordering of two measures of the same dimension (`None` when an amount is NaN).
    pub fn try_cmp(&self, rhs: &Self) -> Result<Option<Ordering>> {
        self.same_dimension(rhs, "<=>")?;
        Ok(self.amount.partial_cmp(&rhs.amount))
    }

    /// Product restricted to the derivation catalog of the global registry.
    ///
    /// Fails with [`Error::InvalidArgument`] when the result dimension leaves the exponent range and with
    /// [`Error::IncompatibleQuantity`] when no rule covers the operands.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        Registry::global().multiply(self, rhs)
    }

    /// Quotient restricted to the derivation catalog of the global registry.
    ///
    /// Dividing two measures of the same dimension always succeeds and yields a dimensionless value.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        Registry::global().divide(self, rhs)
    }

    /// Recovers a typed measure.
    ///
    /// Fails with [`Error::IncompatibleQuantity`] unless the dimension is that of `K`.
    ///
    /// ```rust
    /// use mensura_core::length::{Length, LENGTH};
    ///
    /// let d = LENGTH.measure(3.0).downcast::<Length>().unwrap();
    /// assert_eq!(d.amount(), 3.0);
    /// ```
    pub fn downcast<K: Kind>(self) -> Result<Measure<K>> {
        if self.dimension == K::KIND.dimension() {
            Ok(Measure::new(self.amount))
        } else {
            Err(Error::incompatible_quantity(
                self.describe(),
                "as",
                K::KIND.name(),
            ))
        }
    }

    /// Kind name, or the base-unit expression for compound values.
    pub(crate) fn describe(&self) -> String {
        match self.kind() {
            Some(kind) => kind.name().to_string(),
            None => self.dimension.to_string(),
        }
    }

    fn same_dimension(&self, rhs: &Self, operation: &'static str) -> Result<()> {
        if self.dimension == rhs.dimension {
            Ok(())
        } else {
            Err(Error::incompatible_quantity(
                self.describe(),
                operation,
                rhs.describe(),
            ))
        }
    }

    fn derive(self, operation: Operation, rhs: Self) -> Self {
        let dimension = match operation.checked_combine(self.dimension, rhs.dimension) {
            Some(dimension) => dimension,
            None => {
                let saturated = operation.combine(self.dimension, rhs.dimension);
                log::warn!(
                    "{} {} {} overflows the exponent range; saturating to {}",
                    self.dimension,
                    operation,
                    rhs.dimension,
                    saturated
                );
                saturated
            }
        };
        let result = Self::new(operation.apply(self.amount, rhs.amount), dimension);
        if result.is_compound() {
            log::trace!(
                "{} {} {} has no registered kind; keeping compound {}",
                self.describe(),
                operation,
                rhs.describe(),
                result.dimension
            );
        }
        result
    }
}

impl<K: Kind> From<Measure<K>> for DynMeasure {
    fn from(measure: Measure<K>) -> Self {
        measure.erase()
    }
}

impl Mul for DynMeasure {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.derive(Operation::Multiply, rhs)
    }
}

impl Div for DynMeasure {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.derive(Operation::Divide, rhs)
    }
}

impl Mul<f64> for DynMeasure {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.amount * rhs, self.dimension)
    }
}

impl Div<f64> for DynMeasure {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.amount / rhs, self.dimension)
    }
}

impl Neg for DynMeasure {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.amount, self.dimension)
    }
}

impl PartialEq for DynMeasure {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.amount == other.amount
    }
}

/// Measures of different dimensions are unordered.
impl PartialOrd for DynMeasure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimension == other.dimension {
            self.amount.partial_cmp(&other.amount)
        } else {
            None
        }
    }
}

impl Display for DynMeasure {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.write_with(self.kind(), f)
    }
}

impl DynMeasure {
    fn write_with(&self, kind: Option<&QuantityKind>, f: &mut Formatter<'_>) -> core::fmt::Result {
        match kind {
            Some(kind) if kind.standard_symbol().is_empty() => write!(f, "{}", self.amount),
            Some(kind) => write!(f, "{} {}", self.amount, kind.standard_symbol()),
            None => write!(f, "{} {}", self.amount, self.dimension),
        }
    }
}

/// Formats a [`DynMeasure`] with the kinds of a given registry; see [`Registry::display`].
#[derive(Clone, Copy)]
pub struct MeasureDisplay<'a> {
    measure: &'a DynMeasure,
    registry: &'a Registry,
}

impl<'a> MeasureDisplay<'a> {
    pub(crate) fn new(measure: &'a DynMeasure, registry: &'a Registry) -> Self {
        Self { measure, registry }
    }
}

impl Display for MeasureDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.measure
            .write_with(self.registry.kind_for(&self.measure.dimension), f)
    }
}
