//! Measures bound to a display unit.

use crate::error::Result;
use crate::kind::Kind;
use crate::measure::Measure;
use crate::unit::UnitDef;
use core::fmt::{Display, Formatter};
use core::ops::{Add, Sub};

/// A [`Measure<K>`] that remembers the unit it should be reported in.
///
/// The amount is still stored in the standard unit, so arithmetic stays exact with respect to [`Measure`]; only
/// [`Reading::amount`] and `Display` go through the chosen unit. Binary operators keep the unit of the left operand.
///
/// ```rust
/// use mensura_core::length::{Meters, KILOMETER};
///
/// let trip = Meters::new(1200.0).in_unit(&KILOMETER).unwrap();
/// let longer = trip + Meters::new(300.0);
/// assert_eq!(longer.amount(), 1.5);
/// assert_eq!(longer.to_string(), "1.5 km");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading<K: Kind> {
    measure: Measure<K>,
    unit: &'static UnitDef,
}

impl<K: Kind> Reading<K> {
    /// Binds `measure` to `unit`; fails when `unit` belongs to another kind.
    pub fn new(measure: Measure<K>, unit: &'static UnitDef) -> Result<Self> {
        unit.check_kind(K::descriptor())?;
        Ok(Self { measure, unit })
    }

    /// Reading from an amount already expressed in `unit`.
    pub fn from_unit(amount: f64, unit: &'static UnitDef) -> Result<Self> {
        Self::new(Measure::from_unit(amount, unit)?, unit)
    }

    /// Amount expressed in the display unit.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.unit.from_standard(self.measure.amount())
    }

    /// The underlying standard-unit measure.
    #[inline]
    pub fn measure(&self) -> Measure<K> {
        self.measure
    }

    /// Display unit.
    #[inline]
    pub fn unit(&self) -> &'static UnitDef {
        self.unit
    }

    /// Same measure, different display unit.
    pub fn with_unit(self, unit: &'static UnitDef) -> Result<Self> {
        Self::new(self.measure, unit)
    }
}

impl<K: Kind> From<Reading<K>> for Measure<K> {
    fn from(reading: Reading<K>) -> Self {
        reading.measure
    }
}

impl<K: Kind> Add<Measure<K>> for Reading<K> {
    type Output = Self;
    fn add(self, rhs: Measure<K>) -> Self {
        Self {
            measure: self.measure + rhs,
            unit: self.unit,
        }
    }
}

impl<K: Kind> Sub<Measure<K>> for Reading<K> {
    type Output = Self;
    fn sub(self, rhs: Measure<K>) -> Self {
        Self {
            measure: self.measure - rhs,
            unit: self.unit,
        }
    }
}

impl<K: Kind> Add for Reading<K> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self + rhs.measure
    }
}

impl<K: Kind> Sub for Reading<K> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self - rhs.measure
    }
}

impl<K: Kind> Display for Reading<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.unit.symbol().is_empty() {
            write!(f, "{}", self.amount())
        } else {
            write!(f, "{} {}", self.amount(), self.unit.symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Length, Meters, FOOT, KILOMETER, METER};
    use crate::units::thermal::{Kelvins, CELSIUS};
    use crate::units::time::SECOND;
    use approx::assert_relative_eq;

    #[test]
    fn amount_is_reported_in_display_unit() {
        let r = Reading::<Length>::from_unit(5.0, &KILOMETER).unwrap();
        assert_eq!(r.amount(), 5.0);
        assert_eq!(r.measure().amount(), 5000.0);
        assert_eq!(r.unit(), &KILOMETER);
    }

    #[test]
    fn operators_keep_left_unit() {
        let a = Reading::<Length>::from_unit(1.0, &KILOMETER).unwrap();
        let b = Reading::<Length>::from_unit(500.0, &METER).unwrap();
        let sum = a + b;
        assert_eq!(sum.unit(), &KILOMETER);
        assert_relative_eq!(sum.amount(), 1.5, max_relative = 1e-12);

        let diff = b - a;
        assert_eq!(diff.unit(), &METER);
        assert_relative_eq!(diff.amount(), -500.0, max_relative = 1e-12);

        let plus = a + Meters::new(250.0);
        assert_relative_eq!(plus.amount(), 1.25, max_relative = 1e-12);
        let minus = a - Meters::new(250.0);
        assert_relative_eq!(minus.amount(), 0.75, max_relative = 1e-12);
    }

    #[test]
    fn affine_display_unit() {
        let t = Kelvins::new(293.15).in_unit(&CELSIUS).unwrap();
        assert_relative_eq!(t.amount(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn rebinding_checks_kind() {
        let r = Meters::new(0.3048).in_unit(&METER).unwrap();
        let ft = r.with_unit(&FOOT).unwrap();
        assert_relative_eq!(ft.amount(), 1.0, max_relative = 1e-12);
        assert!(r.with_unit(&SECOND).is_err());
        assert!(Reading::<Length>::from_unit(1.0, &SECOND).is_err());
    }

    #[test]
    fn display_and_conversion_back() {
        let r = Meters::new(2500.0).in_unit(&KILOMETER).unwrap();
        assert_eq!(r.to_string(), "2.5 km");
        let m: Meters = r.into();
        assert_eq!(m.amount(), 2500.0);
    }
}
