//! Measure type and its implementations.

use crate::dynamic::DynMeasure;
use crate::error::Result;
use crate::kind::{Kind, QuantityKind};
use crate::reading::Reading;
use crate::unit::UnitDef;
use crate::units::unitless::Dimensionless;
use crate::DimensionVector;
use core::cmp::Ordering;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A physical amount of kind `K`.
///
/// `Measure<K>` wraps an `f64` holding the amount **in K's standard unit**, together with phantom type information
/// about its kind. Units only matter at the edges: [`Measure::from_unit`] scales on the way in and
/// [`Measure::amount_in`] scales on the way out.
///
/// Arithmetic between measures of the same kind is always allowed. Arithmetic across kinds only compiles for the pairs
/// listed in the derivation catalog (`Length * Length -> Area`, `Energy / Mass -> AbsorbedDose`, ...), and dividing
/// two measures of the same kind yields a [`Number`].
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::{Length, KILOMETER, METER};
/// use mensura_core::Measure;
///
/// let d = Measure::<Length>::from_unit(5.0, &KILOMETER).unwrap();
/// assert_eq!(d.amount(), 5000.0);
/// assert_eq!(d.amount_in(&METER).unwrap(), 5000.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Measure<K: Kind>(f64, PhantomData<K>);

/// A dimensionless measure; the result of dividing two measures of the same kind.
pub type Number = Measure<Dimensionless>;

impl<K: Kind> Measure<K> {
    /// Zero in the standard unit.
    pub const ZERO: Self = Self::new(0.0);

    /// Machine epsilon in the standard unit.
    pub const EPSILON: Self = Self::new(f64::EPSILON);

    /// A constant representing NaN for this kind.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// assert!(Meters::NAN.amount().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a measure from an amount in the standard unit.
    ///
    /// ```rust
    /// use mensura_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.amount(), 2.5);
    /// ```
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Self(amount, PhantomData)
    }

    /// Creates a measure from an amount expressed in `unit`.
    ///
    /// Fails with [`Error::IncompatibleUnit`](crate::Error::IncompatibleUnit) when `unit` measures another kind.
    #[inline]
    pub fn from_unit(amount: f64, unit: &UnitDef) -> Result<Self> {
        unit.check_kind(K::descriptor())?;
        Ok(Self::new(unit.to_standard(amount)))
    }

    /// Copy of another measure of the same kind.
    #[inline]
    pub const fn from_measure(other: Measure<K>) -> Self {
        Self::new(other.0)
    }

    /// Amount in the standard unit.
    #[inline]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// Amount expressed in `unit`.
    ///
    /// ```rust
    /// use mensura_core::length::{Meters, FOOT};
    /// let d = Meters::new(3.048);
    /// assert!((d.amount_in(&FOOT).unwrap() - 10.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn amount_in(self, unit: &UnitDef) -> Result<f64> {
        unit.check_kind(K::descriptor())?;
        Ok(unit.from_standard(self.0))
    }

    /// Descriptor of this measure's kind.
    #[inline]
    pub fn kind(self) -> &'static QuantityKind {
        K::descriptor()
    }

    /// Dimensional signature of this measure's kind.
    #[inline]
    pub const fn dimension(self) -> DimensionVector {
        K::KIND.dimension()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns the smaller of two measures.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the larger of two measures.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// Restricts the measure to `[lo, hi]`.
    ///
    /// Panics like [`f64::clamp`] when `lo > hi` or either bound is NaN.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        Self::new(self.0.clamp(lo.0, hi.0))
    }

    /// `true` when the amount is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Drops the compile-time kind, keeping amount and dimension.
    #[inline]
    pub fn erase(self) -> DynMeasure {
        DynMeasure::new(self.0, K::KIND.dimension())
    }

    /// Pairs the measure with a display unit.
    ///
    /// ```rust
    /// use mensura_core::length::{Meters, KILOMETER};
    /// let r = Meters::new(1500.0).in_unit(&KILOMETER).unwrap();
    /// assert_eq!(r.to_string(), "1.5 km");
    /// ```
    #[inline]
    pub fn in_unit(self, unit: &'static UnitDef) -> Result<Reading<K>> {
        Reading::new(self, unit)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> PartialEq for Measure<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Kind> PartialOrd for Measure<K> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<K: Kind> PartialEq<f64> for Measure<K> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Add for Measure<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<K: Kind> AddAssign for Measure<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<K: Kind> Sub for Measure<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<K: Kind> SubAssign for Measure<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<K: Kind> Neg for Measure<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<K: Kind> Mul<f64> for Measure<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<K: Kind> Mul<Measure<K>> for f64 {
    type Output = Measure<K>;
    #[inline]
    fn mul(self, rhs: Measure<K>) -> Self::Output {
        rhs * self
    }
}

impl<K: Kind> MulAssign<f64> for Measure<K> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<K: Kind> Div<f64> for Measure<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<K: Kind> DivAssign<f64> for Measure<K> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<K: Kind> Rem<f64> for Measure<K> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: f64) -> Self {
        Self::new(self.0 % rhs)
    }
}

/// Same-kind division yields a dimensionless ratio.
impl<K: Kind> Div<Measure<K>> for Measure<K> {
    type Output = Number;
    #[inline]
    fn div(self, rhs: Measure<K>) -> Number {
        Number::new(self.0 / rhs.0)
    }
}

impl<K: Kind> Sum for Measure<K> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, K: Kind> Sum<&'a Measure<K>> for Measure<K> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + *m)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless helpers
// ─────────────────────────────────────────────────────────────────────────────

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Number> for f64 {
    #[inline]
    fn from(value: Number) -> Self {
        value.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<K: Kind> Serialize for Measure<K> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Kind> Deserialize<'de> for Measure<K> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Ok(Measure::new(amount))
    }
}

/// Serde helper module for serializing measures together with a unit symbol.
///
/// Use this with the `#[serde(with = "...")]` attribute. Serialization always writes the standard unit; reading
/// accepts any unit of the right kind known to the global [`Registry`](crate::Registry) and converts it.
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Route {
///     #[serde(with = "mensura_core::serde_with_unit")]
///     total: Meters,  // {"amount": 100.0, "unit": "m"}
///
///     leg: Meters,    // 50.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use crate::registry::Registry;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Measure<K>` as `{"amount": <standard amount>, "unit": <standard symbol>}`.
    pub fn serialize<K, S>(measure: &Measure<K>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        K: Kind,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Measure", 2)?;
        state.serialize_field("amount", &measure.amount())?;
        state.serialize_field("unit", K::KIND.standard_symbol())?;
        state.end()
    }

    /// Deserializes a `Measure<K>` from `amount` and an optional `unit`.
    ///
    /// A missing `unit` means the standard unit. A unit of another kind is rejected.
    pub fn deserialize<'de, K, D>(deserializer: D) -> core::result::Result<Measure<K>, D::Error>
    where
        K: Kind,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Amount,
            Unit,
        }

        struct MeasureVisitor<K>(PhantomData<K>);

        impl<'de, K: Kind> Visitor<'de> for MeasureVisitor<K> {
            type Value = Measure<K>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Measure with amount and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Measure<K>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut amount: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Amount => {
                            if amount.is_some() {
                                return Err(de::Error::duplicate_field("amount"));
                            }
                            amount = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let amount = amount.ok_or_else(|| de::Error::missing_field("amount"))?;

                match unit {
                    None => Ok(Measure::new(amount)),
                    Some(symbol) if symbol == K::KIND.standard_symbol() => Ok(Measure::new(amount)),
                    Some(symbol) => {
                        let unit = Registry::global()
                            .unit(&symbol)
                            .map_err(de::Error::custom)?;
                        Measure::from_unit(amount, unit).map_err(de::Error::custom)
                    }
                }
            }
        }

        deserializer.deserialize_struct(
            "Measure",
            &["amount", "unit"],
            MeasureVisitor(PhantomData),
        )
    }
}
