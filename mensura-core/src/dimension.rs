//! Dimension vectors.
//!
//! A [`DimensionVector`] holds the exponents of the seven SI base dimensions plus two angle pseudo-dimensions
//! (plane angle and solid angle). Angles are dimensionless in SI, but keeping them in their own slots lets a
//! radian stay distinguishable from a plain number without any shared mutable state.
//!
//! ```rust
//! use mensura_core::DimensionVector;
//!
//! let velocity = DimensionVector::LENGTH.div(DimensionVector::TIME);
//! assert_eq!(velocity, DimensionVector::VELOCITY);
//! assert_eq!(velocity.to_string(), "m·s⁻¹");
//! ```

use core::fmt;
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of exponent slots in a [`DimensionVector`].
pub const SLOTS: usize = 9;

/// One slot of a [`DimensionVector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Length (metre).
    Length = 0,
    /// Mass (kilogram).
    Mass = 1,
    /// Time (second).
    Time = 2,
    /// Electric current (ampere).
    Current = 3,
    /// Thermodynamic temperature (kelvin).
    Temperature = 4,
    /// Luminous intensity (candela).
    LuminousIntensity = 5,
    /// Amount of substance (mole).
    Amount = 6,
    /// Plane angle pseudo-dimension (radian).
    Angle = 7,
    /// Solid angle pseudo-dimension (steradian).
    SolidAngle = 8,
}

impl BaseDimension {
    /// All slots in storage order.
    pub const ALL: [BaseDimension; SLOTS] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::LuminousIntensity,
        BaseDimension::Amount,
        BaseDimension::Angle,
        BaseDimension::SolidAngle,
    ];

    /// Symbol of the coherent SI unit for this slot.
    pub const fn unit_symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::LuminousIntensity => "cd",
            BaseDimension::Amount => "mol",
            BaseDimension::Angle => "rad",
            BaseDimension::SolidAngle => "sr",
        }
    }

    /// Lower-case name, as used by the unit catalog.
    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::LuminousIntensity => "luminous_intensity",
            BaseDimension::Amount => "amount",
            BaseDimension::Angle => "angle",
            BaseDimension::SolidAngle => "solid_angle",
        }
    }
}

/// Exponents of the base dimensions that characterize a quantity kind.
///
/// Equality is component-wise and is the single compatibility test used everywhere in the crate. No ordering is
/// defined.
///
/// Exponents are `i8`. The infallible algebra ([`mul`](Self::mul), [`div`](Self::div), [`pow`](Self::pow) and the
/// `*` / `/` operators) saturates at `-128` and `127` and never wraps; the `checked_*` forms return `None` instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionVector([i8; SLOTS]);

impl DimensionVector {
    /// Pure number.
    pub const DIMENSIONLESS: Self = Self([0; SLOTS]);

    /// `L`
    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    /// `M`
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    /// `T`
    pub const TIME: Self = Self::base(BaseDimension::Time);
    /// `I`
    pub const CURRENT: Self = Self::base(BaseDimension::Current);
    /// `Θ`
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    /// `J`
    pub const LUMINOUS_INTENSITY: Self = Self::base(BaseDimension::LuminousIntensity);
    /// `N`
    pub const AMOUNT: Self = Self::base(BaseDimension::Amount);
    /// Plane angle.
    pub const ANGLE: Self = Self::base(BaseDimension::Angle);
    /// Solid angle.
    pub const SOLID_ANGLE: Self = Self::base(BaseDimension::SolidAngle);

    /// `L²`
    pub const AREA: Self = Self::LENGTH.pow(2);
    /// `L³`
    pub const VOLUME: Self = Self::LENGTH.pow(3);
    /// `M L⁻³`
    pub const DENSITY: Self = Self::MASS.div(Self::VOLUME);
    /// `T⁻¹`
    pub const FREQUENCY: Self = Self::TIME.recip();
    /// `L T⁻¹`
    pub const VELOCITY: Self = Self::LENGTH.div(Self::TIME);
    /// `L T⁻²`
    pub const ACCELERATION: Self = Self::VELOCITY.div(Self::TIME);
    /// `M L T⁻²`
    pub const FORCE: Self = Self::MASS.mul(Self::ACCELERATION);
    /// `M L⁻¹ T⁻²`
    pub const PRESSURE: Self = Self::FORCE.div(Self::AREA);
    /// `M L² T⁻²`
    pub const ENERGY: Self = Self::FORCE.mul(Self::LENGTH);
    /// `M L² T⁻³`
    pub const POWER: Self = Self::ENERGY.div(Self::TIME);
    /// `L² T⁻²` (energy per mass)
    pub const ABSORBED_DOSE: Self = Self::ENERGY.div(Self::MASS);
    /// `L² T⁻³`
    pub const ABSORBED_DOSE_RATE: Self = Self::ABSORBED_DOSE.div(Self::TIME);
    /// `I T`
    pub const CHARGE: Self = Self::CURRENT.mul(Self::TIME);
    /// Angle per time.
    pub const ANGULAR_VELOCITY: Self = Self::ANGLE.div(Self::TIME);

    /// Builds a vector from raw exponents in [`BaseDimension::ALL`] order.
    pub const fn new(exponents: [i8; SLOTS]) -> Self {
        Self(exponents)
    }

    /// Vector with a single exponent of one.
    pub const fn base(dimension: BaseDimension) -> Self {
        let mut exponents = [0; SLOTS];
        exponents[dimension as usize] = 1;
        Self(exponents)
    }

    /// Raw exponents in [`BaseDimension::ALL`] order.
    pub const fn exponents(self) -> [i8; SLOTS] {
        self.0
    }

    /// Exponent of one slot.
    pub const fn exponent(self, dimension: BaseDimension) -> i8 {
        self.0[dimension as usize]
    }

    /// Returns a copy with one slot replaced.
    pub const fn with_exponent(self, dimension: BaseDimension, exponent: i8) -> Self {
        let mut exponents = self.0;
        exponents[dimension as usize] = exponent;
        Self(exponents)
    }

    /// Dimension of a product: exponents add, saturating at the `i8` limits.
    ///
    /// Use [`DimensionVector::checked_mul`] where an out-of-range exponent must be reported.
    pub const fn mul(self, other: Self) -> Self {
        let mut out = [0; SLOTS];
        let mut i = 0;
        while i < SLOTS {
            out[i] = self.0[i].saturating_add(other.0[i]);
            i += 1;
        }
        Self(out)
    }

    /// Dimension of a quotient: exponents subtract, saturating at the `i8` limits.
    pub const fn div(self, other: Self) -> Self {
        let mut out = [0; SLOTS];
        let mut i = 0;
        while i < SLOTS {
            out[i] = self.0[i].saturating_sub(other.0[i]);
            i += 1;
        }
        Self(out)
    }

    /// Dimension raised to an integer power: exponents scale, saturating at the `i8` limits.
    pub const fn pow(self, n: i8) -> Self {
        let mut out = [0; SLOTS];
        let mut i = 0;
        while i < SLOTS {
            out[i] = self.0[i].saturating_mul(n);
            i += 1;
        }
        Self(out)
    }

    /// Product dimension, or `None` when an exponent leaves the `i8` range.
    ///
    /// ```rust
    /// use mensura_core::DimensionVector;
    ///
    /// let big = DimensionVector::LENGTH.pow(100);
    /// assert!(big.checked_mul(big).is_none());
    /// assert_eq!(big.mul(big), DimensionVector::LENGTH.pow(127));
    /// ```
    pub const fn checked_mul(self, other: Self) -> Option<Self> {
        let mut out = [0; SLOTS];
        let mut i = 0;
        while i < SLOTS {
            match self.0[i].checked_add(other.0[i]) {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(Self(out))
    }

    /// Quotient dimension, or `None` when an exponent leaves the `i8` range.
    pub const fn checked_div(self, other: Self) -> Option<Self> {
        let mut out = [0; SLOTS];
        let mut i = 0;
        while i < SLOTS {
            match self.0[i].checked_sub(other.0[i]) {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(Self(out))
    }

    /// Integer power, or `None` when an exponent leaves the `i8` range.
    pub const fn checked_pow(self, n: i8) -> Option<Self> {
        let mut out = [0; SLOTS];
        let mut i = 0;
        while i < SLOTS {
            match self.0[i].checked_mul(n) {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(Self(out))
    }

    /// Reciprocal dimension.
    pub const fn recip(self) -> Self {
        self.pow(-1)
    }

    /// Component-wise equality usable in `const` contexts.
    pub const fn equals(self, other: Self) -> bool {
        let mut i = 0;
        while i < SLOTS {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` for the zero vector.
    pub const fn is_dimensionless(self) -> bool {
        self.equals(Self::DIMENSIONLESS)
    }
}

impl Mul for DimensionVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        DimensionVector::mul(self, rhs)
    }
}

impl Div for DimensionVector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        DimensionVector::div(self, rhs)
    }
}

/// Renders the vector as a product of coherent SI base units, e.g. `m²·kg·s⁻²`.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for dimension in BaseDimension::ALL {
            let exp = self.exponent(dimension);
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(dimension.unit_symbol())?;
            if exp != 1 {
                f.write_str(&superscript(exp))?;
            }
        }
        Ok(())
    }
}

fn superscript(n: i8) -> String {
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for digit in n.unsigned_abs().to_string().chars() {
        out.push(match digit {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            _ => '⁹',
        });
    }
    out
}
