//! Angular quantities and utilities.
//!
//! Plane and solid angle are tracked as their own pseudo-dimensions (radian and steradian slots of the
//! [`DimensionVector`]), so an angle never silently turns into a plain number and `rad/s` stays distinct from `Hz`.
//!
//! The radian is standard. [`Measure<Angle>`] carries a few helpers on top of the generic measure API:
//!
//! * **Trigonometry:** `sin`, `cos`, `tan` and `sin_cos` work directly on the stored radians.
//! * **Wrapping:** [`Measure::wrap_pos`] maps into `[0, 2π)`, [`Measure::wrap_signed`] into `(-π, π]`.
//! * **Separations:** [`Measure::signed_separation`] and [`Measure::abs_separation`] give the shortest way round.
//!
//! Wrapping and trig operations follow IEEE-754 semantics: `NaN` or `±∞` inputs generally produce `NaN`.
//!
//! ```rust
//! use mensura_core::angular::{Radians, DEGREE};
//!
//! let a = Radians::from_unit(370.0, &DEGREE).unwrap().wrap_signed();
//! assert!((a.amount_in(&DEGREE).unwrap() - 10.0).abs() < 1e-9);
//! assert!((Radians::from_unit(90.0, &DEGREE).unwrap().sin() - 1.0).abs() < 1e-12);
//! ```

use crate::prefix::{NamedFactor, Prefix};
use crate::{DimensionVector, Measure};
use core::f64::consts::{PI, TAU};
use mensura_derive::Kind;

/// Kind marker for plane angle.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "Angle", descriptor = ANGLE, dimension = DimensionVector::ANGLE, unit = "rad")]
pub struct Angle;
/// A plane angle in radians.
pub type Radians = Measure<Angle>;

/// Kind marker for solid angle.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(name = "SolidAngle", descriptor = SOLID_ANGLE, dimension = DimensionVector::SOLID_ANGLE, unit = "sr")]
pub struct SolidAngle;
/// A solid angle in steradians.
pub type Steradians = Measure<SolidAngle>;

/// Kind marker for angular velocity.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(
    name = "AngularVelocity",
    descriptor = ANGULAR_VELOCITY,
    dimension = DimensionVector::ANGULAR_VELOCITY,
    unit = "rad/s"
)]
pub struct AngularVelocity;
/// An angular velocity in radians per second.
pub type RadiansPerSecond = Measure<AngularVelocity>;

crate::unit_table! {
    ANGLE_UNITS for ANGLE;
    /// Radian.
    RADIAN = standard "rad";
    /// Milliradian.
    MILLIRADIAN = prefix "mrad" Prefix::Milli;
    /// Degree (`π/180 rad`).
    DEGREE = scale "°" NamedFactor::Degree.factor();
    /// Arcminute (`1/60 °`).
    ARCMINUTE = scale "arcmin" NamedFactor::Degree.factor() / 60.0;
    /// Arcsecond (`1/3600 °`).
    ARCSECOND = scale "arcsec" NamedFactor::Degree.factor() / 3_600.0;
    /// Full revolution (`2π rad`).
    REVOLUTION = scale "rev" TAU;
    /// Gradian (`π/200 rad`).
    GRADIAN = scale "gon" PI / 200.0;
}

crate::unit_table! {
    SOLID_ANGLE_UNITS for SOLID_ANGLE;
    /// Steradian.
    STERADIAN = standard "sr";
    /// Square degree.
    SQUARE_DEGREE = scale "deg²" NamedFactor::Degree.factor() * NamedFactor::Degree.factor();
}

crate::unit_table! {
    ANGULAR_VELOCITY_UNITS for ANGULAR_VELOCITY;
    /// Radian per second.
    RADIAN_PER_SECOND = standard "rad/s";
    /// Degree per second.
    DEGREE_PER_SECOND = scale "°/s" NamedFactor::Degree.factor();
    /// Revolution per minute.
    REVOLUTION_PER_MINUTE = scale "rpm" TAU / NamedFactor::SecondsPerMinute.factor();
}

impl Measure<Angle> {
    /// One full revolution.
    pub const FULL_TURN: Self = Self::new(TAU);
    /// Half a revolution.
    pub const HALF_TURN: Self = Self::new(PI);
    /// A quarter revolution.
    pub const QUARTER_TURN: Self = Self::new(PI / 2.0);

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.amount().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.amount().cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.amount().tan()
    }

    /// Sine and cosine at once.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.amount().sin_cos()
    }

    /// Wrap into `[0, FULL_TURN)` using the Euclidean remainder.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        Self::new(self.amount().rem_euclid(TAU))
    }

    /// Wrap into `(-HALF_TURN, HALF_TURN]`.
    ///
    /// Upper bound inclusive, lower bound exclusive.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let y = (self.amount() + PI).rem_euclid(TAU) - PI;
        Self::new(if y <= -PI { y + TAU } else { y })
    }

    /// Signed smallest separation, in `(-HALF_TURN, HALF_TURN]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }

    /// Magnitude of the smallest separation.
    #[inline]
    pub fn abs_separation(self, other: Self) -> Self {
        self.signed_separation(other).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Seconds, MINUTE};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn deg(x: f64) -> Radians {
        Radians::from_unit(x, &DEGREE).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn degree_radian_conversion() {
        assert_relative_eq!(deg(180.0).amount(), PI, max_relative = 1e-12);
        assert_relative_eq!(RADIAN.convert_to(PI, &DEGREE).unwrap(), 180.0, max_relative = 1e-12);
        assert_relative_eq!(REVOLUTION.convert_to(1.0, &DEGREE).unwrap(), 360.0, max_relative = 1e-12);
        assert_relative_eq!(GRADIAN.convert_to(100.0, &DEGREE).unwrap(), 90.0, max_relative = 1e-12);
        assert_relative_eq!(DEGREE.convert_to(1.0, &ARCSECOND).unwrap(), 3600.0, max_relative = 1e-12);
    }

    #[test]
    fn whole_sphere_in_square_degrees() {
        let sphere = Steradians::new(4.0 * PI);
        assert_relative_eq!(
            sphere.amount_in(&SQUARE_DEGREE).unwrap(),
            41_252.961_249_419_27,
            max_relative = 1e-12
        );
    }

    #[test]
    fn spin_rate() {
        let w = RadiansPerSecond::from_unit(60.0, &REVOLUTION_PER_MINUTE).unwrap();
        assert_relative_eq!(w.amount(), TAU, max_relative = 1e-12);
        let turned: Radians = w * Seconds::from_unit(1.0, &MINUTE).unwrap();
        assert_relative_eq!(turned.amount_in(&REVOLUTION).unwrap(), 60.0, max_relative = 1e-12);
    }

    #[test]
    fn angle_is_not_a_number() {
        assert_ne!(ANGLE.dimension(), DimensionVector::DIMENSIONLESS);
        assert_ne!(ANGULAR_VELOCITY.dimension(), DimensionVector::FREQUENCY);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Trigonometry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn trig_functions() {
        assert_abs_diff_eq!(deg(90.0).sin(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(deg(60.0).cos(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(deg(45.0).tan(), 1.0, epsilon = 1e-12);
        let (s, c) = deg(30.0).sin_cos();
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c, 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Wrapping
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn wrap_pos_range() {
        assert_abs_diff_eq!(deg(370.0).wrap_pos().amount(), deg(10.0).amount(), epsilon = 1e-12);
        assert_abs_diff_eq!(deg(-10.0).wrap_pos().amount(), deg(350.0).amount(), epsilon = 1e-12);
        assert_eq!(Radians::ZERO.wrap_pos().amount(), 0.0);
    }

    #[test]
    fn wrap_signed_boundaries() {
        assert_abs_diff_eq!(Radians::HALF_TURN.wrap_signed().amount(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!((-Radians::HALF_TURN).wrap_signed().amount(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(deg(190.0).wrap_signed().amount(), deg(-170.0).amount(), epsilon = 1e-12);
    }

    #[test]
    fn separations() {
        let a = deg(350.0);
        let b = deg(10.0);
        assert_abs_diff_eq!(a.signed_separation(b).amount(), deg(-20.0).amount(), epsilon = 1e-12);
        assert_abs_diff_eq!(b.signed_separation(a).amount(), deg(20.0).amount(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.abs_separation(b).amount(), deg(20.0).amount(), epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_wrap_pos_in_range(x in -1e4..1e4f64) {
            let w = Radians::new(x).wrap_pos().amount();
            prop_assert!((0.0..TAU).contains(&w));
        }

        #[test]
        fn prop_wrap_signed_in_range(x in -1e4..1e4f64) {
            let w = Radians::new(x).wrap_signed().amount();
            prop_assert!(w > -PI && w <= PI);
        }

        #[test]
        fn prop_sin_cos_identity(x in -1e3..1e3f64) {
            let (s, c) = Radians::new(x).sin_cos();
            prop_assert!((s * s + c * c - 1.0).abs() < 1e-12);
        }
    }
}
