//! Cross-kind derivations.
//!
//! A [`Derivation`] states that combining a measure of kind `lhs` with a measure of kind `rhs` through an
//! [`Operation`] yields a measure of kind `output`. The built-in rules are declared once with the
//! [`derivations!`](crate::derivations) macro, which gives each rule a typed operator on [`Measure`](crate::Measure),
//! checks at compile time that the output dimension is the product (or quotient) of the operand dimensions, and lists
//! the rule in [`CATALOG`] so the [`Registry`](crate::Registry) can answer the same question at runtime.
//!
//! ```rust
//! use mensura_core::length::{Area, Meters};
//! use mensura_core::Measure;
//!
//! let a: Measure<Area> = Meters::new(10.0) * Meters::new(4.0);
//! assert_eq!(a.amount(), 40.0);
//! ```

use crate::dimension::DimensionVector;
use crate::dynamic::DynMeasure;
use crate::error::{Error, Result};
use crate::kind::QuantityKind;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::units::angular::{Angle, AngularVelocity};
use crate::units::electric::{ElectricCharge, ElectricCurrent};
use crate::units::length::{Area, Length, Volume};
use crate::units::mass::{Density, Mass};
use crate::units::mechanics::{Acceleration, Energy, Force, Power, Pressure, Velocity};
use crate::units::radiation::{AbsorbedDose, AbsorbedDoseRate};
use crate::units::time::{Frequency, Time};
use crate::units::unitless::Dimensionless;

/// Binary operation of a derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `lhs * rhs`
    Multiply,
    /// `lhs / rhs`
    Divide,
}

impl Operation {
    /// Operator symbol (`*` or `/`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Dimension of the result, saturating at the exponent limits.
    pub const fn combine(self, lhs: DimensionVector, rhs: DimensionVector) -> DimensionVector {
        match self {
            Operation::Multiply => lhs.mul(rhs),
            Operation::Divide => lhs.div(rhs),
        }
    }

    /// Dimension of the result, or `None` when an exponent overflows.
    pub const fn checked_combine(
        self,
        lhs: DimensionVector,
        rhs: DimensionVector,
    ) -> Option<DimensionVector> {
        match self {
            Operation::Multiply => lhs.checked_mul(rhs),
            Operation::Divide => lhs.checked_div(rhs),
        }
    }

    /// Numeric result on standard-unit amounts.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "*" | "×" | "·" => Ok(Operation::Multiply),
            "/" | "÷" => Ok(Operation::Divide),
            other => Err(Error::InvalidArgument(format!(
                "unknown operation '{other}', expected '*' or '/'"
            ))),
        }
    }
}

/// `lhs <operation> rhs => output`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Derivation {
    lhs: QuantityKind,
    operation: Operation,
    rhs: QuantityKind,
    output: QuantityKind,
}

impl Derivation {
    /// Creates a rule without checking it; see [`Derivation::is_consistent`].
    pub const fn new(
        lhs: QuantityKind,
        operation: Operation,
        rhs: QuantityKind,
        output: QuantityKind,
    ) -> Self {
        Self {
            lhs,
            operation,
            rhs,
            output,
        }
    }

    /// Left operand kind.
    pub const fn lhs(&self) -> &QuantityKind {
        &self.lhs
    }

    /// Operation.
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Right operand kind.
    pub const fn rhs(&self) -> &QuantityKind {
        &self.rhs
    }

    /// Result kind.
    pub const fn output(&self) -> &QuantityKind {
        &self.output
    }

    /// `true` when the output dimension follows from the operand dimensions.
    pub const fn is_consistent(&self) -> bool {
        match self
            .operation
            .checked_combine(self.lhs.dimension(), self.rhs.dimension())
        {
            Some(dimension) => dimension.equals(self.output.dimension()),
            None => false,
        }
    }

    /// `true` when the rule covers operands of these dimensions.
    pub fn matches(&self, lhs: DimensionVector, operation: Operation, rhs: DimensionVector) -> bool {
        self.operation == operation
            && self.lhs.dimension() == lhs
            && self.rhs.dimension() == rhs
    }

    /// Applies the rule to two runtime measures.
    ///
    /// Fails with [`Error::IncompatibleQuantity`] when the operands are not of the rule's kinds.
    pub fn apply(&self, lhs: DynMeasure, rhs: DynMeasure) -> Result<DynMeasure> {
        if !self.matches(lhs.dimension(), self.operation, rhs.dimension()) {
            return Err(Error::incompatible_quantity(
                lhs.describe(),
                self.operation.symbol(),
                rhs.describe(),
            ));
        }
        Ok(DynMeasure::new(
            self.operation.apply(lhs.amount(), rhs.amount()),
            self.output.dimension(),
        ))
    }
}

impl Display for Derivation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {} {} => {}",
            self.lhs, self.operation, self.rhs, self.output
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in catalog
// ─────────────────────────────────────────────────────────────────────────────

crate::derivations! {
    // geometry
    Length * Length => Area,
    Length * Area => Volume,
    Area * Length => Volume,
    Area / Length => Length,
    Volume / Length => Area,
    Volume / Area => Length,

    // kinematics
    Length / Time => Velocity,
    Velocity * Time => Length,
    Time * Velocity => Length,
    Length / Velocity => Time,
    Velocity / Time => Acceleration,
    Acceleration * Time => Velocity,
    Time * Acceleration => Velocity,
    Velocity / Acceleration => Time,

    // dynamics
    Mass * Acceleration => Force,
    Acceleration * Mass => Force,
    Force / Mass => Acceleration,
    Force / Acceleration => Mass,
    Force * Length => Energy,
    Length * Force => Energy,
    Energy / Length => Force,
    Energy / Force => Length,
    Energy / Time => Power,
    Power * Time => Energy,
    Time * Power => Energy,
    Energy / Power => Time,

    // dosimetry
    Energy / Mass => AbsorbedDose,
    AbsorbedDose * Mass => Energy,
    Mass * AbsorbedDose => Energy,
    Energy / AbsorbedDose => Mass,
    AbsorbedDose / Time => AbsorbedDoseRate,
    AbsorbedDoseRate * Time => AbsorbedDose,
    Time * AbsorbedDoseRate => AbsorbedDose,
    AbsorbedDose / AbsorbedDoseRate => Time,

    // pressure and density
    Force / Area => Pressure,
    Pressure * Area => Force,
    Area * Pressure => Force,
    Force / Pressure => Area,
    Energy / Volume => Pressure,
    Pressure * Volume => Energy,
    Mass / Volume => Density,
    Density * Volume => Mass,
    Volume * Density => Mass,
    Mass / Density => Volume,

    // electricity
    ElectricCurrent * Time => ElectricCharge,
    Time * ElectricCurrent => ElectricCharge,
    ElectricCharge / Time => ElectricCurrent,
    ElectricCharge / ElectricCurrent => Time,

    // rotation
    Angle / Time => AngularVelocity,
    AngularVelocity * Time => Angle,
    Time * AngularVelocity => Angle,
    Angle / AngularVelocity => Time,

    // rates
    Dimensionless / Time => Frequency,
    Frequency * Time => Dimensionless,
    Time * Frequency => Dimensionless,
}
