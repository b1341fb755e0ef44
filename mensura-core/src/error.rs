//! Error type shared by every fallible operation in this crate.
//!
//! Typed arithmetic on [`Measure`](crate::Measure) never fails: mixing kinds is rejected by the compiler. Errors are
//! raised by the runtime paths (unit lookups, dynamic measures, registry and catalog construction) at the point of the
//! offending call and are never retried or swallowed.

/// Result alias used across `mensura-core`.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can go wrong when building units or combining measures at runtime.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A constructor received a value it cannot work with (zero or non-finite scale, malformed entry, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A unit of one quantity kind was used where a unit of another kind is required.
    #[error("unit '{unit}' measures {unit_kind}, expected a unit of {expected}")]
    IncompatibleUnit {
        /// Symbol of the offending unit.
        unit: String,
        /// Kind the unit belongs to.
        unit_kind: String,
        /// Kind that was required.
        expected: String,
    },

    /// An operator was applied to measures whose dimensions do not allow it.
    #[error("incompatible quantities: {lhs} {operation} {rhs}")]
    IncompatibleQuantity {
        /// Left operand (kind name or dimension).
        lhs: String,
        /// Operator symbol.
        operation: &'static str,
        /// Right operand (kind name or dimension).
        rhs: String,
    },

    /// Prefix or named factor that is not part of the closed factor tables.
    #[error("unknown prefix or factor '{0}'")]
    UnknownPrefix(String),

    /// Unit symbol that no registry entry answers to.
    #[error("unknown unit symbol '{0}'")]
    UnknownUnit(String),

    /// Quantity kind name that no registry entry answers to.
    #[error("unknown quantity kind '{0}'")]
    UnknownKind(String),

    /// Two units were registered under the same symbol.
    #[error("unit symbol '{0}' is already registered")]
    DuplicateUnit(String),

    /// A derivation rule whose output dimension does not follow from its operands.
    #[error("derivation {0} is dimensionally inconsistent")]
    InconsistentDerivation(String),

    /// The unit catalog could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn incompatible_quantity(
        lhs: impl ToString,
        operation: &'static str,
        rhs: impl ToString,
    ) -> Self {
        Self::IncompatibleQuantity {
            lhs: lhs.to_string(),
            operation,
            rhs: rhs.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_items() {
        let err = Error::IncompatibleUnit {
            unit: "s".into(),
            unit_kind: "Time".into(),
            expected: "Length".into(),
        };
        assert_eq!(
            err.to_string(),
            "unit 's' measures Time, expected a unit of Length"
        );

        let err = Error::incompatible_quantity("Length", "+", "Time");
        assert_eq!(err.to_string(), "incompatible quantities: Length + Time");

        assert_eq!(
            Error::UnknownPrefix("kibi".into()).to_string(),
            "unknown prefix or factor 'kibi'"
        );
    }
}
