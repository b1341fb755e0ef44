//! Runtime lookup tables for kinds, units and derivation rules.
//!
//! A [`Registry`] answers the questions the typed layer settles at compile time: which unit does a symbol name,
//! which kind owns a dimension vector, and what does `A * B` produce. It is immutable once built; extra kinds, units
//! and rules are added through a [`RegistryBuilder`] (directly or from a TOML [`Catalog`](crate::Catalog)).
//!
//! [`Registry::global`] holds every built-in kind, unit and catalog rule. It is built on first use and never
//! modified afterwards.
//!
//! ```rust
//! use mensura_core::Registry;
//!
//! let registry = Registry::global();
//! assert_eq!(registry.convert(5.0, "km", "m").unwrap(), 5000.0);
//! assert_eq!(registry.unit("Gy").unwrap().kind().name(), "AbsorbedDose");
//! ```

use crate::derived::{Derivation, Operation, CATALOG};
use crate::dimension::DimensionVector;
use crate::dynamic::{DynMeasure, MeasureDisplay};
use crate::error::{Error, Result};
use crate::kind::QuantityKind;
use crate::unit::UnitDef;
use crate::units;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static GLOBAL: Lazy<Registry> = Lazy::new(|| {
    RegistryBuilder::with_builtins()
        .build()
        .expect("built-in unit tables are consistent")
});

type RuleKey = (DimensionVector, Operation, DimensionVector);

/// Immutable index of quantity kinds, units and derivation rules.
#[derive(Debug, Clone)]
pub struct Registry {
    kinds: Vec<&'static QuantityKind>,
    by_name: HashMap<&'static str, &'static QuantityKind>,
    by_dimension: HashMap<DimensionVector, &'static QuantityKind>,
    units: Vec<&'static UnitDef>,
    by_symbol: HashMap<&'static str, &'static UnitDef>,
    derivations: HashMap<RuleKey, Derivation>,
}

impl Registry {
    /// The process-wide registry of built-in kinds, units and rules.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Starts an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────

    /// Kind registered under `name`.
    pub fn kind(&self, name: &str) -> Result<&'static QuantityKind> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownKind(name.to_string()))
    }

    /// Canonical kind for a dimension vector: the first one registered with it.
    pub fn kind_for(&self, dimension: &DimensionVector) -> Option<&'static QuantityKind> {
        self.by_dimension.get(dimension).copied()
    }

    /// Unit registered under `symbol`.
    pub fn unit(&self, symbol: &str) -> Result<&'static UnitDef> {
        self.by_symbol
            .get(symbol)
            .copied()
            .ok_or_else(|| Error::UnknownUnit(symbol.to_string()))
    }

    /// Units of `kind`, in registration order.
    pub fn units_of<'a>(&'a self, kind: &'a QuantityKind) -> impl Iterator<Item = &'static UnitDef> + 'a {
        self.units.iter().copied().filter(move |unit| unit.kind() == kind)
    }

    /// Rule for `lhs <operation> rhs`, if one is registered.
    pub fn derivation(
        &self,
        lhs: &QuantityKind,
        operation: Operation,
        rhs: &QuantityKind,
    ) -> Option<&Derivation> {
        self.derivations
            .get(&(lhs.dimension(), operation, rhs.dimension()))
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static QuantityKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Registered units, in registration order.
    pub fn units(&self) -> impl Iterator<Item = &'static UnitDef> + '_ {
        self.units.iter().copied()
    }

    /// Registered rules, in no particular order.
    pub fn derivations(&self) -> impl Iterator<Item = &Derivation> {
        self.derivations.values()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Services
    // ─────────────────────────────────────────────────────────────────────────

    /// A runtime measure from an amount and a unit symbol.
    pub fn measure(&self, amount: f64, symbol: &str) -> Result<DynMeasure> {
        Ok(DynMeasure::from_unit(amount, self.unit(symbol)?))
    }

    /// Converts `amount` between two unit symbols of the same kind.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        self.unit(from)?.convert_to(amount, self.unit(to)?)
    }

    /// Product of two measures, restricted to the registered rules.
    pub fn multiply(&self, lhs: DynMeasure, rhs: DynMeasure) -> Result<DynMeasure> {
        self.derive(lhs, Operation::Multiply, rhs)
    }

    /// Quotient of two measures, restricted to the registered rules.
    ///
    /// Two measures of the same dimension always divide to a dimensionless value.
    pub fn divide(&self, lhs: DynMeasure, rhs: DynMeasure) -> Result<DynMeasure> {
        if lhs.dimension() == rhs.dimension() {
            return Ok(DynMeasure::new(
                lhs.amount() / rhs.amount(),
                DimensionVector::DIMENSIONLESS,
            ));
        }
        self.derive(lhs, Operation::Divide, rhs)
    }

    /// Formats `measure` with this registry's kinds, so kinds added by a catalog name their results.
    ///
    /// The `Display` impl of [`DynMeasure`] itself only knows the global registry.
    pub fn display<'a>(&'a self, measure: &'a DynMeasure) -> MeasureDisplay<'a> {
        MeasureDisplay::new(measure, self)
    }

    fn derive(&self, lhs: DynMeasure, operation: Operation, rhs: DynMeasure) -> Result<DynMeasure> {
        if operation
            .checked_combine(lhs.dimension(), rhs.dimension())
            .is_none()
        {
            return Err(Error::InvalidArgument(format!(
                "dimension exponent out of range in {} {} {}",
                self.describe(lhs.dimension()),
                operation,
                self.describe(rhs.dimension())
            )));
        }
        match self.derivations.get(&(lhs.dimension(), operation, rhs.dimension())) {
            Some(rule) => rule.apply(lhs, rhs),
            None => Err(Error::incompatible_quantity(
                self.describe(lhs.dimension()),
                operation.symbol(),
                self.describe(rhs.dimension()),
            )),
        }
    }

    fn describe(&self, dimension: DimensionVector) -> String {
        match self.kind_for(&dimension) {
            Some(kind) => kind.name().to_string(),
            None => dimension.to_string(),
        }
    }
}

/// Collects kinds, units and rules, then validates them into a [`Registry`].
///
/// Nothing is checked until [`RegistryBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    kinds: Vec<&'static QuantityKind>,
    units: Vec<&'static UnitDef>,
    derivations: Vec<Derivation>,
}

impl RegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder pre-loaded with every built-in kind, unit and rule.
    pub fn with_builtins() -> Self {
        Self::new()
            .kinds(units::KINDS.iter().copied())
            .units(units::all_units())
            .derivations(CATALOG.iter().copied())
    }

    /// Adds a kind.
    pub fn kind(mut self, kind: &'static QuantityKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Adds several kinds.
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = &'static QuantityKind>) -> Self {
        self.kinds.extend(kinds);
        self
    }

    /// Adds a unit. Its kind must be registered by the time [`build`](Self::build) runs.
    pub fn unit(mut self, unit: &'static UnitDef) -> Self {
        self.units.push(unit);
        self
    }

    /// Adds several units.
    pub fn units(mut self, units: impl IntoIterator<Item = &'static UnitDef>) -> Self {
        self.units.extend(units);
        self
    }

    /// Adds a derivation rule.
    pub fn derivation(mut self, rule: Derivation) -> Self {
        self.derivations.push(rule);
        self
    }

    /// Adds several derivation rules.
    pub fn derivations(mut self, rules: impl IntoIterator<Item = Derivation>) -> Self {
        self.derivations.extend(rules);
        self
    }

    /// Kind added so far under `name`.
    #[cfg_attr(not(feature = "catalog"), allow(dead_code))]
    pub(crate) fn find_kind(&self, name: &str) -> Option<&'static QuantityKind> {
        self.kinds.iter().copied().find(|kind| kind.name() == name)
    }

    /// Unit added so far under `symbol`.
    #[cfg_attr(not(feature = "catalog"), allow(dead_code))]
    pub(crate) fn find_unit(&self, symbol: &str) -> Option<&'static UnitDef> {
        self.units.iter().copied().find(|unit| unit.symbol() == symbol)
    }

    /// Validates everything and builds the registry.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`]: two different kinds share a name, or two rules cover the same operands with
    ///   different outputs.
    /// * [`Error::UnknownKind`]: a unit or rule refers to a kind that was not added.
    /// * [`Error::DuplicateUnit`]: two different units share a symbol.
    /// * [`Error::InconsistentDerivation`]: a rule's output dimension does not follow from its operands.
    ///
    /// Re-adding an identical kind, unit or rule is harmless. When two kinds share a dimension vector the first one
    /// stays canonical for [`Registry::kind_for`].
    pub fn build(self) -> Result<Registry> {
        let mut registry = Registry {
            kinds: Vec::with_capacity(self.kinds.len()),
            by_name: HashMap::with_capacity(self.kinds.len()),
            by_dimension: HashMap::with_capacity(self.kinds.len()),
            units: Vec::with_capacity(self.units.len()),
            by_symbol: HashMap::with_capacity(self.units.len()),
            derivations: HashMap::with_capacity(self.derivations.len()),
        };

        for kind in self.kinds {
            if let Some(existing) = registry.by_name.get(kind.name()) {
                if *existing == kind {
                    continue;
                }
                return Err(Error::InvalidArgument(format!(
                    "quantity kind '{}' is already registered with another definition",
                    kind.name()
                )));
            }
            match registry.by_dimension.get(&kind.dimension()) {
                Some(canonical) => log::warn!(
                    "quantity kind '{}' shares dimension {} with '{}'; '{}' stays canonical",
                    kind.name(),
                    kind.dimension(),
                    canonical.name(),
                    canonical.name()
                ),
                None => {
                    registry.by_dimension.insert(kind.dimension(), kind);
                }
            }
            registry.by_name.insert(kind.name(), kind);
            registry.kinds.push(kind);
        }

        for unit in self.units {
            registry.require_kind(unit.kind())?;
            if let Some(existing) = registry.by_symbol.get(unit.symbol()) {
                if *existing == unit {
                    continue;
                }
                return Err(Error::DuplicateUnit(unit.symbol().to_string()));
            }
            registry.by_symbol.insert(unit.symbol(), unit);
            registry.units.push(unit);
        }

        for rule in self.derivations {
            if !rule.is_consistent() {
                return Err(Error::InconsistentDerivation(rule.to_string()));
            }
            registry.require_kind(rule.lhs())?;
            registry.require_kind(rule.rhs())?;
            registry.require_kind(rule.output())?;
            let key = (rule.lhs().dimension(), rule.operation(), rule.rhs().dimension());
            match registry.derivations.get(&key) {
                Some(existing) if existing.output() == rule.output() => {}
                Some(existing) => {
                    return Err(Error::InvalidArgument(format!(
                        "derivation {rule} conflicts with {existing}"
                    )))
                }
                None => {
                    registry.derivations.insert(key, rule);
                }
            }
        }

        log::debug!(
            "registry built: {} kinds, {} units, {} derivations",
            registry.kinds.len(),
            registry.units.len(),
            registry.derivations.len()
        );
        Ok(registry)
    }
}

impl Registry {
    fn require_kind(&self, kind: &QuantityKind) -> Result<()> {
        match self.by_name.get(kind.name()) {
            Some(registered) if *registered == kind => Ok(()),
            _ => Err(Error::UnknownKind(kind.name().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{AREA, KILOMETER, LENGTH, METER};
    use crate::units::mass::MASS;
    use crate::units::mechanics::{ENERGY, VELOCITY};
    use crate::units::radiation::ABSORBED_DOSE;
    use crate::units::thermal::TEMPERATURE;
    use crate::units::time::TIME;
    use approx::assert_relative_eq;

    static SPEED: QuantityKind = QuantityKind::new("Speed", DimensionVector::VELOCITY, "m/s");
    static BOGUS_LENGTH: QuantityKind = QuantityKind::new("Length", DimensionVector::TIME, "m");
    static ORPHAN: QuantityKind = QuantityKind::new("Orphan", DimensionVector::LENGTH, "o");
    static ORPHAN_UNIT: UnitDef = UnitDef::standard(&ORPHAN, "o");
    static CLASHING_KM: UnitDef = UnitDef::scaled(&LENGTH, "km", 999.0);

    // ─────────────────────────────────────────────────────────────────────────────
    // Global registry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn global_holds_builtins() {
        let registry = Registry::global();
        assert_eq!(registry.kinds().count(), units::KINDS.len());
        assert_eq!(registry.units().count(), units::all_units().count());
        assert_eq!(registry.derivations().count(), CATALOG.len());
        assert_eq!(registry.kind("Length").unwrap(), &LENGTH);
        assert_eq!(registry.kind_for(&DimensionVector::AREA), Some(&AREA));
        assert!(core::ptr::eq(registry.unit("km").unwrap(), &KILOMETER));
    }

    #[test]
    fn lookups_fail_on_unknown_names() {
        let registry = Registry::global();
        assert_eq!(
            registry.unit("parsec").unwrap_err(),
            Error::UnknownUnit("parsec".into())
        );
        assert_eq!(
            registry.kind("Jerk").unwrap_err(),
            Error::UnknownKind("Jerk".into())
        );
        assert!(registry.kind_for(&DimensionVector::LENGTH.pow(4)).is_none());
    }

    #[test]
    fn units_of_kind() {
        let symbols: Vec<_> = Registry::global()
            .units_of(&TEMPERATURE)
            .map(|u| u.symbol())
            .collect();
        assert_eq!(symbols[0], "K");
        assert!(symbols.contains(&"°C"));
        assert!(symbols.contains(&"°F"));
    }

    #[test]
    fn conversion_service() {
        let registry = Registry::global();
        assert_eq!(registry.convert(5.0, "km", "m").unwrap(), 5000.0);
        assert_relative_eq!(registry.convert(1.0, "mi", "km").unwrap(), 1.609_344, max_relative = 1e-12);
        assert_relative_eq!(registry.convert(100.0, "°C", "°F").unwrap(), 212.0, max_relative = 1e-12);
        assert!(matches!(
            registry.convert(1.0, "km", "s"),
            Err(Error::IncompatibleUnit { .. })
        ));
        assert_eq!(registry.measure(2.0, "km").unwrap(), LENGTH.measure(2000.0));
    }

    #[test]
    fn strict_multiplication_and_division() {
        let registry = Registry::global();
        let dose = registry
            .divide(ENERGY.measure(100.0), MASS.measure(2.0))
            .unwrap();
        assert_eq!(dose, ABSORBED_DOSE.measure(50.0));

        let v = registry.divide(LENGTH.measure(6.0), TIME.measure(3.0)).unwrap();
        assert_eq!(v, VELOCITY.measure(2.0));

        let n = registry.divide(LENGTH.measure(10.0), LENGTH.measure(2.0)).unwrap();
        assert!(n.dimension().is_dimensionless());
        assert_eq!(n.amount(), 5.0);

        let err = registry
            .multiply(MASS.measure(1.0), TIME.measure(1.0))
            .unwrap_err();
        assert_eq!(err, Error::incompatible_quantity("Mass", "*", "Time"));

        let rule = registry
            .derivation(&LENGTH, Operation::Multiply, &LENGTH)
            .unwrap();
        assert_eq!(rule.output(), &AREA);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Builder validation
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn empty_builder_builds_empty_registry() {
        let registry = RegistryBuilder::new().build().unwrap();
        assert_eq!(registry.kinds().count(), 0);
        assert!(registry.unit("m").is_err());
    }

    #[test]
    fn unit_without_registered_kind_is_rejected() {
        let err = Registry::builder().unit(&ORPHAN_UNIT).build().unwrap_err();
        assert_eq!(err, Error::UnknownKind("Orphan".into()));
    }

    #[test]
    fn clashing_symbols_are_rejected() {
        let err = RegistryBuilder::with_builtins()
            .unit(&CLASHING_KM)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::DuplicateUnit("km".into()));
    }

    #[test]
    fn repeated_identical_entries_are_harmless() {
        let registry = RegistryBuilder::with_builtins()
            .kind(&LENGTH)
            .unit(&METER)
            .derivations(CATALOG.iter().copied())
            .build()
            .unwrap();
        assert_eq!(registry.kinds().count(), units::KINDS.len());
        assert_eq!(registry.derivations().count(), CATALOG.len());
    }

    #[test]
    fn conflicting_kind_definitions_are_rejected() {
        let err = RegistryBuilder::with_builtins()
            .kind(&BOGUS_LENGTH)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn first_kind_stays_canonical() {
        let registry = RegistryBuilder::with_builtins().kind(&SPEED).build().unwrap();
        assert_eq!(registry.kind("Speed").unwrap(), &SPEED);
        assert_eq!(registry.kind_for(&DimensionVector::VELOCITY), Some(&VELOCITY));
    }

    #[test]
    fn inconsistent_rule_is_rejected() {
        let err = RegistryBuilder::with_builtins()
            .derivation(Derivation::new(LENGTH, Operation::Multiply, TIME, AREA))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::InconsistentDerivation("Length * Time => Area".into())
        );
    }

    #[test]
    fn rule_with_unregistered_kind_is_rejected() {
        let err = Registry::builder()
            .kind(&LENGTH)
            .derivation(Derivation::new(LENGTH, Operation::Multiply, LENGTH, AREA))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::UnknownKind("Area".into()));
    }
}
