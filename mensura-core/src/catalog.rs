//! TOML unit catalogs.
//!
//! A catalog extends the built-in tables without recompiling: extra quantity kinds, extra units (plain scale, decimal
//! prefix, named factor, optional affine offset) and extra derivation rules.
//!
//! ```toml
//! [[kind]]
//! name = "Jerk"
//! unit = "m/s³"
//! dimension = { length = 1, time = -3 }
//!
//! [[unit]]
//! symbol = "furlong"
//! kind = "Length"
//! scale = 201.168
//!
//! [[unit]]
//! symbol = "kt"
//! kind = "Mass"
//! prefix = "kilo"
//! base = "t"
//!
//! [[derivation]]
//! lhs = "Acceleration"
//! op = "/"
//! rhs = "Time"
//! output = "Jerk"
//! ```
//!
//! Entries are resolved in file order against everything already in the [`RegistryBuilder`], so a unit may name a
//! kind declared earlier in the same file and a `base` may name a unit declared earlier. Registered entries live for
//! the rest of the process.

use crate::derived::Derivation;
use crate::dimension::{BaseDimension, DimensionVector};
use crate::error::{Error, Result};
use crate::kind::QuantityKind;
use crate::prefix::{NamedFactor, Prefix};
use crate::registry::RegistryBuilder;
use crate::unit::UnitDef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parsed catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// `[[kind]]` tables.
    #[serde(default, rename = "kind")]
    pub kinds: Vec<KindEntry>,
    /// `[[unit]]` tables.
    #[serde(default, rename = "unit")]
    pub units: Vec<UnitEntry>,
    /// `[[derivation]]` tables.
    #[serde(default, rename = "derivation")]
    pub derivations: Vec<DerivationEntry>,
}

/// A quantity kind declared by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindEntry {
    /// Kind name.
    pub name: String,
    /// Symbol of its standard unit.
    pub unit: String,
    /// Exponents keyed by base dimension name (`length`, `mass`, `time`, ...). Missing slots are zero.
    #[serde(default)]
    pub dimension: BTreeMap<String, i8>,
}

/// A unit declared by a catalog. Exactly one of `scale`, `prefix` and `factor` must be given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitEntry {
    /// Unit symbol.
    pub symbol: String,
    /// Name of the kind it measures.
    pub kind: String,
    /// Plain multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Decimal prefix name or symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Named non-decimal factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<String>,
    /// Affine offset in the standard unit, added to the offset of `base` when one is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Symbol of the unit the multiplier is relative to (defaults to the standard unit). An affine base keeps its
    /// offset, so `scale = 2.0, base = "°F"` makes `16` of the new unit read as `32 °F`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// A derivation rule declared by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DerivationEntry {
    /// Left operand kind name.
    pub lhs: String,
    /// `*` or `/`.
    pub op: String,
    /// Right operand kind name.
    pub rhs: String,
    /// Result kind name.
    pub output: String,
}

impl Catalog {
    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse unit catalog: {e}")))
    }

    /// Reads and parses a catalog file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read unit catalog {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serializes the catalog back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| Error::Config(format!("failed to write unit catalog: {e}")))
    }
}

impl KindEntry {
    /// Dimension vector described by the `dimension` table.
    pub fn dimension_vector(&self) -> Result<DimensionVector> {
        self.dimension
            .iter()
            .try_fold(DimensionVector::DIMENSIONLESS, |acc, (slot, &exponent)| {
                let base = BaseDimension::ALL
                    .iter()
                    .copied()
                    .find(|b| b.name() == slot.as_str())
                    .ok_or_else(|| {
                        Error::InvalidArgument(format!(
                            "kind '{}' has unknown base dimension '{slot}'",
                            self.name
                        ))
                    })?;
                Ok(acc.with_exponent(base, exponent))
            })
    }
}

impl RegistryBuilder {
    /// Adds every entry of `catalog`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`]: a unit entry gives none or several of `scale`, `prefix` and `factor`, has a
    ///   bad scale, or names a `base` of another kind; a kind names an unknown base dimension.
    /// * [`Error::UnknownPrefix`], [`Error::UnknownKind`], [`Error::UnknownUnit`]: an entry names something that
    ///   does not exist (yet).
    ///
    /// Kind, symbol and rule conflicts with existing entries are reported by [`RegistryBuilder::build`].
    pub fn catalog(mut self, catalog: &Catalog) -> Result<Self> {
        for entry in &catalog.kinds {
            let kind: &'static QuantityKind = Box::leak(Box::new(QuantityKind::new(
                leak_str(&entry.name),
                entry.dimension_vector()?,
                leak_str(&entry.unit),
            )));
            let standard: &'static UnitDef = Box::leak(Box::new(kind.standard_unit()));
            self = self.kind(kind).unit(standard);
        }

        for entry in &catalog.units {
            let unit = self.resolve_unit(entry)?;
            self = self.unit(Box::leak(Box::new(unit)));
        }

        for entry in &catalog.derivations {
            let rule = Derivation::new(
                *self.require(&entry.lhs)?,
                entry.op.parse()?,
                *self.require(&entry.rhs)?,
                *self.require(&entry.output)?,
            );
            self = self.derivation(rule);
        }

        log::debug!(
            "catalog loaded: {} kinds, {} units, {} derivations",
            catalog.kinds.len(),
            catalog.units.len(),
            catalog.derivations.len()
        );
        Ok(self)
    }

    fn require(&self, name: &str) -> Result<&'static QuantityKind> {
        self.find_kind(name)
            .ok_or_else(|| Error::UnknownKind(name.to_string()))
    }

    fn resolve_unit(&self, entry: &UnitEntry) -> Result<UnitDef> {
        let kind = self.require(&entry.kind)?;

        let factor = match (&entry.scale, &entry.prefix, &entry.factor) {
            (Some(scale), None, None) => *scale,
            (None, Some(prefix), None) => prefix.parse::<Prefix>()?.factor(),
            (None, None, Some(factor)) => factor.parse::<NamedFactor>()?.factor(),
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "unit '{}' needs exactly one of 'scale', 'prefix' or 'factor'",
                    entry.symbol
                )))
            }
        };

        // `1 symbol == factor base`; the base unit's own offset carries over.
        let (scale, base_offset) = match &entry.base {
            None => (factor, 0.0),
            Some(symbol) => {
                let base = self
                    .find_unit(symbol)
                    .ok_or_else(|| Error::UnknownUnit(symbol.clone()))?;
                if base.kind() != kind {
                    return Err(Error::InvalidArgument(format!(
                        "unit '{}' of {} cannot be based on '{}', a unit of {}",
                        entry.symbol,
                        kind.name(),
                        symbol,
                        base.kind().name()
                    )));
                }
                (factor * base.scale(), base.offset())
            }
        };

        UnitDef::try_affine(
            kind,
            leak_str(&entry.symbol),
            scale,
            base_offset + entry.offset.unwrap_or(0.0),
        )
    }
}

fn leak_str(s: &str) -> &'static str {
    Box::leak(s.to_owned().into_boxed_str())
}
