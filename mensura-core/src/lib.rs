//! Core engine for dimensionally checked physical quantities.
//!
//! `mensura-core` models a physical value as an amount tied to a *quantity kind*:
//!
//! - A [`DimensionVector`] holds the exponents of the base dimensions; two quantities are compatible exactly when
//!   their vectors are equal.
//! - A [`QuantityKind`] names a vector and its standard unit; a [`UnitDef`] scales (and, for temperature, offsets)
//!   amounts to and from that standard unit.
//! - A [`Measure<K>`] stores its amount in the standard unit of the kind `K`, so same-kind arithmetic never needs a
//!   conversion and cross-kind arithmetic is only possible where a derivation rule exists.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need direct access to these primitives.
//!
//! # Two layers
//!
//! The **typed layer** ([`Measure<K>`], [`Reading<K>`]) rejects `Length + Time` at compile time. Cross-kind products
//! and quotients (`Length * Length -> Area`, `Energy / Mass -> AbsorbedDose`, ...) come from the
//! [`derivations!`] catalog.
//!
//! The **runtime layer** ([`DynMeasure`], [`Registry`]) carries the dimension vector as data. It reports the same
//! mistakes as [`Error`] values and can look units up by symbol, including units declared in a TOML [`Catalog`].
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::length::{Meters, KILOMETER};
//! use mensura_core::mass::Kilograms;
//! use mensura_core::mechanics::Joules;
//! use mensura_core::radiation::Grays;
//!
//! let d = Meters::from_unit(5.0, &KILOMETER).unwrap();
//! assert_eq!(d.amount(), 5000.0);
//!
//! let dose: Grays = Joules::new(100.0) / Kilograms::new(2.0);
//! assert_eq!(dose.to_string(), "50 Gy");
//! ```
//!
//! Runtime lookups go through the global registry:
//!
//! ```rust
//! use mensura_core::Registry;
//!
//! let v = Registry::global()
//!     .divide(
//!         Registry::global().measure(6.0, "m").unwrap(),
//!         Registry::global().measure(3.0, "s").unwrap(),
//!     )
//!     .unwrap();
//! assert_eq!(v.to_string(), "2 m/s");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for measures (raw standard amount) and dimension vectors, plus the
//!   [`serde_with_unit`] helper module.
//! - `catalog` (default, implies `serde`): TOML unit catalogs through [`Catalog`].
//!
//! # Panics and errors
//!
//! Typed arithmetic is pure `f64` computation and follows IEEE-754 (NaN and infinities propagate). Every runtime
//! failure is an [`Error`] returned at the point of the offending call.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod derived;
mod dimension;
mod dynamic;
mod error;
mod kind;
mod macros;
mod measure;
mod reading;
mod registry;
mod unit;

#[cfg(feature = "catalog")]
mod catalog;

/// Decimal prefixes and named conversion factors.
pub mod prefix;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use derived::{Derivation, Operation, CATALOG};
pub use dimension::{BaseDimension, DimensionVector};
pub use dynamic::{DynMeasure, MeasureDisplay};
pub use error::{Error, Result};
pub use kind::{Kind, QuantityKind};
pub use measure::{Measure, Number};
pub use reading::Reading;
pub use registry::{Registry, RegistryBuilder};
pub use unit::UnitDef;

#[cfg(feature = "catalog")]
pub use catalog::{Catalog, DerivationEntry, KindEntry, UnitEntry};

#[cfg(feature = "serde")]
pub use measure::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantity modules (grouped by domain)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantity kinds and units (grouped by domain).
///
/// These are defined in `mensura-core` so the derive can implement `Display` for `Measure<Kind>` without running
/// into Rust's orphan rules.
pub mod units;

pub use units::angular;
pub use units::electric;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::photometry;
pub use units::radiation;
pub use units::substance;
pub use units::thermal;
pub use units::time;
pub use units::unitless;

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_derive::Kind;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test kind and units for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
    #[kind(
        name = "Exposure",
        descriptor = EXPOSURE,
        dimension = DimensionVector::LUMINOUS_INTENSITY.mul(DimensionVector::TIME),
        unit = "cd·s"
    )]
    struct Exposure;

    static CANDELA_HOUR: UnitDef = UnitDef::scaled(&EXPOSURE, "cd·h", 3600.0);
    static HALF_EXPOSURE: UnitDef = UnitDef::scaled(&EXPOSURE, "½cd·s", 0.5);

    type Ex = Measure<Exposure>;

    // ─────────────────────────────────────────────────────────────────────────────
    // User-defined kinds
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn derive_builds_descriptor() {
        assert_eq!(Exposure::KIND.name(), "Exposure");
        assert_eq!(EXPOSURE.standard_symbol(), "cd·s");
        assert!(core::ptr::eq(Exposure::descriptor(), &EXPOSURE));
        assert_eq!(Ex::new(2.0).to_string(), "2 cd·s");
    }

    #[test]
    fn conversion_through_user_units() {
        let e = Ex::from_unit(1.0, &CANDELA_HOUR).unwrap();
        assert_eq!(e.amount(), 3600.0);
        assert_eq!(e.amount_in(&HALF_EXPOSURE).unwrap(), 7200.0);
        assert_eq!(CANDELA_HOUR.convert_to(2.0, &HALF_EXPOSURE).unwrap(), 14_400.0);
    }

    #[test]
    fn user_units_reject_foreign_kinds() {
        let err = Ex::from_unit(1.0, &length::METER).unwrap_err();
        assert_eq!(
            err,
            Error::IncompatibleUnit {
                unit: "m".into(),
                unit_kind: "Length".into(),
                expected: "Exposure".into(),
            }
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Measure core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn measure_constants() {
        assert_eq!(Ex::ZERO.amount(), 0.0);
        assert!(Ex::NAN.amount().is_nan());
        assert!(Ex::EPSILON.amount() > 0.0);
    }

    #[test]
    fn operators() {
        let mut e = Ex::new(10.0);
        e += Ex::new(5.0);
        e -= Ex::new(3.0);
        assert_eq!(e, 12.0);
        assert_eq!((e * 2.0).amount(), 24.0);
        assert_eq!((2.0 * e).amount(), 24.0);
        assert_eq!((e / 4.0).amount(), 3.0);
        assert_eq!((e % 5.0).amount(), 2.0);
        assert_eq!((-e).amount(), -12.0);
        assert_eq!((e / Ex::new(4.0)).amount(), 3.0);
        assert!(Ex::new(1.0) < Ex::new(2.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Runtime layer with a user kind
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn custom_registry_with_user_kind() {
        let registry = RegistryBuilder::with_builtins()
            .kind(&EXPOSURE)
            .units([&CANDELA_HOUR, &HALF_EXPOSURE])
            .derivation(Derivation::new(
                photometry::LUMINOUS_INTENSITY,
                Operation::Multiply,
                time::TIME,
                Exposure::KIND,
            ))
            .build()
            .unwrap();

        assert_eq!(registry.convert(1.0, "cd·h", "cd·s").unwrap(), 3600.0);
        let e = registry
            .multiply(
                registry.measure(2.0, "cd").unwrap(),
                registry.measure(1.0, "min").unwrap(),
            )
            .unwrap();
        assert_eq!(e.amount(), 120.0);
        assert_eq!(registry.kind_for(&e.dimension()), Some(&EXPOSURE));

        // The global registry does not know the user kind; the building registry does.
        assert!(e.is_compound());
        assert_eq!(e.to_string(), "120 s·cd");
        assert_eq!(registry.display(&e).to_string(), "120 cd·s");
        assert_eq!(registry.display(&registry.measure(2.0, "m").unwrap()).to_string(), "2 m");
        assert!(e.downcast::<Exposure>().is_ok());
    }
}
