//! Physical quantities with dimension-checked arithmetic and unit conversion.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core` plus the
//! predefined quantity kinds (length, mass, time, energy, absorbed dose, ...).
//!
//! The core idea is: a value is always a `Measure<K>`, where `K` is a zero-sized type naming a quantity kind. The
//! amount is stored in the kind's standard unit, so converting happens once on the way in and once on the way out,
//! and the compiler refuses to add metres to seconds.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds (you can't add metres to seconds).
//! - Converts between units of the same kind, including affine temperature scales.
//! - Derives the kind of products and quotients (`Length * Length -> Area`, `Energy / Mass -> AbsorbedDose`).
//! - Offers the same checks at runtime, with units looked up by symbol and extended from a TOML catalog.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: measures are backed by `f64`.
//! - Parsing arbitrary unit expressions such as `kg·m²/s²`; units are looked up by their exact symbol.
//!
//! # Quick start
//!
//! ```rust
//! use mensura::*;
//!
//! let d = Meters::from_unit(5.0, &KILOMETER).unwrap();
//! assert_eq!(d.amount(), 5000.0);
//!
//! let area: SquareMeters = Meters::new(10.0) * Meters::new(4.0);
//! assert_eq!(area.amount(), 40.0);
//!
//! let dose: Grays = Joules::new(100.0) / Kilograms::new(2.0);
//! assert_eq!(dose.to_string(), "50 Gy");
//!
//! let travelled: Meters = Seconds::new(3.0) * MetersPerSecond::new(2.0);
//! assert_eq!(travelled.amount(), 6.0);
//!
//! let ratio: Number = Meters::new(10.0) / Meters::new(2.0);
//! assert_eq!(ratio.amount(), 5.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Meters, Seconds};
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0); // cannot add different kinds
//! ```
//!
//! # Runtime checks
//!
//! ```rust
//! use mensura::{Error, Registry, LENGTH, TIME};
//!
//! let sum = LENGTH.measure(1.0).try_add(TIME.measure(1.0));
//! assert!(matches!(sum, Err(Error::IncompatibleQuantity { .. })));
//!
//! let v = Registry::global().convert(36.0, "km/h", "m/s").unwrap();
//! assert!((v - 10.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! Kinds are grouped by domain under modules (also re-exported at the crate root for convenience):
//!
//! - `mensura::unitless` (numbers, percent, ppm)
//! - `mensura::length` (length, area, volume)
//! - `mensura::mass` (mass, density)
//! - `mensura::time` (time, frequency)
//! - `mensura::mechanics` (velocity, acceleration, force, pressure, energy, power)
//! - `mensura::radiation` (absorbed dose and dose rate)
//! - `mensura::electric` (current, charge)
//! - `mensura::thermal` (temperature with Celsius/Fahrenheit)
//! - `mensura::substance`, `mensura::photometry`
//! - `mensura::angular` (angles with wrapping and trigonometry helpers)
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for measures; serialization is the raw standard amount unless
//!   `serde_with_unit` is used.
//! - `catalog` (default): TOML unit catalogs (implies `serde`).
//!
//! # Panics and errors
//!
//! Typed arithmetic does not fail; it follows IEEE-754 behavior. Runtime operations (unit lookups, dynamic
//! measures, registry and catalog construction) return [`Result`] with an [`Error`] naming the offending unit or
//! kinds.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to define quantity kind marker types.
///
/// This macro expands in terms of `crate::Kind`, `crate::QuantityKind` and `crate::Measure`, so it is intended for
/// use inside `mensura-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use mensura_derive::Kind;

pub use mensura_core::units::angular;
pub use mensura_core::units::electric;
pub use mensura_core::units::length;
pub use mensura_core::units::mass;
pub use mensura_core::units::mechanics;
pub use mensura_core::units::photometry;
pub use mensura_core::units::radiation;
pub use mensura_core::units::substance;
pub use mensura_core::units::thermal;
pub use mensura_core::units::time;
pub use mensura_core::units::unitless;

pub use mensura_core::units::angular::*;
pub use mensura_core::units::electric::*;
pub use mensura_core::units::length::*;
pub use mensura_core::units::mass::*;
pub use mensura_core::units::mechanics::*;
pub use mensura_core::units::photometry::*;
pub use mensura_core::units::radiation::*;
pub use mensura_core::units::substance::*;
pub use mensura_core::units::thermal::*;
pub use mensura_core::units::time::*;
pub use mensura_core::units::unitless::*;
