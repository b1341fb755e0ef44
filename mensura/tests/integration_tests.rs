//! Integration-level tests for the `mensura` facade crate.

use mensura::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn kilometers_to_meters() {
    let d = Meters::from_unit(5.0, &KILOMETER).unwrap();
    assert_eq!(d.amount(), 5000.0);
    assert_eq!(d.amount_in(&METER).unwrap(), 5000.0);
    assert_eq!(d.to_string(), "5000 m");
}

#[test]
fn smoke_test_time() {
    let day = Seconds::from_unit(1.0, &DAY).unwrap();
    assert_abs_diff_eq!(day.amount(), 86_400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(day.amount_in(&HOUR).unwrap(), 24.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_mass() {
    let m = Kilograms::from_unit(1.0, &POUND).unwrap();
    assert_relative_eq!(m.amount(), 0.453_592_37, max_relative = 1e-12);
    assert_relative_eq!(Kilograms::new(1.0).amount_in(&GRAM).unwrap(), 1000.0, max_relative = 1e-12);
}

#[test]
fn smoke_test_temperature() {
    let t = Kelvins::from_unit(37.0, &CELSIUS).unwrap();
    assert_abs_diff_eq!(t.amount(), 310.15, epsilon = 1e-9);
    assert_abs_diff_eq!(t.amount_in(&FAHRENHEIT).unwrap(), 98.6, epsilon = 1e-9);
}

#[test]
fn smoke_test_angular() {
    let a = Radians::from_unit(180.0, &DEGREE).unwrap();
    assert_abs_diff_eq!(a.amount(), std::f64::consts::PI, epsilon = 1e-12);
    assert_abs_diff_eq!(a.sin(), 0.0, epsilon = 1e-12);
}

#[test]
fn wrong_unit_is_rejected() {
    let err = Meters::from_unit(1.0, &SECOND).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unit 's' measures Time, expected a unit of Length"
    );
    assert!(matches!(
        KILOMETER.convert_to(1.0, &HOUR),
        Err(Error::IncompatibleUnit { .. })
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn area_from_lengths() {
    let area: SquareMeters = Meters::new(10.0) * Meters::new(4.0);
    assert_eq!(area.amount(), 40.0);
    assert_eq!(area.to_string(), "40 m²");
}

#[test]
fn dose_from_energy_and_mass() {
    let dose: Grays = Joules::new(100.0) / Kilograms::new(2.0);
    assert_eq!(dose.amount(), 50.0);
    assert_eq!(dose.kind().name(), "AbsorbedDose");
}

#[test]
fn length_from_time_and_velocity() {
    let d: Meters = Seconds::new(3.0) * MetersPerSecond::new(2.0);
    assert_eq!(d.amount(), 6.0);
}

#[test]
fn same_kind_division_is_a_number() {
    let n: Number = Meters::new(10.0) / Meters::new(2.0);
    assert_eq!(n.amount(), 5.0);
    assert!(n.dimension().is_dimensionless());
    assert_eq!(f64::from(n), 5.0);
}

#[test]
fn mixed_units_add_in_standard_form() {
    let total = Meters::from_unit(1.0, &KILOMETER).unwrap() + Meters::from_unit(250.0, &CENTIMETER).unwrap();
    assert_relative_eq!(total.amount(), 1002.5, max_relative = 1e-12);
}

#[test]
fn equality_is_exact_in_standard_form() {
    let a = Meters::from_unit(1.0, &KILOMETER).unwrap();
    let b = Meters::from_unit(1000.0, &METER).unwrap();
    assert_eq!(a, b);
    assert!(Meters::new(1.0) < Meters::new(1.0 + 1e-9));
}

#[test]
fn catalog_laws() {
    let volume = Meters::new(2.0) * SquareMeters::new(3.0);
    assert_eq!(volume, CubicMeters::new(6.0));
    assert_eq!(SquareMeters::new(6.0) / Meters::new(3.0), Meters::new(2.0));
    assert_eq!(Joules::new(10.0) / Meters::new(5.0), Newtons::new(2.0));
    assert_eq!(Seconds::new(10.0) * GraysPerSecond::new(0.1), Grays::new(1.0));
    assert_eq!(
        MetersPerSecond::new(9.0) / Seconds::new(3.0),
        MetersPerSecondSquared::new(3.0)
    );
}

#[test]
fn dose_rate_over_a_shift() {
    let rate = GraysPerSecond::from_unit(2.5, &MICROGRAY_PER_HOUR).unwrap();
    let shift = Seconds::from_unit(8.0, &HOUR).unwrap();
    let dose: Grays = rate * shift;
    assert_relative_eq!(dose.amount_in(&MICROGRAY).unwrap(), 20.0, max_relative = 1e-12);
}

#[test]
fn kinetic_energy() {
    let m = Kilograms::new(1200.0);
    let v = MetersPerSecond::from_unit(90.0, &KILOMETER_PER_HOUR).unwrap();
    let a: MetersPerSecondSquared = v / Seconds::new(1.0);
    let f: Newtons = m * a;
    let e: Joules = f * Meters::new(0.5 * v.amount());
    assert_relative_eq!(e.amount_in(&KILOJOULE).unwrap(), 375.0, max_relative = 1e-12);
}

#[test]
fn readings_keep_their_unit() {
    let leg = Meters::new(1500.0).in_unit(&KILOMETER).unwrap();
    let walked = leg + Meters::new(500.0);
    assert_eq!(walked.to_string(), "2 km");
    assert_eq!(walked.measure(), Meters::new(2000.0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime layer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dynamic_measures_reject_mixed_kinds() {
    let d = LENGTH.measure(1.0);
    let t = TIME.measure(1.0);
    assert!(matches!(d.try_add(t), Err(Error::IncompatibleQuantity { .. })));
    assert!(matches!(
        LENGTH.measure_in(1.0, &SECOND),
        Err(Error::IncompatibleUnit { .. })
    ));
}

#[test]
fn dynamic_scenarios() {
    let registry = Registry::global();

    let area = registry
        .multiply(registry.measure(10.0, "m").unwrap(), registry.measure(4.0, "m").unwrap())
        .unwrap();
    assert_eq!(area.kind(), Some(&AREA));
    assert_eq!(area.amount(), 40.0);

    let dose = registry
        .divide(registry.measure(100.0, "J").unwrap(), registry.measure(2.0, "kg").unwrap())
        .unwrap();
    assert_eq!(dose.to_string(), "50 Gy");

    let d = registry
        .multiply(registry.measure(3.0, "s").unwrap(), registry.measure(2.0, "m/s").unwrap())
        .unwrap();
    assert_eq!(d.downcast::<Length>().unwrap(), Meters::new(6.0));

    let n = registry
        .divide(registry.measure(10.0, "m").unwrap(), registry.measure(2.0, "m").unwrap())
        .unwrap();
    assert_eq!(n.kind(), Some(&NUMBER));
    assert_eq!(n.amount(), 5.0);
}

#[test]
fn automatic_lookup_falls_back_to_compounds() {
    let cube = TIME.measure(1.0) * TIME.measure(1.0) * TIME.measure(1.0);
    let jerk = LENGTH.measure(1.0) / cube;
    assert!(jerk.is_compound());
    assert_eq!(jerk.to_string(), "1 m·s⁻³");
    assert!(LENGTH.measure(1.0).checked_div(cube).is_err());
}

#[test]
fn unknown_symbols_are_reported() {
    assert_eq!(
        Registry::global().unit("parsec").unwrap_err(),
        Error::UnknownUnit("parsec".into())
    );
    assert_eq!(
        UnitDef::with_prefix_name(&LENGTH, "Xm", "xenna").unwrap_err(),
        Error::UnknownPrefix("xenna".into())
    );
}

#[cfg(feature = "catalog")]
#[test]
fn catalog_extends_a_registry() {
    let catalog = Catalog::from_toml_str(
        r#"
        [[kind]]
        name = "Jerk"
        unit = "m/s³"
        dimension = { length = 1, time = -3 }

        [[unit]]
        symbol = "furlong"
        kind = "Length"
        scale = 201.168

        [[derivation]]
        lhs = "Acceleration"
        op = "/"
        rhs = "Time"
        output = "Jerk"
        "#,
    )
    .unwrap();
    let registry = RegistryBuilder::with_builtins()
        .catalog(&catalog)
        .unwrap()
        .build()
        .unwrap();

    assert_relative_eq!(registry.convert(8.0, "furlong", "mi").unwrap(), 1.0, max_relative = 1e-12);
    let j = registry
        .divide(registry.measure(6.0, "m/s²").unwrap(), registry.measure(2.0, "s").unwrap())
        .unwrap();
    assert_eq!(registry.kind_for(&j.dimension()).unwrap().name(), "Jerk");
    assert_eq!(j.to_string(), "3 m·s⁻³");
    assert_eq!(registry.display(&j).to_string(), "3 m/s³");
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[test]
fn serde_with_unit_reads_any_unit_of_the_kind() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Sample {
        #[serde(with = "mensura::serde_with_unit")]
        dose: Grays,
        rate: GraysPerSecond,
    }

    let s: Sample = serde_json::from_str(r#"{"dose":{"amount":250.0,"unit":"mGy"},"rate":0.5}"#).unwrap();
    assert_relative_eq!(s.dose.amount(), 0.25, max_relative = 1e-12);
    assert_eq!(s.rate, GraysPerSecond::new(0.5));

    let json = serde_json::to_string(&Sample {
        dose: Grays::new(2.0),
        rate: GraysPerSecond::new(0.5),
    })
    .unwrap();
    assert_eq!(json, r#"{"dose":{"amount":2.0,"unit":"Gy"},"rate":0.5}"#);
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_unit_round_trip(x in -1e9..1e9f64) {
        for unit in mensura::units::all_units() {
            let back = unit.from_standard(unit.to_standard(x));
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0), "{unit}: {x} -> {back}");
        }
    }

    #[test]
    fn prop_add_commutes(a in -1e9..1e9f64, b in -1e9..1e9f64) {
        prop_assert_eq!(Meters::new(a) + Meters::new(b), Meters::new(b) + Meters::new(a));
    }

    #[test]
    fn prop_zero_is_identity(a in -1e9..1e9f64) {
        prop_assert_eq!(Joules::new(a) + Joules::ZERO, Joules::new(a));
    }

    #[test]
    fn prop_scalar_distributes(a in -1e6..1e6f64, b in -1e6..1e6f64, k in -1e3..1e3f64) {
        let lhs = (Seconds::new(a) + Seconds::new(b)) * k;
        let rhs = Seconds::new(a) * k + Seconds::new(b) * k;
        prop_assert!((lhs.amount() - rhs.amount()).abs() <= 1e-9 * lhs.amount().abs().max(1.0));
    }
}

#[test]
fn catalog_rules_close_over_dimensions() {
    for rule in CATALOG {
        let expected = rule.operation().combine(rule.lhs().dimension(), rule.rhs().dimension());
        assert_eq!(rule.output().dimension(), expected, "{rule}");
    }
}
