//! Example demonstrating the serde_with_unit helper module.
//!
//! Fields tagged with `#[serde(with = "mensura::serde_with_unit")]` are written as `{"amount": x, "unit": "sym"}`
//! in the standard unit, and read back from any registered unit of the same kind.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use mensura::{Grays, Kelvins, Meters, Seconds};
    use serde::{Deserialize, Serialize};

    println!("=== Using serde_with_unit Helper ===\n");

    // =========================================================================
    // Example 1: Per-field control
    // =========================================================================
    println!("1. Per-Field Control:\n");

    #[derive(Serialize, Deserialize, Debug)]
    struct Exposure {
        #[serde(with = "mensura::serde_with_unit")]
        dose: Grays,

        // Compact: raw standard amount
        duration: Seconds,
    }

    let data = Exposure {
        dose: Grays::new(0.002),
        duration: Seconds::new(3600.0),
    };

    let json = serde_json::to_string_pretty(&data).unwrap();
    println!("Serialized:\n{}\n", json);

    let restored: Exposure = serde_json::from_str(&json).unwrap();
    println!("  dose: {}", restored.dose);
    println!("  duration: {}\n", restored.duration);

    // =========================================================================
    // Example 2: Reading other units
    // =========================================================================
    println!("2. Input In Other Units:\n");

    #[derive(Serialize, Deserialize, Debug)]
    struct Station {
        #[serde(with = "mensura::serde_with_unit")]
        altitude: Meters,

        #[serde(with = "mensura::serde_with_unit")]
        air_temperature: Kelvins,
    }

    let input = r#"{
        "altitude": {"amount": 7200.0, "unit": "ft"},
        "air_temperature": {"amount": -12.5, "unit": "°C"}
    }"#;
    let station: Station = serde_json::from_str(input).unwrap();
    println!("  altitude: {}", station.altitude);
    println!("  air temperature: {}", station.air_temperature);
    println!("Re-serialized:\n{}\n", serde_json::to_string_pretty(&station).unwrap());

    // =========================================================================
    // Example 3: Validation
    // =========================================================================
    println!("3. Unit Validation:\n");

    #[derive(Deserialize, Debug)]
    struct SingleValue {
        #[serde(with = "mensura::serde_with_unit")]
        distance: Meters,
    }

    let no_unit = r#"{"distance": {"amount": 50.0}}"#;
    let data: SingleValue = serde_json::from_str(no_unit).unwrap();
    println!("✓ Missing unit means the standard unit: {}", data.distance);

    for bad in [
        r#"{"distance": {"amount": 100.0, "unit": "kg"}}"#,
        r#"{"distance": {"amount": 100.0, "unit": "parsec"}}"#,
    ] {
        match serde_json::from_str::<SingleValue>(bad) {
            Ok(_) => println!("✗ Unexpected success"),
            Err(e) => println!("✓ Rejected: {}", e),
        }
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
