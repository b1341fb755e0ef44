//! Extending the built-in tables from a TOML unit catalog.
//!
//! Run with: cargo run --example unit_catalog

#[cfg(feature = "catalog")]
const CATALOG: &str = r#"
[[kind]]
name = "Jerk"
unit = "m/s³"
dimension = { length = 1, time = -3 }

[[unit]]
symbol = "furlong"
kind = "Length"
scale = 201.168

[[unit]]
symbol = "kt"
kind = "Mass"
prefix = "kilo"
base = "t"

[[unit]]
symbol = "°De"
kind = "Temperature"
scale = -0.6666666666666666
offset = 373.15

[[derivation]]
lhs = "Acceleration"
op = "/"
rhs = "Time"
output = "Jerk"
"#;

#[cfg(feature = "catalog")]
fn main() -> mensura::Result<()> {
    use mensura::{Catalog, RegistryBuilder};

    let catalog = Catalog::from_toml_str(CATALOG)?;
    let registry = RegistryBuilder::with_builtins().catalog(&catalog)?.build()?;

    println!("1 mi = {} furlong", registry.convert(1.0, "mi", "furlong")?);
    println!("3 kt = {} kg", registry.convert(3.0, "kt", "kg")?);
    println!("0 °De = {} °C", registry.convert(0.0, "°De", "°C")?);

    let jerk = registry.divide(
        registry.measure(6.0, "m/s²")?,
        registry.measure(2.0, "s")?,
    )?;
    println!("6 m/s² / 2 s = {}", registry.display(&jerk));

    Ok(())
}

#[cfg(not(feature = "catalog"))]
fn main() {
    println!("This example requires the 'catalog' feature.");
}
