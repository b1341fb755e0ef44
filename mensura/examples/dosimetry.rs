//! Accumulated dose from a dose-rate reading, computed both with typed measures and through the runtime registry.
//!
//! Run with: cargo run --example dosimetry

use mensura::{GraysPerSecond, Registry, Seconds, HOUR, MICROGRAY, MICROGRAY_PER_HOUR};

fn main() -> mensura::Result<()> {
    println!("=== Typed ===\n");

    let rate = GraysPerSecond::from_unit(2.5, &MICROGRAY_PER_HOUR)?;
    let shift = Seconds::from_unit(8.0, &HOUR)?;
    let dose = rate * shift;
    println!("{rate} for {shift} -> {dose}");
    println!("in µGy: {}", dose.in_unit(&MICROGRAY)?);

    println!("\n=== Runtime ===\n");

    let registry = Registry::global();
    let rate = registry.measure(2.5, "µGy/h")?;
    let shift = registry.measure(8.0, "h")?;
    let dose = registry.multiply(rate, shift)?;
    println!("{dose} = {} µGy", dose.amount_in(registry.unit("µGy")?)?);

    match registry.multiply(rate, rate) {
        Ok(q) => println!("unexpected: {q}"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
