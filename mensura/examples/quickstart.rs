//! Minimal end-to-end example: convert a distance, derive an area and a dose, take a ratio.

use mensura::{Grays, Joules, Kilograms, Meters, MetersPerSecond, Number, Seconds, SquareMeters, KILOMETER};

fn main() {
    let d = Meters::from_unit(5.0, &KILOMETER).unwrap();
    assert_eq!(d.amount(), 5000.0);

    let area: SquareMeters = Meters::new(10.0) * Meters::new(4.0);
    assert_eq!(area.amount(), 40.0);

    let dose: Grays = Joules::new(100.0) / Kilograms::new(2.0);
    assert_eq!(dose.amount(), 50.0);

    let travelled: Meters = Seconds::new(3.0) * MetersPerSecond::new(2.0);
    assert_eq!(travelled.amount(), 6.0);

    let ratio: Number = Meters::new(10.0) / Meters::new(2.0);
    assert_eq!(ratio.amount(), 5.0);

    println!("{d}, {area}, {dose}, {travelled}, ratio {ratio}");
}
