//! Convert shipment measurements between units.
//!
//! Run with: `cargo run --example unit_conversion --features measure`

use rust_decimal_macros::dec;
use werte::measure::{Capacity, CapacityUnit, Length, LengthUnit, Mass, MassUnit};

fn main() {
    let pallet_height = Length::new(dec!(144), LengthUnit::Centimetre);
    println!(
        "pallet height: {} = {}",
        pallet_height,
        pallet_height.to(LengthUnit::Metre).expect("in range")
    );

    let net_weight = Mass::new(dec!(850), MassUnit::Kilogram);
    println!(
        "net weight: {} = {}",
        net_weight,
        net_weight.to(MassUnit::Tonne).expect("in range")
    );

    let fill = Capacity::new(dec!(3.5), CapacityUnit::Hectolitre);
    println!(
        "fill volume: {} = {}",
        fill,
        fill.to(CapacityUnit::Litre).expect("in range")
    );

    let us_customer = pallet_height.to(LengthUnit::Inch).expect("in range");
    println!("for the US warehouse: {us_customer}");
}
