//! Split an invoice total across cost centers without losing a cent.
//!
//! Run with: `cargo run --example money_allocation --features money`

use rust_decimal_macros::dec;
use werte::money::{Currency, Money};

fn main() {
    let eur = Currency::from_code("EUR").expect("EUR is in the table");
    let total = Money::new(dec!(100.00), eur);

    let shares = total.allocate(&[50, 30, 20]).expect("valid ratios");
    for (i, share) in shares.iter().enumerate() {
        println!("cost center {}: {share}", i + 1);
    }

    let odd = Money::new(dec!(0.05), eur);
    for share in odd.allocate(&[1, 1, 1]).expect("valid ratios") {
        println!("odd split: {share}");
    }
}
