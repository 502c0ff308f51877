//! Parse a handful of GS1 identifiers and show the uniform error.
//!
//! Run with: `cargo run --example validate_identifiers`

use werte::barcode::{Gln, Grai, Gtin8, Gtin13, Sscc};

fn main() {
    let inputs = [
        "4006381333931", // valid GTIN-13
        "4006381333932", // check digit off by one
        "4719-5127",     // formatted GTIN-8
    ];
    for input in inputs {
        match Gtin13::parse(input).map(|g| g.to_string()) {
            Ok(display) => println!("GTIN-13 ok: {display}"),
            Err(err) => match Gtin8::parse(input) {
                Ok(small) => println!("GTIN-8 ok: {small} (digits {})", small.digits()),
                Err(_) => println!("rejected: {err}"),
            },
        }
    }

    let sscc = Sscc::parse("806141411234567896").expect("valid SSCC");
    println!("SSCC ok: {sscc}");

    let gln = Gln::parse("0614141000012").expect("valid GLN");
    println!("GLN ok: {gln}");

    let grai = Grai::parse("012345678900051234AX01").expect("valid GRAI");
    println!(
        "GRAI ok: base {} serial {}",
        grai.base(),
        grai.serial().unwrap_or("-")
    );
}
