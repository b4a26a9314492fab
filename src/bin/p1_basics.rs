//! Chapter 1: Basics
//! Values, Constants, Arithmetic and Conversions
//!
//! Run with: cargo run --bin p1_basics

use fundamentals::basics::{self, Arithmetic, PI, STATUS_ERROR, STATUS_OK};
use fundamentals::chapter::{self, show};

fn values_and_types() {
    let integer: i64 = 42;
    let float: f64 = 2.75;
    let unsigned: u32 = 123;
    let text = "Hello, Rust!";
    let is_crab = true;

    show("Integer", integer);
    show("Float", format!("{:.2}", float));
    show("Unsigned", unsigned);
    show("Text", text);
    show("Is Crab", is_crab);

    let (name, age, is_happy) = ("Ferris", 25, true);
    println!("Name: {}, Age: {}, Is Happy: {}", name, age, is_happy);
    println!("Pi: {:.5}", PI);
    println!("Status OK: {}, Status Error: {}", STATUS_OK, STATUS_ERROR);
}

fn arithmetic(x: i64, y: i64) {
    println!("{}", basics::greeting("Ferris", 25));
    println!("Math with {} and {}:", x, y);
    match Arithmetic::of(x, y) {
        Ok(result) => {
            show("Sum", result.sum);
            show("Difference", result.difference);
            show("Product", result.product);
            show("Quotient", result.quotient);
        }
        Err(err) => tracing::error!(%err, x, y, "arithmetic failed"),
    }

    if let Err(err) = Arithmetic::of(x, 0) {
        tracing::warn!(%err, "checked division caught a zero divisor");
    }
}

fn conversions() {
    let c = basics::convert_chain(42);
    println!("i64({}) -> f64({:.1}) -> u64({})", c.integer, c.float, c.unsigned);

    let negative = basics::convert_chain(-7);
    println!(
        "i64({}) -> f64({:.1}) -> u64({})  (saturates)",
        negative.integer, negative.float, negative.unsigned
    );
}

fn main() {
    chapter::start("Basics");

    chapter::section("Values and Types");
    values_and_types();

    chapter::section("Arithmetic");
    arithmetic(10, 5);

    chapter::section("Type Conversion");
    conversions();

    chapter::key_points(&[
        "Bindings are immutable unless declared `mut`",
        "Types are inferred but can be annotated",
        "Checked arithmetic turns overflow and division by zero into values",
        "`as` conversions saturate when a float does not fit the integer type",
    ]);
}
