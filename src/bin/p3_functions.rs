//! Chapter 3: Functions
//! Multiple Results, Slices, Higher-Order Functions and Owned State
//!
//! Run with: cargo run --bin p3_functions

use fundamentals::chapter;
use fundamentals::functions::{self, StepCounter};

fn main() {
    chapter::start("Functions");

    chapter::section("Basic Call");
    println!("{}", functions::greet("Ferris"));

    chapter::section("Result Instead of Two Return Values");
    for (a, b) in [(10.0, 2.0), (1.0, 0.0)] {
        match functions::divide(a, b) {
            Ok(result) => println!("{} / {} = {:.2}", a, b, result),
            Err(err) => tracing::error!(%err, a, b, "division failed"),
        }
    }

    chapter::section("Min / Max");
    let numbers = [3, 1, 4, 1, 5, 9, 2, 6];
    match functions::min_max(&numbers) {
        Some((min, max)) => println!("Min: {}, Max: {}", min, max),
        None => println!("No numbers"),
    }
    println!("Empty slice: {:?}", functions::min_max(&[]));

    chapter::section("Slices Instead of Variadics");
    println!("Sum: {}", functions::sum(&[1, 2, 3, 4, 5]));

    chapter::section("Functions as Parameters");
    println!("Processed string: {}", functions::process_string("hello", str::to_uppercase));
    println!(
        "With a closure: {}",
        functions::process_string("hello", |s| s.chars().rev().collect())
    );

    chapter::section("Owned Counter State");
    let mut counter = StepCounter::new();
    for _ in 0..3 {
        println!("Count: {}", counter.next());
    }

    chapter::key_points(&[
        "Fallible functions return Result; callers must handle both arms",
        "Option models \"no answer\" without a sentinel value",
        "Generic `F: Fn(&str) -> String` accepts functions and closures",
        "State a closure would capture can live in a small struct instead",
    ]);
}
