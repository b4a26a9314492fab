//! Chapter 2: Control Flow
//! if / else, match, for and while
//!
//! Run with: cargo run --bin p2_control_flow

use fundamentals::chapter;
use fundamentals::control_flow::{self, AgeGroup, Weekday};

fn branching() {
    println!("{}", AgeGroup::of(18).describe());

    let score = 85;
    println!("Grade: {}", control_flow::letter_grade(score));
}

fn loops() {
    println!("Counting to 5:");
    let counted: Vec<String> = control_flow::count_up(5).iter().map(u32::to_string).collect();
    println!("{}", counted.join(" "));

    println!("\nWhile-style loop:");
    let counted: Vec<String> = control_flow::count_while(3).iter().map(u32::to_string).collect();
    println!("{}", counted.join(" "));

    println!("\nIterating over a slice:");
    for (index, fruit) in control_flow::enumerate_items(&["apple", "banana", "orange"]) {
        println!("Index: {}, Fruit: {}", index, fruit);
    }
}

fn matching() {
    for day in ["Monday", "Friday", "Sunday", "Wednesday", "Caturday"] {
        match day.parse::<Weekday>() {
            Ok(weekday) => println!("{:<10} {}", day, weekday.describe()),
            Err(err) => tracing::warn!(%err, "skipping"),
        }
    }

    println!("\nGrade evaluation:");
    for score in [95, 85, 72, 40] {
        println!("{:>3} -> {}", score, control_flow::evaluate(score));
    }
}

fn main() {
    chapter::start("Control Flow");

    chapter::section("If / Else");
    branching();

    chapter::section("Loops");
    loops();

    chapter::section("Match");
    matching();

    chapter::key_points(&[
        "`if` is an expression and can produce a value",
        "`for` walks any iterator; ranges are iterators",
        "`match` must be exhaustive; `_` catches the rest",
        "Range patterns replace condition-less switches",
    ]);
}
