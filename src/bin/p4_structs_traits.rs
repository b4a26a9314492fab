//! Chapter 4: Structs and Traits
//! Trait Objects, Validated Constructors and Composition
//!
//! Run with: cargo run --bin p4_structs_traits

use anyhow::Result;
use fundamentals::chapter;
use fundamentals::people::{Address, Employee, Person};
use fundamentals::shapes::{self, Circle, Rectangle, Shape};

fn shapes_demo() -> Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Rectangle::new(5.0, 3.0)?), Box::new(Circle::new(2.0)?)];

    for shape in &shapes {
        println!(
            "{:<10} Area: {:.2}, Perimeter: {:.2}",
            shape.name(),
            shape.area(),
            shape.perimeter()
        );
    }
    println!("Total area: {:.2}", shapes::total_area(&shapes));

    match Rectangle::new(0.0, 3.0) {
        Ok(rect) => println!("Unexpected: {}", shapes::describe(&rect)),
        Err(err) => tracing::warn!(%err, "rejected degenerate rectangle"),
    }
    Ok(())
}

fn people_demo() -> Result<()> {
    let person = Person::new("John", "Doe", 30).with_address(Address {
        street: "123 Main St".into(),
        city: "Example City".into(),
        country: "Example Country".into(),
    });
    println!("Person: {}", person.full_name());
    println!("Address: {}, {}", person.address.street, person.address.city);
    println!("As JSON: {}", serde_json::to_string_pretty(&person)?);

    let new_person = Person::new("Jane", "Smith", 25);
    println!("\nNew Person: {}", new_person.full_name());

    let emp = Employee::new(new_person, "Software Engineer", 75_000.0);
    println!("\nEmployee: {}", emp.full_name());
    println!("Job Title: {}", emp.job_title);
    println!("Salary: ${:.2}", emp.salary);
    Ok(())
}

fn main() {
    chapter::start("Structs and Traits");

    chapter::section("Shapes Behind a Trait");
    if let Err(err) = shapes_demo() {
        tracing::error!("shapes demo failed: {err:#}");
    }

    chapter::section("Nested Records and Composition");
    if let Err(err) = people_demo() {
        tracing::error!("people demo failed: {err:#}");
    }

    chapter::key_points(&[
        "A trait names the capability; each type opts in with `impl`",
        "Box<dyn Shape> lets one Vec hold different concrete types",
        "Constructors returning Result keep invalid shapes from existing",
        "Composition plus forwarding replaces struct embedding",
    ]);
}
