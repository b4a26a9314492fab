//! Chapter 5: Concurrency
//! Threads, Rendezvous Channels, Wait Groups, Mutexes and select!
//!
//! Run with: cargo run --bin p5_concurrency
//!
//! Delays and task counts come from `fundamentals.toml` (see `[concurrency]`).

use fundamentals::chapter;
use fundamentals::concurrency::{self, pipeline, SharedCounter};
use fundamentals::config::ConcurrencyConfig;
use std::io::Write;

fn printers(config: &ConcurrencyConfig) {
    let (numbers, letters) = config.printer_delays();
    let events = concurrency::interleave(numbers, letters);
    let line: Vec<String> = events.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));
}

fn squares(config: &ConcurrencyConfig) {
    println!("Squares of numbers:");
    let run = pipeline::run_pipeline_with(&config.pipeline_inputs, config.generator_delay(), |square| {
        print!("{} ", square);
        let _ = std::io::stdout().flush();
    });
    println!();
    tracing::debug!(generator = ?run.generator, transform = ?run.transform, "pipeline finished");

    let partial = pipeline::run_pipeline_take(&config.pipeline_inputs, std::time::Duration::ZERO, 2);
    println!(
        "Consumer leaving after {:?}: generator sent {}, transform forwarded {}",
        partial.squares, partial.generator.forwarded, partial.transform.forwarded
    );
}

fn workers(config: &ConcurrencyConfig) {
    println!("Launching {} workers", config.workers);
    for report in concurrency::run_workers(config.workers, config.worker_delay()) {
        println!("Worker {} done after {:?}", report.id, report.elapsed);
    }
}

fn counter(config: &ConcurrencyConfig) {
    let counter = SharedCounter::new();
    let value = counter.hammer(config.counter_tasks, config.increments_per_task);
    println!(
        "{} tasks x {} increments -> final counter value: {}",
        config.counter_tasks, config.increments_per_task, value
    );
}

fn select(config: &ConcurrencyConfig) {
    let (first, second) = config.select_delays();
    for message in concurrency::first_completed(first, second) {
        println!("{}", message);
    }
}

fn main() {
    let config = chapter::start("Concurrency").concurrency;

    chapter::section("1. Basic Threads");
    printers(&config);

    chapter::section("2. Channels");
    squares(&config);

    chapter::section("3. WaitGroup");
    workers(&config);

    chapter::section("4. Mutex");
    counter(&config);

    chapter::section("5. Select");
    select(&config);

    chapter::key_points(&[
        "Scoped threads can borrow from the stack and are joined automatically",
        "bounded(0) is a rendezvous: every send waits for a receiver",
        "Dropping a sender closes the channel; dropping a receiver stops the sender",
        "Arc<Mutex<T>> serializes every read-modify-write",
        "select! takes whichever channel is ready first",
    ]);
}
