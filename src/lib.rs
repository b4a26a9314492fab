//! # Language Fundamentals
//!
//! This crate contains runnable chapters walking through the fundamentals:
//! values and arithmetic, control flow, functions, structs and traits,
//! concurrency primitives, error handling, and a small calculator used to
//! illustrate unit testing.
//!
//! ## Chapters Covered
//!
//! 1. **Basics** - Constants, arithmetic, type conversion
//! 2. **Control Flow** - `if`, `match`, `for`, `while`
//! 3. **Functions** - Multiple returns, slices, closures, owned state
//! 4. **Structs & Traits** - `Shape` trait objects, composition
//! 5. **Concurrency** - Threads, rendezvous channels, joins, `Mutex`, `select!`
//! 6. **Error Handling** - Typed errors, context wrapping, panic boundaries
//! 7. **Testing** - The `Calculator`, table-driven and property tests
//!
//! ## Running Chapters
//!
//! ```bash
//! cargo run --bin p1_basics
//! cargo run --bin p2_control_flow
//! cargo run --bin p3_functions
//! cargo run --bin p4_structs_traits
//! cargo run --bin p5_concurrency
//! cargo run --bin p6_error_handling
//!
//! # Chapter 7 lives in the test suite
//! cargo test calculator
//! cargo bench
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for custom error types
//! - `anyhow` - Context wrapping in binaries and `process_age`
//! - `crossbeam` - Rendezvous channels, `select!` and `WaitGroup`
//! - `serde` / `toml` / `serde_json` - Configuration and JSON records
//! - `tracing` - Structured logging

pub mod basics;
pub mod calculator;
pub mod chapter;
pub mod concurrency;
pub mod config;
pub mod control_flow;
pub mod errors;
pub mod functions;
pub mod logging;
pub mod people;
pub mod shapes;

pub use calculator::{CalcError, Calculator};
pub use config::{ConfigError, DemoConfig};
pub use shapes::{Circle, Rectangle, Shape};
