//! Chapter 6: Error Handling
//! Typed Errors, Context Wrapping and Panic Boundaries
//!
//! Run with: cargo run --bin p6_error_handling

use anyhow::Context;
use fundamentals::chapter;
use fundamentals::config::FilesConfig;
use fundamentals::errors::{self, FileError};
use fundamentals::Calculator;
use std::path::Path;

fn basic_errors() {
    match Calculator::new().divide(10.0, 0.0) {
        Ok(result) => println!("Result: {:.2}", result),
        Err(err) => tracing::error!(%err, "division error"),
    }
}

fn typed_errors() {
    for age in [25, -5, 200] {
        match errors::process_age(age) {
            Ok(()) => println!("Age {} is valid", age),
            // Inspect the chain for the concrete type.
            Err(err) => match errors::validation_cause(&err) {
                Some(validation) => tracing::warn!(
                    field = %validation.field,
                    "{err:#}"
                ),
                None => tracing::error!("other error: {err:#}"),
            },
        }
    }
}

fn panic_boundary() {
    errors::silence_danger_signals();
    for value in [21, -1] {
        match errors::perform_dangerous_operation(value) {
            Ok(doubled) => println!("dangerous({}) = {}", value, doubled),
            Err(err) => tracing::warn!(%err, "recovered"),
        }
    }
}

fn file_roundtrip(files: &FilesConfig) -> anyhow::Result<String> {
    errors::write_to_file(&files.output_path, &files.output_content)?;
    let content = errors::read_file(&files.output_path)
        .with_context(|| format!("reading back {}", files.output_path.display()))?;
    Ok(content)
}

fn file_errors(files: &FilesConfig) {
    match file_roundtrip(files) {
        Ok(content) => println!("Wrote and read back {:?}", content),
        Err(err) => tracing::error!("file operation error: {err:#}"),
    }

    let missing = Path::new("no-such-directory").join("out.txt");
    if let Err(err) = errors::write_to_file(&missing, "unreachable") {
        report_file_error(&err);
    }
}

fn report_file_error(err: &FileError) {
    if err.is_not_found() {
        println!("{} does not exist ({})", err.path().display(), err.io_error());
    } else {
        tracing::error!(%err, source = %err.io_error(), "file operation failed");
    }
}

fn main() {
    let config = chapter::start("Error Handling");

    chapter::section("Basic Errors");
    basic_errors();

    chapter::section("Custom and Wrapped Errors");
    typed_errors();

    chapter::section("Panic Recovery");
    panic_boundary();

    chapter::section("File Errors");
    file_errors(&config.files);

    chapter::key_points(&[
        "Recoverable failures are values: return Result and use ?",
        "thiserror derives Display and source() for library errors",
        "anyhow::Context adds a message without losing the original error",
        "catch_unwind is a boundary, not a control-flow tool",
        "Inspect io::ErrorKind instead of comparing error strings",
    ]);
}
