//! Shared scaffolding for the chapter binaries: configuration, logging and
//! section headers.

use crate::config::DemoConfig;
use crate::logging;
use colored::Colorize;

/// Load configuration, install logging and print the chapter title.
///
/// A broken config file is logged and replaced by defaults; a chapter
/// never refuses to run because of it.
pub fn start(title: &str) -> DemoConfig {
    let loaded = DemoConfig::load();
    let verbose = loaded.as_ref().map(|c| c.logging.verbose).unwrap_or(false);
    logging::init(verbose);

    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default configuration");
        DemoConfig::default()
    });

    println!("{}", format!("=== {} ===", title).bold().cyan());
    config
}

pub fn section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold());
}

pub fn key_points(points: &[&str]) {
    section("Key Points");
    for (i, point) in points.iter().enumerate() {
        println!("{}. {}", i + 1, point);
    }
}

/// `label: value` with the label dimmed.
pub fn show(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", format!("{label}:").dimmed(), value);
}
