//! Demo configuration loaded from TOML.
//!
//! Every field has a default matching the values the chapters were written
//! around, so an absent `fundamentals.toml` simply means "use the defaults".

use serde::Deserialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FUNDAMENTALS_CONFIG";
/// File looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "fundamentals.toml";
/// Upper bound for any configured delay.
pub const MAX_DELAY_MS: u64 = 60_000;
/// Upper bound for `workers` and `counter_tasks`; each is one OS thread.
pub const MAX_THREADS: usize = 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub concurrency: ConcurrencyConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConcurrencyConfig {
    pub printer_number_delay_ms: u64,
    pub printer_letter_delay_ms: u64,
    pub generator_delay_ms: u64,
    pub pipeline_inputs: Vec<i64>,
    pub workers: usize,
    pub worker_delay_ms: u64,
    pub counter_tasks: usize,
    pub increments_per_task: usize,
    pub first_delay_ms: u64,
    pub second_delay_ms: u64,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            printer_number_delay_ms: 100,
            printer_letter_delay_ms: 150,
            generator_delay_ms: 100,
            pipeline_inputs: (1..=5).collect(),
            workers: 3,
            worker_delay_ms: 1000,
            counter_tasks: 5,
            increments_per_task: 1000,
            first_delay_ms: 2000,
            second_delay_ms: 1000,
        }
    }
}

impl ConcurrencyConfig {
    pub fn generator_delay(&self) -> Duration {
        Duration::from_millis(self.generator_delay_ms)
    }

    pub fn worker_delay(&self) -> Duration {
        Duration::from_millis(self.worker_delay_ms)
    }

    pub fn select_delays(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.first_delay_ms),
            Duration::from_millis(self.second_delay_ms),
        )
    }

    pub fn printer_delays(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.printer_number_delay_ms),
            Duration::from_millis(self.printer_letter_delay_ms),
        )
    }

    fn delays(&self) -> [(&'static str, u64); 6] {
        [
            ("concurrency.printer_number_delay_ms", self.printer_number_delay_ms),
            ("concurrency.printer_letter_delay_ms", self.printer_letter_delay_ms),
            ("concurrency.generator_delay_ms", self.generator_delay_ms),
            ("concurrency.worker_delay_ms", self.worker_delay_ms),
            ("concurrency.first_delay_ms", self.first_delay_ms),
            ("concurrency.second_delay_ms", self.second_delay_ms),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    pub output_path: PathBuf,
    pub output_content: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("test.txt"),
            output_content: "Hello, Rust!".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Resolve the configuration the binaries run with.
    ///
    /// An explicitly named file (via `FUNDAMENTALS_CONFIG`) must exist. The
    /// default file is optional.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV);
        Self::resolve(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// `explicit` wins and must exist; otherwise `fallback` is optional.
    pub fn resolve(explicit: Option<&OsStr>, fallback: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(Path::new(path)),
            None => Self::load_optional(fallback),
        }
    }

    /// Like [`DemoConfig::from_file`], but a missing file yields defaults.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.concurrency.delays() {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} ms exceeds the {MAX_DELAY_MS} ms limit"),
                ));
            }
        }
        for (field, value) in [
            ("concurrency.workers", self.concurrency.workers),
            ("concurrency.counter_tasks", self.concurrency.counter_tasks),
        ] {
            if value > MAX_THREADS {
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} threads exceeds the {MAX_THREADS} thread limit"),
                ));
            }
        }
        if self.files.output_path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("files.output_path", "must not be empty"));
        }
        Ok(())
    }
}
