//! Chapter 6: error handling.
//!
//! Three kinds of failure show up here:
//!
//! 1. **Plain values** - `ValidationError`, `FileError`, returned through `Result`
//! 2. **Wrapped values** - `process_age` adds context with `anyhow` while the
//!    original `ValidationError` stays reachable through downcasting
//! 3. **Panics** - `perform_dangerous_operation` converts one typed panic
//!    payload into a `RecoveredPanic` at a `catch_unwind` boundary

use anyhow::Context;
use std::fs::File;
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Once;
use thiserror::Error;

pub const MAX_AGE: i32 = 150;

// ============================================================================
// Validation
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation error on field {field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_age(age: i32) -> Result<(), ValidationError> {
    if age < 0 {
        return Err(ValidationError::new("age", "age cannot be negative"));
    }
    if age > MAX_AGE {
        return Err(ValidationError::new("age", "age seems unrealistic"));
    }
    Ok(())
}

pub fn process_age(age: i32) -> anyhow::Result<()> {
    validate_age(age).context("age validation failed")
}

/// Find the `ValidationError` anywhere in a wrapped error's chain.
pub fn validation_cause(err: &anyhow::Error) -> Option<&ValidationError> {
    err.chain().find_map(|cause| cause.downcast_ref::<ValidationError>())
}

// ============================================================================
// Panic boundary
// ============================================================================

/// Payload raised by [`perform_dangerous_operation`] for invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DangerSignal {
    pub value: i32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("recovered from panic: {message}")]
pub struct RecoveredPanic {
    pub message: String,
}

fn dangerous(value: i32) -> i64 {
    if value < 0 {
        panic::panic_any(DangerSignal { value });
    }
    i64::from(value) * 2
}

/// Doubles `value`. Negative input panics internally with a
/// [`DangerSignal`]; that payload never leaves this function.
pub fn perform_dangerous_operation(value: i32) -> Result<i64, RecoveredPanic> {
    recover_danger(|| dangerous(value))
}

/// Run `f`, turning a [`DangerSignal`] panic into a [`RecoveredPanic`].
/// Any other panic is re-raised untouched with `resume_unwind`.
pub fn recover_danger<T>(f: impl FnOnce() -> T + panic::UnwindSafe) -> Result<T, RecoveredPanic> {
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<DangerSignal>() {
            Ok(signal) => Err(RecoveredPanic {
                message: format!("negative value not allowed: {}", signal.value),
            }),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Keep the default panic hook from printing `DangerSignal` panics.
/// Every other panic still reaches the previous hook.
pub fn silence_danger_signals() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if let Some(signal) = info.payload().downcast_ref::<DangerSignal>() {
                tracing::debug!(value = signal.value, "danger signal raised");
            } else {
                previous(info);
            }
        }));
    });
}

// ============================================================================
// File I/O
// ============================================================================

#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to create file {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    pub fn path(&self) -> &Path {
        match self {
            FileError::Create { path, .. }
            | FileError::Write { path, .. }
            | FileError::Read { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            FileError::Create { source, .. }
            | FileError::Write { source, .. }
            | FileError::Read { source, .. } => source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::NotFound
    }
}

/// Create (or truncate) `path` and write `content` to it.
pub fn write_to_file(path: &Path, content: &str) -> Result<(), FileError> {
    let mut file = File::create(path).map_err(|source| FileError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })
}

pub fn read_file(path: &Path) -> Result<String, FileError> {
    std::fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_age_scenarios() {
        assert_eq!(validate_age(30), Ok(()));
        assert_eq!(validate_age(0), Ok(()));
        assert_eq!(validate_age(MAX_AGE), Ok(()));

        let negative = validate_age(-5).unwrap_err();
        assert_eq!(negative.field, "age");
        assert_eq!(negative.message, "age cannot be negative");

        let unrealistic = validate_age(200).unwrap_err();
        assert_eq!(unrealistic.field, "age");
        assert_eq!(unrealistic.message, "age seems unrealistic");
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::new("age", "age cannot be negative");
        assert_eq!(err.to_string(), "validation error on field age: age cannot be negative");
    }

    #[test]
    fn wrapped_error_keeps_original_cause() {
        let err = process_age(-5).unwrap_err();
        assert_eq!(err.to_string(), "age validation failed");
        assert_eq!(format!("{err:#}"), "age validation failed: validation error on field age: age cannot be negative");

        let cause = validation_cause(&err).expect("validation error in chain");
        assert_eq!(cause.field, "age");
    }

    #[test]
    fn cause_survives_extra_context_layers() {
        let err = process_age(200).context("loading profile").unwrap_err();
        assert_eq!(validation_cause(&err).map(|v| v.message.as_str()), Some("age seems unrealistic"));
    }

    #[test]
    fn unrelated_errors_have_no_validation_cause() {
        let err = anyhow::anyhow!("something else");
        assert!(validation_cause(&err).is_none());
        assert!(process_age(25).is_ok());
    }

    #[test]
    fn dangerous_operation_recovers_its_own_signal() {
        silence_danger_signals();
        assert_eq!(perform_dangerous_operation(21), Ok(42));

        let err = perform_dangerous_operation(-1).unwrap_err();
        assert_eq!(err.to_string(), "recovered from panic: negative value not allowed: -1");
    }

    #[test]
    fn dangerous_operation_does_not_overflow() {
        assert_eq!(perform_dangerous_operation(i32::MAX), Ok(i64::from(i32::MAX) * 2));
    }

    #[test]
    fn boundary_converts_a_signal_raised_by_any_closure() {
        silence_danger_signals();
        let err = recover_danger(|| -> i32 { panic::panic_any(DangerSignal { value: -7 }) }).unwrap_err();
        assert_eq!(err.message, "negative value not allowed: -7");
        assert_eq!(recover_danger(|| "fine"), Ok("fine"));
    }

    #[test]
    fn foreign_panics_pass_through_the_boundary() {
        silence_danger_signals();
        let outer = panic::catch_unwind(|| recover_danger(|| -> i32 { panic!("unrelated failure") }));

        let payload = outer.expect_err("foreign panic must not be converted");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"unrelated failure"));
    }

    #[test]
    fn foreign_string_payloads_keep_their_type() {
        let outer = panic::catch_unwind(|| recover_danger(|| -> i32 { panic!("code {}", 42) }));

        let payload = outer.expect_err("foreign panic must not be converted");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("code 42"));
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");

        write_to_file(&path, "Hello, Rust!").unwrap();
        assert_eq!(read_file(&path).unwrap(), "Hello, Rust!");

        write_to_file(&path, "shorter").unwrap();
        assert_eq!(read_file(&path).unwrap(), "shorter");
    }

    #[test]
    fn create_in_missing_directory_fails_with_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("test.txt");

        let err = write_to_file(&path, "x").unwrap_err();
        assert!(matches!(err, FileError::Create { .. }));
        assert!(err.is_not_found());
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn reading_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert!(err.is_not_found());
    }
}
