//! Error types for the helper modules.

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

/// Errors from value coercion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The input is not a valid `i32`.
    #[error("not an integer: {input:?}")]
    InvalidInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// The input is not a valid `f64`.
    #[error("not a number: {input:?}")]
    InvalidDouble {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// The duration could not be read as an amount and a unit.
    #[error("invalid time {input:?}: {reason}")]
    InvalidTime { input: String, reason: String },
}

/// A failed precondition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from locale parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// No language was given.
    #[error("locale must not be empty")]
    Empty,

    /// More than language, country and variant.
    #[error("too many locale components in {input:?}")]
    TooManyParts { input: String },

    /// Language is not 2 to 8 ASCII letters.
    #[error("invalid language code {code:?}")]
    InvalidLanguage { code: String },

    /// Country is not 2 letters or 3 digits.
    #[error("invalid country code {code:?}")]
    InvalidCountry { code: String },

    /// Variant is not ASCII alphanumeric.
    #[error("invalid variant {code:?}")]
    InvalidVariant { code: String },
}

/// Errors from date parsing and formatting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input does not match the default date pattern.
    #[error("cannot parse date {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The pattern contains an unknown specifier.
    #[error("invalid date pattern {pattern:?}")]
    InvalidPattern { pattern: String },
}

/// Errors from file helpers.
#[derive(Debug, Error)]
pub enum FsError {
    /// A filesystem call failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// An argument failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Parent directories could not be created.
    #[error("failed to create parent directories of {path}: {source}")]
    CreateParent {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rename or move failed.
    #[error("failed to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path has no parent to act on.
    #[error("{0} has no parent directory")]
    NoParent(PathBuf),
}

/// Errors from writing an error report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be opened or written.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The report directory could not be prepared.
    #[error(transparent)]
    Fs(#[from] FsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message() {
        let err = ValidationError::new("name is required");
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn convert_error_display() {
        let source = "x".parse::<i32>().unwrap_err();
        let err = ConvertError::InvalidInteger {
            input: "x".into(),
            source,
        };
        assert_eq!(err.to_string(), "not an integer: \"x\"");
    }

    #[test]
    fn fs_error_from_validation() {
        let err: FsError = ValidationError::new("missing").into();
        assert_eq!(err.to_string(), "missing");
    }
}
