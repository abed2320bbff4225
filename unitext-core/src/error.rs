//! Conversion errors
//!
//! Every error is terminal for a call. Messages are meant to be shown to the
//! end user verbatim, codes are for machines.

use thiserror::Error as ThisError;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
}

/// Error type for natural-language conversions
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Nothing that looks like a quantity was found
    #[error("no valid units found in input: '{input}'")]
    EmptyInput {
        /// The raw text, before normalization
        input: String,
    },

    /// A unit token is not in the alias index
    #[error("unknown unit: '{token}'{}", did_you_mean(.suggestion))]
    UnknownUnit {
        token: String,
        /// Closest indexed alias, when one is close enough
        suggestion: Option<String>,
    },

    #[error("invalid number: '{text}'")]
    InvalidNumber { text: String },

    /// A component or target belongs to another unit system
    #[error("cannot convert '{unit}' ({unit_system}) to '{target}' ({target_system})")]
    DimensionMismatch {
        unit: String,
        unit_system: String,
        target: String,
        target_system: String,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(alias) => format!(". Did you mean '{}'?", alias),
        None => String::new(),
    }
}

impl Error {
    pub fn empty_input(input: impl Into<String>) -> Self {
        Self::EmptyInput { input: input.into() }
    }

    pub fn unknown_unit(token: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownUnit { token: token.into(), suggestion }
    }

    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::InvalidNumber { text: text.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::EmptyInput { .. } => codes::EMPTY_INPUT,
            Error::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Error::InvalidNumber { .. } => codes::INVALID_NUMBER,
            Error::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
        }
    }

    /// The "did you mean" alias, if any
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Error::UnknownUnit { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;
