// ABOUTME: Unified error types for plan building with standard error codes
// ABOUTME: Defines PlanError, its ErrorCode classification, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure in the planning pipeline is a [`PlanError`] tagged with an
//! [`ErrorCode`]. Errors are raised at construction or validation time and
//! abort the plan build; nothing in the engine retries or recovers partially.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Aerobic capacity value has no physical velocity solution
    InvalidCapacity,
    /// Requested plan duration is not a positive number of weeks
    InvalidDuration,
    /// Two lists that must be week-aligned have different lengths
    ShapeMismatch,
    /// A segment sets neither or both of distance and duration
    MissingSegmentBound,
    /// A pace lookup referenced a zone absent from the zone table
    UnknownZone,
    /// Input outside its documented range
    InvalidInput,
    /// Session catalog could not be parsed
    InvalidCatalog,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidCapacity => "The aerobic capacity value is not physically plausible",
            Self::InvalidDuration => "The plan duration must be a positive number of weeks",
            Self::ShapeMismatch => "Week-aligned inputs have different lengths",
            Self::MissingSegmentBound => "A segment must set exactly one of distance or duration",
            Self::UnknownZone => "The referenced training zone is not in the zone table",
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidCatalog => "The session catalog is malformed",
        }
    }
}

/// Unified error type for plan building
#[derive(Debug, Clone, PartialEq, Error)]
pub struct PlanError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl PlanError {
    /// Create a new `PlanError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Aerobic capacity outside the solvable range
    #[must_use]
    pub fn invalid_capacity(capacity: f64) -> Self {
        Self::new(
            ErrorCode::InvalidCapacity,
            format!("capacity {capacity:.2} yields a negative discriminant"),
        )
    }

    /// Non-positive plan duration
    #[must_use]
    pub fn invalid_duration(total_weeks: i64) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!("total_weeks must be positive, got {total_weeks}"),
        )
    }

    /// Length mismatch between two week-aligned lists
    #[must_use]
    pub fn shape_mismatch(what: &str, expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorCode::ShapeMismatch,
            format!("{what}: expected {expected} entries, got {actual}"),
        )
    }

    /// Segment without exactly one extent
    #[must_use]
    pub fn missing_segment_bound(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingSegmentBound, message)
    }

    /// Zone missing from the zone table
    #[must_use]
    pub fn unknown_zone(zone: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::UnknownZone,
            format!("zone '{zone}' is not present in the zone table"),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed catalog
    #[must_use]
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCatalog, message)
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_catalog(error.to_string())
    }
}

/// Result type alias for convenience
pub type PlanResult<T> = Result<T, PlanError>;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description() {
        let error = PlanError::invalid_duration(0);
        let text = error.to_string();
        assert!(text.starts_with("The plan duration must be"));
        assert!(text.contains("got 0"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ShapeMismatch).unwrap();
        assert_eq!(json, "\"SHAPE_MISMATCH\"");
    }

    #[test]
    fn test_json_error_maps_to_invalid_catalog() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = PlanError::from(parse_error);
        assert_eq!(error.code, ErrorCode::InvalidCatalog);
    }
}
