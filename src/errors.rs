// ABOUTME: Unified error types for the strength intelligence engine
// ABOUTME: Structured AppError with stable codes for caller-facing validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! Error handling for the intelligence engine.
//!
//! The analysis path itself never fails: malformed log entries degrade to
//! the insufficient-data result shape rather than erroring. `AppError`
//! exists for caller parameter validation: unknown algorithm names,
//! non-positive milestone steps, invalid configuration overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard result type used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Stable error codes exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A caller-supplied parameter is out of range or malformed
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Configuration values failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// Application error with a stable code and human-readable message
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a configuration validation error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
