//! Error types used throughout the SLA engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SLA engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SlaError {
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid time zone: {0}")]
    InvalidTimezone(String),

    #[error("Calendar has no active window")]
    NoActiveWindow,

    #[error("No SLA target configured for priority: {0}")]
    TargetNotFound(String),

    #[error("SLA clock is already paused")]
    AlreadyPaused,

    #[error("SLA clock is not paused")]
    NotPaused,

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type alias for SLA engine operations
pub type Result<T> = std::result::Result<T, SlaError>;
