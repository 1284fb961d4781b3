//! Error handling for Fiesta
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Fiesta application
#[derive(Error, Debug)]
pub enum FiestaError {
    #[error("Host bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Event store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Message catalog error: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Host bridge specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Capability not available on this host")]
    Unavailable,

    #[error("Host request timed out")]
    Timeout,

    #[error("Permission denied by the user")]
    PermissionDenied,

    #[error("Host request failed: {0}")]
    Failed(String),
}

/// Event store specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Event store unavailable")]
    Unavailable,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Store request timed out")]
    Timeout,
}

/// Result type alias for Fiesta operations
pub type Result<T> = std::result::Result<T, FiestaError>;

/// Result type alias for host bridge operations
pub type BridgeResult<T> = std::result::Result<T, BridgeError>;

/// Result type alias for event store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl FiestaError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            FiestaError::Bridge(_) => true,
            FiestaError::Store(_) => true,
            FiestaError::Config(_) => false,
            FiestaError::EventNotFound { .. } => true,
            FiestaError::InvalidInput(_) => true,
            FiestaError::InvalidStateTransition { .. } => false,
            FiestaError::Serialization(_) => false,
            FiestaError::Catalog(_) => false,
            FiestaError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FiestaError::Config(_) => ErrorSeverity::Critical,
            FiestaError::Catalog(_) => ErrorSeverity::Critical,
            FiestaError::InvalidStateTransition { .. } => ErrorSeverity::Error,
            FiestaError::Serialization(_) => ErrorSeverity::Error,
            FiestaError::EventNotFound { .. } => ErrorSeverity::Info,
            FiestaError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Warning,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
