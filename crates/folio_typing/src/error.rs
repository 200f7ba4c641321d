//! Error types for folio_typing

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or driving the typing effect
#[derive(Error, Debug)]
pub enum TypingError {
    /// The role list has no entries
    #[error("role list is empty; at least one role is required")]
    EmptyRoleList,

    /// A role with no characters would never complete its typing phase
    #[error("role at index {index} is empty")]
    EmptyRole { index: usize },

    /// Failed to read a configuration file
    #[error("failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file
    #[error("failed to parse {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write a configuration file
    #[error("failed to write {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a configuration
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The driver task panicked or was aborted
    #[error("typing driver task failed: {0}")]
    DriverJoin(#[from] tokio::task::JoinError),
}

/// Result type for folio_typing operations
pub type Result<T> = std::result::Result<T, TypingError>;
