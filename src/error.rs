//! Unified error types for Signpost.
//!
//! [`SignpostError`] covers the three failure families: request-file
//! problems (missing file, bad JSON, missing keys), name lookups that
//! come back empty, and remote Cloud Map failures which are surfaced
//! verbatim with no retry or translation. Usage errors (bad arguments,
//! unknown operation names) are handled by clap before this enum is
//! ever constructed.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SignpostError {
    #[error("Request file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },

    #[error("Request parse error in {path}:\n  {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("'{key}' is a required key for {operation}")]
    MissingKey {
        key: &'static str,
        operation: &'static str,
    },

    #[error("Namespace '{name}' not found")]
    NamespaceNotFound { name: String },

    #[error("Service '{name}' not found in namespace '{namespace}'")]
    ServiceNotFound { name: String, namespace: String },

    #[error("No instance with instance_name '{name}' under service '{service}'")]
    InstanceNotFound { name: String, service: String },

    #[error("Operation {operation_id} failed: {message}")]
    OperationFailed {
        operation_id: String,
        message: String,
    },

    #[error("Operation {operation_id} timed out after {elapsed_secs}s")]
    OperationTimeout {
        operation_id: String,
        elapsed_secs: u64,
    },

    #[error("Cloud Map {action} failed: {source}")]
    Remote {
        action: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
