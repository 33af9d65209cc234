//! Error types emitted by the Yatra CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use yatra_core::{CatalogError, InterestSetError, PlanRequestValidationError};

/// Errors emitted by the Yatra CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalog JSON could not be decoded.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The bundled catalog could not be decoded.
    #[error("failed to parse the built-in catalog: {0}")]
    ParseBuiltinCatalog(#[source] serde_json::Error),
    /// The catalog contents failed validation.
    #[error("catalog {origin} is invalid: {source}")]
    InvalidCatalog {
        origin: String,
        #[source]
        source: CatalogError,
    },
    /// An interest name failed validation.
    #[error("invalid --{field} value: {source}")]
    InvalidInterests {
        field: &'static str,
        #[source]
        source: InterestSetError,
    },
    /// The plan request failed validation.
    #[error("invalid plan request: {source}")]
    InvalidRequest {
        #[source]
        source: PlanRequestValidationError,
    },
    /// Serializing the output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
