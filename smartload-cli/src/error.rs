//! Error types emitted by the SmartLoad CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use smartload_core::ParseAlgorithmError;
use smartload_solver::SolveError;
use thiserror::Error;

use crate::request::RequestValidationError;

/// Errors emitted by the SmartLoad CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// The `--algorithm` option named no known algorithm.
    #[error(transparent)]
    InvalidAlgorithm(#[from] ParseAlgorithmError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The request payload failed validation.
    #[error("request in {path:?} failed validation: {source}")]
    InvalidRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// First rule the payload broke.
        #[source]
        source: RequestValidationError,
    },
    /// The solver rejected the request.
    #[error("solver failed: {source}")]
    Solve {
        /// Solver failure.
        #[source]
        source: SolveError,
    },
    /// Serialising the response failed.
    #[error("failed to serialise response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write response: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
