//! Error types emitted by the Deadzone CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers return
//! `Result<_, CliError>` and the workspace enables
//! `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

use deadzone_scorer::WeightedScorerError;

/// Errors emitted by the Deadzone CLI.
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
        /// Name of the missing CLI field.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Name of the CLI field the path came from.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// Opening an input file failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        /// Path of the file that could not be opened.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Parsing a JSON input file failed.
    #[error("failed to parse {path:?}: {source}")]
    ParseInput {
        /// Path of the file that could not be parsed.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Building the scoring engine failed.
    #[error("failed to build the scoring engine: {0}")]
    Engine(#[from] WeightedScorerError),
    /// Writing the recommendation report failed.
    #[error("failed to write the recommendation report: {source}")]
    WriteOutput {
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
