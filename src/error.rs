use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum HeaderGraphError {
    #[error("Failed to scan root directory '{path}'")]
    #[diagnostic(
        code(header_graph::scan_error),
        help("Check that the directory exists and you have read permissions")
    )]
    ScanError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(header_graph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(header_graph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(header_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(header_graph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(header_graph::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}
