//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the check command
///
/// This struct contains all options for detecting and reporting cyclic
/// includes in a header tree.
#[derive(Debug, Clone)]
pub struct CheckCyclesConfig {
    /// Root directory to scan for headers
    pub root: PathBuf,
    /// File extension that marks a header
    pub extension: String,
    /// Directory names excluded from traversal
    pub excludes: Vec<String>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl CheckCyclesConfig {
    pub fn builder() -> CheckCyclesConfigBuilder {
        CheckCyclesConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckCyclesConfigBuilder {
    root: Option<PathBuf>,
    extension: Option<String>,
    excludes: Option<Vec<String>>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl CheckCyclesConfigBuilder {
    pub fn new() -> Self {
        Self {
            root: None,
            extension: None,
            excludes: None,
            format: None,
            error_on_cycles: None,
            max_cycles: None,
        }
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_extension(mut self, extension: String) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = Some(excludes);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckCyclesConfigBuilder {
    type Config = CheckCyclesConfig;

    fn build(self) -> Result<Self::Config, crate::error::HeaderGraphError> {
        Ok(CheckCyclesConfig {
            root: self.root.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: root".to_string(),
                }
            })?,
            extension: self.extension.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: extension".to_string(),
                }
            })?,
            excludes: self.excludes.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: excludes".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            error_on_cycles: self.error_on_cycles.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: error_on_cycles".to_string(),
                }
            })?,
            max_cycles: self.max_cycles.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: max_cycles".to_string(),
                }
            })?,
        })
    }
}
