//! Trace command configuration

use std::path::PathBuf;

/// Configuration for the trace command
///
/// The trace variant graphs only files mentioning `token`, and can
/// additionally write the matched-file listing to `files`.
#[derive(Debug, Clone)]
pub struct TraceGraphConfig {
    pub root: PathBuf,
    pub token: String,
    pub excludes: Vec<String>,
    pub output: Option<PathBuf>,
    pub files: Option<PathBuf>,
}

impl TraceGraphConfig {
    pub fn builder() -> TraceGraphConfigBuilder {
        TraceGraphConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct TraceGraphConfigBuilder {
    root: Option<PathBuf>,
    token: Option<String>,
    excludes: Option<Vec<String>>,
    output: Option<Option<PathBuf>>,
    files: Option<Option<PathBuf>>,
}

impl TraceGraphConfigBuilder {
    pub fn new() -> Self {
        Self {
            root: None,
            token: None,
            excludes: None,
            output: None,
            files: None,
        }
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = Some(excludes);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_files(mut self, files: Option<PathBuf>) -> Self {
        self.files = Some(files);
        self
    }
}

impl crate::common::ConfigBuilder for TraceGraphConfigBuilder {
    type Config = TraceGraphConfig;

    fn build(self) -> Result<Self::Config, crate::error::HeaderGraphError> {
        Ok(TraceGraphConfig {
            root: self.root.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: root".to_string(),
                }
            })?,
            token: self.token.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: token".to_string(),
                }
            })?,
            excludes: self.excludes.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: excludes".to_string(),
                }
            })?,
            output: self.output.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
            files: self.files.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: files".to_string(),
                }
            })?,
        })
    }
}
