//! Graph command configuration

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub root: PathBuf,
    pub extension: String,
    pub excludes: Vec<String>,
    pub output: Option<PathBuf>,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    root: Option<PathBuf>,
    extension: Option<String>,
    excludes: Option<Vec<String>>,
    output: Option<Option<PathBuf>>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self {
            root: None,
            extension: None,
            excludes: None,
            output: None,
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

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::HeaderGraphError> {
        Ok(GraphOptions {
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
            output: self.output.ok_or_else(|| {
                crate::error::HeaderGraphError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
        })
    }
}
