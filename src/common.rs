//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Root directory to scan (defaults to current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Directory name to exclude from traversal; may be given multiple times
    #[arg(long, value_name = "NAME", env = "HEADER_GRAPH_EXCLUDE")]
    pub exclude: Vec<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "HEADER_GRAPH_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "HEADER_GRAPH_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl CommonArgs {
    /// Get the scan root, using the current directory if none provided
    pub fn get_root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the excluded directory names, defaulting to version-control
    /// directories when none provided
    pub fn get_excludes(&self) -> Vec<String> {
        if self.exclude.is_empty() {
            crate::constants::scan::DEFAULT_EXCLUDES
                .iter()
                .map(|name| name.to_string())
                .collect()
        } else {
            self.exclude.clone()
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::HeaderGraphError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(
        command: crate::cli::Commands,
    ) -> Result<Self, crate::error::HeaderGraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::HeaderGraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
