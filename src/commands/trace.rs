//! Trace command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TraceGraphConfig;
use crate::error::HeaderGraphError;

impl FromCommand for TraceGraphConfig {
    fn from_command(command: Commands) -> Result<Self, HeaderGraphError> {
        match command {
            Commands::Trace {
                common,
                token,
                output,
                files,
            } => TraceGraphConfig::builder()
                .with_root(common.get_root())
                .with_token(token)
                .with_excludes(common.get_excludes())
                .with_output(output)
                .with_files(files)
                .build(),
            _ => Err(HeaderGraphError::ConfigurationError {
                message: "Invalid command type for TraceGraphConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TraceGraphConfig);

/// Execute the trace command for graphing trace-related files
pub fn execute_trace_command(command: Commands) -> Result<()> {
    let config = TraceGraphConfig::from_command(command)
        .wrap_err("Failed to parse trace command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::trace::TraceExecutor;
    TraceExecutor::execute(config)
}
