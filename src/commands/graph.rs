//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::HeaderGraphError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, HeaderGraphError> {
        match command {
            Commands::Graph {
                common,
                ext,
                output,
            } => GraphOptions::builder()
                .with_root(common.get_root())
                .with_extension(ext)
                .with_excludes(common.get_excludes())
                .with_output(output)
                .build(),
            _ => Err(HeaderGraphError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for writing the include graph as DOT
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
