//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckCyclesConfig;
use crate::error::HeaderGraphError;

impl FromCommand for CheckCyclesConfig {
    fn from_command(command: Commands) -> Result<Self, HeaderGraphError> {
        match command {
            Commands::Check {
                common,
                format,
                cycle_display,
                ext,
                error_on_cycles,
            } => CheckCyclesConfig::builder()
                .with_root(common.get_root())
                .with_extension(ext)
                .with_excludes(common.get_excludes())
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(HeaderGraphError::ConfigurationError {
                message: "Invalid command type for CheckCyclesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckCyclesConfig);

/// Execute the check command for detecting cyclic includes
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckCyclesConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
