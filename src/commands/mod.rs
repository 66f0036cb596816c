//! Command implementations for the header-graph CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: detect cyclic includes in a header tree
//! - graph: write the include graph as GraphViz DOT
//! - trace: graph the include relationships of trace-related files

pub mod check;
pub mod graph;
pub mod trace;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Trace { .. } => trace::execute_trace_command(command),
    }
}
