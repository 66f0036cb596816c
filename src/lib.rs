//! # Header Graph - Detect Cyclic Includes in Native Codebases
//!
//! `header-graph` scans a directory tree of C/C++ sources, extracts
//! `#include` directives, and builds a directed include graph. The graph can
//! be serialized as GraphViz DOT for visualization, and cyclic include
//! groups are detected with Tarjan's strongly-connected-components
//! algorithm.
//!
//! ## Main Components
//!
//! - **Graph**: scans a root directory and builds the include graph, plus
//!   DOT and node-listing output
//! - **Detector**: finds cyclic include groups (Tarjan's SCC, iterative)
//! - **Reports**: human-readable and JSON cycle reports
//!
//! ## Usage
//!
//! ### Example: Checking a header tree for cycles
//!
//! ```no_run
//! use std::path::Path;
//!
//! use header_graph::detector::CycleDetector;
//! use header_graph::graph::IncludeGraphBuilder;
//! use header_graph::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Scan the tree and build the include graph
//! let mut builder = IncludeGraphBuilder::new();
//! builder.build_header_graph(Path::new("include"), "h", &[".git".to_string()])?;
//!
//! println!(
//!     "{} files, {} includes",
//!     builder.graph().node_count(),
//!     builder.graph().edge_count()
//! );
//!
//! // Step 2: Detect cyclic include groups
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(builder.graph());
//!
//! // Step 3: Report
//! if detector.has_cycles() {
//!     let report = HumanReportGenerator::new(None);
//!     println!("{}", report.generate_report(&detector)?);
//! } else {
//!     println!("No cycles detected");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Writing the graph as DOT
//!
//! ```no_run
//! use std::path::Path;
//!
//! use header_graph::graph::{GraphRenderer, IncludeGraphBuilder};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut builder = IncludeGraphBuilder::new();
//! builder.build_header_graph(Path::new("include"), "h", &[])?;
//!
//! let renderer = GraphRenderer::new();
//! let mut dot_output = Vec::new();
//! renderer.render_dot(builder.graph(), "includes", &mut dot_output)?;
//!
//! std::fs::write("header_graph.dot", dot_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod include_parser;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
