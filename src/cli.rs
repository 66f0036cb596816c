use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "header-graph",
    about = "Build #include graphs for native codebases and detect cyclic includes",
    long_about = "header-graph scans a directory tree for header files, extracts #include \
                  directives, and builds a directed include graph. The graph can be written as \
                  GraphViz DOT for visualization, and cyclic include groups are reported via \
                  Tarjan's strongly-connected-components algorithm.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect cyclic includes in a header tree
    ///
    /// Scans every header under the root, builds the include graph, and
    /// reports each cyclic include group on its own line. Cyclic includes
    /// force guard gymnastics and hide layering violations; this command
    /// finds them before they calcify.
    #[command(
        long_about = "Scan a directory tree for header files, build the include graph, and use \
                      Tarjan's algorithm to find strongly connected components (cyclic include \
                      groups). Each group is reported with its members joined by arrows. A file \
                      that includes itself is reported as a one-member cycle."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// File extension that marks a header
        #[arg(long, default_value = crate::constants::scan::HEADER_EXTENSION, env = "HEADER_GRAPH_EXT")]
        ext: String,

        /// Exit with error code if cycles found
        #[arg(long, env = "HEADER_GRAPH_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Write the include graph as GraphViz DOT
    ///
    /// Builds the same graph as `check` and serializes it for downstream
    /// tooling: every node and every edge on its own line, quoted and
    /// semicolon-terminated, inside a named digraph block.
    #[command(
        long_about = "Build the header include graph and write it in GraphViz DOT format, either \
                      to stdout or to a file. The output lists every node and every edge, one \
                      statement per line, so it can be piped straight into dot(1) or consumed by \
                      other tooling. The file is written in one pass after the scan completes."
    )]
    Graph {
        #[command(flatten)]
        common: CommonArgs,

        /// File extension that marks a header
        #[arg(long, default_value = crate::constants::scan::HEADER_EXTENSION, env = "HEADER_GRAPH_EXT")]
        ext: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "HEADER_GRAPH_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Graph the include relationships of trace-related files
    ///
    /// Restricts the scan to files that mention a token in their name or
    /// contents, then graphs how those files include one another. Intended
    /// to help reason about the interconnections of a trace facility spread
    /// across a code base.
    #[command(
        long_about = "Find every file that mentions the token (default 'trace') in its file name \
                      or contents, then build a directed graph of the include relationships \
                      among them. Only include references that themselves carry the token become \
                      edges. The graph is written as GraphViz DOT, and the matched file list can \
                      additionally be written as a newline-separated listing."
    )]
    Trace {
        #[command(flatten)]
        common: CommonArgs,

        /// Token that marks a file as trace-related
        #[arg(long, default_value = crate::constants::trace::DEFAULT_TOKEN, env = "HEADER_GRAPH_TOKEN")]
        token: String,

        /// Output file for the DOT graph (stdout if not specified)
        #[arg(short, long, env = "HEADER_GRAPH_OUTPUT")]
        output: Option<PathBuf>,

        /// Optional path to write a newline-separated list of matched files
        #[arg(long, env = "HEADER_GRAPH_FILES")]
        files: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
