use std::io::Write;

use miette::Result;

use crate::error::HeaderGraphError;
use crate::graph::IncludeGraph;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(HeaderGraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(HeaderGraphError::from)
    };
}

/// Writer for the textual graph outputs
///
/// The DOT output is consumed by downstream visualization tooling, so its
/// shape is fixed: a named digraph block, one statement per line, node
/// identifiers double-quoted, every statement semicolon-terminated. No
/// styling attributes are emitted.
pub struct GraphRenderer;

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the graph as a DOT digraph, listing every node and then every
    /// edge in insertion order
    pub fn render_dot(
        &self,
        graph: &IncludeGraph,
        name: &str,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph {name} {{")?;

        for node in graph.nodes() {
            writeln_out!(output, "    \"{node}\";")?;
        }
        for (from, to) in graph.edges() {
            writeln_out!(output, "    \"{}\" -> \"{}\";", graph.name(from), graph.name(to))?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Render a plain newline-separated listing of node identifiers
    pub fn render_node_list(&self, nodes: &[String], output: &mut dyn Write) -> Result<()> {
        for node in nodes {
            writeln_out!(output, "{node}")?;
        }
        Ok(())
    }
}
