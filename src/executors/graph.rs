//! Graph command executor

use std::fs;
use std::io::{self, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::GraphOptions;
use crate::constants::output;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, IncludeGraphBuilder};

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating include graph for '{}'...",
            style("📊").cyan(),
            config.root.display()
        );

        let mut builder = IncludeGraphBuilder::new();
        builder
            .build_header_graph(&config.root, &config.extension, &config.excludes)
            .wrap_err("Failed to build include graph")?;

        // Render into a buffer first so the output file appears complete or
        // not at all, never partially written.
        let renderer = GraphRenderer::new();
        let mut buffer = Vec::new();
        renderer
            .render_dot(builder.graph(), output::GRAPH_NAME, &mut buffer)
            .wrap_err("Failed to render DOT graph")?;

        match config.output.as_ref() {
            Some(path) => {
                fs::write(path, &buffer)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to write output file '{}'", path.display())
                    })?;
                eprintln!(
                    "{} Graph written to {}",
                    style("✓").green(),
                    style(path.display()).bold()
                );
            }
            None => {
                io::stdout().write_all(&buffer).into_diagnostic()?;
            }
        }

        Ok(())
    }
}
