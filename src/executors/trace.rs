//! Trace command executor

use std::fs;
use std::io::{self, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::TraceGraphConfig;
use crate::constants::trace;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, IncludeGraphBuilder};
use crate::utils::string::pluralize;

pub struct TraceExecutor;

impl CommandExecutor for TraceExecutor {
    type Config = TraceGraphConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Scanning '{}' for files mentioning '{}'...",
            style("🔍").cyan(),
            config.root.display(),
            config.token
        );

        let mut builder = IncludeGraphBuilder::new();
        builder
            .build_trace_graph(&config.root, &config.token, &config.excludes)
            .wrap_err("Failed to build trace include graph")?;

        eprintln!(
            "{} {} matching {}",
            style("📈").blue(),
            builder.trace_files().len(),
            pluralize("file", builder.trace_files().len()),
        );

        let renderer = GraphRenderer::new();

        // Buffer the DOT output so the file is written in one complete pass
        let mut buffer = Vec::new();
        renderer
            .render_dot(builder.graph(), trace::GRAPH_NAME, &mut buffer)
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

        if let Some(path) = config.files.as_ref() {
            let mut listing = Vec::new();
            renderer
                .render_node_list(builder.trace_files(), &mut listing)
                .wrap_err("Failed to render file listing")?;
            fs::write(path, &listing)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!("Failed to write file listing '{}'", path.display())
                })?;
            eprintln!(
                "{} File listing written to {}",
                style("✓").green(),
                style(path.display()).bold()
            );
        }

        Ok(())
    }
}
