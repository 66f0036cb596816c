//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckCyclesConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::IncludeGraphBuilder;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::utils::string::pluralize;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckCyclesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Scanning '{}' for *.{} files...",
            style("🔍").cyan(),
            config.root.display(),
            config.extension
        );

        let mut builder = IncludeGraphBuilder::new();
        builder
            .build_header_graph(&config.root, &config.extension, &config.excludes)
            .wrap_err("Failed to build include graph")?;

        let graph = builder.graph();
        eprintln!(
            "{} {} {} and {} {}",
            style("📈").blue(),
            graph.node_count(),
            pluralize("file", graph.node_count()),
            graph.edge_count(),
            pluralize("include", graph.edge_count()),
        );

        let mut detector = CycleDetector::new();
        detector.detect_cycles(graph);

        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_cycles);
                generator.generate_report(&detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&detector)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && detector.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
