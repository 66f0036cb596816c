//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::HeaderGraphError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, HeaderGraphError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            writeln!(
                output,
                "{} No cycles detected",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} Found {} include {}:",
            style("❌").red().bold(),
            style(detector.cycle_count()).red().bold(),
            pluralize("cycle", detector.cycle_count())
        )?;

        let total_cycles = detector.cycle_count();
        let showing_all = self.max_cycles.is_none_or(|limit| limit >= total_cycles);

        let cycles_to_show = match self.max_cycles {
            Some(limit) => &detector.cycles()[..limit.min(total_cycles)],
            None => detector.cycles(),
        };

        // One component per line, members joined with an arrow so the chain
        // reads like the include path it is
        for cycle in cycles_to_show {
            writeln!(output, "{}", cycle.members().join(" -> "))?;
        }

        if !showing_all {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(cycles_to_show.len()).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::IncludeCycle;

    fn detector_with_cycles(count: usize) -> CycleDetector {
        let mut detector = CycleDetector::new();
        for i in 0..count {
            detector.add_cycle(IncludeCycle::new(vec![
                format!("a{i}.h"),
                format!("b{i}.h"),
            ]));
        }
        detector
    }

    #[test]
    fn test_report_no_cycles() {
        let detector = CycleDetector::new();
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&detector).unwrap();
        assert!(report.contains("No cycles detected"));
    }

    #[test]
    fn test_report_joins_members_with_arrows() {
        let mut detector = CycleDetector::new();
        detector.add_cycle(IncludeCycle::new(vec![
            "a.h".to_string(),
            "b.h".to_string(),
            "c.h".to_string(),
        ]));
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&detector).unwrap();
        assert!(report.contains("a.h -> b.h -> c.h"));
    }

    #[test]
    fn test_report_one_component_per_line() {
        let detector = detector_with_cycles(3);
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&detector).unwrap();
        let component_lines = report.lines().filter(|line| line.contains(" -> ")).count();
        assert_eq!(component_lines, 3);
    }

    #[test]
    fn test_report_respects_max_cycles() {
        let detector = detector_with_cycles(5);
        let generator = HumanReportGenerator::new(Some(2));

        let report = generator.generate_report(&detector).unwrap();
        let component_lines = report.lines().filter(|line| line.contains(" -> ")).count();
        assert_eq!(component_lines, 2);
        assert!(report.contains("Showing"));
    }

    #[test]
    fn test_report_max_cycles_larger_than_total() {
        let detector = detector_with_cycles(2);
        let generator = HumanReportGenerator::new(Some(10));

        let report = generator.generate_report(&detector).unwrap();
        let component_lines = report.lines().filter(|line| line.contains(" -> ")).count();
        assert_eq!(component_lines, 2);
        assert!(!report.contains("Showing"));
    }
}
