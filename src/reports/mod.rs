//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::detector::CycleDetector;
use crate::error::HeaderGraphError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, HeaderGraphError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
