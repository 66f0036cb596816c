//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::HeaderGraphError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, HeaderGraphError> {
        let report = json!({
            "has_cycles": detector.has_cycles(),
            "cycle_count": detector.cycle_count(),
            "cycles": detector.cycles(),
        });

        serde_json::to_string_pretty(&report).map_err(HeaderGraphError::Json)
    }
}
