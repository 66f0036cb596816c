//! Configuration constants for header-graph
//!
//! This module contains all configurable constants used throughout the
//! application. These values can be overridden through command-line options
//! or environment variables.

/// Directory scanning configuration
pub mod scan {
    /// File extension that marks a header file
    pub const HEADER_EXTENSION: &str = "h";

    /// Directory names skipped during traversal when no explicit excludes
    /// are given
    pub const DEFAULT_EXCLUDES: &[&str] = &[".git"];
}

/// Trace-variant configuration
pub mod trace {
    /// Token that marks a file as trace-related
    pub const DEFAULT_TOKEN: &str = "trace";

    /// Name of the digraph block in trace DOT output
    pub const GRAPH_NAME: &str = "trace_includes";
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Name of the digraph block in header DOT output
    pub const GRAPH_NAME: &str = "includes";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_constants() {
        assert_eq!(scan::HEADER_EXTENSION, "h");
        assert_eq!(scan::DEFAULT_EXCLUDES, &[".git"]);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::GRAPH_NAME, "includes");
    }

    #[test]
    fn test_trace_constants() {
        assert_eq!(trace::DEFAULT_TOKEN, "trace");
    }
}
