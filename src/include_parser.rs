//! Extraction of `#include` references from source text

use regex::Regex;

/// Pattern matching a single include directive
///
/// Recognizes both the quoted and angle-bracket forms, with optional
/// whitespace after the `#`:
///
/// ```text
/// #include "foo/bar.h"
/// #include <sys/types.h>
///   # include "baz.h"
/// ```
///
/// Only the first directive on a line is considered; conditional compilation
/// is not evaluated, so includes inside `#ifdef` blocks are still reported.
pub struct IncludePattern {
    regex: Regex,
}

const INCLUDE_PATTERN: &str = r#"^\s*#\s*include\s*["<]([^">]+)[">]"#;

impl Default for IncludePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl IncludePattern {
    pub fn new() -> Self {
        Self {
            // The pattern is a constant; a compile failure is a programming
            // error, not a runtime condition.
            regex: Regex::new(INCLUDE_PATTERN).expect("include pattern must compile"),
        }
    }

    /// Extract the referenced file name from a single line, if any
    pub fn reference<'t>(&self, line: &'t str) -> Option<&'t str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Extract every include reference in a body of text, one per line,
    /// preserving encounter order
    pub fn references<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.lines().filter_map(|line| self.reference(line)).collect()
    }
}
