//! Validation reporter

use crate::config::{StrictnessLevel, ValidationConfig};
use crate::result::{Diagnostic, ValidationResult};
use crate::Result;
use serde::Serialize;
use std::fmt::Write as _;

/// Summary of a merged result, judged at a strictness level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the result passes at `strictness`
    pub passed: bool,
    pub strictness: StrictnessLevel,
    pub error_count: usize,
    pub warning_count: usize,
    /// Diagnostics kept for rendering, in result order
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics dropped by the `max_errors` limit
    pub truncated: usize,
}

impl ValidationReport {
    /// Render one line per diagnostic followed by a summary line
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(out, "{diagnostic}");
        }
        if self.truncated > 0 {
            let _ = writeln!(out, "... {} more diagnostics not shown", self.truncated);
        }
        let _ = writeln!(
            out,
            "{}: {} error(s), {} warning(s)",
            if self.passed { "PASSED" } else { "FAILED" },
            self.error_count,
            self.warning_count
        );
        out
    }

    /// Render the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reports validation results
#[derive(Debug, Clone, Default)]
pub struct ValidationReporter {
    strictness: StrictnessLevel,
    max_errors: usize,
}

impl ValidationReporter {
    /// Create a new validation reporter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reporter using the strictness and limit of `config`
    #[must_use]
    pub fn with_config(config: &ValidationConfig) -> Self {
        Self {
            strictness: config.strictness,
            max_errors: config.max_errors,
        }
    }

    /// Build a report from a merged result
    ///
    /// Counts and the pass verdict always cover the whole result; only the
    /// rendered diagnostics are limited.
    #[must_use]
    pub fn report(&self, result: &ValidationResult) -> ValidationReport {
        let total = result.len();
        let shown = if self.max_errors == 0 {
            total
        } else {
            total.min(self.max_errors)
        };

        ValidationReport {
            passed: self.strictness.passes(result),
            strictness: self.strictness,
            error_count: result.error_count(),
            warning_count: result.warnings().count(),
            diagnostics: result.diagnostics()[..shown].to_vec(),
            truncated: total - shown,
        }
    }
}
