//! Diagnostic accumulator

use serde::{Deserialize, Serialize};
use std::fmt;
use wsc_model::Position;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks generation
    Error,
    /// Informational only
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Source position of the offending declaration
    pub position: Position,
    /// Human-readable message
    pub message: String,
    /// Severity level
    pub severity: Severity,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(position: &Position, message: impl Into<String>) -> Self {
        Self {
            position: position.clone(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Create a warning diagnostic
    pub fn warning(position: &Position, message: impl Into<String>) -> Self {
        Self {
            position: position.clone(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.position, self.severity, self.message)
    }
}

/// Ordered, mergeable collection of diagnostics
///
/// Entries keep insertion order. [`ValidationResult::aggregate`] appends the
/// other result's entries after this result's own, so merging is associative
/// and the empty result is its identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create an empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn add_error(&mut self, position: &Position, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(position, message));
    }

    /// Record a warning
    pub fn add_warning(&mut self, position: &Position, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(position, message));
    }

    /// Append another result's entries after this one's
    pub fn aggregate(&mut self, other: ValidationResult) -> &mut Self {
        self.diagnostics.extend(other.diagnostics);
        self
    }

    /// Owned form of [`ValidationResult::aggregate`]
    #[must_use]
    pub fn merged(mut self, other: ValidationResult) -> Self {
        self.aggregate(other);
        self
    }

    /// Check if there are any errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Check if there are any warnings
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| !d.is_error())
    }

    /// All entries in order
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ValidationResult::new(), ValidationResult::merged)
    }
}

impl Extend<Diagnostic> for ValidationResult {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}
