//! Validation configuration

use crate::result::ValidationResult;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::trace;

/// How strictly a merged result is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrictnessLevel {
    /// Never fail; report only
    Lenient,
    /// Fail on errors
    #[default]
    Moderate,
    /// Fail on errors or warnings
    Strict,
}

impl StrictnessLevel {
    /// Whether a result is acceptable at this level
    #[must_use]
    pub fn passes(self, result: &ValidationResult) -> bool {
        match self {
            Self::Lenient => true,
            Self::Moderate => !result.has_errors(),
            Self::Strict => !result.has_errors() && !result.has_warnings(),
        }
    }
}

impl FromStr for StrictnessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "moderate" => Ok(Self::Moderate),
            "strict" => Ok(Self::Strict),
            other => Err(Error::Config(format!("unknown strictness level '{other}'"))),
        }
    }
}

/// A factory method known to exist on a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryMethod {
    pub class: String,
    pub method: String,
    #[serde(rename = "static", default = "default_static")]
    pub is_static: bool,
}

fn default_static() -> bool {
    true
}

/// Validation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Strictness level
    pub strictness: StrictnessLevel,
    /// Maximum diagnostics rendered in a report (0 = unlimited)
    pub max_errors: usize,
    /// Factory methods available to the resolver
    pub factories: Vec<FactoryMethod>,
}

impl ValidationConfig {
    /// Load configuration from a file, picking YAML or JSON by extension
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        trace!("Loading validation config from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;

        if path.extension().is_some_and(|e| e == "json") {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse configuration from YAML
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed input.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(format!("YAML parse error: {e}")))
    }

    /// Parse configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("JSON parse error: {e}")))
    }
}
