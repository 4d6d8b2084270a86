//! Loading serialized contract models

use crate::model::ContractModel;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, trace};

/// Loads a [`ContractModel`] produced by the model-construction phase
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelLoader;

impl ModelLoader {
    /// Create a new model loader
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Load a model from a file, picking YAML or JSON by extension
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load_from_file(&self, path: &Path) -> Result<ContractModel> {
        trace!("Loading contract model from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;

        let model = if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            self.load_from_yaml(&content)?
        } else {
            self.load_from_json(&content)?
        };

        debug!(
            "Loaded {} endpoint interfaces and {} type definitions from {}",
            model.endpoint_interfaces.len(),
            model.type_definitions.len(),
            path.display()
        );
        Ok(model)
    }

    /// Load a model from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when the JSON does not describe a model.
    pub fn load_from_json(&self, json: &str) -> Result<ContractModel> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidFormat(format!("JSON parse error: {e}")))
    }

    /// Load a model from a YAML string
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when the YAML does not describe a model.
    pub fn load_from_yaml(&self, yaml: &str) -> Result<ContractModel> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::InvalidFormat(format!("YAML parse error: {e}")))
    }
}
