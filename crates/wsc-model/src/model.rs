//! The contract model container handed to the validators

use crate::binding::{RootElement, Schema, TypeDefinition};
use crate::declaration::Declaration;
use crate::endpoint::EndpointInterface;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lookup of the interfaces a named type directly implements or extends
pub trait TypeHierarchy {
    /// Direct superinterfaces of `qualified_name`, or `None` for unknown types
    fn superinterfaces(&self, qualified_name: &str) -> Option<&[String]>;
}

/// An already-built contract and data-binding model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractModel {
    #[serde(default)]
    pub endpoint_interfaces: Vec<EndpointInterface>,

    #[serde(default)]
    pub schemas: Vec<Schema>,

    #[serde(default)]
    pub type_definitions: Vec<TypeDefinition>,

    #[serde(default)]
    pub root_elements: Vec<RootElement>,

    /// Other declared types that take part in the interface hierarchy
    #[serde(default)]
    pub declared_types: Vec<Declaration>,
}

impl ContractModel {
    /// Create an empty model
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a type definition by its qualified name
    #[must_use]
    pub fn type_definition(&self, qualified_name: &str) -> Option<&TypeDefinition> {
        self.type_definitions
            .iter()
            .find(|td| td.qualified_name() == qualified_name)
    }

    /// Find a type definition, failing when it is not part of the model
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] when no type definition has that name.
    pub fn require_type_definition(&self, qualified_name: &str) -> Result<&TypeDefinition> {
        self.type_definition(qualified_name)
            .ok_or_else(|| Error::unknown_type(qualified_name))
    }

    /// Find the schema owning a package
    #[must_use]
    pub fn schema(&self, package: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.package() == package)
    }

    /// Find an endpoint interface by its qualified name
    #[must_use]
    pub fn endpoint_interface(&self, qualified_name: &str) -> Option<&EndpointInterface> {
        self.endpoint_interfaces
            .iter()
            .find(|ei| ei.qualified_name() == qualified_name)
    }

    fn declaration(&self, qualified_name: &str) -> Option<&Declaration> {
        let interfaces = self.endpoint_interfaces.iter().map(|ei| &ei.declaration);
        let implementations = self
            .endpoint_interfaces
            .iter()
            .flat_map(|ei| ei.implementations.iter().map(|i| &i.declaration));
        let types = self.type_definitions.iter().map(|td| &td.declaration);

        interfaces
            .chain(implementations)
            .chain(types)
            .chain(self.declared_types.iter())
            .find(|d| d.name == qualified_name)
    }
}

impl TypeHierarchy for ContractModel {
    fn superinterfaces(&self, qualified_name: &str) -> Option<&[String]> {
        self.declaration(qualified_name)
            .map(|d| d.superinterfaces.as_slice())
    }
}
