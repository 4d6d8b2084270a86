//! The default rule set and the whole-model driver
//!
//! [`DefaultValidator`] holds the read-only model and the factory resolver.
//! Its rules are split by construct across `endpoint`, `types` and
//! `accessors`; each rule returns a fresh [`ValidationResult`] and merges the
//! results of the finer-grained rules it delegates to.

use crate::result::ValidationResult;
use crate::resolver::FactoryResolver;
use tracing::debug;
use wsc_model::{AccessorKind, ContractModel, TypeDefinition, TypeDefinitionKind};

/// Validates constructs of one [`ContractModel`]
pub struct DefaultValidator<'a> {
    pub(crate) model: &'a ContractModel,
    pub(crate) resolver: &'a dyn FactoryResolver,
}

impl<'a> DefaultValidator<'a> {
    /// Create a validator over `model`, resolving factory methods with `resolver`
    pub fn new(model: &'a ContractModel, resolver: &'a dyn FactoryResolver) -> Self {
        Self { model, resolver }
    }

    /// Validate every top-level construct of the model, in model order
    ///
    /// Endpoint interfaces come first, then each type definition followed by
    /// its accessors and XML ID, then root elements.
    pub fn validate_model(&self) -> ValidationResult {
        debug!(
            "Validating model with {} endpoint interfaces, {} type definitions",
            self.model.endpoint_interfaces.len(),
            self.model.type_definitions.len()
        );
        let mut result = ValidationResult::new();

        for ei in &self.model.endpoint_interfaces {
            result.aggregate(self.validate_endpoint_interface(ei));
        }

        for td in &self.model.type_definitions {
            result.aggregate(self.validate_type_definition_by_kind(td));

            for accessor in td.attributes.iter().chain(td.elements.iter()) {
                result.aggregate(self.validate_accessor_by_kind(td, accessor));
            }

            if let Some(id) = &td.xml_id {
                result.aggregate(self.validate_xml_id(id));
            }
        }

        for root in &self.model.root_elements {
            result.aggregate(self.validate_root_element(root));
        }

        debug!(
            "Model validation finished with {} diagnostics",
            result.len()
        );
        result
    }

    /// Dispatch to the validator for the type definition's variant
    pub fn validate_type_definition_by_kind(&self, td: &TypeDefinition) -> ValidationResult {
        match td.kind {
            TypeDefinitionKind::Complex => self.validate_complex_type(td),
            TypeDefinitionKind::Simple => self.validate_simple_type(td),
            TypeDefinitionKind::Enum => self.validate_enum_type(td),
        }
    }

    /// Dispatch to the validator for the accessor's variant
    pub fn validate_accessor_by_kind(
        &self,
        td: &TypeDefinition,
        accessor: &wsc_model::Accessor,
    ) -> ValidationResult {
        match accessor.kind {
            AccessorKind::Attribute => self.validate_attribute(accessor),
            AccessorKind::Element => self.validate_element(td, accessor),
            AccessorKind::ElementRef => self.validate_element_ref(td, accessor),
            AccessorKind::Value => self.validate_value(accessor),
        }
    }
}
