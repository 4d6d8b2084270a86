//! Rules for schemas, type definitions and root elements

use crate::resolver::MethodResolution;
use crate::result::ValidationResult;
use crate::validator::DefaultValidator;
use std::collections::HashSet;
use tracing::{debug, trace, warn};
use wsc_model::{
    Constructor, DirectiveKind, RootElement, Schema, TypeDefinition, TypeDefinitionKind,
    XmlTypeRef,
};

impl<'a> DefaultValidator<'a> {
    /// Rules shared by complex, simple and enum type definitions
    pub fn validate_type_definition(&self, td: &TypeDefinition) -> ValidationResult {
        let mut result = match self.model.schema(&td.package) {
            Some(schema) => self.validate_package(schema),
            None => {
                warn!("No schema for package '{}' of {}", td.package, td.qualified_name());
                ValidationResult::new()
            }
        };
        let position = td.position();
        let metadata = &td.declaration.metadata;

        if metadata.has(DirectiveKind::XmlTransient) {
            result.add_error(position, "A transient type cannot be a type definition.");
        }

        let mut needs_no_arg_constructor = td.kind != TypeDefinitionKind::Enum;
        if let Some(xml_type) = metadata.xml_type() {
            if td.declaring_type.is_some() && !td.declaration.is_static() {
                result.add_error(
                    position,
                    "An xml type must be either a top-level class or a nested static class.",
                );
            }

            if xml_type.declares_factory() {
                needs_no_arg_constructor = false;
                let class = xml_type
                    .factory_class
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .unwrap_or(td.qualified_name());
                let method = xml_type.factory_method.as_deref().unwrap_or_default();

                match self.resolver.resolve(class, method) {
                    MethodResolution::FoundStatic => {}
                    MethodResolution::FoundNonStatic => result.add_error(
                        position,
                        format!("'{method}' must be a static, no-arg method on '{class}'."),
                    ),
                    MethodResolution::NotFound => result.add_error(
                        position,
                        format!("Unknown factory method '{method}' on class '{class}'."),
                    ),
                }
            } else if metadata.type_adapter().is_some() {
                needs_no_arg_constructor = false;
            }
        }

        if needs_no_arg_constructor && !td.constructors.iter().any(Constructor::is_public_no_arg) {
            result.add_error(
                position,
                "A type definition must have a public no-arg constructor or be annotated with a factory method.",
            );
        }

        if let Some(value) = &td.value {
            result.aggregate(self.validate_value(value));

            if !td.elements.is_empty() {
                result.add_error(
                    value.position(),
                    "A type definition cannot have both an xml value and a child element.",
                );
            }
        }

        result
    }

    /// Validate a complex type and its base-type chain
    pub fn validate_complex_type(&self, td: &TypeDefinition) -> ValidationResult {
        debug!("Validating complex type {}", td.qualified_name());
        let mut result = self.validate_type_definition(td);
        let position = td.position();

        let mut visited: HashSet<&str> = HashSet::from([td.qualified_name()]);
        let mut base_type = td.base_type.as_ref();
        while let Some(super_type) = base_type.and_then(|base| self.complex_definition(base)) {
            if !visited.insert(super_type.qualified_name()) {
                warn!(
                    "Base type chain of {} cycles through {}",
                    td.qualified_name(),
                    super_type.qualified_name()
                );
                result.add_error(
                    position,
                    format!(
                        "Cyclic base type chain through '{}'.",
                        super_type.qualified_name()
                    ),
                );
                break;
            }

            if super_type.value.is_some() {
                result.add_error(
                    position,
                    format!(
                        "A complex type cannot subclass another complex type ({}) that has an xml value.",
                        super_type.qualified_name()
                    ),
                );
            }
            base_type = super_type.base_type.as_ref();
        }

        if td.value.is_some() {
            if !td.elements.is_empty() {
                result.add_error(
                    position,
                    "A type definition cannot have both an xml value and elements.",
                );
            } else if td.attributes.is_empty() {
                result.add_error(position, "Should be a simple type, not a complex type.");
            }
        }

        result
    }

    /// Validate a simple type
    pub fn validate_simple_type(&self, td: &TypeDefinition) -> ValidationResult {
        debug!("Validating simple type {}", td.qualified_name());
        let mut result = self.validate_type_definition(td);

        match &td.base_type {
            None => result.add_error(td.position(), "No base type specified."),
            Some(base) => {
                if let Some(complex) = self.complex_definition(base) {
                    result.add_error(
                        td.position(),
                        format!(
                            "A simple type must have a simple base type. {} is a complex type.",
                            complex.qname()
                        ),
                    );
                }
            }
        }

        result
    }

    /// Validate an enum type; enums follow the simple-type rules
    pub fn validate_enum_type(&self, td: &TypeDefinition) -> ValidationResult {
        self.validate_simple_type(td)
    }

    /// Validate a root element declaration; no rules apply yet
    pub fn validate_root_element(&self, root: &RootElement) -> ValidationResult {
        trace!("No root element rules for {}", root.name);
        ValidationResult::new()
    }

    /// Validate package-level schema type mappings
    pub fn validate_package(&self, schema: &Schema) -> ValidationResult {
        let mut result = ValidationResult::new();
        let metadata = &schema.declaration.metadata;

        if let Some(mapping) = metadata.schema_type() {
            if mapping.target_type.as_deref().is_none_or(str::is_empty) {
                result.add_error(
                    schema.position(),
                    format!(
                        "A type must be specified at the package-level for the schema type mapping '{}'.",
                        mapping.name
                    ),
                );
            }
        }

        if let Some(mappings) = metadata.schema_types() {
            for mapping in &mappings.entries {
                if mapping.target_type.as_deref().is_none_or(str::is_empty) {
                    result.add_error(
                        schema.position(),
                        format!(
                            "A type must be specified at the package-level for all schema type mappings; '{}' has none.",
                            mapping.name
                        ),
                    );
                }
            }
        }

        result
    }

    /// The complex type definition a schema type refers to, if any
    pub(crate) fn complex_definition(&self, xml_type: &XmlTypeRef) -> Option<&'a TypeDefinition> {
        let name = xml_type.class_name()?;
        match self.model.require_type_definition(name) {
            Ok(td) => Some(td).filter(|td| td.is_complex()),
            Err(e) => {
                trace!("{e}");
                None
            }
        }
    }
}
