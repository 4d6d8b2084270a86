//! Rules for accessors: attributes, elements, element refs and values

use crate::result::ValidationResult;
use crate::validator::DefaultValidator;
use std::collections::BTreeSet;
use tracing::trace;
use wsc_model::{Accessor, AccessorBacking, DirectiveKind, QName, TypeDefinition, XmlTypeRef};

const WRAPPER_NAMESPACE_MESSAGE: &str = "Element wrappers of a different namespace than their containing type definition are not supported. \
     Use an explicit element directive to bind the element in another namespace.";

impl DefaultValidator<'_> {
    /// Rules shared by every accessor kind
    pub fn validate_accessor(&self, accessor: &Accessor) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let AccessorBacking::Property { getter, setter } = &accessor.backing {
            match (getter, setter) {
                (Some(getter), Some(setter)) => {
                    let duplicated: BTreeSet<DirectiveKind> = getter
                        .metadata
                        .kinds()
                        .filter(|kind| kind.is_xml_binding() && setter.metadata.has(*kind))
                        .collect();

                    for kind in duplicated {
                        result.add_error(
                            &setter.position,
                            format!(
                                "'{}' is duplicated between the getter and setter.",
                                kind.as_str()
                            ),
                        );
                    }
                }
                _ => result.add_error(
                    accessor.position(),
                    "A property accessor needs both a setter and a getter.",
                ),
            }
        }

        if accessor.is_id_ref() {
            let references_id = accessor
                .base_type
                .as_ref()
                .and_then(XmlTypeRef::class_name)
                .and_then(|name| self.model.type_definition(name))
                .is_some_and(|td| td.xml_id.is_some());

            if !references_id {
                result.add_error(
                    accessor.position(),
                    "An XML IDREF must have a base type that references another type that has an XML ID.",
                );
            }
        }

        result
    }

    /// Validate the XML ID accessor of a type definition
    pub fn validate_xml_id(&self, accessor: &Accessor) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !accessor.accessor_type.is_string() {
            result.add_error(accessor.position(), "An xml id must be a string.");
        }

        result
    }

    pub fn validate_attribute(&self, attribute: &Accessor) -> ValidationResult {
        let mut result = self.validate_accessor(attribute);

        match &attribute.base_type {
            None => result.add_error(attribute.position(), "No base type specified."),
            Some(base) => {
                if let Some(complex) = self.complex_definition(base) {
                    result.add_error(
                        attribute.position(),
                        format!(
                            "An attribute must have a simple base type. {} is a complex type.",
                            complex.qname()
                        ),
                    );
                }
            }
        }

        result
    }

    pub fn validate_value(&self, value: &Accessor) -> ValidationResult {
        let mut result = self.validate_accessor(value);

        match &value.base_type {
            None => result.add_error(value.position(), "No base type specified."),
            Some(base) => {
                if let Some(complex) = self.complex_definition(base) {
                    result.add_error(
                        value.position(),
                        format!(
                            "An xml value must have a simple base type. {} is a complex type.",
                            complex.qname()
                        ),
                    );
                }
            }
        }

        result
    }

    /// Validate an element accessor declared on `td`
    pub fn validate_element(&self, td: &TypeDefinition, element: &Accessor) -> ValidationResult {
        let mut result = self.validate_accessor(element);

        let parameterized = element.collection
            && !element
                .base_type
                .as_ref()
                .is_some_and(XmlTypeRef::is_any_type);
        let choice_count = element
            .declaration
            .metadata
            .xml_elements()
            .map_or(0, |elements| elements.choices.len());

        if parameterized && choice_count > 1 {
            result.add_error(
                element.position(),
                "A parameterized collection accessor cannot be bound to more than one element choice.",
            );
        }

        result.aggregate(Self::validate_wrapper_namespace(td, element));
        result
    }

    /// Validate an element-ref accessor declared on `td`
    pub fn validate_element_ref(
        &self,
        td: &TypeDefinition,
        element_ref: &Accessor,
    ) -> ValidationResult {
        let mut result = self.validate_accessor(element_ref);

        if element_ref.choices.is_empty() {
            result.add_error(
                element_ref.position(),
                format!("No root elements found for {}.", self.ref_qname(element_ref)),
            );
        }

        let metadata = &element_ref.declaration.metadata;
        if metadata.has(DirectiveKind::XmlElement) || metadata.has(DirectiveKind::XmlElements) {
            result.add_error(
                element_ref.position(),
                "An element ref cannot also carry an element or element choices directive.",
            );
        }

        result.aggregate(Self::validate_wrapper_namespace(td, element_ref));
        result
    }

    fn validate_wrapper_namespace(td: &TypeDefinition, accessor: &Accessor) -> ValidationResult {
        let mut result = ValidationResult::new();
        if !accessor.is_wrapped() {
            return result;
        }

        if let Some(namespace) = accessor.wrapper().and_then(|w| w.explicit_namespace()) {
            if namespace != td.namespace() {
                trace!(
                    "Wrapper of {} is in '{}', type {} is in '{}'",
                    accessor.name(),
                    namespace,
                    td.qualified_name(),
                    td.namespace()
                );
                result.add_error(accessor.position(), WRAPPER_NAMESPACE_MESSAGE);
            }
        }

        result
    }

    fn ref_qname(&self, accessor: &Accessor) -> QName {
        match &accessor.base_type {
            Some(XmlTypeRef::Known { known }) => known.qname(),
            Some(XmlTypeRef::Class { qualified_name }) => self
                .model
                .type_definition(qualified_name)
                .map_or_else(|| QName::new("", qualified_name.as_str()), TypeDefinition::qname),
            None => QName::new("", accessor.name()),
        }
    }
}
