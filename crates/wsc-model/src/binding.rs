//! XML data-binding model: schemas, type definitions and accessors

use crate::declaration::{Declaration, Modifier, TypeMirror};
use crate::directive::{DirectiveKind, ElementWrapperDirective};
use crate::position::{Position, QName};
use serde::{Deserialize, Serialize};

/// Namespace of the built-in schema types
pub const XML_SCHEMA_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Package-level metadata container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub declaration: Declaration,

    #[serde(default)]
    pub namespace: Option<String>,
}

impl Schema {
    pub fn position(&self) -> &Position {
        &self.declaration.position
    }

    /// Package name
    pub fn package(&self) -> &str {
        &self.declaration.name
    }
}

/// Built-in schema types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KnownXmlType {
    /// The universal type every other type derives from
    AnyType,
    AnySimpleType,
    String,
    Boolean,
    Int,
    Long,
    Short,
    Byte,
    Float,
    Double,
    Decimal,
    Integer,
    DateTime,
    Date,
    Time,
    Base64Binary,
    Id,
    Idref,
    AnyUri,
    QName,
}

impl KnownXmlType {
    /// Local name in the schema namespace
    #[must_use]
    pub fn local_name(self) -> &'static str {
        match self {
            Self::AnyType => "anyType",
            Self::AnySimpleType => "anySimpleType",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::DateTime => "dateTime",
            Self::Date => "date",
            Self::Time => "time",
            Self::Base64Binary => "base64Binary",
            Self::Id => "ID",
            Self::Idref => "IDREF",
            Self::AnyUri => "anyURI",
            Self::QName => "QName",
        }
    }

    #[must_use]
    pub fn qname(self) -> QName {
        QName::new(XML_SCHEMA_NAMESPACE, self.local_name())
    }
}

/// The schema type an accessor or type definition is bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "xml_type", rename_all = "snake_case")]
pub enum XmlTypeRef {
    Known { known: KnownXmlType },
    /// A user type, resolved through the model by qualified name
    Class { qualified_name: String },
}

impl XmlTypeRef {
    #[must_use]
    pub fn known(known: KnownXmlType) -> Self {
        Self::Known { known }
    }

    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self::Class {
            qualified_name: qualified_name.into(),
        }
    }

    #[must_use]
    pub fn is_any_type(&self) -> bool {
        matches!(
            self,
            Self::Known {
                known: KnownXmlType::AnyType
            }
        )
    }

    /// Qualified name of the referenced user type, if any
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Class { qualified_name } => Some(qualified_name),
            Self::Known { .. } => None,
        }
    }
}

/// Tagged variant of a type definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDefinitionKind {
    #[default]
    Complex,
    Simple,
    Enum,
}

/// A constructor of a bound class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub parameter_count: usize,
}

impl Constructor {
    /// A public constructor taking no arguments
    #[must_use]
    pub fn public_no_arg() -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            parameter_count: 0,
        }
    }

    #[must_use]
    pub fn is_public_no_arg(&self) -> bool {
        self.modifiers.contains(&Modifier::Public) && self.parameter_count == 0
    }
}

/// A data-binding model of a structured or scalar type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub declaration: Declaration,

    #[serde(default)]
    pub kind: TypeDefinitionKind,

    /// XML local name
    pub name: String,

    #[serde(default)]
    pub target_namespace: Option<String>,

    /// Package whose [`Schema`] owns this type
    #[serde(default)]
    pub package: String,

    /// Qualified name of the enclosing type, for nested types
    #[serde(default)]
    pub declaring_type: Option<String>,

    #[serde(default)]
    pub constructors: Vec<Constructor>,

    #[serde(default)]
    pub base_type: Option<XmlTypeRef>,

    #[serde(default)]
    pub value: Option<Accessor>,

    #[serde(default)]
    pub attributes: Vec<Accessor>,

    #[serde(default)]
    pub elements: Vec<Accessor>,

    #[serde(default)]
    pub xml_id: Option<Accessor>,
}

impl TypeDefinition {
    /// Create a type definition with no accessors
    pub fn new(declaration: Declaration, kind: TypeDefinitionKind, name: impl Into<String>) -> Self {
        Self {
            declaration,
            kind,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn position(&self) -> &Position {
        &self.declaration.position
    }

    pub fn qualified_name(&self) -> &str {
        &self.declaration.name
    }

    /// Target namespace, empty when none was declared
    pub fn namespace(&self) -> &str {
        self.target_namespace.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn qname(&self) -> QName {
        QName::new(self.namespace(), self.name.clone())
    }

    #[must_use]
    pub fn is_complex(&self) -> bool {
        self.kind == TypeDefinitionKind::Complex
    }
}

/// Tagged variant of an accessor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Attribute,
    #[default]
    Element,
    ElementRef,
    Value,
}

/// How an accessor is backed in source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backing", rename_all = "snake_case")]
pub enum AccessorBacking {
    #[default]
    Field,
    Property {
        #[serde(default)]
        getter: Option<Declaration>,
        #[serde(default)]
        setter: Option<Declaration>,
    },
}

/// A bound property or field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    pub declaration: Declaration,

    #[serde(default)]
    pub kind: AccessorKind,

    #[serde(default)]
    pub backing: AccessorBacking,

    /// Source-level type of the accessor
    #[serde(default)]
    pub accessor_type: TypeMirror,

    /// Schema type of a single item (the component type of a collection)
    #[serde(default)]
    pub base_type: Option<XmlTypeRef>,

    #[serde(default)]
    pub collection: bool,

    /// Resolved root-element choices of an element ref
    #[serde(default)]
    pub choices: Vec<QName>,
}

impl Accessor {
    /// Create a field-backed accessor
    pub fn new(declaration: Declaration, kind: AccessorKind) -> Self {
        Self {
            declaration,
            kind,
            ..Self::default()
        }
    }

    pub fn position(&self) -> &Position {
        &self.declaration.position
    }

    pub fn name(&self) -> &str {
        &self.declaration.name
    }

    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        self.declaration
            .metadata
            .has(DirectiveKind::XmlElementWrapper)
    }

    pub fn wrapper(&self) -> Option<&ElementWrapperDirective> {
        self.declaration.metadata.element_wrapper()
    }

    #[must_use]
    pub fn is_id_ref(&self) -> bool {
        self.declaration.metadata.has(DirectiveKind::XmlIdRef)
    }
}

/// A global element declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootElement {
    pub declaration: Declaration,

    pub name: QName,

    /// Qualified name of the bound type definition
    #[serde(default)]
    pub type_definition: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::DeclarationKind;
    use crate::directive::Directive;

    fn decl(name: &str, kind: DeclarationKind) -> Declaration {
        Declaration::new(name, kind, Position::default())
    }

    #[test]
    fn test_known_type_qname() {
        assert_eq!(
            KnownXmlType::String.qname().to_string(),
            "{http://www.w3.org/2001/XMLSchema}string"
        );
        assert!(XmlTypeRef::known(KnownXmlType::AnyType).is_any_type());
        assert!(!XmlTypeRef::known(KnownXmlType::String).is_any_type());
    }

    #[test]
    fn test_type_ref_class_name() {
        let class = XmlTypeRef::class("com.example.Address");
        assert_eq!(class.class_name(), Some("com.example.Address"));
        assert_eq!(XmlTypeRef::known(KnownXmlType::Int).class_name(), None);
    }

    #[test]
    fn test_constructor_no_arg() {
        assert!(Constructor::public_no_arg().is_public_no_arg());
        let private = Constructor {
            modifiers: vec![Modifier::Private],
            parameter_count: 0,
        };
        assert!(!private.is_public_no_arg());
        let with_args = Constructor {
            modifiers: vec![Modifier::Public],
            parameter_count: 2,
        };
        assert!(!with_args.is_public_no_arg());
    }

    #[test]
    fn test_type_definition_qname() {
        let mut td = TypeDefinition::new(
            decl("com.example.Price", DeclarationKind::Class),
            TypeDefinitionKind::Complex,
            "price",
        );
        assert!(td.is_complex());
        assert_eq!(td.qname().to_string(), "price");

        td.target_namespace = Some("urn:shop".to_string());
        assert_eq!(td.namespace(), "urn:shop");
    }

    #[test]
    fn test_accessor_flags() {
        let mut accessor = Accessor::new(decl("items", DeclarationKind::Field), AccessorKind::Element);
        assert!(!accessor.is_wrapped());
        accessor.declaration.metadata.push(Directive::XmlElementWrapper(
            ElementWrapperDirective::default(),
        ));
        accessor.declaration.metadata.push(Directive::XmlIdRef);
        assert!(accessor.is_wrapped());
        assert!(accessor.wrapper().is_some());
        assert!(accessor.is_id_ref());
    }
}
