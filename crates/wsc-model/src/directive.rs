//! Typed declarative metadata attached to declarations
//!
//! Every directive kind carries its own structured payload. Validators query
//! the directives they care about through the typed accessors on [`Metadata`]
//! instead of looking them up by name.

use serde::{Deserialize, Serialize};

/// Namespace value meaning "inherit from the enclosing construct"
pub const INHERIT_NAMESPACE: &str = "##default";

/// Marks a declaration as a service contract or service implementation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebServiceDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
    /// Name of another endpoint interface this declaration delegates to
    #[serde(default)]
    pub endpoint_interface: Option<String>,
}

impl WebServiceDirective {
    /// Whether the directive points at a separate endpoint interface
    #[must_use]
    pub fn references_endpoint_interface(&self) -> bool {
        self.endpoint_interface
            .as_deref()
            .is_some_and(|name| !name.is_empty())
    }
}

/// Operation-level overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebMethodDirective {
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub exclude: bool,
}

/// Parameter-level overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebParamDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
}

/// Type-level binding directive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlTypeDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub factory_class: Option<String>,
    #[serde(default)]
    pub factory_method: Option<String>,
    #[serde(default)]
    pub prop_order: Vec<String>,
}

impl XmlTypeDirective {
    /// Whether a factory class or factory method was declared
    #[must_use]
    pub fn declares_factory(&self) -> bool {
        let declared = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        declared(&self.factory_class) || declared(&self.factory_method)
    }
}

/// Custom adapter used to marshal a type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAdapterDirective {
    pub adapter: String,
}

/// Package-level mapping of a schema type name to a concrete type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTypeDirective {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    /// Concrete target type; `None` leaves the mapping at its unspecified default
    #[serde(default)]
    pub target_type: Option<String>,
}

/// Batch form of [`SchemaTypeDirective`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTypesDirective {
    #[serde(default)]
    pub entries: Vec<SchemaTypeDirective>,
}

/// Binds an accessor to a single named element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub target_type: Option<String>,
}

/// Binds an accessor to a finite set of element choices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementsDirective {
    #[serde(default)]
    pub choices: Vec<ElementDirective>,
}

/// Wraps a collection accessor in an enclosing element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementWrapperDirective {
    #[serde(default)]
    pub name: Option<String>,
    /// `None` or [`INHERIT_NAMESPACE`] inherit the containing type's namespace
    #[serde(default)]
    pub namespace: Option<String>,
}

impl ElementWrapperDirective {
    /// The explicitly declared namespace, if the wrapper does not inherit one
    #[must_use]
    pub fn explicit_namespace(&self) -> Option<&str> {
        match self.namespace.as_deref() {
            None | Some(INHERIT_NAMESPACE) => None,
            Some(ns) => Some(ns),
        }
    }
}

/// Binds an accessor to an attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// A single declarative directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum Directive {
    WebService(WebServiceDirective),
    WebMethod(WebMethodDirective),
    WebParam(WebParamDirective),
    XmlType(XmlTypeDirective),
    XmlTransient,
    XmlTypeAdapter(TypeAdapterDirective),
    XmlSchemaType(SchemaTypeDirective),
    XmlSchemaTypes(SchemaTypesDirective),
    XmlElement(ElementDirective),
    XmlElements(ElementsDirective),
    XmlElementRef,
    XmlElementWrapper(ElementWrapperDirective),
    XmlAttribute(AttributeDirective),
    XmlValue,
    XmlId,
    XmlIdRef,
}

/// Payload-free discriminant of a [`Directive`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveKind {
    WebService,
    WebMethod,
    WebParam,
    XmlType,
    XmlTransient,
    XmlTypeAdapter,
    XmlSchemaType,
    XmlSchemaTypes,
    XmlElement,
    XmlElements,
    XmlElementRef,
    XmlElementWrapper,
    XmlAttribute,
    XmlValue,
    XmlId,
    XmlIdRef,
}

impl DirectiveKind {
    /// Whether the directive belongs to the XML data-binding family
    #[must_use]
    pub fn is_xml_binding(self) -> bool {
        !matches!(self, Self::WebService | Self::WebMethod | Self::WebParam)
    }

    /// Display name used in diagnostics
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebService => "web_service",
            Self::WebMethod => "web_method",
            Self::WebParam => "web_param",
            Self::XmlType => "xml_type",
            Self::XmlTransient => "xml_transient",
            Self::XmlTypeAdapter => "xml_type_adapter",
            Self::XmlSchemaType => "xml_schema_type",
            Self::XmlSchemaTypes => "xml_schema_types",
            Self::XmlElement => "xml_element",
            Self::XmlElements => "xml_elements",
            Self::XmlElementRef => "xml_element_ref",
            Self::XmlElementWrapper => "xml_element_wrapper",
            Self::XmlAttribute => "xml_attribute",
            Self::XmlValue => "xml_value",
            Self::XmlId => "xml_id",
            Self::XmlIdRef => "xml_id_ref",
        }
    }
}

impl Directive {
    /// The payload-free kind of this directive
    #[must_use]
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::WebService(_) => DirectiveKind::WebService,
            Self::WebMethod(_) => DirectiveKind::WebMethod,
            Self::WebParam(_) => DirectiveKind::WebParam,
            Self::XmlType(_) => DirectiveKind::XmlType,
            Self::XmlTransient => DirectiveKind::XmlTransient,
            Self::XmlTypeAdapter(_) => DirectiveKind::XmlTypeAdapter,
            Self::XmlSchemaType(_) => DirectiveKind::XmlSchemaType,
            Self::XmlSchemaTypes(_) => DirectiveKind::XmlSchemaTypes,
            Self::XmlElement(_) => DirectiveKind::XmlElement,
            Self::XmlElements(_) => DirectiveKind::XmlElements,
            Self::XmlElementRef => DirectiveKind::XmlElementRef,
            Self::XmlElementWrapper(_) => DirectiveKind::XmlElementWrapper,
            Self::XmlAttribute(_) => DirectiveKind::XmlAttribute,
            Self::XmlValue => DirectiveKind::XmlValue,
            Self::XmlId => DirectiveKind::XmlId,
            Self::XmlIdRef => DirectiveKind::XmlIdRef,
        }
    }
}

/// The set of directives on a declaration, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    directives: Vec<Directive>,
}

impl Metadata {
    /// Create empty metadata
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directive
    #[must_use]
    pub fn with(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Add a directive in place
    pub fn push(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    /// All directives in declaration order
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Kinds present on this declaration
    pub fn kinds(&self) -> impl Iterator<Item = DirectiveKind> + '_ {
        self.directives.iter().map(Directive::kind)
    }

    /// Whether a directive of the given kind is present
    #[must_use]
    pub fn has(&self, kind: DirectiveKind) -> bool {
        self.kinds().any(|k| k == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    #[must_use]
    pub fn web_service(&self) -> Option<&WebServiceDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::WebService(ws) => Some(ws),
            _ => None,
        })
    }

    #[must_use]
    pub fn web_method(&self) -> Option<&WebMethodDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::WebMethod(wm) => Some(wm),
            _ => None,
        })
    }

    #[must_use]
    pub fn web_param(&self) -> Option<&WebParamDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::WebParam(wp) => Some(wp),
            _ => None,
        })
    }

    #[must_use]
    pub fn xml_type(&self) -> Option<&XmlTypeDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::XmlType(xt) => Some(xt),
            _ => None,
        })
    }

    #[must_use]
    pub fn type_adapter(&self) -> Option<&TypeAdapterDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::XmlTypeAdapter(adapter) => Some(adapter),
            _ => None,
        })
    }

    #[must_use]
    pub fn schema_type(&self) -> Option<&SchemaTypeDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::XmlSchemaType(st) => Some(st),
            _ => None,
        })
    }

    #[must_use]
    pub fn schema_types(&self) -> Option<&SchemaTypesDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::XmlSchemaTypes(st) => Some(st),
            _ => None,
        })
    }

    #[must_use]
    pub fn xml_element(&self) -> Option<&ElementDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::XmlElement(el) => Some(el),
            _ => None,
        })
    }

    #[must_use]
    pub fn xml_elements(&self) -> Option<&ElementsDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::XmlElements(els) => Some(els),
            _ => None,
        })
    }

    #[must_use]
    pub fn element_wrapper(&self) -> Option<&ElementWrapperDirective> {
        self.directives.iter().find_map(|d| match d {
            Directive::XmlElementWrapper(w) => Some(w),
            _ => None,
        })
    }
}

impl FromIterator<Directive> for Metadata {
    fn from_iter<I: IntoIterator<Item = Directive>>(iter: I) -> Self {
        Self {
            directives: iter.into_iter().collect(),
        }
    }
}
