//! Source declarations and the types they carry

use crate::directive::{Directive, Metadata};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Qualified name of the built-in string type
pub const STRING_TYPE: &str = "java.lang.String";

/// The kind of source construct a declaration was taken from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    #[default]
    Class,
    Interface,
    Enum,
    AnnotationType,
    Method,
    Constructor,
    Field,
    Property,
    Parameter,
    Package,
}

/// Declaration modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

/// The base capability shared by every validated entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Qualified name for types, simple name for members
    pub name: String,

    /// Where the declaration appears in source
    #[serde(default)]
    pub position: Position,

    #[serde(default)]
    pub kind: DeclarationKind,

    #[serde(default)]
    pub modifiers: Vec<Modifier>,

    #[serde(default)]
    pub metadata: Metadata,

    /// Qualified names of directly implemented or extended interfaces
    #[serde(default)]
    pub superinterfaces: Vec<String>,
}

impl Declaration {
    /// Create a declaration with no modifiers or metadata
    pub fn new(name: impl Into<String>, kind: DeclarationKind, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            kind,
            modifiers: Vec::new(),
            metadata: Metadata::new(),
            superinterfaces: Vec::new(),
        }
    }

    /// Add a modifier
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    /// Add a directive
    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.metadata.push(directive);
        self
    }

    /// Add a directly implemented interface
    #[must_use]
    pub fn with_superinterface(mut self, name: impl Into<String>) -> Self {
        self.superinterfaces.push(name.into());
        self
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.has_modifier(Modifier::Public)
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.has_modifier(Modifier::Static)
    }

    /// The last segment of a dotted name
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// A source-level type as written on a method, parameter or accessor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeMirror {
    #[default]
    Void,
    Primitive { name: String },
    Declared { qualified_name: String },
    Array { component: Box<TypeMirror> },
    /// An in/out parameter passed through a mutable reference holder
    Holder { value: Box<TypeMirror> },
}

impl TypeMirror {
    /// A declared (class or interface) type
    pub fn declared(qualified_name: impl Into<String>) -> Self {
        Self::Declared {
            qualified_name: qualified_name.into(),
        }
    }

    /// An array of the given component type
    #[must_use]
    pub fn array_of(component: TypeMirror) -> Self {
        Self::Array {
            component: Box::new(component),
        }
    }

    /// The built-in string type
    #[must_use]
    pub fn string() -> Self {
        Self::declared(STRING_TYPE)
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    #[must_use]
    pub fn is_holder(&self) -> bool {
        matches!(self, Self::Holder { .. })
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Declared { qualified_name } if qualified_name == STRING_TYPE)
    }
}
