#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! # wsc-model
//!
//! Read-only object model of a web service contract and its XML data binding.
//!
//! The model is produced by an external construction phase (source parsing
//! and metadata extraction) and handed to `wsc-validation` as-is. Every
//! entity carries a [`Declaration`] with its source [`Position`], modifiers
//! and typed [`Metadata`].

/// XML data-binding model: schemas, type definitions, accessors.
pub mod binding;
/// Declarations, modifiers and source-level types.
pub mod declaration;
/// Typed declarative metadata.
pub mod directive;
/// Endpoint interfaces, operations and messages.
pub mod endpoint;
/// Serialized model loading.
pub mod loader;
/// The model container and type hierarchy lookup.
pub mod model;
/// Source positions and qualified names.
pub mod position;

pub use binding::{
    Accessor, AccessorBacking, AccessorKind, Constructor, KnownXmlType, RootElement, Schema,
    TypeDefinition, TypeDefinitionKind, XML_SCHEMA_NAMESPACE, XmlTypeRef,
};
pub use declaration::{Declaration, DeclarationKind, Modifier, STRING_TYPE, TypeMirror};
pub use directive::{
    AttributeDirective, Directive, DirectiveKind, ElementDirective, ElementWrapperDirective,
    ElementsDirective, INHERIT_NAMESPACE, Metadata, SchemaTypeDirective, SchemaTypesDirective,
    TypeAdapterDirective, WebMethodDirective, WebParamDirective, WebServiceDirective,
    XmlTypeDirective,
};
pub use endpoint::{
    BindingStyle, EndpointImplementation, EndpointInterface, ParamMode, ParameterStyle,
    RequestWrapper, ResponseWrapper, WebFault, WebMessage, WebMethod, WebParam, WebResult,
};
pub use loader::ModelLoader;
pub use model::{ContractModel, TypeHierarchy};
pub use position::{Position, QName};

use thiserror::Error;

/// Errors that can occur when working with the model
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid model format: {0}")]
    InvalidFormat(String),

    #[error("Unknown type: {name}")]
    UnknownType { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an unknown-type error for a qualified name.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }
}

/// Crate-local result type for model operations.
pub type Result<T> = std::result::Result<T, Error>;
