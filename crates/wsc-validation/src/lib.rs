#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! # wsc-validation
//!
//! Rule engine that checks a web service contract model for violations of
//! the web-service and XML data-binding rules before any artifact is
//! generated.
//!
//! Every rule is total: it never stops at the first violation and never
//! fails on one. Violations are recorded as [`Diagnostic`]s in a
//! [`ValidationResult`], and results from independent rules are merged with
//! [`ValidationResult::aggregate`].
//!
//! ## Example Usage
//!
//! ```rust
//! use wsc_model::{ContractModel, Declaration, DeclarationKind, EndpointInterface, Position};
//! use wsc_validation::{DefaultValidator, FactoryRegistry};
//!
//! let mut model = ContractModel::new();
//! model.endpoint_interfaces.push(EndpointInterface::new(Declaration::new(
//!     "com.example.Calculator",
//!     DeclarationKind::Interface,
//!     Position::new("Calculator.java", 1, 1),
//! )));
//!
//! let resolver = FactoryRegistry::new();
//! let result = DefaultValidator::new(&model, &resolver).validate_model();
//!
//! // The interface carries no web-service directive.
//! assert!(result.has_errors());
//! ```

pub mod accessors;
pub mod assignability;
pub mod config;
pub mod endpoint;
pub mod reporter;
pub mod resolver;
pub mod result;
pub mod types;
pub mod validator;

pub use assignability::is_assignable;
pub use config::{FactoryMethod, StrictnessLevel, ValidationConfig};
pub use reporter::{ValidationReport, ValidationReporter};
pub use resolver::{FactoryRegistry, FactoryResolver, MethodResolution};
pub use result::{Diagnostic, Severity, ValidationResult};
pub use validator::DefaultValidator;

use thiserror::Error;
use wsc_model::ContractModel;

/// Errors that can occur around validation
///
/// Rule violations are never errors; they are diagnostics.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cyclic interface or type hierarchy through '{name}'")]
    CyclicHierarchy { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn cyclic_hierarchy(name: impl Into<String>) -> Self {
        Self::CyclicHierarchy { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convenience function to validate a model with no known factory methods
pub fn validate(model: &ContractModel) -> ValidationResult {
    let resolver = FactoryRegistry::new();
    DefaultValidator::new(model, &resolver).validate_model()
}

/// Convenience function to validate a model and report at the configured strictness
pub fn validate_with_config(model: &ContractModel, config: &ValidationConfig) -> ValidationReport {
    let resolver = FactoryRegistry::from_factories(&config.factories);
    let result = DefaultValidator::new(model, &resolver).validate_model();
    ValidationReporter::with_config(config).report(&result)
}
