//! Service contract model: endpoint interfaces and their operations

use crate::declaration::{Declaration, TypeMirror};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How operation parameters are bound to the message body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParameterStyle {
    /// Parameters packed into a single wrapper element
    #[default]
    Wrapped,
    /// Parameters bound individually to the message body
    Bare,
}

/// Message-shape convention for an operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BindingStyle {
    #[default]
    Document,
    Rpc,
}

/// Direction of a web parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamMode {
    #[default]
    In,
    Out,
    InOut,
}

impl ParamMode {
    /// Whether the parameter carries input
    #[must_use]
    pub fn is_input(self) -> bool {
        matches!(self, Self::In | Self::InOut)
    }

    /// Whether the parameter carries output
    #[must_use]
    pub fn is_output(self) -> bool {
        matches!(self, Self::Out | Self::InOut)
    }
}

impl fmt::Display for ParameterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrapped => write!(f, "WRAPPED"),
            Self::Bare => write!(f, "BARE"),
        }
    }
}

impl fmt::Display for BindingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "DOCUMENT"),
            Self::Rpc => write!(f, "RPC"),
        }
    }
}

/// A declared set of operations forming a remote service contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointInterface {
    pub declaration: Declaration,

    /// Package the interface is declared in, if any
    #[serde(default)]
    pub package: Option<String>,

    /// Explicitly declared target namespace
    #[serde(default)]
    pub target_namespace: Option<String>,

    #[serde(default)]
    pub web_methods: Vec<WebMethod>,

    #[serde(default)]
    pub implementations: Vec<EndpointImplementation>,
}

impl EndpointInterface {
    /// Create an endpoint interface with no operations
    pub fn new(declaration: Declaration) -> Self {
        Self {
            declaration,
            ..Self::default()
        }
    }

    pub fn position(&self) -> &Position {
        &self.declaration.position
    }

    pub fn qualified_name(&self) -> &str {
        &self.declaration.name
    }

    /// The effective target namespace
    ///
    /// Falls back to the namespace derived from the package when none (or an
    /// empty one) was declared, and to the empty namespace when neither is
    /// present.
    pub fn target_namespace(&self) -> String {
        match (
            self.target_namespace.as_deref().filter(|ns| !ns.is_empty()),
            &self.package,
        ) {
            (Some(ns), _) => ns.to_string(),
            (None, Some(package)) => namespace_for_package(package),
            (None, None) => String::new(),
        }
    }
}

/// Derive a namespace URI from a dotted package name
///
/// `com.example.calc` becomes `http://calc.example.com/`.
pub fn namespace_for_package(package: &str) -> String {
    if package.is_empty() {
        return String::new();
    }
    let host: Vec<&str> = package.split('.').rev().collect();
    format!("http://{}/", host.join("."))
}

/// A class implementing an endpoint interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointImplementation {
    pub declaration: Declaration,

    /// Qualified name of the endpoint interface it must implement
    pub endpoint_interface: String,
}

/// One callable operation on an endpoint interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebMethod {
    pub declaration: Declaration,

    #[serde(default)]
    pub one_way: bool,

    #[serde(default)]
    pub return_type: TypeMirror,

    /// Qualified names of the declared thrown types
    #[serde(default)]
    pub thrown_types: Vec<String>,

    #[serde(default)]
    pub parameter_style: ParameterStyle,

    #[serde(default)]
    pub binding_style: BindingStyle,

    #[serde(default)]
    pub parameters: Vec<WebParam>,

    #[serde(default)]
    pub web_result: WebResult,

    #[serde(default)]
    pub faults: Vec<WebFault>,

    #[serde(default)]
    pub messages: Vec<WebMessage>,
}

impl WebMethod {
    /// Create a void document/wrapped operation with no modifiers
    pub fn new(declaration: Declaration) -> Self {
        Self {
            declaration,
            ..Self::default()
        }
    }

    pub fn position(&self) -> &Position {
        &self.declaration.position
    }

    /// Effective operation name: the directive override or the declared name
    pub fn operation_name(&self) -> &str {
        self.declaration
            .metadata
            .web_method()
            .and_then(|wm| wm.operation_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.declaration.name)
    }

    /// The request wrapper among this operation's messages
    pub fn request_wrapper(&self) -> Option<&RequestWrapper> {
        self.messages.iter().find_map(|m| match m {
            WebMessage::RequestWrapper(w) => Some(w),
            _ => None,
        })
    }

    /// The response wrapper among this operation's messages
    pub fn response_wrapper(&self) -> Option<&ResponseWrapper> {
        self.messages.iter().find_map(|m| match m {
            WebMessage::ResponseWrapper(w) => Some(w),
            _ => None,
        })
    }
}

/// A parameter of a web method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebParam {
    pub declaration: Declaration,

    #[serde(default)]
    pub param_type: TypeMirror,

    #[serde(default)]
    pub mode: ParamMode,

    #[serde(default)]
    pub header: bool,
}

impl WebParam {
    pub fn position(&self) -> &Position {
        &self.declaration.position
    }

    /// Explicitly declared target namespace, ignoring an empty declaration
    pub fn declared_namespace(&self) -> Option<&str> {
        self.declaration
            .metadata
            .web_param()
            .and_then(|wp| wp.target_namespace.as_deref())
            .filter(|ns| !ns.is_empty())
    }
}

/// The return value of a web method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebResult {
    #[serde(default)]
    pub name: Option<String>,

    /// Declared namespace; inherits the endpoint interface's when absent or empty
    #[serde(default)]
    pub target_namespace: Option<String>,
}

impl WebResult {
    /// Effective namespace within the given endpoint interface
    pub fn target_namespace(&self, interface: &EndpointInterface) -> String {
        self.target_namespace
            .clone()
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| interface.target_namespace())
    }
}

/// A fault declared by a web method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebFault {
    pub declaration: Declaration,
}

/// Request wrapper element of a WRAPPED operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestWrapper {
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
}

/// Response wrapper element of a WRAPPED operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseWrapper {
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
}

/// A message exchanged by a web method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message", rename_all = "snake_case")]
pub enum WebMessage {
    RequestWrapper(RequestWrapper),
    ResponseWrapper(ResponseWrapper),
    /// A message part bound directly to the body (BARE style)
    Part { name: String },
    Fault { name: String },
}
