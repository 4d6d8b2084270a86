//! Rules for endpoint interfaces, implementations and their operations

use crate::assignability::is_assignable;
use crate::result::ValidationResult;
use crate::validator::DefaultValidator;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, trace, warn};
use wsc_model::{
    BindingStyle, DeclarationKind, EndpointImplementation, EndpointInterface, ParameterStyle,
    Position, RequestWrapper, ResponseWrapper, WebFault, WebMessage, WebMethod, WebParam,
};

impl DefaultValidator<'_> {
    /// Validate an endpoint interface, its operations and its implementations
    pub fn validate_endpoint_interface(&self, ei: &EndpointInterface) -> ValidationResult {
        debug!("Validating endpoint interface {}", ei.qualified_name());
        let mut result = ValidationResult::new();
        let declaration = &ei.declaration;
        let position = ei.position();

        match declaration.metadata.web_service() {
            None => result.add_error(
                position,
                "Not an endpoint interface: no web service directive.",
            ),
            Some(ws) => {
                let no_package = ei.package.as_deref().is_none_or(str::is_empty);
                let no_namespace = ei.target_namespace.as_deref().is_none_or(str::is_empty);
                if no_package && no_namespace {
                    result.add_error(
                        position,
                        "An endpoint interface in no package must specify a target namespace.",
                    );
                }

                if ws.references_endpoint_interface() {
                    result.add_error(
                        position,
                        "Not an endpoint interface (it references another endpoint interface).",
                    );
                }
            }
        }

        match declaration.kind {
            DeclarationKind::AnnotationType => result.add_error(
                position,
                "Annotation types are not valid endpoint interfaces.",
            ),
            DeclarationKind::Enum => {
                result.add_error(position, "Enums cannot be endpoint interfaces.");
            }
            _ => {}
        }

        let mut operations: HashMap<&str, &Position> = HashMap::new();
        for web_method in &ei.web_methods {
            match operations.entry(web_method.operation_name()) {
                Entry::Occupied(first) => result.add_error(
                    web_method.position(),
                    format!(
                        "Web methods must have unique operation names; '{}' is already declared at {}. \
                         Use the web method directive to disambiguate.",
                        first.key(),
                        first.get()
                    ),
                ),
                Entry::Vacant(slot) => {
                    slot.insert(web_method.position());
                }
            }
        }

        for web_method in &ei.web_methods {
            result.aggregate(self.validate_web_method(ei, web_method));
        }
        for implementation in &ei.implementations {
            result.aggregate(self.validate_endpoint_implementation(implementation));
        }

        result
    }

    /// Validate a class implementing an endpoint interface
    pub fn validate_endpoint_implementation(
        &self,
        implementation: &EndpointImplementation,
    ) -> ValidationResult {
        debug!(
            "Validating endpoint implementation {}",
            implementation.declaration.name
        );
        let mut result = ValidationResult::new();
        let declaration = &implementation.declaration;
        let position = &declaration.position;

        if declaration.metadata.web_service().is_none() {
            result.add_error(
                position,
                "Not an endpoint implementation (no web service directive).",
            );
        }

        if declaration.kind == DeclarationKind::Enum {
            result.add_error(position, "An enum cannot be an endpoint implementation.");
        }

        match is_assignable(
            self.model,
            &declaration.name,
            &implementation.endpoint_interface,
        ) {
            Ok(true) => {}
            Ok(false) => result.add_error(
                position,
                format!(
                    "Class does not implement its endpoint interface '{}'.",
                    implementation.endpoint_interface
                ),
            ),
            Err(e) => {
                warn!("Interface hierarchy of {} is malformed: {}", declaration.name, e);
                result.add_error(position, e.to_string());
            }
        }

        result
    }

    /// Validate one operation and everything it declares
    pub fn validate_web_method(
        &self,
        ei: &EndpointInterface,
        web_method: &WebMethod,
    ) -> ValidationResult {
        trace!("Validating web method {}", web_method.operation_name());
        let mut result = ValidationResult::new();
        let position = web_method.position();

        if !web_method.declaration.is_public() {
            result.add_error(position, "A non-public method cannot be a web method.");
        }

        if web_method
            .declaration
            .metadata
            .web_method()
            .is_some_and(|wm| wm.exclude)
        {
            result.add_error(
                position,
                "A method marked as excluded cannot be a web method.",
            );
        }

        if web_method.one_way {
            if !web_method.return_type.is_void() {
                result.add_error(
                    position,
                    "A method cannot be one-way if it doesn't return void.",
                );
            }

            if !web_method.thrown_types.is_empty() || !web_method.faults.is_empty() {
                result.add_error(
                    position,
                    "A method cannot be one-way if it throws any exceptions.",
                );
            }
        }

        if web_method.parameter_style == ParameterStyle::Bare {
            self.check_bare_parameters(web_method, &mut result);
        }

        result.aggregate(self.validate_web_result(ei, web_method));
        for param in &web_method.parameters {
            result.aggregate(self.validate_web_param(ei, param));
        }
        for fault in &web_method.faults {
            result.aggregate(self.validate_web_fault(fault));
        }
        for message in &web_method.messages {
            match message {
                WebMessage::RequestWrapper(wrapper) => {
                    result.aggregate(self.validate_request_wrapper(ei, web_method, wrapper));
                }
                WebMessage::ResponseWrapper(wrapper) => {
                    result.aggregate(self.validate_response_wrapper(ei, web_method, wrapper));
                }
                WebMessage::Part { .. } | WebMessage::Fault { .. } => {}
            }
        }

        result
    }

    fn check_bare_parameters(&self, web_method: &WebMethod, result: &mut ValidationResult) {
        let position = web_method.position();

        if web_method.binding_style != BindingStyle::Document {
            result.add_error(
                position,
                format!(
                    "A {}-style web method cannot have a parameter style of {}.",
                    web_method.binding_style,
                    ParameterStyle::Bare
                ),
            );
        }

        let mut in_params = 0;
        let mut out_params = 0;
        for param in web_method.parameters.iter().filter(|p| !p.header) {
            if param.param_type.is_array() {
                result.add_error(
                    position,
                    "A BARE web method must not have an array as a parameter.",
                );
            }
            if param.mode.is_input() {
                in_params += 1;
            }
            if param.mode.is_output() {
                out_params += 1;
            }
        }

        if in_params > 1 {
            result.add_error(
                position,
                "A BARE web method must have at most 1 in or in/out non-header parameter.",
            );
        }

        if web_method.return_type.is_void() {
            if out_params > 1 {
                result.add_error(
                    position,
                    "A BARE web method that returns void must have at most 1 out or in/out non-header parameter.",
                );
            }
        } else if out_params > 0 {
            result.add_error(
                position,
                "A BARE web method that doesn't return void must have no out or in/out parameters.",
            );
        }
    }

    /// Validate the request wrapper of a WRAPPED operation
    pub fn validate_request_wrapper(
        &self,
        ei: &EndpointInterface,
        web_method: &WebMethod,
        wrapper: &RequestWrapper,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();
        let position = web_method.position();

        if web_method.parameter_style == ParameterStyle::Bare {
            result.add_error(position, "A BARE web method shouldn't have a request wrapper.");
        }

        if let Some(ns) = declared(wrapper.target_namespace.as_deref()) {
            if ns != ei.target_namespace() {
                result.add_error(
                    position,
                    "A request wrapper cannot declare a target namespace different from the target namespace \
                     of its endpoint interface. Declare the parameter style BARE and use a root element \
                     from the other namespace for the parameter instead.",
                );
            }
        }

        result
    }

    /// Validate the response wrapper of a WRAPPED operation
    pub fn validate_response_wrapper(
        &self,
        ei: &EndpointInterface,
        web_method: &WebMethod,
        wrapper: &ResponseWrapper,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();
        let position = web_method.position();

        if web_method.parameter_style == ParameterStyle::Bare {
            result.add_error(position, "A BARE web method shouldn't have a response wrapper.");
        }

        if web_method.one_way {
            result.add_error(position, "A one-way method cannot have a response wrapper.");
        }

        if let Some(ns) = declared(wrapper.target_namespace.as_deref()) {
            if ns != ei.target_namespace() {
                result.add_error(
                    position,
                    "A response wrapper cannot declare a target namespace different from the target namespace \
                     of its endpoint interface. Declare the parameter style BARE and use a root element \
                     from the other namespace for the return value instead.",
                );
            }
        }

        result
    }

    /// Validate a single operation parameter
    pub fn validate_web_param(&self, ei: &EndpointInterface, param: &WebParam) -> ValidationResult {
        let mut result = ValidationResult::new();

        if param.param_type.is_holder() {
            result.add_error(param.position(), "In/out parameters are not supported.");
        }

        if let Some(ns) = param.declared_namespace() {
            if ns != ei.target_namespace() {
                result.add_error(
                    param.position(),
                    "A web parameter cannot declare a target namespace different from the target namespace \
                     of its endpoint interface. Declare the parameter style BARE and use a root element \
                     from the other namespace for the parameter instead.",
                );
            }
        }

        result
    }

    /// Validate the result of an operation
    pub fn validate_web_result(
        &self,
        ei: &EndpointInterface,
        web_method: &WebMethod,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();

        if web_method.web_result.target_namespace(ei) != ei.target_namespace() {
            result.add_error(
                web_method.position(),
                "A web result cannot declare a target namespace different from the target namespace \
                 of its endpoint interface. Declare the parameter style BARE and use a root element \
                 from the other namespace for the return value instead.",
            );
        }

        result
    }

    /// Validate a declared fault; no rules apply yet
    pub fn validate_web_fault(&self, fault: &WebFault) -> ValidationResult {
        trace!("No fault rules for {}", fault.declaration.name);
        ValidationResult::new()
    }
}

fn declared(namespace: Option<&str>) -> Option<&str> {
    namespace.filter(|ns| !ns.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::FactoryRegistry;
    use wsc_model::{
        ContractModel, Declaration, Directive, Modifier, ParamMode, TypeMirror, WebMethodDirective,
        WebParamDirective, WebServiceDirective,
    };

    fn pos(line: usize) -> Position {
        Position::new("Calculator.java", line, 1)
    }

    fn interface() -> EndpointInterface {
        let mut ei = EndpointInterface::new(
            Declaration::new("com.example.Calculator", DeclarationKind::Interface, pos(1))
                .with_directive(Directive::WebService(WebServiceDirective::default())),
        );
        ei.target_namespace = Some("urn:calc".to_string());
        ei
    }

    fn method(name: &str, line: usize) -> WebMethod {
        WebMethod::new(
            Declaration::new(name, DeclarationKind::Method, pos(line)).with_modifier(Modifier::Public),
        )
    }

    fn param(mode: ParamMode, param_type: TypeMirror) -> WebParam {
        WebParam {
            declaration: Declaration::new("p", DeclarationKind::Parameter, pos(50)),
            param_type,
            mode,
            header: false,
        }
    }

    fn messages(result: &ValidationResult) -> Vec<&str> {
        result.diagnostics().iter().map(|d| d.message.as_str()).collect()
    }

    fn check<T>(f: impl FnOnce(&DefaultValidator<'_>) -> T) -> T {
        let model = ContractModel::new();
        let resolver = FactoryRegistry::new();
        let validator = DefaultValidator::new(&model, &resolver);
        f(&validator)
    }

    #[test]
    fn test_valid_interface_has_no_errors() {
        let mut ei = interface();
        ei.web_methods.push(method("add", 2));
        ei.web_methods.push(method("subtract", 3));

        let result = check(|v| v.validate_endpoint_interface(&ei));
        assert!(result.is_empty(), "{:?}", messages(&result));
    }

    #[test]
    fn test_missing_web_service_directive() {
        let ei = EndpointInterface::new(Declaration::new(
            "com.example.Calculator",
            DeclarationKind::Interface,
            pos(1),
        ));
        let result = check(|v| v.validate_endpoint_interface(&ei));
        assert_eq!(
            messages(&result),
            vec!["Not an endpoint interface: no web service directive."]
        );
    }

    #[test]
    fn test_no_package_and_no_namespace() {
        let mut ei = interface();
        ei.target_namespace = None;
        let result = check(|v| v.validate_endpoint_interface(&ei));
        assert_eq!(result.error_count(), 1);

        ei.package = Some("com.example".to_string());
        let result = check(|v| v.validate_endpoint_interface(&ei));
        assert!(result.is_empty());
    }

    #[test]
    fn test_reexported_interface_and_kinds() {
        let mut ei = interface();
        ei.declaration = Declaration::new("com.example.Calculator", DeclarationKind::Enum, pos(1))
            .with_directive(Directive::WebService(WebServiceDirective {
                endpoint_interface: Some("com.example.Other".to_string()),
                ..WebServiceDirective::default()
            }));

        let result = check(|v| v.validate_endpoint_interface(&ei));
        assert_eq!(
            messages(&result),
            vec![
                "Not an endpoint interface (it references another endpoint interface).",
                "Enums cannot be endpoint interfaces.",
            ]
        );
    }

    #[test]
    fn test_duplicate_operation_names() {
        let mut ei = interface();
        ei.web_methods.push(method("add", 2));
        let mut renamed = method("addInts", 3);
        renamed.declaration.metadata.push(Directive::WebMethod(WebMethodDirective {
            operation_name: Some("add".to_string()),
            exclude: false,
        }));
        ei.web_methods.push(renamed);

        let result = check(|v| v.validate_endpoint_interface(&ei));
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.diagnostics()[0].position, pos(3));
        assert!(result.diagnostics()[0].message.contains("unique operation names"));
    }

    #[test]
    fn test_triplicate_operation_names_report_each_later_method() {
        let mut ei = interface();
        for line in [2, 3, 4] {
            ei.web_methods.push(method("add", line));
        }

        let result = check(|v| v.validate_endpoint_interface(&ei));
        let lines: Vec<usize> = result.diagnostics().iter().map(|d| d.position.line).collect();
        assert_eq!(lines, vec![3, 4]);
    }

    #[test]
    fn test_non_public_and_excluded() {
        let ei = interface();
        let mut m = WebMethod::new(
            Declaration::new("add", DeclarationKind::Method, pos(2)).with_directive(
                Directive::WebMethod(WebMethodDirective {
                    operation_name: None,
                    exclude: true,
                }),
            ),
        );
        m.declaration.modifiers.clear();

        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec![
                "A non-public method cannot be a web method.",
                "A method marked as excluded cannot be a web method.",
            ]
        );
    }

    #[test]
    fn test_one_way_rules() {
        let ei = interface();

        let mut m = method("notify", 2);
        m.one_way = true;
        assert!(check(|v| v.validate_web_method(&ei, &m)).is_empty());

        m.return_type = TypeMirror::Primitive {
            name: "int".to_string(),
        };
        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec!["A method cannot be one-way if it doesn't return void."]
        );

        m.return_type = TypeMirror::Void;
        m.thrown_types.push("com.example.CalcFault".to_string());
        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec!["A method cannot be one-way if it throws any exceptions."]
        );
    }

    #[test]
    fn test_bare_rpc_binding() {
        let ei = interface();
        let mut m = method("add", 2);
        m.parameter_style = ParameterStyle::Bare;
        m.binding_style = BindingStyle::Rpc;

        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec!["A RPC-style web method cannot have a parameter style of BARE."]
        );
    }

    #[test]
    fn test_bare_in_parameter_count() {
        let ei = interface();
        let mut m = method("add", 2);
        m.parameter_style = ParameterStyle::Bare;
        m.parameters.push(param(ParamMode::In, TypeMirror::string()));
        assert!(check(|v| v.validate_web_method(&ei, &m)).is_empty());

        m.parameters.push(param(ParamMode::In, TypeMirror::string()));
        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec!["A BARE web method must have at most 1 in or in/out non-header parameter."]
        );
    }

    #[test]
    fn test_bare_header_parameters_are_not_counted() {
        let ei = interface();
        let mut m = method("add", 2);
        m.parameter_style = ParameterStyle::Bare;
        m.parameters.push(param(ParamMode::In, TypeMirror::string()));
        let mut header = param(ParamMode::In, TypeMirror::array_of(TypeMirror::string()));
        header.header = true;
        m.parameters.push(header);

        assert!(check(|v| v.validate_web_method(&ei, &m)).is_empty());
    }

    #[test]
    fn test_bare_out_parameters() {
        let ei = interface();
        let mut m = method("add", 2);
        m.parameter_style = ParameterStyle::Bare;
        m.parameters.push(param(ParamMode::Out, TypeMirror::string()));
        assert!(check(|v| v.validate_web_method(&ei, &m)).is_empty());

        m.parameters.push(param(ParamMode::Out, TypeMirror::string()));
        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec![
                "A BARE web method that returns void must have at most 1 out or in/out non-header parameter."
            ]
        );

        m.parameters.truncate(1);
        m.return_type = TypeMirror::string();
        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec!["A BARE web method that doesn't return void must have no out or in/out parameters."]
        );
    }

    #[test]
    fn test_bare_array_parameter() {
        let ei = interface();
        let mut m = method("add", 2);
        m.parameter_style = ParameterStyle::Bare;
        m.parameters.push(param(
            ParamMode::In,
            TypeMirror::array_of(TypeMirror::string()),
        ));

        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec!["A BARE web method must not have an array as a parameter."]
        );
    }

    #[test]
    fn test_request_wrapper_namespace() {
        let ei = interface();
        let m = method("add", 2);

        let same = RequestWrapper {
            local_name: None,
            target_namespace: Some("urn:calc".to_string()),
        };
        assert!(check(|v| v.validate_request_wrapper(&ei, &m, &same)).is_empty());

        let empty = RequestWrapper {
            local_name: None,
            target_namespace: Some(String::new()),
        };
        assert!(check(|v| v.validate_request_wrapper(&ei, &m, &empty)).is_empty());

        let other = RequestWrapper {
            local_name: None,
            target_namespace: Some("urn:other".to_string()),
        };
        assert_eq!(
            check(|v| v.validate_request_wrapper(&ei, &m, &other)).error_count(),
            1
        );
    }

    #[test]
    fn test_wrappers_on_bare_and_one_way_methods() {
        let ei = interface();
        let mut m = method("add", 2);
        m.parameter_style = ParameterStyle::Bare;
        m.one_way = true;
        m.messages
            .push(WebMessage::RequestWrapper(RequestWrapper::default()));
        m.messages
            .push(WebMessage::ResponseWrapper(ResponseWrapper::default()));

        let result = check(|v| v.validate_web_method(&ei, &m));
        assert_eq!(
            messages(&result),
            vec![
                "A BARE web method shouldn't have a request wrapper.",
                "A BARE web method shouldn't have a response wrapper.",
                "A one-way method cannot have a response wrapper.",
            ]
        );
    }

    #[test]
    fn test_holder_parameter() {
        let ei = interface();
        let p = param(
            ParamMode::InOut,
            TypeMirror::Holder {
                value: Box::new(TypeMirror::string()),
            },
        );
        let result = check(|v| v.validate_web_param(&ei, &p));
        assert_eq!(messages(&result), vec!["In/out parameters are not supported."]);
        assert_eq!(result.diagnostics()[0].position, pos(50));
    }

    fn namespaced_param(target_namespace: &str) -> WebParam {
        let mut p = param(ParamMode::In, TypeMirror::string());
        p.declaration = p.declaration.with_directive(Directive::WebParam(WebParamDirective {
            name: None,
            target_namespace: Some(target_namespace.to_string()),
        }));
        p
    }

    #[test]
    fn test_web_param_namespace() {
        let ei = interface();

        let other = namespaced_param("urn:other");
        let result = check(|v| v.validate_web_param(&ei, &other));
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.diagnostics()[0].position, pos(50));
        assert!(result.diagnostics()[0].message.starts_with("A web parameter cannot declare"));

        let same = namespaced_param("urn:calc");
        assert!(check(|v| v.validate_web_param(&ei, &same)).is_empty());

        let empty = namespaced_param("");
        assert!(check(|v| v.validate_web_param(&ei, &empty)).is_empty());
    }

    #[test]
    fn test_empty_interface_namespace_uses_package_namespace() {
        let mut ei = interface();
        ei.target_namespace = Some(String::new());
        ei.package = Some("com.example".to_string());

        let p = namespaced_param("http://example.com/");
        assert!(check(|v| v.validate_web_param(&ei, &p)).is_empty());

        let m = method("add", 2);
        assert!(check(|v| v.validate_web_result(&ei, &m)).is_empty());
    }

    #[test]
    fn test_response_wrapper_namespace() {
        let ei = interface();
        let m = method("add", 2);

        let same = ResponseWrapper {
            local_name: None,
            target_namespace: Some("urn:calc".to_string()),
        };
        assert!(check(|v| v.validate_response_wrapper(&ei, &m, &same)).is_empty());

        let other = ResponseWrapper {
            local_name: None,
            target_namespace: Some("urn:other".to_string()),
        };
        let result = check(|v| v.validate_response_wrapper(&ei, &m, &other));
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.diagnostics()[0].position, pos(2));
        assert!(result.diagnostics()[0].message.starts_with("A response wrapper cannot declare"));
    }

    #[test]
    fn test_web_result_namespace() {
        let ei = interface();
        let mut m = method("add", 2);
        assert!(check(|v| v.validate_web_result(&ei, &m)).is_empty());

        m.web_result.target_namespace = Some("urn:other".to_string());
        let result = check(|v| v.validate_web_result(&ei, &m));
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.diagnostics()[0].position, pos(2));
    }
}
