//! Named-callable resolution for factory-method checks

use crate::config::FactoryMethod;
use std::collections::HashMap;

/// Outcome of looking up a public no-argument method by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodResolution {
    FoundStatic,
    FoundNonStatic,
    NotFound,
}

/// Resolves a named method on a named class
pub trait FactoryResolver {
    fn resolve(&self, class_name: &str, method_name: &str) -> MethodResolution;
}

impl<F> FactoryResolver for F
where
    F: Fn(&str, &str) -> MethodResolution,
{
    fn resolve(&self, class_name: &str, method_name: &str) -> MethodResolution {
        self(class_name, method_name)
    }
}

/// In-memory resolver keyed by class and method name
#[derive(Debug, Clone, Default)]
pub struct FactoryRegistry {
    methods: HashMap<(String, String), bool>,
}

impl FactoryRegistry {
    /// Create an empty registry; every lookup resolves to `NotFound`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method and whether it is static
    pub fn register(
        &mut self,
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        is_static: bool,
    ) {
        self.methods
            .insert((class_name.into(), method_name.into()), is_static);
    }

    /// Build a registry from configured factory methods
    #[must_use]
    pub fn from_factories(factories: &[FactoryMethod]) -> Self {
        let mut registry = Self::new();
        for factory in factories {
            registry.register(&factory.class, &factory.method, factory.is_static);
        }
        registry
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl FactoryResolver for FactoryRegistry {
    fn resolve(&self, class_name: &str, method_name: &str) -> MethodResolution {
        match self
            .methods
            .get(&(class_name.to_string(), method_name.to_string()))
        {
            Some(true) => MethodResolution::FoundStatic,
            Some(false) => MethodResolution::FoundNonStatic,
            None => MethodResolution::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_resolution() {
        let mut registry = FactoryRegistry::new();
        registry.register("com.example.Factory", "create", true);
        registry.register("com.example.Factory", "build", false);

        assert_eq!(
            registry.resolve("com.example.Factory", "create"),
            MethodResolution::FoundStatic
        );
        assert_eq!(
            registry.resolve("com.example.Factory", "build"),
            MethodResolution::FoundNonStatic
        );
        assert_eq!(
            registry.resolve("com.example.Factory", "missing"),
            MethodResolution::NotFound
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_from_factories() {
        let registry = FactoryRegistry::from_factories(&[FactoryMethod {
            class: "com.example.Factory".to_string(),
            method: "create".to_string(),
            is_static: true,
        }]);
        assert_eq!(
            registry.resolve("com.example.Factory", "create"),
            MethodResolution::FoundStatic
        );
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |_: &str, method: &str| {
            if method == "create" {
                MethodResolution::FoundStatic
            } else {
                MethodResolution::NotFound
            }
        };
        assert_eq!(resolver.resolve("Any", "create"), MethodResolution::FoundStatic);
        assert_eq!(resolver.resolve("Any", "other"), MethodResolution::NotFound);
    }
}
