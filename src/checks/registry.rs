//! Check registry.
//!
//! The [`CheckRegistry`] holds the checks for a run in registration order.
//! It is built up front by explicit `register` calls and then only borrowed
//! immutably by the orchestrator, so a run always sees a fixed set.

use super::builtin;
use super::Check;

/// Ordered collection of checks.
///
/// Registration order is report order. Names are not required to be unique,
/// but duplicate names make the report ambiguous.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with all built-in checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for check in builtin::all() {
            registry.register(check);
        }
        registry
    }

    /// Append a check.
    pub fn register(&mut self, check: Box<dyn Check>) {
        tracing::debug!("Registered check {}", check.name());
        self.checks.push(check);
    }

    /// Drop every check whose name is listed.
    pub fn without(mut self, names: &[String]) -> Self {
        self.checks
            .retain(|check| !names.iter().any(|name| name == check.name()));
        self
    }

    /// Get the first check with this name.
    pub fn get(&self, name: &str) -> Option<&dyn Check> {
        self.iter().find(|check| check.name() == name)
    }

    /// Iterate over checks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|c| c.name()).collect()
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Applicability, ExecContext, Issue};
    use crate::error::Result;
    use std::path::Path;

    struct MockCheck {
        name: &'static str,
    }

    impl Check for MockCheck {
        fn name(&self) -> &str {
            self.name
        }
        fn applicability(&self, _dir: &Path) -> Applicability {
            Applicability::Ready
        }
        fn execute(&self, _dir: &Path, _ctx: &ExecContext) -> Result<Vec<Issue>> {
            Ok(vec![])
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_preserves_registration_order() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(MockCheck { name: "zeta" }));
        registry.register(Box::new(MockCheck { name: "alpha" }));
        registry.register(Box::new(MockCheck { name: "mid" }));

        assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn registry_allows_duplicate_names() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(MockCheck { name: "dup" }));
        registry.register(Box::new(MockCheck { name: "dup" }));

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registry_get() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(MockCheck { name: "mock" }));

        assert!(registry.get("mock").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn registry_without_removes_named() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(MockCheck { name: "a" }));
        registry.register(Box::new(MockCheck { name: "b" }));
        registry.register(Box::new(MockCheck { name: "c" }));

        let registry = registry.without(&["b".to_string(), "missing".to_string()]);
        assert_eq!(registry.names(), vec!["a", "c"]);
    }

    #[test]
    fn registry_default_is_empty() {
        assert!(CheckRegistry::default().is_empty());
    }

    #[test]
    fn registry_with_builtins_has_checks() {
        let registry = CheckRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec![
                "gofmt",
                "staticcheck",
                "go test",
                "go vet",
                "npm-prettier",
                "bun-prettier",
                "npm-svelte-check",
                "bun-svelte-check",
                "npm-test",
                "bun-test",
            ]
        );
    }
}
