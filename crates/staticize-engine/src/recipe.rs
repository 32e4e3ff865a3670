//! Recipe entry point and descriptive metadata.

use staticize_tree::ast::CompilationUnit;

use crate::config::PassConfig;
use crate::orchestrator::{Orchestrator, PassOutcome};

/// Static metadata for a recipe. Purely descriptive.
#[derive(Debug)]
pub struct RecipeMeta {
    /// Recipe name, e.g. "staticize/static-nonoverridable-methods".
    pub name: &'static str,
    /// Human-readable title.
    pub display_name: &'static str,
    /// One-sentence description.
    pub description: &'static str,
}

/// A rewrite over one compilation unit at a time.
///
/// Implementations hold no per-unit state, so one instance can process any
/// number of units, in any order.
pub trait Recipe: Send + Sync {
    /// Descriptive metadata.
    fn meta(&self) -> &RecipeMeta;

    /// Rewrite `unit`.
    fn run(&self, unit: CompilationUnit) -> PassOutcome;
}

static META: RecipeMeta = RecipeMeta {
    name: "staticize/static-nonoverridable-methods",
    display_name: "Non-overridable methods not accessing instance variables should be static",
    description: "Change private and final (non-overridable) methods not accessing instance variables to static.",
};

/// Makes `private` and `final` methods that never touch instance state
/// `static`.
#[derive(Debug, Clone, Default)]
pub struct StaticMethods {
    orchestrator: Orchestrator,
}

impl StaticMethods {
    /// Recipe with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipe with an explicit configuration.
    pub fn with_config(config: PassConfig) -> Self {
        Self {
            orchestrator: Orchestrator::new(config),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &PassConfig {
        self.orchestrator.config()
    }

    /// Rewrite `unit`.
    pub fn run(&self, unit: CompilationUnit) -> PassOutcome {
        self.orchestrator.run(unit)
    }
}

impl Recipe for StaticMethods {
    fn meta(&self) -> &RecipeMeta {
        &META
    }

    fn run(&self, unit: CompilationUnit) -> PassOutcome {
        StaticMethods::run(self, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta() {
        let recipe = StaticMethods::new();
        let meta = Recipe::meta(&recipe);
        assert_eq!(meta.name, "staticize/static-nonoverridable-methods");
        assert_eq!(
            meta.display_name,
            "Non-overridable methods not accessing instance variables should be static"
        );
        assert!(meta.description.starts_with("Change private and final"));
    }

    #[test]
    fn test_recipe_is_object_safe_and_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StaticMethods>();

        let recipes: Vec<Box<dyn Recipe>> = vec![Box::new(StaticMethods::new())];
        let outcome = recipes[0].run(CompilationUnit::default());
        assert!(!outcome.changed());
    }

    #[test]
    fn test_with_config() {
        let config = PassConfig {
            dry_run: true,
            ..PassConfig::default()
        };
        assert!(StaticMethods::with_config(config).config().dry_run);
    }
}
