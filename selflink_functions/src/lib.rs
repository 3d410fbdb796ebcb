pub mod custom;
pub mod location;
pub mod region_from_zone;
pub mod resource_name;

// Re-export function types for convenience
pub use custom::PatternFunction;
pub use location::{LocationFromIdFunction, ProjectFromIdFunction, RegionFromIdFunction, ZoneFromIdFunction};
pub use region_from_zone::RegionFromZoneFunction;
pub use resource_name::ResourceNameFromSelfLinkFunction;

use std::sync::Arc;

use selflink_core::{
    Diagnostics, ElementExtractor, FunctionRegistry, PatternDef, PatternError, RegistryError,
    RunRequest, RunResponse,
};
use thiserror::Error;
use tracing::warn;

/// Error registering user-declared pattern functions.
#[derive(Debug, Error)]
pub enum CustomFunctionError {
    #[error("invalid pattern function '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: PatternError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Run an element extractor against the first argument of `request`.
///
/// A non-string argument yields no result. A failed extraction yields an
/// empty result alongside the error diagnostic.
#[must_use]
pub fn run_element(extractor: &ElementExtractor, request: &RunRequest) -> RunResponse {
    let mut diagnostics = Diagnostics::new();
    let Some(input) = request.string_argument(0, &mut diagnostics) else {
        return RunResponse::without_result(diagnostics);
    };
    let (value, extraction) = extractor.extract(&input);
    diagnostics.append(extraction);
    RunResponse::with_result(value, diagnostics)
}

/// Register every built-in function.
///
/// # Errors
/// Returns an error if one of the built-in names is already registered.
pub fn register_defaults(registry: &mut FunctionRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(ResourceNameFromSelfLinkFunction))?;
    registry.register(Arc::new(ProjectFromIdFunction))?;
    registry.register(Arc::new(RegionFromIdFunction))?;
    registry.register(Arc::new(ZoneFromIdFunction))?;
    registry.register(Arc::new(LocationFromIdFunction))?;
    registry.register(Arc::new(RegionFromZoneFunction))?;
    Ok(())
}

/// Registry holding only the built-in functions.
#[must_use]
pub fn default_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    if let Err(e) = register_defaults(&mut registry) {
        warn!("Failed to register built-in function: {e}");
    }
    registry
}

/// Build and register user-declared pattern functions.
///
/// # Errors
/// Fails on the first definition whose pattern is invalid or whose name is taken.
pub fn register_custom(
    registry: &mut FunctionRegistry,
    definitions: &[PatternDef],
) -> Result<(), CustomFunctionError> {
    for def in definitions {
        let function =
            PatternFunction::from_def(def).map_err(|source| CustomFunctionError::Pattern {
                name: def.name.clone(),
                source,
            })?;
        registry.register(Arc::new(function))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use selflink_core::ProviderFunction;
    use serde_json::json;

    #[test]
    fn test_default_registry_has_all_builtins() {
        let registry = default_registry();
        assert_eq!(
            registry.list(),
            vec![
                "location_from_id",
                "project_from_id",
                "region_from_id",
                "region_from_zone",
                "resource_name_from_self_link",
                "zone_from_id",
            ]
        );
    }

    #[test]
    fn test_register_defaults_twice_fails() {
        let mut registry = default_registry();
        assert!(register_defaults(&mut registry).is_err());
    }

    #[test]
    fn test_run_element_rejects_non_string() {
        let response = run_element(
            resource_name::extractor(),
            &RunRequest::new(vec![json!(null)]),
        );
        assert!(response.is_error());
        assert!(response.result.is_none());
    }

    #[test]
    fn test_run_element_no_match_sets_empty_result() {
        let response = run_element(
            resource_name::extractor(),
            &RunRequest::from_strings(["my-instance"]),
        );
        assert!(response.is_error());
        assert_eq!(response.result.as_deref(), Some(""));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_run_element_carries_extraction_warning() {
        let def = PatternDef {
            name: "letter".to_string(),
            summary: None,
            pattern: "(?P<a>x)".to_string(),
            template: "$a".to_string(),
            description: "x".to_string(),
            label: "letter".to_string(),
        };
        let function = PatternFunction::from_def(&def).expect("valid definition");
        let response = function.run(&RunRequest::from_strings(["xx"]));

        assert_eq!(response.result.as_deref(), Some("x"));
        assert!(!response.is_error());
        let warnings: Vec<_> = response.diagnostics.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].argument, Some(0));
    }

    #[test]
    fn test_register_custom_rejects_bad_regex() {
        let mut registry = FunctionRegistry::new();
        let def = PatternDef {
            name: "broken".to_string(),
            summary: None,
            pattern: "(?P<X>".to_string(),
            template: "$X".to_string(),
            description: "x".to_string(),
            label: "x".to_string(),
        };
        let err = register_custom(&mut registry, &[def]);
        assert!(matches!(err, Err(CustomFunctionError::Pattern { ref name, .. }) if name == "broken"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_custom_rejects_builtin_name() {
        let mut registry = default_registry();
        let def = PatternDef {
            name: "zone_from_id".to_string(),
            summary: None,
            pattern: "zones/(?P<Zone>[^/]+)$".to_string(),
            template: "$Zone".to_string(),
            description: "zones/{zone}$".to_string(),
            label: "zone".to_string(),
        };
        let err = register_custom(&mut registry, &[def]);
        assert!(matches!(err, Err(CustomFunctionError::Registry(_))));
    }
}
