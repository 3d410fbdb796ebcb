//! Functions reading a `collection/{value}/` segment out of a self link or id.
//!
//! Unlike the resource name, these segments are not anchored to the end of
//! the input, so inputs naming the collection twice are ambiguous and the
//! left-most segment wins.

use selflink_core::{
    CompiledPattern, ElementExtractor, FunctionDefinition, Parameter, ProviderFunction,
    RunRequest, RunResponse, ValueKind,
};
use std::sync::OnceLock;

use crate::run_element;

static PROJECT: OnceLock<ElementExtractor> = OnceLock::new();
static REGION: OnceLock<ElementExtractor> = OnceLock::new();
static ZONE: OnceLock<ElementExtractor> = OnceLock::new();
static LOCATION: OnceLock<ElementExtractor> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn segment(regex: &str, template: &str, description: &str, label: &str) -> ElementExtractor {
    ElementExtractor::new(
        CompiledPattern::new(regex, template, description, label)
            .expect("Static regex pattern is guaranteed to be valid"),
    )
}

const ZONAL_SELF_LINK: &str = "https://www.googleapis.com/compute/v1/projects/my-project/zones/us-central1-c/instances/my-instance";
const REGIONAL_ID: &str = "projects/my-project/regions/us-central1/subnetworks/my-subnet";

fn definition(
    name: &str,
    summary: &str,
    element: &str,
    example: (&str, &str),
) -> FunctionDefinition {
    let (input, output) = example;
    FunctionDefinition {
        name: name.into(),
        summary: summary.into(),
        description: format!(
            "Takes a single string argument, which should be a self link or id of a resource. \
             This function will either return the {element} from the input string or raise an error. \
             When more than one candidate is present the first one is returned with a warning. \
             For example \"{input}\" gives \"{output}\"."
        ),
        parameters: vec![Parameter::string(
            "id",
            "A self link or id of a resource, e.g. \"projects/my-project/zones/us-central1-c/instances/my-instance\"",
        )],
        return_kind: ValueKind::String,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFromIdFunction;

impl ProviderFunction for ProjectFromIdFunction {
    fn name(&self) -> &'static str {
        "project_from_id"
    }

    fn definition(&self) -> FunctionDefinition {
        definition(
            self.name(),
            "Returns the project within a provided resource's id, resource URI, self link, or full resource name.",
            "project id",
            (ZONAL_SELF_LINK, "my-project"),
        )
    }

    fn run(&self, request: &RunRequest) -> RunResponse {
        let extractor = PROJECT.get_or_init(|| {
            segment(
                "projects/(?P<ProjectId>[^/]+)/",
                "$ProjectId",
                "projects/{project}/",
                "project id",
            )
        });
        run_element(extractor, request)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegionFromIdFunction;

impl ProviderFunction for RegionFromIdFunction {
    fn name(&self) -> &'static str {
        "region_from_id"
    }

    fn definition(&self) -> FunctionDefinition {
        definition(
            self.name(),
            "Returns the region within a provided resource's id, resource URI, self link, or full resource name.",
            "region",
            (REGIONAL_ID, "us-central1"),
        )
    }

    fn run(&self, request: &RunRequest) -> RunResponse {
        let extractor = REGION.get_or_init(|| {
            segment(
                "regions/(?P<Region>[^/]+)/",
                "$Region",
                "regions/{region}/",
                "region",
            )
        });
        run_element(extractor, request)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneFromIdFunction;

impl ProviderFunction for ZoneFromIdFunction {
    fn name(&self) -> &'static str {
        "zone_from_id"
    }

    fn definition(&self) -> FunctionDefinition {
        definition(
            self.name(),
            "Returns the zone within a provided resource's id, resource URI, self link, or full resource name.",
            "zone",
            (ZONAL_SELF_LINK, "us-central1-c"),
        )
    }

    fn run(&self, request: &RunRequest) -> RunResponse {
        let extractor = ZONE.get_or_init(|| {
            segment("zones/(?P<Zone>[^/]+)/", "$Zone", "zones/{zone}/", "zone")
        });
        run_element(extractor, request)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationFromIdFunction;

impl ProviderFunction for LocationFromIdFunction {
    fn name(&self) -> &'static str {
        "location_from_id"
    }

    fn definition(&self) -> FunctionDefinition {
        definition(
            self.name(),
            "Returns the location within a provided resource's id, resource URI, self link, or full resource name.",
            "location, region or zone",
            (REGIONAL_ID, "us-central1"),
        )
    }

    fn run(&self, request: &RunRequest) -> RunResponse {
        let extractor = LOCATION.get_or_init(|| {
            segment(
                "(?:locations|regions|zones)/(?P<Location>[^/]+)/",
                "$Location",
                "{locations|regions|zones}/{location}/",
                "location",
            )
        });
        run_element(extractor, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selflink_core::Severity;

    const SELF_LINK: &str = ZONAL_SELF_LINK;

    fn call(function: &dyn ProviderFunction, input: &str) -> RunResponse {
        function.run(&RunRequest::from_strings([input]))
    }

    #[test]
    fn test_project_from_self_link() {
        let response = call(&ProjectFromIdFunction, SELF_LINK);
        assert_eq!(response.result.as_deref(), Some("my-project"));
        assert!(response.diagnostics.is_empty());
    }

    #[test]
    fn test_project_ambiguous_uses_first() {
        let response = call(
            &ProjectFromIdFunction,
            "projects/first-project/topics/projects/second-project/subscriptions/sub",
        );
        assert_eq!(response.result.as_deref(), Some("first-project"));
        assert!(!response.is_error());
        let severities: Vec<_> = response.diagnostics.iter().map(|d| d.severity).collect();
        assert_eq!(severities, vec![Severity::Warning]);
    }

    #[test]
    fn test_project_missing() {
        let response = call(&ProjectFromIdFunction, "zones/us-central1-c/instances/vm");
        assert!(response.is_error());
        assert_eq!(response.result.as_deref(), Some(""));
    }

    #[test]
    fn test_region_from_id() {
        let response = call(
            &RegionFromIdFunction,
            "projects/my-project/regions/us-central1/subnetworks/my-subnet",
        );
        assert_eq!(response.result.as_deref(), Some("us-central1"));
    }

    #[test]
    fn test_region_absent_from_zonal_link() {
        assert!(call(&RegionFromIdFunction, SELF_LINK).is_error());
    }

    #[test]
    fn test_zone_from_self_link() {
        let response = call(&ZoneFromIdFunction, SELF_LINK);
        assert_eq!(response.result.as_deref(), Some("us-central1-c"));
    }

    #[test]
    fn test_location_accepts_each_collection() {
        for (input, expected) in [
            ("projects/p/locations/europe-west1/functions/f", "europe-west1"),
            ("projects/p/regions/us-east1/addresses/a", "us-east1"),
            (SELF_LINK, "us-central1-c"),
        ] {
            let response = call(&LocationFromIdFunction, input);
            assert_eq!(response.result.as_deref(), Some(expected), "input: {input}");
        }
    }

    #[test]
    fn test_definitions_name_matches() {
        let functions: [&dyn ProviderFunction; 4] = [
            &ProjectFromIdFunction,
            &RegionFromIdFunction,
            &ZoneFromIdFunction,
            &LocationFromIdFunction,
        ];
        for function in functions {
            assert_eq!(function.definition().name, function.name());
        }
    }
}
