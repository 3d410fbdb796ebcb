use selflink_core::{
    CompiledPattern, ElementExtractor, FunctionDefinition, Parameter, ProviderFunction,
    RunRequest, RunResponse, ValueKind,
};
use std::sync::OnceLock;

use crate::run_element;

static EXTRACTOR: OnceLock<ElementExtractor> = OnceLock::new();

/// `us-central1-c` -> `us-central1`. The whole input must be a zone name.
#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn extractor() -> &'static ElementExtractor {
    EXTRACTOR.get_or_init(|| {
        ElementExtractor::new(
            CompiledPattern::new(
                "^(?P<Region>[a-z]+-[a-z]+[0-9]+)-[a-z]$",
                "$Region",
                "{region}-{zone letter}",
                "region",
            )
            .expect("Static regex pattern is guaranteed to be valid"),
        )
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegionFromZoneFunction;

impl ProviderFunction for RegionFromZoneFunction {
    fn name(&self) -> &'static str {
        "region_from_zone"
    }

    fn definition(&self) -> FunctionDefinition {
        FunctionDefinition {
            name: "region_from_zone".into(),
            summary: "Returns the region within a provided zone.".into(),
            description: "Takes a single string argument, which should be the name of a zone. \
                This function will either return the region that the zone is in or raise an error, \
                e.g. \"us-central1-c\" gives \"us-central1\"."
                .into(),
            parameters: vec![Parameter::string(
                "zone",
                "A zone name, e.g. \"us-central1-c\"",
            )],
            return_kind: ValueKind::String,
        }
    }

    fn run(&self, request: &RunRequest) -> RunResponse {
        run_element(extractor(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_zone() {
        for (zone, region) in [
            ("us-central1-c", "us-central1"),
            ("europe-west4-a", "europe-west4"),
            ("northamerica-northeast2-b", "northamerica-northeast2"),
        ] {
            let response = RegionFromZoneFunction.run(&RunRequest::from_strings([zone]));
            assert_eq!(response.result.as_deref(), Some(region), "zone: {zone}");
            assert!(response.diagnostics.is_empty());
        }
    }

    #[test]
    fn test_rejects_self_link_and_region() {
        for input in [
            "projects/my-project/zones/us-central1-c",
            "us-central1",
            "",
        ] {
            let response = RegionFromZoneFunction.run(&RunRequest::from_strings([input]));
            assert!(response.is_error(), "input: {input}");
        }
    }
}
