use selflink_core::{
    CompiledPattern, ElementExtractor, FunctionDefinition, Parameter, ProviderFunction,
    RunRequest, RunResponse, ValueKind,
};
use std::sync::OnceLock;

use crate::run_element;

static EXTRACTOR: OnceLock<ElementExtractor> = OnceLock::new();

/// Last `/`-delimited segment of the input.
#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
pub(crate) fn extractor() -> &'static ElementExtractor {
    EXTRACTOR.get_or_init(|| {
        ElementExtractor::new(
            CompiledPattern::new(
                "/(?P<ResourceName>[^/]+)$",
                "$ResourceName",
                "resourceType/{name}$",
                "resource name",
            )
            .expect("Static regex pattern is guaranteed to be valid"),
        )
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceNameFromSelfLinkFunction;

impl ProviderFunction for ResourceNameFromSelfLinkFunction {
    fn name(&self) -> &'static str {
        "resource_name_from_self_link"
    }

    fn definition(&self) -> FunctionDefinition {
        FunctionDefinition {
            name: "resource_name_from_self_link".into(),
            summary: "Returns the resource name within the resource self link or id provided as an argument.".into(),
            description: "Takes a single string argument, which should be a self link or id of a resource. \
                This function will either return the resource's short name from the input string or raise an error. \
                The function returns the last element in that path before the end of the input string, e.g. when \
                the function is passed the self link \"https://www.googleapis.com/compute/v1/projects/my-project/zones/us-central1-c/instances/my-instance\" \
                as an argument it will return \"my-instance\".".into(),
            parameters: vec![Parameter::string(
                "self_link",
                "A self link of a resource, or an id. For example, both \
                \"https://www.googleapis.com/compute/v1/projects/my-project/zones/us-central1-c/instances/my-instance\" and \
                \"projects/my-project/zones/us-central1-c/instances/my-instance\" are valid inputs",
            )],
            return_kind: ValueKind::String,
        }
    }

    fn run(&self, request: &RunRequest) -> RunResponse {
        run_element(extractor(), request)
    }
}
