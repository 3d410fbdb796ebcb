//! Pattern functions declared in configuration rather than compiled in.

use selflink_core::{
    ElementExtractor, FunctionDefinition, Parameter, PatternDef, PatternError, ProviderFunction,
    RunRequest, RunResponse, ValueKind,
};

use crate::run_element;

#[derive(Debug, Clone)]
pub struct PatternFunction {
    name: String,
    summary: String,
    extractor: ElementExtractor,
}

impl PatternFunction {
    /// # Errors
    /// Returns `PatternError` if the definition's regex or template is invalid.
    pub fn from_def(def: &PatternDef) -> Result<Self, PatternError> {
        let pattern = def.build()?;
        let summary = def.summary.clone().unwrap_or_else(|| {
            format!(
                "Returns the {} matching \"{}\" in the input string.",
                pattern.label(),
                pattern.description()
            )
        });
        Ok(Self {
            name: def.name.trim().to_string(),
            summary,
            extractor: ElementExtractor::new(pattern),
        })
    }
}

impl ProviderFunction for PatternFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self) -> FunctionDefinition {
        let pattern = self.extractor.pattern();
        FunctionDefinition {
            name: self.name.clone(),
            summary: self.summary.clone(),
            description: format!(
                "Takes a single string argument and returns the {} found by the pattern \"{}\". \
                 Raises an error when nothing matches and warns when more than one match is found.",
                pattern.label(),
                pattern.description()
            ),
            parameters: vec![Parameter::string("input", "The string to extract from")],
            return_kind: ValueKind::String,
        }
    }

    fn run(&self, request: &RunRequest) -> RunResponse {
        run_element(&self.extractor, request)
    }
}
