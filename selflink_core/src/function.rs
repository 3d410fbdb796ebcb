//! Host-facing function interface and registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::diagnostics::Diagnostics;
use crate::error::RegistryError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: ValueKind,
}

impl Parameter {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ValueKind::String,
        }
    }
}

/// Function definition advertised to the host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub parameters: Vec<Parameter>,
    #[serde(rename = "return")]
    pub return_kind: ValueKind,
}

/// Positional arguments of one call.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub arguments: Vec<serde_json::Value>,
}

impl RunRequest {
    #[must_use]
    pub const fn new(arguments: Vec<serde_json::Value>) -> Self {
        Self { arguments }
    }

    pub fn from_strings<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            arguments: arguments
                .into_iter()
                .map(|s| serde_json::Value::String(s.into()))
                .collect(),
        }
    }

    /// Read argument `index` as a string, recording an argument error otherwise.
    pub fn string_argument(&self, index: usize, diagnostics: &mut Diagnostics) -> Option<String> {
        match self.arguments.get(index) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => {
                diagnostics.add_argument_error(
                    index,
                    "Invalid argument",
                    format!("Expected a string, got {other}."),
                );
                None
            }
            None => {
                diagnostics.add_argument_error(
                    index,
                    "Missing argument",
                    format!("Argument {index} is required."),
                );
                None
            }
        }
    }
}

/// Result of a call. `result` is `None` when the arguments could not be read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunResponse {
    pub result: Option<String>,
    pub diagnostics: Diagnostics,
}

impl RunResponse {
    #[must_use]
    pub const fn with_result(result: String, diagnostics: Diagnostics) -> Self {
        Self {
            result: Some(result),
            diagnostics,
        }
    }

    #[must_use]
    pub const fn without_result(diagnostics: Diagnostics) -> Self {
        Self {
            result: None,
            diagnostics,
        }
    }

    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_error(summary, detail);
        Self::without_result(diagnostics)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.diagnostics.has_error()
    }
}

/// A function callable by name from the host.
pub trait ProviderFunction: Send + Sync {
    fn name(&self) -> &str;
    fn definition(&self) -> FunctionDefinition;
    fn run(&self, request: &RunRequest) -> RunResponse;
}

pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn ProviderFunction>>,
}

impl FunctionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// # Errors
    /// Returns `RegistryError::Duplicate` if the name is already taken.
    pub fn register(&mut self, function: Arc<dyn ProviderFunction>) -> Result<(), RegistryError> {
        let name = function.name().to_string();
        if self.functions.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        info!("Registering function: {name}");
        self.functions.insert(name, function);
        Ok(())
    }

    /// Drop a registered function, returning whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.functions.remove(name).is_some()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn ProviderFunction>> {
        self.functions.get(name).cloned()
    }

    pub fn call(&self, name: &str, request: &RunRequest) -> RunResponse {
        let Some(function) = self.functions.get(name) else {
            return RunResponse::error(
                format!("Unknown function: {name}"),
                format!("Available functions: {}", self.list().join(", ")),
            );
        };
        debug!("Calling {name} with {} argument(s)", request.arguments.len());
        function.run(request)
    }

    #[must_use]
    pub fn definitions(&self) -> Vec<FunctionDefinition> {
        let mut definitions: Vec<_> = self.functions.values().map(|f| f.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<_> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
