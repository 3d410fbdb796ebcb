#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod diagnostics;
pub mod element;
pub mod error;
pub mod function;
pub mod pattern;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use element::{ElementExtractor, Extraction, get_element};
pub use error::{AmbiguousMatchWarning, NoMatchError, PatternError, RegistryError};
pub use function::{
    FunctionDefinition, FunctionRegistry, Parameter, ProviderFunction, RunRequest, RunResponse,
    ValueKind,
};
pub use pattern::{CompiledPattern, PatternDef};
