use thiserror::Error;

/// The input held no match for the pattern, so no element can be returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No {label} is present in the input string")]
pub struct NoMatchError {
    pub input: String,
    pub pattern: String,
    pub label: String,
}

impl NoMatchError {
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn detail(&self) -> String {
        format!(
            "The input string \"{}\" doesn't contain the expected pattern \"{}\".",
            self.input, self.pattern
        )
    }
}

/// The input held more than one match; the left-most one was used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Ambiguous input string could contain more than one {label}")]
pub struct AmbiguousMatchWarning {
    pub input: String,
    pub pattern: String,
    pub label: String,
    pub matches: usize,
}

impl AmbiguousMatchWarning {
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn detail(&self) -> String {
        format!(
            "The input string \"{}\" contains more than one match for the pattern \"{}\". The first found match will be used.",
            self.input, self.pattern
        )
    }
}

/// Error building a [`crate::CompiledPattern`].
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),

    #[error("template \"{0}\" does not reference a named capture group")]
    NoGroup(String),

    #[error("template \"{template}\" references unknown capture group \"{group}\"")]
    UnknownGroup { template: String, group: String },

    #[error("function name must not be empty")]
    EmptyName,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Function already registered: {0}")]
    Duplicate(String),
}
