//! Compiled extraction patterns.
//!
//! A pattern pairs a regex with a template naming the capture group to
//! return, plus the human-readable pseudo-pattern and element label used
//! in diagnostics.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PatternError;

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    template: String,
    description: String,
    label: String,
}

impl CompiledPattern {
    /// Compile `regex` and check that `template` references only named
    /// groups the regex defines.
    pub fn new(
        regex: &str,
        template: impl Into<String>,
        description: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let regex = Regex::new(regex)?;
        let template = template.into();

        let groups = template_groups(&template);
        if groups.is_empty() {
            return Err(PatternError::NoGroup(template));
        }
        let unknown = groups
            .into_iter()
            .find(|group| !regex.capture_names().flatten().any(|name| name == *group))
            .map(str::to_string);
        if let Some(group) = unknown {
            return Err(PatternError::UnknownGroup { template, group });
        }

        Ok(Self {
            regex,
            template,
            description: description.into(),
            label: label.into(),
        })
    }

    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Pseudo-pattern shown to users, e.g. `resourceType/{name}$`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// What the extracted element is called, e.g. `resource name`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Names referenced by `$name` or `${name}` in a regex replacement template.
/// `$$` is a literal dollar sign.
fn template_groups(template: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        rest = &rest[pos + 1..];

        if let Some(tail) = rest.strip_prefix('$') {
            rest = tail;
            continue;
        }

        if let Some(tail) = rest.strip_prefix('{') {
            if let Some(end) = tail.find('}') {
                groups.push(&tail[..end]);
                rest = &tail[end + 1..];
            }
            continue;
        }

        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if end > 0 {
            groups.push(&rest[..end]);
            rest = &rest[end..];
        }
    }

    groups
}

/// User-declared pattern function, as read from configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternDef {
    /// Function name the pattern is registered under.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Regex with one named capture group.
    pub pattern: String,

    /// Template referencing the named group, e.g. `$Name`.
    pub template: String,

    /// Pseudo-pattern used in error and warning messages.
    pub description: String,

    #[serde(default = "PatternDef::default_label")]
    pub label: String,
}

impl PatternDef {
    fn default_label() -> String {
        "element".to_string()
    }

    pub fn build(&self) -> Result<CompiledPattern, PatternError> {
        if self.name.trim().is_empty() {
            return Err(PatternError::EmptyName);
        }
        CompiledPattern::new(
            &self.pattern,
            self.template.as_str(),
            self.description.as_str(),
            self.label.as_str(),
        )
    }
}
