//! Element extraction from self links and resource ids.
//!
//! Every non-overlapping match of the pattern is counted. No match is an
//! error, a single match is expanded through the template, and several
//! matches produce a warning while the left-most match is still used.

use tracing::{debug, warn};

use crate::diagnostics::Diagnostics;
use crate::error::{AmbiguousMatchWarning, NoMatchError};
use crate::pattern::CompiledPattern;

/// Functions built on the extractor take their input as the first argument.
const INPUT_ARGUMENT: usize = 0;

/// Successful extraction, possibly with an ambiguity warning attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub value: String,
    pub warning: Option<AmbiguousMatchWarning>,
}

/// Extract the element `pattern` describes from `input`.
///
/// # Errors
/// Returns `NoMatchError` when the pattern does not match anywhere in `input`.
pub fn get_element(input: &str, pattern: &CompiledPattern) -> Result<Extraction, NoMatchError> {
    let mut matches = pattern.regex().captures_iter(input);

    let Some(first) = matches.next() else {
        debug!("No {} in {:?}", pattern.label(), input);
        return Err(NoMatchError {
            input: input.to_string(),
            pattern: pattern.description().to_string(),
            label: pattern.label().to_string(),
        });
    };
    let count = 1 + matches.count();

    let mut value = String::new();
    first.expand(pattern.template(), &mut value);

    let warning = (count > 1).then(|| AmbiguousMatchWarning {
        input: input.to_string(),
        pattern: pattern.description().to_string(),
        label: pattern.label().to_string(),
        matches: count,
    });

    debug!("Extracted {} {:?} from {:?}", pattern.label(), value, input);
    Ok(Extraction { value, warning })
}

#[derive(Debug, Clone)]
pub struct ElementExtractor {
    pattern: CompiledPattern,
}

impl ElementExtractor {
    #[must_use]
    pub const fn new(pattern: CompiledPattern) -> Self {
        Self { pattern }
    }

    #[must_use]
    pub const fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// # Errors
    /// Returns `NoMatchError` when the pattern does not match `input`.
    pub fn get(&self, input: &str) -> Result<Extraction, NoMatchError> {
        get_element(input, &self.pattern)
    }

    /// Extract `input`, reporting the outcome as diagnostics. On error the
    /// returned value is empty and an argument error has been recorded.
    #[must_use]
    pub fn extract(&self, input: &str) -> (String, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        match self.get(input) {
            Ok(Extraction { value, warning }) => {
                if let Some(warning) = warning {
                    warn!(
                        "{} matches for {:?} in {:?}, using the first",
                        warning.matches,
                        self.pattern.description(),
                        input
                    );
                    diagnostics.add_argument_warning(
                        INPUT_ARGUMENT,
                        warning.summary(),
                        warning.detail(),
                    );
                }
                (value, diagnostics)
            }
            Err(err) => {
                diagnostics.add_argument_error(INPUT_ARGUMENT, err.summary(), err.detail());
                (String::new(), diagnostics)
            }
        }
    }
}
