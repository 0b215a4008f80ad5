//! Error types for the engine's input boundary, with error codes.
//!
//! The layout engine itself never fails: unplaceable candidates are dropped
//! and an empty candidate list produces an empty layout. Errors only arise
//! where candidate data enters the process (CLI file, wasm payload), so the
//! taxonomy is deliberately small:
//!
//! - L001: `Read` (candidates file could not be read)
//! - L002: `Parse` (candidates JSON is malformed)
//! - L003: `ContractViolation` (an answer fails the upstream contract, strict mode only)
//!
//! Each variant has a stable `code()` for lookup, an optional `help()`
//! suggestion, and `display_detailed()` combining both.

use std::io;

/// Error reading or validating the candidate list at an input boundary.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read candidates from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed candidates JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("answer {answer:?} (candidate {index}) violates the upstream contract")]
    ContractViolation { index: usize, answer: String },
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::Read { .. } => "L001",
            InputError::Parse(_) => "L002",
            InputError::ContractViolation { .. } => "L003",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::Read { .. } => {
                Some("Check that the path exists and is readable")
            }
            InputError::Parse(_) => Some(
                "Expected a JSON array of {\"clue\": ..., \"answer\": ...} objects",
            ),
            InputError::ContractViolation { .. } => Some(
                "Answers must be 4-10 glyphs with no whitespace or digits; rerun without --strict to skip offenders instead",
            ),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help) => format!("{self} ({})\n{help}", self.code()),
            None => format!("{self} ({})", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_errors() -> Vec<InputError> {
        vec![
            InputError::Read {
                path: "missing.json".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            InputError::Parse(serde_json::from_str::<Vec<u8>>("not json").unwrap_err()),
            InputError::ContractViolation {
                index: 3,
                answer: "no spaces".to_string(),
            },
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let mut codes = HashSet::new();
        for err in sample_errors() {
            assert!(err.code().starts_with('L'));
            assert!(codes.insert(err.code()), "duplicate code {}", err.code());
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in sample_errors() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
            }
        }
    }

    #[test]
    fn test_contract_violation_names_the_candidate() {
        let err = InputError::ContractViolation {
            index: 3,
            answer: "no spaces".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("candidate 3"));
        assert!(msg.contains("no spaces"));
    }
}
