//! Differential validation: checks every subject's outcome against the
//! example's declared expectations, then cross-checks the remaining
//! subjects against each other.
//!
//! An engine with a declared expectation override is treated as a known
//! divergence: its scalar is still checked against its own expected
//! value, but it is excluded from the cross-engine agreement check. That
//! keeps the agreement check meaningful where dialects genuinely differ
//! (ASCII vs Unicode classes) without silencing real bugs elsewhere.

use std::fmt;

use itertools::Itertools;

use crate::{engine::EngineId, error::ValidationError, scan::ScanOutcome};

/// One outcome producer within an example: an engine scanning directly,
/// or an engine's aggregate pattern set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
    Engine(EngineId),
    Set(EngineId),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Engine(engine) => write!(f, "{engine}"),
            Subject::Set(engine) => write!(f, "{engine} set"),
        }
    }
}

/// Which scalar a rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Number of matches (single pattern) or matching patterns (list).
    Count,
    /// Total matched byte length, flattened across patterns.
    CountSpans,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationKind::Count => "count",
            ValidationKind::CountSpans => "count_spans",
        })
    }
}

/// Expected scalar values: a wildcard for all subjects plus per-subject
/// overrides. An override beats the wildcard.
#[derive(Debug, Clone, Default)]
pub struct Expected {
    wildcard: Option<u64>,
    overrides: Vec<(Subject, u64)>,
}

impl Expected {
    pub fn all(mut self, value: u64) -> Self {
        self.wildcard = Some(value);
        self
    }

    pub fn except(mut self, subject: Subject, value: u64) -> Self {
        self.overrides.push((subject, value));
        self
    }

    /// The expected value for one subject, or `None` when neither an
    /// override nor a wildcard covers it.
    pub fn resolve(&self, subject: Subject) -> Option<u64> {
        self.overrides
            .iter()
            .find(|(s, _)| *s == subject)
            .map(|(_, v)| *v)
            .or(self.wildcard)
    }

    fn overridden(&self) -> impl Iterator<Item = Subject> + '_ {
        self.overrides.iter().map(|(subject, _)| *subject)
    }
}

/// One scalar rule an example declares.
#[derive(Debug, Clone)]
pub struct Validation {
    kind: ValidationKind,
    expected: Expected,
}

impl Validation {
    pub fn count(expected: Expected) -> Self {
        Validation {
            kind: ValidationKind::Count,
            expected,
        }
    }

    pub fn count_spans(expected: Expected) -> Self {
        Validation {
            kind: ValidationKind::CountSpans,
            expected,
        }
    }
}

/// Checks every declared rule, then cross-checks agreement between the
/// subjects no rule or `divergent` entry has excepted. Returns the first
/// failure; an example with zero failures is safe to benchmark.
pub fn validate(
    example: &str,
    validations: &[Validation],
    divergent: &[Subject],
    outcomes: &[(Subject, ScanOutcome)],
) -> Result<(), ValidationError> {
    for validation in validations {
        for (subject, outcome) in outcomes {
            let expected = validation.expected.resolve(*subject).ok_or_else(|| {
                ValidationError::MissingExpectation {
                    example: example.to_owned(),
                    subject: *subject,
                    kind: validation.kind,
                }
            })?;
            let actual = match validation.kind {
                ValidationKind::Count => outcome.count(),
                ValidationKind::CountSpans => outcome.span_len(),
            };
            if actual != expected {
                return Err(ValidationError::Mismatch {
                    example: example.to_owned(),
                    subject: *subject,
                    kind: validation.kind,
                    expected,
                    actual,
                });
            }
        }
    }

    // Subjects with any override are already known to differ.
    let excepted = validations
        .iter()
        .flat_map(|v| v.expected.overridden())
        .chain(divergent.iter().copied())
        .collect_vec();
    let mut included = outcomes
        .iter()
        .filter(|(subject, _)| !excepted.contains(subject));
    let Some((reference, reference_outcome)) = included.next() else {
        return Ok(());
    };
    let reference_texts = reference_outcome.flattened();
    for (subject, outcome) in included {
        if outcome.flattened() != reference_texts {
            return Err(ValidationError::Disagreement {
                example: example.to_owned(),
                left: *reference,
                right: *subject,
            });
        }
    }
    Ok(())
}
