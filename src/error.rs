//! Error taxonomy for the harness.
//!
//! All inputs are static fixtures, so nothing here is retried: a failure
//! means a broken fixture, a rejected pattern or a genuine semantic
//! mismatch between engines. Every error names the offending engine and
//! carries the concrete values involved.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{
    engine::EngineId,
    validate::{Subject, ValidationKind},
};

/// Reading a corpus or pattern fixture failed. Fatal for the example.
#[derive(Debug, Error)]
#[error("failed to read fixture {}: {source}", path.display())]
pub struct CorpusError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// An engine rejected a pattern at compile time (syntax, unicode
/// incompatibility, compiled-size or repetition ceiling).
///
/// Clonable so a per-engine failure can be recorded at compile time and
/// surfaced later without losing the engine name or the raw pattern.
#[derive(Debug, Clone, Error)]
#[error("{engine} rejected pattern `{pattern}`: {message}")]
pub struct PatternCompileError {
    pub engine: EngineId,
    pub pattern: String,
    pub message: String,
}

/// An engine failed while matching, or a set was resolved against the
/// wrong pattern list.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The engine's own matching-time failure, e.g. a backtrack limit.
    #[error("{engine} failed while scanning: {source}")]
    Engine {
        engine: EngineId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The haystack is not valid UTF-8 and the caller refused the
    /// sanitized variant.
    #[error("{engine} requires a valid UTF-8 haystack")]
    InvalidHaystack { engine: EngineId },
    /// The ordering contract between a pattern set and the compiled
    /// pattern list was broken. This is a harness bug, not a variance.
    #[error("{engine} pattern set holds {set_len} patterns but was resolved against {patterns_len}")]
    SetArity {
        engine: EngineId,
        set_len: usize,
        patterns_len: usize,
    },
}

/// A scalar rule mismatch or an unresolved cross-engine disagreement.
/// Fatal for the example; benchmarking never runs after one of these.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("example `{example}`: {kind} for {subject}: expected {expected}, got {actual}")]
    Mismatch {
        example: String,
        subject: Subject,
        kind: ValidationKind,
        expected: u64,
        actual: u64,
    },
    #[error("example `{example}`: no expected {kind} declared for {subject}")]
    MissingExpectation {
        example: String,
        subject: Subject,
        kind: ValidationKind,
    },
    #[error("example `{example}`: {left} and {right} returned different matches")]
    Disagreement {
        example: String,
        left: Subject,
        right: Subject,
    },
}

/// Any failure the harness can produce for one example.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Compile(#[from] PatternCompileError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
