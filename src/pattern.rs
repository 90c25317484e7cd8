//! Pattern compilation: turns one pattern source into a compiled form per
//! engine, applying each engine's dialect transforms along the way.
//!
//! A compile failure in one engine never aborts the others; failures are
//! carried alongside successes so an example can report exactly which
//! dialect rejected which pattern.

use std::{
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;

use crate::{
    engine::{CompiledPattern, CompiledSet, EngineId},
    error::{CorpusError, PatternCompileError},
};

/// Where an example's pattern text comes from.
#[derive(Debug, Clone)]
pub enum PatternSpec {
    /// Per-engine pattern strings, written out by hand. Used when the
    /// engines need different spellings of the same intent; no dialect
    /// transforms are applied.
    Inline(Vec<(EngineId, String)>),
    /// One shared pattern in a file. The trailing newline editors add is
    /// trimmed; capture-requiring engines get the pattern auto-wrapped.
    File(PathBuf),
    /// One pattern per line. Blank lines are skipped. Set-capable engines
    /// additionally get an aggregate set compiled from the same list.
    ListFile(PathBuf),
}

/// What one engine compiled from a [`PatternSpec`].
#[derive(Debug)]
pub enum Compiled {
    One(CompiledPattern),
    Many {
        patterns: Vec<CompiledPattern>,
        /// Present only for set-capable engines.
        set: Option<CompiledSet>,
    },
}

/// Wraps a pattern in a capture group so engines that report text through
/// group 1 report the whole match. A pattern that already opens with a
/// group is left alone rather than double-wrapped.
pub fn capturize(pattern: &str) -> String {
    if pattern.starts_with('(') {
        pattern.to_owned()
    } else {
        format!("({pattern})")
    }
}

/// Compiles the spec for every participating engine. I/O failure reading a
/// pattern file is fatal; per-engine compile failures are returned in
/// place so callers decide whether they abort the example.
pub fn compile(
    spec: &PatternSpec,
    unicode: bool,
) -> Result<Vec<(EngineId, Result<Compiled, PatternCompileError>)>, CorpusError> {
    match spec {
        PatternSpec::Inline(entries) => Ok(entries
            .iter()
            .map(|(engine, pattern)| {
                (*engine, engine.compile(pattern, unicode).map(Compiled::One))
            })
            .collect_vec()),
        PatternSpec::File(path) => {
            let raw = read_pattern_file(path)?;
            let pattern = raw.trim_end_matches(['\r', '\n']);
            Ok(EngineId::ALL
                .into_iter()
                .map(|engine| {
                    let dialect = dialect_pattern(engine, pattern);
                    (engine, engine.compile(&dialect, unicode).map(Compiled::One))
                })
                .collect_vec())
        }
        PatternSpec::ListFile(path) => {
            let raw = read_pattern_file(path)?;
            let shared = raw.lines().filter(|line| !line.is_empty()).collect_vec();
            Ok(EngineId::ALL
                .into_iter()
                .map(|engine| (engine, compile_list(engine, &shared, unicode)))
                .collect_vec())
        }
    }
}

fn read_pattern_file(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError {
        path: path.to_path_buf(),
        source,
    })
}

fn dialect_pattern(engine: EngineId, pattern: &str) -> String {
    if engine.needs_capture_group() {
        capturize(pattern)
    } else {
        pattern.to_owned()
    }
}

fn compile_list(
    engine: EngineId,
    shared: &[&str],
    unicode: bool,
) -> Result<Compiled, PatternCompileError> {
    let dialect = shared
        .iter()
        .map(|pattern| dialect_pattern(engine, pattern))
        .collect_vec();
    let patterns = dialect
        .iter()
        .map(|pattern| engine.compile(pattern, unicode))
        .try_collect()?;
    let set = match engine.compile_set(&dialect, unicode) {
        Some(result) => Some(result?),
        None => None,
    };
    Ok(Compiled::Many { patterns, set })
}
