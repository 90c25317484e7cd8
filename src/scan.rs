//! Scan execution: normalizes every engine's output to a flat,
//! order-preserving sequence of matched substrings, and resolves
//! multi-pattern set matches back to the patterns that fired.

use crate::{
    corpus::Haystack,
    engine::{CompiledPattern, CompiledSet},
    error::ScanError,
};

/// The matched substrings one engine produced for one (haystack, pattern)
/// pair, in haystack order.
///
/// Matches are byte strings so byte-oriented and str-oriented engines can
/// be compared directly. Transient: computed per scan, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    texts: Vec<Vec<u8>>,
}

impl MatchResult {
    pub(crate) fn push(&mut self, text: &[u8]) {
        self.texts.push(text.to_vec());
    }

    pub fn count(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Total byte length across all matched substrings.
    pub fn span_len(&self) -> usize {
        self.texts.iter().map(Vec::len).sum()
    }

    pub fn texts(&self) -> impl Iterator<Item = &[u8]> {
        self.texts.iter().map(Vec::as_slice)
    }
}

/// What one subject (an engine, or an engine's pattern set) produced for
/// one example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A single pattern: entries are individual matches.
    Single(MatchResult),
    /// A pattern list: entries are per-pattern results with empty results
    /// dropped, so `count` means "patterns that matched".
    Grouped(Vec<MatchResult>),
}

impl ScanOutcome {
    /// The scalar the `Count` rule checks.
    pub fn count(&self) -> u64 {
        match self {
            ScanOutcome::Single(result) => result.count() as u64,
            ScanOutcome::Grouped(groups) => groups.len() as u64,
        }
    }

    /// The scalar the `CountSpans` rule checks: total matched byte length
    /// across every pattern, flattened.
    pub fn span_len(&self) -> u64 {
        match self {
            ScanOutcome::Single(result) => result.span_len() as u64,
            ScanOutcome::Grouped(groups) => groups.iter().map(|r| r.span_len() as u64).sum(),
        }
    }

    /// All matched substrings, flattened, for cross-engine comparison.
    pub fn flattened(&self) -> Vec<&[u8]> {
        match self {
            ScanOutcome::Single(result) => result.texts().collect(),
            ScanOutcome::Grouped(groups) => groups.iter().flat_map(MatchResult::texts).collect(),
        }
    }
}

/// Runs one engine's compiled pattern over the haystack. The engine's
/// preferred haystack view (raw bytes vs sanitized UTF-8) is chosen by
/// the pattern's engine quirk; matching-time errors propagate.
pub fn scan(haystack: &Haystack, pattern: &CompiledPattern) -> Result<MatchResult, ScanError> {
    pattern.scan(haystack)
}

/// Scans every pattern of a list in order and keeps the ones that matched.
pub fn scan_groups(
    haystack: &Haystack,
    patterns: &[CompiledPattern],
) -> Result<Vec<MatchResult>, ScanError> {
    let mut groups = Vec::new();
    for pattern in patterns {
        let result = pattern.scan(haystack)?;
        if !result.is_empty() {
            groups.push(result);
        }
    }
    Ok(groups)
}

/// Queries the set for which member patterns matched anywhere, then
/// rescans only those patterns for their actual matches.
///
/// Index `i` of the set must refer to `patterns[i]`: both come from the
/// same ordered list in the pattern compiler, and a length mismatch is
/// reported as an error rather than tolerated.
pub fn resolve_set(
    haystack: &Haystack,
    set: &CompiledSet,
    patterns: &[CompiledPattern],
) -> Result<Vec<MatchResult>, ScanError> {
    if set.len() != patterns.len() {
        return Err(ScanError::SetArity {
            engine: set.engine(),
            set_len: set.len(),
            patterns_len: patterns.len(),
        });
    }
    let mut groups = Vec::new();
    for index in set.matched_indices(haystack) {
        let result = patterns[index].scan(haystack)?;
        if !result.is_empty() {
            groups.push(result);
        }
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineId;

    fn hay(text: &str) -> Haystack {
        Haystack::new(text.as_bytes().to_vec())
    }

    fn compile_all(patterns: &[&str]) -> Vec<CompiledPattern> {
        patterns
            .iter()
            .map(|p| EngineId::Meta.compile(p, true).unwrap())
            .collect()
    }

    #[test]
    fn auto_wrapping_preserves_reported_text() {
        // For the capture-requiring engine, a wrapped bare pattern must
        // report the same substrings as a hand-wrapped one.
        let haystack = hay("xabcx");
        let bare = EngineId::Lite
            .compile(&crate::pattern::capturize("abc"), true)
            .unwrap();
        let wrapped = EngineId::Lite.compile("(abc)", true).unwrap();
        assert_eq!(
            scan(&haystack, &bare).unwrap(),
            scan(&haystack, &wrapped).unwrap()
        );
    }

    #[test]
    fn grouped_scan_drops_empty_patterns() {
        let haystack = hay("cats and dogs");
        let patterns = compile_all(&["cats", "birds", "dogs"]);
        let groups = scan_groups(&haystack, &patterns).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].texts().next(), Some(b"cats".as_slice()));
        assert_eq!(groups[1].texts().next(), Some(b"dogs".as_slice()));
    }

    #[test]
    fn set_resolution_matches_full_rescan() {
        let haystack = hay("cats chase dogs, dogs chase cats");
        let sources: Vec<String> = ["cats", "mice", "dogs", "chase"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let patterns = compile_all(&["cats", "mice", "dogs", "chase"]);
        let set = EngineId::Meta.compile_set(&sources, true).unwrap().unwrap();
        let resolved = resolve_set(&haystack, &set, &patterns).unwrap();
        let full = scan_groups(&haystack, &patterns).unwrap();
        assert_eq!(resolved, full);
    }

    #[test]
    fn set_arity_mismatch_is_an_error() {
        let haystack = hay("cats");
        let sources = vec!["cats".to_owned(), "dogs".to_owned()];
        let patterns = compile_all(&["cats"]);
        let set = EngineId::Meta.compile_set(&sources, true).unwrap().unwrap();
        let err = resolve_set(&haystack, &set, &patterns).unwrap_err();
        assert!(matches!(err, ScanError::SetArity { set_len: 2, patterns_len: 1, .. }));
    }

    #[test]
    fn outcome_scalars() {
        let mut result = MatchResult::default();
        result.push(b"aaa");
        result.push(b"aaa");
        let single = ScanOutcome::Single(result.clone());
        assert_eq!(single.count(), 2);
        assert_eq!(single.span_len(), 6);

        let grouped = ScanOutcome::Grouped(vec![result.clone(), result]);
        assert_eq!(grouped.count(), 2);
        assert_eq!(grouped.span_len(), 12);
        assert_eq!(grouped.flattened().len(), 4);
    }
}
