//! Engine adapters: one compile/scan surface over three regex crates.
//!
//! The harness never branches on engine identity except to look up the
//! dialect quirks below; everything else goes through [`EngineId::compile`]
//! and the scan methods on the compiled forms. Dispatch is a static table
//! (an enum), not name lookup.
//!
//! Dialect quirks, declared here and honored by the pattern compiler and
//! scan executor:
//!
//! - `meta` (regex-automata's meta engine) is byte-oriented and lenient
//!   about invalid UTF-8, has a real unicode toggle, and supports
//!   multi-pattern sets.
//! - `lite` (regex-lite) is str-only, its classes are ASCII no matter
//!   what, and its scan reports text through explicit capture group 1
//!   only, so bare shared patterns must be wrapped before compilation.
//! - `fancy` (fancy-regex) backtracks, so matching itself can fail at
//!   scan time; it is str-only and unicode-aware with no off switch.

mod fancy;
mod lite;
mod meta;

use std::fmt;

use crate::{
    corpus::Haystack,
    error::{PatternCompileError, ScanError},
    scan::MatchResult,
};

/// Identifies one of the three engines under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EngineId {
    Meta,
    Lite,
    Fancy,
}

impl EngineId {
    pub const ALL: [EngineId; 3] = [EngineId::Meta, EngineId::Lite, EngineId::Fancy];

    pub fn name(self) -> &'static str {
        match self {
            EngineId::Meta => "meta",
            EngineId::Lite => "lite",
            EngineId::Fancy => "fancy",
        }
    }

    /// Whether scan only reports text through an explicit capture group.
    /// The pattern compiler wraps bare shared patterns for such engines.
    pub fn needs_capture_group(self) -> bool {
        matches!(self, EngineId::Lite)
    }

    /// str-only engines; the scan executor hands them the sanitized
    /// haystack variant when the corpus holds invalid UTF-8.
    pub fn requires_valid_utf8(self) -> bool {
        matches!(self, EngineId::Lite | EngineId::Fancy)
    }

    /// Only meta can switch `\w`/`\d`/`\s`/`\b` between ASCII and
    /// Unicode. For the other two the example's unicode flag is advisory:
    /// lite is always ASCII, fancy always Unicode.
    pub fn supports_unicode_toggle(self) -> bool {
        matches!(self, EngineId::Meta)
    }

    pub fn supports_sets(self) -> bool {
        matches!(self, EngineId::Meta)
    }

    /// Compiles one pattern in this engine's dialect. The unicode flag is
    /// passed through only where the engine supports toggling it.
    pub fn compile(self, pattern: &str, unicode: bool) -> Result<CompiledPattern, PatternCompileError> {
        let imp = match self {
            EngineId::Meta => meta::compile(pattern, unicode).map(Imp::Meta),
            EngineId::Lite => lite::compile(pattern).map(Imp::Lite),
            EngineId::Fancy => fancy::compile(pattern).map(Imp::Fancy),
        }
        .map_err(|message| PatternCompileError {
            engine: self,
            pattern: pattern.to_owned(),
            message,
        })?;
        Ok(CompiledPattern {
            engine: self,
            unicode,
            pattern: pattern.to_owned(),
            imp,
        })
    }

    /// Compiles a pattern list into one aggregate set, or `None` when the
    /// engine has no multi-pattern support.
    pub fn compile_set(
        self,
        patterns: &[String],
        unicode: bool,
    ) -> Option<Result<CompiledSet, PatternCompileError>> {
        match self {
            EngineId::Meta => Some(
                meta::compile_set(patterns, unicode)
                    .map(|re| CompiledSet {
                        engine: self,
                        len: patterns.len(),
                        imp: SetImp::Meta(re),
                    })
                    .map_err(|message| PatternCompileError {
                        engine: self,
                        pattern: patterns.join("\n"),
                        message,
                    }),
            ),
            EngineId::Lite | EngineId::Fancy => None,
        }
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An engine-specific compiled pattern, tagged with the engine it belongs
/// to and the unicode mode used to compile it. Read-only after
/// construction and reused across benchmark iterations.
#[derive(Debug)]
pub struct CompiledPattern {
    engine: EngineId,
    unicode: bool,
    pattern: String,
    imp: Imp,
}

#[derive(Debug)]
enum Imp {
    Meta(regex_automata::meta::Regex),
    Lite(regex_lite::Regex),
    Fancy(fancy_regex::Regex),
}

impl CompiledPattern {
    pub fn engine(&self) -> EngineId {
        self.engine
    }

    pub fn unicode(&self) -> bool {
        self.unicode
    }

    /// The raw pattern string this was compiled from, post dialect
    /// transforms.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Runs the engine over its preferred haystack view and returns the
    /// matched substrings in haystack order. Matching-time engine errors
    /// propagate with the engine identified; they are never swallowed.
    pub(crate) fn scan(&self, haystack: &Haystack) -> Result<MatchResult, ScanError> {
        match &self.imp {
            Imp::Meta(re) => Ok(meta::scan(re, haystack.bytes())),
            Imp::Lite(re) => Ok(lite::scan(re, haystack.utf8())),
            Imp::Fancy(re) => fancy::scan(re, haystack.utf8()).map_err(|source| ScanError::Engine {
                engine: self.engine,
                source: Box::new(source),
            }),
        }
    }
}

/// A compiled aggregate of every pattern in a list, answering "which
/// member patterns match anywhere" in one pass.
///
/// Index `i` of a set refers to pattern `i` of the ordered list the set
/// was built from; the set resolver enforces that contract.
#[derive(Debug)]
pub struct CompiledSet {
    engine: EngineId,
    len: usize,
    imp: SetImp,
}

#[derive(Debug)]
enum SetImp {
    Meta(regex_automata::meta::Regex),
}

impl CompiledSet {
    pub fn engine(&self) -> EngineId {
        self.engine
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of member patterns that match anywhere, ascending.
    pub(crate) fn matched_indices(&self, haystack: &Haystack) -> Vec<usize> {
        match &self.imp {
            SetImp::Meta(re) => meta::matched_indices(re, haystack.bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hay(text: &str) -> Haystack {
        Haystack::new(text.as_bytes().to_vec())
    }

    #[test]
    fn literal_scan_agrees_across_engines() {
        let haystack = hay("aaa bbb aaa");
        for engine in EngineId::ALL {
            let pattern = if engine.needs_capture_group() { "(aaa)" } else { "aaa" };
            let compiled = engine.compile(pattern, true).unwrap();
            let result = compiled.scan(&haystack).unwrap();
            assert_eq!(result.count(), 2, "{engine}");
            assert_eq!(result.span_len(), 6, "{engine}");
        }
    }

    #[test]
    fn empty_haystack_matches_nothing() {
        let haystack = hay("");
        for engine in EngineId::ALL {
            let pattern = if engine.needs_capture_group() { "(aaa)" } else { "aaa" };
            let compiled = engine.compile(pattern, true).unwrap();
            let result = compiled.scan(&haystack).unwrap();
            assert_eq!(result.count(), 0, "{engine}");
            assert_eq!(result.span_len(), 0, "{engine}");
        }
    }

    #[test]
    fn scanning_is_idempotent() {
        let haystack = hay("one two one two");
        for engine in EngineId::ALL {
            let pattern = if engine.needs_capture_group() { "(two)" } else { "two" };
            let compiled = engine.compile(pattern, true).unwrap();
            let first = compiled.scan(&haystack).unwrap();
            let second = compiled.scan(&haystack).unwrap();
            assert_eq!(first, second, "{engine}");
        }
    }

    #[test]
    fn meta_unicode_toggle_changes_word_class() {
        let haystack = hay("Fräulein");
        let unicode = EngineId::Meta.compile(r"\w+", true).unwrap();
        assert_eq!(unicode.scan(&haystack).unwrap().count(), 1);
        let ascii = EngineId::Meta.compile(r"\w+", false).unwrap();
        assert_eq!(ascii.scan(&haystack).unwrap().count(), 2);
    }

    #[test]
    fn compile_failure_names_engine_and_pattern() {
        // Lookbehind is fancy-only; the other engines must reject it
        // without affecting each other.
        let pattern = "(?<=a)b";
        let err = EngineId::Meta.compile(pattern, true).unwrap_err();
        assert_eq!(err.engine, EngineId::Meta);
        assert_eq!(err.pattern, pattern);
        assert!(EngineId::Lite.compile(pattern, true).is_err());
        assert!(EngineId::Fancy.compile(pattern, true).is_ok());
    }

    #[test]
    fn invalid_utf8_haystack_behaviors() {
        let haystack = Haystack::new(b"\xfc\xa1\xa1\xa1\xa1\xa1abc".to_vec());
        // The lenient byte engine matches the valid remainder in place.
        let meta = EngineId::Meta.compile(".+", true).unwrap();
        let result = meta.scan(&haystack).unwrap();
        assert_eq!(result.texts().collect::<Vec<_>>(), vec![b"abc".as_slice()]);
        // str engines get the sanitized variant and agree on the result.
        for engine in [EngineId::Lite, EngineId::Fancy] {
            let pattern = if engine.needs_capture_group() { "(.+)" } else { ".+" };
            let compiled = engine.compile(pattern, true).unwrap();
            let result = compiled.scan(&haystack).unwrap();
            assert_eq!(result.texts().collect::<Vec<_>>(), vec![b"abc".as_slice()], "{engine}");
            // The strict path refuses the raw bytes instead.
            assert!(haystack.strict_utf8(engine).is_err());
        }
    }

    #[test]
    fn set_reports_matching_member_indices() {
        let haystack = hay("cats and dogs");
        let patterns = ["cats".to_owned(), "birds".to_owned(), "dogs".to_owned()];
        let set = EngineId::Meta.compile_set(&patterns, true).unwrap().unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.matched_indices(&haystack), vec![0, 2]);
    }

    #[test]
    fn set_reports_every_member_not_just_the_first_winner() {
        // Both members match at the same position; a leftmost-first set
        // would report only the winning pattern.
        let haystack = hay("Sherlock Holmes");
        let patterns = ["Sherlock".to_owned(), "Sherlock Holmes".to_owned()];
        let set = EngineId::Meta.compile_set(&patterns, true).unwrap().unwrap();
        assert_eq!(set.matched_indices(&haystack), vec![0, 1]);
    }

    #[test]
    fn backtrack_limit_surfaces_as_scan_error() {
        // The lookahead keeps this out of the delegation fast path, and
        // the ambiguous repetition never reaches a `c`, so the
        // backtracker blows its step budget instead of finishing.
        let haystack = Haystack::new([&b"a".repeat(60)[..], b"b"].concat());
        let compiled = EngineId::Fancy.compile("(a|a)+(?=c)", true).unwrap();
        let err = compiled.scan(&haystack).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Engine {
                engine: EngineId::Fancy,
                ..
            }
        ));
    }
}
