//! regex-automata's meta engine: byte-oriented, lenient about invalid
//! UTF-8 in the haystack, with a real unicode toggle and multi-pattern
//! support via `which_overlapping_matches`.

use regex_automata::{meta, util::syntax, Input, MatchKind, PatternSet};

use crate::scan::MatchResult;

fn builder(unicode: bool) -> meta::Builder {
    let mut builder = meta::Regex::builder();
    builder
        // utf8(false) at the syntax level so non-unicode classes may match
        // arbitrary bytes; raw corpora are not guaranteed valid UTF-8.
        .syntax(syntax::Config::new().unicode(unicode).utf8(false))
        // Empty matches in a raw corpus may not fall on codepoint
        // boundaries.
        .configure(meta::Config::new().utf8_empty(false));
    builder
}

pub(super) fn compile(pattern: &str, unicode: bool) -> Result<meta::Regex, String> {
    builder(unicode).build(pattern).map_err(|err| err.to_string())
}

pub(super) fn compile_set(patterns: &[String], unicode: bool) -> Result<meta::Regex, String> {
    // Leftmost-first semantics stop at the first winning pattern;
    // `which_overlapping_matches` only visits every member under
    // `MatchKind::All`.
    builder(unicode)
        .configure(meta::Config::new().match_kind(MatchKind::All))
        .build_many(patterns)
        .map_err(|err| err.to_string())
}

pub(super) fn scan(re: &meta::Regex, haystack: &[u8]) -> MatchResult {
    let mut result = MatchResult::default();
    for m in re.find_iter(haystack) {
        result.push(&haystack[m.range()]);
    }
    result
}

/// Indices of member patterns that match anywhere, in pattern order.
pub(super) fn matched_indices(re: &meta::Regex, haystack: &[u8]) -> Vec<usize> {
    let mut set = PatternSet::new(re.pattern_len());
    re.which_overlapping_matches(&Input::new(haystack), &mut set);
    set.iter().map(|pid| pid.as_usize()).collect()
}
