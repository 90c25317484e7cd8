//! regex-lite: the deliberately small dialect. ASCII-only classes,
//! `&str` haystacks only. Match text is reported through capture
//! group 1, so the pattern compiler wraps bare shared patterns.

use regex_lite::Regex;

use crate::scan::MatchResult;

pub(super) fn compile(pattern: &str) -> Result<Regex, String> {
    Regex::new(pattern).map_err(|err| err.to_string())
}

pub(super) fn scan(re: &Regex, haystack: &str) -> MatchResult {
    let mut result = MatchResult::default();
    for caps in re.captures_iter(haystack) {
        // Group 1 is the reporting group; a pattern without one yields
        // match positions but no text, which is why the compiler wraps.
        if let Some(m) = caps.get(1) {
            result.push(m.as_str().as_bytes());
        }
    }
    result
}
