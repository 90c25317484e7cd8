//! fancy-regex: the backtracking engine. Matching itself is fallible (the
//! backtrack limit), so scanning returns a `Result` here and nowhere
//! else. str-only; classes are Unicode-aware with no off switch.

use fancy_regex::Regex;

use crate::scan::MatchResult;

pub(super) fn compile(pattern: &str) -> Result<Regex, String> {
    Regex::new(pattern).map_err(|err| err.to_string())
}

pub(super) fn scan(re: &Regex, haystack: &str) -> Result<MatchResult, fancy_regex::Error> {
    let mut result = MatchResult::default();
    for m in re.find_iter(haystack) {
        result.push(m?.as_str().as_bytes());
    }
    Ok(result)
}
