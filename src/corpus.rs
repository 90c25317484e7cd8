//! Corpus loading and haystack preparation.
//!
//! A haystack is read once from a fixture file, optionally restricted to a
//! 0-based half-open line range, and never mutated afterwards. Corpora are
//! raw bytes: some fixtures deliberately contain invalid UTF-8, and some
//! engines only accept `&str`, so a sanitized variant with the invalid
//! sequences dropped is derived for those engines.

use std::{fs, path::PathBuf, str};

use bon::Builder;

use crate::{
    engine::EngineId,
    error::{CorpusError, ScanError},
};

/// Where a haystack comes from: a fixture file, optionally sliced to the
/// half-open line range `[line_start, line_end)`. An absent bound means
/// unbounded on that side.
#[derive(Debug, Clone, Builder)]
pub struct HaystackSpec {
    #[builder(into)]
    pub path: PathBuf,
    pub line_start: Option<usize>,
    pub line_end: Option<usize>,
}

impl HaystackSpec {
    /// Reads the fixture. A missing or unreadable file is fatal for the
    /// example that references it; corpora are static, so there is no
    /// retry.
    pub fn load(&self) -> Result<Haystack, CorpusError> {
        let bytes = fs::read(&self.path).map_err(|source| CorpusError {
            path: self.path.clone(),
            source,
        })?;
        let bytes = if self.line_start.is_some() || self.line_end.is_some() {
            slice_lines(&bytes, self.line_start, self.line_end)
        } else {
            bytes
        };
        Ok(Haystack::new(bytes))
    }
}

/// Splits on `\n`, keeps `[start, end)` and rejoins. Out-of-range bounds
/// clamp; a bad range is a fixture bug that surfaces as a validation
/// mismatch, not a panic.
fn slice_lines(bytes: &[u8], start: Option<usize>, end: Option<usize>) -> Vec<u8> {
    let lines: Vec<&[u8]> = bytes.split(|&b| b == b'\n').collect();
    let start = start.unwrap_or(0).min(lines.len());
    let end = end.unwrap_or(lines.len()).clamp(start, lines.len());
    lines[start..end].join(&b'\n')
}

/// The prepared text body for one example.
///
/// Lenient, byte-oriented engines scan [`Haystack::bytes`]; engines that
/// require strictly valid UTF-8 get [`Haystack::utf8`], which is the bytes
/// themselves when they are valid and the sanitized variant otherwise.
#[derive(Debug, Clone)]
pub struct Haystack {
    bytes: Vec<u8>,
    /// `None` when `bytes` is itself valid UTF-8.
    sanitized: Option<String>,
}

impl Haystack {
    pub fn new(bytes: Vec<u8>) -> Self {
        let sanitized = match str::from_utf8(&bytes) {
            Ok(_) => None,
            Err(_) => Some(sanitize_utf8(&bytes)),
        };
        Haystack { bytes, sanitized }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_valid_utf8(&self) -> bool {
        self.sanitized.is_none()
    }

    /// The `&str` view: the raw bytes when valid, the sanitized variant
    /// with invalid sequences dropped otherwise.
    pub fn utf8(&self) -> &str {
        match &self.sanitized {
            Some(sanitized) => sanitized,
            // Validity checked in `new`.
            None => unsafe { str::from_utf8_unchecked(&self.bytes) },
        }
    }

    /// Strict view for callers that refuse sanitized input.
    pub fn strict_utf8(&self, engine: EngineId) -> Result<&str, ScanError> {
        if self.sanitized.is_some() {
            return Err(ScanError::InvalidHaystack { engine });
        }
        Ok(self.utf8())
    }
}

/// Drops invalid UTF-8 sequences, keeping the valid remainder.
fn sanitize_utf8(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match str::from_utf8(bytes) {
            Ok(tail) => {
                out.push_str(tail);
                return out;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                // `valid_up_to` guarantees validity of the head.
                out.push_str(unsafe { str::from_utf8_unchecked(valid) });
                bytes = match err.error_len() {
                    Some(len) => &rest[len..],
                    None => &[],
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_range_is_half_open() {
        let text = b"zero\none\ntwo\nthree\n";
        assert_eq!(slice_lines(text, Some(1), Some(3)), b"one\ntwo");
        assert_eq!(slice_lines(text, Some(1), None), b"one\ntwo\nthree\n");
        assert_eq!(slice_lines(text, None, Some(2)), b"zero\none");
    }

    #[test]
    fn line_range_clamps_out_of_bounds() {
        let text = b"zero\none";
        assert_eq!(slice_lines(text, Some(5), Some(9)), b"");
        assert_eq!(slice_lines(text, Some(1), Some(9)), b"one");
    }

    #[test]
    fn sanitize_drops_invalid_sequences() {
        let hay = Haystack::new(b"\xfc\xa1\xa1\xa1\xa1\xa1abc".to_vec());
        assert!(!hay.is_valid_utf8());
        assert_eq!(hay.utf8(), "abc");
        assert!(hay.strict_utf8(EngineId::Lite).is_err());
    }

    #[test]
    fn valid_bytes_pass_through() {
        let hay = Haystack::new("Fräulein".as_bytes().to_vec());
        assert!(hay.is_valid_utf8());
        assert_eq!(hay.utf8(), "Fräulein");
        assert!(hay.strict_utf8(EngineId::Fancy).is_ok());
    }

    #[test]
    fn missing_corpus_is_fatal() {
        let spec = HaystackSpec::builder().path("no/such/fixture.txt").build();
        let err = spec.load().unwrap_err();
        assert!(err.to_string().contains("no/such/fixture.txt"));
    }
}
