//! The built-in example suite: fixtures under `data/`, expectations
//! computed by hand against them.
//!
//! Each example exercises a different axis of disagreement risk: literal
//! scans where everything must agree byte for byte, `\w`/`\b` cases where
//! the ASCII-only and Unicode-only engines diverge by construction,
//! pathological backtracking input, pattern lists with set resolution,
//! and a corpus that is not valid UTF-8.

use std::path::PathBuf;

use crate::{
    corpus::HaystackSpec,
    engine::EngineId,
    example::Example,
    pattern::PatternSpec,
    validate::{Expected, Subject, Validation},
};

fn data(rel: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")).join(rel)
}

fn corpus(rel: &str) -> HaystackSpec {
    HaystackSpec::builder().path(data(rel)).build()
}

fn inline(meta: &str, lite: &str, fancy: &str) -> PatternSpec {
    PatternSpec::Inline(vec![
        (EngineId::Meta, meta.to_owned()),
        (EngineId::Lite, lite.to_owned()),
        (EngineId::Fancy, fancy.to_owned()),
    ])
}

const LITE: Subject = Subject::Engine(EngineId::Lite);
const FANCY: Subject = Subject::Engine(EngineId::Fancy);

/// Every built-in example, ready to prepare, validate and benchmark.
pub fn examples() -> Vec<Example> {
    vec![
        Example::builder()
            .name("literal/sherlock")
            .haystack(corpus("sherlock.txt"))
            .patterns(inline(
                "Sherlock Holmes",
                "(Sherlock Holmes)",
                "Sherlock Holmes",
            ))
            .validations(vec![
                Validation::count(Expected::default().all(3)),
                Validation::count_spans(Expected::default().all(45)),
            ])
            .build(),
        Example::builder()
            .name("literal/sherlock-casei")
            .haystack(corpus("sherlock.txt"))
            .patterns(inline(
                "(?i)Sherlock Holmes",
                "(?i:(Sherlock Holmes))",
                "(?i)Sherlock Holmes",
            ))
            .validations(vec![
                Validation::count(Expected::default().all(5)),
                Validation::count_spans(Expected::default().all(75)),
            ])
            .build(),
        Example::builder()
            .name("literal-alt/characters")
            .haystack(corpus("sherlock.txt"))
            .patterns(inline(
                "Sherlock Holmes|Watson|Baker Street",
                "(Sherlock Holmes|Watson|Baker Street)",
                "Sherlock Holmes|Watson|Baker Street",
            ))
            .validations(vec![
                Validation::count(Expected::default().all(8)),
                Validation::count_spans(Expected::default().all(93)),
            ])
            .build(),
        // lite's \w is ASCII regardless of mode, so it splits "Fräulein"
        // at the non-ASCII letter.
        Example::builder()
            .name("words/unicode")
            .haystack(corpus("words.txt"))
            .patterns(PatternSpec::File(data("patterns/word.txt")))
            .validations(vec![
                Validation::count(Expected::default().all(2).except(LITE, 3)),
                Validation::count_spans(Expected::default().all(12).except(LITE, 10)),
            ])
            .build(),
        // With unicode off the roles flip: fancy has no ASCII mode and
        // keeps matching the whole word.
        Example::builder()
            .name("words/no-unicode")
            .haystack(corpus("words.txt"))
            .patterns(PatternSpec::File(data("patterns/word.txt")))
            .unicode(false)
            .validations(vec![
                Validation::count(Expected::default().all(3).except(FANCY, 2)),
                Validation::count_spans(Expected::default().all(10).except(FANCY, 12)),
            ])
            .build(),
        // Explicit ASCII class, but \b is still Unicode-aware in fancy:
        // "Fr" ends against a word character there, so only "Yes" remains.
        Example::builder()
            .name("words/ascii-boundary")
            .haystack(corpus("words.txt"))
            .patterns(inline(
                r"\b[0-9A-Za-z_]+\b",
                r"(\b[0-9A-Za-z_]+\b)",
                r"\b[0-9A-Za-z_]+\b",
            ))
            .unicode(false)
            .validations(vec![
                Validation::count(Expected::default().all(3).except(FANCY, 1)),
                Validation::count_spans(Expected::default().all(10).except(FANCY, 3)),
            ])
            .build(),
        Example::builder()
            .name("bounded-repeat/letters")
            .haystack(corpus("repeat.txt"))
            .patterns(inline(
                "[A-Za-z]{8,13}",
                "([A-Za-z]{8,13})",
                "[A-Za-z]{8,13}",
            ))
            .validations(vec![
                Validation::count(Expected::default().all(6)),
                Validation::count_spans(Expected::default().all(62)),
            ])
            .build(),
        Example::builder()
            .name("date/ascii")
            .haystack(corpus("dates.txt"))
            .patterns(PatternSpec::File(data("patterns/date.txt")))
            .unicode(false)
            .validations(vec![
                Validation::count(Expected::default().all(4)),
                Validation::count_spans(Expected::default().all(40)),
            ])
            .build(),
        // Quadratic for the backtracker; the interesting number is the
        // throughput gap, so the haystack is sliced to the dense middle.
        Example::builder()
            .name("redos/equations")
            .haystack(
                HaystackSpec::builder()
                    .path(data("equations.txt"))
                    .line_start(2)
                    .line_end(8)
                    .build(),
            )
            .patterns(PatternSpec::File(data("patterns/equation.txt")))
            .validations(vec![
                Validation::count(Expected::default().all(5)),
                Validation::count_spans(Expected::default().all(30)),
            ])
            .build(),
        // Count means "patterns that matched" here; the zebra pattern
        // matching nothing is the point.
        Example::builder()
            .name("set/keywords")
            .haystack(corpus("sherlock.txt"))
            .patterns(PatternSpec::ListFile(data("patterns/keywords.txt")))
            .validations(vec![
                Validation::count(Expected::default().all(3)),
                Validation::count_spans(Expected::default().all(72)),
            ])
            .build(),
        // The byte engine skips the invalid prefix in place; the str
        // engines scan the sanitized variant. Same matches either way.
        Example::builder()
            .name("limitations/invalid-utf8")
            .haystack(corpus("invalid.txt"))
            .patterns(inline(".+", "(.+)", ".+"))
            .validations(vec![
                Validation::count(Expected::default().all(1)),
                Validation::count_spans(Expected::default().all(3)),
            ])
            .build(),
    ]
}
