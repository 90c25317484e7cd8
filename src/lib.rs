//! Differential benchmark harness for regex engines.
//!
//! The same logical pattern is compiled for three engines with different
//! trade-offs, every engine scans the same haystack, and the results are
//! validated against hand-computed expectations and against each other
//! before any throughput is measured. A benchmark whose engines silently
//! disagree on what "a match" is measures nothing.
//!
//! The roster:
//!
//! - `meta`: [`regex_automata`]'s meta engine. Byte-oriented, lenient
//!   about invalid UTF-8, a real Unicode toggle, multi-pattern sets.
//! - `lite`: [`regex_lite`]. Small and `str`-only; classes are ASCII no
//!   matter what, and match text is reported through capture group 1.
//! - `fancy`: [`fancy_regex`]. Backtracking, so lookaround works and
//!   matching itself can fail; `str`-only and always Unicode-aware.
//!
//! Where a dialect genuinely diverges (ASCII `\w` against a non-ASCII
//! word), the example declares a per-engine expected value and the
//! diverging engine is excluded from the cross-engine agreement check
//! instead of being papered over.
//!
//! ```
//! use rexdiff::{
//!     corpus::HaystackSpec,
//!     example::Example,
//!     pattern::PatternSpec,
//!     validate::{Expected, Validation},
//!     EngineId,
//! };
//!
//! let example = Example::builder()
//!     .name("literal/sherlock")
//!     .haystack(
//!         HaystackSpec::builder()
//!             .path(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sherlock.txt"))
//!             .build(),
//!     )
//!     .patterns(PatternSpec::Inline(vec![
//!         (EngineId::Meta, "Sherlock Holmes".into()),
//!         (EngineId::Lite, "(Sherlock Holmes)".into()),
//!         (EngineId::Fancy, "Sherlock Holmes".into()),
//!     ]))
//!     .validations(vec![
//!         Validation::count(Expected::default().all(3)),
//!         Validation::count_spans(Expected::default().all(45)),
//!     ])
//!     .build();
//!
//! example.prepare()?.validate()?;
//! # Ok::<(), rexdiff::Error>(())
//! ```
//!
//! The built-in suite in [`suite`] is what `benches/scan.rs` runs.

pub mod corpus;
pub mod engine;
pub mod error;
pub mod example;
pub mod pattern;
pub mod scan;
pub mod suite;
pub mod validate;

pub use engine::EngineId;
pub use error::Error;
pub use example::Example;
