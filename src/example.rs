//! An example binds a haystack to a pattern source, a unicode mode and
//! the expectations every engine must satisfy before it is benchmarked.

use bon::Builder;

use crate::{
    corpus::{Haystack, HaystackSpec},
    engine::EngineId,
    error::{CorpusError, Error, PatternCompileError},
    pattern::{self, Compiled, PatternSpec},
    scan::{self, ScanOutcome},
    validate::{self, Subject, Validation},
};

/// One benchmark case: what to scan, what to scan it with, and what every
/// engine is expected to produce.
#[derive(Debug, Builder)]
pub struct Example {
    #[builder(into)]
    pub name: String,
    pub haystack: HaystackSpec,
    pub patterns: PatternSpec,
    /// Only engines with a real toggle honor this; for the rest it is
    /// advisory and their fixed behavior shows up as expectation
    /// overrides instead.
    #[builder(default = true)]
    pub unicode: bool,
    pub validations: Vec<Validation>,
    /// Subjects excluded from the cross-engine agreement check even
    /// though their scalars match, e.g. when two engines report the same
    /// totals over different substrings.
    #[builder(default)]
    pub divergent: Vec<Subject>,
}

impl Example {
    /// Loads the haystack and compiles the patterns for every engine.
    /// Compile failures are carried per engine; fixture I/O failures are
    /// fatal.
    pub fn prepare(&self) -> Result<Prepared<'_>, CorpusError> {
        let haystack = self.haystack.load()?;
        let engines = pattern::compile(&self.patterns, self.unicode)?;
        Ok(Prepared {
            example: self,
            haystack,
            engines,
        })
    }
}

/// A loaded and compiled example, ready to scan, validate and benchmark.
#[derive(Debug)]
pub struct Prepared<'e> {
    example: &'e Example,
    haystack: Haystack,
    engines: Vec<(EngineId, Result<Compiled, PatternCompileError>)>,
}

impl Prepared<'_> {
    pub fn name(&self) -> &str {
        &self.example.name
    }

    pub fn haystack(&self) -> &Haystack {
        &self.haystack
    }

    /// Engines whose patterns compiled, in roster order.
    pub fn engines(&self) -> impl Iterator<Item = (EngineId, &Compiled)> {
        self.engines
            .iter()
            .filter_map(|(engine, result)| result.as_ref().ok().map(|c| (*engine, c)))
    }

    pub fn compile_failures(&self) -> impl Iterator<Item = &PatternCompileError> {
        self.engines
            .iter()
            .filter_map(|(_, result)| result.as_ref().err())
    }

    /// Scans every subject once. The first compile failure surfaces here:
    /// an example cannot be validated, let alone benchmarked, with an
    /// engine missing.
    pub fn outcomes(&self) -> Result<Vec<(Subject, ScanOutcome)>, Error> {
        let mut outcomes = Vec::new();
        for (engine, compiled) in &self.engines {
            let compiled = compiled.as_ref().map_err(|err| err.clone())?;
            match compiled {
                Compiled::One(pattern) => {
                    let result = scan::scan(&self.haystack, pattern)?;
                    outcomes.push((Subject::Engine(*engine), ScanOutcome::Single(result)));
                }
                Compiled::Many { patterns, set } => {
                    let groups = scan::scan_groups(&self.haystack, patterns)?;
                    outcomes.push((Subject::Engine(*engine), ScanOutcome::Grouped(groups)));
                    if let Some(set) = set {
                        let resolved = scan::resolve_set(&self.haystack, set, patterns)?;
                        outcomes.push((Subject::Set(*engine), ScanOutcome::Grouped(resolved)));
                    }
                }
            }
        }
        Ok(outcomes)
    }

    /// Runs the declared rules and the cross-engine agreement check over
    /// fresh outcomes.
    pub fn validate(&self) -> Result<(), Error> {
        let outcomes = self.outcomes()?;
        validate::validate(
            &self.example.name,
            &self.example.validations,
            &self.example.divergent,
            &outcomes,
        )?;
        Ok(())
    }
}
