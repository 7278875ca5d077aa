// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{PatternError, ScanMode, SearchPattern};
use crate::CommonResult;

/// Builds one [`SearchPattern`] out of an ordered list of named alternatives. Each
/// alternative becomes a named capture group, and the groups are joined w/ `|` in the
/// order they were added. The regex engine tries alternatives left to right at each
/// position, so the order of the [`CompositePatternBuilder::alternative`] calls is the
/// precedence order.
///
/// Since each alternative is wrapped in a group, numbered backreferences inside an
/// alternative's source are shifted. Use named groups inside alternatives instead.
///
/// ```
/// use r3bl_jump::{CompositePatternBuilder, ScanMode};
///
/// let pattern = CompositePatternBuilder::default()
///     .alternative("number", r"\d+")
///     .alternative("word", r"[a-z]+")
///     .build()
///     .unwrap();
/// assert_eq!(pattern.as_str(), r"(?P<number>\d+)|(?P<word>[a-z]+)");
/// assert_eq!(pattern.scan_mode(), ScanMode::AllMatches);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompositePatternBuilder {
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone)]
struct Alternative {
    name: String,
    pattern_source: String,
}

impl CompositePatternBuilder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn alternative(
        mut self,
        name: impl Into<String>,
        pattern_source: impl Into<String>,
    ) -> Self {
        self.alternatives.push(Alternative {
            name: name.into(),
            pattern_source: pattern_source.into(),
        });
        self
    }

    pub fn alternative_names(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(|it| it.name.as_str())
    }

    /// Compile the alternatives into a pattern that scans for all matches.
    ///
    /// # Errors
    ///
    /// - [`PatternError::EmptyComposite`] when no alternatives were added.
    /// - [`PatternError::DuplicateAlternative`] when a name is used twice.
    /// - [`PatternError::Compile`] when the combined regex is invalid.
    pub fn build(self) -> CommonResult<SearchPattern> { Ok(self.try_build()?) }

    pub(crate) fn try_build(self) -> Result<SearchPattern, PatternError> {
        if self.alternatives.is_empty() {
            return Err(PatternError::EmptyComposite);
        }

        let mut names: Vec<String> = Vec::with_capacity(self.alternatives.len());
        let mut pieces: Vec<String> = Vec::with_capacity(self.alternatives.len());
        for Alternative {
            name,
            pattern_source,
        } in self.alternatives
        {
            if names.contains(&name) {
                return Err(PatternError::DuplicateAlternative { name });
            }
            pieces.push(format!("(?P<{name}>{pattern_source})"));
            names.push(name);
        }

        SearchPattern::try_compile(&pieces.join("|"), ScanMode::AllMatches, names)
    }
}
