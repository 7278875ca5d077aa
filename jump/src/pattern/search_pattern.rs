// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::PatternError;
use crate::{CommonResult, PatternMatch, byte_index};

/// Whether a scan stops at the first match, or reports every non overlapping match from
/// left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    FirstMatchOnly,
    AllMatches,
}

/// A compiled regex plus the [`ScanMode`] to scan with.
///
/// Patterns are backed by [`fancy_regex`], since the link grammar needs lookbehind, and
/// user supplied patterns may use backreferences. Patterns made by [`crate::CompositePatternBuilder`]
/// also remember the names of their alternatives, so a match can be classified w/
/// [`SearchPattern::find_alternative_matches`].
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: fancy_regex::Regex,
    scan_mode: ScanMode,
    alternative_names: Vec<String>,
}

impl SearchPattern {
    /// Compile `pattern_source`. The result only finds the first match until it is
    /// converted w/ [`SearchPattern::into_global`] or [`SearchPattern::with_scan_mode`].
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError::Compile`] report if the regex is invalid.
    pub fn try_new(pattern_source: &str) -> CommonResult<Self> {
        Ok(Self::try_compile(pattern_source, ScanMode::FirstMatchOnly, vec![])?)
    }

    pub(crate) fn try_compile(
        pattern_source: &str,
        scan_mode: ScanMode,
        alternative_names: Vec<String>,
    ) -> Result<Self, PatternError> {
        let regex = fancy_regex::Regex::new(pattern_source).map_err(|cause| {
            PatternError::Compile {
                pattern_source: pattern_source.to_string(),
                cause: Box::new(cause),
            }
        })?;
        Ok(Self {
            regex,
            scan_mode,
            alternative_names,
        })
    }

    #[must_use]
    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    #[must_use]
    pub fn scan_mode(&self) -> ScanMode { self.scan_mode }

    #[must_use]
    pub fn as_str(&self) -> &str { self.regex.as_str() }

    #[must_use]
    pub fn alternative_names(&self) -> &[String] { &self.alternative_names }

    /// Normalize to [`ScanMode::AllMatches`], whatever the current mode is.
    #[must_use]
    pub fn into_global(self) -> Self { self.with_scan_mode(ScanMode::AllMatches) }

    #[must_use]
    pub fn to_global(&self) -> Self { self.clone().into_global() }

    /// Scan `text` from the start, honoring the [`ScanMode`].
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Scan`] if the regex engine gives up (eg: it hits its
    /// backtrack limit). Use [`SearchPattern::scan`] to keep the matches found before
    /// that happens.
    pub fn find_matches(&self, text: &str) -> Result<Vec<PatternMatch>, PatternError> {
        self.scan(text).collect()
    }

    /// Lazily scan `text` from the start, honoring the [`ScanMode`]. If the regex engine
    /// gives up part way, the [`PatternError::Scan`] is the last item.
    pub fn scan<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = Result<PatternMatch, PatternError>> + 'a {
        stop_after_first_error(self.regex.find_iter(text))
            .map(move |result| {
                result
                    .map(|it| to_pattern_match(&it))
                    .map_err(|cause| self.scan_error(cause))
            })
            .take(self.scan_limit())
    }

    /// Like [`SearchPattern::find_matches`], but each match is paired w/ the name of
    /// the alternative that produced it. Matches that no named alternative produced
    /// (only possible for patterns that weren't built from alternatives) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Scan`] if the regex engine gives up.
    pub fn find_alternative_matches<'a>(
        &'a self,
        text: &'a str,
    ) -> Result<Vec<(&'a str, PatternMatch)>, PatternError> {
        self.scan_alternatives(text).collect()
    }

    /// Lazy version of [`SearchPattern::find_alternative_matches`]. If the regex engine
    /// gives up part way, the [`PatternError::Scan`] is the last item.
    pub fn scan_alternatives<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = Result<(&'a str, PatternMatch), PatternError>> + 'a {
        stop_after_first_error(self.regex.captures_iter(text))
            .filter_map(move |result| match result {
                Ok(captures) => {
                    let whole = captures.get(0)?;
                    let name = self.matched_alternative(&captures)?;
                    Some(Ok((name, to_pattern_match(&whole))))
                }
                Err(cause) => Some(Err(self.scan_error(cause))),
            })
            .take(self.scan_limit())
    }

    /// The name of the first alternative (in build order) that participated in
    /// `captures`.
    #[must_use]
    pub fn matched_alternative(&self, captures: &fancy_regex::Captures<'_>) -> Option<&str> {
        self.alternative_names
            .iter()
            .find(|name| captures.name(name).is_some())
            .map(String::as_str)
    }

    fn scan_limit(&self) -> usize {
        match self.scan_mode {
            ScanMode::FirstMatchOnly => 1,
            ScanMode::AllMatches => usize::MAX,
        }
    }

    fn scan_error(&self, cause: fancy_regex::Error) -> PatternError {
        PatternError::Scan {
            pattern_source: self.as_str().to_string(),
            cause: Box::new(cause),
        }
    }
}

impl Display for SearchPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

/// Keep every item up to the first scan error. The error is logged w/
/// [`tracing::warn!`], and whatever was found before it is returned.
pub fn collect_until_scan_error<T>(
    results: impl IntoIterator<Item = Result<T, PatternError>>,
) -> Vec<T> {
    let mut acc = vec![];
    for result in results {
        match result {
            Ok(it) => acc.push(it),
            Err(error) => {
                tracing::warn!(
                    message = "Pattern scan stopped early, keeping what was found before it",
                    found_count = acc.len(),
                    error = ?error,
                );
                break;
            }
        }
    }
    acc
}

/// Ends `results` right after its first error, since the engine can't resume past it.
fn stop_after_first_error<T, E>(
    results: impl Iterator<Item = Result<T, E>>,
) -> impl Iterator<Item = Result<T, E>> {
    let mut failed = false;
    results.map_while(move |result| {
        if failed {
            return None;
        }
        failed = result.is_err();
        Some(result)
    })
}

fn to_pattern_match(it: &fancy_regex::Match<'_>) -> PatternMatch {
    PatternMatch::new(byte_index(it.start()), it.as_str())
}
