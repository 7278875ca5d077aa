// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cyclic navigation: find the Nth match of a pattern relative to a caret, wrapping
//! around the ends of the document.
//!
//! Instead of looping over the document once per jump, all matches are collected in one
//! scan, ordered by where they sit relative to the caret (see [`MatchBuckets`]), and
//! then the repeat count is reduced modulo the number of matches to pick one.

use std::fmt::{Debug, Formatter};

use super::{DEBUG_JUMP_NAVIGATOR, Direction, MatchBuckets, PatternMatch};
use crate::{ByteIndex, Position, SearchPattern, TextDocument, collect_until_scan_error};

/// Return `false` to skip a match.
pub type MatchFilter<'a> = &'a dyn Fn(&PatternMatch) -> bool;

/// All the inputs to [`navigate_offset`]. Build it w/ [`NavigationRequest::new`] and
/// override the defaults (`repeat` 1, [`Direction::Next`], no filter) by chaining.
///
/// ```
/// use r3bl_jump::{Direction, NavigationRequest, SearchPattern, byte_index, navigate_offset};
///
/// let pattern = SearchPattern::try_new("ab").unwrap();
/// let request = NavigationRequest::new("ab ab ab", &pattern, byte_index(0))
///     .repeat(2)
///     .direction(Direction::Previous);
/// assert_eq!(navigate_offset(&request), byte_index(3));
/// ```
#[derive(Clone, Copy)]
pub struct NavigationRequest<'a> {
    pub text: &'a str,
    pub pattern: &'a SearchPattern,
    pub cursor: ByteIndex,
    pub repeat: usize,
    pub direction: Direction,
    pub filter: Option<MatchFilter<'a>>,
}

impl<'a> NavigationRequest<'a> {
    #[must_use]
    pub fn new(text: &'a str, pattern: &'a SearchPattern, cursor: ByteIndex) -> Self {
        Self {
            text,
            pattern,
            cursor,
            repeat: 1,
            direction: Direction::Next,
            filter: None,
        }
    }

    #[must_use]
    pub fn repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: MatchFilter<'a>) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl Debug for NavigationRequest<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationRequest")
            .field("text_len", &self.text.len())
            .field("pattern", &self.pattern.as_str())
            .field("cursor", &self.cursor)
            .field("repeat", &self.repeat)
            .field("direction", &self.direction)
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

/// Reduce `repeat` to a 1 based index into `match_count` ordered matches.
/// - `repeat` of 0 behaves as 1.
/// - An exact multiple of `match_count` picks the last match, not the first.
///
/// `match_count` must not be 0.
#[must_use]
pub fn effective_repeat(repeat: usize, match_count: usize) -> usize {
    debug_assert!(match_count > 0, "effective_repeat needs at least one match");
    let repeat = repeat.max(1);
    match repeat % match_count {
        0 => match_count,
        it => it,
    }
}

/// Every match of `pattern` in `text` that passes `filter`, in document order. The
/// pattern always scans for all matches here, even if it was built to stop at the
/// first one.
///
/// If the regex engine fails part way (eg: it hits its backtrack limit) this logs a
/// warning and keeps the matches found before the failure.
#[must_use]
pub fn collect_matches(
    text: &str,
    pattern: &SearchPattern,
    filter: Option<MatchFilter<'_>>,
) -> Vec<PatternMatch> {
    let global = pattern.to_global();
    let matches = collect_until_scan_error(global.scan(text));

    match filter {
        Some(filter) => matches.into_iter().filter(filter).collect(),
        None => matches,
    }
}

/// Returns the start of the `request.repeat`th match in `request.direction`, or
/// `request.cursor` unchanged if nothing matches.
#[must_use]
pub fn navigate_offset(request: &NavigationRequest<'_>) -> ByteIndex {
    let matches = collect_matches(request.text, request.pattern, request.filter);
    debug_assert!(
        matches.iter().all(|it| !it.is_empty()),
        "Pattern {} produced a zero length match",
        request.pattern
    );

    let ordered =
        MatchBuckets::partition(matches, request.cursor).into_ordered(request.direction);
    if ordered.is_empty() {
        return request.cursor;
    }

    let index = effective_repeat(request.repeat, ordered.len()) - 1;
    let target = ordered.get(index).map_or(request.cursor, |it| it.start);

    DEBUG_JUMP_NAVIGATOR.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "navigate",
            direction = %request.direction,
            match_count = ordered.len(),
            cursor = request.cursor.as_usize(),
            target = target.as_usize(),
        );
    });

    target
}

/// [`navigate_offset`] for a caret [`Position`], using `document` to convert to and from
/// offsets.
#[must_use]
pub fn navigate(
    document: &impl TextDocument,
    cursor: Position,
    pattern: &SearchPattern,
    repeat: usize,
    direction: Direction,
    filter: Option<MatchFilter<'_>>,
) -> Position {
    let text = document.get_document_text();
    let mut request = NavigationRequest::new(text, pattern, document.position_to_offset(cursor))
        .repeat(repeat)
        .direction(direction);
    request.filter = filter;
    document.offset_to_position(navigate_offset(&request))
}
