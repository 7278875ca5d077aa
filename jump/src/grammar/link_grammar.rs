// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Recognizes 3 kinds of links in Markdown text, w/ one composite pattern:
//!
//! | kind                       | example                      |
//! | -------------------------- | ---------------------------- |
//! | [`LinkKind::WikiLink`]     | `[[Some note]]`              |
//! | [`LinkKind::MarkdownLink`] | `[Some text](https://x.com)` |
//! | [`LinkKind::StandaloneUrl`]| `https://x.com`              |
//!
//! The alternatives are tried in that order at each position, and the leftmost match
//! wins. There is no custom conflict resolution, so `[[2]](https://x.com)` is a
//! wiki-link `[[2]]` followed by a standalone URL `https://x.com)`. None of the
//! alternatives can match across a line break.

use std::sync::LazyLock;

use strum_macros::{Display, EnumIter, EnumString};

use super::md_grammar_constants::{BACK_SLASH_CHAR, ESCAPED_LEFT_BRACKET,
                                  ESCAPED_RIGHT_BRACKET, LEFT_BRACKET, LEFT_BRACKET_CHAR,
                                  MARKDOWN_LINK_ALTERNATIVE, MARKDOWN_LINK_MIDDLE,
                                  MARKDOWN_LINK_SOURCE, MAX_LEADING_BRACKETS_TO_SKIP,
                                  RIGHT_BRACKET, RIGHT_BRACKET_CHAR, RIGHT_PARENTHESIS,
                                  STANDALONE_URL_ALTERNATIVE, STANDALONE_URL_SOURCE,
                                  WIKI_LINK_ALIAS_SEPARATOR, WIKI_LINK_ALTERNATIVE,
                                  WIKI_LINK_END, WIKI_LINK_SOURCE, WIKI_LINK_START};
use crate::{ByteIndex, CompositePatternBuilder, PatternError, SearchPattern, byte_index,
            collect_until_scan_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum LinkKind {
    WikiLink,
    MarkdownLink,
    StandaloneUrl,
}

impl LinkKind {
    /// The name of the capture group for this kind in [`link_pattern`].
    #[must_use]
    pub fn alternative_name(self) -> &'static str {
        match self {
            LinkKind::WikiLink => WIKI_LINK_ALTERNATIVE,
            LinkKind::MarkdownLink => MARKDOWN_LINK_ALTERNATIVE,
            LinkKind::StandaloneUrl => STANDALONE_URL_ALTERNATIVE,
        }
    }

    #[must_use]
    pub fn pattern_source(self) -> &'static str {
        match self {
            LinkKind::WikiLink => WIKI_LINK_SOURCE,
            LinkKind::MarkdownLink => MARKDOWN_LINK_SOURCE,
            LinkKind::StandaloneUrl => STANDALONE_URL_SOURCE,
        }
    }

    #[must_use]
    pub fn from_alternative_name(name: &str) -> Option<Self> {
        match name {
            WIKI_LINK_ALTERNATIVE => Some(LinkKind::WikiLink),
            MARKDOWN_LINK_ALTERNATIVE => Some(LinkKind::MarkdownLink),
            STANDALONE_URL_ALTERNATIVE => Some(LinkKind::StandaloneUrl),
            _ => None,
        }
    }
}

static LINK_PATTERN: LazyLock<Result<SearchPattern, PatternError>> = LazyLock::new(|| {
    CompositePatternBuilder::new()
        .alternative(WIKI_LINK_ALTERNATIVE, WIKI_LINK_SOURCE)
        .alternative(MARKDOWN_LINK_ALTERNATIVE, MARKDOWN_LINK_SOURCE)
        .alternative(STANDALONE_URL_ALTERNATIVE, STANDALONE_URL_SOURCE)
        .try_build()
});

/// The composite link pattern (wiki-link, then markdown link, then standalone URL),
/// compiled once per process.
///
/// # Errors
///
/// Only if the built in sources fail to compile, which the tests rule out.
pub fn link_pattern() -> Result<&'static SearchPattern, &'static PatternError> {
    LINK_PATTERN.as_ref()
}

/// One recognized link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkSpan {
    pub kind: LinkKind,
    pub start: ByteIndex,
    pub text: String,
}

impl LinkSpan {
    #[must_use]
    pub fn end(&self) -> ByteIndex { byte_index(self.start.as_usize() + self.text.len()) }

    #[must_use]
    pub fn contains(&self, offset: ByteIndex) -> bool {
        self.start <= offset && offset < self.end()
    }

    /// Where the link points to.
    /// - Wiki-link: the note name, w/out any `|alias`.
    /// - Markdown link: the url between the parentheses.
    /// - Standalone URL: all of it.
    #[must_use]
    pub fn target(&self) -> &str {
        match self.kind {
            LinkKind::WikiLink => {
                let (target, _alias) = split_wiki_link(&self.text);
                target
            }
            LinkKind::MarkdownLink => split_markdown_link(&self.text)
                .map_or(self.text.as_str(), |(_display, target)| target),
            LinkKind::StandaloneUrl => &self.text,
        }
    }

    /// What a reader sees. The alias of a wiki-link (or its target if there is no
    /// alias), the unescaped display text of a markdown link, or the URL itself.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self.kind {
            LinkKind::WikiLink => {
                let (target, alias) = split_wiki_link(&self.text);
                alias.unwrap_or(target).to_string()
            }
            LinkKind::MarkdownLink => split_markdown_link(&self.text)
                .map_or_else(|| self.text.clone(), |(display, _target)| unescape(display)),
            LinkKind::StandaloneUrl => self.text.clone(),
        }
    }
}

/// `[[note|alias]]` -> `("note", Some("alias"))`.
fn split_wiki_link(text: &str) -> (&str, Option<&str>) {
    let inner = text
        .strip_prefix(WIKI_LINK_START)
        .and_then(|it| it.strip_suffix(WIKI_LINK_END))
        .unwrap_or(text);
    match inner.split_once(WIKI_LINK_ALIAS_SEPARATOR) {
        Some((target, alias)) => (target.trim(), Some(alias.trim())),
        None => (inner.trim(), None),
    }
}

/// `[display](target)` -> `("display", "target")`. The first unescaped `]` ends the
/// display text.
fn split_markdown_link(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(LEFT_BRACKET_CHAR)?;
    let mut escaped = false;
    let display_end = rest.char_indices().find_map(|(offset, ch)| match ch {
        _ if escaped => {
            escaped = false;
            None
        }
        BACK_SLASH_CHAR => {
            escaped = true;
            None
        }
        RIGHT_BRACKET_CHAR => Some(offset),
        _ => None,
    })?;
    let (display, tail) = rest.split_at(display_end);
    let target = tail
        .strip_prefix(MARKDOWN_LINK_MIDDLE)?
        .strip_suffix(RIGHT_PARENTHESIS)?;
    Some((display, target))
}

fn unescape(display: &str) -> String {
    display
        .replace(ESCAPED_LEFT_BRACKET, LEFT_BRACKET)
        .replace(ESCAPED_RIGHT_BRACKET, RIGHT_BRACKET)
}

/// Every link in `text`, in document order. This never fails: if the pattern gives up
/// part way through `text`, a warning is logged and the links found before that are
/// returned.
#[must_use]
pub fn find_links(text: &str) -> Vec<LinkSpan> {
    let pattern = match link_pattern() {
        Ok(it) => it,
        Err(error) => {
            tracing::warn!(message = "Failed to compile the link pattern", error = %error);
            return vec![];
        }
    };

    collect_until_scan_error(pattern.scan_alternatives(text))
        .into_iter()
        .filter_map(|(name, it)| {
            Some(LinkSpan {
                kind: LinkKind::from_alternative_name(name)?,
                start: it.start,
                text: it.text,
            })
        })
        .collect()
}

/// The link that the caret is on, if any. When the caret sits on the opening `[` or
/// `[[` of a link, the lookup starts just past those brackets.
#[must_use]
pub fn link_under_cursor(text: &str, cursor: ByteIndex) -> Option<LinkSpan> {
    let skipped = text.get(cursor.as_usize()..).map_or(0, |rest| {
        rest.chars()
            .take(MAX_LEADING_BRACKETS_TO_SKIP)
            .take_while(|ch| *ch == LEFT_BRACKET_CHAR)
            .count()
    });
    // `[` is a single byte.
    let cursor = byte_index(cursor.as_usize() + skipped);
    find_links(text).into_iter().find(|it| it.contains(cursor))
}
