// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::LazyLock;

use super::md_grammar_constants::{CODE_FENCE_CHAR, HEADING_CHAR, MIN_CODE_FENCE_LEN,
                                  NAIVE_HEADING_SOURCE, NEW_LINE_CHAR, SPACE_CHAR};
use crate::{ByteIndex, PatternError, PatternMatch, ScanMode, SearchPattern, byte_index,
            collect_matches};

static NAIVE_HEADING_PATTERN: LazyLock<Result<SearchPattern, PatternError>> =
    LazyLock::new(|| {
        SearchPattern::try_compile(NAIVE_HEADING_SOURCE, ScanMode::AllMatches, vec![])
    });

/// Matches the `#` prefix of every line that looks like a heading, including lines
/// inside fenced code. Pair it w/ [`heading_filter`] to drop those.
///
/// # Errors
///
/// Only if the built in source fails to compile, which the tests rule out.
pub fn naive_heading_pattern() -> Result<&'static SearchPattern, &'static PatternError> {
    NAIVE_HEADING_PATTERN.as_ref()
}

/// A fenced code region, from its opening fence up to the end of its closing fence (or
/// the end of the text when unclosed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeblockSpan {
    pub start: ByteIndex,
    pub end: ByteIndex,
}

impl CodeblockSpan {
    #[must_use]
    pub fn contains(&self, offset: ByteIndex) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Every fenced code region in `text`, found line by line in a single pass.
///
/// | line                                   | effect                               |
/// | -------------------------------------- | ------------------------------------ |
/// | starts w/ 3 or more backticks          | opens a fence of that many backticks |
/// | starts w/ at least as many, while open | closes it, after those backticks     |
/// | end of text, while open                | closes it at the end of the text     |
///
/// Anything after the backticks on a fence line (eg: the language) is ignored.
#[must_use]
pub fn find_codeblocks(text: &str) -> Vec<CodeblockSpan> {
    let mut acc = vec![];
    // Start offset and backtick count of the fence that is open.
    let mut open_fence: Option<(ByteIndex, usize)> = None;

    for (line_start, line) in lines_with_offsets(text) {
        let backtick_count = line.chars().take_while(|ch| *ch == CODE_FENCE_CHAR).count();
        match open_fence {
            None if backtick_count >= MIN_CODE_FENCE_LEN => {
                open_fence = Some((byte_index(line_start), backtick_count));
            }
            Some((start, fence_len)) if backtick_count >= fence_len => {
                acc.push(CodeblockSpan {
                    start,
                    // The backticks are single bytes.
                    end: byte_index(line_start + fence_len),
                });
                open_fence = None;
            }
            _ => {}
        }
    }

    if let Some((start, _)) = open_fence {
        acc.push(CodeblockSpan {
            start,
            end: byte_index(text.len()),
        });
    }

    acc
}

/// Each line of `text` (split on `\n` only) w/ the byte offset where it starts.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(NEW_LINE_CHAR).scan(0, |offset, line| {
        let line_start = *offset;
        *offset += line.len() + 1;
        Some((line_start, line))
    })
}

#[must_use]
pub fn is_within_codeblock(offset: ByteIndex, codeblocks: &[CodeblockSpan]) -> bool {
    codeblocks.iter().any(|it| it.contains(offset))
}

/// Returns a filter for the navigator that rejects heading matches inside fenced code.
/// The codeblocks of `text` are found once, here, and not on every call of the filter.
pub fn heading_filter(text: &str) -> impl Fn(&PatternMatch) -> bool + use<> {
    let codeblocks = find_codeblocks(text);
    move |it: &PatternMatch| !is_within_codeblock(it.start, &codeblocks)
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    Heading1 = 1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
}

impl From<HeadingLevel> for usize {
    fn from(level: HeadingLevel) -> Self { (level as u8).into() }
}

impl From<usize> for HeadingLevel {
    fn from(size: usize) -> Self {
        match size {
            1 => HeadingLevel::Heading1,
            2 => HeadingLevel::Heading2,
            3 => HeadingLevel::Heading3,
            4 => HeadingLevel::Heading4,
            5 => HeadingLevel::Heading5,
            _ => HeadingLevel::Heading6,
        }
    }
}

/// A real heading (not inside fenced code). `start` is the offset of its first `#`,
/// which is also where heading jumps land.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Heading {
    pub level: HeadingLevel,
    pub start: ByteIndex,
    pub title: String,
}

/// The outline of `text`: every heading outside of fenced code, in document order.
#[must_use]
pub fn find_headings(text: &str) -> Vec<Heading> {
    let Ok(pattern) = naive_heading_pattern() else {
        tracing::warn!(message = "Heading pattern failed to compile");
        return vec![];
    };
    let filter = heading_filter(text);
    collect_matches(text, pattern, Some(&filter))
        .into_iter()
        .map(|it| {
            let line = text[it.start.as_usize()..].lines().next().unwrap_or_default();
            let level = line.chars().take_while(|ch| *ch == HEADING_CHAR).count();
            let title = line[level..]
                .trim_start_matches(SPACE_CHAR)
                .trim_end()
                .to_string();
            Heading {
                level: HeadingLevel::from(level),
                start: it.start,
                title,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    const DOC: &str = "# Title\n\n```python\n# not a heading\n```\n\n## Real\n####### seven\n";

    #[test]
    fn test_patterns_compile() {
        assert!(naive_heading_pattern().is_ok());
    }

    #[test]
    fn test_find_codeblocks_closed() {
        let it = find_codeblocks(DOC);
        assert_eq2!(it.len(), 1);
        let block = &DOC[it[0].start.as_usize()..it[0].end.as_usize()];
        assert_eq2!(block, "```python\n# not a heading\n```");
    }

    #[test]
    fn test_find_codeblocks_unclosed_runs_to_end() {
        let text = "a\n```\n# x\n";
        let it = find_codeblocks(text);
        assert_eq2!(it, vec![CodeblockSpan {
            start: byte_index(2),
            end: byte_index(text.len())
        }]);
    }

    #[test]
    fn test_closing_fence_needs_as_many_backticks() {
        let text = "````\n```\n# inside\n````\n# outside";
        let it = find_codeblocks(text);
        assert_eq2!(it.len(), 1);
        let outside = text.rfind('#').map(byte_index).unwrap();
        let inside = text.find('#').map(byte_index).unwrap();
        assert!(is_within_codeblock(inside, &it));
        assert!(!is_within_codeblock(outside, &it));
    }

    #[test]
    fn test_longer_closing_fence_and_trailing_text() {
        let text = "```rust\n# a\n````` done\n# b\n```\n# c";
        let it = find_codeblocks(text);
        assert_eq2!(it.len(), 2);
        let first = &text[it[0].start.as_usize()..it[0].end.as_usize()];
        assert_eq2!(first, "```rust\n# a\n```");
        // The last fence is unclosed, so it runs to the end.
        assert_eq2!(it[1].end, byte_index(text.len()));
        let b = text.find("# b").map(byte_index).unwrap();
        assert!(!is_within_codeblock(b, &it));
    }

    #[test]
    fn test_two_backticks_are_not_a_fence() {
        assert!(find_codeblocks("``\n# x\n``").is_empty());
        assert!(find_codeblocks("").is_empty());
    }

    #[test]
    fn test_crlf_fence_lines() {
        let text = "```\r\n# x\r\n```\r\n# y";
        let it = find_codeblocks(text);
        assert_eq2!(it, vec![CodeblockSpan {
            start: byte_index(0),
            end: byte_index(text.find("```\r\n# y").unwrap() + 3)
        }]);
    }

    #[test]
    fn test_heading_filter() {
        let filter = heading_filter(DOC);
        let inside = DOC.find("# not").map(byte_index).unwrap();
        assert!(!filter(&PatternMatch::new(inside, "# ")));
        assert!(filter(&PatternMatch::new(byte_index(0), "# ")));
    }

    #[test]
    fn test_find_headings() {
        let it = find_headings(DOC)
            .into_iter()
            .map(|it| (usize::from(it.level), it.title))
            .collect::<Vec<_>>();
        assert_eq2!(it, vec![(1, "Title".to_string()), (2, "Real".to_string())]);
    }

    #[test]
    fn test_heading_needs_space_and_line_start() {
        assert!(find_headings("#nospace\ntext # mid\n").is_empty());
    }

    #[test]
    fn test_heading_level_from_usize() {
        assert_eq2!(HeadingLevel::from(3), HeadingLevel::Heading3);
        assert_eq2!(usize::from(HeadingLevel::Heading6), 6);
    }
}
