// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! All the Markdown literals and regex sources that the grammars are built from.

/// `[[` not preceded by a backslash, then the shortest run up to `]]`. `.` doesn't match
/// `\n`, so a wiki-link never spans lines.
pub const WIKI_LINK_SOURCE: &str = r"(?<!\\)\[\[.*?\]\]";

/// `[` not preceded by a backslash, display text, `](`, url, `)`. The display text is a
/// run of chars other than `\`, `[`, `]`, `\n`, or an escaped char like `\]`. So an
/// unescaped `]` always ends the display text.
pub const MARKDOWN_LINK_SOURCE: &str = r"(?<!\\)\[(?:[^\\\[\]\n]|\\.)*?\]\(.*?\)";

/// Lowercase scheme, `://`, then everything up to the next whitespace.
pub const STANDALONE_URL_SOURCE: &str = r"[a-z]+://\S+";

pub const WIKI_LINK_ALTERNATIVE: &str = "wiki_link";
pub const MARKDOWN_LINK_ALTERNATIVE: &str = "markdown_link";
pub const STANDALONE_URL_ALTERNATIVE: &str = "standalone_url";

/// An ATX heading prefix: 1 to 6 `#` at the start of a line, then a space. This alone
/// also matches comments inside fenced code (eg: Python or shell), so it is always
/// paired w/ the fenced code scan in `heading_grammar`.
pub const NAIVE_HEADING_SOURCE: &str = r"(?m)^#{1,6} ";

/// A line that starts w/ at least this many backticks opens a fence. It is closed by the
/// next line that starts w/ at least as many backticks as it was opened with.
pub const MIN_CODE_FENCE_LEN: usize = 3;
pub const CODE_FENCE_CHAR: char = '`';
pub const NEW_LINE_CHAR: char = '\n';

pub const HEADING_CHAR: char = '#';
pub const SPACE_CHAR: char = ' ';
pub const BACK_SLASH_CHAR: char = '\\';
pub const LEFT_BRACKET: &str = "[";
pub const LEFT_BRACKET_CHAR: char = '[';
pub const RIGHT_BRACKET: &str = "]";
pub const RIGHT_BRACKET_CHAR: char = ']';
pub const ESCAPED_LEFT_BRACKET: &str = r"\[";
pub const ESCAPED_RIGHT_BRACKET: &str = r"\]";
pub const MARKDOWN_LINK_MIDDLE: &str = "](";
pub const WIKI_LINK_START: &str = "[[";
pub const WIKI_LINK_END: &str = "]]";
pub const WIKI_LINK_ALIAS_SEPARATOR: char = '|';
pub const RIGHT_PARENTHESIS: &str = ")";

/// How many `[` under the caret are skipped when looking for the link to follow.
pub const MAX_LEADING_BRACKETS_TO_SKIP: usize = 2;
