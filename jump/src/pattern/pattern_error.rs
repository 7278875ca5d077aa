// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Everything that can go wrong while building or scanning with a
/// [`crate::SearchPattern`].
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum PatternError {
    #[error("Failed to compile pattern {pattern_source:?}")]
    #[diagnostic(
        code(r3bl_jump::pattern::compile),
        help("Check the regex syntax. Lookbehind must have a fixed width")
    )]
    Compile {
        pattern_source: String,
        #[source]
        cause: Box<fancy_regex::Error>,
    },

    #[error("Failed to scan text with pattern {pattern_source:?}")]
    #[diagnostic(
        code(r3bl_jump::pattern::scan),
        help("The pattern backtracks too much on this text, try a simpler pattern")
    )]
    Scan {
        pattern_source: String,
        #[source]
        cause: Box<fancy_regex::Error>,
    },

    #[error("A composite pattern needs at least one alternative")]
    #[diagnostic(code(r3bl_jump::pattern::empty_composite))]
    EmptyComposite,

    #[error("Alternative {name:?} was added more than once")]
    #[diagnostic(
        code(r3bl_jump::pattern::duplicate_alternative),
        help("Each alternative is a named capture group, so names must be unique")
    )]
    DuplicateAlternative { name: String },
}
