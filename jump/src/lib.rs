// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_jump
//!
//! Vim style cursor motions for Markdown buffers: jump to the Nth next or previous
//! heading, link, or match of any regex, relative to the caret, wrapping around the ends
//! of the document.
//!
//! There are 3 layers:
//!
//! 1. [`navigate`] / [`navigate_offset`]: the navigator. Given text, a
//!    [`SearchPattern`], a caret, a repeat count, and a [`Direction`], it returns the
//!    start of the target match. All matches are collected in one scan, grouped around
//!    the caret (see [`MatchBuckets`]), and the repeat count is reduced modulo the
//!    number of matches. If nothing matches, the caret stays where it is.
//! 2. The grammars:
//!    - [`link_pattern`] is one composite pattern (built w/
//!      [`CompositePatternBuilder`]) that recognizes wiki-links `[[note]]`, markdown
//!      links `[text](url)`, and bare URLs `https://...`, in that order of precedence.
//!    - [`naive_heading_pattern`] plus [`heading_filter`] finds ATX headings while
//!      skipping `#` lines inside fenced code.
//! 3. The motions in [`MotionKind`], plus [`follow_link_under_cursor`].
//!
//! The host (an editor, or the `mdj` binary in `r3bl-cmdr`) only has to implement
//! [`TextDocument`]. [`InMemoryDocument`] is a ready made implementation.
//!
//! ```
//! use r3bl_jump::{InMemoryDocument, MotionArgs, MotionKind, col, pos, row};
//!
//! let doc = InMemoryDocument::new("# One\n```\n# not a heading\n```\n## Two");
//! let caret = MotionKind::NextHeading.run(&doc, pos(row(0), col(0)), MotionArgs::default());
//! assert_eq!(caret, pos(row(4), col(0)));
//! ```
//!
//! # Offsets
//!
//! All linear offsets are byte offsets into the UTF-8 text ([`ByteIndex`]), and columns
//! in a [`Position`] count `char`s.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
#[macro_use]
pub mod core;
pub mod document;
pub mod grammar;
pub mod motions;
pub mod navigator;
pub mod pattern;

// Re-export.
pub use core::*;
pub use document::*;
pub use grammar::*;
pub use motions::*;
pub use navigator::*;
pub use pattern::*;
