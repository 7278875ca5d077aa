// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteIndex, byte_index};

/// One occurrence of a pattern in a document: where it starts, and the text it matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternMatch {
    pub start: ByteIndex,
    pub text: String,
}

impl PatternMatch {
    #[must_use]
    pub fn new(start: ByteIndex, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// One past the last byte of the match.
    #[must_use]
    pub fn end(&self) -> ByteIndex { byte_index(self.start.as_usize() + self.len()) }

    /// Half open: `start <= offset < end`. A zero length match contains nothing.
    #[must_use]
    pub fn contains(&self, offset: ByteIndex) -> bool {
        self.start <= offset && offset < self.end()
    }
}
