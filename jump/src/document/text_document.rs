// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ByteIndex, Position, RowIndex, byte_index, col, pos, row};

/// The two capabilities that the navigator needs from whatever owns the buffer (an
/// editor, a file on disk, a test fixture):
/// 1. Get the full text of the document.
/// 2. Convert between a caret [`Position`] and a linear [`ByteIndex`] into that text.
///
/// Implementations must keep both conversions consistent with the text returned by
/// [`TextDocument::get_document_text`].
pub trait TextDocument {
    fn get_document_text(&self) -> &str;

    fn position_to_offset(&self, position: Position) -> ByteIndex;

    fn offset_to_position(&self, offset: ByteIndex) -> Position;
}

/// An owned document, w/ a table of the byte offset at which each row starts. Only `\n`
/// separates rows, so a `\r` before it is part of the row's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryDocument {
    text: String,
    row_starts: Vec<ByteIndex>,
}

impl InMemoryDocument {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let row_starts = std::iter::once(byte_index(0))
            .chain(
                text.match_indices('\n')
                    .map(|(offset, _)| byte_index(offset + 1)),
            )
            .collect();
        Self { text, row_starts }
    }

    #[must_use]
    pub fn row_count(&self) -> usize { self.row_starts.len() }

    /// The content of the row, without its trailing `\n`. Rows past the end are empty.
    #[must_use]
    pub fn get_row(&self, row_index: RowIndex) -> &str {
        match self.row_range(row_index) {
            Some((start, end)) => &self.text[*start..*end],
            None => "",
        }
    }

    fn row_range(&self, row_index: RowIndex) -> Option<(ByteIndex, ByteIndex)> {
        let start = *self.row_starts.get(row_index.as_usize())?;
        let end = match self.row_starts.get(row_index.as_usize() + 1) {
            // Exclude the `\n` that terminates this row.
            Some(next_row_start) => byte_index(next_row_start.as_usize() - 1),
            None => byte_index(self.text.len()),
        };
        Some((start, end))
    }

    /// Move `offset` back onto a `char` boundary, and inside the text.
    fn snap_to_char_boundary(&self, offset: ByteIndex) -> ByteIndex {
        let mut it = offset.as_usize().min(self.text.len());
        while !self.text.is_char_boundary(it) {
            it -= 1;
        }
        byte_index(it)
    }
}

impl Default for InMemoryDocument {
    fn default() -> Self { Self::new("") }
}

impl From<&str> for InMemoryDocument {
    fn from(text: &str) -> Self { Self::new(text) }
}

impl From<String> for InMemoryDocument {
    fn from(text: String) -> Self { Self::new(text) }
}

impl TextDocument for InMemoryDocument {
    fn get_document_text(&self) -> &str { &self.text }

    fn position_to_offset(&self, position: Position) -> ByteIndex {
        let Some((row_start, row_end)) = self.row_range(position.row_index) else {
            return byte_index(self.text.len());
        };
        let row_content = &self.text[*row_start..*row_end];
        let col_offset = row_content
            .char_indices()
            .nth(position.col_index.as_usize())
            .map_or(row_content.len(), |(offset, _)| offset);
        byte_index(row_start.as_usize() + col_offset)
    }

    fn offset_to_position(&self, offset: ByteIndex) -> Position {
        let offset = self.snap_to_char_boundary(offset);
        // The last row whose start is at or before the offset.
        let row_index = self
            .row_starts
            .partition_point(|row_start| *row_start <= offset)
            .saturating_sub(1);
        let row_start = self.row_starts.get(row_index).copied().unwrap_or_default();
        let col_index = self.text[*row_start..*offset].chars().count();
        pos(row(row_index), col(col_index))
    }
}
