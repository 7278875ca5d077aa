// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display, Formatter},
          ops::Deref};

/// Represents a byte index into the text of a [`crate::TextDocument`]. This is the
/// linear offset that the navigator and the grammars work with, since it is what the
/// regex engine reports and what `&str` slicing accepts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteIndex(pub usize);

impl ByteIndex {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

#[must_use]
pub fn byte_index(arg_byte_index: impl Into<ByteIndex>) -> ByteIndex {
    arg_byte_index.into()
}

impl Deref for ByteIndex {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<usize> for ByteIndex {
    fn from(it: usize) -> Self { Self(it) }
}

/// The vertical index of a line in a document, starting at 0.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct RowIndex(pub usize);

#[must_use]
pub fn row(arg_row_index: impl Into<RowIndex>) -> RowIndex { arg_row_index.into() }

impl RowIndex {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

impl From<usize> for RowIndex {
    fn from(it: usize) -> Self { Self(it) }
}

/// The horizontal index inside a line, starting at 0. Counted in `char`s (Unicode
/// scalar values), not bytes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ColIndex(pub usize);

#[must_use]
pub fn col(arg_col_index: impl Into<ColIndex>) -> ColIndex { arg_col_index.into() }

impl ColIndex {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

impl From<usize> for ColIndex {
    fn from(it: usize) -> Self { Self(it) }
}

/// A caret position as the host sees it: a row and a column.
///
/// ```
/// use r3bl_jump::{Position, col, pos, row};
/// let it = pos(row(2), col(4));
/// assert_eq!(it, Position { row_index: row(2), col_index: col(4) });
/// assert_eq!(it.to_string(), "2:4");
/// ```
#[derive(Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct Position {
    pub row_index: RowIndex,
    pub col_index: ColIndex,
}

#[must_use]
pub fn pos(row_index: RowIndex, col_index: ColIndex) -> Position {
    Position {
        row_index,
        col_index,
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position[r: {}, c: {}]", self.row_index.0, self.col_index.0)
    }
}

/// `row:col`, which is also what the `mdj` binary prints.
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row_index.0, self.col_index.0)
    }
}
