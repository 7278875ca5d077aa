// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LinkSpan, Position, TextDocument, link_under_cursor};

/// The link under the caret, for the host to open. A caret on the opening `[` or `[[`
/// of a link counts as being on that link.
#[must_use]
pub fn follow_link_under_cursor(
    document: &impl TextDocument,
    cursor: Position,
) -> Option<LinkSpan> {
    link_under_cursor(
        document.get_document_text(),
        document.position_to_offset(cursor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryDocument, LinkKind, assert_eq2, col, pos, row};

    #[test]
    fn test_follow_link() {
        let doc = InMemoryDocument::new("intro\n- [ ] read [[Rust Book|the book]] later");
        let it = follow_link_under_cursor(&doc, pos(row(1), col(15))).unwrap();
        assert_eq2!(it.kind, LinkKind::WikiLink);
        assert_eq2!(it.target(), "Rust Book");
        assert_eq2!(it.display_text(), "the book");

        // On the first bracket.
        let it = follow_link_under_cursor(&doc, pos(row(1), col(11))).unwrap();
        assert_eq2!(it.start.as_usize(), 17);
    }

    #[test]
    fn test_no_link_under_cursor() {
        let doc = InMemoryDocument::new("intro\n- [ ] read [[Rust Book]] later");
        assert!(follow_link_under_cursor(&doc, pos(row(0), col(2))).is_none());
        // The checkbox isn't a link.
        assert!(follow_link_under_cursor(&doc, pos(row(1), col(2))).is_none());
    }
}
