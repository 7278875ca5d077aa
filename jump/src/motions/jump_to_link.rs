// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::MotionArgs;
use crate::{Direction, Position, TextDocument, link_pattern, navigate};

/// Jump to the start of the `repeat`th next link (wiki-link, markdown link, or URL).
#[must_use]
pub fn jump_to_next_link(
    document: &impl TextDocument,
    cursor: Position,
    args: MotionArgs,
) -> Position {
    jump_to_link(document, cursor, args, Direction::Next)
}

/// Jump to the start of the `repeat`th previous link.
#[must_use]
pub fn jump_to_previous_link(
    document: &impl TextDocument,
    cursor: Position,
    args: MotionArgs,
) -> Position {
    jump_to_link(document, cursor, args, Direction::Previous)
}

fn jump_to_link(
    document: &impl TextDocument,
    cursor: Position,
    args: MotionArgs,
    direction: Direction,
) -> Position {
    match link_pattern() {
        Ok(pattern) => navigate(document, cursor, pattern, args.repeat, direction, None),
        Err(error) => {
            tracing::warn!(message = "Link pattern failed to compile", error = ?error);
            cursor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryDocument, assert_eq2, col, pos, row};

    fn doc() -> InMemoryDocument {
        InMemoryDocument::new(
            [
                "See [[Note]] and [docs](https://docs.rs).",
                "Nothing here.",
                "Visit https://r3bl.com today.",
            ]
            .join("\n"),
        )
    }

    #[test]
    fn test_next_link() {
        let doc = doc();
        let it = jump_to_next_link(&doc, pos(row(0), col(0)), 1.into());
        assert_eq2!(it, pos(row(0), col(4)));
        let it = jump_to_next_link(&doc, it, 1.into());
        assert_eq2!(it, pos(row(0), col(17)));
        let it = jump_to_next_link(&doc, it, 1.into());
        assert_eq2!(it, pos(row(2), col(6)));
        let it = jump_to_next_link(&doc, it, 1.into());
        assert_eq2!(it, pos(row(0), col(4)));
    }

    #[test]
    fn test_previous_link() {
        let doc = doc();
        let it = jump_to_previous_link(&doc, pos(row(1), col(0)), 1.into());
        assert_eq2!(it, pos(row(0), col(17)));
        let it = jump_to_previous_link(&doc, pos(row(1), col(0)), 2.into());
        assert_eq2!(it, pos(row(0), col(4)));
        let it = jump_to_previous_link(&doc, pos(row(1), col(0)), 3.into());
        assert_eq2!(it, pos(row(2), col(6)));
    }

    #[test]
    fn test_repeat_zero_behaves_as_one() {
        let doc = doc();
        let it = jump_to_next_link(&doc, pos(row(0), col(0)), 0.into());
        assert_eq2!(it, pos(row(0), col(4)));
    }
}
