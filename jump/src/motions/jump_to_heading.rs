// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::MotionArgs;
use crate::{Direction, Position, TextDocument, heading_filter, naive_heading_pattern,
            navigate};

/// Jump to the `repeat`th next heading, skipping `#` lines inside fenced code.
#[must_use]
pub fn jump_to_next_heading(
    document: &impl TextDocument,
    cursor: Position,
    args: MotionArgs,
) -> Position {
    jump_to_heading(document, cursor, args, Direction::Next)
}

/// Jump to the `repeat`th previous heading, skipping `#` lines inside fenced code.
#[must_use]
pub fn jump_to_previous_heading(
    document: &impl TextDocument,
    cursor: Position,
    args: MotionArgs,
) -> Position {
    jump_to_heading(document, cursor, args, Direction::Previous)
}

fn jump_to_heading(
    document: &impl TextDocument,
    cursor: Position,
    args: MotionArgs,
    direction: Direction,
) -> Position {
    let pattern = match naive_heading_pattern() {
        Ok(it) => it,
        Err(error) => {
            tracing::warn!(message = "Heading pattern failed to compile", error = ?error);
            return cursor;
        }
    };
    let filter = heading_filter(document.get_document_text());
    navigate(document, cursor, pattern, args.repeat, direction, Some(&filter))
}
