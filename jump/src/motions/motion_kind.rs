// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

use super::{MotionArgs, jump_to_next_heading, jump_to_next_link, jump_to_previous_heading,
            jump_to_previous_link};
use crate::{Position, TextDocument};

/// Every cursor motion, so a host can bind them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum MotionKind {
    NextHeading,
    PreviousHeading,
    NextLink,
    PreviousLink,
}

impl MotionKind {
    #[must_use]
    pub fn run(
        self,
        document: &impl TextDocument,
        cursor: Position,
        args: MotionArgs,
    ) -> Position {
        match self {
            MotionKind::NextHeading => jump_to_next_heading(document, cursor, args),
            MotionKind::PreviousHeading => jump_to_previous_heading(document, cursor, args),
            MotionKind::NextLink => jump_to_next_link(document, cursor, args),
            MotionKind::PreviousLink => jump_to_previous_link(document, cursor, args),
        }
    }
}
