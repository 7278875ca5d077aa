// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use r3bl_jump::{Position, ok};

use super::ui_str;

/// Exit code when `follow` finds no link under the caret.
pub const EXIT_CODE_NO_LINK: i32 = 1;

/// One line of `links` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub position: Position,
    pub kind: String,
    pub target: String,
    pub text: String,
}

/// One line of `headings` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRow {
    pub position: Position,
    pub level: usize,
    pub title: String,
}

/// What a command produced. [`Display`] renders exactly what goes to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdjResult {
    Caret(Position),
    Links(Vec<LinkRow>),
    Headings(Vec<HeadingRow>),
    FollowTarget(String),
    NoLinkUnderCaret,
}

impl MdjResult {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            MdjResult::NoLinkUnderCaret => EXIT_CODE_NO_LINK,
            _ => 0,
        }
    }
}

impl Display for MdjResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            MdjResult::Caret(position) => write!(f, "{position}"),
            MdjResult::Links(rows) => {
                for (index, it) in rows.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}\t{}\t{}\t{}", it.position, it.kind, it.target, it.text)?;
                }
                ok!()
            }
            MdjResult::Headings(rows) => {
                for (index, it) in rows.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}\t{}\t{}", it.position, it.level, it.title)?;
                }
                ok!()
            }
            MdjResult::FollowTarget(target) => write!(f, "{target}"),
            MdjResult::NoLinkUnderCaret => write!(f, "{}", ui_str::no_link_under_caret_msg()),
        }
    }
}

#[cfg(test)]
mod tests {
    use r3bl_jump::{assert_eq2, col, pos, row};

    use super::*;

    #[test]
    fn test_display_caret_and_exit_codes() {
        let it = MdjResult::Caret(pos(row(3), col(7)));
        assert_eq2!(it.to_string(), "3:7");
        assert_eq2!(it.exit_code(), 0);
        assert_eq2!(MdjResult::NoLinkUnderCaret.exit_code(), EXIT_CODE_NO_LINK);
    }

    #[test]
    fn test_display_rows_are_tab_separated() {
        let it = MdjResult::Headings(vec![
            HeadingRow {
                position: pos(row(0), col(0)),
                level: 1,
                title: "Intro".to_string(),
            },
            HeadingRow {
                position: pos(row(4), col(0)),
                level: 2,
                title: "Usage".to_string(),
            },
        ]);
        assert_eq2!(it.to_string(), "0:0\t1\tIntro\n4:0\t2\tUsage");
        assert_eq2!(MdjResult::Links(vec![]).to_string(), "");
    }
}
