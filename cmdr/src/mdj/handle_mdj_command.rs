// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::ErrorKind, path::Path};

use r3bl_jump::{CommonError, CommonErrorType, CommonResult, InMemoryDocument, MotionArgs,
                MotionKind, PatternMatch, SearchPattern, TextDocument, find_headings,
                find_links, follow_link_under_cursor, navigate};

use super::{CLIArg, CLICommand, HeadingRow, LinkRow, MdjResult, ui_str};

/// Read `file` into an [`InMemoryDocument`].
///
/// # Errors
///
/// [`CommonErrorType::NotFound`] if the file doesn't exist, and
/// [`CommonErrorType::IOError`] for any other read failure (including invalid UTF-8).
pub async fn try_read_document(file: impl AsRef<Path>) -> CommonResult<InMemoryDocument> {
    let file = file.as_ref();
    match tokio::fs::read_to_string(file).await {
        Ok(text) => Ok(InMemoryDocument::new(text)),
        Err(error) if error.kind() == ErrorKind::NotFound => CommonError::new_error_result(
            CommonErrorType::NotFound,
            &ui_str::file_not_found_msg(&file.display().to_string()),
        ),
        Err(error) => CommonError::new_error_result(
            CommonErrorType::IOError,
            &ui_str::file_not_readable_msg(&file.display().to_string(), &error.to_string()),
        ),
    }
}

/// Read the file named by the command, and run the command against it.
///
/// # Errors
///
/// If the file can't be read, or the command's arguments are invalid.
pub async fn handle_mdj_command(cli_arg: &CLIArg) -> CommonResult<MdjResult> {
    let document = try_read_document(cli_arg.command.file()).await?;
    tracing::debug!(
        message = "handle_mdj_command",
        file = cli_arg.command.file(),
        rows = document.row_count()
    );
    run_command(&document, &cli_arg.command)
}

/// Run `command` against a document that is already in memory.
///
/// # Errors
///
/// [`CommonErrorType::InvalidArguments`] if the `search` pattern doesn't compile, or if
/// it matches empty text in the document.
pub fn run_command(document: &InMemoryDocument, command: &CLICommand) -> CommonResult<MdjResult> {
    let result = match command {
        CLICommand::Jump {
            motion,
            caret,
            count,
            ..
        } => MdjResult::Caret(MotionKind::from(*motion).run(
            document,
            (*caret).into(),
            MotionArgs::from(*count),
        )),

        CLICommand::Search {
            pattern,
            caret,
            count,
            direction,
            ..
        } => {
            let pattern = try_search_pattern(document, pattern)?;
            MdjResult::Caret(navigate(
                document,
                (*caret).into(),
                &pattern,
                *count,
                (*direction).into(),
                None,
            ))
        }

        CLICommand::Links { .. } => MdjResult::Links(
            find_links(document.get_document_text())
                .into_iter()
                .map(|it| LinkRow {
                    position: document.offset_to_position(it.start),
                    kind: it.kind.to_string(),
                    target: it.target().to_string(),
                    text: it.display_text(),
                })
                .collect(),
        ),

        CLICommand::Headings { .. } => MdjResult::Headings(
            find_headings(document.get_document_text())
                .into_iter()
                .map(|it| HeadingRow {
                    position: document.offset_to_position(it.start),
                    level: it.level.into(),
                    title: it.title,
                })
                .collect(),
        ),

        CLICommand::Follow { caret, .. } => {
            match follow_link_under_cursor(document, (*caret).into()) {
                Some(link) => MdjResult::FollowTarget(link.target().to_string()),
                None => MdjResult::NoLinkUnderCaret,
            }
        }
    };
    Ok(result)
}

/// Compile a user supplied pattern. Zero-length matches would never move the caret, so a
/// pattern that produces one in `document` is rejected.
fn try_search_pattern(document: &InMemoryDocument, source: &str) -> CommonResult<SearchPattern> {
    let pattern = match SearchPattern::try_new(source) {
        Ok(it) => it,
        Err(report) => {
            return CommonError::new_error_result(
                CommonErrorType::InvalidArguments,
                &report.to_string(),
            );
        }
    };

    let has_empty_match = pattern
        .to_global()
        .find_matches(document.get_document_text())
        .is_ok_and(|matches| matches.iter().any(PatternMatch::is_empty));
    if has_empty_match {
        return CommonError::new_error_result(
            CommonErrorType::InvalidArguments,
            &ui_str::zero_length_match_msg(source),
        );
    }

    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use r3bl_jump::{assert_eq2, col, pos, row, try_create_temp_dir};

    use super::*;

    const NOTE: &str = "# Notes\n\
                        See [[Rust Book|the book]] and [docs](https://docs.rs).\n\
                        ```\n\
                        # not a heading\n\
                        ```\n\
                        ## Links\n\
                        https://r3bl.com";

    fn run(args: &[&str]) -> CommonResult<MdjResult> {
        let doc = InMemoryDocument::new(NOTE);
        let cli_arg = CLIArg::try_parse_from(args).unwrap();
        run_command(&doc, &cli_arg.command)
    }

    fn error_type(result: CommonResult<MdjResult>) -> CommonErrorType {
        let report = result.unwrap_err();
        report.downcast_ref::<CommonError>().unwrap().error_type
    }

    #[test]
    fn test_jump_next_heading_skips_codeblock() {
        let it = run(&[
            "mdj", "jump", "next-heading", "-f", "n.md", "--row", "0", "--col", "0",
        ])
        .unwrap();
        assert_eq2!(it, MdjResult::Caret(pos(row(5), col(0))));
        assert_eq2!(it.to_string(), "5:0");
    }

    #[test]
    fn test_jump_previous_link_wraps_around() {
        let it = run(&[
            "mdj", "jump", "previous-link", "-f", "n.md", "--row", "0", "--col", "0",
        ])
        .unwrap();
        assert_eq2!(it, MdjResult::Caret(pos(row(6), col(0))));
    }

    #[test]
    fn test_search_w_count_and_direction() {
        // Matches of "Links|Notes": 0:2 and 5:3.
        let it = run(&[
            "mdj", "search", "-p", "Notes|Links", "-f", "n.md", "--row", "6", "--col", "0",
            "-c", "2", "-d", "previous",
        ])
        .unwrap();
        assert_eq2!(it, MdjResult::Caret(pos(row(0), col(2))));
    }

    #[test]
    fn test_search_rejects_invalid_and_empty_patterns() {
        let invalid = run(&[
            "mdj", "search", "-p", "(", "-f", "n.md", "--row", "0", "--col", "0",
        ]);
        assert_eq2!(error_type(invalid), CommonErrorType::InvalidArguments);

        let empty = run(&[
            "mdj", "search", "-p", "x*", "-f", "n.md", "--row", "0", "--col", "0",
        ]);
        assert_eq2!(error_type(empty), CommonErrorType::InvalidArguments);
    }

    #[test]
    fn test_links() {
        let MdjResult::Links(rows) = run(&["mdj", "links", "-f", "n.md"]).unwrap() else {
            panic!("expected links");
        };
        let summary: Vec<(String, &str, &str)> = rows
            .iter()
            .map(|it| (it.position.to_string(), it.kind.as_str(), it.target.as_str()))
            .collect();
        assert_eq2!(
            summary,
            vec![
                ("1:4".to_string(), "wiki-link", "Rust Book"),
                ("1:31".to_string(), "markdown-link", "https://docs.rs"),
                ("6:0".to_string(), "standalone-url", "https://r3bl.com"),
            ]
        );
        assert_eq2!(rows[0].text, "the book");
    }

    #[test]
    fn test_headings() {
        let it = run(&["mdj", "headings", "-f", "n.md"]).unwrap();
        assert_eq2!(it.to_string(), "0:0\t1\tNotes\n5:0\t2\tLinks");
    }

    #[test]
    fn test_follow() {
        let it = run(&["mdj", "follow", "-f", "n.md", "--row", "1", "--col", "33"]).unwrap();
        assert_eq2!(it, MdjResult::FollowTarget("https://docs.rs".to_string()));
        assert_eq2!(it.exit_code(), 0);

        let it = run(&["mdj", "follow", "-f", "n.md", "--row", "0", "--col", "0"]).unwrap();
        assert_eq2!(it, MdjResult::NoLinkUnderCaret);
        assert_eq2!(it.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_handle_mdj_command_reads_file() {
        let dir = try_create_temp_dir().unwrap();
        let file = dir.join("note.md");
        tokio::fs::write(&file, NOTE).await.unwrap();
        let file = file.to_str().unwrap();

        let cli_arg = CLIArg::try_parse_from(["mdj", "headings", "--file", file]).unwrap();
        let it = handle_mdj_command(&cli_arg).await.unwrap();
        assert_eq2!(it.to_string(), "0:0\t1\tNotes\n5:0\t2\tLinks");
    }

    #[tokio::test]
    async fn test_try_read_document_missing_file() {
        let dir = try_create_temp_dir().unwrap();
        let res = try_read_document(dir.join("nope.md")).await;
        let report = res.unwrap_err();
        assert_eq2!(
            report.downcast_ref::<CommonError>().unwrap().error_type,
            CommonErrorType::NotFound
        );
    }
}
