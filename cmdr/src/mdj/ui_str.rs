// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[must_use]
pub fn file_not_found_msg(file: &str) -> String { format!("🔍 Can't find file: {file}") }

#[must_use]
pub fn file_not_readable_msg(file: &str, cause: &str) -> String {
    format!("📄 Can't read file: {file}, {cause}")
}

#[must_use]
pub fn zero_length_match_msg(pattern: &str) -> String {
    format!("🙅 Pattern /{pattern}/ matches empty text, so there is nowhere to jump to")
}

#[must_use]
pub fn no_link_under_caret_msg() -> String { "🤷 No link under the caret".to_string() }
