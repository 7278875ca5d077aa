// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module is standalone, you can use it any project that uses
//! [miette](https://docs.rs/miette/latest/miette/index.html) for error handling.
//!
//! Miette allows customization how the [`miette::Report`] is displayed to terminal
//! output when the top-level handler in `main() -> miette::Result<_>` is activated. This
//! hook is only activated at the time that the error is displayed, not when it is
//! registered, it is lazy.

use miette::MietteHandlerOpts;

/// Fallback width when the `COLUMNS` env var isn't set (eg: output is piped).
pub const DEFAULT_REPORT_WIDTH: usize = 100;

/// The [`miette::ErrorHook`] is lazily evaluated. The report width is read just at the
/// time of the global error handler being used.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|it| it.parse::<usize>().ok())
            .unwrap_or(DEFAULT_REPORT_WIDTH);
        tracing::debug!(message = "miette::set_hook", width = width);
        Box::new(
            MietteHandlerOpts::new()
                .width(width)
                .wrap_lines(true)
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
