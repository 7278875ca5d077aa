// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl-cmdr
//!
//! Command line apps built on the R3BL crates. Right now this is `mdj`, which runs the
//! Markdown motions from [`r3bl_jump`] against a file and prints where the caret lands.
//!
//! ```text
//! mdj jump next-heading --file README.md --row 0 --col 0
//! mdj search --pattern 'TODO' --file notes.md --row 3 --col 0 --direction previous
//! mdj links --file notes.md
//! mdj headings --file notes.md
//! mdj follow --file notes.md --row 4 --col 12
//! ```
//!
//! Carets are `row:col`, both 0 based, and columns count characters. Pass
//! `--enable-logging` (and optionally `--log-level trace`) to write debug output to
//! `log.txt`.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod mdj;

// Re-export.
pub use mdj::*;
