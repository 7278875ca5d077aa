// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Markdown grammars that plug into the navigator: links, and headings outside of fenced
//! code.

// Attach sources.
pub mod heading_grammar;
pub mod link_grammar;
pub mod md_grammar_constants;

// Re-export.
pub use heading_grammar::*;
pub use link_grammar::*;
pub use md_grammar_constants::*;
