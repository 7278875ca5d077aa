// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The host collaborator: a document's text, and conversions between caret positions
//! and linear offsets into that text.

// Attach sources.
pub mod text_document;
pub mod units;

// Re-export.
pub use text_document::*;
pub use units::*;
