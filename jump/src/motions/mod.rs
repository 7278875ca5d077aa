// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor motions for a Markdown buffer, built on [`crate::navigate`]. Each one takes a
//! document, a caret, and a repeat count, and returns the new caret. Motions never fail:
//! when there is nowhere to go, the caret stays put.

// Attach sources.
pub mod follow_link;
pub mod jump_to_heading;
pub mod jump_to_link;
pub mod motion_args;
pub mod motion_kind;

// Re-export.
pub use follow_link::*;
pub use jump_to_heading::*;
pub use jump_to_link::*;
pub use motion_args::*;
pub use motion_kind::*;
