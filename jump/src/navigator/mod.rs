// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Enable or disable debug logging for this `navigator` module.
pub const DEBUG_JUMP_NAVIGATOR: bool = true;

// Attach sources.
pub mod direction;
pub mod match_buckets;
pub mod navigate;
pub mod pattern_match;

// Re-export.
pub use direction::*;
pub use match_buckets::*;
pub use navigate::*;
pub use pattern_match::*;
