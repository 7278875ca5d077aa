// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod composite_pattern_builder;
pub mod pattern_error;
pub mod search_pattern;

// Re-export.
pub use composite_pattern_builder::*;
pub use pattern_error::*;
pub use search_pattern::*;
