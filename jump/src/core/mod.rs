// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ambient plumbing shared by everything else in this crate: error types, logging setup,
//! declarative macros, and test fixtures.

// Attach sources.
#[macro_use]
pub mod decl_macros;
pub mod common;
pub mod log;
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use log::*;
pub use test_fixtures::*;
