// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cli_arg;
pub mod handle_mdj_command;
pub mod types;
pub mod ui_str;

// Re-export.
pub use cli_arg::*;
pub use handle_mdj_command::*;
pub use types::*;
