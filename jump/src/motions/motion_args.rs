// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Arguments shared by every motion. `repeat` is the count typed before the motion (eg:
/// the `3` in `3]]`). A `repeat` of 0 behaves as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionArgs {
    pub repeat: usize,
}

impl Default for MotionArgs {
    fn default() -> Self { Self { repeat: 1 } }
}

impl From<usize> for MotionArgs {
    fn from(repeat: usize) -> Self { Self { repeat } }
}
