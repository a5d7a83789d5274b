// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod recording_sleeper;
pub mod stdout_mock;

// Re-export.
pub use recording_sleeper::*;
pub use stdout_mock::*;
