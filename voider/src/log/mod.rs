// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in file logging with [`tracing`]. Nothing is logged unless
//! [`try_initialize_logging_global`] has been called.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_init;

// Re-export.
pub use tracing_init::*;
