// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod voider_error;

// Re-export.
pub use voider_error::*;
