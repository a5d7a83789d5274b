// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that decides what colors and glyphs end up around the content: SGR escape
//! codes, the rainbow cycle, border glyphs, and whether the terminal takes color at all.

// Attach sources.
pub mod border_glyphs;
pub mod detect_color_support;
pub mod rainbow;
pub mod sgr_code;

// Re-export.
pub use border_glyphs::*;
pub use detect_color_support::*;
pub use rainbow::*;
pub use sgr_code::*;
