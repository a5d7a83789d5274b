// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure string-to-string functions used to build the word that gets rendered. None of
//! them can fail, and the empty string is a valid input and output for all of them.

// Attach sources.
pub mod case;
pub mod glitch;
pub mod repeat;
pub mod strip_color_codes;

// Re-export.
pub use case::*;
pub use glitch::*;
pub use repeat::*;
pub use strip_color_codes::*;
