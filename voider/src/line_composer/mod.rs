// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the configured word into the lines that get printed, animated, or saved:
//! [`build_word`] runs the transform pipeline, [`build_content_lines`] repeats the word
//! into lines, and [`compose`] / [`compose_styled`] add numbers, borders, and color.

// Attach sources.
pub mod compose;
pub mod content_lines;
pub mod word_pipeline;

// Re-export.
pub use compose::*;
pub use content_lines::*;
pub use word_pipeline::*;
