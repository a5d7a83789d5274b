// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # voider
//!
//! Render a word through repetition, text transforms, and terminal visual effects.
//!
//! ```text
//! $ voider -n -b -m 3 2 void
//! 1: ┌ void | diov void | diov  ┐
//! 2: │ void | diov void | diov  │
//! 3: └ void | diov void | diov  ┘
//! ```
//!
//! A run goes through these stages, each in its own module:
//!
//! 1. [`config`]: command line arguments ([`CLIArg`]) are validated and clamped into a
//!    [`RenderConfig`].
//! 2. [`text_transform`] and [`line_composer`]: the word is transformed once
//!    ([`build_word`]), repeated into lines ([`build_content_lines`]), and decorated
//!    with numbers, borders, and rainbow color ([`compose`], [`compose_styled`]).
//! 3. [`output_file`]: optionally, the decorated lines (without color) are saved.
//! 4. [`animation`] and [`line_display`]: with a delay, each line is revealed by an
//!    [`Effect`] through a [`LineDisplay`]; without one, lines are printed at once.
//!
//! The random source used by glitching and random reveal is owned by the [`Runner`]
//! and can be seeded, so the output is reproducible.
//!
//! Logging is opt-in (`--enable-logging`) and goes to `log.txt` through [`tracing`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod animation;
pub mod color;
pub mod common;
pub mod config;
pub mod line_composer;
pub mod line_display;
pub mod log;
pub mod output_file;
pub mod runner;
pub mod text_transform;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use animation::*;
pub use color::*;
pub use common::*;
pub use config::*;
pub use line_composer::*;
pub use line_display::*;
pub use log::*;
pub use output_file::*;
pub use runner::*;
pub use text_transform::*;
