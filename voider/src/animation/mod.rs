// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Typewriter style animations. An [`Effect`] turns a line of text into a sequence of
//! [`Frame`]s, and the player draws them over one terminal line through a
//! [`crate::LineDisplay`], pausing through a [`crate::Sleeper`].

// Attach sources.
pub mod effect;
pub mod frames;
pub mod player;

// Re-export.
pub use effect::*;
pub use frames::*;
pub use player::*;
