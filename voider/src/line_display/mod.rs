// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi_line_display;
pub mod backend_selection;
pub mod console_line_display;
pub mod line_display_trait;
pub mod sleeper;

// Re-export.
pub use ansi_line_display::*;
pub use backend_selection::*;
pub use console_line_display::*;
pub use line_display_trait::*;
pub use sleeper::*;
