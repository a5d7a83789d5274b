// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CommonResult;

/// The one capability that animation needs from a terminal: redraw the current line.
///
/// Implementations buffer their output, so callers must [`LineDisplay::flush`] before
/// pausing, otherwise the frame never becomes visible.
pub trait LineDisplay {
    /// Move the cursor to the first column and erase the whole current line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn clear_line(&mut self) -> CommonResult<()>;

    /// Write `text` at the cursor, without a line terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_text(&mut self, text: &str) -> CommonResult<()>;

    /// End the current line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn new_line(&mut self) -> CommonResult<()>;

    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn flush(&mut self) -> CommonResult<()>;

    /// Convenience for [`LineDisplay::write_text`] followed by [`LineDisplay::new_line`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_line(&mut self, text: &str) -> CommonResult<()> {
        self.write_text(text)?;
        self.new_line()
    }
}
