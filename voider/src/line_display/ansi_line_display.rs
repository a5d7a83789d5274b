// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use super::LineDisplay;
use crate::{CommonResult, VoiderError};

/// Carriage return, then CSI `K` (erase in line, cursor to end). Since the cursor is
/// already at column 0, this erases the entire line.
pub const CLEAR_LINE_SEQUENCE: &str = "\r\x1b[K";

/// [`LineDisplay`] that writes raw escape sequences. Works on any terminal that speaks
/// VT100, which today is nearly all of them, including Windows Terminal.
#[derive(Debug)]
pub struct AnsiLineDisplay<W: Write> {
    pub writer: W,
}

impl<W: Write> AnsiLineDisplay<W> {
    pub fn new(writer: W) -> Self { Self { writer } }
}

impl<W: Write> LineDisplay for AnsiLineDisplay<W> {
    fn clear_line(&mut self) -> CommonResult<()> {
        self.writer
            .write_all(CLEAR_LINE_SEQUENCE.as_bytes())
            .map_err(VoiderError::DisplayIo)?;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> CommonResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(VoiderError::DisplayIo)?;
        Ok(())
    }

    fn new_line(&mut self) -> CommonResult<()> {
        writeln!(self.writer).map_err(VoiderError::DisplayIo)?;
        Ok(())
    }

    fn flush(&mut self) -> CommonResult<()> {
        self.writer.flush().map_err(VoiderError::DisplayIo)?;
        Ok(())
    }
}
