// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{QueueableCommand as _,
                cursor::MoveToColumn,
                style::Print,
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic as _;

use super::LineDisplay;
use crate::CommonResult;

/// [`LineDisplay`] that queues crossterm commands. On consoles that do not understand
/// escape sequences crossterm falls back to the native console API.
#[derive(Debug)]
pub struct ConsoleLineDisplay<W: Write> {
    pub writer: W,
}

impl<W: Write> ConsoleLineDisplay<W> {
    pub fn new(writer: W) -> Self { Self { writer } }
}

impl<W: Write> LineDisplay for ConsoleLineDisplay<W> {
    fn clear_line(&mut self) -> CommonResult<()> {
        self.writer
            .queue(MoveToColumn(0))
            .into_diagnostic()?
            .queue(Clear(ClearType::CurrentLine))
            .into_diagnostic()?;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> CommonResult<()> {
        self.writer.queue(Print(text)).into_diagnostic()?;
        Ok(())
    }

    fn new_line(&mut self) -> CommonResult<()> {
        self.writer.queue(Print("\n")).into_diagnostic()?;
        Ok(())
    }

    fn flush(&mut self) -> CommonResult<()> { self.writer.flush().into_diagnostic() }
}
