// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env, io::Write};

use clap::ValueEnum;

use super::{AnsiLineDisplay, ConsoleLineDisplay, LineDisplay};

/// Which [`LineDisplay`] implementation redraws animated lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayBackend {
    /// Decide at startup, see [`DisplayBackend::probe`].
    #[default]
    Auto,
    /// Raw escape sequences, [`AnsiLineDisplay`].
    Ansi,
    /// crossterm commands, [`ConsoleLineDisplay`].
    Console,
}

impl DisplayBackend {
    /// Replace [`DisplayBackend::Auto`] with the result of [`DisplayBackend::probe`].
    /// Anything else was chosen explicitly and is kept as is.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            DisplayBackend::Auto => Self::probe(),
            it => it,
        }
    }

    /// Look at the running environment to pick a backend.
    #[must_use]
    pub fn probe() -> Self {
        probe_environment(env::consts::OS, env::var("TERM").ok().as_deref())
    }

    /// Box up the backend that writes to `writer`. [`DisplayBackend::Auto`] is resolved
    /// first.
    pub fn create_line_display<W: Write + 'static>(
        self,
        writer: W,
    ) -> Box<dyn LineDisplay> {
        let backend = self.resolve();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Selected line display", requested = ?self, backend = ?backend);
        match backend {
            DisplayBackend::Console => Box::new(ConsoleLineDisplay::new(writer)),
            DisplayBackend::Ansi | DisplayBackend::Auto => {
                Box::new(AnsiLineDisplay::new(writer))
            }
        }
    }
}

/// The console backend is used on Windows, and wherever `TERM` does not promise a VT100
/// compatible terminal (unset or `dumb`). Everywhere else raw escape sequences are used.
#[must_use]
pub fn probe_environment(os: &str, term: Option<&str>) -> DisplayBackend {
    match (os, term) {
        ("windows", _) | (_, None | Some("" | "dumb")) => DisplayBackend::Console,
        _ => DisplayBackend::Ansi,
    }
}
