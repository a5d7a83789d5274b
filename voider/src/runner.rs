// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::stdout;

use rand::{SeedableRng as _, rngs::StdRng};

use crate::{ColorSupport, CommonResult, LineDisplay, RenderConfig, Sleeper, ThreadSleeper,
            animate_lines, build_content_lines, build_word, compose, compose_styled,
            global_color_support, strip_color_codes, write_lines_to_file};

/// Owns everything a run needs besides the config: the random source, the display, and
/// the sleeper.
#[allow(missing_debug_implementations)]
pub struct Runner<S: Sleeper> {
    pub rng: StdRng,
    pub display: Box<dyn LineDisplay>,
    pub sleeper: S,
    pub color_support: ColorSupport,
}

impl Runner<ThreadSleeper> {
    /// Wire up stdout, a real sleeper, and a random source that is seeded from
    /// `config.seed` if present, and from the OS otherwise.
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            rng: create_rng(config.seed),
            display: config.backend.create_line_display(stdout()),
            sleeper: ThreadSleeper,
            color_support: global_color_support::detect(),
        }
    }
}

impl<S: Sleeper> Runner<S> {
    /// Build the lines for `config`, save them if asked to, then either animate them or
    /// print them.
    ///
    /// A file that can't be written is reported on the display and the run continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the display can't be written to.
    pub fn run(&mut self, config: &RenderConfig) -> CommonResult<()> {
        let word = build_word(config, &mut self.rng);
        let content_lines = build_content_lines(
            &word,
            config.repetitions,
            &config.separator,
            config.pattern,
            config.lines,
        );

        let plain_decoration = config.decoration.without_rainbow();
        let plain_lines: Vec<String> = content_lines
            .iter()
            .enumerate()
            .map(|(index, content)| {
                compose(index, config.lines, content, plain_decoration)
            })
            .collect();

        if let Some(path) = &config.output {
            let message = match write_lines_to_file(path, &plain_lines) {
                Ok(()) => format!("Result saved to {}", path.display()),
                Err(report) => {
                    // % is Display, ? is Debug.
                    tracing::error!(message = "Could not save result", error = ?report);
                    format!("Error: could not open file {}", path.display())
                }
            };
            self.display.write_line(&message)?;
            self.display.flush()?;
        }

        if config.is_animated() {
            let clean_lines: Vec<String> =
                plain_lines.iter().map(|it| strip_color_codes(it)).collect();
            return animate_lines(
                self.display.as_mut(),
                &mut self.sleeper,
                &clean_lines,
                config.animation,
                &mut self.rng,
            );
        }

        for (index, content) in content_lines.iter().enumerate() {
            match self.color_support {
                ColorSupport::Ansi => self.display.write_line(&compose_styled(
                    index,
                    config.lines,
                    content,
                    config.decoration,
                ))?,
                ColorSupport::NoColor => self.display.write_line(&plain_lines[index])?,
            }
        }
        self.display.flush()
    }
}

/// Seeded random source when `seed` is given, OS entropy otherwise.
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
