// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::PathBuf, time::Duration};

use super::CLIArg;
use crate::{AnimationSettings, BorderGlyphs, DisplayBackend, Effect, LineDecoration,
            Pattern, VoiderError, WordTransform};

/// Highest effect number that [`Effect::from_code`] knows about.
pub const MAX_EFFECT_CODE: i64 = 5;
pub const MIN_GLITCH_INTENSITY: u8 = 1;
pub const MAX_GLITCH_INTENSITY: u8 = 3;

/// Everything a run needs, validated. Built from [`CLIArg`] with [`TryFrom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub word: String,
    pub transform: WordTransform,
    /// At least 1.
    pub lines: usize,
    /// At least 1.
    pub repetitions: usize,
    pub separator: String,
    pub pattern: Pattern,
    pub decoration: LineDecoration,
    pub animation: AnimationSettings,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub backend: DisplayBackend,
}

impl RenderConfig {
    #[must_use]
    pub fn is_animated(&self) -> bool { !self.animation.delay.is_zero() }
}

impl TryFrom<CLIArg> for RenderConfig {
    type Error = VoiderError;

    fn try_from(cli_arg: CLIArg) -> Result<Self, Self::Error> {
        let CLIArg {
            lines,
            repetitions,
            word,
            text_options,
            animation_options,
            visual_options,
            global_options,
        } = cli_arg;

        let (Some(lines), Some(repetitions)) = (to_positive(lines), to_positive(repetitions))
        else {
            return Err(VoiderError::InvalidArguments { lines, repetitions });
        };

        let pattern = match text_options.pattern {
            None => Pattern::Uniform,
            Some(code) => Pattern::from_code(code).unwrap_or_else(|| {
                tracing::warn!(message = "Pattern out of range, using 1", pattern = code);
                Pattern::Uniform
            }),
        };

        let delay_ms = match animation_options.delay {
            None => 0,
            Some(it) => u64::try_from(it).unwrap_or_else(|_| {
                tracing::warn!(message = "Negative delay, using 0", delay = it);
                0
            }),
        };

        let effect_code = match animation_options.effect {
            None => 0,
            Some(it) if (0..=MAX_EFFECT_CODE).contains(&it) => it,
            Some(it) => {
                tracing::warn!(message = "Effect out of range, using 0", effect = it);
                0
            }
        };

        let effect_param = match animation_options.wave {
            None => 0,
            Some(it) if it < 1 => {
                tracing::warn!(message = "Wave size below 1, using 1", wave = it);
                1
            }
            Some(it) => it,
        };

        let glitch_intensity = match visual_options.glitch {
            None => 0,
            Some(it) => u8::try_from(it)
                .ok()
                .filter(|it| (MIN_GLITCH_INTENSITY..=MAX_GLITCH_INTENSITY).contains(it))
                .unwrap_or_else(|| {
                    tracing::warn!(message = "Glitch intensity out of range, using 1", glitch = it);
                    MIN_GLITCH_INTENSITY
                }),
        };

        let glyphs = if visual_options.ascii_border {
            BorderGlyphs::Ascii
        } else {
            BorderGlyphs::detect()
        };

        Ok(RenderConfig {
            word,
            transform: WordTransform {
                uppercase: text_options.uppercase,
                lowercase: text_options.lowercase,
                capitalize: text_options.capitalize,
                reverse: text_options.reverse,
                mirror: visual_options.mirror,
                glitch_intensity,
            },
            lines,
            repetitions,
            separator: text_options.separator,
            pattern,
            decoration: LineDecoration {
                with_number: visual_options.number,
                with_border: visual_options.border,
                with_rainbow: visual_options.rainbow,
                glyphs,
            },
            animation: AnimationSettings {
                delay: Duration::from_millis(delay_ms),
                effect: Effect::from_code(effect_code, effect_param),
                fade: animation_options.fade,
            },
            output: global_options.output,
            seed: global_options.seed,
            backend: global_options.backend,
        })
    }
}

fn to_positive(it: i64) -> Option<usize> { usize::try_from(it).ok().filter(|it| *it > 0) }
