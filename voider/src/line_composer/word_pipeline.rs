// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::Rng;

use super::mirror;
use crate::{RenderConfig, capitalize, glitch, reverse_str, strip_color_codes, to_lower,
            to_upper};

/// Transforms applied to the word, once, before it is repeated into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct WordTransform {
    pub uppercase: bool,
    pub lowercase: bool,
    pub capitalize: bool,
    pub reverse: bool,
    pub mirror: bool,
    /// `0` is off, otherwise `1..=3`.
    pub glitch_intensity: u8,
}

impl WordTransform {
    /// Run the pipeline on `word`:
    ///
    /// 1. Case: uppercase wins over lowercase, which wins over capitalize.
    /// 2. Reverse.
    /// 3. Glitch, when the intensity is not zero.
    /// 4. Strip color codes.
    /// 5. Mirror.
    pub fn apply(&self, word: &str, rng: &mut impl Rng) -> String {
        let mut acc = if self.uppercase {
            to_upper(word)
        } else if self.lowercase {
            to_lower(word)
        } else if self.capitalize {
            capitalize(word)
        } else {
            word.to_string()
        };

        if self.reverse {
            acc = reverse_str(&acc);
        }

        if self.glitch_intensity > 0 {
            acc = glitch(&acc, self.glitch_intensity, rng);
        }

        acc = strip_color_codes(&acc);

        if self.mirror {
            acc = mirror(&acc);
        }

        acc
    }
}

/// The final word for `config`, ready to be repeated into content lines.
pub fn build_word(config: &RenderConfig, rng: &mut impl Rng) -> String {
    let it = config.transform.apply(&config.word, rng);
    // % is Display, ? is Debug.
    tracing::debug!(message = "Built word", input = %config.word, output = %it);
    it
}
