// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::RangeInclusive;

use rand::Rng;

use super::ESC;

/// Chance that a single character gets corrupted, per level of intensity.
pub const GLITCH_PROBABILITY_PER_LEVEL: f64 = 0.1;

/// Visible ASCII characters, `!` through `~`.
pub const GLITCH_CHAR_RANGE: RangeInclusive<u8> = 33..=126;

/// Terminator of an SGR (color) escape sequence.
const SGR_TERMINATOR: char = 'm';

/// Corrupt `text` by replacing each character, independently, with a random visible
/// ASCII character. The chance of replacement is `0.1 * intensity`, so the useful range
/// of `intensity` is `1..=3` (anything at or above 10 replaces every character).
///
/// Escape sequences (from [`ESC`] through the terminating `m`, or to the end of the
/// string) are copied verbatim and never corrupted. An `intensity` of 0 returns the
/// input unchanged without touching `rng`.
pub fn glitch(text: &str, intensity: u8, rng: &mut impl Rng) -> String {
    if intensity == 0 {
        return text.to_string();
    }

    let probability = GLITCH_PROBABILITY_PER_LEVEL * f64::from(intensity);
    let mut acc = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            acc.push(ch);
            for it in chars.by_ref() {
                acc.push(it);
                if it == SGR_TERMINATOR {
                    break;
                }
            }
            continue;
        }

        if rng.random::<f64>() < probability {
            acc.push(char::from(rng.random_range(GLITCH_CHAR_RANGE)));
        } else {
            acc.push(ch);
        }
    }

    acc
}
