// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lolcat-style rainbow, the cheap way: each grapheme cluster gets the next color from
//! a fixed 6 color cycle, and every line starts the cycle at a different phase.

use std::fmt::Write as _;

use unicode_segmentation::UnicodeSegmentation as _;

use super::{AnsiColor, SgrCode};

/// The order in which [`render_rainbow`] cycles through the colors.
pub const RAINBOW: [AnsiColor; 6] = [
    AnsiColor::Red,
    AnsiColor::Yellow,
    AnsiColor::Green,
    AnsiColor::Cyan,
    AnsiColor::Blue,
    AnsiColor::Magenta,
];

/// Returns the `(index mod 6)`-th color of [`RAINBOW`].
#[must_use]
pub fn color_for_index(index: usize) -> AnsiColor { RAINBOW[index % RAINBOW.len()] }

/// Color every grapheme cluster of `text` individually, starting at
/// `color_for_index(offset)`, then reset to the default styling. Callers pass the line
/// index as `offset` so that successive lines are phase shifted.
#[must_use]
pub fn render_rainbow(text: &str, offset: usize) -> String {
    // Each cluster grows by a 5 byte color code; the reset adds 4 more.
    let mut acc = String::with_capacity(text.len() * 6 + 4);
    for (position, cluster) in text.graphemes(true).enumerate() {
        let color = color_for_index(offset + position);
        _ = write!(acc, "{}{cluster}", SgrCode::Foreground(color));
    }
    _ = write!(acc, "{}", SgrCode::Reset);
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount as _, IntoEnumIterator as _};

    use super::*;
    use crate::strip_color_codes;

    #[test]
    fn test_rainbow_covers_every_color_once() {
        assert_eq!(RAINBOW.len(), AnsiColor::COUNT);
        for color in AnsiColor::iter() {
            assert!(RAINBOW.contains(&color), "{color:?}");
        }
    }

    #[test]
    fn test_color_for_index_cycles() {
        assert_eq!(color_for_index(0), AnsiColor::Red);
        assert_eq!(color_for_index(5), AnsiColor::Magenta);
        assert_eq!(color_for_index(6), AnsiColor::Red);
        assert_eq!(color_for_index(13), AnsiColor::Yellow);
    }

    #[test]
    fn test_render_rainbow() {
        assert_eq!(
            render_rainbow("ab", 0),
            "\x1b[31ma\x1b[33mb\x1b[0m".to_string()
        );
        assert_eq!(
            render_rainbow("ab", 5),
            "\x1b[35ma\x1b[31mb\x1b[0m".to_string()
        );
    }

    #[test]
    fn test_render_rainbow_empty_is_just_reset() {
        assert_eq!(render_rainbow("", 3), "\x1b[0m");
    }

    #[test]
    fn test_render_rainbow_strips_back_to_input() {
        let input = "rainbow | wobniar";
        assert_eq!(strip_color_codes(&render_rainbow(input, 2)), input);
    }
}
