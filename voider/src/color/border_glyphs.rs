// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// You can get the unicode symbols for the drawings here:
// - <https://symbl.cc/en/unicode/blocks/box-drawing/>

use std::env;

/// Where a line sits in the block of lines that gets a border around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePosition {
    Top,
    Side,
    Bottom,
}

impl LinePosition {
    /// The first line is [`LinePosition::Top`] (even if it is also the last one), the
    /// last line is [`LinePosition::Bottom`], and everything in between is
    /// [`LinePosition::Side`].
    #[must_use]
    pub fn of(index: usize, total_lines: usize) -> Self {
        if index == 0 {
            LinePosition::Top
        } else if index + 1 == total_lines {
            LinePosition::Bottom
        } else {
            LinePosition::Side
        }
    }
}

/// The two sets of glyphs used to draw borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderGlyphs {
    /// Box drawing characters: `┌ ┐`, `│ │`, `└ ┘`.
    #[default]
    Unicode,
    /// Plain ASCII: `+ +`, `| |`, `+ +`.
    Ascii,
}

impl BorderGlyphs {
    /// Pick the glyphs that the current console is likely to render. The Windows console
    /// does not reliably draw box drawing characters with its default code page.
    #[must_use]
    pub fn detect() -> Self {
        if env::consts::OS == "windows" {
            BorderGlyphs::Ascii
        } else {
            BorderGlyphs::Unicode
        }
    }

    /// Glyph (with its trailing space) that goes before the content.
    #[rustfmt::skip]
    #[must_use]
    pub fn left(self, position: LinePosition) -> &'static str {
        match (self, position) {
            (BorderGlyphs::Unicode, LinePosition::Top)    => "\u{250c} ",
            (BorderGlyphs::Unicode, LinePosition::Side)   => "\u{2502} ",
            (BorderGlyphs::Unicode, LinePosition::Bottom) => "\u{2514} ",
            (BorderGlyphs::Ascii, LinePosition::Side)     => "| ",
            (BorderGlyphs::Ascii, LinePosition::Top | LinePosition::Bottom) => "+ ",
        }
    }

    /// Glyph (with its leading space) that goes after the content.
    #[rustfmt::skip]
    #[must_use]
    pub fn right(self, position: LinePosition) -> &'static str {
        match (self, position) {
            (BorderGlyphs::Unicode, LinePosition::Top)    => " \u{2510}",
            (BorderGlyphs::Unicode, LinePosition::Side)   => " \u{2502}",
            (BorderGlyphs::Unicode, LinePosition::Bottom) => " \u{2518}",
            (BorderGlyphs::Ascii, LinePosition::Side)     => " |",
            (BorderGlyphs::Ascii, LinePosition::Top | LinePosition::Bottom) => " +",
        }
    }
}
