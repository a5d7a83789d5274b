// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use crate::{AnsiColor, BorderGlyphs, LinePosition, paint, render_rainbow};

/// What gets drawn around (and on) the content of every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineDecoration {
    pub with_number: bool,
    pub with_border: bool,
    pub with_rainbow: bool,
    pub glyphs: BorderGlyphs,
}

impl LineDecoration {
    /// The same decoration without the rainbow. File output and animation never carry
    /// color escapes in the content.
    #[must_use]
    pub fn without_rainbow(self) -> Self {
        Self {
            with_rainbow: false,
            ..self
        }
    }
}

/// Assemble the display line for line `index` out of `total_lines`:
///
/// 1. `"{index + 1}: "` if numbered.
/// 2. The positional left border glyph.
/// 3. The content, rainbow rendered starting at color `index`.
/// 4. A space, then the positional right border glyph.
#[must_use]
pub fn compose(
    index: usize,
    total_lines: usize,
    content: &str,
    decoration: LineDecoration,
) -> String {
    let position = LinePosition::of(index, total_lines);
    let mut acc = String::new();

    if decoration.with_number {
        _ = write!(acc, "{}: ", index + 1);
    }
    if decoration.with_border {
        acc.push_str(decoration.glyphs.left(position));
    }
    push_content(&mut acc, content, index, decoration.with_rainbow);
    if decoration.with_border {
        acc.push(' ');
        acc.push_str(decoration.glyphs.right(position));
    }

    acc
}

/// Same layout as [`compose`], with the number prefix painted yellow and the border
/// glyphs painted cyan. Used when printing straight to a terminal that takes color.
#[must_use]
pub fn compose_styled(
    index: usize,
    total_lines: usize,
    content: &str,
    decoration: LineDecoration,
) -> String {
    let position = LinePosition::of(index, total_lines);
    let mut acc = String::new();

    if decoration.with_number {
        acc.push_str(&paint(&format!("{}: ", index + 1), AnsiColor::Yellow));
    }
    if decoration.with_border {
        acc.push_str(&paint(decoration.glyphs.left(position), AnsiColor::Cyan));
    }
    push_content(&mut acc, content, index, decoration.with_rainbow);
    if decoration.with_border {
        acc.push(' ');
        acc.push_str(&paint(decoration.glyphs.right(position), AnsiColor::Cyan));
    }

    acc
}

fn push_content(acc: &mut String, content: &str, index: usize, with_rainbow: bool) {
    if with_rainbow {
        acc.push_str(&render_rainbow(content, index));
    } else {
        acc.push_str(content);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::strip_color_codes;

    fn decoration(with_number: bool, with_border: bool) -> LineDecoration {
        LineDecoration {
            with_number,
            with_border,
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_content_passes_through() {
        assert_eq!(compose(0, 1, "void void", LineDecoration::default()), "void void");
    }

    #[test]
    fn test_number_prefix_is_one_based() {
        let line = compose(2, 5, "x", decoration(true, false));
        assert!(line.starts_with("3: "), "{line}");
        assert_eq!(line, "3: x");
    }

    #[test]
    fn test_border_uses_positional_glyphs() {
        let lines: Vec<String> = (0..3)
            .map(|index| compose(index, 3, "ab", decoration(false, true)))
            .collect();
        assert_eq!(lines, vec!["┌ ab  ┐", "│ ab  │", "└ ab  ┘"]);
    }

    #[test]
    fn test_single_line_gets_top_glyphs() {
        assert_eq!(compose(0, 1, "ab", decoration(false, true)), "┌ ab  ┐");
    }

    #[test]
    fn test_ascii_border_with_number() {
        let decoration = LineDecoration {
            glyphs: BorderGlyphs::Ascii,
            ..decoration(true, true)
        };
        assert_eq!(compose(1, 3, "ab", decoration), "2: | ab  |");
        assert_eq!(compose(2, 3, "ab", decoration), "3: + ab  +");
    }

    #[test]
    fn test_rainbow_offset_is_the_line_index() {
        let decoration = LineDecoration {
            with_rainbow: true,
            ..Default::default()
        };
        assert_eq!(compose(1, 2, "a", decoration), "\x1b[33ma\x1b[0m");
        assert_eq!(compose(1, 2, "a", decoration.without_rainbow()), "a");
    }

    #[test]
    fn test_styled_paints_number_and_border() {
        let styled = compose_styled(0, 2, "ab", decoration(true, true));
        assert_eq!(
            styled,
            "\x1b[33m1: \x1b[0m\x1b[36m┌ \x1b[0mab \x1b[36m ┐\x1b[0m"
        );
    }

    #[test]
    fn test_styled_strips_back_to_plain() {
        let decoration = LineDecoration {
            with_number: true,
            with_border: true,
            with_rainbow: true,
            glyphs: BorderGlyphs::Unicode,
        };
        for index in 0..3 {
            assert_eq!(
                strip_color_codes(&compose_styled(index, 3, "void", decoration)),
                compose(index, 3, "void", decoration.without_rainbow())
            );
        }
    }
}
