// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{repeat, reverse_str, to_lower, to_upper};

/// How each line's content is generated from the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pattern {
    /// Every line is the same repetition of the word.
    #[default]
    Uniform,
    /// Even lines (0 based) are upper-cased, odd lines are lower-cased.
    AlternatingCase,
}

impl Pattern {
    /// Maps the command line pattern number to a [`Pattern`], `None` for anything other
    /// than `1` or `2`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Pattern::Uniform),
            2 => Some(Pattern::AlternatingCase),
            _ => None,
        }
    }
}

/// `word + " | " + reverse_str(word)`.
#[must_use]
pub fn mirror(word: &str) -> String { format!("{word} | {}", reverse_str(word)) }

/// Build the content of line `index` (0 based).
#[must_use]
pub fn build_content_line(
    word: &str,
    repetitions: usize,
    separator: &str,
    pattern: Pattern,
    index: usize,
) -> String {
    match pattern {
        Pattern::Uniform => repeat(word, repetitions, separator),
        Pattern::AlternatingCase if index % 2 == 0 => {
            repeat(&to_upper(word), repetitions, separator)
        }
        Pattern::AlternatingCase => repeat(&to_lower(word), repetitions, separator),
    }
}

/// Build the content of all `lines` lines, in order.
#[must_use]
pub fn build_content_lines(
    word: &str,
    repetitions: usize,
    separator: &str,
    pattern: Pattern,
    lines: usize,
) -> Vec<String> {
    (0..lines)
        .map(|index| build_content_line(word, repetitions, separator, pattern, index))
        .collect()
}
