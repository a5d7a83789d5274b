// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>

/// The escape character that introduces every ANSI escape sequence.
pub const ESC: char = '\x1b';

/// Second character of a CSI sequence, right after [`ESC`].
pub const CSI_BRACKET: char = '[';

/// Remove every CSI escape sequence (eg: `\x1b[31m`) from `text`.
///
/// A sequence starts with [`ESC`] followed by [`CSI_BRACKET`], and runs up to and
/// including the first ASCII alphabetic character. An [`ESC`] that isn't followed by
/// [`CSI_BRACKET`] is kept. A sequence that is cut off at the end of the string is
/// dropped along with everything after it.
#[must_use]
pub fn strip_color_codes(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC && chars.peek() == Some(&CSI_BRACKET) {
            chars.next();
            for it in chars.by_ref() {
                if it.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            acc.push(ch);
        }
    }

    acc
}
