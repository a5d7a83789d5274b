// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Case conversion and reversal. Only ASCII letters change case, everything else
//! (including multi-byte characters) is copied through as is.

/// Per-character ASCII upper-casing.
#[must_use]
pub fn to_upper(text: &str) -> String { text.to_ascii_uppercase() }

/// Per-character ASCII lower-casing.
#[must_use]
pub fn to_lower(text: &str) -> String { text.to_ascii_lowercase() }

/// Upper-case the first character and lower-case all the characters after it. This is
/// not title-case: `"hello world"` becomes `"Hello world"`.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut acc = String::with_capacity(text.len());
            acc.push(first.to_ascii_uppercase());
            acc.extend(chars.map(|it| it.to_ascii_lowercase()));
            acc
        }
    }
}

/// Reverse the sequence of characters. Applying it twice gives back the input.
#[must_use]
pub fn reverse_str(text: &str) -> String { text.chars().rev().collect() }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("VOID", "Void")]
    #[test_case("", "")]
    #[test_case("hELLO wORLD", "Hello world")]
    #[test_case("x", "X")]
    #[test_case("1abc", "1abc")]
    fn test_capitalize(input: &str, expected: &str) {
        assert_eq!(capitalize(input), expected);
    }

    #[test]
    fn test_upper_and_lower_are_ascii_only() {
        assert_eq!(to_upper("abc-é"), "ABC-é");
        assert_eq!(to_lower("ABC-É"), "abc-É");
        assert_eq!(to_upper(""), "");
    }

    #[test_case("" ; "empty")]
    #[test_case("a" ; "single")]
    #[test_case("void" ; "ascii")]
    #[test_case("┌ x ┐" ; "box drawing")]
    #[test_case("a\u{301}b" ; "combining mark")]
    fn test_reverse_is_an_involution(input: &str) {
        assert_eq!(reverse_str(&reverse_str(input)), input);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_str("void"), "diov");
    }
}
