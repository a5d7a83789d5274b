// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Upper bound on the up front allocation. Longer results grow as they are built.
const MAX_PRESIZE_BYTES: usize = 1 << 20;

/// Join `times` copies of `text` with `separator` between each pair (never after the
/// last one). Returns an empty string when `times` is 0.
#[must_use]
pub fn repeat(text: &str, times: usize, separator: &str) -> String {
    if times == 0 {
        return String::new();
    }

    let capacity = joined_len(text.len(), times, separator.len());
    let mut acc = String::with_capacity(capacity.min(MAX_PRESIZE_BYTES));
    for index in 0..times {
        if index > 0 {
            acc.push_str(separator);
        }
        acc.push_str(text);
    }
    acc
}

/// Byte length of `times` pieces joined by separators, saturating at `usize::MAX`.
fn joined_len(text_len: usize, times: usize, separator_len: usize) -> usize {
    text_len
        .saturating_mul(times)
        .saturating_add(separator_len.saturating_mul(times.saturating_sub(1)))
}
