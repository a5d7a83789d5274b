// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Frame generators, one per [`crate::Effect`]. The unit of reveal is the grapheme
//! cluster, so that combining marks and emoji are never split across frames.
//!
//! All generators are lazy, except [`scan_frames`] which builds its (short, `2n + 1`)
//! sequence up front since it needs two passes over the text.

use std::time::Duration;

use rand::Rng;
use unicode_segmentation::UnicodeSegmentation as _;

/// Drawn in place of the cluster that the scan is currently at.
pub const SCAN_MARKER: &str = "#";
/// Drawn in place of clusters that the scan has not reached.
pub const SCAN_UNREACHED: &str = ".";
/// Drawn after the revealed part of a progress bar, and in place of hidden clusters in a
/// random reveal.
pub const PLACEHOLDER: &str = "_";

/// One state of the line, and how long it stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub hold: Duration,
}

impl Frame {
    pub fn new(text: impl Into<String>, hold: Duration) -> Self {
        Self {
            text: text.into(),
            hold,
        }
    }
}

pub type BoxedFrames<'a> = Box<dyn Iterator<Item = Frame> + 'a>;

fn clusters_of(text: &str) -> Vec<&str> { text.graphemes(true).collect() }

/// `text[0..i]` for `i` in `0..=n`.
pub fn typewriter_frames(text: &str, delay: Duration) -> BoxedFrames<'_> {
    let clusters = clusters_of(text);
    let n = clusters.len();
    Box::new((0..=n).map(move |i| Frame::new(clusters[..i].concat(), delay)))
}

/// `text[0..i]` followed by a lookahead of up to `size` more clusters, for `i` in
/// `0..=n`. The lookahead is drawn exactly like the revealed part.
pub fn wave_frames(text: &str, size: usize, delay: Duration) -> BoxedFrames<'_> {
    let clusters = clusters_of(text);
    let n = clusters.len();
    Box::new((0..=n).map(move |i| {
        let revealed = clusters[..i].concat();
        let lookahead = clusters[i..n.min(i + size)].concat();
        Frame::new(revealed + &lookahead, delay)
    }))
}

/// A marker sweeps forward over the line, then back, then the plain text is shown.
/// Produces exactly `2n + 1` frames, each held for `delay / 2`.
#[must_use]
pub fn scan_frames(text: &str, delay: Duration) -> Vec<Frame> {
    let clusters = clusters_of(text);
    let n = clusters.len();
    let hold = delay / 2;

    let frame_with_marker_at = |marker: usize| {
        let mut acc = clusters[..marker].concat();
        acc.push_str(SCAN_MARKER);
        for _ in marker + 1..n {
            acc.push_str(SCAN_UNREACHED);
        }
        Frame::new(acc, hold)
    };

    let mut acc = Vec::with_capacity(2 * n + 1);
    acc.extend((0..n).map(frame_with_marker_at));
    acc.extend((1..=n).rev().map(|i| frame_with_marker_at(i - 1)));
    acc.push(Frame::new(text, hold));
    acc
}

/// A progress bar in `steps` increments: for `i` in `0..=steps`, the first
/// `i * n / steps` clusters followed by [`PLACEHOLDER`] while incomplete. A last frame
/// shows the plain text and is not held.
pub fn progress_frames(text: &str, steps: usize, delay: Duration) -> BoxedFrames<'_> {
    let clusters = clusters_of(text);
    let n = clusters.len();
    let steps = steps.max(1);
    let bar = (0..=steps).map(move |i| {
        let pos = i * n / steps;
        let mut acc = clusters[..pos].concat();
        if pos < n {
            acc.push_str(PLACEHOLDER);
        }
        Frame::new(acc, delay)
    });
    Box::new(bar.chain(std::iter::once(Frame::new(text, Duration::ZERO))))
}

/// For `i` from `n` down to `0`: `n - i` spaces, then `text[0..i]`. The text slides
/// out to the right.
pub fn reverse_reveal_frames(text: &str, delay: Duration) -> BoxedFrames<'_> {
    let clusters = clusters_of(text);
    let n = clusters.len();
    Box::new((0..=n).rev().map(move |i| {
        let mut acc = " ".repeat(n - i);
        acc.push_str(&clusters[..i].concat());
        Frame::new(acc, delay)
    }))
}

/// Starts with a [`PLACEHOLDER`] for every cluster. Each step picks uniformly among the
/// clusters that are still hidden, reveals it, and emits a frame held for `delay * 2`.
/// Emits exactly `n` frames; the last one is the original text.
#[derive(Debug)]
pub struct RandomRevealFrames<'a, R: Rng> {
    clusters: Vec<&'a str>,
    current: Vec<&'a str>,
    hidden: Vec<usize>,
    hold: Duration,
    rng: &'a mut R,
}

impl<'a, R: Rng> RandomRevealFrames<'a, R> {
    pub fn new(text: &'a str, delay: Duration, rng: &'a mut R) -> Self {
        let clusters = clusters_of(text);
        let n = clusters.len();
        Self {
            clusters,
            current: vec![PLACEHOLDER; n],
            hidden: (0..n).collect(),
            hold: delay * 2,
            rng,
        }
    }
}

impl<R: Rng> Iterator for RandomRevealFrames<'_, R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.hidden.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..self.hidden.len());
        let position = self.hidden.swap_remove(pick);
        self.current[position] = self.clusters[position];
        Some(Frame::new(self.current.concat(), self.hold))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.hidden.len(), Some(self.hidden.len()))
    }
}
