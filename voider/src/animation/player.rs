// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use rand::Rng;
use unicode_segmentation::UnicodeSegmentation as _;

use super::{Effect, Frame};
use crate::{CommonResult, LineDisplay, Sleeper};

/// How animated lines are paced and shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSettings {
    /// Per-frame delay. Zero disables animation.
    pub delay: Duration,
    /// `None` writes each line once, without frames.
    pub effect: Option<Effect>,
    /// Fade the last line out after it has been revealed.
    pub fade: bool,
}

/// Draw each frame over the current line: clear, write, flush, then hold.
///
/// # Errors
///
/// Returns an error if the display can't be written to.
pub fn play_frames<D: LineDisplay + ?Sized>(
    display: &mut D,
    sleeper: &mut impl Sleeper,
    frames: impl Iterator<Item = Frame>,
) -> CommonResult<()> {
    for frame in frames {
        display.clear_line()?;
        display.write_text(&frame.text)?;
        display.flush()?;
        sleeper.sleep(frame.hold);
    }
    Ok(())
}

/// Reveal `text` on the current line. Does not end the line.
///
/// - With a zero `delay` the text is written once.
/// - With no effect the text is written once.
///
/// # Errors
///
/// Returns an error if the display can't be written to.
pub fn reveal_line<D: LineDisplay + ?Sized>(
    display: &mut D,
    sleeper: &mut impl Sleeper,
    text: &str,
    delay: Duration,
    effect: Option<Effect>,
    rng: &mut impl Rng,
) -> CommonResult<()> {
    match effect {
        Some(effect) if !delay.is_zero() => {
            play_frames(display, sleeper, effect.frames(text, delay, rng))?;
        }
        _ => display.write_text(text)?,
    }
    display.flush()
}

/// [`reveal_line`], then end the line.
///
/// # Errors
///
/// Returns an error if the display can't be written to.
pub fn animate_line<D: LineDisplay + ?Sized>(
    display: &mut D,
    sleeper: &mut impl Sleeper,
    text: &str,
    delay: Duration,
    effect: Option<Effect>,
    rng: &mut impl Rng,
) -> CommonResult<()> {
    reveal_line(display, sleeper, text, delay, effect, rng)?;
    display.new_line()?;
    display.flush()
}

/// Erase `text`, which is on the current line, one cluster at a time from the right.
/// Pauses `delay * 3` first, then shows `text[0..j]` for `j` from `n` down to `0`,
/// each held `delay / 2`, and leaves the line cleared.
///
/// # Errors
///
/// Returns an error if the display can't be written to.
pub fn fade_out<D: LineDisplay + ?Sized>(
    display: &mut D,
    sleeper: &mut impl Sleeper,
    text: &str,
    delay: Duration,
) -> CommonResult<()> {
    let clusters: Vec<&str> = text.graphemes(true).collect();
    let hold = delay / 2;

    sleeper.sleep(delay * 3);
    let frames = (0..=clusters.len())
        .rev()
        .map(|j| Frame::new(clusters[..j].concat(), hold));
    play_frames(display, sleeper, frames)?;

    display.clear_line()?;
    display.flush()
}

/// The pause between two successive animated lines.
pub fn inter_line_pause(sleeper: &mut impl Sleeper, delay: Duration) {
    sleeper.sleep(delay * 2);
}

/// Animate every line in order, pausing between lines. Every line ends with a newline.
/// When fading is enabled, a copy of the last line is faded out on the fresh line below
/// it, and that line is left cleared.
///
/// # Errors
///
/// Returns an error if the display can't be written to.
pub fn animate_lines<D: LineDisplay + ?Sized>(
    display: &mut D,
    sleeper: &mut impl Sleeper,
    lines: &[String],
    settings: AnimationSettings,
    rng: &mut impl Rng,
) -> CommonResult<()> {
    let AnimationSettings {
        delay,
        effect,
        fade,
    } = settings;

    for (index, line) in lines.iter().enumerate() {
        let is_last = index + 1 == lines.len();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Animating line", index, effect = ?effect, is_last);

        animate_line(display, sleeper, line, delay, effect, rng)?;

        if is_last && fade {
            fade_out(display, sleeper, line, delay)?;
        }

        if !is_last {
            inter_line_pause(sleeper, delay);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;
    use crate::{AnsiLineDisplay,
                test_fixtures::{RecordingSleeper, StdoutMock}};

    const DELAY: Duration = Duration::from_millis(10);

    fn ms(it: u64) -> Duration { Duration::from_millis(it) }

    #[test]
    fn test_typewriter_draws_every_frame() {
        let stdout_mock = StdoutMock::default();
        let mut display = AnsiLineDisplay::new(stdout_mock.clone());
        let mut sleeper = RecordingSleeper::default();
        let mut rng = StdRng::seed_from_u64(0);

        animate_line(
            &mut display,
            &mut sleeper,
            "hi",
            DELAY,
            Some(Effect::Typewriter),
            &mut rng,
        )
        .unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\r\x1b[K\r\x1b[Kh\r\x1b[Khi\n"
        );
        assert_eq!(sleeper.sleeps, vec![DELAY; 3]);
    }

    #[test]
    fn test_zero_delay_writes_once() {
        let stdout_mock = StdoutMock::default();
        let mut display = AnsiLineDisplay::new(stdout_mock.clone());
        let mut sleeper = RecordingSleeper::default();
        let mut rng = StdRng::seed_from_u64(0);

        animate_line(
            &mut display,
            &mut sleeper,
            "void",
            Duration::ZERO,
            Some(Effect::Scan),
            &mut rng,
        )
        .unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "void\n");
        assert!(sleeper.sleeps.is_empty());
    }

    #[test]
    fn test_no_effect_writes_once() {
        let stdout_mock = StdoutMock::default();
        let mut display = AnsiLineDisplay::new(stdout_mock.clone());
        let mut sleeper = RecordingSleeper::default();
        let mut rng = StdRng::seed_from_u64(0);

        animate_line(&mut display, &mut sleeper, "void", DELAY, None, &mut rng).unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "void\n");
        assert!(sleeper.sleeps.is_empty());
    }

    #[test]
    fn test_fade_out() {
        let stdout_mock = StdoutMock::default();
        let mut display = AnsiLineDisplay::new(stdout_mock.clone());
        let mut sleeper = RecordingSleeper::default();

        fade_out(&mut display, &mut sleeper, "ab", ms(20)).unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\r\x1b[Kab\r\x1b[Ka\r\x1b[K\r\x1b[K"
        );
        assert_eq!(sleeper.sleeps, vec![ms(60), ms(10), ms(10), ms(10)]);
    }

    #[test]
    fn test_animate_lines_pauses_between_lines_only() {
        let stdout_mock = StdoutMock::default();
        let mut display = AnsiLineDisplay::new(stdout_mock.clone());
        let mut sleeper = RecordingSleeper::default();
        let mut rng = StdRng::seed_from_u64(0);
        let settings = AnimationSettings {
            delay: DELAY,
            effect: Some(Effect::Typewriter),
            fade: false,
        };
        let lines = vec!["a".to_string(), "b".to_string()];

        animate_lines(&mut display, &mut sleeper, &lines, settings, &mut rng).unwrap();

        // 2 frames for "a", the pause, 2 frames for "b".
        assert_eq!(sleeper.sleeps, vec![DELAY, DELAY, DELAY * 2, DELAY, DELAY]);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\r\x1b[K\r\x1b[Ka\n\r\x1b[K\r\x1b[Kb\n"
        );
    }

    #[test]
    fn test_animate_lines_fades_copy_below_last_line() {
        let stdout_mock = StdoutMock::default();
        let mut display = AnsiLineDisplay::new(stdout_mock.clone());
        let mut sleeper = RecordingSleeper::default();
        let mut rng = StdRng::seed_from_u64(0);
        let settings = AnimationSettings {
            delay: ms(20),
            effect: Some(Effect::Typewriter),
            fade: true,
        };
        let lines = vec!["x".to_string(), "ab".to_string()];

        animate_lines(&mut display, &mut sleeper, &lines, settings, &mut rng).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string();
        // Both lines stay on screen, each ended by a newline.
        assert!(output.starts_with("\r\x1b[K\r\x1b[Kx\n"), "{output:?}");
        assert!(
            output.contains("\r\x1b[K\r\x1b[Ka\r\x1b[Kab\n"),
            "{output:?}"
        );
        // The fade runs on the next line and leaves it cleared.
        assert!(
            output.ends_with("ab\n\r\x1b[Kab\r\x1b[Ka\r\x1b[K\r\x1b[K"),
            "{output:?}"
        );
        assert_eq!(output.matches('\n').count(), 2);
        assert_eq!(
            sleeper.sleeps,
            vec![
                ms(20),
                ms(20),
                ms(40),
                ms(20),
                ms(20),
                ms(20),
                ms(60),
                ms(10),
                ms(10),
                ms(10),
            ]
        );
    }

    #[test]
    fn test_random_reveal_ends_on_the_text() {
        let stdout_mock = StdoutMock::default();
        let mut display = AnsiLineDisplay::new(stdout_mock.clone());
        let mut sleeper = RecordingSleeper::default();
        let mut rng = StdRng::seed_from_u64(9);

        animate_line(
            &mut display,
            &mut sleeper,
            "void",
            DELAY,
            Some(Effect::RandomReveal),
            &mut rng,
        )
        .unwrap();

        assert!(stdout_mock.get_copy_of_buffer_as_string().ends_with("void\n"));
        assert_eq!(sleeper.sleeps.len(), 4);
        assert_eq!(sleeper.total(), DELAY * 8);
    }
}
