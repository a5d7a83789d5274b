// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use rand::Rng;
use strum_macros::EnumCount;

use super::{BoxedFrames, RandomRevealFrames, progress_frames, reverse_reveal_frames,
            scan_frames, typewriter_frames, wave_frames};

pub const DEFAULT_WAVE_SIZE: usize = 3;
pub const DEFAULT_PROGRESS_STEPS: usize = 10;

/// How a line is revealed when it is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount)]
pub enum Effect {
    /// One more cluster per frame.
    Typewriter,
    /// Like [`Effect::Typewriter`], with `size` clusters of lookahead.
    Wave { size: usize },
    /// A marker sweeps over the line and back.
    Scan,
    /// A progress bar in `steps` increments.
    Progress { steps: usize },
    /// The text slides out to the right.
    ReverseReveal,
    /// Clusters appear in random order.
    RandomReveal,
}

impl Effect {
    /// Maps the command line effect number (`0..=5`) to an [`Effect`]. `param` is the
    /// wave size for `1` and the number of steps for `3`; when it is not positive, the
    /// defaults [`DEFAULT_WAVE_SIZE`] and [`DEFAULT_PROGRESS_STEPS`] are used.
    ///
    /// Returns `None` for any other number; such a line is written once, plainly.
    #[rustfmt::skip]
    #[must_use]
    pub fn from_code(effect: i64, param: i64) -> Option<Self> {
        let positive_param = usize::try_from(param).ok().filter(|it| *it > 0);
        match effect {
            0 => Some(Effect::Typewriter),
            1 => Some(Effect::Wave { size: positive_param.unwrap_or(DEFAULT_WAVE_SIZE) }),
            2 => Some(Effect::Scan),
            3 => Some(Effect::Progress { steps: positive_param.unwrap_or(DEFAULT_PROGRESS_STEPS) }),
            4 => Some(Effect::ReverseReveal),
            5 => Some(Effect::RandomReveal),
            _ => None,
        }
    }

    /// The frames that reveal `text`, paced by `delay`.
    pub fn frames<'a, R: Rng>(
        self,
        text: &'a str,
        delay: Duration,
        rng: &'a mut R,
    ) -> BoxedFrames<'a> {
        match self {
            Effect::Typewriter => typewriter_frames(text, delay),
            Effect::Wave { size } => wave_frames(text, size, delay),
            Effect::Scan => Box::new(scan_frames(text, delay).into_iter()),
            Effect::Progress { steps } => progress_frames(text, steps, delay),
            Effect::ReverseReveal => reverse_reveal_frames(text, delay),
            Effect::RandomReveal => Box::new(RandomRevealFrames::new(text, delay, rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng as _, rngs::StdRng};
    use strum::EnumCount as _;
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0, Some(Effect::Typewriter))]
    #[test_case(1, 0, Some(Effect::Wave { size: 3 }) ; "wave default size")]
    #[test_case(1, -4, Some(Effect::Wave { size: 3 }) ; "wave negative size")]
    #[test_case(1, 5, Some(Effect::Wave { size: 5 }))]
    #[test_case(2, 9, Some(Effect::Scan))]
    #[test_case(3, 0, Some(Effect::Progress { steps: 10 }) ; "progress default steps")]
    #[test_case(3, 4, Some(Effect::Progress { steps: 4 }))]
    #[test_case(4, 0, Some(Effect::ReverseReveal))]
    #[test_case(5, 0, Some(Effect::RandomReveal))]
    #[test_case(6, 0, None)]
    #[test_case(-1, 0, None)]
    fn test_from_code(effect: i64, param: i64, expected: Option<Effect>) {
        assert_eq!(Effect::from_code(effect, param), expected);
    }

    #[test]
    fn test_every_variant_has_a_code() {
        let mapped = (0..10).filter_map(|it| Effect::from_code(it, 0)).count();
        assert_eq!(mapped, Effect::COUNT);
    }

    #[test]
    fn test_dispatch_to_frames() {
        let mut rng = StdRng::seed_from_u64(0);
        let delay = Duration::from_millis(10);
        let texts = |effect: Effect, rng: &mut StdRng| -> Vec<String> {
            effect.frames("hi", delay, rng).map(|it| it.text).collect()
        };

        assert_eq!(texts(Effect::Typewriter, &mut rng), vec!["", "h", "hi"]);
        assert_eq!(
            texts(Effect::Scan, &mut rng),
            vec!["#.", "h#", "h#", "#.", "hi"]
        );
        assert_eq!(
            texts(Effect::ReverseReveal, &mut rng),
            vec!["hi", " h", "  "]
        );
        assert_eq!(texts(Effect::RandomReveal, &mut rng).len(), 2);
        assert_eq!(
            texts(Effect::RandomReveal, &mut rng).last().map(String::as_str),
            Some("hi")
        );
    }
}
