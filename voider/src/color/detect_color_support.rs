// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// Global variable which can be used to:
/// 1. Override the color support.
/// 2. Skip the environment lookup in tests.
///
/// This is a global variable because the answer really depends on the environment the
/// process runs in, not on any one caller.
pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering,
                examine_env_vars_to_determine_color_support};

    static COLOR_SUPPORT_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// This is the main function that is used to determine whether color is supported.
    ///
    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise, the value will be determined calling
    ///   [`examine_env_vars_to_determine_color_support`].
    #[must_use]
    pub fn detect() -> ColorSupport {
        match try_get_override() {
            Ok(it) => it,
            Err(()) => examine_env_vars_to_determine_color_support(),
        }
    }

    /// Override the color support. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
    /// function. In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_GLOBAL.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() { COLOR_SUPPORT_GLOBAL.store(NOT_SET_VALUE, Ordering::SeqCst); }

    /// Get the color support override value.
    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise, an error will be returned.
    ///
    /// # Errors
    ///
    /// Returns `Err(())` when no override is set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_GLOBAL.load(Ordering::SeqCst))
    }
}

/// Determine whether color is supported heuristically. This is based on the environment
/// variables and on whether stdout, the only stream `voider` draws on, is a terminal.
#[must_use]
pub fn examine_env_vars_to_determine_color_support() -> ColorSupport {
    if env_no_color()
        || env::var("TERM").as_deref() == Ok("dumb")
        || !(stdout_is_a_tty()
            || env::var("IGNORE_IS_TERMINAL").is_ok_and(|it| it != "0"))
    {
        return ColorSupport::NoColor;
    }

    if env::consts::OS == "windows"
        || env::var("COLORTERM").is_ok()
        || env::var("TERM").is_ok_and(|term| check_ansi_color(&term))
        || env::var("CLICOLOR").is_ok_and(|it| it != "0")
        || is_ci::uncached()
    {
        return ColorSupport::Ansi;
    }

    ColorSupport::NoColor
}

/// The result of the color support check. `voider` only ever emits the basic 8 color
/// SGR codes, so the only question is whether to emit them at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Ansi,
    NoColor,
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    use super::ColorSupport;

    impl TryFrom<i8> for ColorSupport {
        type Error = ();

        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(ColorSupport::Ansi),
                2 => Ok(ColorSupport::NoColor),
                _ => Err(()),
            }
        }
    }

    impl From<ColorSupport> for i8 {
        fn from(value: ColorSupport) -> Self {
            match value {
                ColorSupport::Ansi => 1,
                ColorSupport::NoColor => 2,
            }
        }
    }
}

mod helpers {
    use std::io::IsTerminal as _;

    use super::env;

    #[must_use]
    pub fn stdout_is_a_tty() -> bool { std::io::stdout().is_terminal() }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }

    #[must_use]
    pub fn env_no_color() -> bool {
        match env::var("NO_COLOR").as_deref() {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }
}
pub use helpers::*;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn cycle_1() {
        global_color_support::set_override(ColorSupport::Ansi);
        assert_eq!(
            global_color_support::try_get_override(),
            Ok(ColorSupport::Ansi)
        );
        assert_eq!(global_color_support::detect(), ColorSupport::Ansi);
        global_color_support::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_2() {
        global_color_support::set_override(ColorSupport::NoColor);
        assert_eq!(global_color_support::detect(), ColorSupport::NoColor);
        global_color_support::clear_override();
        assert_eq!(global_color_support::try_get_override(), Err(()));
    }

    #[test]
    #[serial]
    fn test_no_color_env_var_wins() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("IGNORE_IS_TERMINAL", "1");
            std::env::set_var("COLORTERM", "truecolor");
            let result = examine_env_vars_to_determine_color_support();
            assert_eq!(result, ColorSupport::NoColor);
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("IGNORE_IS_TERMINAL");
            std::env::remove_var("COLORTERM");
        }
    }

    #[test]
    #[serial]
    fn test_ignore_is_terminal_skips_stdout_check() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("TERM", "xterm-256color");
            std::env::set_var("IGNORE_IS_TERMINAL", "1");
            let result = examine_env_vars_to_determine_color_support();
            assert_eq!(result, ColorSupport::Ansi);
            std::env::remove_var("IGNORE_IS_TERMINAL");
        }
    }

    #[test]
    fn test_check_ansi_color() {
        assert!(check_ansi_color("xterm-256color"));
        assert!(check_ansi_color("linux"));
        assert!(!check_ansi_color("dumb"));
    }

    #[test]
    fn test_i8_round_trip() {
        for it in [ColorSupport::Ansi, ColorSupport::NoColor] {
            assert_eq!(ColorSupport::try_from(i8::from(it)), Ok(it));
        }
        assert_eq!(ColorSupport::try_from(-1), Err(()));
    }
}
