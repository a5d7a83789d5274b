// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

/// The 8 color (3 bit) foreground palette entries that `voider` paints with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum AnsiColor {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl AnsiColor {
    /// SGR parameter that sets this color as the foreground.
    #[rustfmt::skip]
    #[must_use]
    pub fn fg_code(self) -> u8 {
        match self {
            AnsiColor::Red     => 31,
            AnsiColor::Green   => 32,
            AnsiColor::Yellow  => 33,
            AnsiColor::Blue    => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan    => 36,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Foreground(AnsiColor),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset             => write!(f, "{CSI}0{SGR}"),
                SgrCode::Foreground(color) => write!(f, "{CSI}{}{SGR}", color.fg_code()),
            }
        }
    }
}

/// Wrap `text` in `color`, followed by a reset.
#[must_use]
pub fn paint(text: &str, color: AnsiColor) -> String {
    format!("{}{text}{}", SgrCode::Foreground(color), SgrCode::Reset)
}
