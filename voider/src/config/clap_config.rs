// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://docs.rs/clap/latest/clap/_derive/#overview>
//! - <https://developerlife.com/2023/09/17/tuify-clap/>

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::DisplayBackend;

#[derive(Debug, Parser)]
#[command(bin_name = "voider")]
#[command(about = "Render a word through repetition, color, borders, and animation")]
#[command(version)]
#[command(arg_required_else_help(true))]
#[command(allow_negative_numbers = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  {usage}\n\n{all-args}\n\nEXAMPLES:\n  voider 3 4 void\n  voider -d 50 -e 1 -w 3 3 3 hello\n  voider -a -b -n 4 2 rainbow\n  voider -d 30 -e 2 -f 3 3 matrix\n  voider -g 2 2 5 glitch\n"
)]
pub struct CLIArg {
    /// Number of lines to render (must be positive).
    #[arg(value_name = "lines")]
    pub lines: i64,

    /// Number of times the word is repeated on each line (must be positive).
    #[arg(value_name = "repetitions")]
    pub repetitions: i64,

    /// The word to render.
    #[arg(value_name = "word", default_value = "")]
    pub word: String,

    #[command(flatten)]
    pub text_options: TextOption,

    #[command(flatten)]
    pub animation_options: AnimationOption,

    #[command(flatten)]
    pub visual_options: VisualOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
#[command(next_help_heading = "Text options")]
pub struct TextOption {
    #[arg(long, short = 'u', help = "Convert to UPPERCASE")]
    pub uppercase: bool,

    #[arg(long, short = 'l', help = "Convert to lowercase")]
    pub lowercase: bool,

    #[arg(long, short = 'c', help = "Capitalize the first letter")]
    pub capitalize: bool,

    #[arg(long, short = 'r', help = "Reverse the word")]
    pub reverse: bool,

    #[arg(
        long,
        short = 's',
        value_name = "text",
        default_value = " ",
        help = "Separator between repetitions"
    )]
    pub separator: String,

    #[arg(
        long,
        short = 'p',
        value_name = "n",
        help = "Pattern: 1 normal, 2 alternating case by line"
    )]
    pub pattern: Option<i64>,
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Appearance effects")]
pub struct AnimationOption {
    #[arg(
        long,
        short = 'd',
        value_name = "ms",
        help = "Delay between characters; 0 prints without animation"
    )]
    pub delay: Option<i64>,

    #[arg(
        long,
        short = 'e',
        value_name = "n",
        help = "Effect: 0 typewriter, 1 wave, 2 scan, 3 progress, 4 reverse, 5 random reveal"
    )]
    pub effect: Option<i64>,

    #[arg(
        long,
        short = 'w',
        value_name = "size",
        help = "Wave size for effect 1, or number of steps for effect 3"
    )]
    pub wave: Option<i64>,

    #[arg(long, short = 'f', help = "Fade out at the end")]
    pub fade: bool,
}

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
#[command(next_help_heading = "Visual effects")]
pub struct VisualOption {
    #[arg(long, short = 'b', help = "Add a border")]
    pub border: bool,

    #[arg(long, help = "Draw the border with ASCII characters only")]
    pub ascii_border: bool,

    #[arg(long, short = 'n', help = "Number the lines")]
    pub number: bool,

    #[arg(long, short = 'a', help = "Rainbow text")]
    pub rainbow: bool,

    #[arg(
        long,
        short = 'g',
        value_name = "n",
        help = "Glitch effect, intensity 1 to 3"
    )]
    pub glitch: Option<i64>,

    #[arg(long, short = 'm', help = "Mirror display")]
    pub mirror: bool,
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Additional")]
pub struct GlobalOption {
    #[arg(long, short = 'o', value_name = "file", help = "Save the result to a file")]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "u64",
        help = "Seed the random source used by glitch and random reveal"
    )]
    pub seed: Option<u64>,

    #[arg(
        long,
        value_enum,
        default_value_t = DisplayBackend::Auto,
        help = "How animated lines get redrawn in the terminal"
    )]
    pub backend: DisplayBackend,

    #[arg(long, help = "Log app output to a file named `log.txt` for debugging")]
    pub enable_logging: bool,
}
