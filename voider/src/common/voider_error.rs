// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::path::PathBuf;

use miette::Diagnostic;

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`VoiderError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Errors that can surface to the user of the `voider` binary. The rendering engine
/// itself is infallible, so everything here comes from argument validation or I/O.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum VoiderError {
    #[error("Number of lines and repetitions must be positive (got lines: {lines}, repetitions: {repetitions})")]
    #[diagnostic(
        code(voider::config::invalid_arguments),
        help("Usage: voider [options] <lines> <repetitions> [word]")
    )]
    InvalidArguments { lines: i64, repetitions: i64 },

    #[error("Could not open file {}", path.display())]
    #[diagnostic(
        code(voider::output_file::open),
        help("Check that the parent folder exists and that you have write permissions")
    )]
    OutputFileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write to file {}", path.display())]
    #[diagnostic(code(voider::output_file::write))]
    OutputFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write to the terminal")]
    #[diagnostic(
        code(voider::line_display::io),
        help("The terminal may have been closed, or stdout is a broken pipe")
    )]
    DisplayIo(#[source] std::io::Error),

    #[error("Can't access log file {path}")]
    #[diagnostic(
        code(voider::log::file_path),
        help("It might not exist, or you don't have the required permissions")
    )]
    LogFilePath { path: String },
}
