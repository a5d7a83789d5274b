// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_appender::rolling::RollingFileAppender;

use crate::{CommonResult, VoiderError};

/// Create (or append to) the log file at `path_str`. The file is never rotated.
///
/// Note that if you wrap this up in a non blocking writer, the guard has to be kept
/// alive for the whole run, otherwise nothing gets written.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(path_str: &str) -> CommonResult<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let log_file_path_error = || VoiderError::LogFilePath {
        path: path.display().to_string(),
    };

    let parent = path.parent().ok_or_else(log_file_path_error)?;
    let file_name = path.file_name().ok_or_else(log_file_path_error)?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
