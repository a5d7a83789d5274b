// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic as _;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt as _, registry::LookupSpan,
                         util::SubscriberInitExt as _};

use super::rolling_file_appender_impl;
use crate::CommonResult;

/// Where `--enable-logging` sends its output. Relative to the current folder.
pub const LOG_FILE_PATH: &str = "log.txt";

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// This erases the concrete type of the writer, and returns a boxed layer that writes
/// to the file at `path_str`, without color escapes.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    path_str: &str,
) -> CommonResult<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file = rolling_file_appender_impl::try_create(path_str)?;
    Ok(Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    ))
}

/// Route all `tracing` events at or above `level_filter` to the file at `path_str`, for
/// the rest of the process. Display output never goes through `tracing`, so the two
/// never interleave.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(
    level_filter: LevelFilter,
    path_str: &str,
) -> CommonResult<()> {
    let layer = try_create_file_layer(level_filter, path_str)?;
    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .into_diagnostic()
}
