// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs::File,
          io::{BufWriter, Write as _},
          path::Path};

use crate::{CommonResult, VoiderError};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Write every line to `path`, each followed by [`LINE_ENDING`]. The file is created,
/// or truncated if it exists.
///
/// # Errors
///
/// - [`VoiderError::OutputFileOpen`] if the file can't be created.
/// - [`VoiderError::OutputFileWrite`] if writing fails part way.
pub fn write_lines_to_file(path: &Path, lines: &[String]) -> CommonResult<()> {
    let file = File::create(path).map_err(|source| VoiderError::OutputFileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let write_error = |source| VoiderError::OutputFileWrite {
        path: path.to_path_buf(),
        source,
    };
    for line in lines {
        write!(writer, "{line}{LINE_ENDING}").map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Saved lines", path = %path.display(), count = lines.len());
    Ok(())
}
