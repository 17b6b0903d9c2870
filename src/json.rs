// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! JSON output: the records as a pretty-printed array.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::record::TermRecord;

/// Serializes `records` as a JSON array.
pub fn render_json(records: &[TermRecord]) -> Result<String> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

/// Writes [`render_json`] output to `path`.
///
/// # Errors
///
/// [`Error::Json`] if serialization fails, [`Error::Output`] if the file
/// cannot be written.
pub fn write_json(path: impl AsRef<Path>, records: &[TermRecord]) -> Result<()> {
    let path = path.as_ref();
    let text = render_json(records)?;
    fs::write(path, text).map_err(|source| Error::Output {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), records = records.len(), "json written");
    Ok(())
}
