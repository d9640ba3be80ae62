use crate::process::MaidataFormatter;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    Changed,
    Unchanged,
}

/// Reads a maidata file, returning its text (CRLF turned into LF) and the formatted text.
pub fn format_path(path: &Path, formatter: &MaidataFormatter) -> Result<(String, String)> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let contents = normalize_newlines(contents);
    let formatted = formatter
        .format(&contents)
        .with_context(|| format!("Failed to format {}", path.display()))?;
    Ok((contents, formatted))
}

/// Formats a maidata file in place.
///
/// The text is formatted before anything is written, so a failing document
/// leaves the file as it was. An unchanged document is not rewritten.
pub fn rewrite_file(path: &Path, formatter: &MaidataFormatter) -> Result<RewriteOutcome> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let contents = normalize_newlines(contents);

    let formatted = formatter
        .format(&contents)
        .with_context(|| format!("Failed to format {}", path.display()))?;

    if formatted == contents {
        return Ok(RewriteOutcome::Unchanged);
    }

    file.set_len(0)
        .and_then(|_| file.seek(SeekFrom::Start(0)))
        .and_then(|_| file.write_all(formatted.as_bytes()))
        .and_then(|_| file.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(RewriteOutcome::Changed)
}

fn normalize_newlines(contents: String) -> String {
    if contents.contains('\r') {
        contents.replace("\r\n", "\n")
    } else {
        contents
    }
}
