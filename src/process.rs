use crate::error::{FormatError, Result};
use crate::file::MaidataFile;
use crate::parser::parse_maidata;
use crate::transforms::{FormatOptions, format_note_track};
use crate::types::entry::MaidataEntry;

/// Formats maidata text with the default `&inote` prefix.
pub fn format_maidata(contents: &str) -> Result<String> {
    MaidataFormatter::default().format(contents)
}

#[derive(Debug, Clone, Default)]
pub struct MaidataFormatter {
    options: FormatOptions,
}

impl MaidataFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Parses, formats and reassembles a whole document.
    ///
    /// The first failing note track aborts the run; no partial text is returned.
    pub fn format(&self, contents: &str) -> Result<String> {
        let file = parse_maidata(contents);
        Ok(self.format_file(&file)?.to_string())
    }

    pub fn format_file(&self, file: &MaidataFile) -> Result<MaidataFile> {
        let prefix = self.options.note_track_prefix.as_str();
        let mut entries = Vec::with_capacity(file.len());

        for entry in &file.entries {
            if !entry.is_note_track(prefix) {
                entries.push(entry.clone());
                continue;
            }

            log::debug!("Formatting {}", entry.key);
            let value = format_note_track(&entry.value)
                .map_err(|kind| FormatError::new(entry.key.as_str(), kind))?;
            entries.push(MaidataEntry::new(entry.key.as_str(), value));
        }

        log::debug!(
            "Formatted {} entries ({} note tracks)",
            entries.len(),
            file.note_tracks(prefix).count()
        );

        Ok(MaidataFile::from_entries(entries))
    }
}
