use std::fmt;

/// Key prefix shared by every note-track entry (`&inote_1`, `&inote_5`, ...).
pub const NOTE_TRACK_PREFIX: &str = "&inote";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaidataEntry {
    pub key: String,
    pub value: String,
}

impl MaidataEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_note_track(&self, prefix: &str) -> bool {
        self.key.starts_with(prefix)
    }
}

impl fmt::Display for MaidataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
