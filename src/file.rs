use crate::types::entry::MaidataEntry;
use std::fmt;

/// An ordered maidata document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaidataFile {
    pub entries: Vec<MaidataEntry>,
}

impl Default for MaidataFile {
    fn default() -> Self {
        Self::new()
    }
}

impl MaidataFile {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries(entries: Vec<MaidataEntry>) -> Self {
        Self { entries }
    }

    /// Sets `key` to `value`. A key seen before keeps its original position.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.value = value.to_string(),
            None => self.entries.push(MaidataEntry::new(key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn note_tracks<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a MaidataEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.is_note_track(prefix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for MaidataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_maidata;
    use crate::types::entry::NOTE_TRACK_PREFIX;

    #[test]
    fn test_display_preserves_order() {
        let file = parse_maidata("&title=T\n&wholebpm=120\n&inote_2={4}1,\n&lv_2=5");
        assert_eq!(
            file.to_string(),
            "&title=T\n&wholebpm=120\n&inote_2={4}1,\n&lv_2=5\n"
        );
        assert_eq!(
            file.keys().collect::<Vec<_>>(),
            vec!["&title", "&wholebpm", "&inote_2", "&lv_2"]
        );
    }

    #[test]
    fn test_insert_and_get() {
        let mut file = MaidataFile::new();
        file.insert("&a", "1");
        file.insert("&b", "2");
        file.insert("&a", "3");
        assert_eq!(file.len(), 2);
        assert_eq!(file.get("&a"), Some("3"));
        assert_eq!(file.get("&c"), None);
        assert_eq!(file.to_string(), "&a=3\n&b=2\n");
    }

    #[test]
    fn test_note_tracks() {
        let file = parse_maidata("&inote_1={4}1,\n&lv_1=3\n&inote_6={1},");
        let keys: Vec<_> = file
            .note_tracks(NOTE_TRACK_PREFIX)
            .map(|entry| entry.key.as_str())
            .collect();
        assert_eq!(keys, vec!["&inote_1", "&inote_6"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(MaidataFile::new().to_string(), "");
    }
}
