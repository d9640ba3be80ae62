pub mod align;
pub mod reduce;

use crate::error::FormatErrorKind;
use crate::segment_parser::split_segments;
use crate::types::entry::NOTE_TRACK_PREFIX;
use crate::types::segment::Segment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Entries whose key starts with this prefix are rewritten, all others are copied.
    pub note_track_prefix: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            note_track_prefix: NOTE_TRACK_PREFIX.to_string(),
        }
    }
}

/// Rewrites one note-track value with every beat at its minimal subdivision.
///
/// Markers are copied verbatim; each rhythm block is aligned, then reduced
/// window by window.
pub fn format_note_track(value: &str) -> Result<String, FormatErrorKind> {
    let mut output = String::with_capacity(value.len());

    for segment in split_segments(value) {
        match segment {
            Segment::Marker(text) => output.push_str(&text),
            Segment::Rhythm(block) => {
                let timeline = align::align_block(&block)?;
                for record in reduce::reduce(&timeline) {
                    output.push_str(&record.to_string());
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedTrack;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marker_passthrough() {
        assert_eq!(
            format_note_track("(bpm 120){4}a,b,c,d,").unwrap(),
            "(bpm 120){4}a,b,c,d,\n"
        );
    }

    #[test]
    fn test_reduces_each_block() {
        let value = "(120){8}1,,2,,3,,4,,\n(180){16}5,,,,,,,,6,,,,,,,,";
        assert_eq!(
            format_note_track(value).unwrap(),
            "(120){4}1,2,3,4,\n(180){2}5,6,\n"
        );
    }

    #[test]
    fn test_multiline_block() {
        let value = "(150){4}1,\n2,\n{8}3,4,\n5,6,";
        assert_eq!(
            format_note_track(value).unwrap(),
            "(150){8}1,,2,,3,4,5,6,\n"
        );
    }

    #[test]
    fn test_marker_without_tag_fails() {
        assert_eq!(
            format_note_track("(150){4}1,2,(160)3,4,"),
            Err(FormatErrorKind::MalformedTrack(
                MalformedTrack::MissingSubdivision("3,4,".to_string())
            ))
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(format_note_track("").unwrap(), "");
    }

    #[test]
    fn test_default_options() {
        assert_eq!(FormatOptions::default().note_track_prefix, "&inote");
    }
}
