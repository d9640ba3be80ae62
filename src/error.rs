use thiserror::Error;

/// Error raised while formatting a maidata document.
///
/// Carries the key of the note track that failed, so the message can be
/// shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Track \"{key}\": {kind}")]
pub struct FormatError {
    key: String,
    kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(key: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Key of the note track that could not be formatted.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> &FormatErrorKind {
        &self.kind
    }

    pub fn is_malformed_track(&self) -> bool {
        matches!(self.kind, FormatErrorKind::MalformedTrack(_))
    }
}

/// What went wrong inside a single note track.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("malformed track, {0}")]
    MalformedTrack(#[from] MalformedTrack),
    #[error("subdivision tag {{{tag}}} is not a positive integer")]
    NonIntegerTag { tag: String },
    #[error("common resolution of subdivisions {tags:?} is too large")]
    ResolutionOverflow { tags: Vec<usize> },
    #[error("rhythm block needs {slots} slots at resolution {resolution}, the limit is {limit}")]
    TimelineTooLarge {
        resolution: usize,
        slots: usize,
        limit: usize,
    },
}

/// Structural problems in a rhythm block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTrack {
    #[error("rhythm block \"{0}\" has no subdivision tag")]
    MissingSubdivision(String),
    #[error("\"{0}\" appears before the first subdivision tag")]
    UntaggedPhrases(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = FormatError::new(
            "&inote_1",
            MalformedTrack::MissingSubdivision("1,2,".to_string()).into(),
        );
        assert_eq!(
            err.to_string(),
            "Track \"&inote_1\": malformed track, rhythm block \"1,2,\" has no subdivision tag"
        );
        assert!(err.is_malformed_track());

        let err = FormatError::new(
            "&inote_2",
            FormatErrorKind::NonIntegerTag {
                tag: "#0.5".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Track \"&inote_2\": subdivision tag {#0.5} is not a positive integer"
        );
        assert!(!err.is_malformed_track());
        assert_eq!(err.key(), "&inote_2");
    }
}
