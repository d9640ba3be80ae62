use std::fmt;

/// One piece of a note-track value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Parenthesised literal such as `(120)`, kept with its parentheses.
    Marker(String),
    /// Text between markers, line breaks already removed.
    Rhythm(String),
}

impl Segment {
    pub fn is_marker(&self) -> bool {
        matches!(self, Segment::Marker(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Segment::Marker(text) | Segment::Rhythm(text) => text,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phrases governed by a single `{n}` subdivision tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdivisionChunk<'a> {
    pub resolution: usize,
    pub text: &'a str,
}

/// A rhythm block split on its subdivision tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubdivisionBlock<'a> {
    /// Whatever precedes the first tag.
    pub leading: &'a str,
    pub chunks: Vec<SubdivisionChunk<'a>>,
}

impl SubdivisionBlock<'_> {
    pub fn resolutions(&self) -> Vec<usize> {
        self.chunks.iter().map(|chunk| chunk.resolution).collect()
    }
}
