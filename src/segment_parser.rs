use crate::error::FormatErrorKind;
use crate::types::segment::{Segment, SubdivisionBlock, SubdivisionChunk};
use crate::util::strip_line_breaks;

/// Byte range of the leftmost `open ... close` pair with no `close` in between.
fn find_enclosed(text: &str, open: char, close: char) -> Option<(usize, usize)> {
    let start = text.find(open)?;
    let body_start = start + open.len_utf8();
    let body_len = text[body_start..].find(close)?;
    Some((start, body_start + body_len + close.len_utf8()))
}

/// Splits a note-track value into alternating rhythm blocks and markers.
///
/// The result always starts and ends with a (possibly empty) rhythm block,
/// so even indices are [`Segment::Rhythm`] and odd ones [`Segment::Marker`].
pub fn split_segments(value: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = value;

    while let Some((start, end)) = find_enclosed(rest, '(', ')') {
        segments.push(Segment::Rhythm(strip_line_breaks(&rest[..start])));
        segments.push(Segment::Marker(rest[start..end].to_string()));
        rest = &rest[end..];
    }
    segments.push(Segment::Rhythm(strip_line_breaks(rest)));

    segments
}

fn parse_resolution(tag: &str) -> Result<usize, FormatErrorKind> {
    match tag.trim().parse::<usize>() {
        Ok(resolution) if resolution > 0 => Ok(resolution),
        _ => Err(FormatErrorKind::NonIntegerTag {
            tag: tag.to_string(),
        }),
    }
}

/// Splits a rhythm block on its `{n}` tags.
pub fn split_subdivisions(block: &str) -> Result<SubdivisionBlock<'_>, FormatErrorKind> {
    let (leading, mut rest) = match find_enclosed(block, '{', '}') {
        Some((start, _)) => (&block[..start], &block[start..]),
        None => (block, ""),
    };

    let mut chunks = Vec::new();
    while let Some((start, end)) = find_enclosed(rest, '{', '}') {
        let resolution = parse_resolution(&rest[start + 1..end - 1])?;
        let after = &rest[end..];
        let next = find_enclosed(after, '{', '}')
            .map(|(next_start, _)| next_start)
            .unwrap_or(after.len());
        chunks.push(SubdivisionChunk {
            resolution,
            text: &after[..next],
        });
        rest = &after[next..];
    }

    Ok(SubdivisionBlock { leading, chunks })
}
