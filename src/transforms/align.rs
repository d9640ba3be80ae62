use crate::error::{FormatErrorKind, MalformedTrack};
use crate::segment_parser::split_subdivisions;
use crate::types::segment::SubdivisionChunk;
use crate::types::timeline::Timeline;
use crate::util::is_blank;
use num_integer::Integer;

/// Upper bound on the slots a single rhythm block may expand to.
pub const MAX_BLOCK_SLOTS: usize = 1 << 22;

/// Least common multiple of all `resolutions`.
///
/// `None` when the slice is empty or the result does not fit in `usize`.
pub fn common_resolution(resolutions: &[usize]) -> Option<usize> {
    let (first, rest) = resolutions.split_first()?;
    rest.iter()
        .try_fold(*first, |acc, &n| (acc / acc.gcd(&n)).checked_mul(n))
}

/// Number of slots the chunks of a block expand to at `resolution`.
///
/// `None` on `usize` overflow.
fn count_slots(chunks: &[SubdivisionChunk<'_>], resolution: usize) -> Option<usize> {
    chunks.iter().try_fold(0usize, |total, chunk| {
        let commas = chunk.text.matches(',').count();
        commas
            .checked_mul(resolution / chunk.resolution)?
            .checked_add(total)
    })
}

/// Lays every phrase of a rhythm block onto one timeline at the LCM of its tags.
///
/// Each comma closes a phrase. At common resolution `D`, a phrase written under
/// `{n}` takes one slot followed by `D / n - 1` rests. Text after the last comma
/// of the block is not part of any beat and is dropped.
pub fn align_block(block: &str) -> Result<Timeline, FormatErrorKind> {
    if is_blank(block) {
        return Ok(Timeline::new(1));
    }

    let split = split_subdivisions(block)?;
    if split.chunks.is_empty() {
        return Err(MalformedTrack::MissingSubdivision(block.to_string()).into());
    }
    if !is_blank(split.leading) {
        return Err(MalformedTrack::UntaggedPhrases(split.leading.trim().to_string()).into());
    }

    let tags = split.resolutions();
    let resolution = common_resolution(&tags)
        .ok_or_else(|| FormatErrorKind::ResolutionOverflow { tags: tags.clone() })?;

    let slots = count_slots(&split.chunks, resolution).unwrap_or(usize::MAX);
    if slots > MAX_BLOCK_SLOTS {
        return Err(FormatErrorKind::TimelineTooLarge {
            resolution,
            slots,
            limit: MAX_BLOCK_SLOTS,
        });
    }

    let mut timeline = Timeline::new(resolution);
    timeline.slots.reserve(slots);
    let mut pending = String::new();

    for chunk in &split.chunks {
        let rests = resolution / chunk.resolution - 1;
        let mut phrases = chunk.text.split(',');
        // a chunk without a trailing comma leaves its last phrase open for the next one
        if let Some(first) = phrases.next() {
            pending.push_str(first);
        }
        for phrase in phrases {
            let closed = std::mem::replace(&mut pending, phrase.to_string());
            timeline.push_phrase(closed, rests);
        }
    }

    if !is_blank(&pending) {
        log::warn!("Dropping \"{}\" after the last comma of a rhythm block", pending.trim());
    }

    log::debug!(
        "Aligned {:?} to resolution {} ({} slots)",
        tags,
        resolution,
        timeline.slots.len()
    );

    Ok(timeline)
}
