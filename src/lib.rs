//! maifmt - maidata timing formatter
//!
//! Rewrites the note tracks of a maidata (simai) chart so that every beat is
//! written with the smallest subdivision that keeps each note in place.
//! Subdivisions mixed inside a rhythm block are first aligned onto one
//! common timeline, so `{4}1,2,{8}3,4,5,6,` and `{8}1,,2,,3,4,5,6,` both
//! come out as the latter.

pub mod error;
pub mod file;
pub mod parser;
pub mod process;
pub mod rewrite;
pub mod segment_parser;
pub mod transforms;
pub mod types;
pub mod util;

// Re-export commonly used types
pub use error::{FormatError, FormatErrorKind, MalformedTrack};
pub use file::MaidataFile;
pub use parser::parse_maidata;
pub use process::{MaidataFormatter, format_maidata};
pub use transforms::FormatOptions;
pub use types::entry::{MaidataEntry, NOTE_TRACK_PREFIX};
pub use types::segment::Segment;
pub use types::timeline::Timeline;
pub use types::window::WindowRecord;
