//! Tree formatting and display
//!
//! - `line` - Rendered rows, style classes, and metadata columns
//! - `tree` - Streaming tree formatter over any `WriteColor` sink
//! - `histogram` - Count-mode text output
//! - `json` - Count-mode JSON output
//! - `strip` - Escape-sequence removal for plain-text files

mod histogram;
mod json;
mod line;
mod strip;
mod tree;

pub use histogram::write_histogram;
pub use json::histogram_json;
pub use line::{
    ARCHIVE_EXTENSIONS, DIR_SIZE_MARKER, EntryStyle, MEDIA_EXTENSIONS, RenderLine, child_prefix,
    metadata_suffix,
};
pub use strip::strip_styling;
pub use tree::TreeFormatter;
