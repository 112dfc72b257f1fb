//! JSON output for count mode

use std::io;

use crate::tree::ExtensionHistogram;

/// Serialize a histogram as pretty-printed JSON.
pub fn histogram_json(histogram: &ExtensionHistogram) -> io::Result<String> {
    serde_json::to_string_pretty(histogram).map_err(io::Error::other)
}
