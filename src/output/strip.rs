//! Styling removal for plain-text output files

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("ANSI_ESCAPE regex is invalid")
});

/// Remove ANSI styling escape sequences, leaving every other byte intact.
pub fn strip_styling(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}
