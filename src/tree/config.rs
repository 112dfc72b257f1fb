//! Configuration types for tree rendering

use std::collections::BTreeSet;

use clap::ValueEnum;
use regex::Regex;

use crate::error::{Result, TwigError};

/// Depth used when neither `--depth` nor `TWIG_DEPTH` is given.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Which entry kinds survive the kind filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    DirsOnly,
    FilesOnly,
}

impl KindFilter {
    /// Build from the two command-line flags, which may not both be set.
    pub fn from_flags(dirs_only: bool, files_only: bool) -> Result<Self> {
        match (dirs_only, files_only) {
            (true, true) => Err(TwigError::InvalidOption(
                "--dirs-only and --files-only are mutually exclusive".to_string(),
            )),
            (true, false) => Ok(KindFilter::DirsOnly),
            (false, true) => Ok(KindFilter::FilesOnly),
            (false, false) => Ok(KindFilter::All),
        }
    }
}

/// Requested sort key.
///
/// Listings are always directories first, then by name; the key is carried
/// so callers can report what was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Date,
}

/// Metadata columns appended to each entry, always in this field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetadataColumns {
    pub size: bool,
    pub permissions: bool,
    pub modified: bool,
}

impl MetadataColumns {
    pub fn any(&self) -> bool {
        self.size || self.permissions || self.modified
    }
}

/// Immutable configuration for one traversal.
///
/// Built once from invocation options and passed by reference into the
/// walk; nothing in the walker mutates it.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Deepest level listed. Root's children are depth 1, so 0 lists nothing.
    pub max_depth: usize,
    pub show_hidden: bool,
    /// Extension allow-list for files. Empty means no filtering.
    pub extensions: BTreeSet<String>,
    /// Entries whose name matches are dropped.
    pub exclude: Option<Regex>,
    pub kind_filter: KindFilter,
    pub sort: SortKey,
    pub columns: MetadataColumns,
    pub use_color: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            show_hidden: false,
            extensions: BTreeSet::new(),
            exclude: None,
            kind_filter: KindFilter::All,
            sort: SortKey::Name,
            columns: MetadataColumns::default(),
            use_color: false,
        }
    }
}

impl TraversalConfig {
    /// Check the invariants the walk relies on.
    ///
    /// Extensions must be stored bare: an empty or dot-prefixed entry would
    /// never match anything the filter compares it with.
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(TwigError::InvalidOption(format!(
                "extension '{}' must be non-empty and given without a leading '.'",
                bad
            )));
        }
        Ok(())
    }
}

/// Parse a comma-separated extension list such as `mp4,mkv` or `.mp4, .mkv`.
///
/// Blank items are ignored, but a list with no usable item is rejected.
pub fn parse_extensions(list: &str) -> Result<BTreeSet<String>> {
    let extensions: BTreeSet<String> = list
        .split(',')
        .map(|item| item.trim().trim_start_matches('.'))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if extensions.is_empty() {
        return Err(TwigError::InvalidOption(format!(
            "extension list '{}' names no extensions",
            list
        )));
    }
    Ok(extensions)
}

/// Compile an exclude pattern.
pub fn compile_exclude(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| TwigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
