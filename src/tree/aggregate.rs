//! Whole-subtree aggregation: summary totals and extension histograms
//!
//! Unlike the tree listing, this walk ignores the depth bound and every
//! filter except the hidden-entry check. Disk usage follows `du`: it counts
//! every entry (hidden ones included), hard links once, and never follows
//! symlinks.

use std::collections::{HashMap, HashSet};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

use super::config::TraversalConfig;
use super::utils::{extension_of, format_size, is_hidden_name, resolve_root};

/// Aggregate counts for a subtree. The root itself is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub directories: usize,
    pub files: usize,
    /// Bytes allocated on disk for the whole subtree.
    pub disk_usage: u64,
}

impl Totals {
    /// `N directories, M files, SIZE`
    pub fn summary_line(&self) -> String {
        format!(
            "{} directories, {} files, {}",
            self.directories,
            self.files,
            format_size(self.disk_usage)
        )
    }
}

/// One histogram bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    pub extension: String,
    pub count: usize,
}

/// Result of count mode.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionHistogram {
    pub root: PathBuf,
    /// Descending by count, ties in ascending extension order.
    pub buckets: Vec<ExtensionCount>,
    pub totals: Totals,
}

impl ExtensionHistogram {
    pub fn count_for(&self, extension: &str) -> Option<usize> {
        self.buckets
            .iter()
            .find(|b| b.extension == extension)
            .map(|b| b.count)
    }
}

/// Accumulates totals (and optionally extension buckets) over one walk.
struct AggregateScan<'a> {
    config: &'a TraversalConfig,
    collect_extensions: bool,
    totals: Totals,
    by_extension: HashMap<String, usize>,
    seen_links: HashSet<(u64, u64)>,
}

impl<'a> AggregateScan<'a> {
    fn new(config: &'a TraversalConfig, collect_extensions: bool) -> Self {
        Self {
            config,
            collect_extensions,
            totals: Totals::default(),
            by_extension: HashMap::new(),
            seen_links: HashSet::new(),
        }
    }

    fn run(mut self, root: &Path) -> (Totals, HashMap<String, usize>) {
        if let Ok(meta) = fs::symlink_metadata(root) {
            self.record_usage(&meta);
        }
        self.visit_dir(root, true);
        (self.totals, self.by_extension)
    }

    /// `visible` is false once any ancestor was a hidden entry that the
    /// config excludes; such subtrees still count toward disk usage.
    fn visit_dir(&mut self, path: &Path, visible: bool) {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let entry_path = entry.path();
            let meta = match fs::symlink_metadata(&entry_path) {
                Ok(meta) => meta,
                Err(e) => {
                    debug!(path = %entry_path.display(), error = %e, "skipping entry");
                    continue;
                }
            };
            self.record_usage(&meta);

            let name = entry.file_name().to_string_lossy().to_string();
            let entry_visible = visible && (self.config.show_hidden || !is_hidden_name(&name));
            let file_type = meta.file_type();

            if file_type.is_dir() {
                if entry_visible {
                    self.totals.directories += 1;
                }
                self.visit_dir(&entry_path, entry_visible);
            } else if file_type.is_file() && entry_visible {
                self.totals.files += 1;
                if self.collect_extensions {
                    let bucket = extension_of(&name).to_lowercase();
                    *self.by_extension.entry(bucket).or_insert(0) += 1;
                }
            }
        }
    }

    fn record_usage(&mut self, meta: &Metadata) {
        if let Some(key) = hard_link_key(meta) {
            if !self.seen_links.insert(key) {
                return;
            }
        }
        self.totals.disk_usage += allocated_bytes(meta);
    }
}

#[cfg(unix)]
fn allocated_bytes(meta: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.blocks() * 512
}

#[cfg(not(unix))]
fn allocated_bytes(meta: &Metadata) -> u64 {
    meta.len()
}

/// Identity of a multiply-linked non-directory, so it is only counted once.
#[cfg(unix)]
fn hard_link_key(meta: &Metadata) -> Option<(u64, u64)> {
    use std::os::unix::fs::MetadataExt;
    (!meta.is_dir() && meta.nlink() > 1).then(|| (meta.dev(), meta.ino()))
}

#[cfg(not(unix))]
fn hard_link_key(_meta: &Metadata) -> Option<(u64, u64)> {
    None
}

/// Totals for the summary line. `root` must already be resolved.
pub fn scan_totals(root: &Path, config: &TraversalConfig) -> Totals {
    AggregateScan::new(config, false).run(root).0
}

/// Count every visible regular file in the subtree by lowercased extension.
///
/// Files without a `.` are bucketed under their whole (lowercased) name.
pub fn count_by_extension(root: &Path, config: &TraversalConfig) -> Result<ExtensionHistogram> {
    config.validate()?;
    let root = resolve_root(root)?;
    let (totals, by_extension) = AggregateScan::new(config, true).run(&root);

    let mut buckets: Vec<ExtensionCount> = by_extension
        .into_iter()
        .map(|(extension, count)| ExtensionCount { extension, count })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.extension.cmp(&b.extension)));

    Ok(ExtensionHistogram {
        root,
        buckets,
        totals,
    })
}
