//! Entry filtering for tree walking
//!
//! Each filter is a plain predicate over a node and the traversal config.
//! They run in a fixed order and the first rejection wins.

use super::config::{KindFilter, TraversalConfig};
use super::entry::TraversalNode;
use super::utils::{extension_of, is_hidden_name};

/// A single filter stage: returns `true` to keep the entry.
pub type EntryPredicate = fn(&TraversalNode, &TraversalConfig) -> bool;

/// Filter stages in application order.
pub const FILTER_PIPELINE: [(&str, EntryPredicate); 4] = [
    ("hidden", passes_hidden),
    ("extension", passes_extension),
    ("exclude", passes_exclude),
    ("kind", passes_kind),
];

/// Hidden entries are dropped unless `show_hidden` is set.
pub fn passes_hidden(node: &TraversalNode, config: &TraversalConfig) -> bool {
    config.show_hidden || !is_hidden_name(&node.name)
}

/// Non-directory entries must carry an allowed extension when the
/// allow-list is non-empty. Matching is case-sensitive.
pub fn passes_extension(node: &TraversalNode, config: &TraversalConfig) -> bool {
    if config.extensions.is_empty() || node.is_dir_like() {
        return true;
    }
    config.extensions.contains(extension_of(&node.name))
}

/// Entries whose name matches the exclude pattern are dropped.
pub fn passes_exclude(node: &TraversalNode, config: &TraversalConfig) -> bool {
    config
        .exclude
        .as_ref()
        .is_none_or(|re| !re.is_match(&node.name))
}

pub fn passes_kind(node: &TraversalNode, config: &TraversalConfig) -> bool {
    match config.kind_filter {
        KindFilter::All => true,
        KindFilter::DirsOnly => node.is_dir_like(),
        KindFilter::FilesOnly => !node.is_dir_like(),
    }
}

/// Run the whole pipeline, returning the name of the first rejecting stage.
pub fn rejected_by(node: &TraversalNode, config: &TraversalConfig) -> Option<&'static str> {
    FILTER_PIPELINE
        .iter()
        .find(|(_, predicate)| !predicate(node, config))
        .map(|(stage, _)| *stage)
}

/// Check if an entry survives every filter stage.
pub fn is_included(node: &TraversalNode, config: &TraversalConfig) -> bool {
    rejected_by(node, config).is_none()
}
