//! Directory tree walking logic
//!
//! Two operations share this module:
//!
//! - `TreeWalker` / `render`: depth-bounded, filtered, streamed tree listing
//! - `count_by_extension`: full-subtree histogram of file extensions
//!
//! Both end with the same `Totals`, computed by an independent whole-subtree
//! scan that honors only the hidden-entry setting.

mod aggregate;
mod config;
mod entry;
mod filter;
mod utils;
mod walker;

pub use aggregate::{ExtensionCount, ExtensionHistogram, Totals, count_by_extension, scan_totals};
pub use config::{
    DEFAULT_MAX_DEPTH, KindFilter, MetadataColumns, SortKey, TraversalConfig, compile_exclude,
    parse_extensions,
};
pub use entry::{EntryKind, TraversalNode, mode_string};
pub use filter::{
    EntryPredicate, FILTER_PIPELINE, is_included, passes_exclude, passes_extension, passes_hidden,
    passes_kind, rejected_by,
};
pub use utils::{extension_of, format_size, is_hidden_name, resolve_root};
pub use walker::{RenderOutput, RenderedTree, TreeWalker, render};
