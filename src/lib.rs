//! Twig - a depth-bounded, filtered directory tree printer

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TwigError};
pub use output::{RenderLine, TreeFormatter, histogram_json, strip_styling, write_histogram};
pub use tree::{
    ExtensionHistogram, KindFilter, MetadataColumns, RenderOutput, RenderedTree, SortKey, Totals,
    TraversalConfig, TraversalNode, TreeWalker, count_by_extension, render,
};
