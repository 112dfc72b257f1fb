//! TreeWalker - streams render lines without building the tree in memory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::error::Result;
use crate::output::{RenderLine, child_prefix};

use super::aggregate::{Totals, scan_totals};
use super::config::TraversalConfig;
use super::entry::TraversalNode;
use super::filter::rejected_by;
use super::utils::resolve_root;

/// Receiver for streamed tree output.
pub trait RenderOutput {
    /// Called once with the resolved root before any entry.
    fn header(&mut self, root: &Path) -> io::Result<()>;

    fn line(&mut self, line: &RenderLine) -> io::Result<()>;

    fn finish(&mut self, totals: &Totals) -> io::Result<()>;
}

/// Collects everything in memory; mostly useful for tests.
#[derive(Debug, Default)]
pub struct RenderedTree {
    pub root: PathBuf,
    pub lines: Vec<RenderLine>,
    pub totals: Totals,
}

impl RenderedTree {
    /// Entry rows as unstyled text.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(RenderLine::plain_text).collect()
    }
}

impl RenderOutput for RenderedTree {
    fn header(&mut self, root: &Path) -> io::Result<()> {
        self.root = root.to_path_buf();
        Ok(())
    }

    fn line(&mut self, line: &RenderLine) -> io::Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }

    fn finish(&mut self, totals: &Totals) -> io::Result<()> {
        self.totals = *totals;
        Ok(())
    }
}

/// Depth-first, depth-bounded tree renderer.
/// Uses O(depth) memory: each level's listing is dropped once rendered.
pub struct TreeWalker<'a> {
    config: &'a TraversalConfig,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a TraversalConfig) -> Self {
        Self { config }
    }

    /// Render `root` into `output`, returning the summary totals.
    ///
    /// An invalid config or root fails before `output` sees anything.
    pub fn render<O: RenderOutput>(&self, root: &Path, output: &mut O) -> Result<Totals> {
        self.config.validate()?;
        let root = resolve_root(root)?;
        info!(root = %root.display(), max_depth = self.config.max_depth, "rendering tree");

        output.header(&root)?;
        self.walk_dir(&root, "", 1, output)?;

        let totals = scan_totals(&root, self.config);
        output.finish(&totals)?;
        Ok(totals)
    }

    /// List `path` as the entries at `depth`, recursing into real
    /// directories while the next level stays within the bound.
    fn walk_dir<O: RenderOutput>(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        output: &mut O,
    ) -> io::Result<()> {
        if depth > self.config.max_depth {
            return Ok(());
        }

        let entries = self.read_level(path);
        let total = entries.len();

        for (i, node) in entries.into_iter().enumerate() {
            let is_last = i + 1 == total;
            let line = RenderLine::from_node(&node, prefix, is_last, depth, &self.config.columns);
            output.line(&line)?;

            // Symlinks are never descended, so cycles cannot form
            if node.is_traversable() {
                self.walk_dir(&node.path, &child_prefix(prefix, is_last), depth + 1, output)?;
            }
        }
        Ok(())
    }

    /// Read one directory level, filter it, and order it: directories
    /// first, then files, each by name.
    ///
    /// Unreadable directories and entries are skipped.
    pub fn read_level(&self, path: &Path) -> Vec<TraversalNode> {
        trace!(path = %path.display(), "reading directory");
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable directory");
                return Vec::new();
            }
        };

        let (mut dirs, mut files): (Vec<_>, Vec<_>) = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter_map(|entry_path| match TraversalNode::from_path(&entry_path) {
                Ok(node) => Some(node),
                Err(e) => {
                    debug!(path = %entry_path.display(), error = %e, "skipping entry");
                    None
                }
            })
            .filter(|node| match rejected_by(node, self.config) {
                Some(stage) => {
                    trace!(name = %node.name, stage, "filtered out");
                    false
                }
                None => true,
            })
            .partition(TraversalNode::is_dir_like);

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        dirs.extend(files);
        dirs
    }
}

/// Render `root` fully into memory.
pub fn render(root: &Path, config: &TraversalConfig) -> Result<RenderedTree> {
    let mut rendered = RenderedTree::default();
    TreeWalker::new(config).render(root, &mut rendered)?;
    Ok(rendered)
}
