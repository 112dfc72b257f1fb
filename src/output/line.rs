//! Rendered tree rows and their styling

use termcolor::{Color, ColorSpec};

use crate::tree::{EntryKind, MetadataColumns, TraversalNode, extension_of, format_size};

/// Extensions styled as archives.
pub const ARCHIVE_EXTENSIONS: &[&str] = &["tar", "gz", "bz2", "xz", "zip", "rar", "7z", "zst"];

/// Extensions styled as media (video, audio, image).
pub const MEDIA_EXTENSIONS: &[&str] = &[
    // video
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "ts",
    // audio
    "mp3", "flac", "wav", "aac", "ogg", "m4a", "opus", "wma",
    // image
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "svg", "heic",
];

/// Marker shown in the size column for directories.
pub const DIR_SIZE_MARKER: &str = "<DIR>";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Visual class of an entry. Exactly one applies per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStyle {
    Directory,
    Symlink,
    Executable,
    Archive,
    Media,
    Plain,
}

impl EntryStyle {
    /// Classify a node. Kind is checked first, then the executable bit,
    /// then the extension.
    pub fn classify(node: &TraversalNode) -> Self {
        match node.kind {
            EntryKind::Dir => EntryStyle::Directory,
            EntryKind::Symlink => EntryStyle::Symlink,
            EntryKind::File if node.executable => EntryStyle::Executable,
            EntryKind::File => {
                let ext = extension_of(&node.name);
                if !node.name.contains('.') {
                    EntryStyle::Plain
                } else if ARCHIVE_EXTENSIONS.contains(&ext) {
                    EntryStyle::Archive
                } else if MEDIA_EXTENSIONS.contains(&ext) {
                    EntryStyle::Media
                } else {
                    EntryStyle::Plain
                }
            }
        }
    }

    /// Terminal color for this style, `None` for unstyled.
    pub fn color_spec(self) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match self {
            EntryStyle::Directory => spec.set_fg(Some(Color::Blue)).set_bold(true),
            EntryStyle::Executable => spec.set_fg(Some(Color::Green)).set_bold(true),
            EntryStyle::Symlink => spec.set_fg(Some(Color::Cyan)),
            EntryStyle::Archive => spec.set_fg(Some(Color::Red)),
            EntryStyle::Media => spec.set_fg(Some(Color::Magenta)),
            EntryStyle::Plain => return None,
        };
        Some(spec)
    }
}

/// One output row of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    /// Accumulated guide glyphs from ancestors (`│   ` or four spaces each).
    pub prefix: String,
    pub is_last: bool,
    pub depth: usize,
    /// Styled portion: the name, with a trailing `/` for directories.
    pub label: String,
    pub style: EntryStyle,
    /// Symlink target, shown unstyled after ` -> `.
    pub target: Option<String>,
    /// Space-separated metadata columns.
    pub suffix: Option<String>,
}

impl RenderLine {
    pub fn from_node(
        node: &TraversalNode,
        prefix: &str,
        is_last: bool,
        depth: usize,
        columns: &MetadataColumns,
    ) -> Self {
        let label = if node.kind == EntryKind::Dir {
            format!("{}/", node.name)
        } else {
            node.name.clone()
        };

        Self {
            prefix: prefix.to_string(),
            is_last,
            depth,
            label,
            style: EntryStyle::classify(node),
            target: node
                .symlink_target
                .as_ref()
                .map(|t| t.display().to_string()),
            suffix: metadata_suffix(node, columns),
        }
    }

    pub fn connector(&self) -> &'static str {
        if self.is_last { "└── " } else { "├── " }
    }

    /// The row as unstyled text, without a trailing newline.
    pub fn plain_text(&self) -> String {
        let mut text = format!("{}{}{}", self.prefix, self.connector(), self.label);
        if let Some(target) = &self.target {
            text.push_str(" -> ");
            text.push_str(target);
        }
        if let Some(suffix) = &self.suffix {
            text.push_str("  [");
            text.push_str(suffix);
            text.push(']');
        }
        text
    }
}

/// Prefix carried down to the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Build the metadata columns: size, permissions, then modification time.
pub fn metadata_suffix(node: &TraversalNode, columns: &MetadataColumns) -> Option<String> {
    if !columns.any() {
        return None;
    }

    let mut fields = Vec::with_capacity(3);
    if columns.size {
        fields.push(match node.kind {
            EntryKind::Dir => DIR_SIZE_MARKER.to_string(),
            EntryKind::File => format_size(node.size.unwrap_or(0)),
            EntryKind::Symlink => "-".to_string(),
        });
    }
    if columns.permissions {
        fields.push(node.permissions.clone());
    }
    if columns.modified {
        fields.push(
            node.modified
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    Some(fields.join(" "))
}
