//! Filesystem entries encountered during a walk

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
}

/// One entry from a directory listing, stat'd without following symlinks.
#[derive(Debug, Clone)]
pub struct TraversalNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Length in bytes, regular files only.
    pub size: Option<u64>,
    /// `ls`-style mode string, e.g. `-rw-r--r--`.
    pub permissions: String,
    pub modified: Option<DateTime<Local>>,
    pub symlink_target: Option<PathBuf>,
    /// Symlink whose target resolves to a directory.
    pub points_to_dir: bool,
    pub executable: bool,
}

impl TraversalNode {
    /// Stat `path` and build a node. Symlinks are inspected, never followed
    /// for anything beyond checking whether their target is a directory.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let meta = fs::symlink_metadata(path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let file_type = meta.file_type();
        let (kind, symlink_target, points_to_dir) = if file_type.is_symlink() {
            let target = fs::read_link(path).ok();
            let points_to_dir = fs::metadata(path).is_ok_and(|m| m.is_dir());
            (EntryKind::Symlink, target, points_to_dir)
        } else if file_type.is_dir() {
            (EntryKind::Dir, None, false)
        } else {
            (EntryKind::File, None, false)
        };

        Ok(Self {
            name,
            path: path.to_path_buf(),
            kind,
            size: (kind == EntryKind::File).then(|| meta.len()),
            permissions: permission_string(&meta),
            modified: meta.modified().ok().map(DateTime::<Local>::from),
            symlink_target,
            points_to_dir,
            executable: kind == EntryKind::File && is_executable(&meta),
        })
    }

    /// Directories and symlinks to directories group together in listings.
    pub fn is_dir_like(&self) -> bool {
        match self.kind {
            EntryKind::Dir => true,
            EntryKind::Symlink => self.points_to_dir,
            EntryKind::File => false,
        }
    }

    /// Only real directories are descended into.
    pub fn is_traversable(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

#[cfg(unix)]
fn permission_string(meta: &Metadata) -> String {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let ft = meta.file_type();
    let type_char = if ft.is_symlink() {
        'l'
    } else if ft.is_dir() {
        'd'
    } else if ft.is_block_device() {
        'b'
    } else if ft.is_char_device() {
        'c'
    } else if ft.is_fifo() {
        'p'
    } else if ft.is_socket() {
        's'
    } else {
        '-'
    };
    mode_string(type_char, meta.permissions().mode())
}

#[cfg(not(unix))]
fn permission_string(meta: &Metadata) -> String {
    let ft = meta.file_type();
    let type_char = if ft.is_symlink() {
        'l'
    } else if ft.is_dir() {
        'd'
    } else {
        '-'
    };
    let mode = if meta.permissions().readonly() { 0o444 } else { 0o666 };
    mode_string(type_char, mode)
}

/// Render the nine permission bits after a type character.
pub fn mode_string(type_char: char, mode: u32) -> String {
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    let mut s = String::with_capacity(10);
    s.push(type_char);
    for (bit, ch) in BITS {
        s.push(if mode & bit != 0 { ch } else { '-' });
    }
    s
}

#[cfg(unix)]
fn is_executable(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &Metadata) -> bool {
    false
}
