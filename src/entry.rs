use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// A single filesystem node visited during traversal.
///
/// Entries are ephemeral: the walker constructs one per directory child,
/// hands it to the visitor, and drops it. Nothing is cached or shared
/// between visits.
///
/// `metadata` is populated by the walker only when the active criterion
/// needs it (see [`WalkConfig::want_metadata`](crate::engine::WalkConfig)).
/// This keeps name-based modes free of `stat()` syscalls entirely.
#[derive(Debug)]
pub struct Entry {
    /// Full path to the entry, rooted at the walk's starting directory.
    pub path: PathBuf,

    /// Base name of the entry.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// How deep in the traversal this entry was found. Children of the
    /// walk root are at depth 1.
    pub depth: usize,

    /// Filesystem metadata, present only when the walk requested it.
    pub metadata: Option<fs::Metadata>,
}

impl Entry {
    /// The entry's inode number, if metadata was collected.
    ///
    /// Always `None` on platforms without inode semantics.
    pub fn inode(&self) -> Option<u64> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            self.metadata.as_ref().map(|m| m.ino())
        }
        #[cfg(not(unix))]
        {
            None
        }
    }

    /// The entry's modification time, if metadata was collected and the
    /// platform reports one.
    pub fn modified(&self) -> Option<SystemTime> {
        self.metadata.as_ref().and_then(|m| m.modified().ok())
    }
}

/// The kind of a traversed entry.
///
/// The walker visits `File` and `Dir` entries and recurses into `Dir`;
/// `Symlink` and `Other` are skipped outright, so symbolic links are never
/// followed beyond what the OS reports for the directory entry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(ft: fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}
