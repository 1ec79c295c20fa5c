use std::fs;
use std::path::Path;

use crate::entry::{Entry, EntryKind};
use crate::error::TrawlError;

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Traversal parameters passed from the dispatcher to the walker.
pub struct WalkConfig {
    /// Stat every visited entry and populate [`Entry::metadata`].
    ///
    /// Set only for criteria that read modification time or inode numbers;
    /// a stat failure then aborts the walk with
    /// [`TrawlError::MetadataUnavailable`].
    pub want_metadata: bool,
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// Visitor verdict returned after each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep walking; recurse into this entry if it is a directory.
    Continue,

    /// Do not recurse into this directory entry. Meaningless for files.
    SkipDescent,
}

// ---------------------------------------------------------------------------
// walk()
// ---------------------------------------------------------------------------

/// Recursively walk `root`, invoking `visit` on every file and directory
/// beneath it.
///
/// This is the core engine. Traversal is depth-first and pre-order: an
/// entry is visited before its children, in whatever order the OS returns
/// directory entries (unsorted, unstable across runs). `read_dir` never
/// yields `.` or `..`, so neither is ever visited or re-entered. Entries
/// that are neither files nor directories (symlinks, sockets, devices) are
/// skipped: not visited, not recursed.
///
/// # Errors
///
/// The first unreadable directory or (with
/// [`want_metadata`](WalkConfig::want_metadata)) failed stat aborts the
/// whole walk with a typed error. Termination is the caller's choice: the
/// walker only returns the error, and the binary maps it to exit code 1.
pub fn walk<F>(root: &Path, config: &WalkConfig, visit: &mut F) -> Result<(), TrawlError>
where
    F: FnMut(&Entry) -> Flow,
{
    walk_dir(root, 1, config, visit)
}

fn walk_dir<F>(
    dir: &Path,
    depth: usize,
    config: &WalkConfig,
    visit: &mut F,
) -> Result<(), TrawlError>
where
    F: FnMut(&Entry) -> Flow,
{
    let entries = fs::read_dir(dir).map_err(|source| TrawlError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    for dirent in entries {
        let dirent = dirent.map_err(|source| TrawlError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dirent.path();
        let file_type = dirent
            .file_type()
            .map_err(|source| TrawlError::MetadataUnavailable {
                path: path.clone(),
                source,
            })?;

        let kind = EntryKind::from(file_type);
        if !matches!(kind, EntryKind::File | EntryKind::Dir) {
            continue;
        }

        // symlink_metadata: the entry itself, never a link target.
        let metadata = if config.want_metadata {
            let meta = fs::symlink_metadata(&path).map_err(|source| {
                TrawlError::MetadataUnavailable {
                    path: path.clone(),
                    source,
                }
            })?;
            Some(meta)
        } else {
            None
        };

        let entry = Entry {
            name: dirent.file_name().to_string_lossy().into_owned(),
            path,
            kind,
            depth,
            metadata,
        };

        let flow = visit(&entry);

        if entry.kind == EntryKind::Dir && flow == Flow::Continue {
            walk_dir(&entry.path, depth + 1, config, visit)?;
        }
    }

    Ok(())
}
