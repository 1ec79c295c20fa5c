use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while walking a tree or dispatching an
/// invocation.
///
/// Fatal variants abort the whole traversal and surface as a non-zero exit
/// from the binary. Recoverable variants (`RemovalFailed`, `CommandFailed`)
/// are reported to stderr by the action that hit them and never propagate;
/// the walk continues with the next entry.
#[derive(Error, Debug)]
pub enum TrawlError {
    // Traversal
    #[error("cannot open directory {}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read metadata for {}", .path.display())]
    MetadataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Invocation parsing
    #[error("Missing command for -exec")]
    MissingExecCommand,

    #[error("Invalid criteria: {0}")]
    InvalidCriterion(String),

    #[error("invalid argument for {flag}: {value}")]
    InvalidArgument { flag: &'static str, value: String },

    #[error("missing argument for {0}")]
    MissingArgument(&'static str),

    // Per-entry action failures, logged rather than returned
    #[error("remove {}: {}", .path.display(), .source)]
    RemovalFailed { path: PathBuf, source: io::Error },

    #[error("system {command}: {reason}")]
    CommandFailed { command: String, reason: String },
}

impl TrawlError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::DirectoryUnreadable { path, .. }
            | Self::MetadataUnavailable { path, .. }
            | Self::RemovalFailed { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether the traversal can continue after this error.
    ///
    /// Only per-entry action failures are recoverable. Anything the walker
    /// or the dispatcher raises is fatal: the traversal stops and the
    /// process exits 1, with no cleanup of actions already performed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::RemovalFailed { .. } | Self::CommandFailed { .. }
        )
    }
}
