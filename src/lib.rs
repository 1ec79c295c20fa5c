//! # trawl
//!
//! Find-style directory walker with composable criteria and actions.
//!
//! trawl owns the traversal engine ([`walk`]), the contracts ([`Matcher`],
//! [`Action`], [`CommandRunner`]), the error type, and the dispatcher that
//! turns criterion tokens into a walker/matcher/action composition. The
//! binary in `main.rs` is glue only: everything observable is reachable
//! as a library, with output captured through any [`std::io::Write`].
//!
//! One walk evaluates one criterion (exact name, modification-age window,
//! inode number, or unconditional) and performs one action (print, delete,
//! or exec an external command per match). Traversal is sequential,
//! depth-first, and pre-order, in OS enumeration order; the first
//! unreadable directory or failed stat aborts the walk with a typed error.
//!
//! # Quick Start
//!
//! ```rust
//! use trawl::{execute, parse_mode, ShellRunner};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("a.txt"), "top").unwrap();
//! std::fs::create_dir(dir.path().join("sub")).unwrap();
//! std::fs::write(dir.path().join("sub").join("a.txt"), "nested").unwrap();
//!
//! let tokens = vec!["-name".to_string(), "a.txt".to_string()];
//! let mode = parse_mode(&tokens).unwrap();
//!
//! let mut out = Vec::new();
//! execute(dir.path(), &mode, &mut out, ShellRunner).unwrap();
//!
//! let printed = String::from_utf8(out).unwrap();
//! assert_eq!(printed.lines().count(), 2);
//! ```
//!
//! # Custom Matchers
//!
//! Implement [`Matcher`] and drive [`walk`] directly for matching logic
//! the CLI does not expose:
//!
//! ```rust
//! use trawl::{walk, Entry, Flow, Matcher, WalkConfig};
//!
//! struct ExtensionMatcher(String);
//!
//! impl Matcher for ExtensionMatcher {
//!     fn is_match(&self, entry: &Entry) -> bool {
//!         entry.path
//!             .extension()
//!             .map(|e| e.eq_ignore_ascii_case(&self.0))
//!             .unwrap_or(false)
//!     }
//! }
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
//! std::fs::write(dir.path().join("notes.txt"), "plain").unwrap();
//!
//! let matcher = ExtensionMatcher("rs".to_string());
//! let mut found = Vec::new();
//! walk(dir.path(), &WalkConfig { want_metadata: false }, &mut |entry| {
//!     if matcher.is_match(entry) {
//!         found.push(entry.path.clone());
//!     }
//!     Flow::Continue
//! })
//! .unwrap();
//!
//! assert_eq!(found.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod engine;

mod actions;
mod criteria;
mod dispatch;
mod entry;
mod error;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use actions::{DeleteAction, ExecAction, PrintAction, ShellRunner};
pub use criteria::{InodeMatcher, MatchAll, ModMinutesMatcher, NameMatcher};
pub use dispatch::{execute, parse_mode, Mode};
pub use engine::{walk, Flow, WalkConfig};
pub use entry::{Entry, EntryKind};
pub use error::TrawlError;
pub use traits::{Action, CommandRunner, Matcher};
