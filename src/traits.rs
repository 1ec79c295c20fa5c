use std::io;

use crate::engine::Flow;
use crate::entry::Entry;

/// Determines whether an entry is selected by the active criterion.
///
/// Matchers are pure predicates over a single [`Entry`] (plus wall-clock
/// time for the modification-age matcher). They never recurse, never mutate
/// state, and never perform the action themselves; the dispatcher pairs a
/// `Matcher` with an [`Action`] and the walker drives both.
///
/// The traversal is sequential by design, so no `Send`/`Sync` bounds are
/// required of implementors.
///
/// # Example
///
/// ```rust
/// use trawl::{Entry, Matcher};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.path
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if the action should run on this entry.
    fn is_match(&self, entry: &Entry) -> bool;
}

/// Performs the configured side effect on a matched entry.
///
/// Actions own their output writer and report their own per-entry failures
/// to stderr; a failed removal or command invocation never aborts the walk.
/// The returned [`Flow`] lets an action veto descent into a directory it
/// has just made unreadable (the delete executor returns
/// [`Flow::SkipDescent`] after removing one).
pub trait Action {
    /// Apply the action to a matched entry.
    fn apply(&mut self, entry: &Entry) -> Flow;
}

/// External process invocation, kept behind a seam so the exec action can
/// be exercised without spawning real processes.
///
/// The production implementation is [`ShellRunner`](crate::actions::ShellRunner),
/// which hands the command string to `sh -c` and blocks until it exits.
pub trait CommandRunner {
    /// Run a shell command string.
    ///
    /// `Ok(true)` means the command ran and exited successfully, `Ok(false)`
    /// that it ran and exited non-zero. `Err` means it could not be spawned
    /// at all.
    fn run(&mut self, command: &str) -> io::Result<bool>;
}
