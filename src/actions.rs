use std::fs;
use std::io::{self, Write};
use std::process::Command;

use crate::engine::Flow;
use crate::entry::{Entry, EntryKind};
use crate::error::TrawlError;
use crate::traits::{Action, CommandRunner};

// ---------------------------------------------------------------------------
// Print
// ---------------------------------------------------------------------------

/// Writes each matched path, one per line.
pub struct PrintAction<W: Write> {
    out: W,
}

impl<W: Write> PrintAction<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Action for PrintAction<W> {
    fn apply(&mut self, entry: &Entry) -> Flow {
        let _ = writeln!(self.out, "{}", entry.path.display());
        Flow::Continue
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Removes matched entries.
///
/// Matching is criterion-independent and asymmetric by kind: files are
/// matched by exact name equality against the target, directories by
/// substring containment of the target in their name. The asymmetry is
/// load-bearing and covered by tests; do not unify the two rules.
///
/// Directory removal uses [`fs::remove_dir`], which only succeeds on empty
/// directories. A failed removal is reported to stderr and the walk
/// continues, descending into the still-present directory as usual. A
/// successful directory removal returns [`Flow::SkipDescent`] so the walker
/// does not try to enter a path that no longer exists.
pub struct DeleteAction<W: Write> {
    target: String,
    out: W,
}

impl<W: Write> DeleteAction<W> {
    pub fn new(target: impl Into<String>, out: W) -> Self {
        Self {
            target: target.into(),
            out,
        }
    }

    fn file_matches(&self, name: &str) -> bool {
        name == self.target
    }

    fn dir_matches(&self, name: &str) -> bool {
        name.contains(&self.target)
    }
}

impl<W: Write> Action for DeleteAction<W> {
    fn apply(&mut self, entry: &Entry) -> Flow {
        let matched = match entry.kind {
            EntryKind::File => self.file_matches(&entry.name),
            EntryKind::Dir => self.dir_matches(&entry.name),
            _ => false,
        };
        if !matched {
            return Flow::Continue;
        }

        let removed = match entry.kind {
            EntryKind::Dir => fs::remove_dir(&entry.path),
            _ => fs::remove_file(&entry.path),
        };

        match removed {
            Ok(()) => {
                let _ = writeln!(self.out, "Deleted: {}", entry.path.display());
                if entry.kind == EntryKind::Dir {
                    Flow::SkipDescent
                } else {
                    Flow::Continue
                }
            }
            Err(source) => {
                let err = TrawlError::RemovalFailed {
                    path: entry.path.clone(),
                    source,
                };
                eprintln!("{err}");
                Flow::Continue
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Exec
// ---------------------------------------------------------------------------

/// Runs an external command against each matched entry.
///
/// The command line is the configured template, a space, and the entry's
/// path. Invocation goes through the [`CommandRunner`] seam and blocks
/// until the child exits. A spawn failure or non-zero exit is reported to
/// stderr and the walk continues.
pub struct ExecAction<W: Write, R: CommandRunner> {
    command: String,
    out: W,
    runner: R,
}

impl<W: Write, R: CommandRunner> ExecAction<W, R> {
    pub fn new(command: impl Into<String>, out: W, runner: R) -> Self {
        Self {
            command: command.into(),
            out,
            runner,
        }
    }
}

impl<W: Write, R: CommandRunner> Action for ExecAction<W, R> {
    fn apply(&mut self, entry: &Entry) -> Flow {
        let command = format!("{} {}", self.command, entry.path.display());
        match self.runner.run(&command) {
            Ok(true) => {
                let _ = writeln!(self.out, "Executed: {command}");
            }
            Ok(false) => {
                let err = TrawlError::CommandFailed {
                    command,
                    reason: "exited with non-zero status".to_string(),
                };
                eprintln!("{err}");
            }
            Err(source) => {
                let err = TrawlError::CommandFailed {
                    command,
                    reason: source.to_string(),
                };
                eprintln!("{err}");
            }
        }
        Flow::Continue
    }
}

// ---------------------------------------------------------------------------
// ShellRunner
// ---------------------------------------------------------------------------

/// Production [`CommandRunner`]: hands the command string to `sh -c`.
///
/// The child inherits stdin/stdout/stderr, and the call blocks until it
/// exits. No timeout, no cancellation.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> io::Result<bool> {
        let status = Command::new("sh").arg("-c").arg(command).status()?;
        Ok(status.success())
    }
}
