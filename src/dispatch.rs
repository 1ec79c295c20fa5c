use std::io::Write;
use std::path::Path;

use crate::actions::{DeleteAction, ExecAction, PrintAction};
use crate::criteria::{InodeMatcher, MatchAll, ModMinutesMatcher, NameMatcher};
use crate::engine::{walk, Flow, WalkConfig};
use crate::error::TrawlError;
use crate::traits::{Action, CommandRunner, Matcher};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// A fully parsed invocation: one criterion paired with one action.
///
/// Produced by [`parse_mode`] from the raw tokens following the root
/// directory argument, consumed by [`execute`]. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `where-to-look`: print every file and directory.
    Listing,

    /// `-name <n>`: print entries whose name equals `n` exactly.
    ByName { name: String },

    /// `-name <n> -exec <cmd>`: print name matches in one full walk, then
    /// run `cmd` against each name match in a second, independent walk.
    ByNameThenExec { name: String, command: String },

    /// `-mmin <n>`: print entries by modification age window.
    ByModMinutes { minutes: i64 },

    /// `-inum <n>`: print entries with the given inode number.
    ByInode { inode: u64 },

    /// `-delete <target>`: remove matching entries (exact name for files,
    /// substring for directories).
    Delete { target: String },

    /// `-exec <n> <cmd>`: run `cmd` against entries whose name equals `n`.
    Exec { name: String, command: String },
}

// ---------------------------------------------------------------------------
// parse_mode()
// ---------------------------------------------------------------------------

/// Parse the criterion tokens into a typed [`Mode`].
///
/// `tokens` is everything after the root directory argument: the criterion
/// token itself, then its arguments. All failures here are fatal to the
/// invocation; nothing has touched the filesystem yet.
pub fn parse_mode(tokens: &[String]) -> Result<Mode, TrawlError> {
    let (criterion, rest) = tokens
        .split_first()
        .ok_or(TrawlError::MissingArgument("criteria"))?;

    match criterion.as_str() {
        "where-to-look" => Ok(Mode::Listing),

        "-name" => {
            let name = rest
                .first()
                .ok_or(TrawlError::MissingArgument("-name"))?
                .clone();
            // A trailing `-exec` upgrades the mode; anything else after the
            // name is ignored.
            match rest.get(1).map(String::as_str) {
                Some("-exec") => {
                    let command = rest.get(2).ok_or(TrawlError::MissingExecCommand)?.clone();
                    Ok(Mode::ByNameThenExec { name, command })
                }
                _ => Ok(Mode::ByName { name }),
            }
        }

        "-mmin" => {
            let raw = rest.first().ok_or(TrawlError::MissingArgument("-mmin"))?;
            let minutes = raw.parse().map_err(|_| TrawlError::InvalidArgument {
                flag: "-mmin",
                value: raw.clone(),
            })?;
            Ok(Mode::ByModMinutes { minutes })
        }

        "-inum" => {
            let raw = rest.first().ok_or(TrawlError::MissingArgument("-inum"))?;
            let inode = raw.parse().map_err(|_| TrawlError::InvalidArgument {
                flag: "-inum",
                value: raw.clone(),
            })?;
            Ok(Mode::ByInode { inode })
        }

        "-delete" => {
            let target = rest
                .first()
                .ok_or(TrawlError::MissingArgument("-delete"))?
                .clone();
            Ok(Mode::Delete { target })
        }

        "-exec" => {
            let name = rest.first().ok_or(TrawlError::MissingExecCommand)?.clone();
            let command = rest.get(1).ok_or(TrawlError::MissingExecCommand)?.clone();
            Ok(Mode::Exec { name, command })
        }

        other => Err(TrawlError::InvalidCriterion(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// execute()
// ---------------------------------------------------------------------------

/// Compose the walker, matcher, and action for `mode` and run the
/// traversal.
///
/// Matched-path and `Deleted:`/`Executed:` lines go to `out`; recoverable
/// per-entry failures go to stderr. `runner` is only consulted by the exec
/// modes.
///
/// `ByNameThenExec` performs two separate full walks over the tree, print
/// first, exec second. The second walk enumerates independently, so entries
/// created or removed by the executed commands can change what it sees.
pub fn execute<W, R>(
    root: &Path,
    mode: &Mode,
    out: &mut W,
    runner: R,
) -> Result<(), TrawlError>
where
    W: Write,
    R: CommandRunner,
{
    match mode {
        Mode::Listing => run_walk(root, false, MatchAll, PrintAction::new(&mut *out)),

        Mode::ByName { name } => run_walk(
            root,
            false,
            NameMatcher::new(name.clone()),
            PrintAction::new(&mut *out),
        ),

        Mode::ByNameThenExec { name, command } => {
            run_walk(
                root,
                false,
                NameMatcher::new(name.clone()),
                PrintAction::new(&mut *out),
            )?;
            run_walk(
                root,
                false,
                NameMatcher::new(name.clone()),
                ExecAction::new(command.clone(), &mut *out, runner),
            )
        }

        Mode::ByModMinutes { minutes } => run_walk(
            root,
            true,
            ModMinutesMatcher::new(*minutes),
            PrintAction::new(&mut *out),
        ),

        Mode::ByInode { inode } => run_walk(
            root,
            true,
            InodeMatcher::new(*inode),
            PrintAction::new(&mut *out),
        ),

        Mode::Delete { target } => run_walk(
            root,
            false,
            MatchAll,
            DeleteAction::new(target.clone(), &mut *out),
        ),

        Mode::Exec { name, command } => run_walk(
            root,
            false,
            NameMatcher::new(name.clone()),
            ExecAction::new(command.clone(), &mut *out, runner),
        ),
    }
}

/// One walk with one matcher/action pair.
fn run_walk<M, A>(
    root: &Path,
    want_metadata: bool,
    matcher: M,
    mut action: A,
) -> Result<(), TrawlError>
where
    M: Matcher,
    A: Action,
{
    let config = WalkConfig { want_metadata };
    walk(root, &config, &mut |entry| {
        if matcher.is_match(entry) {
            action.apply(entry)
        } else {
            Flow::Continue
        }
    })
}
