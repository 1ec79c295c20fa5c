use std::cmp::Ordering;
use std::time::SystemTime;

use crate::entry::Entry;
use crate::traits::Matcher;

/// Matches entries whose name equals the target exactly.
///
/// Case-sensitive, no wildcards.
pub struct NameMatcher {
    name: String,
}

impl NameMatcher {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Matcher for NameMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.name == self.name
    }
}

/// Matches every entry. Used by the listing and delete modes.
pub struct MatchAll;

impl Matcher for MatchAll {
    fn is_match(&self, _entry: &Entry) -> bool {
        true
    }
}

/// Matches entries by modification age, in whole minutes.
///
/// `minutes_ago` is the wall-clock age of the entry divided by 60,
/// truncated toward zero. The sign of the configured value selects the
/// window, asymmetrically:
///
/// - negative `n`: modified more recently than `|n|` minutes ago
/// - zero: modified within the current minute
/// - positive `n`: modified more than `n` minutes ago
pub struct ModMinutesMatcher {
    minutes: i64,
}

impl ModMinutesMatcher {
    pub fn new(minutes: i64) -> Self {
        Self { minutes }
    }
}

impl Matcher for ModMinutesMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        let Some(mtime) = entry.modified() else {
            return false;
        };
        let minutes_ago = minutes_since(SystemTime::now(), mtime);
        match self.minutes.cmp(&0) {
            Ordering::Less => minutes_ago < self.minutes.abs(),
            Ordering::Equal => minutes_ago == 0,
            Ordering::Greater => minutes_ago > self.minutes,
        }
    }
}

/// Whole minutes elapsed from `mtime` to `now`, truncated toward zero.
/// Negative for timestamps in the future.
fn minutes_since(now: SystemTime, mtime: SystemTime) -> i64 {
    match now.duration_since(mtime) {
        Ok(elapsed) => (elapsed.as_secs() / 60) as i64,
        Err(ahead) => -((ahead.duration().as_secs() / 60) as i64),
    }
}

/// Matches entries whose inode number equals the target.
///
/// Hard links share an inode, so every path of a linked file matches.
/// Never matches on platforms without inode semantics.
pub struct InodeMatcher {
    inode: u64,
}

impl InodeMatcher {
    pub fn new(inode: u64) -> Self {
        Self { inode }
    }
}

impl Matcher for InodeMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.inode() == Some(self.inode)
    }
}
