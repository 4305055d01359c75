use crate::models::outcome::StripOutcome;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// A line containing any of these opens the section.
pub const START_MARKERS: [&str; 2] = ["Memory & Context Retrieval", "QMD History Search"];

/// A `## ` heading containing any of these does not close the section.
pub const HEADING_EXCLUSIONS: [&str; 2] = ["QMD", "Memory"];

const HEADING_PREFIX: &[u8] = b"## ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Outside,
    Inside,
}

impl SectionState {
    /// Transition taken on `line`, applied before the line is kept or dropped.
    pub fn next(self, line: &[u8]) -> SectionState {
        if START_MARKERS.iter().any(|m| contains(line, m.as_bytes())) {
            return SectionState::Inside;
        }
        match self {
            SectionState::Inside if closes_section(line) => SectionState::Outside,
            state => state,
        }
    }
}

fn closes_section(line: &[u8]) -> bool {
    line.starts_with(HEADING_PREFIX)
        && !HEADING_EXCLUSIONS.iter().any(|w| contains(line, w.as_bytes()))
}

/// Byte substring search; config files are not required to be UTF-8.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Returns the content with the section removed and the number of dropped lines.
pub fn strip_section(content: &[u8]) -> (Vec<u8>, usize) {
    let mut state = SectionState::Outside;
    let mut kept: Vec<&[u8]> = Vec::new();
    let mut dropped = 0;

    for line in content.split(|b| *b == b'\n') {
        state = state.next(line);
        match state {
            SectionState::Outside => kept.push(line),
            SectionState::Inside => dropped += 1,
        }
    }

    (kept.join(&b'\n'), dropped)
}

pub fn backup_path(path: &Path, millis: i64) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(format!(".backup.{}", millis));
    path.with_file_name(name)
}

/// Copies `path` aside, then rewrites it without the section.
///
/// The backup is best effort: a failed copy is logged and the rewrite still
/// happens. Read or write errors on the file itself become `Failed`.
pub fn strip_file(path: &Path) -> StripOutcome {
    strip_file_at(path, chrono::Utc::now().timestamp_millis())
}

pub fn strip_file_at(path: &Path, millis: i64) -> StripOutcome {
    backup_then(path, millis, rewrite)
}

fn backup_then<F>(path: &Path, millis: i64, edit: F) -> StripOutcome
where
    F: FnOnce(&Path) -> Result<usize>,
{
    let backup = backup_path(path, millis);
    let backup = match fs::copy(path, &backup) {
        Ok(_) => Some(backup),
        Err(e) => {
            log::warn!("backup of {} failed: {}", path.display(), e);
            None
        }
    };

    match edit(path) {
        Ok(lines_removed) => StripOutcome::Stripped { backup, lines_removed },
        Err(e) => {
            log::error!("{:#}", e);
            StripOutcome::Failed(format!("{:#}", e))
        }
    }
}

fn rewrite(path: &Path) -> Result<usize> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (stripped, dropped) = strip_section(&content);
    fs::write(path, stripped).with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("stripped {} lines from {}", dropped, path.display());
    Ok(dropped)
}
