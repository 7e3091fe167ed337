//! Highlighting of the differing tail of two version strings

use crate::diff::types::{Change, MarkedVersion, Segment};

/// Pre-release words that start a new component even without a separator
pub const PRERELEASE_MARKERS: [&str; 4] = ["rc", "pre", "alpha", "beta"];

/// Anything that is neither a letter nor a digit separates components
fn is_separator(c: char) -> bool {
    !(c.is_alphabetic() || c.is_numeric())
}

/// Whether a pre-release marker word starts at byte offset `index` of `s`
fn marker_starts_at(s: &str, index: usize) -> bool {
    PRERELEASE_MARKERS.iter().any(|word| {
        s.as_bytes()
            .get(index..index + word.len())
            .is_some_and(|bytes| bytes == word.as_bytes())
    })
}

/// Whether a new component starts right after the character `c` at `index`
///
/// `c` is read from the string being highlighted, while the marker words are
/// always looked up in `old`.
fn starts_component(old: &str, index: usize, c: char) -> bool {
    is_separator(c) || marker_starts_at(old, index + c.len_utf8())
}

/// Byte offset of the first character where `old` and `new` differ
///
/// When one string is a prefix of the other, this is the length of the
/// shorter one. The offset is always a character boundary in both strings.
pub fn divergence_point(old: &str, new: &str) -> usize {
    old.char_indices()
        .zip(new.chars())
        .find(|((_, a), b)| a != b)
        .map(|((index, _), _)| index)
        .unwrap_or_else(|| old.len().min(new.len()))
}

/// Start of the highlighted region of `version`, never past `diff_position`
fn region_start(version: &str, old: &str, diff_position: usize) -> usize {
    if version[diff_position..].chars().next().is_some_and(is_separator) {
        return diff_position;
    }

    version[..diff_position]
        .char_indices()
        .rev()
        .find(|&(index, c)| starts_component(old, index, c))
        .map(|(index, c)| index + c.len_utf8())
        .unwrap_or(0)
}

fn colorize<'a>(
    version: &'a str,
    old: &str,
    diff_position: usize,
    change: Change,
) -> MarkedVersion<'a> {
    let start = region_start(version, old, diff_position);
    let mut segments = Vec::new();
    if start > 0 {
        segments.push(Segment::plain(&version[..start]));
    }

    // A separator opening the region stays inside the first segment.
    let region = &version[start..];
    let mut offset = 0;
    for (index, c) in region.char_indices() {
        if index > 0 && is_separator(c) {
            let end = index + c.len_utf8();
            segments.push(Segment::changed(&region[offset..index], change));
            segments.push(Segment::plain(&region[index..end]));
            offset = end;
        }
    }
    segments.push(Segment::changed(&region[offset..], change));

    MarkedVersion::new(version, start, segments)
}

/// Mark the differing tail of `old_version` and `new_version`
///
/// Returns the installed version marked with [`Change::Removed`] and the
/// available version marked with [`Change::Added`]. Equal versions come back
/// unmarked apart from an empty changed segment at the end.
pub fn diff<'a>(
    old_version: &'a str,
    new_version: &'a str,
) -> (MarkedVersion<'a>, MarkedVersion<'a>) {
    if old_version == new_version {
        return (
            unchanged(old_version, Change::Removed),
            unchanged(new_version, Change::Added),
        );
    }

    let diff_position = divergence_point(old_version, new_version);
    (
        colorize(old_version, old_version, diff_position, Change::Removed),
        colorize(new_version, old_version, diff_position, Change::Added),
    )
}

fn unchanged(version: &str, change: Change) -> MarkedVersion<'_> {
    let mut segments = Vec::new();
    if !version.is_empty() {
        segments.push(Segment::plain(version));
    }
    segments.push(Segment::changed(&version[version.len()..], change));
    MarkedVersion::new(version, version.len(), segments)
}
