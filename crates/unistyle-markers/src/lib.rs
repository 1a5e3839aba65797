//! List-marker toggling for line-split plain text.
//!
//! A selection in a rich-text editor arrives here as a sequence of lines.
//! Two markers are supported:
//!
//! - **Bullets**: `• ` at the start of a line
//! - **Ordinals**: `1. `, `2) `, ... at the start of a line
//!
//! Toggling looks at the whole block: if every non-blank line already carries
//! the marker, the marker is stripped from each line; otherwise every
//! non-blank line gets one. Blank lines are always passed through untouched.
//!
//! # Example
//!
//! ```rust
//! use unistyle_markers::{toggle_bullet, toggle_numbered};
//!
//! assert_eq!(toggle_bullet(&["a", "b"]), vec!["• a", "• b"]);
//! assert_eq!(toggle_bullet(&["• a", "• b"]), vec!["a", "b"]);
//!
//! assert_eq!(toggle_numbered(&["a", "b"]), vec!["1. a", "2. b"]);
//! assert_eq!(toggle_numbered(&["1. a", "2. b"]), vec!["a", "b"]);
//! ```
//!
//! The crate also exposes [`strip_markers`], which removes every marker from
//! a block of text in one pass. The style engine uses it when clearing
//! formatting.

mod bullet;
mod numbered;
mod pattern;

pub use bullet::toggle_bullet;
pub use numbered::{toggle_numbered, toggle_numbered_with, NumberingPolicy};
pub use pattern::{
    is_bulleted, is_numbered, strip_line_markers, strip_markers, BULLET, BULLET_PREFIX,
    INLINE_BULLET,
};

/// Returns `true` if the line has no visible content.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns `true` if every non-blank line satisfies `marked`.
///
/// A block with no non-blank lines counts as fully marked, which makes the
/// strip path a no-op for it.
pub(crate) fn all_marked<S: AsRef<str>>(lines: &[S], marked: fn(&str) -> bool) -> bool {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !is_blank(line))
        .all(marked)
}
