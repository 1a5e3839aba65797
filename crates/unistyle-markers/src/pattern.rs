//! Marker patterns and per-line stripping.

use once_cell::sync::Lazy;
use regex::Regex;

/// The bullet glyph placed at the start of a line.
pub const BULLET: char = '•';

/// The full bullet prefix written by [`toggle_bullet`](crate::toggle_bullet).
pub const BULLET_PREFIX: &str = "• ";

/// Heavy bullet that some editors insert mid-line. Cleared wherever it appears.
pub const INLINE_BULLET: char = '●';

// Marker whitespace is any horizontal space (tab or Unicode `Zs`, which
// covers the no-break space editors insert) so a marker never swallows a
// line break. Markers may be indented.
static ORDINAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t\p{Zs}]*[0-9]+[.)][\t\p{Zs}]+").expect("ordinal pattern compiles")
});

static LEADING_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\t\p{Zs}]*•[\t\p{Zs}]*").expect("bullet pattern compiles"));

static TOGGLED_BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t\p{Zs}]*•[\t\p{Zs}]?").expect("toggled bullet pattern compiles")
});

static INLINE_BULLETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"●[\t\p{Zs}]*").expect("inline bullet pattern compiles"));

/// Returns `true` if the line starts with a bullet, after any indentation.
pub fn is_bulleted(line: &str) -> bool {
    LEADING_BULLET.is_match(line)
}

/// Returns `true` if the line starts with an ordinal marker such as `3. ` or
/// `3) `, after any indentation.
pub fn is_numbered(line: &str) -> bool {
    ORDINAL.is_match(line)
}

/// Byte length of the leading ordinal marker, including indentation and
/// trailing whitespace.
pub(crate) fn ordinal_len(line: &str) -> Option<usize> {
    ORDINAL.find(line).map(|m| m.end())
}

/// Removes indentation, a leading bullet and at most one following space.
pub(crate) fn strip_bullet(line: &str) -> &str {
    match TOGGLED_BULLET.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Removes a leading ordinal marker with all of its trailing whitespace.
pub(crate) fn strip_ordinal(line: &str) -> &str {
    match ordinal_len(line) {
        Some(end) => &line[end..],
        None => line,
    }
}

/// Removes every list marker from a single line.
///
/// Inline `●` glyphs are dropped first, then leading bullets and ordinals are
/// peeled off until none remain, so `"• 1. item"` becomes `"item"`. Running
/// the function on its own output returns it unchanged.
pub fn strip_line_markers(line: &str) -> String {
    let cleaned = INLINE_BULLETS.replace_all(line, "");
    let mut rest: &str = &cleaned;
    loop {
        if let Some(m) = LEADING_BULLET.find(rest) {
            rest = &rest[m.end()..];
        } else if let Some(end) = ordinal_len(rest) {
            rest = &rest[end..];
        } else {
            break;
        }
    }
    rest.to_string()
}

/// Removes every list marker from each line of `text`.
///
/// Lines are split on `\n` and rejoined with `\n`, so the line structure
/// (including any `\r` before the break) is preserved.
///
/// ```rust
/// use unistyle_markers::strip_markers;
///
/// assert_eq!(strip_markers("• milk\n2) eggs\nbread ●"), "milk\neggs\nbread ");
/// ```
pub fn strip_markers(text: &str) -> String {
    text.split('\n')
        .map(strip_line_markers)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numbered() {
        assert!(is_numbered("1. a"));
        assert!(is_numbered("12) a"));
        assert!(is_numbered("3.\ta"));
        assert!(!is_numbered("1.a"));
        assert!(!is_numbered("1."));
        assert!(!is_numbered("a. b"));
        assert!(is_numbered("  1. a"));
    }

    #[test]
    fn test_no_break_space_after_marker() {
        assert!(is_numbered("1.\u{a0}a"));
        assert!(is_bulleted("•\u{a0}a"));
        assert_eq!(strip_ordinal("1.\u{a0}a"), "a");
        assert_eq!(strip_bullet("•\u{a0}a"), "a");
        assert_eq!(strip_line_markers("●\u{a0}1.\u{a0}a"), "a");
    }

    #[test]
    fn test_marker_never_spans_lines() {
        assert!(!is_numbered("1.\nA"));
        assert_eq!(strip_markers("•\nb"), "\nb");
    }

    #[test]
    fn test_indented_markers() {
        assert!(is_bulleted("  • a"));
        assert!(is_bulleted("\t•a"));
        assert_eq!(strip_bullet("  • a"), "a");
        assert_eq!(strip_line_markers("  • 1. a"), "a");
        assert!(!is_bulleted("a •"));
    }

    #[test]
    fn test_is_numbered_ascii_digits_only() {
        // Arabic-Indic digit one
        assert!(!is_numbered("\u{0661}. a"));
    }

    #[test]
    fn test_strip_bullet_removes_one_space() {
        assert_eq!(strip_bullet("• a"), "a");
        assert_eq!(strip_bullet("•a"), "a");
        assert_eq!(strip_bullet("•  a"), " a");
        assert_eq!(strip_bullet("a"), "a");
    }

    #[test]
    fn test_strip_ordinal() {
        assert_eq!(strip_ordinal("1. a"), "a");
        assert_eq!(strip_ordinal("10)   a"), "a");
        assert_eq!(strip_ordinal("a"), "a");
    }

    #[test]
    fn test_strip_line_markers_nested() {
        assert_eq!(strip_line_markers("• 1. item"), "item");
        assert_eq!(strip_line_markers("1. • item"), "item");
        assert_eq!(strip_line_markers("•• item"), "item");
        assert_eq!(strip_line_markers("1. 2. item"), "item");
    }

    #[test]
    fn test_strip_line_markers_lone_bullet() {
        assert_eq!(strip_line_markers("•"), "");
        assert_eq!(strip_line_markers("•   "), "");
    }

    #[test]
    fn test_strip_line_markers_inline_bullet() {
        assert_eq!(strip_line_markers("a ● b"), "a b");
        assert_eq!(strip_line_markers("●1. a"), "a");
    }

    #[test]
    fn test_strip_markers_keeps_line_breaks() {
        assert_eq!(strip_markers("•\n\nx"), "\n\nx");
        assert_eq!(strip_markers("1.\r\n2. b"), "1.\r\nb");
    }

    #[test]
    fn test_strip_markers_empty() {
        assert_eq!(strip_markers(""), "");
    }
}
