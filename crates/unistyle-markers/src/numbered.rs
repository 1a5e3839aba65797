//! Numbered list toggling.

use serde::{Deserialize, Serialize};

use crate::pattern::{is_numbered, ordinal_len, strip_ordinal};
use crate::{all_marked, is_blank};

/// How lines that already carry an ordinal are treated when numbering a
/// block that is only partly numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingPolicy {
    /// Replace any existing ordinal with the line's sequential position.
    #[default]
    Renumber,
    /// Leave already-numbered lines as they are. Positions still advance
    /// past them, so the output may not be monotonic.
    Preserve,
}

/// Toggles ordinal markers using [`NumberingPolicy::Renumber`].
///
/// ```rust
/// use unistyle_markers::toggle_numbered;
///
/// assert_eq!(toggle_numbered(&["a", "b"]), vec!["1. a", "2. b"]);
/// assert_eq!(toggle_numbered(&["1. a", "2) b"]), vec!["a", "b"]);
/// assert_eq!(toggle_numbered(&["a", "7. b"]), vec!["1. a", "2. b"]);
/// ```
pub fn toggle_numbered<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    toggle_numbered_with(lines, NumberingPolicy::default())
}

/// Toggles ordinal markers on every non-blank line.
///
/// If every non-blank line starts with an ordinal (optional indentation, then
/// `digits` + `.` or `)` + horizontal whitespace such as a space, tab or
/// no-break space), the ordinal is removed from each line. Otherwise each
/// non-blank line is prefixed with its 1-based position among the non-blank
/// lines followed by `. `; `policy` decides what happens to lines that were
/// already numbered.
pub fn toggle_numbered_with<S: AsRef<str>>(lines: &[S], policy: NumberingPolicy) -> Vec<String> {
    if all_marked(lines, is_numbered) {
        return lines
            .iter()
            .map(|line| strip_ordinal(line.as_ref()).to_string())
            .collect();
    }

    let mut position = 0usize;
    lines
        .iter()
        .map(AsRef::as_ref)
        .map(|line| {
            if is_blank(line) {
                return line.to_string();
            }
            position += 1;
            match (ordinal_len(line), policy) {
                (Some(_), NumberingPolicy::Preserve) => line.to_string(),
                (Some(end), NumberingPolicy::Renumber) => format!("{}. {}", position, &line[end..]),
                (None, _) => format!("{}. {}", position, line),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_numbers() {
        assert_eq!(toggle_numbered(&["a", "b"]), vec!["1. a", "2. b"]);
    }

    #[test]
    fn test_removes_numbers() {
        assert_eq!(toggle_numbered(&["1. a", "2. b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_removes_paren_numbers() {
        assert_eq!(toggle_numbered(&["1) a", "20) b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_positions_skip_blank_lines() {
        assert_eq!(
            toggle_numbered(&["a", "", "b", "c"]),
            vec!["1. a", "", "2. b", "3. c"]
        );
    }

    #[test]
    fn test_renumber_mixed_block() {
        assert_eq!(
            toggle_numbered(&["a", "5. b", "c"]),
            vec!["1. a", "2. b", "3. c"]
        );
    }

    #[test]
    fn test_preserve_mixed_block() {
        assert_eq!(
            toggle_numbered_with(&["a", "5. b", "c"], NumberingPolicy::Preserve),
            vec!["1. a", "5. b", "3. c"]
        );
    }

    #[test]
    fn test_marker_needs_whitespace() {
        assert_eq!(toggle_numbered(&["1.a"]), vec!["1. 1.a"]);
    }

    #[test]
    fn test_no_break_space_counts_as_numbered() {
        assert_eq!(toggle_numbered(&["1.\u{a0}a", "2.\u{a0}b"]), vec!["a", "b"]);
        assert_eq!(toggle_numbered(&["1.\u{a0}a", "b"]), vec!["1. a", "2. b"]);
    }

    #[test]
    fn test_indented_ordinals() {
        assert_eq!(toggle_numbered(&["  1. a", "  2. b"]), vec!["a", "b"]);
        assert_eq!(toggle_numbered(&["a", "  1. b"]), vec!["1. a", "2. b"]);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(toggle_numbered(&["task"]), vec!["1. task"]);
        assert_eq!(toggle_numbered(&["1. task"]), vec!["task"]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(toggle_numbered(&empty).is_empty());
    }

    #[test]
    fn test_policy_default_is_renumber() {
        assert_eq!(NumberingPolicy::default(), NumberingPolicy::Renumber);
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&NumberingPolicy::Preserve).unwrap();
        assert_eq!(json, "\"preserve\"");
        let policy: NumberingPolicy = serde_json::from_str("\"renumber\"").unwrap();
        assert_eq!(policy, NumberingPolicy::Renumber);
    }
}
