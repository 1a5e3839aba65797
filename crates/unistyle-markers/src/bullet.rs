//! Bullet list toggling.

use crate::pattern::{is_bulleted, strip_bullet, BULLET_PREFIX};
use crate::{all_marked, is_blank};

/// Toggles a `• ` bullet on every non-blank line.
///
/// If every non-blank line already starts with `•` (indentation allowed), the
/// indentation, the bullet and at most one following space are removed from
/// each line. Otherwise each non-blank line
/// is prefixed with `• `; a line that already had a bullet keeps a single one.
/// Blank lines are returned unchanged in both directions.
///
/// ```rust
/// use unistyle_markers::toggle_bullet;
///
/// assert_eq!(toggle_bullet(&["a", "", "b"]), vec!["• a", "", "• b"]);
/// assert_eq!(toggle_bullet(&["• a", "", "•b"]), vec!["a", "", "b"]);
/// ```
pub fn toggle_bullet<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let remove = all_marked(lines, is_bulleted);
    lines
        .iter()
        .map(AsRef::as_ref)
        .map(|line| {
            if is_blank(line) {
                line.to_string()
            } else if remove {
                strip_bullet(line).to_string()
            } else {
                format!("{}{}", BULLET_PREFIX, strip_bullet(line))
            }
        })
        .collect()
}
