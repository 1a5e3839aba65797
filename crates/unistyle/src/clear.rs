//! Clearing every style at once.

use unistyle_markers::strip_markers;

use crate::style::StyleRegistry;

impl StyleRegistry {
    /// Reduces text from any mix of styles back to plain characters.
    ///
    /// Combining marks are dropped first so a marked plain character is never
    /// mistaken for anything else. The rest of the text is walked by code
    /// point: space, tab, `\n` and `\r` are kept verbatim, and every other
    /// character is replaced by its plain form if any style produced it.
    /// List markers are left in place.
    pub fn clear_styles(&self, text: &str) -> String {
        text.chars()
            .filter(|&ch| !self.is_combining_mark(ch))
            .map(|ch| match ch {
                ' ' | '\t' | '\n' | '\r' => ch,
                _ => self.classification().plain(ch).unwrap_or(ch),
            })
            .collect()
    }

    /// Removes every style and every list marker.
    ///
    /// This is [`clear_styles`](Self::clear_styles) followed by stripping
    /// leading bullets and ordinals from each line and inline `●` glyphs.
    /// Clearing already-cleared text returns it unchanged.
    ///
    /// ```rust
    /// use unistyle::{StyleId, StyleRegistry};
    ///
    /// let registry = StyleRegistry::builtin();
    /// let styled = format!("• {}", registry.convert("Launch day", StyleId::Bold));
    /// assert_eq!(registry.clear_all(&styled), "Launch day");
    /// ```
    pub fn clear_all(&self, text: &str) -> String {
        strip_markers(&self.clear_styles(text))
    }
}
