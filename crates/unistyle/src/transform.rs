//! Per-style conversion in both directions.

use crate::style::{StyleId, StyleKind, StyleRegistry};

/// Whitespace that combining styles leave unmarked.
fn is_unmarked(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\r')
}

impl StyleRegistry {
    /// Converts plain text to `style`.
    ///
    /// Characters the style does not cover are kept as they are. Every style
    /// except the combining ones preserves the character count. Combining
    /// styles append their mark after each character other than space, `\n`
    /// and `\r`; a character produced by another style is reduced to plain
    /// first so the mark never lands on a styled glyph. Existing marks are
    /// never marked themselves, and a copy of the style's own mark already in
    /// the input is dropped, so converting twice yields the same text.
    ///
    /// ```rust
    /// use unistyle::{StyleId, StyleRegistry};
    ///
    /// let registry = StyleRegistry::builtin();
    /// assert_eq!(registry.convert("ab 12", StyleId::Circled), "ⓐⓑ ①②");
    /// assert_eq!(registry.convert("A B", StyleId::Strikethrough), "A\u{336} B\u{336}");
    /// ```
    pub fn convert(&self, text: &str, style: StyleId) -> String {
        let entry = self.entry(style);
        match entry.descriptor.kind {
            StyleKind::CombiningChar(mark) => {
                let mut out = String::with_capacity(text.len() * 2);
                for ch in text.chars() {
                    if ch == mark {
                        continue;
                    }
                    if self.is_combining_mark(ch) {
                        out.push(ch);
                        continue;
                    }
                    let base = self.classification().plain(ch).unwrap_or(ch);
                    out.push(base);
                    if !is_unmarked(base) {
                        out.push(mark);
                    }
                }
                out
            }
            StyleKind::CodepointOffset(_) | StyleKind::ExplicitTable(_) => text
                .chars()
                .map(|ch| entry.styled(ch).unwrap_or(ch))
                .collect(),
        }
    }

    /// Returns `true` if any character of `text` was produced by `style`.
    ///
    /// For combining styles this means the mark occurs anywhere in the text.
    /// Legacy glyphs count as output of the style they belonged to.
    pub fn is_styled(&self, text: &str, style: StyleId) -> bool {
        let entry = self.entry(style);
        match entry.descriptor.kind {
            StyleKind::CombiningChar(mark) => text.contains(mark),
            StyleKind::CodepointOffset(_) | StyleKind::ExplicitTable(_) => {
                text.chars().any(|ch| entry.plain(ch).is_some())
            }
        }
    }

    /// Reverses `style` only.
    ///
    /// Characters produced by other styles pass through unchanged. For
    /// combining styles every occurrence of the mark is removed.
    pub fn remove_style(&self, text: &str, style: StyleId) -> String {
        let entry = self.entry(style);
        match entry.descriptor.kind {
            StyleKind::CombiningChar(mark) => text.chars().filter(|&ch| ch != mark).collect(),
            StyleKind::CodepointOffset(_) | StyleKind::ExplicitTable(_) => text
                .chars()
                .map(|ch| entry.plain(ch).unwrap_or(ch))
                .collect(),
        }
    }
}
