//! Style-agnostic classification of styled characters.

use std::collections::HashMap;

use super::id::StyleId;

/// A styled character traced back to the style that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub style: StyleId,
    pub plain: char,
}

/// Union of every style's reverse index.
///
/// When two styles emit the same character, the one earlier in
/// [`StyleId::ALL`] owns it. Combining marks are not part of the table.
#[derive(Debug, Clone, Default)]
pub struct ClassificationTable {
    map: HashMap<char, Classified>,
}

impl ClassificationTable {
    pub(crate) fn build<'a, I>(reverse_indexes: I) -> Self
    where
        I: IntoIterator<Item = (StyleId, &'a HashMap<char, char>)>,
    {
        let mut map = HashMap::new();
        for (style, reverse) in reverse_indexes {
            for (&styled, &plain) in reverse {
                map.entry(styled).or_insert(Classified { style, plain });
            }
        }
        Self { map }
    }

    pub fn classify(&self, ch: char) -> Option<Classified> {
        self.map.get(&ch).copied()
    }

    /// The plain character behind `ch`, if any style produced it.
    pub fn plain(&self, ch: char) -> Option<char> {
        self.map.get(&ch).map(|classified| classified.plain)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleRegistry;

    #[test]
    fn test_first_style_wins() {
        let first: HashMap<char, char> = [('x', 'a')].into_iter().collect();
        let second: HashMap<char, char> = [('x', 'b'), ('y', 'c')].into_iter().collect();
        let table =
            ClassificationTable::build([(StyleId::Bold, &first), (StyleId::Italic, &second)]);

        assert_eq!(
            table.classify('x'),
            Some(Classified {
                style: StyleId::Bold,
                plain: 'a'
            })
        );
        assert_eq!(table.plain('y'), Some('c'));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_builtin_classifies_every_style() {
        let table = StyleRegistry::builtin().classification();
        let samples = [
            ('𝗕', StyleId::Bold, 'B'),
            ('𝐁', StyleId::Bold, 'B'),
            ('𝘪', StyleId::Italic, 'i'),
            ('ℎ', StyleId::Italic, 'h'),
            ('𝙞', StyleId::BoldItalic, 'i'),
            ('𝚖', StyleId::Monospace, 'm'),
            ('𝖲', StyleId::SansSerif, 'S'),
            ('ℋ', StyleId::Script, 'H'),
            ('⓪', StyleId::Circled, '0'),
            ('🅐', StyleId::NegativeCircled, 'A'),
            ('🄰', StyleId::Squared, 'A'),
            ('ｆ', StyleId::Fullwidth, 'f'),
            ('\u{3000}', StyleId::Fullwidth, ' '),
        ];
        for (ch, style, plain) in samples {
            assert_eq!(table.classify(ch), Some(Classified { style, plain }), "{ch}");
        }
    }

    #[test]
    fn test_plain_and_marks_unclassified() {
        let table = StyleRegistry::builtin().classification();
        for ch in ['a', 'Z', '5', ' ', '•', 'é', '\u{0336}', '\u{0332}'] {
            assert_eq!(table.classify(ch), None, "{ch:?}");
        }
    }
}
