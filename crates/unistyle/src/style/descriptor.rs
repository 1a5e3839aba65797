//! Style descriptors: how a style maps plain characters to styled ones.

use super::id::StyleId;
use super::tables::letterlike_substitute;

/// Start code points of one contiguous run per character class.
///
/// A `None` base leaves that class unmapped: its characters pass through
/// unchanged in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetBases {
    /// Target for `A`..=`Z`.
    pub upper: Option<u32>,
    /// Target for `a`..=`z`.
    pub lower: Option<u32>,
    /// Target for `0`..=`9`.
    pub digit: Option<u32>,
}

impl OffsetBases {
    pub const fn new(upper: Option<u32>, lower: Option<u32>, digit: Option<u32>) -> Self {
        Self {
            upper,
            lower,
            digit,
        }
    }

    /// Maps `ch` to `base + (ch - class start)`, or `None` if its class is unmapped.
    ///
    /// Reserved slots in the Mathematical Alphanumeric Symbols block resolve
    /// to the Letterlike Symbols character that stands in for them.
    pub fn apply(&self, ch: char) -> Option<char> {
        let (base, start) = match ch {
            'A'..='Z' => (self.upper?, 'A'),
            'a'..='z' => (self.lower?, 'a'),
            '0'..='9' => (self.digit?, '0'),
            _ => return None,
        };
        let code = base + (ch as u32 - start as u32);
        letterlike_substitute(code).or_else(|| char::from_u32(code))
    }

    /// Every `(plain, styled)` pair these bases produce.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        ('A'..='Z')
            .chain('a'..='z')
            .chain('0'..='9')
            .filter_map(move |ch| self.apply(ch).map(|styled| (ch, styled)))
    }
}

/// How a style produces its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// Arithmetic offset into contiguous code point runs.
    CodepointOffset(OffsetBases),
    /// A combining mark appended after each eligible character.
    CombiningChar(char),
    /// A per-character table, for blocks with no uniform layout.
    ExplicitTable(&'static [(char, char)]),
}

/// One entry of the style registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub id: StyleId,
    pub kind: StyleKind,
    /// Additional `(plain, styled)` pairs layered over the kind's mapping.
    pub extras: &'static [(char, char)],
    /// Glyph runs emitted by earlier releases. Recognized when reading text
    /// back, never produced.
    pub legacy: Option<OffsetBases>,
    /// Individual legacy `(plain, styled)` pairs, reverse-only like `legacy`.
    pub legacy_pairs: &'static [(char, char)],
}

impl StyleDescriptor {
    pub const fn new(id: StyleId, kind: StyleKind) -> Self {
        Self {
            id,
            kind,
            extras: &[],
            legacy: None,
            legacy_pairs: &[],
        }
    }

    pub const fn with_extras(mut self, extras: &'static [(char, char)]) -> Self {
        self.extras = extras;
        self
    }

    pub const fn with_legacy(mut self, legacy: OffsetBases) -> Self {
        self.legacy = Some(legacy);
        self
    }

    pub const fn with_legacy_pairs(mut self, pairs: &'static [(char, char)]) -> Self {
        self.legacy_pairs = pairs;
        self
    }

    /// Every `(plain, styled)` pair recognized on input but never emitted.
    pub fn reverse_only_pairs(&self) -> Vec<(char, char)> {
        let mut pairs: Vec<(char, char)> = match self.legacy {
            Some(bases) => bases.pairs().collect(),
            None => Vec::new(),
        };
        pairs.extend_from_slice(self.legacy_pairs);
        pairs
    }

    /// The combining mark, for combining styles.
    pub fn combining_mark(&self) -> Option<char> {
        match self.kind {
            StyleKind::CombiningChar(mark) => Some(mark),
            _ => None,
        }
    }

    /// Every `(plain, styled)` pair the style emits, extras included.
    ///
    /// Empty for combining styles, which have no per-character mapping.
    pub fn forward_pairs(&self) -> Vec<(char, char)> {
        let mut pairs: Vec<(char, char)> = match self.kind {
            StyleKind::CodepointOffset(bases) => bases.pairs().collect(),
            StyleKind::ExplicitTable(table) => table.to_vec(),
            StyleKind::CombiningChar(_) => return Vec::new(),
        };
        pairs.extend_from_slice(self.extras);
        pairs
    }
}
