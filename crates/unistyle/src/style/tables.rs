//! Built-in style tables.

use super::descriptor::{OffsetBases, StyleDescriptor, StyleKind};
use super::id::StyleId;

/// Combining long stroke overlay.
pub const STRIKETHROUGH_MARK: char = '\u{0336}';

/// Combining low line.
pub const UNDERLINE_MARK: char = '\u{0332}';

/// Ideographic space, the fullwidth counterpart of U+0020.
pub const FULLWIDTH_SPACE: char = '\u{3000}';

// Reserved slots in Mathematical Alphanumeric Symbols whose glyphs were
// encoded earlier in Letterlike Symbols.
const LETTERLIKE: &[(u32, char)] = &[
    (0x1D455, 'ℎ'),
    (0x1D49D, 'ℬ'),
    (0x1D4A0, 'ℰ'),
    (0x1D4A1, 'ℱ'),
    (0x1D4A3, 'ℋ'),
    (0x1D4A4, 'ℐ'),
    (0x1D4A7, 'ℒ'),
    (0x1D4A8, 'ℳ'),
    (0x1D4AD, 'ℛ'),
    (0x1D4BA, 'ℯ'),
    (0x1D4BC, 'ℊ'),
    (0x1D4C4, 'ℴ'),
];

/// Returns the Letterlike Symbols character standing in for a reserved slot.
pub(crate) fn letterlike_substitute(code: u32) -> Option<char> {
    LETTERLIKE
        .iter()
        .find(|(slot, _)| *slot == code)
        .map(|(_, ch)| *ch)
}

#[rustfmt::skip]
const SCRIPT: &[(char, char)] = &[
    ('A', '𝒜'), ('B', 'ℬ'), ('C', '𝒞'), ('D', '𝒟'), ('E', 'ℰ'), ('F', 'ℱ'),
    ('G', '𝒢'), ('H', 'ℋ'), ('I', 'ℐ'), ('J', '𝒥'), ('K', '𝒦'), ('L', 'ℒ'),
    ('M', 'ℳ'), ('N', '𝒩'), ('O', '𝒪'), ('P', '𝒫'), ('Q', '𝒬'), ('R', 'ℛ'),
    ('S', '𝒮'), ('T', '𝒯'), ('U', '𝒰'), ('V', '𝒱'), ('W', '𝒲'), ('X', '𝒳'),
    ('Y', '𝒴'), ('Z', '𝒵'), ('a', '𝒶'), ('b', '𝒷'), ('c', '𝒸'), ('d', '𝒹'),
    ('e', 'ℯ'), ('f', '𝒻'), ('g', 'ℊ'), ('h', '𝒽'), ('i', '𝒾'), ('j', '𝒿'),
    ('k', '𝓀'), ('l', '𝓁'), ('m', '𝓂'), ('n', '𝓃'), ('o', 'ℴ'), ('p', '𝓅'),
    ('q', '𝓆'), ('r', '𝓇'), ('s', '𝓈'), ('t', '𝓉'), ('u', '𝓊'), ('v', '𝓋'),
    ('w', '𝓌'), ('x', '𝓍'), ('y', '𝓎'), ('z', '𝓏'),
];

// Serif italic stand-ins for the script letters that live in Letterlike
// Symbols, as written by earlier releases.
#[rustfmt::skip]
const SCRIPT_LEGACY: &[(char, char)] = &[
    ('B', '𝐵'), ('E', '𝐸'), ('F', '𝐹'), ('H', '𝐻'), ('I', '𝐼'), ('L', '𝐿'),
    ('M', '𝑀'), ('R', '𝑅'), ('e', '𝑒'), ('g', '𝑔'), ('o', '𝑜'),
];

// ⓪ lives at U+24EA, away from the ①..⑨ run at U+2460.
#[rustfmt::skip]
const CIRCLED: &[(char, char)] = &[
    ('A', 'Ⓐ'), ('B', 'Ⓑ'), ('C', 'Ⓒ'), ('D', 'Ⓓ'), ('E', 'Ⓔ'), ('F', 'Ⓕ'),
    ('G', 'Ⓖ'), ('H', 'Ⓗ'), ('I', 'Ⓘ'), ('J', 'Ⓙ'), ('K', 'Ⓚ'), ('L', 'Ⓛ'),
    ('M', 'Ⓜ'), ('N', 'Ⓝ'), ('O', 'Ⓞ'), ('P', 'Ⓟ'), ('Q', 'Ⓠ'), ('R', 'Ⓡ'),
    ('S', 'Ⓢ'), ('T', 'Ⓣ'), ('U', 'Ⓤ'), ('V', 'Ⓥ'), ('W', 'Ⓦ'), ('X', 'Ⓧ'),
    ('Y', 'Ⓨ'), ('Z', 'Ⓩ'), ('a', 'ⓐ'), ('b', 'ⓑ'), ('c', 'ⓒ'), ('d', 'ⓓ'),
    ('e', 'ⓔ'), ('f', 'ⓕ'), ('g', 'ⓖ'), ('h', 'ⓗ'), ('i', 'ⓘ'), ('j', 'ⓙ'),
    ('k', 'ⓚ'), ('l', 'ⓛ'), ('m', 'ⓜ'), ('n', 'ⓝ'), ('o', 'ⓞ'), ('p', 'ⓟ'),
    ('q', 'ⓠ'), ('r', 'ⓡ'), ('s', 'ⓢ'), ('t', 'ⓣ'), ('u', 'ⓤ'), ('v', 'ⓥ'),
    ('w', 'ⓦ'), ('x', 'ⓧ'), ('y', 'ⓨ'), ('z', 'ⓩ'), ('0', '⓪'), ('1', '①'),
    ('2', '②'), ('3', '③'), ('4', '④'), ('5', '⑤'), ('6', '⑥'), ('7', '⑦'),
    ('8', '⑧'), ('9', '⑨'),
];

const FULLWIDTH_EXTRAS: &[(char, char)] = &[(' ', FULLWIDTH_SPACE)];

const fn offsets(upper: u32, lower: Option<u32>, digit: Option<u32>) -> StyleKind {
    StyleKind::CodepointOffset(OffsetBases::new(Some(upper), lower, digit))
}

/// The built-in descriptor set, one per [`StyleId`], in priority order.
///
/// `bold`, `italic` and `boldItalic` emit the sans-serif mathematical runs.
/// The serif runs they used to emit are kept as legacy input, as are the
/// serif italic letters that used to fill the gaps in `script`.
pub static BUILTIN_STYLES: [StyleDescriptor; 12] = [
    StyleDescriptor::new(
        StyleId::Bold,
        offsets(0x1D5D4, Some(0x1D5EE), Some(0x1D7EC)),
    )
    .with_legacy(OffsetBases::new(Some(0x1D400), Some(0x1D41A), Some(0x1D7CE))),
    StyleDescriptor::new(StyleId::Italic, offsets(0x1D608, Some(0x1D622), None))
        .with_legacy(OffsetBases::new(Some(0x1D434), Some(0x1D44E), None)),
    StyleDescriptor::new(StyleId::BoldItalic, offsets(0x1D63C, Some(0x1D656), None))
        .with_legacy(OffsetBases::new(Some(0x1D468), Some(0x1D482), None)),
    StyleDescriptor::new(
        StyleId::Monospace,
        offsets(0x1D670, Some(0x1D68A), Some(0x1D7F6)),
    ),
    StyleDescriptor::new(
        StyleId::SansSerif,
        offsets(0x1D5A0, Some(0x1D5BA), Some(0x1D7E2)),
    ),
    StyleDescriptor::new(StyleId::Script, StyleKind::ExplicitTable(SCRIPT))
        .with_legacy_pairs(SCRIPT_LEGACY),
    StyleDescriptor::new(StyleId::Circled, StyleKind::ExplicitTable(CIRCLED)),
    // No lowercase negative circled or squared letters exist.
    StyleDescriptor::new(StyleId::NegativeCircled, offsets(0x1F150, None, None)),
    StyleDescriptor::new(StyleId::Squared, offsets(0x1F130, None, None)),
    StyleDescriptor::new(
        StyleId::Fullwidth,
        offsets(0xFF21, Some(0xFF41), Some(0xFF10)),
    )
    .with_extras(FULLWIDTH_EXTRAS),
    StyleDescriptor::new(
        StyleId::Strikethrough,
        StyleKind::CombiningChar(STRIKETHROUGH_MARK),
    ),
    StyleDescriptor::new(StyleId::Underline, StyleKind::CombiningChar(UNDERLINE_MARK)),
];
