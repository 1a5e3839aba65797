//! The style registry: descriptors plus the lookup tables derived from them.
//!
//! [`StyleRegistry`] is built once from a descriptor set and is read-only
//! afterwards. Building it:
//!
//! 1. Checks that every [`StyleId`] is described exactly once
//! 2. Builds a forward table for explicit-table styles and extras
//! 3. Inverts every style's output (legacy runs included) into a reverse
//!    index, failing if two plain characters share a styled one
//! 4. Merges all reverse indexes into the [`ClassificationTable`]
//!
//! Most callers never build one: [`StyleRegistry::builtin`] returns the
//! process-wide registry for the built-in tables.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::classify::{Classified, ClassificationTable};
use super::descriptor::{StyleDescriptor, StyleKind};
use super::error::RegistryError;
use super::id::StyleId;
use super::tables::BUILTIN_STYLES;

static BUILTIN: Lazy<StyleRegistry> = Lazy::new(|| {
    let registry = match StyleRegistry::new(BUILTIN_STYLES) {
        Ok(registry) => registry,
        Err(err) => panic!("built-in style tables are inconsistent: {err}"),
    };
    log::trace!(
        "built style registry: {} styles, {} classified characters",
        registry.entries.len(),
        registry.classification.len()
    );
    registry
});

/// A style's descriptor with its derived tables.
#[derive(Debug, Clone)]
pub(crate) struct StyleEntry {
    pub(crate) descriptor: StyleDescriptor,
    forward: HashMap<char, char>,
    pub(crate) reverse: HashMap<char, char>,
}

impl StyleEntry {
    fn build(descriptor: StyleDescriptor) -> Result<Self, RegistryError> {
        let mut forward = HashMap::new();
        if let StyleKind::ExplicitTable(table) = descriptor.kind {
            forward.extend(table.iter().copied());
        }
        forward.extend(descriptor.extras.iter().copied());

        let mut reverse = HashMap::new();
        for (plain, styled) in descriptor
            .forward_pairs()
            .into_iter()
            .chain(descriptor.reverse_only_pairs())
        {
            match reverse.entry(styled) {
                Entry::Vacant(slot) => {
                    slot.insert(plain);
                }
                Entry::Occupied(slot) if *slot.get() != plain => {
                    return Err(RegistryError::AmbiguousReverse {
                        style: descriptor.id,
                        target: styled,
                        existing: *slot.get(),
                        conflicting: plain,
                    });
                }
                Entry::Occupied(_) => {}
            }
        }

        Ok(Self {
            descriptor,
            forward,
            reverse,
        })
    }

    /// The styled form of `ch`, or `None` if this style leaves it alone.
    pub(crate) fn styled(&self, ch: char) -> Option<char> {
        match self.descriptor.kind {
            StyleKind::CodepointOffset(bases) => {
                self.forward.get(&ch).copied().or_else(|| bases.apply(ch))
            }
            StyleKind::ExplicitTable(_) => self.forward.get(&ch).copied(),
            StyleKind::CombiningChar(_) => None,
        }
    }

    /// The plain form of a character this style produced.
    pub(crate) fn plain(&self, ch: char) -> Option<char> {
        self.reverse.get(&ch).copied()
    }
}

/// Registry of every supported style and its lookup tables.
///
/// # Example
///
/// ```rust
/// use unistyle::{StyleId, StyleRegistry};
///
/// let registry = StyleRegistry::builtin();
/// assert_eq!(registry.convert("Hi 5", StyleId::Monospace), "𝙷𝚒 𝟻");
/// assert_eq!(registry.classify('𝚒').map(|c| c.plain), Some('i'));
/// ```
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    entries: Vec<StyleEntry>,
    classification: ClassificationTable,
    marks: Vec<char>,
}

impl StyleRegistry {
    /// Builds a registry from one descriptor per [`StyleId`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if a style is missing or described twice, or
    /// if a style's output cannot be reversed unambiguously.
    pub fn new<I>(descriptors: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = StyleDescriptor>,
    {
        let mut slots: [Option<StyleEntry>; 12] = Default::default();
        for descriptor in descriptors {
            let slot = &mut slots[descriptor.id.index()];
            if slot.is_some() {
                return Err(RegistryError::DuplicateStyle(descriptor.id));
            }
            *slot = Some(StyleEntry::build(descriptor)?);
        }

        let entries = StyleId::ALL
            .into_iter()
            .zip(slots)
            .map(|(id, slot)| slot.ok_or(RegistryError::MissingStyle(id)))
            .collect::<Result<Vec<_>, _>>()?;

        let classification = ClassificationTable::build(
            entries
                .iter()
                .map(|entry| (entry.descriptor.id, &entry.reverse)),
        );
        let marks = entries
            .iter()
            .filter_map(|entry| entry.descriptor.combining_mark())
            .collect();

        Ok(Self {
            entries,
            classification,
            marks,
        })
    }

    /// The process-wide registry for the built-in style tables.
    ///
    /// Built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built-in tables violate a registry invariant.
    pub fn builtin() -> &'static StyleRegistry {
        &BUILTIN
    }

    /// The descriptor registered for `style`.
    pub fn descriptor(&self, style: StyleId) -> &StyleDescriptor {
        &self.entry(style).descriptor
    }

    /// The derived table answering "which style produced this character".
    pub fn classification(&self) -> &ClassificationTable {
        &self.classification
    }

    /// Classifies a single character against every style.
    pub fn classify(&self, ch: char) -> Option<Classified> {
        self.classification.classify(ch)
    }

    /// Returns `true` if `ch` is the output of any non-combining style.
    pub fn is_styled_char(&self, ch: char) -> bool {
        self.classification.classify(ch).is_some()
    }

    /// Returns `true` if `ch` is the mark of a combining style.
    pub fn is_combining_mark(&self, ch: char) -> bool {
        self.marks.contains(&ch)
    }

    /// The style's label rendered in that style.
    ///
    /// Styles without lowercase glyphs render the label in capitals.
    pub fn preview(&self, style: StyleId) -> String {
        let entry = self.entry(style);
        let label = style.label();
        if entry.descriptor.combining_mark().is_none() && entry.styled('a').is_none() {
            self.convert(&label.to_uppercase(), style)
        } else {
            self.convert(label, style)
        }
    }

    pub(crate) fn entry(&self, style: StyleId) -> &StyleEntry {
        &self.entries[style.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::descriptor::OffsetBases;

    fn builtin_with(replacement: StyleDescriptor) -> Vec<StyleDescriptor> {
        BUILTIN_STYLES
            .iter()
            .map(|d| if d.id == replacement.id { replacement } else { *d })
            .collect()
    }

    #[test]
    fn test_builtin_builds() {
        let registry = StyleRegistry::builtin();
        assert_eq!(registry.entries.len(), StyleId::ALL.len());
        assert!(!registry.classification().is_empty());
    }

    #[test]
    fn test_descriptor_lookup() {
        let registry = StyleRegistry::builtin();
        for style in StyleId::ALL {
            assert_eq!(registry.descriptor(style).id, style);
        }
    }

    #[test]
    fn test_missing_style_rejected() {
        let partial = BUILTIN_STYLES.iter().copied().filter(|d| d.id != StyleId::Script);
        assert_eq!(
            StyleRegistry::new(partial).unwrap_err(),
            RegistryError::MissingStyle(StyleId::Script)
        );
    }

    #[test]
    fn test_duplicate_style_rejected() {
        let mut descriptors = BUILTIN_STYLES.to_vec();
        descriptors.push(BUILTIN_STYLES[0]);
        assert_eq!(
            StyleRegistry::new(descriptors).unwrap_err(),
            RegistryError::DuplicateStyle(StyleId::Bold)
        );
    }

    #[test]
    fn test_ambiguous_table_rejected() {
        const CLASHING: &[(char, char)] = &[('a', 'ⓐ'), ('A', 'ⓐ')];
        let descriptors = builtin_with(StyleDescriptor::new(
            StyleId::Circled,
            StyleKind::ExplicitTable(CLASHING),
        ));
        assert_eq!(
            StyleRegistry::new(descriptors).unwrap_err(),
            RegistryError::AmbiguousReverse {
                style: StyleId::Circled,
                target: 'ⓐ',
                existing: 'a',
                conflicting: 'A',
            }
        );
    }

    #[test]
    fn test_case_folding_offsets_rejected() {
        // Lowercase folded onto the capital run cannot be reversed.
        let descriptors = builtin_with(StyleDescriptor::new(
            StyleId::Squared,
            StyleKind::CodepointOffset(OffsetBases::new(Some(0x1F130), Some(0x1F130), None)),
        ));
        assert!(matches!(
            StyleRegistry::new(descriptors),
            Err(RegistryError::AmbiguousReverse {
                style: StyleId::Squared,
                ..
            })
        ));
    }

    #[test]
    fn test_legacy_clash_rejected() {
        let descriptors = builtin_with(
            StyleDescriptor::new(
                StyleId::Bold,
                StyleKind::CodepointOffset(OffsetBases::new(Some(0x1D5D4), None, None)),
            )
            .with_legacy(OffsetBases::new(None, Some(0x1D5D4), None)),
        );
        assert!(StyleRegistry::new(descriptors).is_err());
    }

    #[test]
    fn test_legacy_glyphs_reverse_only() {
        let registry = StyleRegistry::builtin();
        let bold = registry.entry(StyleId::Bold);
        assert_eq!(bold.plain('𝐀'), Some('A'));
        assert_eq!(bold.plain('𝗔'), Some('A'));
        assert_eq!(bold.styled('A'), Some('𝗔'));
    }

    #[test]
    fn test_legacy_script_pairs_reverse_only() {
        let registry = StyleRegistry::builtin();
        let script = registry.entry(StyleId::Script);
        assert_eq!(script.plain('𝐻'), Some('H'));
        assert_eq!(script.plain('ℋ'), Some('H'));
        assert_eq!(script.styled('H'), Some('ℋ'));
        // Classification still attributes the serif italic glyph to italic.
        assert_eq!(registry.classify('𝐻').map(|c| c.style), Some(StyleId::Italic));
    }

    #[test]
    fn test_legacy_pair_clash_rejected() {
        const CLASHING: &[(char, char)] = &[('B', '𝒜')];
        let script = BUILTIN_STYLES[StyleId::Script.index()].with_legacy_pairs(CLASHING);
        assert_eq!(
            StyleRegistry::new(builtin_with(script)).unwrap_err(),
            RegistryError::AmbiguousReverse {
                style: StyleId::Script,
                target: '𝒜',
                existing: 'A',
                conflicting: 'B',
            }
        );
    }

    #[test]
    fn test_combining_marks() {
        let registry = StyleRegistry::builtin();
        assert!(registry.is_combining_mark('\u{0336}'));
        assert!(registry.is_combining_mark('\u{0332}'));
        assert!(!registry.is_combining_mark('a'));
    }

    #[test]
    fn test_preview_capitals_only() {
        let registry = StyleRegistry::builtin();
        assert_eq!(registry.preview(StyleId::NegativeCircled), "🅝🅔🅖🅐🅣🅘🅥🅔 🅒🅘🅡🅒🅛🅔🅓");
        assert_eq!(registry.preview(StyleId::Underline), "U̲n̲d̲e̲r̲l̲i̲n̲e̲");
    }
}
