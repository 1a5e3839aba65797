//! The closed set of supported styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::StyleError;

/// Identifies one Unicode text style.
///
/// The set is closed: every style the engine knows about is a variant here,
/// and the registry holds exactly one descriptor per variant. String names
/// (as sent by a toolbar or a message handler) are parsed with
/// [`FromStr`], which is the only place an unknown style can show up.
///
/// ```rust
/// use unistyle::StyleId;
///
/// let style: StyleId = "boldItalic".parse().unwrap();
/// assert_eq!(style, StyleId::BoldItalic);
/// assert!("blink".parse::<StyleId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleId {
    Bold,
    Italic,
    BoldItalic,
    Monospace,
    SansSerif,
    Script,
    Circled,
    NegativeCircled,
    Squared,
    Fullwidth,
    Strikethrough,
    Underline,
}

impl StyleId {
    /// Every style, in classifier priority order.
    pub const ALL: [StyleId; 12] = [
        StyleId::Bold,
        StyleId::Italic,
        StyleId::BoldItalic,
        StyleId::Monospace,
        StyleId::SansSerif,
        StyleId::Script,
        StyleId::Circled,
        StyleId::NegativeCircled,
        StyleId::Squared,
        StyleId::Fullwidth,
        StyleId::Strikethrough,
        StyleId::Underline,
    ];

    /// Wire name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            StyleId::Bold => "bold",
            StyleId::Italic => "italic",
            StyleId::BoldItalic => "boldItalic",
            StyleId::Monospace => "monospace",
            StyleId::SansSerif => "sansSerif",
            StyleId::Script => "script",
            StyleId::Circled => "circled",
            StyleId::NegativeCircled => "negativeCircled",
            StyleId::Squared => "squared",
            StyleId::Fullwidth => "fullwidth",
            StyleId::Strikethrough => "strikethrough",
            StyleId::Underline => "underline",
        }
    }

    /// Human-readable label for menus and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            StyleId::Bold => "Bold",
            StyleId::Italic => "Italic",
            StyleId::BoldItalic => "Bold Italic",
            StyleId::Monospace => "Monospace",
            StyleId::SansSerif => "Sans-serif",
            StyleId::Script => "Script",
            StyleId::Circled => "Circled",
            StyleId::NegativeCircled => "Negative Circled",
            StyleId::Squared => "Squared",
            StyleId::Fullwidth => "Fullwidth",
            StyleId::Strikethrough => "Strikethrough",
            StyleId::Underline => "Underline",
        }
    }

    /// The label rendered in this style, for menu entries.
    ///
    /// Styles without lowercase glyphs render the label in capitals.
    pub fn preview(self) -> String {
        crate::StyleRegistry::builtin().preview(self)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleId::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| StyleError::UnknownStyle(s.to_string()))
    }
}

impl TryFrom<&str> for StyleId {
    type Error = StyleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_priority_order() {
        for (i, style) in StyleId::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
        }
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for style in StyleId::ALL {
            assert_eq!(style.name().parse::<StyleId>(), Ok(style));
        }
    }

    #[test]
    fn test_unknown_style() {
        assert_eq!(
            "Bold".parse::<StyleId>(),
            Err(StyleError::UnknownStyle("Bold".to_string()))
        );
        assert!(StyleId::try_from("").is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        for style in StyleId::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.name()));
        }
        let parsed: StyleId = serde_json::from_str("\"negativeCircled\"").unwrap();
        assert_eq!(parsed, StyleId::NegativeCircled);
    }

    #[test]
    fn test_display() {
        assert_eq!(StyleId::SansSerif.to_string(), "sansSerif");
    }

    #[test]
    fn test_preview() {
        assert_eq!(StyleId::Bold.preview(), "𝗕𝗼𝗹𝗱");
        assert_eq!(StyleId::Squared.preview(), "🅂🅀🅄🄰🅁🄴🄳");
        assert_eq!(StyleId::Fullwidth.preview(), "Ｆｕｌｌｗｉｄｔｈ");
    }
}
