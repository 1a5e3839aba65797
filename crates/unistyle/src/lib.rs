//! # Unistyle - Styled Unicode text without markup
//!
//! Unistyle maps plain ASCII text onto the Unicode ranges that *look* styled
//! (mathematical bold and italic, monospace, script, circled, squared,
//! fullwidth) and onto combining marks that fake strikethrough and
//! underline. It also maps such text back, detects which style a character
//! came from, and clears every style and list marker in one pass.
//!
//! Everything is a pure function over `&str`. The style tables are built
//! once, on first use, and never change afterwards, so every call is
//! reentrant and safe to make from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use unistyle::{clear_all, convert, is_styled, remove_style, StyleId};
//!
//! let bold = convert("Ship it", StyleId::Bold);
//! assert_eq!(bold, "𝗦𝗵𝗶𝗽 𝗶𝘁");
//! assert!(is_styled(&bold, StyleId::Bold));
//! assert_eq!(remove_style(&bold, StyleId::Bold), "Ship it");
//!
//! let struck = convert("done", StyleId::Strikethrough);
//! assert_eq!(clear_all(&format!("• {struck}")), "done");
//! ```
//!
//! ## Toggling
//!
//! A toolbar button toggles a style on a selection. Styles never stack:
//! [`toggle_style`] normalizes the selection first and then either leaves it
//! plain (the style was already there) or applies the requested style.
//!
//! ```rust
//! use unistyle::{toggle_style, StyleId};
//!
//! let bold = toggle_style("AB", StyleId::Bold);
//! // Strikethrough replaces bold instead of marking the bold glyphs.
//! assert_eq!(toggle_style(&bold, StyleId::Strikethrough), "A\u{336}B\u{336}");
//! ```
//!
//! List markers work on lines; see [`toggle_bullet`] and [`toggle_numbered`].
//! [`apply`] dispatches any toolbar [`Action`], and [`Formatter`] does the
//! same with non-default [`FormatterConfig`] settings.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: registry construction at
//! `trace`, each applied action at `debug`. Text content is never logged.

mod action;
mod clear;
mod config;
pub mod style;
mod transform;

pub use action::Action;
pub use config::{Formatter, FormatterConfig};
pub use style::{
    Classified, ClassificationTable, OffsetBases, RegistryError, StyleDescriptor, StyleError,
    StyleId, StyleKind, StyleRegistry,
};
pub use unistyle_markers::{
    strip_markers, toggle_bullet, toggle_numbered, toggle_numbered_with, NumberingPolicy,
};

/// Converts plain text to `style`. See [`StyleRegistry::convert`].
pub fn convert(text: &str, style: StyleId) -> String {
    StyleRegistry::builtin().convert(text, style)
}

/// Returns `true` if `style` is present in `text`. See [`StyleRegistry::is_styled`].
pub fn is_styled(text: &str, style: StyleId) -> bool {
    StyleRegistry::builtin().is_styled(text, style)
}

/// Reverses `style` only. See [`StyleRegistry::remove_style`].
pub fn remove_style(text: &str, style: StyleId) -> String {
    StyleRegistry::builtin().remove_style(text, style)
}

/// Removes every style and list marker. See [`StyleRegistry::clear_all`].
pub fn clear_all(text: &str) -> String {
    StyleRegistry::builtin().clear_all(text)
}

/// Removes every style but keeps list markers. See [`StyleRegistry::clear_styles`].
pub fn clear_styles(text: &str) -> String {
    StyleRegistry::builtin().clear_styles(text)
}

/// Traces a styled character back to its style and plain form.
pub fn classify(ch: char) -> Option<Classified> {
    StyleRegistry::builtin().classify(ch)
}

/// Returns `true` if `ch` was produced by any non-combining style.
pub fn is_styled_char(ch: char) -> bool {
    StyleRegistry::builtin().is_styled_char(ch)
}

/// Toggles `style` with default settings. See [`Formatter::toggle_style`].
pub fn toggle_style(text: &str, style: StyleId) -> String {
    Formatter::new().toggle_style(text, style)
}

/// Applies `action` with default settings. See [`Formatter::apply`].
///
/// ```rust
/// use unistyle::{apply, Action};
///
/// assert_eq!(apply(Action::Numbered, "milk\neggs"), "1. milk\n2. eggs");
/// assert_eq!(apply("clear".parse().unwrap(), "1. milk\n2. eggs"), "milk\neggs");
/// ```
pub fn apply(action: Action, text: &str) -> String {
    Formatter::new().apply(action, text)
}
