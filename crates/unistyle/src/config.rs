//! Formatter configuration and the action entry point.

use serde::{Deserialize, Serialize};
use unistyle_markers::{toggle_bullet, toggle_numbered_with, NumberingPolicy};

use crate::action::Action;
use crate::style::{StyleId, StyleRegistry};

/// Settings that change how actions are applied.
///
/// Deserializes from camelCase keys; missing keys take their defaults.
///
/// ```rust
/// use unistyle::{FormatterConfig, NumberingPolicy};
///
/// let config: FormatterConfig = serde_json::from_str(r#"{"numbering": "preserve"}"#).unwrap();
/// assert_eq!(config.numbering, NumberingPolicy::Preserve);
/// assert!(!config.preserve_markers);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatterConfig {
    /// Treatment of already-numbered lines in a partly numbered block.
    pub numbering: NumberingPolicy,
    /// Keep bullets and ordinals when a style is toggled.
    pub preserve_markers: bool,
}

/// Applies [`Action`]s to selected text.
///
/// Style toggles never compose: the selection is normalized first, then
/// either left plain (if the requested style was already present) or
/// converted to the requested style.
///
/// # Example
///
/// ```rust
/// use unistyle::{Action, Formatter, NumberingPolicy, StyleId};
///
/// let formatter = Formatter::new().numbering(NumberingPolicy::Preserve);
///
/// let bold = formatter.apply(Action::Style(StyleId::Bold), "AB");
/// assert_eq!(bold, "𝗔𝗕");
/// assert_eq!(formatter.apply(Action::Style(StyleId::Bold), &bold), "AB");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    config: FormatterConfig,
    registry: &'a StyleRegistry,
}

impl Formatter<'static> {
    /// Creates a formatter over the built-in registry with default settings.
    pub fn new() -> Self {
        Self::with_config(FormatterConfig::default())
    }

    /// Creates a formatter over the built-in registry.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            registry: StyleRegistry::builtin(),
        }
    }
}

impl<'a> Formatter<'a> {
    /// Uses `registry` instead of the built-in one.
    pub fn registry<'b>(self, registry: &'b StyleRegistry) -> Formatter<'b> {
        Formatter {
            config: self.config,
            registry,
        }
    }

    /// Sets the numbering policy, returning the updated formatter for chaining.
    pub fn numbering(mut self, policy: NumberingPolicy) -> Self {
        self.config.numbering = policy;
        self
    }

    /// Sets whether style toggles keep list markers.
    pub fn preserve_markers(mut self, preserve: bool) -> Self {
        self.config.preserve_markers = preserve;
        self
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Toggles `style` on `text`.
    ///
    /// If `style` is already present, the text is normalized and returned
    /// plain. Otherwise it is normalized and then converted. Normalizing is
    /// [`StyleRegistry::clear_all`], or [`StyleRegistry::clear_styles`] when
    /// markers are preserved.
    pub fn toggle_style(&self, text: &str, style: StyleId) -> String {
        let plain = if self.config.preserve_markers {
            self.registry.clear_styles(text)
        } else {
            self.registry.clear_all(text)
        };
        if self.registry.is_styled(text, style) {
            plain
        } else {
            self.registry.convert(&plain, style)
        }
    }

    /// Applies `action` to `text`.
    ///
    /// List actions split the text on `\n`, toggle markers per line and
    /// join the lines back with `\n`.
    pub fn apply(&self, action: Action, text: &str) -> String {
        log::debug!("applying {} to {} chars", action, text.chars().count());
        match action {
            Action::Style(style) => self.toggle_style(text, style),
            Action::Bullet => {
                let lines: Vec<&str> = text.split('\n').collect();
                toggle_bullet(&lines).join("\n")
            }
            Action::Numbered => {
                let lines: Vec<&str> = text.split('\n').collect();
                toggle_numbered_with(&lines, self.config.numbering).join("\n")
            }
            Action::Clear => self.registry.clear_all(text),
        }
    }
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Self::new()
    }
}
