//! Toolbar actions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::{StyleError, StyleId};

/// One formatting action a toolbar button or message can request.
///
/// Serializes to the same flat names the toolbar uses: a style's wire name
/// (`"bold"`, `"negativeCircled"`, ...) or `"bullet"`, `"numbered"`,
/// `"clear"`.
///
/// ```rust
/// use unistyle::{Action, StyleId};
///
/// assert_eq!("italic".parse::<Action>().unwrap(), Action::Style(StyleId::Italic));
/// assert_eq!("clear".parse::<Action>().unwrap(), Action::Clear);
/// assert!("font-dropdown".parse::<Action>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    /// Toggle a Unicode style.
    Style(StyleId),
    /// Toggle `• ` bullets per line.
    Bullet,
    /// Toggle `1. ` ordinals per line.
    Numbered,
    /// Remove every style and list marker.
    Clear,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Style(style) => style.name(),
            Action::Bullet => "bullet",
            Action::Numbered => "numbered",
            Action::Clear => "clear",
        }
    }

    /// Every action, styles first.
    pub fn all() -> impl Iterator<Item = Action> {
        StyleId::ALL
            .into_iter()
            .map(Action::Style)
            .chain([Action::Bullet, Action::Numbered, Action::Clear])
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bullet" => Ok(Action::Bullet),
            "numbered" => Ok(Action::Numbered),
            "clear" => Ok(Action::Clear),
            _ => s
                .parse()
                .map(Action::Style)
                .map_err(|_| StyleError::UnknownAction(s.to_string())),
        }
    }
}

impl TryFrom<String> for Action {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.name().to_string()
    }
}

impl From<StyleId> for Action {
    fn from(style: StyleId) -> Self {
        Action::Style(style)
    }
}
