//! Style and registry errors.

use thiserror::Error;

use super::id::StyleId;

/// Error returned when a style or action name cannot be resolved.
///
/// The style set is closed, so these only arise when parsing names that came
/// from outside the crate. Treat them as programming errors in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The name does not match any [`StyleId`].
    #[error("unknown style '{0}'")]
    UnknownStyle(String),
    /// The name matches neither a style nor a list/clear action.
    #[error("unknown action '{0}'")]
    UnknownAction(String),
}

/// Error returned when a [`StyleRegistry`](crate::StyleRegistry) cannot be built.
///
/// Every variant is an invariant violation in the descriptor set itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two plain characters map to the same styled character, so the style
    /// cannot be reversed.
    #[error("style '{style}' maps both '{existing}' and '{conflicting}' to '{target}'")]
    AmbiguousReverse {
        style: StyleId,
        target: char,
        existing: char,
        conflicting: char,
    },
    /// The same style was described more than once.
    #[error("style '{0}' is described more than once")]
    DuplicateStyle(StyleId),
    /// A style has no descriptor.
    #[error("style '{0}' has no descriptor")]
    MissingStyle(StyleId),
}
