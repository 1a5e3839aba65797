//! Style system: identifiers, descriptors and the registry built from them.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleId`]: The closed set of supported styles
//! - [`StyleDescriptor`]: How one style maps plain characters to styled ones
//! - [`StyleRegistry`]: Descriptors plus derived forward, reverse and
//!   classification tables
//! - [`StyleError`] / [`RegistryError`]: Name and build-time errors
//!
//! The text operations themselves (`convert`, `clear_all`, ...) are methods
//! on [`StyleRegistry`] defined in the crate's transform modules.

mod classify;
mod descriptor;
mod error;
mod id;
mod registry;
mod tables;

pub use classify::{Classified, ClassificationTable};
pub use descriptor::{OffsetBases, StyleDescriptor, StyleKind};
pub use error::{RegistryError, StyleError};
pub use id::StyleId;
pub use registry::StyleRegistry;
pub use tables::{BUILTIN_STYLES, FULLWIDTH_SPACE, STRIKETHROUGH_MARK, UNDERLINE_MARK};
