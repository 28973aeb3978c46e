//! Persian (fa) error messages for field validation.
//!
//! The pack registers a message template (and, for the size/comparison
//! tags, a family of templates with cardinal plural variants) plus a
//! renderer for every built-in validation tag. Registration runs once
//! during setup against a [`MessageRegistry`] and a [`Translator`] scoped
//! to the locale; rendering afterwards is read-only and safe to call from
//! concurrent validations.
//!
//! ```
//! use valmsg_core::{FieldError, FieldKind, MessageRegistry};
//! use valmsg_translator::Translator;
//!
//! let mut registry = MessageRegistry::new();
//! let mut translator = Translator::new(valmsg_fa::LOCALE);
//! valmsg_fa::register_default_messages(&mut registry, &mut translator)?;
//!
//! let error = FieldError::new("min", "Age")
//!     .with_param("18")
//!     .with_kind(FieldKind::Int);
//! assert_eq!(
//!     registry.message(&translator, &error),
//!     " Age باید بزرگتر از 18 باشه!"
//! );
//! # Ok::<(), valmsg_translator::TranslatorError>(())
//! ```

use valmsg_core::{register_rules, MessageRegistry};
use valmsg_translator::{Translator, TranslatorResult};

pub use specs::rule_specs;

pub mod render;
mod specs;

pub const LOCALE: &str = "fa";

/// Install the complete Persian message set into the given registry and
/// store. Fails fast on the first registration error; keys registered
/// before the failure are left in place.
pub fn register_default_messages(
    registry: &mut MessageRegistry,
    translator: &mut Translator,
) -> TranslatorResult<()> {
    register_rules(registry, translator, &rule_specs())
}
