use rustc_hash::FxHashMap;
use valmsg_translator::{Translator, TranslatorResult};

use crate::field::FieldError;

/// Renders one field error into localized text. Renderers must not fail:
/// recovery is handled inside (see [`crate::render_or_default`]).
pub type RenderFn = fn(&Translator, &FieldError) -> String;

/// Installs the templates a renderer will reference into the store.
pub type RegisterFn = fn(&mut Translator) -> TranslatorResult<()>;

/// The validation engine's tag → renderer table. Populated once during
/// setup; lookups afterwards take `&self` only.
#[derive(Default)]
pub struct MessageRegistry {
    renderers: FxHashMap<String, RenderFn>,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `register` against the store, then bind `render` to `tag`.
    /// Registration failures propagate and leave the tag unbound.
    pub fn register_translation(
        &mut self,
        tag: &str,
        translator: &mut Translator,
        register: impl FnOnce(&mut Translator) -> TranslatorResult<()>,
        render: RenderFn,
    ) -> TranslatorResult<()> {
        register(translator)?;
        self.renderers.insert(tag.to_string(), render);
        Ok(())
    }

    pub fn renderer(&self, tag: &str) -> Option<RenderFn> {
        self.renderers.get(tag).copied()
    }

    /// Produce the localized message for `error`, falling back to the
    /// error's own text when no renderer is bound to its tag.
    pub fn message(&self, translator: &Translator, error: &FieldError) -> String {
        match self.renderers.get(error.tag()) {
            Some(render) => render(translator, error),
            None => error.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}
