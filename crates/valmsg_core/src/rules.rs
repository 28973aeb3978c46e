use valmsg_translator::{Translator, TranslatorResult};

use crate::error::{render_or_default, RenderError};
use crate::field::FieldError;
use crate::registry::{MessageRegistry, RegisterFn, RenderFn};

/// How one rule tag installs its messages: which of the registration and
/// rendering procedures are custom. Locale packs list one spec per tag.
pub enum RuleMessages {
    /// A single template registered under the tag, rendered generically.
    PlainTemplate {
        template: &'static str,
        overridable: bool,
    },
    /// A single template registered under the tag, rendered by a custom
    /// procedure.
    CustomRender {
        template: &'static str,
        overridable: bool,
        render: RenderFn,
    },
    /// A custom registration procedure (typically several templates and
    /// plural variants), rendered generically.
    CustomRegister { register: RegisterFn },
    /// Both procedures custom.
    Both {
        register: RegisterFn,
        render: RenderFn,
    },
}

pub struct RuleSpec {
    pub tag: &'static str,
    pub messages: RuleMessages,
}

/// Install every spec, in list order, into the registry and store. The
/// first failing registration aborts the walk; already-registered tags are
/// not rolled back.
pub fn register_rules(
    registry: &mut MessageRegistry,
    translator: &mut Translator,
    specs: &[RuleSpec],
) -> TranslatorResult<()> {
    for spec in specs {
        match spec.messages {
            RuleMessages::PlainTemplate {
                template,
                overridable,
            } => registry.register_translation(
                spec.tag,
                translator,
                |t| t.add(spec.tag, template, overridable),
                render_default,
            )?,
            RuleMessages::CustomRender {
                template,
                overridable,
                render,
            } => registry.register_translation(
                spec.tag,
                translator,
                |t| t.add(spec.tag, template, overridable),
                render,
            )?,
            RuleMessages::CustomRegister { register } => {
                registry.register_translation(spec.tag, translator, register, render_default)?
            }
            RuleMessages::Both { register, render } => {
                registry.register_translation(spec.tag, translator, register, render)?
            }
        }
    }
    Ok(())
}

/// Generic renderer: the tag's template filled with the raw field name.
pub fn render_default(translator: &Translator, error: &FieldError) -> String {
    render_or_default(
        error,
        translator
            .translate(error.tag(), &[error.field()])
            .map_err(RenderError::from),
    )
}
