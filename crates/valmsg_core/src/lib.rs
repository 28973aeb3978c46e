pub use error::{render_or_default, RenderError, RenderResult};
pub use field::{FieldError, FieldKind};
pub use registry::{MessageRegistry, RegisterFn, RenderFn};
pub use rules::{register_rules, render_default, RuleMessages, RuleSpec};

mod error;
mod field;
mod registry;
mod rules;
