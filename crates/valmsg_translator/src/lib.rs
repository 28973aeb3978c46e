pub use export::export_flat_catalog;
pub use plural::{cardinal_one_other, PluralCategory, PluralRuleFn};
pub use store::{NumberFormat, Template, Translator, TranslatorError, TranslatorResult};

mod export;
mod plural;
mod store;
