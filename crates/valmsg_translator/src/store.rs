use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;

use crate::plural::{cardinal_one_other, PluralCategory, PluralRuleFn};

#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("translation key '{0}' is already registered and does not allow overriding")]
    AlreadyRegistered(String),
    #[error("no translation is registered for key '{0}'")]
    UnknownKey(String),
    #[error("translation key '{key}' has no '{category}' plural form")]
    MissingPluralForm {
        key: String,
        category: PluralCategory,
    },
}

pub type TranslatorResult<T> = Result<T, TranslatorError>;

/// A registered message pattern. Placeholders are positional (`{0}`, `{1}`,
/// ...) and are replaced in a single pass; unmatched placeholders are left
/// as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub pattern: String,
    pub overridable: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PluralTemplate {
    forms: [Option<Template>; PluralCategory::COUNT],
}

/// Digit glyphs and decimal separator used by [`Translator::format_number`].
#[derive(Debug, Clone)]
pub struct NumberFormat {
    pub decimal: char,
    pub digits: [char; 10],
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::latin()
    }
}

impl NumberFormat {
    pub fn latin() -> Self {
        Self {
            decimal: '.',
            digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
        }
    }

    /// Extended Arabic-Indic digits with the momayyez decimal separator.
    pub fn eastern_arabic() -> Self {
        Self {
            decimal: '\u{066B}',
            digits: ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
        }
    }

    pub fn format(&self, value: f64, fraction_digits: usize) -> String {
        let rendered = format!("{value:.fraction_digits$}");
        rendered
            .chars()
            .map(|ch| match ch {
                '0'..='9' => self.digits[ch as usize - '0' as usize],
                '.' => self.decimal,
                other => other,
            })
            .collect()
    }
}

/// A locale-scoped message store.
///
/// Templates are registered once during setup and read many times
/// afterwards; re-registering a key is only permitted when the incoming
/// registration asks to override. All lookups take `&self`, so a populated
/// store can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    pub(crate) templates: FxHashMap<String, Template>,
    pub(crate) cardinal_templates: FxHashMap<String, PluralTemplate>,
    number_format: NumberFormat,
    plural_rule: PluralRuleFn,
}

impl Translator {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            templates: FxHashMap::default(),
            cardinal_templates: FxHashMap::default(),
            number_format: NumberFormat::default(),
            plural_rule: cardinal_one_other,
        }
    }

    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    pub fn with_plural_rule(mut self, rule: PluralRuleFn) -> Self {
        self.plural_rule = rule;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Register a plain template under `key`. Fails with
    /// [`TranslatorError::AlreadyRegistered`] when the key exists and
    /// `overridable` is false.
    pub fn add(&mut self, key: &str, pattern: &str, overridable: bool) -> TranslatorResult<()> {
        if self.templates.contains_key(key) && !overridable {
            return Err(TranslatorError::AlreadyRegistered(key.to_string()));
        }
        self.templates.insert(
            key.to_string(),
            Template {
                pattern: pattern.to_string(),
                overridable,
            },
        );
        Ok(())
    }

    /// Register a cardinal plural variant of `key` for one category. The
    /// same override contract as [`Translator::add`] applies per
    /// (key, category) pair.
    pub fn add_cardinal(
        &mut self,
        key: &str,
        pattern: &str,
        category: PluralCategory,
        overridable: bool,
    ) -> TranslatorResult<()> {
        let entry = self.cardinal_templates.entry(key.to_string()).or_default();
        let slot = &mut entry.forms[category.index()];
        if slot.is_some() && !overridable {
            return Err(TranslatorError::AlreadyRegistered(format!(
                "{key}.{category}"
            )));
        }
        *slot = Some(Template {
            pattern: pattern.to_string(),
            overridable,
        });
        Ok(())
    }

    /// Resolve `key` and interpolate the positional arguments.
    pub fn translate(&self, key: &str, args: &[&str]) -> TranslatorResult<String> {
        let template = self
            .templates
            .get(key)
            .ok_or_else(|| TranslatorError::UnknownKey(key.to_string()))?;
        Ok(interpolate(&template.pattern, args))
    }

    /// Resolve the cardinal variant of `key` selected by the store's plural
    /// rule and interpolate `{0}` with the pre-formatted magnitude.
    pub fn translate_cardinal(
        &self,
        key: &str,
        magnitude: f64,
        digits: usize,
        formatted: &str,
    ) -> TranslatorResult<String> {
        let entry = self
            .cardinal_templates
            .get(key)
            .ok_or_else(|| TranslatorError::UnknownKey(key.to_string()))?;
        let category = (self.plural_rule)(magnitude, digits);
        let template =
            entry.forms[category.index()]
                .as_ref()
                .ok_or(TranslatorError::MissingPluralForm {
                    key: key.to_string(),
                    category,
                })?;
        Ok(interpolate(&template.pattern, &[formatted]))
    }

    pub fn format_number(&self, value: f64, fraction_digits: usize) -> String {
        self.number_format.format(value, fraction_digits)
    }

    pub(crate) fn cardinal_forms(
        &self,
        key: &str,
    ) -> impl Iterator<Item = (PluralCategory, &Template)> {
        self.cardinal_templates
            .get(key)
            .into_iter()
            .flat_map(|entry| {
                PluralCategory::ALL.into_iter().filter_map(move |category| {
                    entry.forms[category.index()]
                        .as_ref()
                        .map(|template| (category, template))
                })
            })
    }
}

/// Single-pass positional interpolation. `{N}` is replaced by `args[N]`;
/// placeholders without a matching argument and unclosed braces are left
/// as-is.
fn interpolate(pattern: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            out.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for inner in chars.by_ref() {
            if inner == '}' {
                closed = true;
                break;
            }
            token.push(inner);
        }

        match token.parse::<usize>() {
            Ok(index) if closed && index < args.len() => out.push_str(args[index]),
            _ => {
                out.push('{');
                out.push_str(&token);
                if closed {
                    out.push('}');
                }
            }
        }
    }

    out
}
