//! The renderer shapes shared by the per-tag message specs. Each shape is
//! fallible; the registered renderers wrap them in
//! [`valmsg_core::render_or_default`] so a rendering failure degrades to
//! the field error's own text instead of blocking the validation report.

use valmsg_core::{FieldError, FieldKind, RenderError, RenderResult};
use valmsg_translator::Translator;

/// How a renderer labels the failing field inside the message.
#[derive(Debug, Clone, Copy)]
pub enum FieldLabel {
    /// The raw field identifier, untranslated.
    Raw,
    /// The localized display name, falling back to the raw identifier when
    /// none is registered.
    LocalizedOrRaw,
    /// The localized display name, passed through even when the lookup
    /// yields nothing.
    LocalizedOrEmpty,
}

impl FieldLabel {
    fn resolve(self, translator: &Translator, raw: &str) -> String {
        match self {
            FieldLabel::Raw => raw.to_string(),
            FieldLabel::LocalizedOrRaw => translator
                .translate(raw, &[])
                .ok()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| raw.to_string()),
            FieldLabel::LocalizedOrEmpty => translator.translate(raw, &[]).unwrap_or_default(),
        }
    }
}

/// Template keys for one size/comparison tag. `datetime` is present only
/// for the tags that accept date/time struct fields.
pub struct SizeKeys {
    pub string: &'static str,
    pub string_character: &'static str,
    pub number: &'static str,
    pub items: &'static str,
    pub items_item: &'static str,
    pub datetime: Option<&'static str>,
}

/// Fraction-digit count and parsed magnitude of a rule parameter.
/// `"5"` → (5.0, 0); `"5.25"` → (5.25, 2).
fn magnitude(param: &str) -> Result<(f64, usize), RenderError> {
    let digits = match param.find('.') {
        Some(index) => param.len() - index - 1,
        None => 0,
    };
    let value = param
        .parse::<f64>()
        .map_err(|_| RenderError::InvalidParam(param.to_string()))?;
    Ok((value, digits))
}

/// The size/comparison shape (`len`, `min`, `max`, `lt`, `lte`, `gt`,
/// `gte`): branch on the field's effective kind and phrase the comparand
/// as a character count, an item count, a date/time reference, or a plain
/// number.
pub fn size_message(
    translator: &Translator,
    error: &FieldError,
    keys: &SizeKeys,
    label: FieldLabel,
) -> RenderResult {
    let field = label.resolve(translator, error.field());
    let kind = error.effective_kind();

    if let Some(datetime_key) = keys.datetime {
        if matches!(kind, FieldKind::Struct) {
            if !error.is_datetime() {
                return Err(RenderError::StructKind(error.tag().to_string()));
            }
            // The comparand is "now"; the parameter carries no magnitude.
            return Ok(translator.translate(datetime_key, &[&field])?);
        }
    }

    let (value, digits) = magnitude(error.param())?;
    let formatted = translator.format_number(value, digits);

    match kind {
        FieldKind::String => {
            let count =
                translator.translate_cardinal(keys.string_character, value, digits, &formatted)?;
            Ok(translator.translate(keys.string, &[&field, &count])?)
        }
        kind if kind.is_collection() => {
            let count =
                translator.translate_cardinal(keys.items_item, value, digits, &formatted)?;
            Ok(translator.translate(keys.items, &[&field, &count])?)
        }
        _ => Ok(translator.translate(keys.number, &[&field, &formatted])?),
    }
}

/// Single-placeholder shape: the tag's template filled with the field
/// label.
pub fn field_message(
    translator: &Translator,
    error: &FieldError,
    label: FieldLabel,
) -> RenderResult {
    let field = label.resolve(translator, error.field());
    Ok(translator.translate(error.tag(), &[&field])?)
}

/// Two-placeholder shape: field label plus the parameter resolved the same
/// way (the parameter of these tags names another field).
pub fn field_param_message(translator: &Translator, error: &FieldError) -> RenderResult {
    let field = FieldLabel::LocalizedOrRaw.resolve(translator, error.field());
    let other = FieldLabel::LocalizedOrRaw.resolve(translator, error.param());
    Ok(translator.translate(error.tag(), &[&field, &other])?)
}

/// Raw two-value shape (`oneof`): the parameter is a literal listing, not
/// a field reference, so neither value goes through display-name lookup.
pub fn raw_param_message(translator: &Translator, error: &FieldError) -> RenderResult {
    Ok(translator.translate(error.tag(), &[error.field(), error.param()])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valmsg_translator::PluralCategory;

    const KEYS: SizeKeys = SizeKeys {
        string: "t-string",
        string_character: "t-string-character",
        number: "t-number",
        items: "t-items",
        items_item: "t-items-item",
        datetime: Some("t-datetime"),
    };

    fn store() -> Translator {
        let mut t = Translator::new("fa");
        t.add("t-string", "{0}: {1} حرف", false).unwrap();
        t.add_cardinal("t-string-character", "{0} کاراکتر", PluralCategory::One, false)
            .unwrap();
        t.add_cardinal(
            "t-string-character",
            "{0} کاراکتر",
            PluralCategory::Other,
            false,
        )
        .unwrap();
        t.add("t-number", "{0}: {1}", false).unwrap();
        t.add("t-items", "{0}: {1} مورد", false).unwrap();
        t.add_cardinal("t-items-item", "{0}", PluralCategory::One, false)
            .unwrap();
        t.add_cardinal("t-items-item", "{0}", PluralCategory::Other, false)
            .unwrap();
        t.add("t-datetime", "{0}: تاریخ", false).unwrap();
        t
    }

    #[test]
    fn magnitude_detects_fraction_digits() {
        assert_eq!(magnitude("5").unwrap(), (5.0, 0));
        assert_eq!(magnitude("5.25").unwrap(), (5.25, 2));
        assert_eq!(magnitude("0.100").unwrap(), (0.1, 3));
        assert!(matches!(
            magnitude("abc"),
            Err(RenderError::InvalidParam(_))
        ));
    }

    #[test]
    fn string_kind_uses_character_count() {
        let t = store();
        let error = FieldError::new("t", "Username")
            .with_param("5")
            .with_kind(FieldKind::String);
        assert_eq!(
            size_message(&t, &error, &KEYS, FieldLabel::Raw).unwrap(),
            "Username: 5 کاراکتر حرف"
        );
    }

    #[test]
    fn pointer_to_string_branches_like_string() {
        let t = store();
        let error = FieldError::new("t", "Username")
            .with_param("5")
            .with_kind(FieldKind::Ptr(Box::new(FieldKind::String)));
        assert_eq!(
            size_message(&t, &error, &KEYS, FieldLabel::Raw).unwrap(),
            "Username: 5 کاراکتر حرف"
        );
    }

    #[test]
    fn collection_kinds_use_item_count() {
        let t = store();
        for kind in [FieldKind::Slice, FieldKind::Array, FieldKind::Map] {
            let error = FieldError::new("t", "Tags").with_param("3").with_kind(kind);
            assert_eq!(
                size_message(&t, &error, &KEYS, FieldLabel::Raw).unwrap(),
                "Tags: 3 مورد"
            );
        }
    }

    #[test]
    fn numeric_kind_formats_to_detected_digits() {
        let t = store();
        let error = FieldError::new("t", "Age")
            .with_param("18")
            .with_kind(FieldKind::Int);
        assert_eq!(
            size_message(&t, &error, &KEYS, FieldLabel::Raw).unwrap(),
            "Age: 18"
        );

        let fractional = FieldError::new("t", "Score")
            .with_param("5.25")
            .with_kind(FieldKind::Float);
        assert_eq!(
            size_message(&t, &fractional, &KEYS, FieldLabel::Raw).unwrap(),
            "Score: 5.25"
        );
    }

    #[test]
    fn datetime_struct_uses_datetime_template() {
        let t = store();
        let error = FieldError::new("t", "CreatedAt")
            .with_kind(FieldKind::Struct)
            .with_value_type::<chrono::DateTime<chrono::Utc>>();
        assert_eq!(
            size_message(&t, &error, &KEYS, FieldLabel::Raw).unwrap(),
            "CreatedAt: تاریخ"
        );
    }

    #[test]
    fn datetime_struct_ignores_unparseable_param() {
        let t = store();
        let error = FieldError::new("t", "CreatedAt")
            .with_param("not-a-number")
            .with_kind(FieldKind::Struct)
            .with_value_type::<chrono::NaiveDateTime>();
        assert!(size_message(&t, &error, &KEYS, FieldLabel::Raw).is_ok());
    }

    #[test]
    fn non_datetime_struct_is_a_hard_error() {
        let t = store();
        struct Address;
        let error = FieldError::new("t", "Address")
            .with_param("3")
            .with_kind(FieldKind::Struct)
            .with_value_type::<Address>();
        assert!(matches!(
            size_message(&t, &error, &KEYS, FieldLabel::Raw),
            Err(RenderError::StructKind(_))
        ));
    }

    #[test]
    fn struct_without_datetime_key_falls_through_to_number() {
        let t = store();
        let keys = SizeKeys {
            datetime: None,
            ..KEYS
        };
        struct Address;
        let error = FieldError::new("t", "Address")
            .with_param("3")
            .with_kind(FieldKind::Struct)
            .with_value_type::<Address>();
        assert_eq!(
            size_message(&t, &error, &keys, FieldLabel::Raw).unwrap(),
            "Address: 3"
        );
    }

    #[test]
    fn bad_param_is_reported_for_non_struct_kinds() {
        let t = store();
        let error = FieldError::new("t", "Age")
            .with_param("abc")
            .with_kind(FieldKind::Int);
        assert!(matches!(
            size_message(&t, &error, &KEYS, FieldLabel::Raw),
            Err(RenderError::InvalidParam(_))
        ));
    }

    #[test]
    fn field_label_modes() {
        let mut t = store();
        t.add("Username", "نام کاربری", false).unwrap();

        assert_eq!(FieldLabel::Raw.resolve(&t, "Username"), "Username");
        assert_eq!(
            FieldLabel::LocalizedOrRaw.resolve(&t, "Username"),
            "نام کاربری"
        );
        assert_eq!(FieldLabel::LocalizedOrRaw.resolve(&t, "Email"), "Email");
        assert_eq!(FieldLabel::LocalizedOrEmpty.resolve(&t, "Email"), "");
    }
}
