use std::any::TypeId;
use std::fmt;

use once_cell::sync::Lazy;

/// The underlying kind of a validated field, mirroring what a validation
/// engine knows about the value it checked. Message renderers branch on
/// this to pick between character-count, item-count, date/time, and
/// numeric phrasings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Int,
    Uint,
    Float,
    Bool,
    Slice,
    Array,
    Map,
    Struct,
    Ptr(Box<FieldKind>),
    Other,
}

impl FieldKind {
    /// The kind used for message branching: a pointer stands in for its
    /// pointee, one level deep.
    pub fn effective(&self) -> &FieldKind {
        match self {
            FieldKind::Ptr(inner) => inner,
            other => other,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, FieldKind::Slice | FieldKind::Array | FieldKind::Map)
    }
}

static DATETIME_TYPES: Lazy<[TypeId; 4]> = Lazy::new(|| {
    [
        TypeId::of::<chrono::DateTime<chrono::Utc>>(),
        TypeId::of::<chrono::DateTime<chrono::Local>>(),
        TypeId::of::<chrono::DateTime<chrono::FixedOffset>>(),
        TypeId::of::<chrono::NaiveDateTime>(),
    ]
});

/// One failed validation rule, as reported by the validation engine:
/// which tag failed, on which field, with what rule parameter, and what
/// the engine knows about the value's type.
///
/// `FieldError` is itself an error; its `Display` text is the generic
/// message renderers fall back to when localization fails.
#[derive(Debug, Clone)]
pub struct FieldError {
    tag: String,
    field: String,
    param: String,
    kind: FieldKind,
    type_id: Option<TypeId>,
    type_name: &'static str,
}

impl FieldError {
    pub fn new(tag: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            field: field.into(),
            param: String::new(),
            kind: FieldKind::Other,
            type_id: None,
            type_name: "",
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Record the concrete Rust type of the validated value, used by
    /// renderers that only apply to specific types (date/time structs).
    pub fn with_value_type<T: 'static>(mut self) -> Self {
        self.type_id = Some(TypeId::of::<T>());
        self.type_name = std::any::type_name::<T>();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The kind after pointer substitution.
    pub fn effective_kind(&self) -> &FieldKind {
        self.kind.effective()
    }

    pub fn is_datetime(&self) -> bool {
        self.type_id
            .is_some_and(|id| DATETIME_TYPES.contains(&id))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field validation for '{}' failed on the '{}' tag",
            self.field, self.tag
        )
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_substitutes_pointee_kind() {
        let error = FieldError::new("min", "Username")
            .with_kind(FieldKind::Ptr(Box::new(FieldKind::String)));
        assert_eq!(*error.effective_kind(), FieldKind::String);
    }

    #[test]
    fn pointer_substitution_is_single_level() {
        let nested = FieldKind::Ptr(Box::new(FieldKind::Ptr(Box::new(FieldKind::String))));
        assert_eq!(
            *nested.effective(),
            FieldKind::Ptr(Box::new(FieldKind::String))
        );
    }

    #[test]
    fn datetime_detection() {
        let dated = FieldError::new("lt", "CreatedAt")
            .with_kind(FieldKind::Struct)
            .with_value_type::<chrono::DateTime<chrono::Utc>>();
        assert!(dated.is_datetime());

        let naive = FieldError::new("lt", "CreatedAt")
            .with_kind(FieldKind::Struct)
            .with_value_type::<chrono::NaiveDateTime>();
        assert!(naive.is_datetime());

        struct Address;
        let other = FieldError::new("lt", "Address")
            .with_kind(FieldKind::Struct)
            .with_value_type::<Address>();
        assert!(!other.is_datetime());

        let untyped = FieldError::new("lt", "Address").with_kind(FieldKind::Struct);
        assert!(!untyped.is_datetime());
    }

    #[test]
    fn default_text_names_field_and_tag() {
        let error = FieldError::new("required", "Email");
        assert_eq!(
            error.to_string(),
            "field validation for 'Email' failed on the 'required' tag"
        );
    }
}
