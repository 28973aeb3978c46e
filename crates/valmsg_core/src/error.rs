use log::warn;
use thiserror::Error;
use valmsg_translator::TranslatorError;

use crate::field::FieldError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Translator(#[from] TranslatorError),
    #[error("rule parameter '{0}' is not a valid number")]
    InvalidParam(String),
    #[error("tag '{0}' cannot be used on a struct type")]
    StructKind(String),
}

pub type RenderResult = Result<String, RenderError>;

/// The uniform recovery policy for message rendering: a failure must never
/// block reporting the validation failure itself, so it is logged and the
/// field error's own text is returned instead.
pub fn render_or_default(error: &FieldError, result: RenderResult) -> String {
    match result {
        Ok(text) => text,
        Err(render_error) => {
            warn!(
                "failed to render message for tag '{}' on field '{}': {render_error}",
                error.tag(),
                error.field()
            );
            error.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_passes_through() {
        let error = FieldError::new("min", "Age");
        assert_eq!(
            render_or_default(&error, Ok("متن".to_string())),
            "متن"
        );
    }

    #[test]
    fn failures_fall_back_to_default_text() {
        let error = FieldError::new("min", "Age");
        let expected = error.to_string();
        assert_eq!(
            render_or_default(&error, Err(RenderError::InvalidParam("abc".into()))),
            expected
        );
        assert_eq!(
            render_or_default(
                &error,
                Err(RenderError::StructKind("min".into()))
            ),
            expected
        );
        assert_eq!(
            render_or_default(
                &error,
                Err(TranslatorError::UnknownKey("min".into()).into())
            ),
            expected
        );
    }
}
