//! Request Validation
//!
//! [`RequestValidator`] is built once at startup and handed to every
//! service that accepts client input. Rules are declared on the input
//! types with `#[derive(validator::Validate)]`; this module turns the
//! resulting errors into one readable line per offending field.

use std::collections::HashMap;
use std::borrow::Cow;

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

/// Field-level validation messages, ordered by field name
pub type FieldMessages = Vec<String>;

/// Validates client input and formats failures
///
/// ## Examples
/// ```rust
/// use kernel::validation::RequestValidator;
/// use validator::Validate;
///
/// #[derive(Validate)]
/// struct Input {
///     #[validate(required)]
///     name: Option<String>,
/// }
///
/// let validator = RequestValidator::new();
/// let messages = validator.validate(&Input { name: None }).unwrap_err();
/// assert_eq!(messages, vec!["name is required".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    _private: (),
}

impl RequestValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the declared rules of `input`
    pub fn validate<T: Validate>(&self, input: &T) -> Result<(), FieldMessages> {
        input.validate().map_err(|errors| self.format(&errors))
    }

    /// One message per failing field; the first failed rule wins
    pub fn format(&self, errors: &ValidationErrors) -> FieldMessages {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        fields
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first()
                    .map(|err| format_field_error(&field.to_string(), err))
            })
            .collect()
    }
}

fn format_field_error(field: &str, err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    let min = param(&err.params, "min");
    let max = param(&err.params, "max");

    match err.code.as_ref() {
        "required" => format!("{field} is required"),
        "length" => match (min, max) {
            (Some(min), Some(max)) => {
                format!("{field} must be between {min} and {max} characters")
            }
            (Some(min), None) => format!("{field} must be at least {min} characters"),
            (None, Some(max)) => format!("{field} must be at most {max} characters"),
            (None, None) => format!("{field} has an invalid length"),
        },
        "range" => match (min, max) {
            (Some(min), Some(max)) => format!("{field} must be between {min} and {max}"),
            (Some(min), None) => format!("{field} must be at least {min}"),
            (None, Some(max)) => format!("{field} must be at most {max}"),
            (None, None) => format!("{field} is out of range"),
        },
        _ => format!("{field} is invalid"),
    }
}

/// Numeric params may arrive as floats; print whole numbers without `.0`
fn param(params: &HashMap<Cow<'static, str>, Value>, key: &str) -> Option<String> {
    let value = params.get(key)?;
    if let Some(i) = value.as_i64() {
        return Some(i.to_string());
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 => Some((f as i64).to_string()),
        Some(f) => Some(f.to_string()),
        None => Some(value.to_string()),
    }
}
