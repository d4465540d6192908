//! Schema validation with path-qualified, deterministic error reporting.
//!
//! # Design
//! Structural and type checking is delegated entirely to compiled
//! `jsonschema` validators; this module only normalizes the outcome. Each
//! violation becomes one `<dotted-path>: <message>` entry, with the literal
//! `(root)` marker when the violation is at the top level. The error list
//! is sorted so repeated validations of the same value produce identical,
//! reproducible failure messages.

use std::sync::OnceLock;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{ValidationError, Validator};
use serde_json::{json, Value};

/// Result of checking a value against a compiled schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The value conforms; carries the validated value.
    Accepted(Value),
    /// At least one violation, each formatted `<path>: <message>`.
    Rejected(Vec<String>),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    /// The error list; empty for `Accepted`.
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationOutcome::Accepted(_) => &[],
            ValidationOutcome::Rejected(errors) => errors,
        }
    }
}

/// Validates `value` against `schema` without mutating it. Every violation
/// is reported; a rejection always carries at least one entry.
pub fn validate(schema: &Validator, value: &Value) -> ValidationOutcome {
    let mut errors: Vec<String> = schema.iter_errors(value).map(format_error).collect();
    if errors.is_empty() {
        return ValidationOutcome::Accepted(value.clone());
    }
    errors.sort();
    ValidationOutcome::Rejected(errors)
}

/// Formats one violation as `<dotted-path>: <message>`.
///
/// A missing required property is reported at the path of the property
/// itself, not at the parent object, so "missing `premium`" yields the
/// path `premium` rather than `(root)`.
fn format_error(error: ValidationError<'_>) -> String {
    let pointer = error.instance_path().to_string();
    let mut segments: Vec<String> = if pointer.is_empty() {
        Vec::new()
    } else {
        pointer
            .trim_start_matches('/')
            .split('/')
            .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
            .collect()
    };

    if let ValidationErrorKind::Required { property } = error.kind() {
        if let Some(name) = property.as_str() {
            segments.push(name.to_string());
        }
    }

    let message = error.to_string();
    if segments.is_empty() {
        format!("(root): {message}")
    } else {
        format!("{}: {message}", segments.join("."))
    }
}

static QUOTE_RESPONSE: OnceLock<Validator> = OnceLock::new();

/// Compiled response contract for `POST /quote`: `premium` is a
/// non-negative number and `quoteId` a non-empty string, both required.
/// Dynamic values are deliberately unconstrained beyond structure and type.
pub fn quote_response_schema() -> &'static Validator {
    QUOTE_RESPONSE.get_or_init(|| {
        let schema = json!({
            "type": "object",
            "required": ["premium", "quoteId"],
            "properties": {
                "premium": { "type": "number", "minimum": 0 },
                "quoteId": { "type": "string", "minLength": 1 }
            }
        });
        jsonschema::validator_for(&schema).expect("embedded quote response schema is valid")
    })
}
