//! Wire types for `POST /api/contact`.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly. Error bodies come in two
//! shapes (`details` as a field list on validation failure, as a string on
//! storage failure), so `details` stays an untyped `serde_json::Value` and
//! [`ContactErrorBody::into_submit_error`] sorts them out.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The contact form as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// True once every field has some non-blank input.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message].iter().all(|f| !f.trim().is_empty())
    }
}

/// One rejected field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Body of every non-2xx contact response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// Server rejected specific fields.
    Invalid(Vec<FieldError>),
    /// Anything else; the string is shown as-is.
    Failed(String),
}

impl SubmitError {
    /// Message for `field`, if the server rejected it.
    #[must_use]
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            Self::Invalid(errors) => errors.iter().find(|e| e.field == field).map(|e| e.message.as_str()),
            Self::Failed(_) => None,
        }
    }
}

impl ContactErrorBody {
    #[must_use]
    pub fn into_submit_error(self) -> SubmitError {
        match self.details {
            Some(serde_json::Value::Array(items)) => {
                let fields: Vec<FieldError> =
                    items.into_iter().filter_map(|v| serde_json::from_value(v).ok()).collect();
                if fields.is_empty() { SubmitError::Failed(self.error) } else { SubmitError::Invalid(fields) }
            }
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => {
                SubmitError::Failed(format!("{}: {detail}", self.error))
            }
            _ => SubmitError::Failed(self.error),
        }
    }
}
