//! Contact form validation and storage.
//!
//! DESIGN
//! ======
//! Validation is a pure function over the request so the route can be tested
//! without a database. Every field is trimmed first; all failing fields are
//! reported together. Storage sits behind [`ContactStore`] with a Postgres
//! implementation for production.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 254;
pub const SUBJECT_MIN: usize = 2;
pub const SUBJECT_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5_000;

/// Status stored on every new submission.
pub const STATUS_NEW: &str = "new";

/// Request body of `POST /api/contact`. Missing fields deserialize as empty
/// strings and fail validation like blank ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A submission that passed validation, with every field trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Validate and trim `request`.
///
/// # Errors
///
/// Returns every failing field, in form order.
pub fn validate(request: &ContactRequest) -> Result<ValidContact, Vec<FieldError>> {
    let contact = ValidContact {
        name: request.name.trim().to_owned(),
        email: request.email.trim().to_owned(),
        subject: request.subject.trim().to_owned(),
        message: request.message.trim().to_owned(),
    };

    let mut errors = Vec::new();
    check_length(&mut errors, "name", "Name", &contact.name, NAME_MIN, NAME_MAX);
    if !is_valid_email(&contact.email) {
        errors.push(FieldError { field: "email", message: "Please enter a valid email address".to_owned() });
    }
    check_length(&mut errors, "subject", "Subject", &contact.subject, SUBJECT_MIN, SUBJECT_MAX);
    check_length(&mut errors, "message", "Message", &contact.message, MESSAGE_MIN, MESSAGE_MAX);

    if errors.is_empty() { Ok(contact) } else { Err(errors) }
}

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    let message = if len < min {
        format!("{label} must be at least {min} characters")
    } else if len > max {
        format!("{label} must be at most {max} characters")
    } else {
        return;
    };
    errors.push(FieldError { field, message });
}

/// Shape check for an already-trimmed address: one `@`, a non-empty local
/// part, and a dotted domain without empty labels or whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().count() > EMAIL_MAX || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.contains('@') && domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

// =============================================================================
// STORAGE
// =============================================================================

/// Persistence seam for contact submissions. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ContactStore: Send + Sync {
    /// Store `contact` with status [`STATUS_NEW`] and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] if the write fails.
    async fn insert(&self, contact: &ValidContact) -> Result<Uuid, ContactError>;
}

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ContactStore for PgContactStore {
    async fn insert(&self, contact: &ValidContact) -> Result<Uuid, ContactError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO contact_submissions (id, name, email, subject, message, status)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(STATUS_NEW)
        .execute(&self.pool)
        .await?;
        Ok(id)
    }
}
