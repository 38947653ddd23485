//! `POST /api/contact`.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a JSON body. Malformed JSON and validation failures are
//! 400; storage failures are 500 with the error text in `details`. Nothing
//! here panics.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::services::contact::{ContactRequest, FieldError, validate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ContactFailure {
    Validation { error: &'static str, details: Vec<FieldError> },
    Storage { error: &'static str, details: String },
    Malformed { error: &'static str },
}

impl ContactFailure {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Malformed { .. } => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ContactFailure {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Validate and store a contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactAccepted>, ContactFailure> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "contact body rejected");
        ContactFailure::Malformed { error: "Invalid request body" }
    })?;

    let contact = validate(&request).map_err(|details| {
        tracing::debug!(fields = details.len(), "contact validation failed");
        ContactFailure::Validation { error: "Validation failed", details }
    })?;

    match state.contacts.insert(&contact).await {
        Ok(id) => {
            tracing::info!(%id, "contact submission stored");
            Ok(Json(ContactAccepted { success: true }))
        }
        Err(e) => {
            tracing::error!(error = %e, "contact submission failed");
            Err(ContactFailure::Storage { error: "Failed to submit contact form", details: e.to_string() })
        }
    }
}
