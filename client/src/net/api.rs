//! REST helpers for the contact endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since submission only happens
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures become [`SubmitError::Failed`] so the form
//! can show a message instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactForm, SubmitError};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn unexpected_status_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] with per-field messages when the server
/// rejects the input, [`SubmitError::Failed`] for anything else.
pub async fn submit_contact(form: &ContactForm) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ContactErrorBody;

        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(form)
            .map_err(|e| SubmitError::Failed(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Failed(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        match resp.json::<ContactErrorBody>().await {
            Ok(body) => Err(body.into_submit_error()),
            Err(_) => Err(SubmitError::Failed(unexpected_status_message(status))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(SubmitError::Failed("not available on server".to_owned()))
    }
}
