//! Inbound request body validation.
//!
//! HTTP-triggered functions receive a proxy event whose `body` is an
//! optional JSON string. [`require_body_params`] asserts that a set of
//! mandatory fields is present before the function does any work, failing
//! with a `MISSING_PARAMETER` application error that names the offenders.

use crate::errors::{AppError, ErrorKind};
use serde::{Deserialize, Serialize};

/// An HTTP proxy event delivered to a serverless function.
///
/// This mirrors the API gateway proxy event structure, reduced to the
/// members relevant for request validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestEvent {
    /// Request path.
    #[serde(default)]
    pub path: String,

    /// HTTP method of the request.
    #[serde(rename = "httpMethod", default)]
    pub http_method: String,

    /// Raw request body. `None` when the request carried no body or an
    /// explicit JSON `null`.
    #[serde(default)]
    pub body: Option<String>,
}

impl RequestEvent {
    /// Create an event carrying the given body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }
}

/// Assert that `required` fields are present and non-null in the event body.
///
/// Fails with a `MISSING_PARAMETER` application error when the body is
/// absent (naming every required field) or when it parses to JSON lacking
/// some of the fields (naming the missing ones, in the given order). A
/// present body that is not valid JSON fails with the raw
/// [`Serialization`](crate::EventError::Serialization) error instead, so
/// callers can tell a malformed request apart from an incomplete one.
///
/// The check itself is synchronous; the async signature keeps call sites
/// uniform with the publisher.
///
/// # Example
///
/// ```rust
/// use kinevent::{require_body_params, RequestEvent};
///
/// # async fn handle() -> kinevent::Result<()> {
/// let event = RequestEvent::with_body(r#"{"orderId": 7, "amount": 100}"#);
/// require_body_params(&event, &["orderId", "amount"]).await?;
/// # Ok(())
/// # }
/// ```
pub async fn require_body_params(event: &RequestEvent, required: &[&str]) -> crate::Result<()> {
    let body = match &event.body {
        Some(body) => body,
        None => {
            return Err(AppError::with_message(
                ErrorKind::MissingParameter,
                format!(
                    "No body found. Request parameter(s) are missing: {}",
                    required.join(",")
                ),
            )
            .into());
        }
    };

    let fields: serde_json::Value = serde_json::from_str(body)?;

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| match fields.get(name) {
            Some(value) => value.is_null(),
            None => true,
        })
        .collect();

    if !missing.is_empty() {
        return Err(AppError::with_message(
            ErrorKind::MissingParameter,
            format!(
                "Request parameter(s) are missing in the body: {}",
                missing.join(",")
            ),
        )
        .into());
    }

    Ok(())
}
