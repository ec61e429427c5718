use leptos::prelude::{RwSignal, Update};
use serde_json::Value;
use std::cell::RefCell;

use super::{LeadForm, LeadSubmission, SubmitRefused, FALLBACK_ERROR};

/// What came back from the endpoint, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadResponse {
    pub status: u16,
    pub body: String,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("could not read the response body: {0}")]
    Body(String),

    #[error("there is no HTTP transport outside of the browser")]
    Unavailable,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("response with status {status} is not valid JSON: {error}")]
    Malformed { status: u16, error: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// The text shown in the form's error slot.
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => message,
            _ => FALLBACK_ERROR,
        }
    }
}

/// A 2xx status and a truthy `ok` field are both required; anything else
/// fails, carrying the body's `message` when it has a non-empty one.
pub fn interpret_response(response: &LeadResponse) -> Result<(), SubmitError> {
    let body: Value =
        serde_json::from_str(&response.body).map_err(|error| SubmitError::Malformed {
            status: response.status,
            error: error.to_string(),
        })?;
    let succeeded = (200..300).contains(&response.status)
        && body.get("ok").is_some_and(is_truthy);
    if succeeded {
        return Ok(());
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(String::from);
    Err(SubmitError::Rejected {
        status: response.status,
        message,
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Sends a submission to the consultation endpoint.
#[allow(async_fn_in_trait)]
pub trait LeadTransport {
    async fn post(
        &self,
        endpoint: &str,
        submission: &LeadSubmission,
    ) -> Result<LeadResponse, TransportError>;
}

/// Somewhere a [`LeadForm`] lives and can be updated in place.
///
/// Returns `None` when the form is gone, e.g. a disposed signal.
pub trait FormSlot {
    fn with_form<R>(&self, f: impl FnOnce(&mut LeadForm) -> R) -> Option<R>;
}

impl FormSlot for RwSignal<LeadForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LeadForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormSlot for RefCell<LeadForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut LeadForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Refused(SubmitRefused),
    Submitted,
    Failed(SubmitError),
}

/// Runs one submit attempt: validate, post once, record the outcome.
///
/// The form is never left in `Submitting`: every path through here calls
/// [`LeadForm::finish_submit`], and dropping the future mid-request goes
/// through [`LeadForm::abandon_submit`].
pub async fn submit_lead<S, T>(slot: &S, transport: &T, endpoint: &str) -> SubmitOutcome
where
    S: FormSlot,
    T: LeadTransport,
{
    let submission = match slot.with_form(LeadForm::begin_submit) {
        Some(Ok(submission)) => submission,
        Some(Err(refused)) => return SubmitOutcome::Refused(refused),
        None => return SubmitOutcome::Refused(SubmitRefused::Detached),
    };

    let guard = SubmittingGuard { slot, armed: true };
    let outcome = match transport.post(endpoint, &submission).await {
        Ok(response) => interpret_response(&response),
        Err(error) => Err(SubmitError::from(error)),
    };
    match &outcome {
        Ok(()) => log::info!("Lead submitted to {}", endpoint),
        Err(error) => log::warn!("Lead submission to {} failed: {}", endpoint, error),
    }
    guard.finish(outcome.clone());

    match outcome {
        Ok(()) => SubmitOutcome::Submitted,
        Err(error) => SubmitOutcome::Failed(error),
    }
}

struct SubmittingGuard<'a, S: FormSlot> {
    slot: &'a S,
    armed: bool,
}

impl<S: FormSlot> SubmittingGuard<'_, S> {
    fn finish(mut self, outcome: Result<(), SubmitError>) {
        self.armed = false;
        self.slot.with_form(|form| form.finish_submit(outcome));
    }
}

impl<S: FormSlot> Drop for SubmittingGuard<'_, S> {
    fn drop(&mut self) {
        if self.armed {
            log::warn!("Lead submission abandoned while in flight");
            self.slot.with_form(LeadForm::abandon_submit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> LeadResponse {
        LeadResponse {
            status,
            body: String::from(body),
        }
    }

    #[test]
    fn ok_needs_both_status_and_flag() {
        assert_eq!(Ok(()), interpret_response(&response(200, r#"{"ok":true}"#)));
        assert_eq!(Ok(()), interpret_response(&response(201, r#"{"ok":1}"#)));
        assert_eq!(
            Err(SubmitError::Rejected {
                status: 200,
                message: None
            }),
            interpret_response(&response(200, r#"{"ok":false}"#))
        );
        assert_eq!(
            Err(SubmitError::Rejected {
                status: 503,
                message: None
            }),
            interpret_response(&response(503, r#"{"ok":true}"#))
        );
        assert!(interpret_response(&response(200, r#"{}"#)).is_err());
        assert!(interpret_response(&response(200, r#"{"ok":""}"#)).is_err());
    }

    #[test]
    fn message_comes_from_the_body() {
        let error = interpret_response(&response(
            500,
            r#"{"ok":false,"message":"Server unavailable"}"#,
        ))
        .unwrap_err();
        assert_eq!("Server unavailable", error.user_message());

        let error = interpret_response(&response(400, r#"{"ok":false,"message":""}"#)).unwrap_err();
        assert_eq!(FALLBACK_ERROR, error.user_message());
    }

    #[test]
    fn unparsable_body_uses_the_fallback() {
        let error = interpret_response(&response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert!(matches!(error, SubmitError::Malformed { status: 502, .. }));
        assert_eq!(FALLBACK_ERROR, error.user_message());
    }

    #[test]
    fn transport_errors_use_the_fallback() {
        let error = SubmitError::from(TransportError::Network(String::from("connection reset")));
        assert_eq!(FALLBACK_ERROR, error.user_message());
    }
}
