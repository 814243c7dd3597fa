use nameth::NamedEnumValues as _;
use nameth::nameth;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::request::Method;
use super::request::SendRequestError;
use super::request::send_request;
use super::request::set_json_body;
use crate::api::Confirmation;
use crate::api::EventRecord;
use crate::api::NewEventRequest;
use crate::event_id::EventId;

/// Fetches the full event list, in server order.
pub async fn list() -> Result<Vec<EventRecord>, ListEventsError> {
    let response = send_request(Method::GET, "/events".to_owned(), |_| {}).await?;
    let body = response
        .text()
        .map_err(|_| ListEventsError::MissingResponseBody)?;
    let body = JsFuture::from(body)
        .await
        .map_err(|_| ListEventsError::FailedResponseBody)?;
    let body = body.as_string().ok_or(ListEventsError::InvalidUtf8)?;
    Ok(serde_json::from_str(&body)?)
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum ListEventsError {
    #[error("[{n}] {0}", n = self.name())]
    SendRequestError(#[from] SendRequestError),

    #[error("[{n}] Missing response body", n = self.name())]
    MissingResponseBody,

    #[error("[{n}] Failed to download the response body", n = self.name())]
    FailedResponseBody,

    #[error("[{n}] The response body is not a valid UTF-8 string", n = self.name())]
    InvalidUtf8,

    #[error("[{n}] {0}", n = self.name())]
    InvalidJson(#[from] serde_json::Error),
}

pub async fn create(request: &NewEventRequest) -> Result<Confirmation, CreateEventError> {
    let response = send_request(Method::POST, "/event".to_owned(), set_json_body(request)?).await?;
    Ok(read_confirmation(response).await?)
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum CreateEventError {
    #[error("[{n}] {0}", n = self.name())]
    SendRequestError(#[from] SendRequestError),

    #[error("[{n}] {0}", n = self.name())]
    InvalidJson(#[from] serde_json::Error),

    #[error("[{n}] {0}", n = self.name())]
    Confirmation(#[from] ConfirmationError),
}

pub async fn delete(id: EventId) -> Result<Confirmation, DeleteEventError> {
    let response = send_request(Method::DELETE, format!("/event/{id}"), |_| {}).await?;
    Ok(read_confirmation(response).await?)
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum DeleteEventError {
    #[error("[{n}] {0}", n = self.name())]
    SendRequestError(#[from] SendRequestError),

    #[error("[{n}] {0}", n = self.name())]
    Confirmation(#[from] ConfirmationError),
}

pub(super) async fn read_confirmation(response: Response) -> Result<Confirmation, ConfirmationError> {
    let body = response
        .text()
        .map_err(|_| ConfirmationError::MissingResponseBody)?;
    let body = JsFuture::from(body)
        .await
        .map_err(|_| ConfirmationError::FailedResponseBody)?;
    let body = body.as_string().ok_or(ConfirmationError::InvalidUtf8)?;
    Ok(serde_json::from_str(&body)?)
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum ConfirmationError {
    #[error("[{n}] Missing response body", n = self.name())]
    MissingResponseBody,

    #[error("[{n}] Failed to download the response body", n = self.name())]
    FailedResponseBody,

    #[error("[{n}] The response body is not a valid UTF-8 string", n = self.name())]
    InvalidUtf8,

    #[error("[{n}] {0}", n = self.name())]
    InvalidJson(#[from] serde_json::Error),
}
