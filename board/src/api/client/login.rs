use nameth::NamedEnumValues as _;
use nameth::nameth;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::events::ConfirmationError;
use super::events::read_confirmation;
use super::request::Method;
use super::request::SendRequestError;
use super::request::send_request;
use super::request::set_json_body;
use crate::api::Confirmation;
use crate::api::Credentials;

/// Opens a session. The response body is the URL to navigate to.
pub async fn login(credentials: &Credentials) -> Result<String, LoginError> {
    let response = send_request(
        Method::POST,
        "/login".to_owned(),
        set_json_body(credentials)?,
    )
    .await?;
    Ok(read_url(response).await?)
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum LoginError {
    #[error("[{n}] {0}", n = self.name())]
    SendRequestError(#[from] SendRequestError),

    #[error("[{n}] {0}", n = self.name())]
    InvalidJson(#[from] serde_json::Error),

    #[error("[{n}] {0}", n = self.name())]
    RedirectUrl(#[from] RedirectUrlError),
}

/// Creates an account and opens a session, like [login].
pub async fn signup(credentials: &Credentials) -> Result<String, LoginError> {
    let response = send_request(
        Method::POST,
        "/signup".to_owned(),
        set_json_body(credentials)?,
    )
    .await?;
    Ok(read_url(response).await?)
}

/// Starts the third-party login flow.
///
/// The endpoint answers with the URL of the external sign-in page, either
/// as a plain body or as a redirect; both carry the location to navigate to.
pub async fn login_google() -> Result<String, LoginError> {
    match send_request(Method::GET, "/login_google".to_owned(), |_| {}).await {
        Ok(response) => Ok(read_url(response).await?),
        Err(SendRequestError::Redirect { location }) => Ok(location),
        Err(error) => Err(error.into()),
    }
}

/// Closes the session. The confirmation text is the URL to navigate to.
pub async fn logout() -> Result<Confirmation, LogoutError> {
    let response = send_request(Method::DELETE, "/logout".to_owned(), |_| {}).await?;
    Ok(read_confirmation(response).await?)
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum LogoutError {
    #[error("[{n}] {0}", n = self.name())]
    SendRequestError(#[from] SendRequestError),

    #[error("[{n}] {0}", n = self.name())]
    Confirmation(#[from] ConfirmationError),
}

async fn read_url(response: Response) -> Result<String, RedirectUrlError> {
    let body = response
        .text()
        .map_err(|_| RedirectUrlError::MissingResponseBody)?;
    let body = JsFuture::from(body)
        .await
        .map_err(|_| RedirectUrlError::FailedResponseBody)?;
    body.as_string().ok_or(RedirectUrlError::InvalidUtf8)
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum RedirectUrlError {
    #[error("[{n}] Missing response body", n = self.name())]
    MissingResponseBody,

    #[error("[{n}] Failed to download the response body", n = self.name())]
    FailedResponseBody,

    #[error("[{n}] The response body is not a valid UTF-8 string", n = self.name())]
    InvalidUtf8,
}
