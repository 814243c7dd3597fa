use nameth::NamedEnumValues as _;
use nameth::nameth;
use tracing::info;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use super::utils::alert;
use super::utils::input_value;
use super::utils::navigate_to;
use crate::api::Credentials;
use crate::api::client::login as login_api;

/// Opens a session with the `#uname` and `#passwd` fields and navigates
/// to the URL the server answers with.
#[wasm_bindgen]
pub fn login() {
    submit(LoginKind::Login)
}

/// Creates an account, then behaves like [login].
#[wasm_bindgen]
pub fn signup() {
    submit(LoginKind::Signup)
}

#[derive(Clone, Copy)]
enum LoginKind {
    Login,
    Signup,
}

fn submit(kind: LoginKind) {
    let credentials = match read_credentials() {
        Ok(credentials) => credentials,
        Err(error) => return alert(&format!("ERROR: {error}")),
    };
    info!("Submit credentials for uname={}", credentials.uname);
    spawn_local(async move {
        let url = match kind {
            LoginKind::Login => login_api::login(&credentials).await,
            LoginKind::Signup => login_api::signup(&credentials).await,
        };
        match url {
            Ok(url) => navigate_to(&url),
            Err(error) => alert(&format!("ERROR: {error}")),
        }
    });
}

/// Starts the third-party login flow and navigates to the sign-in page.
#[wasm_bindgen]
pub fn login_google() {
    spawn_local(async move {
        match login_api::login_google().await {
            Ok(url) => navigate_to(&url),
            Err(error) => alert(&format!("ERROR: {error}")),
        }
    });
}

fn read_credentials() -> Result<Credentials, CredentialsError> {
    validate_credentials(input_value("uname"), input_value("passwd"))
}

fn validate_credentials(uname: String, passwd: String) -> Result<Credentials, CredentialsError> {
    if uname.is_empty() {
        return Err(CredentialsError::EmptyUsername);
    }
    if passwd.is_empty() {
        return Err(CredentialsError::EmptyPassword);
    }
    Ok(Credentials { uname, passwd })
}

#[nameth]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("[{n}] User name cannot be empty!", n = self.name())]
    EmptyUsername,

    #[error("[{n}] Password cannot be empty!", n = self.name())]
    EmptyPassword,
}

#[cfg(test)]
mod tests {
    use fluent_asserter::prelude::*;

    use super::CredentialsError;
    use super::validate_credentials;

    #[test]
    fn rejects_empty_credentials() {
        let error = validate_credentials("".to_owned(), "hunter2".to_owned());
        assert_that!(error.unwrap_err()).is_equal_to(CredentialsError::EmptyUsername);
        let error = validate_credentials("alice".to_owned(), "".to_owned());
        assert_that!(error.unwrap_err()).is_equal_to(CredentialsError::EmptyPassword);
    }

    #[test]
    fn keeps_credentials_as_typed() {
        let credentials = validate_credentials("alice".to_owned(), "hunter2".to_owned()).unwrap();
        assert_that!(credentials.uname.as_str()).is_equal_to("alice");
        assert_that!(credentials.passwd.as_str()).is_equal_to("hunter2");
    }
}
