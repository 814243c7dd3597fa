use chrono::NaiveDate;
use nameth::NamedEnumValues as _;
use nameth::nameth;
use tracing::info;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use super::board::board_state;
use super::state::BoardState;
use super::state::DisplayIndexError;
use super::utils::LOGIN_PAGE;
use super::utils::alert;
use super::utils::input_value;
use super::utils::navigate_to;
use crate::api::NewEventRequest;
use crate::api::client::events;
use crate::api::client::events::CreateEventError;
use crate::api::client::events::DeleteEventError;
use crate::api::client::login;
use crate::api::client::request::SendRequestError;
use crate::event_id::EventId;

/// Submits a new event from the `#event-name` and `#event-date` fields.
#[wasm_bindgen]
pub fn add_event() {
    let request = match validate_new_event(input_value("event-name"), input_value("event-date")) {
        Ok(request) => request,
        Err(error) => return alert(&format!("ERROR: {error}")),
    };
    info!("Add event name={} date={}", request.name, request.date);
    spawn_local(async move {
        match events::create(&request).await {
            Ok(confirmation) => alert(&confirmation.text),
            Err(CreateEventError::SendRequestError(SendRequestError::Unauthorized)) => {
                navigate_to(LOGIN_PAGE)
            }
            Err(error) => alert(&format!("ERROR: {error}")),
        }
    });
}

/// Deletes the event at the display index typed in `#event-index`.
///
/// The index is resolved against the last rendered snapshot; anything
/// that does not resolve is reported without submitting a request.
#[wasm_bindgen]
pub fn del_event() {
    let id = match delete_target(&input_value("event-index")) {
        Ok(id) => id,
        Err(error) => return alert(&format!("ERROR: {error}")),
    };
    info!("Delete event id={id}");
    spawn_local(async move {
        match events::delete(id).await {
            Ok(confirmation) => alert(&confirmation.text),
            Err(DeleteEventError::SendRequestError(SendRequestError::Unauthorized)) => {
                navigate_to(LOGIN_PAGE)
            }
            Err(error) => alert(&format!("ERROR: {error}")),
        }
    });
}

/// Closes the session and navigates to the URL the server answers with.
#[wasm_bindgen]
pub fn log_out() {
    spawn_local(async move {
        match login::logout().await {
            Ok(confirmation) => navigate_to(&confirmation.text),
            Err(error) => alert(&format!("ERROR: {error}")),
        }
    });
}

fn delete_target(input: &str) -> Result<EventId, DeleteInputError> {
    let display_index = input
        .trim()
        .parse::<usize>()
        .map_err(|_| DeleteInputError::NotANumber)?;
    let BoardState::Ready(snapshot) = board_state().get_value_untracked() else {
        return Err(DeleteInputError::NoSnapshot);
    };
    Ok(snapshot.resolve(display_index)?)
}

#[nameth]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DeleteInputError {
    #[error("[{n}] The display index is not a number", n = self.name())]
    NotANumber,

    #[error("[{n}] No events are loaded yet", n = self.name())]
    NoSnapshot,

    #[error("[{n}] {0}", n = self.name())]
    DisplayIndex(#[from] DisplayIndexError),
}

fn validate_new_event(name: String, date: String) -> Result<NewEventRequest, NewEventError> {
    if name.trim().is_empty() {
        return Err(NewEventError::EmptyName);
    }
    if date.trim().is_empty() {
        return Err(NewEventError::EmptyDate);
    }
    let () = validate_date(date.trim())?;
    Ok(NewEventRequest { name, date })
}

/// The server accepts `YYYY/MM/DD` or `MM/DD`; anything else is rejected
/// before a request is built.
fn validate_date(date: &str) -> Result<(), NewEventError> {
    let parts = date
        .split('/')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| NewEventError::WrongDateFormat)?;
    let date = match parts[..] {
        [year, month, day] => NaiveDate::from_ymd_opt(year as i32, month, day),
        // Without a year the server picks the next occurrence; 2020 is a
        // leap year so 02/29 stays valid.
        [month, day] => NaiveDate::from_ymd_opt(2020, month, day),
        _ => None,
    };
    match date {
        Some(_) => Ok(()),
        None => Err(NewEventError::WrongDateFormat),
    }
}

#[nameth]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NewEventError {
    #[error("[{n}] Name cannot be empty!", n = self.name())]
    EmptyName,

    #[error("[{n}] Date cannot be empty!", n = self.name())]
    EmptyDate,

    #[error("[{n}] Date format is wrong!", n = self.name())]
    WrongDateFormat,
}

#[cfg(test)]
mod tests {
    use fluent_asserter::prelude::*;

    use super::NewEventError;
    use super::validate_date;
    use super::validate_new_event;

    #[test]
    fn accepts_full_and_short_dates() {
        assert_that!(validate_date("2024/01/01")).is_equal_to(Ok(()));
        assert_that!(validate_date("12/31")).is_equal_to(Ok(()));
        assert_that!(validate_date("2/29")).is_equal_to(Ok(()));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_that!(validate_date("tomorrow"))
            .is_equal_to(Err(NewEventError::WrongDateFormat));
        assert_that!(validate_date("2024")).is_equal_to(Err(NewEventError::WrongDateFormat));
        assert_that!(validate_date("2024/13/01"))
            .is_equal_to(Err(NewEventError::WrongDateFormat));
        assert_that!(validate_date("2024/01/01/05"))
            .is_equal_to(Err(NewEventError::WrongDateFormat));
        assert_that!(validate_date("")).is_equal_to(Err(NewEventError::WrongDateFormat));
    }

    #[test]
    fn rejects_empty_fields() {
        let error = validate_new_event("".to_owned(), "2024/01/01".to_owned());
        assert_that!(error.unwrap_err()).is_equal_to(NewEventError::EmptyName);
        let error = validate_new_event("Party".to_owned(), "  ".to_owned());
        assert_that!(error.unwrap_err()).is_equal_to(NewEventError::EmptyDate);
    }

    #[test]
    fn keeps_the_fields_as_typed() {
        let request = validate_new_event("Party".to_owned(), "2024/01/01".to_owned()).unwrap();
        assert_that!(request.name.as_str()).is_equal_to("Party");
        assert_that!(request.date.as_str()).is_equal_to("2024/01/01");
    }
}
