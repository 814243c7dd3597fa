use std::cell::Cell;
use std::time::Duration;

use nameth::NamedEnumValues as _;
use nameth::nameth;
use terrazzo::prelude::*;
use tracing::debug;
use tracing::warn;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

use super::state::BoardState;
use super::state::EventsSnapshot;
use super::utils::LOGIN_PAGE;
use super::utils::navigate_to;
use crate::api::client::events;
use crate::api::client::events::ListEventsError;
use crate::api::client::request::SendRequestError;

pub const POLL_PERIOD: Duration = Duration::from_secs(1);

/// The stop handle of the polling task.
///
/// Dropping it clears the interval timer; the board page forgets it so
/// the poll runs for the lifetime of the page.
pub struct EventsPoller {
    #[expect(unused)]
    closure: Closure<dyn Fn()>,
    handle: i32,
}

/// Polls the event list once per second and publishes each result as a
/// fresh snapshot.
///
/// A tick is skipped while the previous request is still in flight, so
/// polls never overlap.
pub fn start_polling(board: XSignal<BoardState>) -> Result<EventsPoller, PollerError> {
    let board = board.downgrade();
    let in_flight = Ptr::new(Cell::new(false));
    let version = Ptr::new(Cell::new(0_u64));
    let closure: Closure<dyn Fn()> = Closure::new(move || {
        let Some(board) = board.upgrade() else {
            warn!("The board signal is gone");
            return;
        };
        if in_flight.get() {
            debug!("The previous poll is still in flight");
            return;
        }
        in_flight.set(true);
        spawn_local(poll(board, in_flight.clone(), version.clone()));
    });

    let window = window().or_throw("window");
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            POLL_PERIOD.as_millis() as i32,
        )
        .map_err(PollerError::SetInterval)?;
    Ok(EventsPoller { closure, handle })
}

async fn poll(board: XSignal<BoardState>, in_flight: Ptr<Cell<bool>>, version: Ptr<Cell<u64>>) {
    let result = events::list().await;
    in_flight.set(false);
    match result {
        Ok(events) => {
            version.set(version.get() + 1);
            board.set(BoardState::Ready(EventsSnapshot::new(
                version.get(),
                events,
            )));
        }
        Err(error) => match classify(error) {
            PollFailure::Unauthorized => navigate_to(LOGIN_PAGE),
            PollFailure::Other(message) => board.set(BoardState::Failed(message)),
        },
    }
}

/// An expired session sends the whole page back to login; any other
/// failure is shown in place of the table.
#[derive(Debug, PartialEq, Eq)]
enum PollFailure {
    Unauthorized,
    Other(String),
}

fn classify(error: ListEventsError) -> PollFailure {
    match error {
        ListEventsError::SendRequestError(SendRequestError::Unauthorized) => {
            PollFailure::Unauthorized
        }
        error => PollFailure::Other(error.to_string()),
    }
}

impl Drop for EventsPoller {
    fn drop(&mut self) {
        debug!("Stop polling");
        let Some(window) = window() else { return };
        window.clear_interval_with_handle(self.handle);
    }
}

#[nameth]
#[derive(thiserror::Error, Debug)]
pub enum PollerError {
    #[error("[{n}] {0:?}", n = self.name())]
    SetInterval(JsValue),
}

#[cfg(test)]
mod tests {
    use fluent_asserter::prelude::*;

    use super::PollFailure;
    use super::classify;
    use crate::api::client::events::ListEventsError;
    use crate::api::client::request::SendRequestError;

    #[test]
    fn expired_session_redirects_to_login() {
        let error = ListEventsError::SendRequestError(SendRequestError::Unauthorized);
        assert_that!(classify(error)).is_equal_to(PollFailure::Unauthorized);
    }

    #[test]
    fn other_failures_keep_the_error_payload() {
        let error = ListEventsError::SendRequestError(SendRequestError::Message {
            message: "boom".to_owned(),
        });
        let PollFailure::Other(message) = classify(error) else {
            panic!("expected PollFailure::Other");
        };
        assert_that!(&message).contains("boom");

        let error = ListEventsError::MissingResponseBody;
        assert_that!(classify(error) == PollFailure::Unauthorized).is_equal_to(false);
    }
}
