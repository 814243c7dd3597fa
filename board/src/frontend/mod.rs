use std::sync::Mutex;

use terrazzo::prelude::*;
use tracing::info;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod actions;
pub mod board;
pub mod login;
pub mod poller;
pub mod state;
pub mod utils;

/// Entry point of the board page.
///
/// Mounts the event table on the `#events` container and starts the poller.
/// The action buttons stay in the static page and call the exported
/// handlers in [actions].
#[wasm_bindgen]
pub fn start() {
    terrazzo::setup_logging();
    info!("Starting the event board");

    let window = web_sys::window().or_throw("window");
    let document = window.document().or_throw("document");

    let container = document
        .get_element_by_id("events")
        .or_throw("#events not found");
    let container = XTemplate::new(Ptr::new(Mutex::new(LiveElement::new(container))));
    let consumers = board::events_table(container, board::board_state());
    std::mem::forget(consumers);

    let poller = poller::start_polling(board::board_state()).or_throw("events poller");
    std::mem::forget(poller);
}

/// Entry point of the login page.
///
/// The login form is static HTML; the buttons call the exported handlers
/// in [login].
#[wasm_bindgen]
pub fn start_login() {
    terrazzo::setup_logging();
    info!("Starting the login page");
}
