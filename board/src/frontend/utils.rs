use terrazzo::prelude::OrElseLog;
use wasm_bindgen::JsCast as _;
use web_sys::HtmlInputElement;

pub const LOGIN_PAGE: &str = "/login";

/// Navigates the whole page.
pub fn navigate_to(url: &str) {
    let window = web_sys::window().or_throw("window");
    let () = window.location().set_href(url).or_throw("set_href");
}

pub fn alert(message: &str) {
    let window = web_sys::window().or_throw("window");
    let () = window.alert_with_message(message).or_throw("alert");
}

/// Reads the value of an input field of the static page.
pub fn input_value(id: &str) -> String {
    let window = web_sys::window().or_throw("window");
    let document = window.document().or_throw("document");
    let input = document.get_element_by_id(id).or_throw("input field");
    let input: HtmlInputElement = input.dyn_into().or_throw("input field");
    input.value()
}
