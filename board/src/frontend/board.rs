use std::cell::OnceCell;

use terrazzo::html;
use terrazzo::prelude::*;
use terrazzo::template;

use super::state::BoardState;
use super::state::EventRow;

stylance::import_crate_style!(style, "src/frontend/board.scss");

/// The signal holding the latest snapshot, written by the poller and
/// consumed by the table template and the delete handler.
pub fn board_state() -> XSignal<BoardState> {
    static STATE: BoardStateSignal = BoardStateSignal(OnceCell::new());
    STATE
        .0
        .get_or_init(|| XSignal::new("board", BoardState::Loading))
        .clone()
}

struct BoardStateSignal(OnceCell<XSignal<BoardState>>);
unsafe impl Sync for BoardStateSignal {}

/// Renders the board container from the latest snapshot.
///
/// One table row per event, in snapshot order; the displayed ID is the
/// 1-based position. A failed poll shows the error in place of the table.
#[html]
#[template]
pub fn events_table(#[signal] state: BoardState) -> XElement {
    match state {
        BoardState::Loading => div(class = style::placeholder),
        BoardState::Failed(error) => div(class = style::error, "ERROR: {error}"),
        BoardState::Ready(snapshot) => {
            let rows = snapshot.rows().into_iter().map(|row| {
                let EventRow {
                    display_index,
                    name,
                    date,
                    eta,
                } = row;
                tr(
                    key = format!("event-{display_index}"),
                    td("{display_index}"),
                    td("{name}"),
                    td("{date}"),
                    td("{eta}"),
                )
            });
            div(
                class = style::events,
                table(
                    tr(th("ID"), th("Name"), th("Date"), th("ETA")),
                    rows..,
                ),
            )
        }
    }
}
