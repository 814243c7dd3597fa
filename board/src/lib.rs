mod api;
mod event_id;
mod frontend;
