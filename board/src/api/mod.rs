pub mod client;
pub mod shared;

pub use self::shared::event_schema::Confirmation;
pub use self::shared::event_schema::Credentials;
pub use self::shared::event_schema::EventRecord;
pub use self::shared::event_schema::NewEventRequest;

pub(crate) static APPLICATION_JSON: &str = "application/json";
