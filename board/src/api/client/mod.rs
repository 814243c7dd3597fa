pub mod events;
pub mod login;
pub mod request;
