pub mod event_schema;
