use serde::Deserialize;
use serde::Serialize;

use crate::event_id::EventId;

/// A server-owned event, fully replaced on every poll.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    #[serde(rename = "ID")]
    pub id: EventId,
    pub name: String,
    pub date: String,
    #[serde(rename = "ETA")]
    pub eta: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewEventRequest {
    pub name: String,
    pub date: String,
}

/// A username/password pair, held only long enough to build one request.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub uname: String,
    pub passwd: String,
}

/// The server's acknowledgement for create/delete/logout requests.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Confirmation {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use fluent_asserter::prelude::*;

    use super::Confirmation;
    use super::Credentials;
    use super::EventRecord;

    #[test]
    fn event_record_wire_format() {
        let events: Vec<EventRecord> =
            serde_json::from_str(r#"[{"ID":7,"name":"Party","date":"2024/01/01","ETA":"noon"}]"#)
                .unwrap();
        assert_that!(events.len()).is_equal_to(1);
        assert_that!(events[0].id).is_equal_to(7.into());
        assert_that!(events[0].name.as_str()).is_equal_to("Party");
        assert_that!(events[0].date.as_str()).is_equal_to("2024/01/01");
        assert_that!(events[0].eta.as_str()).is_equal_to("noon");
    }

    #[test]
    fn credentials_wire_format() {
        let credentials = Credentials {
            uname: "alice".to_owned(),
            passwd: "hunter2".to_owned(),
        };
        let json = serde_json::to_string(&credentials).unwrap();
        assert_that!(json).is_equal_to(r#"{"uname":"alice","passwd":"hunter2"}"#.to_owned());
    }

    #[test]
    fn confirmation_wire_format() {
        let confirmation: Confirmation = serde_json::from_str(r#"{"text":"/login"}"#).unwrap();
        assert_that!(confirmation.text).is_equal_to("/login".to_owned());
    }
}
