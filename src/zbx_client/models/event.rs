use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::de::{code_enum, i64_lenient, list_or_map, string_lenient};
use super::super::rpc::Decode;
use super::Record;

code_enum! {
    pub enum EventSource {
        Trigger = 0,
        Discovery = 1,
        AutoRegistration = 2,
    }
}

code_enum! {
    pub enum EventObject {
        Trigger = 0,
        DiscoveredHost = 1,
        DiscoveredService = 2,
        AutoRegHost = 3,
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Acknowledge {
    #[serde(rename = "acknowledgeid", default, deserialize_with = "string_lenient")]
    pub acknowledge_id: String,
    #[serde(rename = "userid", default, deserialize_with = "string_lenient")]
    pub user_id: String,
    #[serde(rename = "eventid", default, deserialize_with = "string_lenient")]
    pub event_id: String,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub clock: i64,
    #[serde(default, deserialize_with = "string_lenient")]
    pub message: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub alias: String,
}

/// `event` object, read-only.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Event {
    #[serde(rename = "eventid", default, deserialize_with = "string_lenient")]
    pub event_id: String,
    #[serde(default)]
    pub source: EventSource,
    #[serde(default)]
    pub object: EventObject,
    #[serde(rename = "objectid", default, deserialize_with = "string_lenient")]
    pub object_id: String,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub clock: i64,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub value: i64,
    #[serde(default, deserialize_with = "list_or_map")]
    pub acknowledges: Vec<Acknowledge>,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub ns: i64,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub value_changed: i64,
}

impl Event {
    /// `clock` plus `ns` as a UTC timestamp, `None` if out of range.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(self.ns).unwrap_or(0);
        DateTime::from_timestamp(self.clock, nanos)
    }
}

impl Record for Event {
    const API: &'static str = "event";
    const IDS_FIELD: &'static str = "eventids";
    const DECODE: Decode = Decode::Direct;

    fn id(&self) -> &str {
        &self.event_id
    }

    fn set_id(&mut self, id: String) {
        self.event_id = id;
    }
}
