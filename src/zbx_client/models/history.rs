use serde::{Deserialize, Serialize};

use super::super::de::{i64_lenient, string_lenient};
use super::super::rpc::Decode;
use super::Record;

/// One `history.get` row. Log fields are empty for numeric items.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct History {
    #[serde(rename = "itemid", default, deserialize_with = "string_lenient")]
    pub item_id: String,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub clock: i64,
    #[serde(default, deserialize_with = "string_lenient")]
    pub value: String,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub ns: i64,
    #[serde(default, deserialize_with = "string_lenient")]
    pub id: String,
    #[serde(rename = "logeventid", default, deserialize_with = "string_lenient")]
    pub log_event_id: String,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub severity: i64,
    #[serde(default, deserialize_with = "string_lenient")]
    pub source: String,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub timestamp: i64,
}

impl Record for History {
    const API: &'static str = "history";
    const IDS_FIELD: &'static str = "itemids";
    const DECODE: Decode = Decode::Direct;

    fn id(&self) -> &str {
        &self.item_id
    }

    fn set_id(&mut self, id: String) {
        self.item_id = id;
    }
}
