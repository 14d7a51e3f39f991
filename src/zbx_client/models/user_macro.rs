use serde::{Deserialize, Serialize};

use super::super::de::string_lenient;
use super::super::rpc::Decode;
use super::Record;

/// Host or global macro, e.g. `{$SNMP_COMMUNITY}`.
///
/// `id` is whichever of `globalmacroid`/`hostmacroid` the server filled.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UserMacro {
    #[serde(default, deserialize_with = "string_lenient", skip_serializing)]
    pub id: String,
    #[serde(
        rename = "globalmacroid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub global_macro_id: String,
    #[serde(
        rename = "hostmacroid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub host_macro_id: String,
    #[serde(
        rename = "hostid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub host_id: String,
    #[serde(rename = "macro", default, deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub value: String,
}

impl UserMacro {
    pub(crate) fn fill_id(&mut self) {
        if self.id.is_empty() {
            self.id = if self.host_macro_id.is_empty() {
                self.global_macro_id.clone()
            } else {
                self.host_macro_id.clone()
            };
        }
    }
}

impl Record for UserMacro {
    const API: &'static str = "usermacro";
    const IDS_FIELD: &'static str = "hostmacroids";
    const DECODE: Decode = Decode::RawThenTyped;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
