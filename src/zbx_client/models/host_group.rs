use serde::{Deserialize, Serialize};

use super::super::de::{code_enum, string_lenient};
use super::super::rpc::Decode;
use super::Record;

code_enum! {
    pub enum InternalType {
        NotInternal = 0,
        Internal = 1,
    }
}

/// `hostgroup` object. `internal` is read-only.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct HostGroup {
    #[serde(
        rename = "groupid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub group_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(default, skip_serializing)]
    pub internal: InternalType,
}

impl Record for HostGroup {
    const API: &'static str = "hostgroup";
    const IDS_FIELD: &'static str = "groupids";
    const DECODE: Decode = Decode::Direct;

    fn id(&self) -> &str {
        &self.group_id
    }

    fn set_id(&mut self, id: String) {
        self.group_id = id;
    }
}
