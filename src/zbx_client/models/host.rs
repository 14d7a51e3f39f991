use serde::{Deserialize, Serialize};

use super::super::de::{
    code_enum, i64_as_string, i64_lenient, is_zero, list_or_map, string_lenient,
};
use super::super::rpc::Decode;
use super::{HostGroupId, HostInterface, Record};

code_enum! {
    /// Agent availability as last seen by the server.
    pub enum Availability {
        Unknown = 0,
        Available = 1,
        Unavailable = 2,
    }
}

code_enum! {
    pub enum HostStatus {
        Monitored = 0,
        Unmonitored = 1,
    }
}

/// `host` object.
///
/// `groups` is always sent on create; `available` and `error` are read-only
/// and never sent. `dns`, `ip`, `useip` and `port` only exist on 1.8 servers,
/// which have no interface objects.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Host {
    #[serde(
        rename = "hostid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub host_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub host: String,
    #[serde(default, skip_serializing)]
    pub available: Availability,
    #[serde(default, deserialize_with = "string_lenient", skip_serializing)]
    pub error: String,
    #[serde(
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(default)]
    pub status: HostStatus,
    #[serde(
        rename = "proxy_hostid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub proxy_id: String,
    #[serde(default, deserialize_with = "list_or_map")]
    pub groups: Vec<HostGroupId>,
    #[serde(
        default,
        deserialize_with = "list_or_map",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub interfaces: Vec<HostInterface>,

    #[serde(
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub dns: String,
    #[serde(
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub ip: String,
    #[serde(
        rename = "useip",
        default,
        deserialize_with = "i64_lenient",
        serialize_with = "i64_as_string",
        skip_serializing_if = "is_zero"
    )]
    pub use_ip: i64,
    #[serde(
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub port: String,
}

impl Record for Host {
    const API: &'static str = "host";
    const IDS_FIELD: &'static str = "hostids";
    // Nested group and interface arrays come back empty through the direct path
    // on some servers, so results go through the raw fragment first.
    const DECODE: Decode = Decode::RawThenTyped;

    fn id(&self) -> &str {
        &self.host_id
    }

    fn set_id(&mut self, id: String) {
        self.host_id = id;
    }
}
