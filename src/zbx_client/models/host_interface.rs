use serde::{Deserialize, Serialize};

use super::super::de::{code_enum, i64_as_string, i64_lenient, is_zero, string_lenient};
use super::super::rpc::Decode;
use super::Record;

code_enum! {
    pub enum InterfaceType {
        Agent = 1,
        Snmp = 2,
        Ipmi = 3,
        Jmx = 4,
    }
}

/// `hostinterface` object (2.0+ only).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct HostInterface {
    #[serde(
        rename = "interfaceid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub interface_id: String,
    #[serde(
        rename = "hostid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub host_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub dns: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub ip: String,
    #[serde(
        default,
        deserialize_with = "i64_lenient",
        serialize_with = "i64_as_string"
    )]
    pub main: i64,
    #[serde(default, deserialize_with = "string_lenient")]
    pub port: String,
    #[serde(rename = "type", default)]
    pub kind: InterfaceType,
    #[serde(
        rename = "useip",
        default,
        deserialize_with = "i64_lenient",
        serialize_with = "i64_as_string"
    )]
    pub use_ip: i64,
    #[serde(
        rename = "bulk",
        default,
        deserialize_with = "i64_lenient",
        serialize_with = "i64_as_string",
        skip_serializing_if = "is_zero"
    )]
    pub use_bulk_snmp: i64,
}

impl Record for HostInterface {
    const API: &'static str = "hostinterface";
    const IDS_FIELD: &'static str = "interfaceids";
    const DECODE: Decode = Decode::RawThenTyped;

    fn id(&self) -> &str {
        &self.interface_id
    }

    fn set_id(&mut self, id: String) {
        self.interface_id = id;
    }
}
