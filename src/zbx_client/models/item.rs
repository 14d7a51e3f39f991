use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ZbxError;

use super::super::de::{code_enum, i64_as_string, i64_lenient, is_zero, string_lenient};
use super::super::rpc::Decode;
use super::{HostId, Record};

code_enum! {
    pub enum ItemType {
        ZabbixAgent = 0,
        SnmpV1Agent = 1,
        ZabbixTrapper = 2,
        SimpleCheck = 3,
        SnmpV2Agent = 4,
        ZabbixInternal = 5,
        SnmpV3Agent = 6,
        ZabbixAgentActive = 7,
        ZabbixAggregate = 8,
        WebItem = 9,
        ExternalCheck = 10,
        DatabaseMonitor = 11,
        IpmiAgent = 12,
        SshAgent = 13,
        TelnetAgent = 14,
        Calculated = 15,
        JmxAgent = 16,
    }
}

code_enum! {
    pub enum ValueType {
        Float = 0,
        Character = 1,
        Log = 2,
        Unsigned = 3,
        Text = 4,
    }
}

code_enum! {
    pub enum DataType {
        Decimal = 0,
        Octal = 1,
        Hexadecimal = 2,
        Boolean = 3,
    }
}

code_enum! {
    pub enum DeltaType {
        AsIs = 0,
        Speed = 1,
        Delta = 2,
    }
}

/// Application as inlined by `selectApplications`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AppInfo {
    #[serde(default)]
    pub hosts: Vec<HostId>,
    #[serde(rename = "applicationid", default, deserialize_with = "string_lenient")]
    pub application_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(rename = "templateid", default, deserialize_with = "string_lenient")]
    pub template_id: String,
}

/// `item` object.
///
/// `applications` is only filled by `item.get`. To link applications on
/// create or update, set `application_ids`; it is sent as `applications`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Item {
    #[serde(
        rename = "itemid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub item_id: String,
    #[serde(
        default,
        deserialize_with = "i64_lenient",
        serialize_with = "i64_as_string"
    )]
    pub delay: i64,
    #[serde(rename = "hostid", default, deserialize_with = "string_lenient")]
    pub host_id: String,
    #[serde(
        rename = "interfaceid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub interface_id: String,
    #[serde(rename = "key_", default, deserialize_with = "string_lenient")]
    pub key: String,
    #[serde(
        rename = "lastvalue",
        default,
        deserialize_with = "string_lenient",
        skip_serializing
    )]
    pub last_value: String,
    #[serde(
        rename = "lastclock",
        default,
        deserialize_with = "string_lenient",
        skip_serializing
    )]
    pub last_clock: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub units: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ItemType,
    #[serde(default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub delta: DeltaType,
    #[serde(default, deserialize_with = "string_lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "string_lenient", skip_serializing)]
    pub error: String,
    #[serde(
        default,
        deserialize_with = "i64_lenient",
        serialize_with = "i64_as_string",
        skip_serializing_if = "is_zero"
    )]
    pub history: i64,
    #[serde(
        default,
        deserialize_with = "i64_lenient",
        serialize_with = "i64_as_string",
        skip_serializing_if = "is_zero"
    )]
    pub trends: i64,
    #[serde(default, skip_serializing)]
    pub applications: Vec<AppInfo>,
    #[serde(skip)]
    pub application_ids: Vec<String>,
}

impl Item {
    /// Indexes items by `key_`. Duplicate keys are an error.
    ///
    /// # Errors
    ///
    /// Returns [`ZbxError::InvalidField`] naming the first duplicated key.
    pub fn by_key(items: &[Self]) -> Result<BTreeMap<&str, &Self>, ZbxError> {
        let mut out = BTreeMap::new();
        for item in items {
            if out.insert(item.key.as_str(), item).is_some() {
                return Err(ZbxError::InvalidField {
                    field: "key_",
                    message: format!("duplicate key {}", item.key),
                });
            }
        }
        Ok(out)
    }
}

impl Record for Item {
    const API: &'static str = "item";
    const IDS_FIELD: &'static str = "itemids";
    // The direct path dropped inlined `applications` entries, so items are
    // decoded from the raw fragment.
    const DECODE: Decode = Decode::RawThenTyped;

    fn id(&self) -> &str {
        &self.item_id
    }

    fn set_id(&mut self, id: String) {
        self.item_id = id;
    }
}
