use serde::{Deserialize, Serialize};

use super::super::de::{code_enum, i64_lenient, list_or_map, string_lenient};
use super::super::rpc::Decode;
use super::Record;

code_enum! {
    pub enum TriggerFlags {
        Plain = 0,
        Discovered = 4,
    }
}

code_enum! {
    pub enum TriggerPriority {
        NotClassified = 0,
        Information = 1,
        Warning = 2,
        Average = 3,
        High = 4,
        Disaster = 5,
    }
}

code_enum! {
    pub enum TriggerStatus {
        Enabled = 0,
        Disabled = 1,
    }
}

code_enum! {
    pub enum TriggerType {
        Single = 0,
        MultipleEvents = 1,
    }
}

code_enum! {
    /// 1.8 servers also report `2` ("unknown"); results from those servers are
    /// normalized to `Ok` with [`TriggerValueFlags::Unknown`].
    pub enum TriggerValue {
        Ok = 0,
        Problem = 1,
    }
}

code_enum! {
    pub enum TriggerValueFlags {
        UpToDate = 0,
        Unknown = 1,
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Function {
    #[serde(rename = "functionid", default, deserialize_with = "string_lenient")]
    pub function_id: String,
    #[serde(rename = "itemid", default, deserialize_with = "string_lenient")]
    pub item_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub function: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub parameter: String,
}

/// `trigger` object, read-only in this client.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Trigger {
    #[serde(rename = "triggerid", default, deserialize_with = "string_lenient")]
    pub trigger_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "list_or_map")]
    pub functions: Vec<Function>,
    #[serde(default, deserialize_with = "string_lenient")]
    pub expression: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub comments: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub error: String,
    #[serde(default)]
    pub flags: TriggerFlags,
    #[serde(rename = "lastchange", default, deserialize_with = "i64_lenient")]
    pub last_change: i64,
    #[serde(default)]
    pub priority: TriggerPriority,
    #[serde(default)]
    pub status: TriggerStatus,
    #[serde(rename = "templateid", default, deserialize_with = "string_lenient")]
    pub template_id: String,
    #[serde(rename = "type", default)]
    pub kind: TriggerType,
    #[serde(default, deserialize_with = "string_lenient")]
    pub url: String,
    #[serde(default)]
    pub value: TriggerValue,
    #[serde(default)]
    pub value_flags: TriggerValueFlags,
}

impl Record for Trigger {
    const API: &'static str = "trigger";
    const IDS_FIELD: &'static str = "triggerids";
    const DECODE: Decode = Decode::Direct;

    fn id(&self) -> &str {
        &self.trigger_id
    }

    fn set_id(&mut self, id: String) {
        self.trigger_id = id;
    }
}
