use serde::{Deserialize, Serialize};

use super::super::de::string_lenient;
use super::super::rpc::Decode;
use super::Record;

/// `application` object (removed from Zabbix 5.4 onwards).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Application {
    #[serde(
        rename = "applicationid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub application_id: String,
    #[serde(rename = "hostid", default, deserialize_with = "string_lenient")]
    pub host_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(
        rename = "templateid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing
    )]
    pub template_id: String,
}

impl Record for Application {
    const API: &'static str = "application";
    const IDS_FIELD: &'static str = "applicationids";
    const DECODE: Decode = Decode::Direct;

    fn id(&self) -> &str {
        &self.application_id
    }

    fn set_id(&mut self, id: String) {
        self.application_id = id;
    }
}
