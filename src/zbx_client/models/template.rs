use serde::{Deserialize, Serialize};

use super::super::de::string_lenient;
use super::super::rpc::Decode;
use super::{HostGroupId, HostId, Record, TemplateId, UserMacro};

/// `template` object.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Template {
    #[serde(
        rename = "templateid",
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub template_id: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub host: String,
    #[serde(
        default,
        deserialize_with = "string_lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<HostGroupId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<TemplateId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub macros: Vec<UserMacro>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<HostId>,
}

impl Record for Template {
    const API: &'static str = "template";
    const IDS_FIELD: &'static str = "templateids";
    const DECODE: Decode = Decode::Direct;

    fn id(&self) -> &str {
        &self.template_id
    }

    fn set_id(&mut self, id: String) {
        self.template_id = id;
    }
}
